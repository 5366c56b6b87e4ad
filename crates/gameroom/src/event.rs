use ssk_board::Player;
use ssk_gameplay::Game;

/// Events published by a room to its connected slots.
#[derive(Clone, Debug)]
pub enum Event {
    /// Slot assignment, sent only to the joining connection.
    Assignment { player: Player },
    /// Full session snapshot, broadcast on every state change.
    Update { game: Game },
    /// A request was rejected, sent only to the originating connection.
    /// The pre-request snapshot is still in force.
    Rejection { reason: String },
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Event::Assignment { player } => write!(f, "you are P{}", player),
            Event::Update { game } => write!(
                f,
                "{} move {} ({})",
                game.status(),
                game.move_count(),
                ssk_core::Unique::id(game),
            ),
            Event::Rejection { reason } => write!(f, "rejected: {}", reason),
        }
    }
}

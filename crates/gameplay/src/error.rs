/// Rule violations surfaced by the resolver.
/// All are recoverable: the pre-move snapshot is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulesError {
    /// The requested row has no empty cell.
    IllegalMove,
    /// The move names a player other than the current mover.
    NotYourTurn,
    /// The session is not accepting moves (waiting or finished).
    GameOver,
    /// Both player slots are already bound.
    AlreadyFull,
}

impl std::fmt::Display for RulesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalMove => write!(f, "illegal move: row is full"),
            Self::NotYourTurn => write!(f, "not your turn"),
            Self::GameOver => write!(f, "game is not active"),
            Self::AlreadyFull => write!(f, "game already has two players"),
        }
    }
}

impl std::error::Error for RulesError {}

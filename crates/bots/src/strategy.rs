use ssk_board::Board;
use ssk_board::Move;
use ssk_board::Player;
use ssk_gameplay::Difficulty;

/// Raised when a strategy is consulted on a full board.
/// Unreachable behind correct status checks: a full board is a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoLegalMoves;

impl std::fmt::Display for NoLegalMoves {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "no legal moves: board is full")
    }
}

impl std::error::Error for NoLegalMoves {}

/// Move selection policy for one bot.
///
/// Implementations must return a currently-legal move whenever one exists.
/// Selection is synchronous: it runs inside the session's critical section,
/// so implementations bound their own computation.
pub trait Strategy: Send {
    fn choose(&mut self, board: &Board, player: Player) -> Result<Move, NoLegalMoves>;
}

/// Routes a difficulty tier to its strategy implementation.
pub fn for_difficulty(difficulty: Difficulty) -> Box<dyn Strategy> {
    match difficulty {
        Difficulty::Easy => Box::new(crate::Easy::new()),
        Difficulty::Medium => Box::new(crate::Medium::new()),
        Difficulty::Hard => Box::new(crate::Hard),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssk_board::Side;

    #[test]
    fn every_tier_moves_on_an_empty_board() {
        let board = Board::default();
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let mv = for_difficulty(difficulty)
                .choose(&board, Player::Two)
                .unwrap();
            assert!(board.with(mv).is_some());
        }
    }

    #[test]
    fn full_board_yields_no_move() {
        // Alternating fills by row parity leave no legal move; the winner
        // that emerges along the way is irrelevant to the strategies.
        let mut board = Board::default();
        for row in 0..ssk_core::SIZE {
            for _ in 0..ssk_core::SIZE {
                let player = match row % 2 {
                    0 => Player::One,
                    _ => Player::Two,
                };
                board = board.with(Move::new(row, Side::Left, player)).unwrap();
            }
        }
        assert!(board.is_full());
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(
                for_difficulty(difficulty).choose(&board, Player::One),
                Err(NoLegalMoves)
            );
        }
    }
}

use super::NoLegalMoves;
use super::Strategy;
use rand::prelude::*;
use ssk_board::Board;
use ssk_board::Move;
use ssk_board::Player;

/// Uniformly-random choice among all currently-legal (row, side) pairs.
pub struct Easy {
    rng: SmallRng,
}

impl Easy {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }
    /// Fixed-seed constructor for reproducible tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for Easy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for Easy {
    fn choose(&mut self, board: &Board, player: Player) -> Result<Move, NoLegalMoves> {
        board
            .moves()
            .choose(&mut self.rng)
            .map(|&(row, side)| Move::new(row, side, player))
            .ok_or(NoLegalMoves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssk_board::Side;
    use ssk_core::SIZE;

    #[test]
    fn forced_cell_is_always_taken() {
        // Every row full except row 4, which has a single empty cell; both
        // remaining (row, side) pairs land the piece there.
        let mut board = Board::default();
        for row in 0..SIZE {
            let fills = if row == 4 { SIZE - 1 } else { SIZE };
            for i in 0..fills {
                let player = match (row + i) % 2 {
                    0 => Player::One,
                    _ => Player::Two,
                };
                board = board.with(Move::new(row, Side::Left, player)).unwrap();
            }
        }
        let open = board.target(4, Side::Left).unwrap();
        for seed in 0..32 {
            let mv = Easy::seeded(seed).choose(&board, Player::Two).unwrap();
            assert_eq!(mv.row, 4);
            assert_eq!(board.target(mv.row, mv.side), Some(open));
        }
    }

    #[test]
    fn chosen_moves_are_always_legal() {
        let mut easy = Easy::seeded(7);
        for _ in 0..64 {
            let board = <Board as ssk_core::Arbitrary>::random();
            if board.is_full() {
                continue;
            }
            let mv = easy.choose(&board, Player::One).unwrap();
            assert!(board.with(mv).is_some());
        }
    }
}

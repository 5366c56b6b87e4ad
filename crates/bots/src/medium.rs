use super::Easy;
use super::NoLegalMoves;
use super::Strategy;
use ssk_board::Board;
use ssk_board::Move;
use ssk_board::Player;

/// One-ply lookahead: complete an own four-in-a-row, else block an immediate
/// opponent win, else fall back to the random policy.
pub struct Medium {
    fallback: Easy,
}

impl Medium {
    pub fn new() -> Self {
        Self {
            fallback: Easy::new(),
        }
    }
    /// Fixed-seed constructor for reproducible tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            fallback: Easy::seeded(seed),
        }
    }
    /// First (row, side) whose landing cell completes a run for `probe`.
    /// Scanned in the board's move enumeration order, so repeated calls on
    /// the same position agree.
    fn winning(board: &Board, probe: Player) -> Option<(usize, ssk_board::Side)> {
        board.moves().into_iter().find(|&(row, side)| {
            board
                .with(Move::new(row, side, probe))
                .and_then(|next| next.winner())
                == Some(probe)
        })
    }
}

impl Default for Medium {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for Medium {
    fn choose(&mut self, board: &Board, player: Player) -> Result<Move, NoLegalMoves> {
        if let Some((row, side)) = Self::winning(board, player) {
            log::debug!("[medium] taking winning move ({}, {})", row, side);
            return Ok(Move::new(row, side, player));
        }
        if let Some((row, side)) = Self::winning(board, player.other()) {
            log::debug!("[medium] blocking at ({}, {})", row, side);
            return Ok(Move::new(row, side, player));
        }
        self.fallback.choose(board, player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssk_board::Side;

    fn stacked(rows: &[(usize, Player, usize)]) -> Board {
        rows.iter().fold(Board::default(), |board, &(row, player, n)| {
            (0..n).fold(board, |b, _| {
                b.with(Move::new(row, Side::Left, player)).unwrap()
            })
        })
    }

    #[test]
    fn immediate_win_beats_randomness() {
        let board = stacked(&[(0, Player::Two, 3), (5, Player::One, 2)]);
        for seed in 0..32 {
            let mv = Medium::seeded(seed).choose(&board, Player::Two).unwrap();
            assert_eq!(mv, Move::new(0, Side::Left, Player::Two));
        }
    }

    #[test]
    fn win_is_preferred_over_block() {
        let board = stacked(&[(0, Player::Two, 3), (6, Player::One, 3)]);
        let mv = Medium::seeded(0).choose(&board, Player::Two).unwrap();
        assert_eq!(mv, Move::new(0, Side::Left, Player::Two));
    }

    #[test]
    fn opponent_threat_is_blocked() {
        let board = stacked(&[(2, Player::One, 3)]);
        for seed in 0..32 {
            let mv = Medium::seeded(seed).choose(&board, Player::Two).unwrap();
            assert_eq!(mv, Move::new(2, Side::Left, Player::Two));
        }
    }

    #[test]
    fn quiet_position_falls_back_to_a_legal_move() {
        let board = stacked(&[(3, Player::One, 1)]);
        let mv = Medium::seeded(9).choose(&board, Player::Two).unwrap();
        assert!(board.with(mv).is_some());
    }
}

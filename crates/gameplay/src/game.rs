use super::Difficulty;
use super::Mode;
use super::RulesError;
use super::Status;
use ssk_board::Board;
use ssk_board::Move;
use ssk_board::Player;
use ssk_core::ID;
use ssk_core::Unique;

/// Authoritative record of one session.
///
/// Transitions are value-producing: [`Game::apply`] and
/// [`Game::assign_player2`] leave `self` untouched and return the successor
/// snapshot, so a failed transition can never leave the session
/// half-updated.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Game {
    id: ID<Game>,
    board: Board,
    current_player: Player,
    status: Status,
    winner: Option<Player>,
    mode: Mode,
    difficulty: Difficulty,
    player1_name: String,
    player2_name: Option<String>,
    history: Vec<Move>,
}

impl Game {
    /// Opens a new session. Pvp sessions wait for a second player; pva
    /// sessions bind the bot to slot 2 immediately and start active.
    pub fn create(
        mode: Mode,
        difficulty: Difficulty,
        player1_name: String,
        player2_name: Option<String>,
    ) -> Self {
        let (status, player2_name) = match mode {
            Mode::Pvp => (Status::Waiting, None),
            Mode::Pva => (
                Status::Active,
                Some(player2_name.unwrap_or_else(|| format!("AI ({})", difficulty))),
            ),
        };
        Self {
            id: ID::default(),
            board: Board::default(),
            current_player: Player::One,
            status,
            winner: None,
            mode,
            difficulty,
            player1_name,
            player2_name,
            history: Vec::new(),
        }
    }

    /// Resolves one move: status gate, turn gate, legality gate, then the
    /// terminal check. The mover only flips when the game continues.
    pub fn apply(&self, mv: Move) -> Result<Self, RulesError> {
        if self.status != Status::Active {
            return Err(RulesError::GameOver);
        }
        if mv.player != self.current_player {
            return Err(RulesError::NotYourTurn);
        }
        let board = self.board.with(mv).ok_or(RulesError::IllegalMove)?;
        let mut next = self.clone();
        next.board = board;
        next.history.push(mv);
        match board.winner() {
            Some(player) => {
                next.winner = Some(player);
                next.status = Status::Finished;
            }
            None if board.is_full() => {
                next.winner = None;
                next.status = Status::Finished;
            }
            None => {
                next.current_player = self.current_player.other();
            }
        }
        Ok(next)
    }

    /// Binds the second human player and activates the session.
    /// Valid only while waiting.
    pub fn assign_player2(&self, name: String) -> Result<Self, RulesError> {
        if self.status != Status::Waiting {
            return Err(RulesError::AlreadyFull);
        }
        let mut next = self.clone();
        next.player2_name = Some(name);
        next.status = Status::Active;
        Ok(next)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn current_player(&self) -> Player {
        self.current_player
    }
    pub fn status(&self) -> Status {
        self.status
    }
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }
    pub fn mode(&self) -> Mode {
        self.mode
    }
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
    pub fn player1_name(&self) -> &str {
        &self.player1_name
    }
    pub fn player2_name(&self) -> Option<&str> {
        self.player2_name.as_deref()
    }
    pub fn history(&self) -> &[Move] {
        &self.history
    }
    pub fn move_count(&self) -> usize {
        self.history.len()
    }
}

impl Unique for Game {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssk_board::Side;
    use ssk_core::SIZE;

    fn pvp() -> Game {
        Game::create(Mode::Pvp, Difficulty::Easy, "Alice".into(), None)
            .assign_player2("Bob".into())
            .unwrap()
    }

    #[test]
    fn pvp_sessions_wait_for_player_two() {
        let game = Game::create(Mode::Pvp, Difficulty::Easy, "Alice".into(), None);
        assert_eq!(game.status(), Status::Waiting);
        assert_eq!(game.current_player(), Player::One);
        assert_eq!(game.player2_name(), None);
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn pva_sessions_start_active_with_bot_bound() {
        let game = Game::create(Mode::Pva, Difficulty::Hard, "Alice".into(), None);
        assert_eq!(game.status(), Status::Active);
        assert_eq!(game.player2_name(), Some("AI (hard)"));
    }

    #[test]
    fn assign_player2_activates_once() {
        let game = Game::create(Mode::Pvp, Difficulty::Easy, "Alice".into(), None);
        let game = game.assign_player2("Bob".into()).unwrap();
        assert_eq!(game.status(), Status::Active);
        assert_eq!(game.player2_name(), Some("Bob"));
        assert_eq!(
            game.assign_player2("Carol".into()),
            Err(RulesError::AlreadyFull)
        );
    }

    #[test]
    fn no_moves_before_activation() {
        let game = Game::create(Mode::Pvp, Difficulty::Easy, "Alice".into(), None);
        let mv = Move::new(0, Side::Left, Player::One);
        assert_eq!(game.apply(mv), Err(RulesError::GameOver));
    }

    #[test]
    fn wrong_mover_is_rejected_without_state_change() {
        let game = pvp();
        let before = game.clone();
        let mv = Move::new(0, Side::Left, Player::Two);
        assert_eq!(game.apply(mv), Err(RulesError::NotYourTurn));
        assert_eq!(game, before);
    }

    #[test]
    fn full_row_is_rejected() {
        let mut game = pvp();
        for _ in 0..SIZE {
            let mv = Move::new(3, Side::Left, game.current_player());
            game = game.apply(mv).unwrap();
        }
        let mv = Move::new(3, Side::Right, game.current_player());
        assert_eq!(game.apply(mv), Err(RulesError::IllegalMove));
    }

    #[test]
    fn movers_alternate_strictly_until_finished() {
        let mut game = pvp();
        let mut expected = Player::One;
        for row in [0, 1, 2, 3, 0, 1, 2] {
            assert_eq!(game.current_player(), expected);
            game = game
                .apply(Move::new(row, Side::Left, game.current_player()))
                .unwrap();
            if game.status() == Status::Finished {
                break;
            }
            expected = expected.other();
        }
    }

    #[test]
    fn alternating_end_fills_stack_inward() {
        // P1 L, P2 R, P1 L, P2 R on row 0.
        let mut game = pvp();
        for side in [Side::Left, Side::Right, Side::Left, Side::Right] {
            game = game
                .apply(Move::new(0, side, game.current_player()))
                .unwrap();
        }
        let row: Vec<_> = (0..SIZE).map(|col| game.board().cell(0, col)).collect();
        assert_eq!(
            row,
            vec![
                Some(Player::One),
                Some(Player::One),
                None,
                None,
                None,
                Some(Player::Two),
                Some(Player::Two),
            ]
        );
        assert_eq!(game.move_count(), 4);
    }

    #[test]
    fn four_in_a_row_finishes_the_game() {
        // P1 stacks row 0, P2 stacks row 1; P1 completes the run first.
        let mut game = pvp();
        for _ in 0..3 {
            game = game.apply(Move::new(0, Side::Left, Player::One)).unwrap();
            game = game.apply(Move::new(1, Side::Left, Player::Two)).unwrap();
        }
        let game = game.apply(Move::new(0, Side::Left, Player::One)).unwrap();
        assert_eq!(game.status(), Status::Finished);
        assert_eq!(game.winner(), Some(Player::One));
        assert_eq!(game.current_player(), Player::One);
        assert_eq!(
            game.apply(Move::new(2, Side::Left, Player::Two)),
            Err(RulesError::GameOver)
        );
    }

    #[test]
    fn full_board_without_run_is_a_draw() {
        // Winnerless cyclic fill, with the last cell left open for the
        // closing move.
        let pattern = [
            [1, 1, 2, 1, 2, 2, 1],
            [2, 1, 2, 2, 1, 1, 1],
            [2, 2, 1, 1, 1, 2, 1],
            [1, 1, 1, 2, 1, 2, 2],
            [1, 2, 1, 2, 2, 1, 1],
            [1, 2, 2, 1, 1, 1, 2],
            [2, 1, 1, 1, 2, 1, 2],
        ];
        let mut board = Board::default();
        for row in 0..SIZE {
            for col in 0..SIZE {
                if (row, col) == (SIZE - 1, SIZE - 1) {
                    continue;
                }
                let player = Player::try_from(pattern[row][col]).unwrap();
                board = board
                    .with(Move::new(row, Side::Left, player))
                    .unwrap();
            }
        }
        let game = Game {
            board,
            current_player: Player::Two,
            ..pvp()
        };
        let game = game
            .apply(Move::new(SIZE - 1, Side::Right, Player::Two))
            .unwrap();
        assert_eq!(game.status(), Status::Finished);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn snapshots_round_trip_through_json() {
        let mut game = pvp();
        game = game.apply(Move::new(2, Side::Right, Player::One)).unwrap();
        let json = serde_json::to_string(&game).unwrap();
        let back: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(game, back);
    }
}

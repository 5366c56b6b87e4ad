use super::Cell;
use super::Move;
use super::Player;
use super::Side;
use ssk_core::Arbitrary;
use ssk_core::CONNECT;
use ssk_core::Col;
use ssk_core::Row;
use ssk_core::SIZE;

/// Scan directions for win detection: horizontal, vertical, both diagonals.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// 7x7 sidestacker grid. Pieces enter a row from either end and occupy the
/// outermost empty cell on that side; no cell is ever overwritten.
///
/// Cheap to copy, so speculative placement during AI search works on value
/// copies rather than undo stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Board {
    grid: [[Cell; SIZE]; SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            grid: [[None; SIZE]; SIZE],
        }
    }
}

impl Board {
    /// Cell contents at (row, col).
    pub fn cell(&self, row: Row, col: Col) -> Cell {
        self.grid[row][col]
    }
    /// The column a piece entering `row` from `side` would land in.
    /// None when the row is full.
    pub fn target(&self, row: Row, side: Side) -> Option<Col> {
        match side {
            Side::Left => (0..SIZE).find(|&col| self.grid[row][col].is_none()),
            Side::Right => (0..SIZE).rev().find(|&col| self.grid[row][col].is_none()),
        }
    }
    /// Sides a piece may currently enter `row` from.
    /// Both reduce to "row not full"; the side only picks the landing cell.
    pub fn legal_sides(&self, row: Row) -> Vec<Side> {
        Side::ALL
            .into_iter()
            .filter(|&side| self.target(row, side).is_some())
            .collect()
    }
    /// All currently-legal (row, side) pairs, row-major, Left before Right.
    pub fn moves(&self) -> Vec<(Row, Side)> {
        (0..SIZE)
            .flat_map(|row| self.legal_sides(row).into_iter().map(move |side| (row, side)))
            .collect()
    }
    /// Applies a placement, returning the successor board.
    /// None when the row is full.
    pub fn with(&self, mv: Move) -> Option<Self> {
        let col = self.target(mv.row, mv.side)?;
        let mut next = *self;
        next.grid[mv.row][col] = Some(mv.player);
        Some(next)
    }
    /// True when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.grid.iter().flatten().all(Option::is_some)
    }
    /// The player holding a contiguous run of four, if any.
    pub fn winner(&self) -> Option<Player> {
        (0..SIZE)
            .flat_map(|row| (0..SIZE).map(move |col| (row, col)))
            .find_map(|(row, col)| {
                let player = self.grid[row][col]?;
                DIRECTIONS
                    .iter()
                    .any(|&dir| self.run(row, col, dir) >= CONNECT)
                    .then_some(player)
            })
    }
    /// Length of the same-player run starting at (row, col) along `dir`.
    fn run(&self, row: Row, col: Col, (dr, dc): (isize, isize)) -> usize {
        let player = self.grid[row][col];
        (0..)
            .map(|i| (row as isize + dr * i, col as isize + dc * i))
            .take_while(|&(r, c)| (0..SIZE as isize).contains(&r) && (0..SIZE as isize).contains(&c))
            .take_while(|&(r, c)| self.grid[r as usize][c as usize] == player)
            .count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.grid {
            for cell in row {
                match cell {
                    Some(Player::One) => write!(f, "X ")?,
                    Some(Player::Two) => write!(f, "O ")?,
                    None => write!(f, "_ ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Arbitrary for Board {
    fn random() -> Self {
        use rand::prelude::*;
        let mut rng = rand::rng();
        let mut board = Self::default();
        let mut player = Player::One;
        for _ in 0..rng.random_range(0..SIZE * SIZE) {
            if board.winner().is_some() {
                break;
            }
            let Some(&(row, side)) = board.moves().choose(&mut rng) else {
                break;
            };
            board = board.with(Move::new(row, side, player)).unwrap();
            player = player.other();
        }
        board
    }
}

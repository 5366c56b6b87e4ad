use super::Player;
use super::Side;
use ssk_core::Row;

/// One placement request: which row, which end, and who is placing.
/// Ephemeral — validated against a board and either applied or discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Move {
    pub row: Row,
    pub side: Side,
    pub player: Player,
}

impl Move {
    pub fn new(row: Row, side: Side, player: Player) -> Self {
        Self { row, side, player }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{} ({}, {})", self.player, self.row, self.side)
    }
}

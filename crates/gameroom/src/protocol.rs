use super::ClientMessage;
use super::Event;
use super::ServerMessage;
use ssk_board::Move;
use ssk_board::Player;
use ssk_board::Side;
use ssk_core::Row;
use ssk_core::SIZE;

/// Errors that can occur during protocol operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    InvalidMessage(String),
    InvalidMove(String),
}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMessage(s) => write!(f, "invalid message: {}", s),
            Self::InvalidMove(s) => write!(f, "invalid move: {}", s),
        }
    }
}

impl std::error::Error for ProtocolError {}

/// Handles wire parsing and Event to ServerMessage conversion.
/// Centralizes the protocol layer between internal events and wire format.
pub struct Protocol;

impl Protocol {
    /// Parses an inbound JSON payload. Unknown `action` tags are an error.
    pub fn decode(s: &str) -> Result<ClientMessage, ProtocolError> {
        serde_json::from_str(s).map_err(|e| ProtocolError::InvalidMessage(e.to_string()))
    }
    /// Converts an internal event to its wire representation.
    pub fn encode(event: &Event) -> ServerMessage {
        match event {
            Event::Assignment { player } => ServerMessage::assignment(*player),
            Event::Update { game } => ServerMessage::update(game.clone()),
            Event::Rejection { reason } => ServerMessage::error(reason),
        }
    }
    /// Validates wire move fields into a [`Move`].
    pub fn placement(row: Row, side: Side, player: u8) -> Result<Move, ProtocolError> {
        let player = Player::try_from(player)
            .map_err(|n| ProtocolError::InvalidMove(format!("no such player {}", n)))?;
        match row < SIZE {
            true => Ok(Move::new(row, side, player)),
            false => Err(ProtocolError::InvalidMove(format!(
                "row {} out of range",
                row
            ))),
        }
    }
}

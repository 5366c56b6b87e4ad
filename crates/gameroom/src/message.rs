use super::Identity;
use ssk_board::Player;
use ssk_board::Side;
use ssk_gameplay::Game;

/// Messages sent from client to server, tagged by `action`.
/// Unknown actions fail to parse; nothing is silently ignored.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ClientMessage {
    /// The session creator connecting to claim slot 1.
    CreatorJoin {
        player_name: String,
        player_id: Identity,
    },
    /// A second player connecting to claim slot 2.
    JoinGame {
        player_name: String,
        player_id: Identity,
    },
    /// A previously-seen identity reconnecting to its slot.
    RejoinGame { player_id: Identity },
    /// A move request. The claimed `player` number is checked against the
    /// identity's server-held slot binding.
    MakeMove {
        row: usize,
        side: Side,
        player: u8,
        player_id: Identity,
    },
}

/// Messages sent from server to client, tagged by `type`.
#[derive(Clone, Debug, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Slot assignment for the receiving connection.
    PlayerAssignment { player_number: u8 },
    /// Full session snapshot after a state change.
    GameUpdate { game_data: Game },
    /// The previous request was rejected.
    Error { message: String },
}

impl ServerMessage {
    pub fn assignment(player: Player) -> Self {
        Self::PlayerAssignment {
            player_number: player.number(),
        }
    }
    pub fn update(game: Game) -> Self {
        Self::GameUpdate { game_data: game }
    }
    pub fn error(message: &str) -> Self {
        Self::Error {
            message: message.to_string(),
        }
    }
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("serialize server message")
    }
}

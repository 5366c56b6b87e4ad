use ssk_core::ID;
use ssk_gameplay::Game;

/// Store failures. Recoverable; the session in memory is unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// No session recorded under the given id.
    NotFound,
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "session not found"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Durable snapshot storage for sessions, keyed by session id.
#[async_trait::async_trait]
pub trait SessionStore: Send + Sync {
    /// Loads the current snapshot of a session.
    async fn load(&self, id: ID<Game>) -> Result<Game, StoreError>;
    /// Writes a snapshot, replacing any previous one.
    async fn save(&self, id: ID<Game>, game: &Game) -> Result<(), StoreError>;
    /// Forgets a session entirely.
    async fn delete(&self, id: ID<Game>) -> Result<(), StoreError>;
}

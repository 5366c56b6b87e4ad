use ssk_bots::NoLegalMoves;
use ssk_gameplay::RulesError;
use ssk_store::StoreError;

/// Coordinator-level failures. Every variant is recoverable and leaves the
/// session snapshot untouched; the coordinator reports it back to the
/// originating connection as a rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A third distinct identity tried to claim a slot.
    SessionFull,
    /// Rejoin attempt by an identity this session has never seen.
    Unrecognized,
    /// Move submitted by an identity without a slot.
    NotJoined,
    /// The rules rejected the transition.
    Rules(RulesError),
    /// The bot was consulted on a full board.
    Bot(NoLegalMoves),
    /// The session store failed.
    Store(StoreError),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SessionFull => write!(f, "session already has two players"),
            Self::Unrecognized => write!(f, "unrecognized identity"),
            Self::NotJoined => write!(f, "identity has no slot in this session"),
            Self::Rules(e) => write!(f, "{}", e),
            Self::Bot(e) => write!(f, "{}", e),
            Self::Store(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<RulesError> for SessionError {
    fn from(e: RulesError) -> Self {
        Self::Rules(e)
    }
}
impl From<NoLegalMoves> for SessionError {
    fn from(e: NoLegalMoves) -> Self {
        Self::Bot(e)
    }
}
impl From<StoreError> for SessionError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

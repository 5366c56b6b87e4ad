use ssk_core::Arbitrary;

/// The end of a row a piece enters from. Pieces slide inward to the
/// outermost empty cell on this side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Side {
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "R")]
    Right,
}

impl Side {
    pub const ALL: [Self; 2] = [Self::Left, Self::Right];
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "L"),
            Self::Right => write!(f, "R"),
        }
    }
}

impl TryFrom<&str> for Side {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "L" => Ok(Self::Left),
            "R" => Ok(Self::Right),
            s => Err(s.to_string()),
        }
    }
}

impl Arbitrary for Side {
    fn random() -> Self {
        use rand::prelude::*;
        if rand::rng().random_bool(0.5) {
            Self::Left
        } else {
            Self::Right
        }
    }
}

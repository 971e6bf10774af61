use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Access levels understood by the guard, ordered by privilege.
///
/// `NotLogin` is deliberately overloaded: on a route it means "public, no
/// login needed", on a user it means "anonymous". Comparison always goes
/// through [`AccessLevel::rank`] so the ordering is explicit rather than
/// relying on variant declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessLevel {
    #[serde(rename = "notLogin")]
    NotLogin,
    #[serde(rename = "user")]
    User,
    #[serde(rename = "admin")]
    Admin,
}

impl AccessLevel {
    /// Numeric privilege rank. Higher rank satisfies lower requirements.
    pub fn rank(&self) -> u8 {
        match self {
            AccessLevel::NotLogin => 0,
            AccessLevel::User => 1,
            AccessLevel::Admin => 2,
        }
    }

    /// Whether a holder of this level satisfies the given requirement.
    pub fn satisfies(&self, required: AccessLevel) -> bool {
        self.rank() >= required.rank()
    }

    /// The wire name used by the backend and in route rules.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::NotLogin => "notLogin",
            AccessLevel::User => "user",
            AccessLevel::Admin => "admin",
        }
    }
}

impl PartialOrd for AccessLevel {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AccessLevel {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessLevel {
    type Err = UnknownAccessLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "notLogin" => Ok(AccessLevel::NotLogin),
            "user" => Ok(AccessLevel::User),
            "admin" => Ok(AccessLevel::Admin),
            other => Err(UnknownAccessLevel(other.to_string())),
        }
    }
}

/// Error returned when parsing an unrecognized access level name.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown access level: {0}")]
pub struct UnknownAccessLevel(pub String);

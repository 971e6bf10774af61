use crate::access::level::AccessLevel;
use serde::{Deserialize, Serialize};

/// The logged-in user as reported by the backend session endpoint.
///
/// Field names match the backend's JSON payload. Instances are produced by
/// a session provider and replaced wholesale on every refresh; nothing in
/// this crate mutates one field-by-field. The anonymous state is a
/// `LoginUser` with no role assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUser {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub user_avatar: Option<String>,
    #[serde(default, rename = "userRole")]
    pub role: Option<AccessLevel>,
}

impl LoginUser {
    pub fn new(id: Option<u64>, user_name: Option<String>, role: Option<AccessLevel>) -> Self {
        Self {
            id,
            user_name,
            user_avatar: None,
            role,
        }
    }

    /// The explicit "not logged in" state used before any successful fetch
    /// and after a failed one.
    pub fn anonymous() -> Self {
        Self {
            id: None,
            user_name: None,
            user_avatar: None,
            role: None,
        }
    }

    /// True when this user carries a usable, non-sentinel role.
    ///
    /// A user whose role is the `notLogin` sentinel is treated the same as
    /// a user with no role at all.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.role, Some(role) if role != AccessLevel::NotLogin)
    }
}

impl Default for LoginUser {
    fn default() -> Self {
        Self::anonymous()
    }
}

use crate::access::level::AccessLevel;
use crate::models::user::LoginUser;

/// Decide whether `user` may view something that requires `required`.
///
/// Total over its input domain: never panics, no side effects. A missing
/// user or a user without an assigned role is denied everything except the
/// public sentinel. The guard skips this call entirely for public routes;
/// handling the sentinel here is a safety net.
pub fn has_access(user: Option<&LoginUser>, required: AccessLevel) -> bool {
    if required == AccessLevel::NotLogin {
        return true;
    }

    match user.and_then(|u| u.role) {
        Some(role) => role.satisfies(required),
        None => false,
    }
}

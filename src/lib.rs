pub mod access;
pub mod core;
pub mod guard;
pub mod handlers;
pub mod models;
pub mod session;
pub mod stores;

pub use access::{has_access, AccessLevel};
pub use guard::{GuardDecision, GuardPaths, NavigationGuard};
pub use models::route::{RouteRule, RouteTable, RouteTarget};
pub use models::user::LoginUser;
pub use session::{MemorySession, SessionProvider};

pub mod interceptor;

pub use interceptor::{GuardDecision, GuardPaths, NavigationGuard};

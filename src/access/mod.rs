pub mod check;
pub mod level;

pub use check::has_access;
pub use level::AccessLevel;

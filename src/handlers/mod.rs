pub mod health;
pub mod navigate;

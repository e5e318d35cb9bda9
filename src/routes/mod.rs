pub mod auth;
mod health_checks;
pub mod listing;
pub mod rating;
pub mod upload;
pub mod user;

pub use health_checks::*;

pub mod auth;
pub mod listing;
pub mod rating;
pub mod upload;
pub mod user;

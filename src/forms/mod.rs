pub mod listing;
pub mod rating;
pub mod user;

mod listing;
mod rating;
pub mod user;

pub use listing::*;
pub use rating::*;
pub use user::*;

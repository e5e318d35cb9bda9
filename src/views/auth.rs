use crate::views::user::Summary;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: Summary,
    pub token: String,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(sqlx::Type, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[sqlx(rename_all = "lowercase", type_name = "varchar")]
#[serde(rename_all = "lowercase")]
pub enum RatingKind {
    Seller,
    Product,
}

/// A 1-5 review. `to_user_id` and `listing_id` are mutually exclusive,
/// discriminated by `kind`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Rating {
    pub id: Uuid,
    pub kind: RatingKind,
    pub from_user_id: Uuid,
    pub to_user_id: Option<Uuid>,
    pub listing_id: Option<Uuid>,
    pub from_username: String,
    pub score: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

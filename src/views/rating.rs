use crate::models;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingView {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: models::RatingKind,
    pub from_user_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_user_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<Uuid>,
    pub from_username: String,
    pub rating: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<models::Rating> for RatingView {
    fn from(rating: models::Rating) -> Self {
        Self {
            id: rating.id,
            kind: rating.kind,
            from_user_id: rating.from_user_id,
            to_user_id: rating.to_user_id,
            product_id: rating.listing_id,
            from_username: rating.from_username,
            rating: rating.score,
            comment: rating.comment,
            created_at: rating.created_at,
            updated_at: rating.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Average {
    pub average: f64,
    pub count: i64,
}

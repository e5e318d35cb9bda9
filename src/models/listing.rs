use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Closed set of marketplace categories. Stored by variant name.
#[derive(sqlx::Type, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "varchar")]
pub enum Category {
    Electronics,
    Fashion,
    Furniture,
    Sports,
    Entertainment,
    Books,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Listing {
    pub id: Uuid,
    pub title: String,
    pub price: f64,
    pub category: Category,
    pub description: String,
    pub images: Vec<String>,
    pub seller_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing joined with its seller's public fields, the read-time projection
/// every listing response carries. The seller rating comes from an aggregate
/// over seller ratings, not from a stored column.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ListingWithSeller {
    #[sqlx(flatten)]
    pub listing: Listing,
    pub seller_username: String,
    pub seller_verified: bool,
    pub seller_rating: f64,
}

use crate::helpers;
use crate::models;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Denormalized owner summary attached to every listing response.
#[derive(Debug, Serialize)]
pub struct SellerSummary {
    pub id: Uuid,
    pub username: String,
    pub verified: bool,
    pub rating: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingView {
    pub id: Uuid,
    pub title: String,
    pub price: f64,
    pub category: models::Category,
    pub description: String,
    pub images: Vec<String>,
    pub seller: SellerSummary,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<models::ListingWithSeller> for ListingView {
    fn from(row: models::ListingWithSeller) -> Self {
        Self {
            id: row.listing.id,
            title: row.listing.title,
            price: row.listing.price,
            category: row.listing.category,
            description: row.listing.description,
            images: row.listing.images,
            seller: SellerSummary {
                id: row.listing.seller_id,
                username: row.seller_username,
                verified: row.seller_verified,
                rating: helpers::round2(row.seller_rating),
            },
            created_at: row.listing.created_at,
            updated_at: row.listing.updated_at,
        }
    }
}

/// List responses also carry the total match count for pagination.
#[derive(Debug, Serialize)]
pub struct Page {
    pub list: Vec<ListingView>,
    pub total: i64,
}

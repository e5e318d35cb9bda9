use crate::models;
use serde::Deserialize;
use serde_valid::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct Add {
    #[validate(min_length = 1)]
    pub title: String,
    #[validate(minimum = 0.0)]
    pub price: f64,
    pub category: models::Category,
    #[validate(min_length = 1)]
    pub description: String,
    #[validate(min_items = 1)]
    pub images: Vec<String>,
}

/// Whitelisted mutable fields; the owner cannot reassign the listing.
#[derive(Debug, Deserialize, Validate)]
pub struct Update {
    #[validate(min_length = 1)]
    pub title: Option<String>,
    #[validate(minimum = 0.0)]
    pub price: Option<f64>,
    pub category: Option<models::Category>,
    #[validate(min_length = 1)]
    pub description: Option<String>,
    #[validate(min_items = 1)]
    pub images: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
    pub category: Option<models::Category>,
    pub sort: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct FeaturedQuery {
    pub limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_rejects_empty_images() {
        let form: Add = serde_json::from_value(serde_json::json!({
            "title": "Bike",
            "price": 100.0,
            "category": "Sports",
            "description": "A bike",
            "images": [],
        }))
        .unwrap();
        assert!(form.validate().is_err());
    }

    #[test]
    fn add_rejects_unknown_category() {
        let parsed = serde_json::from_value::<Add>(serde_json::json!({
            "title": "Bike",
            "price": 100.0,
            "category": "Vehicles",
            "description": "A bike",
            "images": ["a.jpg"],
        }));
        assert!(parsed.is_err());
    }

    #[test]
    fn update_allows_partial_body() {
        let form: Update = serde_json::from_value(serde_json::json!({ "price": 5.0 })).unwrap();
        assert!(form.validate().is_ok());
        assert!(form.title.is_none());
        assert_eq!(form.price, Some(5.0));
    }
}

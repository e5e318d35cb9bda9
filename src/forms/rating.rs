use crate::models;
use serde::Deserialize;
use serde_valid::Validate;
use uuid::Uuid;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Add {
    #[serde(rename = "type")]
    pub kind: models::RatingKind,
    pub to_user_id: Option<Uuid>,
    pub product_id: Option<Uuid>,
    #[validate(minimum = 1)]
    #[validate(maximum = 5)]
    pub rating: i32,
    #[validate(max_length = 1000)]
    pub comment: Option<String>,
}

impl Add {
    /// Target id for the rating's kind, if the client supplied it.
    pub fn target_id(&self) -> Option<Uuid> {
        match self.kind {
            models::RatingKind::Seller => self.to_user_id,
            models::RatingKind::Product => self.product_id,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckSellerQuery {
    pub from_user_id: Uuid,
    pub to_user_id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckProductQuery {
    pub from_user_id: Uuid,
    pub product_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_must_stay_in_range() {
        let form: Add = serde_json::from_value(serde_json::json!({
            "type": "seller",
            "toUserId": Uuid::new_v4(),
            "rating": 6,
        }))
        .unwrap();
        assert!(form.validate().is_err());

        let form: Add = serde_json::from_value(serde_json::json!({
            "type": "seller",
            "toUserId": Uuid::new_v4(),
            "rating": 5,
        }))
        .unwrap();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn kind_is_a_closed_set() {
        let parsed = serde_json::from_value::<Add>(serde_json::json!({
            "type": "shop",
            "rating": 3,
        }));
        assert!(parsed.is_err());
    }

    #[test]
    fn target_id_follows_kind() {
        let to_user = Uuid::new_v4();
        let product = Uuid::new_v4();
        let form: Add = serde_json::from_value(serde_json::json!({
            "type": "product",
            "toUserId": to_user,
            "productId": product,
            "rating": 4,
        }))
        .unwrap();
        assert_eq!(form.target_id(), Some(product));
    }
}

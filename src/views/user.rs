use crate::models;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// The public fields attached to auth responses.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub verified: bool,
    pub rating: f64,
}

impl Summary {
    pub fn new(user: &models::User, rating: f64) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            verified: user.verified,
            rating,
        }
    }
}

/// Full profile projection. The password hash never appears here; the rating
/// is the seller-rating aggregate computed at read time.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub verified: bool,
    pub rating: f64,
    pub registration_type: models::RegistrationType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passport_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_type: Option<models::IdType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_file_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_become_verified_seller: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(user: models::User, rating: f64) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            verified: user.verified,
            rating,
            registration_type: user.registration_type,
            name: user.name,
            middle_name: user.middle_name,
            surname: user.surname,
            age: user.age,
            area: user.area,
            cell_number: user.cell_number,
            id_number: user.id_number,
            passport_number: user.passport_number,
            id_type: user.id_type,
            location: user.location,
            id_file_url: user.id_file_url,
            company_name: user.company_name,
            company_number: user.company_number,
            company_contact: user.company_contact,
            company_address: user.company_address,
            company_email: user.company_email,
            company_website: user.company_website,
            bio: user.bio,
            can_become_verified_seller: user.can_become_verified_seller,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

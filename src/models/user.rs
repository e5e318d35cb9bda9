use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(sqlx::Type, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[sqlx(rename_all = "lowercase", type_name = "varchar")]
#[serde(rename_all = "lowercase")]
pub enum RegistrationType {
    #[default]
    Quick,
    Full,
    Company,
}

#[derive(sqlx::Type, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[sqlx(rename_all = "lowercase", type_name = "varchar")]
#[serde(rename_all = "lowercase")]
pub enum IdType {
    Id,
    Passport,
}

/// Account row. Deliberately not `Serialize`: the password hash must never
/// leave the process, so responses go through `views::user` projections.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub verified: bool,
    pub registration_type: RegistrationType,
    pub name: Option<String>,
    pub middle_name: Option<String>,
    pub surname: Option<String>,
    pub age: Option<i32>,
    pub area: Option<String>,
    pub cell_number: Option<String>,
    pub id_number: Option<String>,
    pub passport_number: Option<String>,
    pub id_type: Option<IdType>,
    pub location: Option<String>,
    pub id_file_url: Option<String>,
    pub company_name: Option<String>,
    pub company_number: Option<String>,
    pub company_contact: Option<String>,
    pub company_address: Option<String>,
    pub company_email: Option<String>,
    pub company_website: Option<String>,
    pub bio: Option<String>,
    pub can_become_verified_seller: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

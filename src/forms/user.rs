use crate::models;
use serde::Deserialize;
use serde_valid::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Register {
    #[validate(min_length = 1)]
    pub email: String,
    #[validate(min_length = 1)]
    pub password: String,
    pub username: Option<String>,
    pub registration_type: Option<models::RegistrationType>,
    pub name: Option<String>,
    pub middle_name: Option<String>,
    pub surname: Option<String>,
    pub age: Option<i32>,
    pub area: Option<String>,
    pub cell_number: Option<String>,
    pub id_number: Option<String>,
    pub passport_number: Option<String>,
    pub id_type: Option<models::IdType>,
    pub location: Option<String>,
    pub id_file_url: Option<String>,
    pub company_name: Option<String>,
    pub company_number: Option<String>,
    pub company_contact: Option<String>,
    pub company_address: Option<String>,
    pub company_email: Option<String>,
    pub company_website: Option<String>,
    pub bio: Option<String>,
}

impl Register {
    /// Starting point for username probing: the requested username, or the
    /// local part of the email when none was given.
    pub fn username_base(&self) -> &str {
        match self.username.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => self.email.split('@').next().unwrap_or(&self.email),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct Login {
    #[validate(min_length = 1)]
    pub email: String,
    #[validate(min_length = 1)]
    pub password: String,
}

/// The mutable subset of profile fields. Everything absent stays untouched;
/// identity documents and verification flags are not client-mutable.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfile {
    #[validate(min_length = 1)]
    pub username: Option<String>,
    #[validate(min_length = 1)]
    pub email: Option<String>,
    pub bio: Option<String>,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub middle_name: Option<String>,
    pub age: Option<i32>,
    pub area: Option<String>,
    pub cell_number: Option<String>,
    pub location: Option<String>,
    pub company_name: Option<String>,
    pub company_number: Option<String>,
    pub company_contact: Option<String>,
    pub company_address: Option<String>,
    pub company_email: Option<String>,
    pub company_website: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePassword {
    #[validate(min_length = 1)]
    pub current_password: String,
    #[validate(min_length = 1)]
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_form(email: &str, username: Option<&str>) -> Register {
        serde_json::from_value(serde_json::json!({
            "email": email,
            "password": "secret",
            "username": username,
        }))
        .unwrap()
    }

    #[test]
    fn username_base_prefers_requested_name() {
        let form = register_form("alice@example.com", Some("wonderland"));
        assert_eq!(form.username_base(), "wonderland");
    }

    #[test]
    fn username_base_falls_back_to_email_local_part() {
        let form = register_form("alice@example.com", None);
        assert_eq!(form.username_base(), "alice");
    }

    #[test]
    fn username_base_ignores_blank_requested_name() {
        let form = register_form("bob@example.com", Some("   "));
        assert_eq!(form.username_base(), "bob");
    }
}

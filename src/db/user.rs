use crate::db::InsertError;
use crate::forms;
use crate::models;
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

pub async fn fetch(pool: &PgPool, id: Uuid) -> Result<Option<models::User>, String> {
    let query_span = tracing::info_span!("Fetch user by id.");
    sqlx::query_as::<_, models::User>("SELECT * FROM users WHERE id = $1 LIMIT 1")
        .bind(id)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch user, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

pub async fn fetch_by_email(pool: &PgPool, email: &str) -> Result<Option<models::User>, String> {
    let query_span = tracing::info_span!("Fetch user by email.");
    sqlx::query_as::<_, models::User>("SELECT * FROM users WHERE email = $1 LIMIT 1")
        .bind(email)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch user by email, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

pub async fn fetch_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<models::User>, String> {
    let query_span = tracing::info_span!("Fetch user by username.");
    sqlx::query_as::<_, models::User>("SELECT * FROM users WHERE username = $1 LIMIT 1")
        .bind(username)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch user by username, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool, String> {
    let query_span = tracing::info_span!("Check email existence.");
    sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM users WHERE email = $1)")
        .bind(email)
        .fetch_one(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to check email, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

pub async fn username_exists(pool: &PgPool, username: &str) -> Result<bool, String> {
    let query_span = tracing::info_span!("Check username existence.");
    sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM users WHERE username = $1)")
        .bind(username)
        .fetch_one(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to check username, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

pub async fn username_taken_by_other(
    pool: &PgPool,
    username: &str,
    user_id: Uuid,
) -> Result<bool, String> {
    let query_span = tracing::info_span!("Check username collision.");
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM users WHERE username = $1 AND id <> $2)",
    )
    .bind(username)
    .bind(user_id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to check username, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn email_taken_by_other(
    pool: &PgPool,
    email: &str,
    user_id: Uuid,
) -> Result<bool, String> {
    let query_span = tracing::info_span!("Check email collision.");
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM users WHERE email = $1 AND id <> $2)",
    )
    .bind(email)
    .bind(user_id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to check email, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn insert(
    pool: &PgPool,
    username: &str,
    password_hash: &str,
    form: &forms::user::Register,
) -> Result<models::User, InsertError> {
    let query_span = tracing::info_span!("Saving new user into the database");
    sqlx::query_as::<_, models::User>(
        r#"
        INSERT INTO users (
            id, username, email, password_hash, verified, registration_type,
            name, middle_name, surname, age, area, cell_number,
            id_number, passport_number, id_type, location, id_file_url,
            company_name, company_number, company_contact, company_address,
            company_email, company_website, bio,
            created_at, updated_at
        )
        VALUES (
            $1, $2, $3, $4, FALSE, $5,
            $6, $7, $8, $9, $10, $11,
            $12, $13, $14, $15, $16,
            $17, $18, $19, $20,
            $21, $22, $23,
            NOW(), NOW()
        )
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(username)
    .bind(&form.email)
    .bind(password_hash)
    .bind(form.registration_type.unwrap_or_default())
    .bind(&form.name)
    .bind(&form.middle_name)
    .bind(&form.surname)
    .bind(form.age)
    .bind(&form.area)
    .bind(&form.cell_number)
    .bind(&form.id_number)
    .bind(&form.passport_number)
    .bind(form.id_type)
    .bind(&form.location)
    .bind(&form.id_file_url)
    .bind(&form.company_name)
    .bind(&form.company_number)
    .bind(&form.company_contact)
    .bind(&form.company_address)
    .bind(&form.company_email)
    .bind(&form.company_website)
    .bind(&form.bio)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(InsertError::from_sqlx)
}

pub async fn update_profile(
    pool: &PgPool,
    id: Uuid,
    form: &forms::user::UpdateProfile,
) -> Result<Option<models::User>, InsertError> {
    let query_span = tracing::info_span!("Updating user profile");
    sqlx::query_as::<_, models::User>(
        r#"
        UPDATE users
        SET
            username = COALESCE($2, username),
            email = COALESCE($3, email),
            bio = COALESCE($4, bio),
            name = COALESCE($5, name),
            surname = COALESCE($6, surname),
            middle_name = COALESCE($7, middle_name),
            age = COALESCE($8, age),
            area = COALESCE($9, area),
            cell_number = COALESCE($10, cell_number),
            location = COALESCE($11, location),
            company_name = COALESCE($12, company_name),
            company_number = COALESCE($13, company_number),
            company_contact = COALESCE($14, company_contact),
            company_address = COALESCE($15, company_address),
            company_email = COALESCE($16, company_email),
            company_website = COALESCE($17, company_website),
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&form.username)
    .bind(&form.email)
    .bind(&form.bio)
    .bind(&form.name)
    .bind(&form.surname)
    .bind(&form.middle_name)
    .bind(form.age)
    .bind(&form.area)
    .bind(&form.cell_number)
    .bind(&form.location)
    .bind(&form.company_name)
    .bind(&form.company_number)
    .bind(&form.company_contact)
    .bind(&form.company_address)
    .bind(&form.company_email)
    .bind(&form.company_website)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(InsertError::from_sqlx)
}

pub async fn update_password(
    pool: &PgPool,
    id: Uuid,
    password_hash: &str,
) -> Result<(), String> {
    let query_span = tracing::info_span!("Updating user password");
    sqlx::query("UPDATE users SET password_hash = $2, updated_at = NOW() WHERE id = $1")
        .bind(id)
        .bind(password_hash)
        .execute(pool)
        .instrument(query_span)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Failed to update password, error: {:?}", err);
            "Failed to update".to_string()
        })
}

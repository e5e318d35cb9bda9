use crate::configuration::Settings;
use crate::db;
use crate::forms;
use crate::helpers;
use crate::helpers::JsonResponse;
use crate::views;
use actix_web::{post, web, HttpResponse, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Register user.", skip(form, pg_pool, settings))]
#[post("/register")]
pub async fn register_handler(
    form: web::Json<forms::user::Register>,
    pg_pool: web::Data<PgPool>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::bad_request(errors.to_string()));
    }

    if db::user::email_exists(pg_pool.get_ref(), &form.email)
        .await
        .map_err(JsonResponse::internal_server_error)?
    {
        return Err(JsonResponse::conflict("Email already registered"));
    }

    let username = next_free_username(pg_pool.get_ref(), form.username_base()).await?;
    let password_hash =
        helpers::password::hash(&form.password).map_err(JsonResponse::internal_server_error)?;

    // The unique indexes are the authoritative duplicate check; the probes
    // above only produce friendlier errors.
    let user = db::user::insert(pg_pool.get_ref(), &username, &password_hash, &form)
        .await
        .map_err(|err| match err {
            err if err.violates("email") => JsonResponse::conflict("Email already registered"),
            err if err.violates("username") => JsonResponse::conflict("Username already taken"),
            err => JsonResponse::internal_server_error(err),
        })?;

    let token = helpers::token::issue(&settings.auth, user.id)
        .map_err(JsonResponse::internal_server_error)?;

    tracing::info!("user {} registered as {:?}", user.id, user.username);
    Ok(HttpResponse::Created().json(views::auth::AuthResponse {
        user: views::user::Summary::new(&user, 0.0),
        token,
    }))
}

/// Linear suffix probing: base, base1, base2, ... until a free name is found.
async fn next_free_username(pool: &PgPool, base: &str) -> Result<String, actix_web::Error> {
    let mut suffix: u32 = 0;
    let mut candidate = base.to_string();
    while db::user::username_exists(pool, &candidate)
        .await
        .map_err(JsonResponse::internal_server_error)?
    {
        suffix += 1;
        candidate = format!("{}{}", base, suffix);
    }
    Ok(candidate)
}

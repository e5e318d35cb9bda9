use crate::configuration::Settings;
use crate::db;
use crate::forms;
use crate::helpers;
use crate::helpers::JsonResponse;
use crate::views;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Login user.", skip(form, pg_pool, settings))]
#[post("/login")]
pub async fn login_handler(
    form: web::Json<forms::user::Login>,
    pg_pool: web::Data<PgPool>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::bad_request(errors.to_string()));
    }

    let user = db::user::fetch_by_email(pg_pool.get_ref(), &form.email)
        .await
        .map_err(JsonResponse::internal_server_error)?
        .filter(|user| helpers::password::verify(&form.password, &user.password_hash))
        .ok_or_else(|| JsonResponse::unauthorized("Invalid email or password"))?;

    let (average, _) = db::rating::average_for_seller(pg_pool.get_ref(), user.id)
        .await
        .map_err(JsonResponse::internal_server_error)?;

    let token = helpers::token::issue(&settings.auth, user.id)
        .map_err(JsonResponse::internal_server_error)?;

    tracing::info!("user {} logged in", user.id);
    Ok(web::Json(views::auth::AuthResponse {
        user: views::user::Summary::new(&user, helpers::round2(average)),
        token,
    }))
}

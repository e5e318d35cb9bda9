use crate::db;
use crate::forms;
use crate::helpers;
use crate::helpers::JsonResponse;
use crate::middleware::authentication::Authenticated;
use crate::views;
use actix_web::{patch, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;
use uuid::Uuid;

#[tracing::instrument(name = "Update user profile.", skip(user, form, pg_pool))]
#[patch("/{id}")]
pub async fn update_handler(
    user: Authenticated,
    path: web::Path<Uuid>,
    form: web::Json<forms::user::UpdateProfile>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let id = path.into_inner();
    if id != user.id {
        return Err(JsonResponse::forbidden("Can only update your own profile"));
    }

    if let Err(errors) = form.validate() {
        return Err(JsonResponse::bad_request(errors.to_string()));
    }

    if let Some(username) = form.username.as_deref() {
        if db::user::username_taken_by_other(pg_pool.get_ref(), username, id)
            .await
            .map_err(JsonResponse::internal_server_error)?
        {
            return Err(JsonResponse::conflict("Username already taken"));
        }
    }
    if let Some(email) = form.email.as_deref() {
        if db::user::email_taken_by_other(pg_pool.get_ref(), email, id)
            .await
            .map_err(JsonResponse::internal_server_error)?
        {
            return Err(JsonResponse::conflict("Email already in use"));
        }
    }

    let updated = db::user::update_profile(pg_pool.get_ref(), id, &form)
        .await
        .map_err(|err| match err {
            err if err.violates("email") => JsonResponse::conflict("Email already in use"),
            err if err.violates("username") => JsonResponse::conflict("Username already taken"),
            err => JsonResponse::internal_server_error(err),
        })?
        .ok_or_else(|| JsonResponse::not_found("User not found"))?;

    let (average, _) = db::rating::average_for_seller(pg_pool.get_ref(), id)
        .await
        .map_err(JsonResponse::internal_server_error)?;

    Ok(web::Json(views::user::Profile::new(
        updated,
        helpers::round2(average),
    )))
}

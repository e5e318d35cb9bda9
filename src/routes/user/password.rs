use crate::db;
use crate::forms;
use crate::helpers;
use crate::helpers::JsonResponse;
use crate::middleware::authentication::Authenticated;
use actix_web::{patch, web, HttpResponse, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;
use uuid::Uuid;

#[tracing::instrument(name = "Change password.", skip(user, form, pg_pool))]
#[patch("/{id}/password")]
pub async fn password_handler(
    user: Authenticated,
    path: web::Path<Uuid>,
    form: web::Json<forms::user::ChangePassword>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let id = path.into_inner();
    if id != user.id {
        return Err(JsonResponse::forbidden("Not allowed"));
    }

    if let Err(errors) = form.validate() {
        return Err(JsonResponse::bad_request(errors.to_string()));
    }

    if !helpers::password::verify(&form.current_password, &user.password_hash) {
        return Err(JsonResponse::bad_request("Current password is incorrect"));
    }

    let password_hash = helpers::password::hash(&form.new_password)
        .map_err(JsonResponse::internal_server_error)?;
    db::user::update_password(pg_pool.get_ref(), id, &password_hash)
        .await
        .map_err(JsonResponse::internal_server_error)?;

    tracing::info!("password changed for user {}", id);
    Ok(HttpResponse::NoContent().finish())
}

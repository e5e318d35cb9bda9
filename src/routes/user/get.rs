use crate::db;
use crate::helpers;
use crate::helpers::JsonResponse;
use crate::models;
use crate::views;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;
use uuid::Uuid;

#[tracing::instrument(name = "Get user by id.", skip(pg_pool))]
#[get("/{id}")]
pub async fn get_handler(
    path: web::Path<String>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    // A malformed id cannot name any user, so it reads as absent.
    let id = Uuid::parse_str(&path.into_inner())
        .map_err(|_| JsonResponse::not_found("User not found"))?;

    let user = db::user::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(JsonResponse::internal_server_error)?
        .ok_or_else(|| JsonResponse::not_found("User not found"))?;

    profile_response(pg_pool.get_ref(), user).await
}

#[tracing::instrument(name = "Get user by username.", skip(pg_pool))]
#[get("/username/{username}")]
pub async fn get_by_username_handler(
    path: web::Path<String>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let user = db::user::fetch_by_username(pg_pool.get_ref(), &path.into_inner())
        .await
        .map_err(JsonResponse::internal_server_error)?
        .ok_or_else(|| JsonResponse::not_found("User not found"))?;

    profile_response(pg_pool.get_ref(), user).await
}

async fn profile_response(
    pool: &PgPool,
    user: models::User,
) -> Result<web::Json<views::user::Profile>> {
    let (average, _) = db::rating::average_for_seller(pool, user.id)
        .await
        .map_err(JsonResponse::internal_server_error)?;

    Ok(web::Json(views::user::Profile::new(
        user,
        helpers::round2(average),
    )))
}

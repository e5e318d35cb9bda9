use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::middleware::authentication::Authenticated;
use crate::models;
use crate::views;
use actix_web::{post, web, HttpResponse, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Add rating.", skip(user, form, pg_pool))]
#[post("")]
pub async fn add_handler(
    user: Authenticated,
    form: web::Json<forms::rating::Add>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::bad_request(errors.to_string()));
    }

    let target_id = form.target_id().ok_or_else(|| match form.kind {
        models::RatingKind::Seller => JsonResponse::bad_request("toUserId is required"),
        models::RatingKind::Product => JsonResponse::bad_request("productId is required"),
    })?;

    match form.kind {
        models::RatingKind::Seller => {
            db::user::fetch(pg_pool.get_ref(), target_id)
                .await
                .map_err(JsonResponse::internal_server_error)?
                .ok_or_else(|| JsonResponse::not_found("User not found"))?;
        }
        models::RatingKind::Product => {
            db::listing::fetch(pg_pool.get_ref(), target_id)
                .await
                .map_err(JsonResponse::internal_server_error)?
                .ok_or_else(|| JsonResponse::not_found("Listing not found"))?;
        }
    }

    if db::rating::fetch_existing(pg_pool.get_ref(), form.kind, user.id, target_id)
        .await
        .map_err(JsonResponse::internal_server_error)?
        .is_some()
    {
        return Err(already_rated(form.kind));
    }

    // The partial unique indexes are the authoritative duplicate check; the
    // lookup above only produces the friendlier message without a race.
    let rating = db::rating::insert(
        pg_pool.get_ref(),
        form.kind,
        &user,
        target_id,
        form.rating,
        form.comment.as_deref(),
    )
    .await
    .map_err(|err| match err {
        err if err.violates("ratings") => already_rated(form.kind),
        err => JsonResponse::internal_server_error(err),
    })?;

    tracing::info!("rating {} created by {}", rating.id, user.id);
    Ok(HttpResponse::Created().json(views::rating::RatingView::from(rating)))
}

fn already_rated(kind: models::RatingKind) -> actix_web::Error {
    match kind {
        models::RatingKind::Seller => {
            JsonResponse::conflict("You have already rated this seller")
        }
        models::RatingKind::Product => {
            JsonResponse::conflict("You have already rated this product")
        }
    }
}

use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::middleware::authentication::Authenticated;
use crate::views;
use actix_web::{patch, web, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;
use uuid::Uuid;

#[tracing::instrument(name = "Update listing.", skip(user, form, pg_pool))]
#[patch("/{id}")]
pub async fn update_handler(
    user: Authenticated,
    path: web::Path<Uuid>,
    form: web::Json<forms::listing::Update>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let id = path.into_inner();

    if let Err(errors) = form.validate() {
        return Err(JsonResponse::bad_request(errors.to_string()));
    }

    let listing = db::listing::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(JsonResponse::internal_server_error)?
        .ok_or_else(|| JsonResponse::not_found("Listing not found"))?;
    if listing.seller_id != user.id {
        return Err(JsonResponse::forbidden(
            "Only the owner can update this listing",
        ));
    }

    db::listing::update(pg_pool.get_ref(), id, &form)
        .await
        .map_err(JsonResponse::internal_server_error)?;

    let listing = db::listing::fetch_with_seller(pg_pool.get_ref(), id)
        .await
        .map_err(JsonResponse::internal_server_error)?
        .ok_or_else(|| JsonResponse::not_found("Listing not found"))?;

    Ok(web::Json(views::listing::ListingView::from(listing)))
}

use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::middleware::authentication::Authenticated;
use crate::views;
use actix_web::{post, web, HttpResponse, Responder, Result};
use serde_valid::Validate;
use sqlx::PgPool;

#[tracing::instrument(name = "Add listing.", skip(user, form, pg_pool))]
#[post("")]
pub async fn add_handler(
    user: Authenticated,
    form: web::Json<forms::listing::Add>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::bad_request(errors.to_string()));
    }

    let listing = db::listing::insert(pg_pool.get_ref(), user.id, &form)
        .await
        .map_err(JsonResponse::internal_server_error)?;

    // Re-read through the seller join so the response carries the same shape
    // as every other listing read.
    let listing = db::listing::fetch_with_seller(pg_pool.get_ref(), listing.id)
        .await
        .map_err(JsonResponse::internal_server_error)?
        .ok_or_else(|| JsonResponse::not_found("Listing not found"))?;

    tracing::info!("listing {} created by {}", listing.listing.id, user.id);
    Ok(HttpResponse::Created().json(views::listing::ListingView::from(listing)))
}

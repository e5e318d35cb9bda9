use crate::db;
use crate::helpers::JsonResponse;
use crate::middleware::authentication::Authenticated;
use actix_web::{delete, web, HttpResponse, Responder, Result};
use sqlx::PgPool;
use uuid::Uuid;

#[tracing::instrument(name = "Delete listing.", skip(user, pg_pool))]
#[delete("/{id}")]
pub async fn delete_handler(
    user: Authenticated,
    path: web::Path<Uuid>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let id = path.into_inner();

    let listing = db::listing::fetch(pg_pool.get_ref(), id)
        .await
        .map_err(JsonResponse::internal_server_error)?
        .ok_or_else(|| JsonResponse::not_found("Listing not found"))?;
    if listing.seller_id != user.id {
        return Err(JsonResponse::forbidden(
            "Only the owner can delete this listing",
        ));
    }

    db::listing::delete(pg_pool.get_ref(), id)
        .await
        .map_err(JsonResponse::internal_server_error)?;

    tracing::info!("listing {} deleted by {}", id, user.id);
    Ok(HttpResponse::NoContent().finish())
}

use crate::db;
use crate::forms;
use crate::helpers;
use crate::helpers::JsonResponse;
use crate::models;
use crate::views;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;
use uuid::Uuid;

#[tracing::instrument(name = "List seller ratings.", skip(pg_pool))]
#[get("/seller/{id}")]
pub async fn for_seller_handler(
    path: web::Path<Uuid>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let rows = db::rating::fetch_for_seller(pg_pool.get_ref(), path.into_inner())
        .await
        .map_err(JsonResponse::internal_server_error)?;

    Ok(web::Json(
        rows.into_iter()
            .map(views::rating::RatingView::from)
            .collect::<Vec<_>>(),
    ))
}

#[tracing::instrument(name = "List product ratings.", skip(pg_pool))]
#[get("/product/{id}")]
pub async fn for_product_handler(
    path: web::Path<Uuid>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let rows = db::rating::fetch_for_product(pg_pool.get_ref(), path.into_inner())
        .await
        .map_err(JsonResponse::internal_server_error)?;

    Ok(web::Json(
        rows.into_iter()
            .map(views::rating::RatingView::from)
            .collect::<Vec<_>>(),
    ))
}

#[tracing::instrument(name = "Average seller rating.", skip(pg_pool))]
#[get("/average/seller/{id}")]
pub async fn average_handler(
    path: web::Path<Uuid>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (average, count) = db::rating::average_for_seller(pg_pool.get_ref(), path.into_inner())
        .await
        .map_err(JsonResponse::internal_server_error)?;

    Ok(web::Json(views::rating::Average {
        average: helpers::round2(average),
        count,
    }))
}

// The check endpoints answer "has this rater already voted for this target";
// the body is the existing rating or JSON null.

#[tracing::instrument(name = "Check seller rating.", skip(pg_pool))]
#[get("/check/seller")]
pub async fn check_seller_handler(
    query: web::Query<forms::rating::CheckSellerQuery>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let existing = db::rating::fetch_existing(
        pg_pool.get_ref(),
        models::RatingKind::Seller,
        query.from_user_id,
        query.to_user_id,
    )
    .await
    .map_err(JsonResponse::internal_server_error)?;

    Ok(web::Json(existing.map(views::rating::RatingView::from)))
}

#[tracing::instrument(name = "Check product rating.", skip(pg_pool))]
#[get("/check/product")]
pub async fn check_product_handler(
    query: web::Query<forms::rating::CheckProductQuery>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let existing = db::rating::fetch_existing(
        pg_pool.get_ref(),
        models::RatingKind::Product,
        query.from_user_id,
        query.product_id,
    )
    .await
    .map_err(JsonResponse::internal_server_error)?;

    Ok(web::Json(existing.map(views::rating::RatingView::from)))
}

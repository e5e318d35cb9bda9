use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::views;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;
use uuid::Uuid;

#[tracing::instrument(name = "List listings.", skip(pg_pool))]
#[get("")]
pub async fn list_handler(
    query: web::Query<forms::listing::ListQuery>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let filter = db::listing::ListingFilter {
        search: query.search.clone(),
        category: query.category,
        sort: db::listing::SortOrder::parse(query.sort.as_deref()),
        limit: db::listing::page_limit(query.limit),
        offset: db::listing::page_offset(query.offset),
    };

    let (rows, total) = db::listing::fetch_filtered(pg_pool.get_ref(), &filter)
        .await
        .map_err(JsonResponse::internal_server_error)?;

    Ok(web::Json(views::listing::Page {
        list: rows.into_iter().map(Into::into).collect(),
        total,
    }))
}

#[tracing::instrument(name = "List featured listings.", skip(pg_pool))]
#[get("/featured")]
pub async fn featured_handler(
    query: web::Query<forms::listing::FeaturedQuery>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let rows = db::listing::fetch_featured(
        pg_pool.get_ref(),
        db::listing::featured_limit(query.limit),
    )
    .await
    .map_err(JsonResponse::internal_server_error)?;

    Ok(web::Json(
        rows.into_iter()
            .map(views::listing::ListingView::from)
            .collect::<Vec<_>>(),
    ))
}

#[tracing::instrument(name = "List listings by seller.", skip(pg_pool))]
#[get("/seller/{id}")]
pub async fn by_seller_handler(
    path: web::Path<Uuid>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let rows = db::listing::fetch_by_seller(pg_pool.get_ref(), path.into_inner())
        .await
        .map_err(JsonResponse::internal_server_error)?;

    Ok(web::Json(
        rows.into_iter()
            .map(views::listing::ListingView::from)
            .collect::<Vec<_>>(),
    ))
}

#[tracing::instrument(name = "Get listing.", skip(pg_pool))]
#[get("/{id}")]
pub async fn get_handler(
    path: web::Path<String>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let id = Uuid::parse_str(&path.into_inner())
        .map_err(|_| JsonResponse::not_found("Listing not found"))?;

    let listing = db::listing::fetch_with_seller(pg_pool.get_ref(), id)
        .await
        .map_err(JsonResponse::internal_server_error)?
        .ok_or_else(|| JsonResponse::not_found("Listing not found"))?;

    Ok(web::Json(views::listing::ListingView::from(listing)))
}

use crate::db::InsertError;
use crate::models;
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

pub async fn fetch_for_seller(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<models::Rating>, String> {
    let query_span = tracing::info_span!("Fetch ratings for seller.");
    sqlx::query_as::<_, models::Rating>(
        "SELECT * FROM ratings WHERE kind = $1 AND to_user_id = $2 ORDER BY created_at DESC",
    )
    .bind(models::RatingKind::Seller)
    .bind(user_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch seller ratings, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn fetch_for_product(
    pool: &PgPool,
    listing_id: Uuid,
) -> Result<Vec<models::Rating>, String> {
    let query_span = tracing::info_span!("Fetch ratings for product.");
    sqlx::query_as::<_, models::Rating>(
        "SELECT * FROM ratings WHERE kind = $1 AND listing_id = $2 ORDER BY created_at DESC",
    )
    .bind(models::RatingKind::Product)
    .bind(listing_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch product ratings, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

/// Existing vote by this rater for this target, partitioned by kind.
pub async fn fetch_existing(
    pool: &PgPool,
    kind: models::RatingKind,
    from_user_id: Uuid,
    target_id: Uuid,
) -> Result<Option<models::Rating>, String> {
    let query_span = tracing::info_span!("Search for existing vote.");
    let sql = match kind {
        models::RatingKind::Seller => {
            "SELECT * FROM ratings WHERE kind = $1 AND from_user_id = $2 AND to_user_id = $3 LIMIT 1"
        }
        models::RatingKind::Product => {
            "SELECT * FROM ratings WHERE kind = $1 AND from_user_id = $2 AND listing_id = $3 LIMIT 1"
        }
    };
    sqlx::query_as::<_, models::Rating>(sql)
        .bind(kind)
        .bind(from_user_id)
        .bind(target_id)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch rating, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

/// Raw mean and count of seller ratings for a user; (0, 0) when none exist.
/// Rounding happens at the view layer.
pub async fn average_for_seller(pool: &PgPool, user_id: Uuid) -> Result<(f64, i64), String> {
    let query_span = tracing::info_span!("Aggregate seller rating.");
    sqlx::query_as::<_, (Option<f64>, i64)>(
        "SELECT AVG(score)::float8, COUNT(*) FROM ratings WHERE kind = $1 AND to_user_id = $2",
    )
    .bind(models::RatingKind::Seller)
    .bind(user_id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(|(average, count)| (average.unwrap_or(0.0), count))
    .map_err(|err| {
        tracing::error!("Failed to aggregate ratings, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn insert(
    pool: &PgPool,
    kind: models::RatingKind,
    from_user: &models::User,
    target_id: Uuid,
    score: i32,
    comment: Option<&str>,
) -> Result<models::Rating, InsertError> {
    let query_span = tracing::info_span!("Saving new rating details into the database");
    let (to_user_id, listing_id) = match kind {
        models::RatingKind::Seller => (Some(target_id), None),
        models::RatingKind::Product => (None, Some(target_id)),
    };

    sqlx::query_as::<_, models::Rating>(
        r#"
        INSERT INTO ratings (id, kind, from_user_id, to_user_id, listing_id,
                             from_username, score, comment, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NOW(), NOW())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(kind)
    .bind(from_user.id)
    .bind(to_user_id)
    .bind(listing_id)
    .bind(&from_user.username)
    .bind(score)
    .bind(comment)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(InsertError::from_sqlx)
}

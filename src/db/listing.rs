use crate::forms;
use crate::models;
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

pub const DEFAULT_PAGE_SIZE: i64 = 50;
pub const MAX_PAGE_SIZE: i64 = 100;
pub const DEFAULT_FEATURED: i64 = 6;
pub const MAX_FEATURED: i64 = 50;

/// Page size is capped regardless of what the client asks for.
pub fn page_limit(requested: Option<i64>) -> i64 {
    requested.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
}

pub fn page_offset(requested: Option<i64>) -> i64 {
    requested.unwrap_or(0).max(0)
}

pub fn featured_limit(requested: Option<i64>) -> i64 {
    requested.unwrap_or(DEFAULT_FEATURED).clamp(1, MAX_FEATURED)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Newest,
    PriceLow,
    PriceHigh,
}

impl SortOrder {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("price-low") => SortOrder::PriceLow,
            Some("price-high") => SortOrder::PriceHigh,
            _ => SortOrder::Newest,
        }
    }

    fn order_clause(&self) -> &'static str {
        match self {
            SortOrder::Newest => " ORDER BY l.created_at DESC",
            SortOrder::PriceLow => " ORDER BY l.price ASC",
            SortOrder::PriceHigh => " ORDER BY l.price DESC",
        }
    }
}

#[derive(Debug)]
pub struct ListingFilter {
    pub search: Option<String>,
    pub category: Option<models::Category>,
    pub sort: SortOrder,
    pub limit: i64,
    pub offset: i64,
}

// Every listing read carries the seller's public fields; the rating is an
// aggregate over seller ratings, computed at read time.
const SELECT_WITH_SELLER: &str = r#"
SELECT l.id, l.title, l.price, l.category, l.description, l.images,
       l.seller_id, l.created_at, l.updated_at,
       u.username AS seller_username, u.verified AS seller_verified,
       COALESCE((SELECT AVG(r.score)::float8 FROM ratings r
                 WHERE r.kind = 'seller' AND r.to_user_id = u.id), 0) AS seller_rating
FROM listings l
JOIN users u ON u.id = l.seller_id
"#;

pub async fn fetch_filtered(
    pool: &PgPool,
    filter: &ListingFilter,
) -> Result<(Vec<models::ListingWithSeller>, i64), String> {
    let query_span = tracing::info_span!("Fetch filtered listings.");

    let pattern = filter
        .search
        .as_deref()
        .map(str::trim)
        .filter(|search| !search.is_empty())
        .map(|search| format!("%{}%", search));

    let mut query = sqlx::QueryBuilder::new(SELECT_WITH_SELLER);
    query.push(" WHERE 1 = 1");
    if let Some(category) = filter.category {
        query.push(" AND l.category = ").push_bind(category);
    }
    if let Some(pattern) = &pattern {
        query
            .push(" AND (l.title ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR l.description ILIKE ")
            .push_bind(pattern.clone())
            .push(")");
    }
    query.push(filter.sort.order_clause());
    query.push(" LIMIT ").push_bind(filter.limit);
    query.push(" OFFSET ").push_bind(filter.offset);

    let rows = query
        .build_query_as::<models::ListingWithSeller>()
        .fetch_all(pool)
        .instrument(query_span.clone())
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch listings, error: {:?}", err);
            "Could not fetch data".to_string()
        })?;

    let mut count_query = sqlx::QueryBuilder::new("SELECT COUNT(*) FROM listings l WHERE 1 = 1");
    if let Some(category) = filter.category {
        count_query.push(" AND l.category = ").push_bind(category);
    }
    if let Some(pattern) = &pattern {
        count_query
            .push(" AND (l.title ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR l.description ILIKE ")
            .push_bind(pattern.clone())
            .push(")");
    }

    let total = count_query
        .build_query_scalar::<i64>()
        .fetch_one(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to count listings, error: {:?}", err);
            "Could not fetch data".to_string()
        })?;

    Ok((rows, total))
}

pub async fn fetch_featured(
    pool: &PgPool,
    limit: i64,
) -> Result<Vec<models::ListingWithSeller>, String> {
    let query_span = tracing::info_span!("Fetch featured listings.");
    let sql = format!("{} ORDER BY l.created_at DESC LIMIT $1", SELECT_WITH_SELLER);
    sqlx::query_as::<_, models::ListingWithSeller>(&sql)
        .bind(limit)
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch featured listings, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

pub async fn fetch_by_seller(
    pool: &PgPool,
    seller_id: Uuid,
) -> Result<Vec<models::ListingWithSeller>, String> {
    let query_span = tracing::info_span!("Fetch listings by seller.");
    let sql = format!(
        "{} WHERE l.seller_id = $1 ORDER BY l.created_at DESC",
        SELECT_WITH_SELLER
    );
    sqlx::query_as::<_, models::ListingWithSeller>(&sql)
        .bind(seller_id)
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch seller listings, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

pub async fn fetch_with_seller(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<models::ListingWithSeller>, String> {
    let query_span = tracing::info_span!("Fetch listing with seller.");
    let sql = format!("{} WHERE l.id = $1 LIMIT 1", SELECT_WITH_SELLER);
    sqlx::query_as::<_, models::ListingWithSeller>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch listing, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

pub async fn fetch(pool: &PgPool, id: Uuid) -> Result<Option<models::Listing>, String> {
    let query_span = tracing::info_span!("Fetch listing by id.");
    sqlx::query_as::<_, models::Listing>("SELECT * FROM listings WHERE id = $1 LIMIT 1")
        .bind(id)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch listing, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

pub async fn insert(
    pool: &PgPool,
    seller_id: Uuid,
    form: &forms::listing::Add,
) -> Result<models::Listing, String> {
    let query_span = tracing::info_span!("Saving new listing into the database");
    sqlx::query_as::<_, models::Listing>(
        r#"
        INSERT INTO listings (id, title, price, category, description, images, seller_id,
                              created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, NOW(), NOW())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&form.title)
    .bind(form.price)
    .bind(form.category)
    .bind(&form.description)
    .bind(&form.images)
    .bind(seller_id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to insert".to_string()
    })
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    form: &forms::listing::Update,
) -> Result<models::Listing, String> {
    let query_span = tracing::info_span!("Updating listing");
    sqlx::query_as::<_, models::Listing>(
        r#"
        UPDATE listings
        SET
            title = COALESCE($2, title),
            price = COALESCE($3, price),
            category = COALESCE($4, category),
            description = COALESCE($5, description),
            images = COALESCE($6, images),
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&form.title)
    .bind(form.price)
    .bind(form.category)
    .bind(&form.description)
    .bind(&form.images)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to update listing, error: {:?}", err);
        "Failed to update".to_string()
    })
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), String> {
    let query_span = tracing::info_span!("Deleting listing");
    sqlx::query("DELETE FROM listings WHERE id = $1")
        .bind(id)
        .execute(pool)
        .instrument(query_span)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Failed to delete listing, error: {:?}", err);
            "Failed to delete".to_string()
        })
}

use actix_web::{get, web, Responder, Result};
use serde::Serialize;
use sqlx::PgPool;

#[derive(Serialize)]
struct Health {
    status: &'static str,
    db: &'static str,
}

#[tracing::instrument(name = "Health check.", skip(pg_pool))]
#[get("")]
pub async fn health_check(pg_pool: web::Data<PgPool>) -> Result<impl Responder> {
    let db = match sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pg_pool.get_ref())
        .await
    {
        Ok(_) => "connected",
        Err(err) => {
            tracing::warn!("database ping failed: {:?}", err);
            "disconnected"
        }
    };

    Ok(web::Json(Health { status: "ok", db }))
}

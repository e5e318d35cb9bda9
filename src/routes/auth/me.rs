use crate::db;
use crate::helpers;
use crate::helpers::JsonResponse;
use crate::middleware::authentication::Authenticated;
use crate::views;
use actix_web::{get, web, Responder, Result};
use sqlx::PgPool;

#[tracing::instrument(name = "Get own profile.", skip(user, pg_pool))]
#[get("/me")]
pub async fn me_handler(
    user: Authenticated,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let (average, _) = db::rating::average_for_seller(pg_pool.get_ref(), user.id)
        .await
        .map_err(JsonResponse::internal_server_error)?;

    Ok(web::Json(views::user::Profile::new(
        (*user).clone(),
        helpers::round2(average),
    )))
}

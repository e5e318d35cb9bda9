use crate::configuration::Settings;
use crate::db;
use crate::helpers::token;
use crate::middleware::authentication::{get_header, Rejection};
use actix_web::dev::ServiceRequest;
use actix_web::{web, HttpMessage};
use sqlx::PgPool;
use std::sync::Arc;

/// Resolve `Authorization: Bearer <token>` into a user. Absent header leaves
/// the request anonymous; a bad token or vanished user records a `Rejection`
/// instead of failing the request, since public routes ignore identity.
#[tracing::instrument(name = "Authenticate bearer token.", skip(req))]
pub async fn try_bearer(req: &mut ServiceRequest) -> Result<bool, String> {
    let authorization = get_header::<String>(req, "authorization")?;
    let Some(authorization) = authorization else {
        return Ok(false);
    };

    let Some(token_value) = authorization.strip_prefix("Bearer ") else {
        reject(req, "Invalid token");
        return Ok(false);
    };

    let settings = req
        .app_data::<web::Data<Settings>>()
        .cloned()
        .ok_or_else(|| "app settings are not configured".to_string())?;

    let user_id = match token::verify(&settings.auth, token_value) {
        Ok(user_id) => user_id,
        Err(err) => {
            tracing::debug!("bearer token rejected: {}", err);
            reject(req, "Invalid token");
            return Ok(false);
        }
    };

    let pg_pool = req
        .app_data::<web::Data<PgPool>>()
        .cloned()
        .ok_or_else(|| "database pool is not configured".to_string())?;

    match db::user::fetch(pg_pool.get_ref(), user_id).await? {
        Some(user) => {
            req.extensions_mut().insert(Arc::new(user));
            Ok(true)
        }
        None => {
            reject(req, "User not found");
            Ok(false)
        }
    }
}

fn reject(req: &ServiceRequest, reason: &'static str) {
    req.extensions_mut().insert(Rejection { reason });
}

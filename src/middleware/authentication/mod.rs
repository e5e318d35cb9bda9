mod extractor;
mod manager;
mod manager_middleware;
mod method;

pub use extractor::Authenticated;
pub use manager::*;
pub use manager_middleware::*;

use actix_web::dev::ServiceRequest;
use actix_web::http::header::HeaderName;
use std::str::FromStr;

/// Why bearer credentials were rejected; picked up by `Authenticated` so the
/// 401 can say more than "missing token".
#[derive(Debug, Clone, Copy)]
pub(crate) struct Rejection {
    pub(crate) reason: &'static str,
}

fn get_header<T>(req: &ServiceRequest, header_name: &'static str) -> Result<Option<T>, String>
where
    T: FromStr,
{
    let header_value = req.headers().get(HeaderName::from_static(header_name));

    match header_value {
        None => Ok(None),
        Some(value) => value
            .to_str()
            .map_err(|_| format!("header {header_name} can't be converted to string"))?
            .parse::<T>()
            .map_err(|_| format!("header {header_name} has wrong type"))
            .map(Some),
    }
}

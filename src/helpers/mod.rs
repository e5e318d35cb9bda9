pub(crate) mod json;
pub mod password;
pub mod token;
pub mod uploads;

pub use json::JsonResponse;

/// Ratings are reported to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Uploaded {
    pub urls: Vec<String>,
}

pub const MAX_FILES: usize = 10;
pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024; // 10MB per file
pub const ALLOWED_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/webp", "image/gif"];

pub fn extension_for(mime: &str) -> Option<&'static str> {
    match mime {
        "image/jpeg" => Some(".jpg"),
        "image/png" => Some(".png"),
        "image/webp" => Some(".webp"),
        "image/gif" => Some(".gif"),
        _ => None,
    }
}

/// Collision-resistant disk name: millisecond timestamp plus a random nonce.
/// Client-supplied filenames never reach the filesystem.
pub fn generate_filename(extension: &str) -> String {
    let stamp = chrono::Utc::now().timestamp_millis();
    let nonce: [u8; 8] = rand::random();
    let nonce: String = nonce.iter().map(|byte| format!("{:02x}", byte)).collect();
    format!("{}-{}{}", stamp, nonce, extension)
}

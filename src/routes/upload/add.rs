use crate::configuration::Settings;
use crate::helpers::uploads;
use crate::helpers::JsonResponse;
use crate::middleware::authentication::Authenticated;
use crate::views;
use actix_multipart::Multipart;
use actix_web::{post, web, HttpResponse, Responder, Result};
use futures_util::TryStreamExt;
use std::path::Path;
use tokio::io::AsyncWriteExt;

#[tracing::instrument(name = "Upload images.", skip(user, payload, settings))]
#[post("")]
pub async fn upload_handler(
    user: Authenticated,
    mut payload: Multipart,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    let mut urls = Vec::new();

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|err| JsonResponse::bad_request(err.to_string()))?
    {
        if field.name() != "images" {
            continue;
        }
        if urls.len() >= uploads::MAX_FILES {
            return Err(JsonResponse::bad_request("Too many files"));
        }

        let mime = field
            .content_type()
            .map(|mime| mime.essence_str().to_string())
            .unwrap_or_default();
        let extension = uploads::extension_for(&mime)
            .ok_or_else(|| JsonResponse::bad_request("Unsupported file type"))?;

        let filename = uploads::generate_filename(extension);
        let path = Path::new(&settings.uploads.dir).join(&filename);
        let mut file = tokio::fs::File::create(&path)
            .await
            .map_err(JsonResponse::internal_server_error)?;

        let mut written: usize = 0;
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|err| JsonResponse::bad_request(err.to_string()))?
        {
            written += chunk.len();
            if written > uploads::MAX_FILE_SIZE {
                drop(file);
                tokio::fs::remove_file(&path).await.ok();
                return Err(JsonResponse::bad_request("File too large"));
            }
            file.write_all(&chunk)
                .await
                .map_err(JsonResponse::internal_server_error)?;
        }
        file.flush()
            .await
            .map_err(JsonResponse::internal_server_error)?;

        urls.push(settings.uploads.public_url(&filename));
    }

    if urls.is_empty() {
        return Err(JsonResponse::bad_request("No files uploaded"));
    }

    tracing::info!("{} file(s) stored for user {}", urls.len(), user.id);
    Ok(HttpResponse::Ok().json(views::upload::Uploaded { urls }))
}

use crate::helpers::JsonResponse;
use crate::middleware::authentication::Rejection;
use crate::models;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};
use std::ops::Deref;
use std::sync::Arc;

/// The requester's identity, resolved by the authentication manager.
/// Extraction fails with 401 when the request carries no valid bearer token,
/// so handlers that take this parameter are auth-required by construction.
pub struct Authenticated(Arc<models::User>);

impl Deref for Authenticated {
    type Target = models::User;

    fn deref(&self) -> &models::User {
        &self.0
    }
}

impl FromRequest for Authenticated {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let extensions = req.extensions();
        let result = if let Some(user) = extensions.get::<Arc<models::User>>() {
            Ok(Authenticated(Arc::clone(user)))
        } else if let Some(rejection) = extensions.get::<Rejection>() {
            Err(JsonResponse::unauthorized(rejection.reason))
        } else {
            Err(JsonResponse::unauthorized("Authorization required"))
        };
        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::{AuthSettings, DatabaseSettings, Settings, UploadSettings};
    use crate::middleware::authentication::Manager;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App, HttpResponse};

    fn test_settings() -> Settings {
        Settings {
            app_host: "127.0.0.1".to_string(),
            app_port: 0,
            database: DatabaseSettings {
                username: "postgres".to_string(),
                password: "postgres".to_string(),
                host: "127.0.0.1".to_string(),
                port: 5432,
                database_name: "openmarket".to_string(),
            },
            auth: AuthSettings {
                jwt_secret: "test-secret".to_string(),
                token_days: 7,
            },
            uploads: UploadSettings {
                dir: "uploads".to_string(),
                base_url: "http://localhost:3000".to_string(),
            },
        }
    }

    async fn whoami(user: Authenticated) -> HttpResponse {
        HttpResponse::Ok().body(user.username.clone())
    }

    #[actix_web::test]
    async fn missing_token_yields_401() {
        let app = test::init_service(
            App::new()
                .wrap(Manager::new())
                .app_data(web::Data::new(test_settings()))
                .route("/me", web::get().to(whoami)),
        )
        .await;

        let response =
            test::call_service(&app, test::TestRequest::get().uri("/me").to_request()).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn malformed_token_yields_401() {
        let app = test::init_service(
            App::new()
                .wrap(Manager::new())
                .app_data(web::Data::new(test_settings()))
                .route("/me", web::get().to(whoami)),
        )
        .await;

        let request = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", "Bearer not.a.token"))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["error"], "Invalid token");
    }
}

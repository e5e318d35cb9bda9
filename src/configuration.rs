use serde;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub app_host: String,
    pub app_port: u16,
    pub database: DatabaseSettings,
    pub auth: AuthSettings,
    pub uploads: UploadSettings,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database_name: String,
}

/// Token signing parameters. The secret is read once here and carried in
/// `Settings`; business logic never touches the process environment.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct AuthSettings {
    pub jwt_secret: String,
    pub token_days: i64,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct UploadSettings {
    pub dir: String,
    pub base_url: String,
}

impl DatabaseSettings {
    // Connection string: postgresql://<username>:<password>@<host>:<port>/<database_name>
    pub fn connection_string(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.database_name,
        )
    }

    pub fn connection_string_without_db(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}",
            self.username, self.password, self.host, self.port,
        )
    }
}

impl UploadSettings {
    pub fn public_url(&self, filename: &str) -> String {
        format!("{}/uploads/{}", self.base_url.trim_end_matches('/'), filename)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Add configuration values from a file named `configuration`
    // with the .yaml extension
    let mut settings = config::Config::default();
    settings.merge(config::File::with_name("configuration"))?; // .json, .toml, .yaml, .yml

    let mut config: Settings = settings.try_deserialize()?;

    // JWT_SECRET overrides the file value when present
    if let Ok(secret) = std::env::var("JWT_SECRET") {
        config.auth.jwt_secret = secret;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_url_strips_trailing_slash() {
        let uploads = UploadSettings {
            dir: "uploads".to_string(),
            base_url: "http://localhost:3000/".to_string(),
        };
        assert_eq!(
            uploads.public_url("a.jpg"),
            "http://localhost:3000/uploads/a.jpg"
        );
    }
}

use openmarket::configuration::{get_configuration, DatabaseSettings};
use sqlx::{Connection, Executor, PgConnection, PgPool};

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
}

/// Boots the full application on a random port against a fresh uuid-named
/// database. Returns `None` when Postgres is unreachable so the suite can
/// skip instead of failing on machines without a database.
pub async fn spawn_app() -> Option<TestApp> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let mut configuration = get_configuration().expect("Failed to get configuration");
    configuration.database.database_name = uuid::Uuid::new_v4().to_string();
    configuration.uploads.dir = format!(
        "{}/openmarket-test-uploads-{}",
        std::env::temp_dir().display(),
        uuid::Uuid::new_v4()
    );

    let connection_pool = match configure_database(&configuration.database).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Skipping test: failed to connect to postgres: {}", err);
            return None;
        }
    };

    let server = openmarket::startup::run(listener, connection_pool.clone(), configuration)
        .await
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    Some(TestApp {
        address,
        db_pool: connection_pool,
    })
}

pub async fn configure_database(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect(&config.connection_string_without_db()).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await?;

    let connection_pool = PgPool::connect(&config.connection_string()).await?;

    sqlx::migrate!("./migrations").run(&connection_pool).await?;

    Ok(connection_pool)
}

/// Registers an account and returns `(user id, token)`.
pub async fn register_user(app: &TestApp, email: &str, password: &str) -> (String, String) {
    let response = reqwest::Client::new()
        .post(format!("{}/auth/register", app.address))
        .json(&serde_json::json!({ "email": email, "password": password }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(201, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Invalid response body");
    (
        body["user"]["id"].as_str().unwrap().to_string(),
        body["token"].as_str().unwrap().to_string(),
    )
}

/// Creates a listing for the given token and returns its id.
pub async fn create_listing(app: &TestApp, token: &str, title: &str, price: f64) -> String {
    let response = reqwest::Client::new()
        .post(format!("{}/listings", app.address))
        .bearer_auth(token)
        .json(&serde_json::json!({
            "title": title,
            "price": price,
            "category": "Electronics",
            "description": format!("{} description", title),
            "images": ["http://127.0.0.1:8000/uploads/a.jpg"],
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(201, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Invalid response body");
    body["id"].as_str().unwrap().to_string()
}

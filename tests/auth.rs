mod common;

use common::{register_user, spawn_app};

#[tokio::test]
async fn register_returns_201_with_token_and_summary() {
    let Some(app) = spawn_app().await else { return };
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/auth/register", app.address))
        .json(&serde_json::json!({
            "email": "alice@example.com",
            "password": "secret",
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(201, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    // Username falls back to the email local part.
    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["user"]["email"], "alice@example.com");
    assert_eq!(body["user"]["verified"], false);
    assert_eq!(body["user"]["rating"], 0.0);
    assert!(body["token"].as_str().is_some());
    assert!(body["user"].get("passwordHash").is_none());
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn register_rejects_duplicate_email() {
    let Some(app) = spawn_app().await else { return };
    let client = reqwest::Client::new();
    register_user(&app, "bob@example.com", "secret").await;

    let response = client
        .post(format!("{}/auth/register", app.address))
        .json(&serde_json::json!({
            "email": "bob@example.com",
            "password": "other",
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(400, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Email already registered");
}

#[tokio::test]
async fn register_probes_taken_usernames_with_suffixes() {
    let Some(app) = spawn_app().await else { return };
    let client = reqwest::Client::new();

    let mut usernames = Vec::new();
    for email in ["carol@one.com", "carol@two.com", "carol@three.com"] {
        let response = client
            .post(format!("{}/auth/register", app.address))
            .json(&serde_json::json!({ "email": email, "password": "secret" }))
            .send()
            .await
            .expect("Failed to execute request.");
        assert_eq!(201, response.status().as_u16());
        let body: serde_json::Value = response.json().await.unwrap();
        usernames.push(body["user"]["username"].as_str().unwrap().to_string());
    }

    assert_eq!(usernames, vec!["carol", "carol1", "carol2"]);
}

#[tokio::test]
async fn register_rejects_empty_credentials() {
    let Some(app) = spawn_app().await else { return };
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/auth/register", app.address))
        .json(&serde_json::json!({ "email": "", "password": "" }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn login_succeeds_with_valid_credentials() {
    let Some(app) = spawn_app().await else { return };
    let client = reqwest::Client::new();
    register_user(&app, "dave@example.com", "hunter2").await;

    let response = client
        .post(format!("{}/auth/login", app.address))
        .json(&serde_json::json!({
            "email": "dave@example.com",
            "password": "hunter2",
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["user"]["username"], "dave");
    assert!(body["token"].as_str().is_some());
}

#[tokio::test]
async fn login_rejects_wrong_password_and_unknown_email() {
    let Some(app) = spawn_app().await else { return };
    let client = reqwest::Client::new();
    register_user(&app, "erin@example.com", "correct").await;

    for payload in [
        serde_json::json!({ "email": "erin@example.com", "password": "wrong" }),
        serde_json::json!({ "email": "nobody@example.com", "password": "correct" }),
    ] {
        let response = client
            .post(format!("{}/auth/login", app.address))
            .json(&payload)
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(401, response.status().as_u16());
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["error"], "Invalid email or password");
    }
}

#[tokio::test]
async fn me_returns_profile_for_valid_token() {
    let Some(app) = spawn_app().await else { return };
    let client = reqwest::Client::new();
    let (id, token) = register_user(&app, "frank@example.com", "secret").await;

    let response = client
        .get(format!("{}/auth/me", app.address))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["id"], id.as_str());
    assert_eq!(body["username"], "frank");
    assert_eq!(body["registrationType"], "quick");
}

#[tokio::test]
async fn me_requires_a_token() {
    let Some(app) = spawn_app().await else { return };
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/auth/me", app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(401, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Authorization required");

    let response = client
        .get(format!("{}/auth/me", app.address))
        .bearer_auth("not.a.token")
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(401, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Invalid token");
}

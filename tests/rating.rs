mod common;

use common::{create_listing, register_user, spawn_app};

#[tokio::test]
async fn seller_rating_round_trip() {
    let Some(app) = spawn_app().await else { return };
    let client = reqwest::Client::new();
    let (seller_id, _) = register_user(&app, "seller@example.com", "secret").await;
    let (buyer_id, buyer_token) = register_user(&app, "buyer@example.com", "secret").await;

    let response = client
        .post(format!("{}/ratings", app.address))
        .bearer_auth(&buyer_token)
        .json(&serde_json::json!({
            "type": "seller",
            "toUserId": seller_id,
            "rating": 4,
            "comment": "Smooth deal",
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(201, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["type"], "seller");
    assert_eq!(body["rating"], 4);
    assert_eq!(body["fromUserId"], buyer_id.as_str());
    assert_eq!(body["fromUsername"], "buyer");
    assert_eq!(body["toUserId"], seller_id.as_str());

    let response = client
        .get(format!("{}/ratings/seller/{}", app.address, seller_id))
        .send()
        .await
        .expect("Failed to execute request.");
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["comment"], "Smooth deal");
}

#[tokio::test]
async fn duplicate_votes_are_rejected() {
    let Some(app) = spawn_app().await else { return };
    let client = reqwest::Client::new();
    let (seller_id, _) = register_user(&app, "seller@example.com", "secret").await;
    let (_, buyer_token) = register_user(&app, "buyer@example.com", "secret").await;

    let payload = serde_json::json!({
        "type": "seller",
        "toUserId": seller_id,
        "rating": 5,
    });
    let response = client
        .post(format!("{}/ratings", app.address))
        .bearer_auth(&buyer_token)
        .json(&payload)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(201, response.status().as_u16());

    let response = client
        .post(format!("{}/ratings", app.address))
        .bearer_auth(&buyer_token)
        .json(&payload)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(400, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "You have already rated this seller");
}

#[tokio::test]
async fn any_existing_target_accepts_a_valid_first_vote() {
    let Some(app) = spawn_app().await else { return };
    let client = reqwest::Client::new();
    let (id, token) = register_user(&app, "solo@example.com", "secret").await;

    // Identity only gates authentication; the first valid vote for an
    // existing target always lands, the rater's own account included.
    let response = client
        .post(format!("{}/ratings", app.address))
        .bearer_auth(&token)
        .json(&serde_json::json!({
            "type": "seller",
            "toUserId": id,
            "rating": 5,
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(201, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["rating"], 5);
    assert_eq!(body["fromUserId"], id.as_str());
    assert_eq!(body["toUserId"], id.as_str());
}

#[tokio::test]
async fn rating_a_vanished_target_yields_404() {
    let Some(app) = spawn_app().await else { return };
    let client = reqwest::Client::new();
    let (_, token) = register_user(&app, "buyer@example.com", "secret").await;

    let response = client
        .post(format!("{}/ratings", app.address))
        .bearer_auth(&token)
        .json(&serde_json::json!({
            "type": "seller",
            "toUserId": uuid::Uuid::new_v4(),
            "rating": 3,
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(404, response.status().as_u16());

    let response = client
        .post(format!("{}/ratings", app.address))
        .bearer_auth(&token)
        .json(&serde_json::json!({
            "type": "product",
            "productId": uuid::Uuid::new_v4(),
            "rating": 3,
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn score_outside_1_to_5_is_rejected() {
    let Some(app) = spawn_app().await else { return };
    let client = reqwest::Client::new();
    let (seller_id, _) = register_user(&app, "seller@example.com", "secret").await;
    let (_, buyer_token) = register_user(&app, "buyer@example.com", "secret").await;

    for score in [0, 6] {
        let response = client
            .post(format!("{}/ratings", app.address))
            .bearer_auth(&buyer_token)
            .json(&serde_json::json!({
                "type": "seller",
                "toUserId": seller_id,
                "rating": score,
            }))
            .send()
            .await
            .expect("Failed to execute request.");
        assert_eq!(400, response.status().as_u16());
    }
}

#[tokio::test]
async fn average_reflects_all_seller_votes() {
    let Some(app) = spawn_app().await else { return };
    let client = reqwest::Client::new();
    let (seller_id, _) = register_user(&app, "seller@example.com", "secret").await;

    for (email, score) in [("a@example.com", 3), ("b@example.com", 4), ("c@example.com", 5)] {
        let (_, token) = register_user(&app, email, "secret").await;
        let response = client
            .post(format!("{}/ratings", app.address))
            .bearer_auth(&token)
            .json(&serde_json::json!({
                "type": "seller",
                "toUserId": seller_id,
                "rating": score,
            }))
            .send()
            .await
            .expect("Failed to execute request.");
        assert_eq!(201, response.status().as_u16());
    }

    let response = client
        .get(format!(
            "{}/ratings/average/seller/{}",
            app.address, seller_id
        ))
        .send()
        .await
        .expect("Failed to execute request.");
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["average"], 4.0);
    assert_eq!(body["count"], 3);

    // The seller summary on listings and profiles carries the same aggregate.
    let response = client
        .get(format!("{}/users/{}", app.address, seller_id))
        .send()
        .await
        .expect("Failed to execute request.");
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["rating"], 4.0);
}

#[tokio::test]
async fn average_is_zero_without_votes() {
    let Some(app) = spawn_app().await else { return };
    let client = reqwest::Client::new();
    let (seller_id, _) = register_user(&app, "lonely@example.com", "secret").await;

    let response = client
        .get(format!(
            "{}/ratings/average/seller/{}",
            app.address, seller_id
        ))
        .send()
        .await
        .expect("Failed to execute request.");
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["average"], 0.0);
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn product_rating_round_trip() {
    let Some(app) = spawn_app().await else { return };
    let client = reqwest::Client::new();
    let (_, owner_token) = register_user(&app, "owner@example.com", "secret").await;
    let (_, buyer_token) = register_user(&app, "buyer@example.com", "secret").await;
    let listing_id = create_listing(&app, &owner_token, "Lamp", 25.0).await;

    let response = client
        .post(format!("{}/ratings", app.address))
        .bearer_auth(&buyer_token)
        .json(&serde_json::json!({
            "type": "product",
            "productId": listing_id,
            "rating": 5,
            "comment": "Bright",
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(201, response.status().as_u16());

    let response = client
        .get(format!("{}/ratings/product/{}", app.address, listing_id))
        .send()
        .await
        .expect("Failed to execute request.");
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["productId"], listing_id.as_str());
}

#[tokio::test]
async fn check_endpoints_report_existing_votes() {
    let Some(app) = spawn_app().await else { return };
    let client = reqwest::Client::new();
    let (seller_id, _) = register_user(&app, "seller@example.com", "secret").await;
    let (buyer_id, buyer_token) = register_user(&app, "buyer@example.com", "secret").await;

    let url = format!(
        "{}/ratings/check/seller?fromUserId={}&toUserId={}",
        app.address, buyer_id, seller_id
    );

    // No vote yet: JSON null.
    let response = client.get(&url).send().await.expect("Failed to execute request.");
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body.is_null());

    client
        .post(format!("{}/ratings", app.address))
        .bearer_auth(&buyer_token)
        .json(&serde_json::json!({
            "type": "seller",
            "toUserId": seller_id,
            "rating": 2,
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    let response = client.get(&url).send().await.expect("Failed to execute request.");
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["rating"], 2);
    assert_eq!(body["type"], "seller");
}

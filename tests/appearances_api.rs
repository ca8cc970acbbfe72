mod common;

use axum::{Router, http::StatusCode};
use common::{body_json, delete, get, patch_json, post_json, test_app};
use serde_json::json;

async fn create_episode(app: &Router, title: &str) -> i64 {
    let response =
        post_json(app, "/episodes", json!({"title": title, "description": "An episode"})).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

async fn create_guest(app: &Router, name: &str) -> i64 {
    let response = post_json(app, "/guests", json!({"name": name, "bio": "A guest"})).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

async fn appearance_count(app: &Router) -> usize {
    let response = get(app, "/appearances").await;
    body_json(response).await.as_array().unwrap().len()
}

#[tokio::test]
async fn create_appearance_returns_201() {
    let app = test_app().await;
    let episode_id = create_episode(&app, "Pilot").await;
    let guest_id = create_guest(&app, "Ada Lovelace").await;

    let response = post_json(
        &app,
        "/appearances",
        json!({"rating": 5, "episode_id": episode_id, "guest_id": guest_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert!(body["id"].is_number());
    assert_eq!(body["rating"], 5);
    assert_eq!(body["episode_id"], episode_id);
    assert_eq!(body["guest_id"], guest_id);
}

#[tokio::test]
async fn create_appearance_with_out_of_range_rating_is_rejected() {
    let app = test_app().await;
    let episode_id = create_episode(&app, "Pilot").await;
    let guest_id = create_guest(&app, "Ada Lovelace").await;

    for rating in [0, 6, 7] {
        let response = post_json(
            &app,
            "/appearances",
            json!({"rating": rating, "episode_id": episode_id, "guest_id": guest_id}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["errors"], json!(["Rating must be between 1 and 5"]));
    }

    assert_eq!(appearance_count(&app).await, 0);
}

#[tokio::test]
async fn duplicate_guest_episode_pair_is_rejected() {
    let app = test_app().await;
    let episode_id = create_episode(&app, "Pilot").await;
    let guest_id = create_guest(&app, "Ada Lovelace").await;

    let body = json!({"rating": 5, "episode_id": episode_id, "guest_id": guest_id});
    let response = post_json(&app, "/appearances", body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(&app, "/appearances", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let errors = body_json(response).await;
    assert!(errors["errors"].is_array());

    assert_eq!(appearance_count(&app).await, 1);
}

#[tokio::test]
async fn same_guest_on_another_episode_is_allowed() {
    let app = test_app().await;
    let first = create_episode(&app, "Pilot").await;
    let second = create_episode(&app, "Episode 2").await;
    let guest_id = create_guest(&app, "Ada Lovelace").await;

    let response = post_json(
        &app,
        "/appearances",
        json!({"rating": 5, "episode_id": first, "guest_id": guest_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(
        &app,
        "/appearances",
        json!({"rating": 3, "episode_id": second, "guest_id": guest_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn dangling_episode_reference_is_rejected() {
    let app = test_app().await;
    let guest_id = create_guest(&app, "Ada Lovelace").await;

    let response = post_json(
        &app,
        "/appearances",
        json!({"rating": 3, "episode_id": 9999, "guest_id": guest_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["errors"].is_array());

    assert_eq!(appearance_count(&app).await, 0);
}

#[tokio::test]
async fn deleting_episode_cascades_only_its_appearances() {
    let app = test_app().await;
    let first = create_episode(&app, "Pilot").await;
    let second = create_episode(&app, "Episode 2").await;
    let guest_id = create_guest(&app, "Ada Lovelace").await;

    post_json(&app, "/appearances", json!({"rating": 5, "episode_id": first, "guest_id": guest_id}))
        .await;
    post_json(
        &app,
        "/appearances",
        json!({"rating": 4, "episode_id": second, "guest_id": guest_id}),
    )
    .await;

    let response = delete(&app, &format!("/episodes/{first}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(&app, "/appearances").await;
    let body = body_json(response).await;
    let remaining = body.as_array().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["episode_id"], second);
}

#[tokio::test]
async fn deleting_guest_cascades_only_their_appearances() {
    let app = test_app().await;
    let episode_id = create_episode(&app, "Pilot").await;
    let ada = create_guest(&app, "Ada Lovelace").await;
    let alan = create_guest(&app, "Alan Turing").await;

    post_json(&app, "/appearances", json!({"rating": 5, "episode_id": episode_id, "guest_id": ada}))
        .await;
    post_json(
        &app,
        "/appearances",
        json!({"rating": 4, "episode_id": episode_id, "guest_id": alan}),
    )
    .await;

    let response = delete(&app, &format!("/guests/{ada}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(&app, "/appearances").await;
    let body = body_json(response).await;
    let remaining = body.as_array().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["guest_id"], alan);
}

#[tokio::test]
async fn get_missing_appearance_returns_404() {
    let app = test_app().await;

    let response = get(&app, "/appearances/9999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({"message": "Appearance not found"}));
}

#[tokio::test]
async fn patch_appearance_rating() {
    let app = test_app().await;
    let episode_id = create_episode(&app, "Pilot").await;
    let guest_id = create_guest(&app, "Ada Lovelace").await;

    let response = post_json(
        &app,
        "/appearances",
        json!({"rating": 2, "episode_id": episode_id, "guest_id": guest_id}),
    )
    .await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = patch_json(&app, &format!("/appearances/{id}"), json!({"rating": 4})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["rating"], 4);
    assert_eq!(body["episode_id"], episode_id);
    assert_eq!(body["guest_id"], guest_id);
}

#[tokio::test]
async fn patch_appearance_with_out_of_range_rating_is_rejected() {
    let app = test_app().await;
    let episode_id = create_episode(&app, "Pilot").await;
    let guest_id = create_guest(&app, "Ada Lovelace").await;

    let response = post_json(
        &app,
        "/appearances",
        json!({"rating": 2, "episode_id": episode_id, "guest_id": guest_id}),
    )
    .await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = patch_json(&app, &format!("/appearances/{id}"), json!({"rating": 9})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["errors"], json!(["Rating must be between 1 and 5"]));
}

#[tokio::test]
async fn patch_appearance_to_duplicate_pair_is_rejected() {
    let app = test_app().await;
    let first = create_episode(&app, "Pilot").await;
    let second = create_episode(&app, "Episode 2").await;
    let guest_id = create_guest(&app, "Ada Lovelace").await;

    post_json(&app, "/appearances", json!({"rating": 5, "episode_id": first, "guest_id": guest_id}))
        .await;
    let response = post_json(
        &app,
        "/appearances",
        json!({"rating": 3, "episode_id": second, "guest_id": guest_id}),
    )
    .await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response =
        patch_json(&app, &format!("/appearances/{id}"), json!({"episode_id": first})).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn delete_appearance_returns_confirmation() {
    let app = test_app().await;
    let episode_id = create_episode(&app, "Pilot").await;
    let guest_id = create_guest(&app, "Ada Lovelace").await;

    let response = post_json(
        &app,
        "/appearances",
        json!({"rating": 5, "episode_id": episode_id, "guest_id": guest_id}),
    )
    .await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = delete(&app, &format!("/appearances/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"message": "Appearance deleted successfully"}));

    assert_eq!(appearance_count(&app).await, 0);

    let response = delete(&app, &format!("/appearances/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

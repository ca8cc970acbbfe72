use axum::{
    Router,
    body::Body,
    http::{Request, Response, header::CONTENT_TYPE},
};
use migration::Migrator;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, Statement};
use sea_orm_migration::MigratorTrait;
use tower::ServiceExt;

// A single-connection pool keeps every request on the same in-memory database.
pub async fn test_app() -> Router {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);

    let db = Database::connect(options).await.expect("connect to in-memory sqlite");
    db.execute(Statement::from_string(
        db.get_database_backend(),
        "PRAGMA foreign_keys=ON".to_string(),
    ))
    .await
    .expect("enable foreign keys");
    Migrator::up(&db, None).await.expect("apply migrations");

    podcastd::app(podcastd::catalog::Catalog::new(db))
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request("POST", uri, body)).await
}

pub async fn patch_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request("PATCH", uri, body)).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    send(app, Request::builder().method("DELETE").uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

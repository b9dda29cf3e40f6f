//! HTTP transport integration tests.
//!
//! Starts an axum server and exercises it with reqwest.

use std::sync::Arc;
use std::time::Duration;

use contact_directory::{http, Directory, InMemoryBlobStore};
use serde_json::{json, Value};

/// Bind to port 0 and return the actual address.
async fn start_server() -> String {
    let directory =
        Arc::new(Directory::new(InMemoryBlobStore::new()).with_latency(Duration::ZERO));
    let app = http::router(directory);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn health_check() {
    let base = start_server().await;
    let resp = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "ok": true }));
}

#[tokio::test]
async fn list_returns_sorted_seed() {
    let base = start_server().await;
    let resp = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    let contacts = body.as_array().unwrap();
    assert_eq!(contacts.len(), 11);
    assert_eq!(contacts[0]["name"], "Beatriz");
}

#[tokio::test]
async fn retrieve_existing_and_missing() {
    let base = start_server().await;

    let resp = reqwest::get(format!("{base}/1")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["name"], "Danilo");

    let resp = reqwest::get(format!("{base}/does-not-exist")).await.unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("does-not-exist"));
}

#[tokio::test]
async fn create_from_form_then_retrieve() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/create"))
        .form(&[("name", "Ana"), ("phone", "000")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let created: Value = resp.json().await.unwrap();
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["name"], "Ana");

    let fetched: Value = reqwest::get(format!("{base}/{id}"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn invalid_create_returns_400() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/create"))
        .form(&[("phone", "123")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "message": "fill in the name field" }));
}

#[tokio::test]
async fn update_and_delete() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/1/update"))
        .form(&[("name", "Ana"), ("phone", "000")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "id": "1", "name": "Ana", "phone": "000" }));

    let resp = client
        .post(format!("{base}/ghost/update"))
        .form(&[("name", "Ana"), ("phone", "000")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    for _ in 0..2 {
        let resp = client
            .post(format!("{base}/1/delete"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body, json!({}));
    }

    let resp = reqwest::get(format!("{base}/1")).await.unwrap();
    assert_eq!(resp.status(), 404);
}

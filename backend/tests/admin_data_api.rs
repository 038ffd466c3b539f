use async_trait::async_trait;
use axum::http::{Method, StatusCode};
use homestead_backend::{
    models::{
        payment::PaymentRecord, property::PropertyRecord, subscription::SubscriptionRecord,
        user::UserRecord,
    },
    repositories::{AdminDataSource, FixtureAdminData},
};
use serde_json::{json, Value};
use std::sync::Arc;

mod support;

use support::{app_with, authed_request, read_json, send, sign_in, test_app, test_config};

struct BrokenDataSource;

#[async_trait]
impl AdminDataSource for BrokenDataSource {
    async fn list_users(&self) -> anyhow::Result<Vec<UserRecord>> {
        anyhow::bail!("users store offline")
    }
    async fn list_properties(&self) -> anyhow::Result<Vec<PropertyRecord>> {
        anyhow::bail!("properties store offline")
    }
    async fn list_subscriptions(&self) -> anyhow::Result<Vec<SubscriptionRecord>> {
        anyhow::bail!("subscriptions store offline")
    }
    async fn list_payments(&self) -> anyhow::Result<Vec<PaymentRecord>> {
        anyhow::bail!("payments store offline")
    }
}

async fn fetch(uri: &str) -> (StatusCode, Value) {
    let app = test_app();
    let token = sign_in(&app).await;
    let response = send(&app, authed_request(Method::GET, uri, &token)).await;
    let status = response.status();
    (status, read_json(response).await)
}

#[tokio::test]
async fn each_collection_returns_its_fixture() {
    for (uri, expected) in [
        ("/api/admin/users", 5),
        ("/api/admin/properties", 4),
        ("/api/admin/subscriptions", 4),
        ("/api/admin/payments", 5),
    ] {
        let (status, body) = fetch(uri).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(body["success"], true, "{}", uri);
        assert_eq!(
            body["data"].as_array().map(Vec::len),
            Some(expected),
            "{}",
            uri
        );
    }
}

#[tokio::test]
async fn first_property_is_the_available_listing() {
    let (_, body) = fetch("/api/admin/properties").await;
    assert_eq!(body["data"][0]["id"], "1");
    assert_eq!(body["data"][0]["status"], "available");
    assert!(body.get("pagination").is_none());
}

#[tokio::test]
async fn users_without_parameters_fit_on_one_page() {
    let (_, body) = fetch("/api/admin/users").await;
    assert_eq!(
        body["pagination"],
        json!({ "total": 5, "pages": 1, "currentPage": 1, "perPage": 10 })
    );
}

#[tokio::test]
async fn configured_page_size_applies_when_per_page_is_omitted() {
    let mut config = test_config();
    config.users_per_page = 2;
    let data = FixtureAdminData::load().expect("load fixtures");
    let app = app_with(config, Arc::new(data));
    let token = sign_in(&app).await;

    let response = send(&app, authed_request(Method::GET, "/api/admin/users?page=2", &token)).await;
    let body = read_json(response).await;
    assert_eq!(
        body["pagination"],
        json!({ "total": 5, "pages": 3, "currentPage": 2, "perPage": 2 })
    );
    assert_eq!(body["data"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn users_paginate_by_per_page() {
    let (_, body) = fetch("/api/admin/users?page=3&perPage=2").await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
    assert_eq!(
        body["pagination"],
        json!({ "total": 5, "pages": 3, "currentPage": 3, "perPage": 2 })
    );
}

#[tokio::test]
async fn users_page_past_the_end_is_empty() {
    let (status, body) = fetch("/api/admin/users?page=9&perPage=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["pagination"]["total"], 5);
    assert_eq!(body["pagination"]["pages"], 3);
}

#[tokio::test]
async fn oversized_per_page_is_clamped() {
    let (_, body) = fetch("/api/admin/users?perPage=1000").await;
    assert_eq!(body["pagination"]["perPage"], 100);
}

#[tokio::test]
async fn collections_require_a_session() {
    let app = test_app();
    for uri in [
        "/api/admin/users",
        "/api/admin/properties",
        "/api/admin/subscriptions",
        "/api/admin/payments",
    ] {
        let response = send(
            &app,
            axum::http::Request::builder()
                .uri(uri)
                .body(axum::body::Body::empty())
                .expect("build request"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{}", uri);
        let body = read_json(response).await;
        assert_eq!(body["code"], "UNAUTHORIZED");
    }
}

#[tokio::test]
async fn forged_token_is_rejected() {
    let app = test_app();
    let response = send(
        &app,
        authed_request(Method::GET, "/api/admin/payments", "not.a.token"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn data_source_failure_is_reported_generically() {
    let app = app_with(test_config(), Arc::new(BrokenDataSource));
    let token = sign_in(&app).await;

    let response = send(
        &app,
        authed_request(Method::GET, "/api/admin/subscriptions", &token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = read_json(response).await;
    assert_eq!(
        body,
        json!({
            "success": false,
            "error": "Internal server error",
            "code": "INTERNAL_SERVER_ERROR"
        })
    );
}

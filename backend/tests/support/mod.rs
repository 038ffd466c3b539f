#![allow(dead_code)]
use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use homestead_backend::{
    config::Config,
    repositories::{AdminDataSource, FixtureAdminData},
    routes::build_app,
    state::AppState,
    utils::password::hash_password,
};
use serde_json::Value;
use std::{
    net::SocketAddr,
    sync::{Arc, OnceLock},
};
use tower::ServiceExt;

pub const ADMIN_PASSWORD: &str = "open-house-2026";

static ADMIN_HASH: OnceLock<String> = OnceLock::new();

pub fn test_config() -> Config {
    let admin_password_hash = ADMIN_HASH
        .get_or_init(|| hash_password(ADMIN_PASSWORD).expect("hash admin password"))
        .clone();
    Config {
        host: "127.0.0.1".into(),
        port: 3000,
        admin_password_hash,
        jwt_secret: "test-jwt-secret".into(),
        session_expiration_hours: 1,
        cors_allow_origins: vec!["http://localhost:8080".into()],
        users_per_page: 10,
        session_rate_limit_max_requests: 50,
        session_rate_limit_window_seconds: 60,
    }
}

pub fn test_state() -> AppState {
    let data = FixtureAdminData::load().expect("load fixtures");
    AppState::new(test_config(), Arc::new(data))
}

pub fn test_app() -> Router {
    build_app(test_state()).expect("build app")
}

pub fn app_with(config: Config, data: Arc<dyn AdminDataSource>) -> Router {
    build_app(AppState::new(config, data)).expect("build app")
}

/// Peer address the session rate limiter keys on; `serve` supplies it in
/// production via connect-info.
pub fn client_addr() -> ConnectInfo<SocketAddr> {
    ConnectInfo(SocketAddr::from(([203, 0, 113, 7], 52_000)))
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .extension(client_addr())
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("build json request")
}

pub fn authed_request(method: Method, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .extension(client_addr())
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .expect("build authed request")
}

pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.expect("call app")
}

pub async fn read_json(response: Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("parse json body")
}

/// Opens an admin session and returns its bearer token.
pub async fn sign_in(app: &Router) -> String {
    let response = send(
        app,
        json_request(
            Method::POST,
            "/api/admin/session",
            serde_json::json!({ "password": ADMIN_PASSWORD }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    body["data"]["token"]
        .as_str()
        .expect("token in session grant")
        .to_string()
}

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderName, HeaderValue, Method,
    },
    middleware as axum_middleware,
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::Config, docs::ApiDoc, handlers, middleware, state::AppState};

/// Assembles every route with its guards and the shared layers.
pub fn build_app(state: AppState) -> anyhow::Result<Router> {
    let public_routes = Router::new()
        .route("/api/health", get(handlers::health_check))
        .route("/api/contact", post(handlers::submit_contact));

    let session_routes = Router::new()
        .route("/api/admin/session", post(handlers::create_session))
        .route_layer(middleware::create_session_rate_limiter(&state.config)?);

    let admin_routes = Router::new()
        .route("/api/admin/session", delete(handlers::end_session))
        .route("/api/admin/users", get(handlers::list_users))
        .route("/api/admin/properties", get(handlers::list_properties))
        .route("/api/admin/subscriptions", get(handlers::list_subscriptions))
        .route("/api/admin/payments", get(handlers::list_payments))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::require_admin_session,
        ));

    let cors = cors_layer(&state.config);

    let app = Router::new()
        .merge(public_routes)
        .merge(session_routes)
        .merge(admin_routes)
        .merge(SwaggerUi::new("/api/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(axum_middleware::from_fn(middleware::log_error_responses))
        .layer(axum_middleware::from_fn(middleware::request_id))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state);
    Ok(app)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_allow_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .expose_headers([HeaderName::from_static("x-request-id")])
}

#![allow(dead_code)] // OpenAPI doc stubs are only referenced by utoipa macros.

use crate::{
    handlers::health::HealthResponse,
    models::{
        contact::{ContactAcknowledgement, ContactMode, ContactSubmission},
        payment::{PaymentRecord, PaymentStatus, PaymentType},
        property::{ListingType, PropertyRecord, PropertyStatus},
        session::{SessionGrant, SessionRequest},
        subscription::{SubscriptionPlan, SubscriptionRecord, SubscriptionStatus},
        user::{UserRecord, UserRole, UserSubscriptionStatus},
        PageQuery, Pagination,
    },
};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        create_session_doc,
        end_session_doc,
        list_users_doc,
        list_properties_doc,
        list_subscriptions_doc,
        list_payments_doc,
        submit_contact_doc,
        health_doc
    ),
    components(
        schemas(
            // session
            SessionRequest,
            SessionGrant,
            // collections
            UserRecord,
            UserRole,
            UserSubscriptionStatus,
            PropertyRecord,
            ListingType,
            PropertyStatus,
            SubscriptionRecord,
            SubscriptionPlan,
            SubscriptionStatus,
            PaymentRecord,
            PaymentType,
            PaymentStatus,
            PageQuery,
            Pagination,
            // contact
            ContactSubmission,
            ContactMode,
            ContactAcknowledgement,
            HealthResponse
        )
    ),
    modifiers(&SecuritySchemes),
    tags(
        (name = "Session", description = "Admin sign-in and sign-out"),
        (name = "Admin", description = "Collections shown in the admin tables"),
        (name = "Contact", description = "Public contact form intake"),
        (name = "System", description = "Liveness")
    ),
    security(("BearerAuth" = []))
)]
pub struct ApiDoc;

struct SecuritySchemes;

impl Modify for SecuritySchemes {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_default();

        let mut bearer = Http::new(HttpAuthScheme::Bearer);
        bearer.bearer_format = Some("JWT".to_string());

        components.add_security_scheme("BearerAuth", SecurityScheme::Http(bearer));
    }
}

#[utoipa::path(
    post,
    path = "/api/admin/session",
    request_body = SessionRequest,
    responses(
        (status = 200, description = "Session opened; payload wrapped in {success, data}", body = SessionGrant),
        (status = 400, description = "Empty password"),
        (status = 401, description = "Invalid password"),
        (status = 429, description = "Too many attempts from this client")
    ),
    tag = "Session",
    security(())
)]
fn create_session_doc() {}

#[utoipa::path(
    delete,
    path = "/api/admin/session",
    responses(
        (status = 200, description = "Session revoked"),
        (status = 401, description = "Missing or expired session")
    ),
    tag = "Session"
)]
fn end_session_doc() {}

#[utoipa::path(
    get,
    path = "/api/admin/users",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of users with pagination metadata", body = Vec<UserRecord>),
        (status = 401, description = "Missing or expired session")
    ),
    tag = "Admin"
)]
fn list_users_doc() {}

#[utoipa::path(
    get,
    path = "/api/admin/properties",
    responses(
        (status = 200, description = "All property listings", body = Vec<PropertyRecord>),
        (status = 401, description = "Missing or expired session")
    ),
    tag = "Admin"
)]
fn list_properties_doc() {}

#[utoipa::path(
    get,
    path = "/api/admin/subscriptions",
    responses(
        (status = 200, description = "All subscriptions", body = Vec<SubscriptionRecord>),
        (status = 401, description = "Missing or expired session")
    ),
    tag = "Admin"
)]
fn list_subscriptions_doc() {}

#[utoipa::path(
    get,
    path = "/api/admin/payments",
    responses(
        (status = 200, description = "All payments", body = Vec<PaymentRecord>),
        (status = 401, description = "Missing or expired session")
    ),
    tag = "Admin"
)]
fn list_payments_doc() {}

#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactSubmission,
    responses(
        (status = 200, description = "Enquiry accepted", body = ContactAcknowledgement),
        (status = 400, description = "Per-field validation errors")
    ),
    tag = "Contact",
    security(())
)]
fn submit_contact_doc() {}

#[utoipa::path(
    get,
    path = "/api/health",
    responses((status = 200, body = HealthResponse)),
    tag = "System",
    security(())
)]
fn health_doc() {}

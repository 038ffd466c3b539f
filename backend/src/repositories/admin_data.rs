//! Read access to the collections behind the admin tables.
//!
//! Handlers depend only on [`AdminDataSource`]; the fixture implementation
//! serves the embedded JSON collections until a database-backed source
//! replaces it.

use anyhow::Context;
use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::models::{
    payment::PaymentRecord, property::PropertyRecord, subscription::SubscriptionRecord,
    user::UserRecord,
};

const USERS_JSON: &str = include_str!("../../fixtures/users.json");
const PROPERTIES_JSON: &str = include_str!("../../fixtures/properties.json");
const SUBSCRIPTIONS_JSON: &str = include_str!("../../fixtures/subscriptions.json");
const PAYMENTS_JSON: &str = include_str!("../../fixtures/payments.json");

#[async_trait]
pub trait AdminDataSource: Send + Sync {
    async fn list_users(&self) -> anyhow::Result<Vec<UserRecord>>;
    async fn list_properties(&self) -> anyhow::Result<Vec<PropertyRecord>>;
    async fn list_subscriptions(&self) -> anyhow::Result<Vec<SubscriptionRecord>>;
    async fn list_payments(&self) -> anyhow::Result<Vec<PaymentRecord>>;
}

/// Fixed collections parsed once at startup and owned for the life of the
/// process.
#[derive(Debug, Clone)]
pub struct FixtureAdminData {
    users: Vec<UserRecord>,
    properties: Vec<PropertyRecord>,
    subscriptions: Vec<SubscriptionRecord>,
    payments: Vec<PaymentRecord>,
}

impl FixtureAdminData {
    pub fn load() -> anyhow::Result<Self> {
        let data = Self {
            users: parse_fixture("users", USERS_JSON)?,
            properties: parse_fixture("properties", PROPERTIES_JSON)?,
            subscriptions: parse_fixture("subscriptions", SUBSCRIPTIONS_JSON)?,
            payments: parse_fixture("payments", PAYMENTS_JSON)?,
        };
        tracing::debug!(
            users = data.users.len(),
            properties = data.properties.len(),
            subscriptions = data.subscriptions.len(),
            payments = data.payments.len(),
            "Loaded admin fixtures"
        );
        Ok(data)
    }
}

fn parse_fixture<T: DeserializeOwned>(name: &str, raw: &str) -> anyhow::Result<Vec<T>> {
    serde_json::from_str(raw).with_context(|| format!("Failed to parse {} fixture", name))
}

#[async_trait]
impl AdminDataSource for FixtureAdminData {
    async fn list_users(&self) -> anyhow::Result<Vec<UserRecord>> {
        Ok(self.users.clone())
    }

    async fn list_properties(&self) -> anyhow::Result<Vec<PropertyRecord>> {
        Ok(self.properties.clone())
    }

    async fn list_subscriptions(&self) -> anyhow::Result<Vec<SubscriptionRecord>> {
        Ok(self.subscriptions.clone())
    }

    async fn list_payments(&self) -> anyhow::Result<Vec<PaymentRecord>> {
        Ok(self.payments.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::property::PropertyStatus;
    use std::collections::HashSet;

    #[tokio::test]
    async fn fixtures_parse_with_expected_sizes() {
        let data = FixtureAdminData::load().expect("fixtures parse");
        assert_eq!(data.list_users().await.expect("users").len(), 5);
        assert_eq!(data.list_properties().await.expect("properties").len(), 4);
        assert_eq!(
            data.list_subscriptions().await.expect("subscriptions").len(),
            4
        );
        assert_eq!(data.list_payments().await.expect("payments").len(), 5);
    }

    #[tokio::test]
    async fn first_property_is_available() {
        let data = FixtureAdminData::load().expect("fixtures parse");
        let properties = data.list_properties().await.expect("properties");
        assert_eq!(properties[0].id, "1");
        assert_eq!(properties[0].status, PropertyStatus::Available);
    }

    #[tokio::test]
    async fn user_ids_are_unique() {
        let data = FixtureAdminData::load().expect("fixtures parse");
        let users = data.list_users().await.expect("users");
        let ids: HashSet<&str> = users.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids.len(), users.len());
    }

    #[tokio::test]
    async fn every_call_returns_the_same_collection() {
        let data = FixtureAdminData::load().expect("fixtures parse");
        let first = data.list_payments().await.expect("payments");
        let second = data.list_payments().await.expect("payments");
        assert_eq!(first, second);
    }

    #[test]
    fn malformed_fixture_reports_its_name() {
        let err = parse_fixture::<UserRecord>("users", "[{\"id\": 1}]").expect_err("malformed");
        assert!(err.to_string().contains("users fixture"));
    }
}

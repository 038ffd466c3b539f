//! Data models shared across the data source and API handlers.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub mod contact;
pub mod payment;
pub mod property;
pub mod session;
pub mod subscription;
pub mod user;

const DEFAULT_PAGE: u32 = 1;
const MAX_PAGE: u32 = 10_000;
const MAX_PER_PAGE: u32 = 100;

/// `{success, data}` envelope wrapping every successful response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Always `true` for this shape; failures use the error envelope.
    pub success: bool,
    /// The payload.
    pub data: T,
    /// Page metadata, present only on paginated collections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            pagination: None,
        }
    }

    pub fn paginated(data: T, pagination: Pagination) -> Self {
        Self {
            success: true,
            data,
            pagination: Some(pagination),
        }
    }
}

/// Query parameters for paginated collections.
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number (default: 1).
    pub page: Option<u32>,
    /// Records per page (default: configured `USERS_PER_PAGE`, max: 100).
    pub per_page: Option<u32>,
}

impl PageQuery {
    /// Returns `(page, per_page)` clamped into the accepted ranges.
    pub fn resolve(&self, default_per_page: u32) -> (u32, u32) {
        let page = self.page.unwrap_or(DEFAULT_PAGE).clamp(1, MAX_PAGE);
        let per_page = self
            .per_page
            .unwrap_or(default_per_page)
            .clamp(1, MAX_PER_PAGE);
        (page, per_page)
    }
}

/// Page metadata attached to paginated envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Total number of records in the collection.
    pub total: u32,
    /// Number of pages at the current page size (at least 1).
    pub pages: u32,
    /// Page this response holds.
    pub current_page: u32,
    /// Page size used for this response.
    pub per_page: u32,
}

/// Slices `items` to the requested page and builds its metadata.
///
/// A page past the end yields an empty slice while the totals still describe
/// the whole collection.
pub fn paginate<T: Clone>(items: &[T], page: u32, per_page: u32) -> (Vec<T>, Pagination) {
    let per_page = per_page.max(1);
    let total = items.len() as u32;
    let pages = total.div_ceil(per_page).max(1);
    let start = (page.saturating_sub(1) as usize).saturating_mul(per_page as usize);
    let slice = items
        .iter()
        .skip(start)
        .take(per_page as usize)
        .cloned()
        .collect();

    (
        slice,
        Pagination {
            total,
            pages,
            current_page: page,
            per_page,
        },
    )
}

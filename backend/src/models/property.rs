//! Property listings managed by the brokerage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// A listing offered for sale or rent.
pub struct PropertyRecord {
    /// Identifier, unique within the collection.
    pub id: String,
    /// Listing headline.
    pub title: String,
    /// Whether the listing is for sale or for rent.
    #[serde(rename = "type")]
    pub listing_type: ListingType,
    /// Asking price (sale) or monthly rent, in whole currency units.
    pub price: u64,
    /// Neighbourhood and city.
    pub location: String,
    pub bedrooms: u8,
    pub bathrooms: u8,
    /// Built-up area in square feet.
    pub area: u32,
    /// Availability of the listing.
    pub status: PropertyStatus,
    /// Time the listing was published.
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ListingType {
    Sale,
    Rent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PropertyStatus {
    Available,
    Sold,
    Rented,
}

//! Display helpers shared by the admin tables.

use chrono::{DateTime, NaiveDate, Utc};

/// Currency for amounts the API sends without one.
pub const DEFAULT_CURRENCY: &str = "INR";

/// `12500.5, "INR"` -> `INR 12,500.50`.
pub fn format_money(amount: f64, currency: &str) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    let sign = if negative { "-" } else { "" };
    format!("{} {}{}.{:02}", currency, sign, whole, cents % 100)
}

/// Whole-unit amounts such as listing prices; no decimals.
pub fn format_price(amount: u64, currency: &str) -> String {
    format!("{} {}", currency, group_thousands(amount))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_timestamp_date(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d").to_string()
}

pub fn format_date(value: &NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}

/// `property_listing` -> `Property listing`.
pub fn humanize(value: &str) -> String {
    let spaced = value.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn status_badge_class(status: &str) -> &'static str {
    match status {
        "active" | "available" | "completed" => "bg-green-100 text-green-800",
        "pending" | "inactive" => "bg-yellow-100 text-yellow-800",
        "expired" | "failed" | "cancelled" => "bg-red-100 text-red-800",
        "sold" | "rented" | "refunded" => "bg-blue-100 text-blue-800",
        _ => "bg-gray-100 text-gray-800",
    }
}

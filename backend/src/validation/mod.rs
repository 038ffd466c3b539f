//! Validation helpers for inbound request payloads.
//!
//! Payload structs derive [`Validate`]; the shared rules below cover the
//! formats the derive attributes cannot express.

pub mod rules;

pub use validator::Validate;

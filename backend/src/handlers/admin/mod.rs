//! Read-only collections behind the admin tables. Every route here sits
//! behind `require_admin_session`.

pub mod payments;
pub mod properties;
pub mod subscriptions;
pub mod users;

pub use payments::list_payments;
pub use properties::list_properties;
pub use subscriptions::list_subscriptions;
pub use users::list_users;

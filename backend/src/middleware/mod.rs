pub mod auth;
pub mod logging;
pub mod rate_limit;
pub mod request_id;

pub use auth::*;
pub use logging::*;
pub use rate_limit::{create_session_rate_limiter, SessionRateLimiter};
pub use request_id::*;

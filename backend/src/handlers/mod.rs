pub mod admin;
pub mod contact;
pub mod health;
pub mod session;

pub use admin::*;
pub use contact::*;
pub use health::*;
pub use session::*;

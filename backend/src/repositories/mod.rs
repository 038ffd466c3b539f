pub mod admin_data;

pub use admin_data::{AdminDataSource, FixtureAdminData};

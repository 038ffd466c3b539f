pub mod data_unavailable;
pub mod empty_state;
pub mod layout;
pub mod table;

pub mod ports;
pub mod profile_store;
pub mod use_cases;

pub mod config;
pub mod error;
pub mod logging;
pub mod routes;
pub mod state;
pub mod store;
pub mod test_helpers;

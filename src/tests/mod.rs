//! Integration and unit tests for the Carlot application.
//!
//! ## Test Modules
//!
//! - **validation_tests**: Field rules and the color grammar
//! - **store_tests**: Persistence gateway operations against SQLite
//! - **api_tests**: End-to-end tests through the HTTP router
//! - **error_tests**: Error envelope and status mapping
//! - **config_tests**: Configuration loading and validation
//! - **db_tests**: Schema initialization and migration script handling

pub mod db_tests;
pub mod validation_tests;

//! # Carlot Backend Library
//!
//! This is the core library for Carlot, a small car-auction backend exposing
//! Create/Read/Update/Delete operations over a single `cars` table through a
//! REST API with OpenAPI documentation.
//!
//! ## Architecture
//!
//! The application is built using:
//! - **Axum**: Modern web framework for HTTP server and routing
//! - **SQLx**: Asynchronous database operations with SQLite
//! - **Tokio**: Async runtime for concurrent request handling
//! - **validator**: Declarative field-level request validation
//! - **utoipa**: OpenAPI/Swagger document generation from static annotations
//!
//! ## Core Components
//!
//! - [`config`]: Application configuration management
//! - [`db`]: Database schema initialization and migrations
//! - [`error`]: Centralized error handling and the HTTP error envelope
//! - [`routes`]: HTTP API endpoint handlers
//! - [`store`]: Persistence gateway translating car operations into SQL
//! - [`state`]: Shared application state
//! - [`types`]: Request/response models and their validation rules
//! - [`docs`]: OpenAPI document assembly
//!
//! Every request is handled independently; handlers hold no shared mutable
//! state and all persistent state lives in the database.

pub mod config;
pub mod db;
pub mod docs;
pub mod error;
pub mod routes;
pub mod state;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;

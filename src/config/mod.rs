//! Configuration modules for the Warden API.
//!
//! Each submodule handles a specific aspect of configuration, loaded from
//! environment variables at process start and carried in
//! [`crate::state::AppState`].
//!
//! # Modules
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) allow-list
//! - [`database`]: PostgreSQL database connection pool initialization
//! - [`jwt`]: JWT authentication configuration

pub mod cors;
pub mod database;
pub mod jwt;

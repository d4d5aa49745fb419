//! HTTP access to the train simulation backend.
//!
//! # Modules
//!
//! - [`api`] -- [`ApiClient`] over the backend's five-endpoint surface.
//! - [`error`] -- [`ClientError`], the transport failure taxonomy.
//!
//! [`ApiClient`]: api::ApiClient
//! [`ClientError`]: error::ClientError

pub mod api;
pub mod error;

pub use api::{ApiClient, DEFAULT_BASE_URL};
pub use error::ClientError;

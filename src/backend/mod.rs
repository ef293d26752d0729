//! Bridge to the studio site REST backend.
//!
//! All admin operations go through [`client::BackendClient`], which talks
//! to the same HTTP API the public site uses. The backend owns auth and
//! persistence; this side holds no state beyond the connection settings.

pub mod client;

pub use client::{BackendClient, Project, ProjectDraft};

/// Errors from the backend bridge.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// Transport failed or the response body did not decode.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend rejected the request.
    #[error("backend rejected request ({status}): {detail}")]
    Api {
        /// HTTP status code returned.
        status: u16,
        /// Response body text, as sent.
        detail: String,
    },

    /// No resource with the given id.
    #[error("not found: {0}")]
    NotFound(String),

    /// The configured base URL does not parse.
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
}

//! API error types
//!
//! Three families, all surfaced as user-facing messages: validation (caught
//! before any request), authentication (no local token, or the server said
//! no), and transport/server trouble. Nothing here is retried or escalated.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// No stored token; authenticated calls fail locally without touching
    /// the network.
    #[error("Please log in again.")]
    NotAuthenticated,

    #[error("Validation error: {0}")]
    Validation(String),

    /// Non-2xx response. The message is the server's own when it sent one.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// 2xx response whose body was not the expected shape.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Session error: {0}")]
    Session(#[from] innkeep_session::SessionError),
}

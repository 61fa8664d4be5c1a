//! Innkeep API Client
//!
//! Translates domain intents (login, register, room CRUD) into single HTTP
//! requests against the configured backend and normalizes every outcome:
//! - 2xx with the expected payload -> parsed value
//! - anything else -> `ApiError` carrying a message fit for an alert dialog
//!
//! One attempt per call. No retries, no backoff, no explicit timeout; the
//! caller decides whether to re-invoke (pull-to-refresh does exactly that).

mod client;
mod error;
mod guard;
mod models;
mod phase;
mod request;

pub use client::ApiClient;
pub use error::ApiError;
pub use guard::RequestGuard;
pub use models::{AuthUser, Room};
pub use phase::SubmitPhase;
pub use request::{Credentials, ImageAttachment, NewRoom, Registration, RoomUpdate};

pub type Result<T> = std::result::Result<T, ApiError>;

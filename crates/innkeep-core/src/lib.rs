//! Innkeep Core
//!
//! Wiring layer for the hotel-management client: configuration, the
//! aggregate error, and the `App` container that the view layer talks to.
//! Rust owns all state; the screens are renderers.

mod app;
mod config;
mod error;

pub use app::{App, InitialRoute};
pub use config::Config;
pub use error::CoreError;

// Re-export core components
pub use innkeep_api::{
    ApiClient, ApiError, AuthUser, Credentials, ImageAttachment, NewRoom, Registration,
    RequestGuard, Room, RoomUpdate, SubmitPhase,
};
pub use innkeep_bookings::{Booking, BookingError, BookingLedger, NewBooking};
pub use innkeep_session::{Session, SessionError, SessionStore};
pub use innkeep_storage::{Database, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}

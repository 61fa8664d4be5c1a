//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] innkeep_storage::StorageError),

    #[error("Session error: {0}")]
    Session(#[from] innkeep_session::SessionError),

    #[error("API error: {0}")]
    Api(#[from] innkeep_api::ApiError),

    #[error("Booking error: {0}")]
    Booking(#[from] innkeep_bookings::BookingError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

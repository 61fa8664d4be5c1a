//! Booking error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Booking not found: {0}")]
    NotFound(u32),

    #[error("Validation error: {0}")]
    Validation(String),
}

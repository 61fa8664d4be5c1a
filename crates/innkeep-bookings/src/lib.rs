//! Innkeep Booking Ledger
//!
//! Bookings have no backend endpoint in the current build, so the ledger is
//! deliberately in-memory only: it lives as long as the screen that owns it
//! and is rebuilt from the demo seed on the next visit. If a server contract
//! for bookings ever lands, this crate is where it plugs in.

mod booking;
mod error;
mod ledger;

pub use booking::{Booking, NewBooking};
pub use error::BookingError;
pub use ledger::BookingLedger;

pub type Result<T> = std::result::Result<T, BookingError>;

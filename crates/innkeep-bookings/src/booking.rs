//! Booking data structures

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::BookingError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Ledger-assigned id, unique within the ledger
    pub booking_id: u32,
    /// Room the booking is for
    pub room_id: i64,
    pub customer_name: String,
    pub booking_date: NaiveDate,
    /// Display image, if one was supplied
    pub image_url: Option<String>,
}

/// Fields the booking form collects. The ledger assigns the id.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub room_id: i64,
    pub customer_name: String,
    pub booking_date: NaiveDate,
    pub image_url: Option<String>,
}

impl NewBooking {
    /// Checked before the booking is accepted into the ledger.
    pub fn validate(&self) -> Result<()> {
        if self.room_id <= 0 {
            return Err(BookingError::Validation(
                "Room ID is required.".to_string(),
            ));
        }
        if self.customer_name.trim().is_empty() {
            return Err(BookingError::Validation(
                "Customer name is required.".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let booking = NewBooking {
            room_id: 101,
            customer_name: "   ".to_string(),
            booking_date: date("2024-12-20"),
            image_url: None,
        };
        assert!(booking.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_missing_room() {
        let booking = NewBooking {
            room_id: 0,
            customer_name: "John Doe".to_string(),
            booking_date: date("2024-12-20"),
            image_url: None,
        };
        assert!(booking.validate().is_err());
    }
}

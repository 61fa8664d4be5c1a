//! Booking ledger

use parking_lot::RwLock;
use std::sync::Arc;

use crate::booking::{Booking, NewBooking};
use crate::error::BookingError;
use crate::Result;

pub struct BookingLedger {
    bookings: Arc<RwLock<Vec<Booking>>>,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self {
            bookings: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Ledger pre-seeded with the demo bookings the booking screen ships with.
    pub fn with_sample_data() -> Self {
        let ledger = Self::new();
        {
            let mut bookings = ledger.bookings.write();
            bookings.push(Booking {
                booking_id: 1,
                room_id: 101,
                customer_name: "John Doe".to_string(),
                booking_date: "2024-12-20".parse().unwrap_or_default(),
                image_url: Some("https://plus.unsplash.com/premium_photo-1676823547752".to_string()),
            });
            bookings.push(Booking {
                booking_id: 2,
                room_id: 102,
                customer_name: "Jane Smith".to_string(),
                booking_date: "2024-12-21".parse().unwrap_or_default(),
                image_url: Some("https://images.pexels.com/photos/1457842/pexels-photo-1457842.jpeg".to_string()),
            });
            bookings.push(Booking {
                booking_id: 3,
                room_id: 103,
                customer_name: "Alice Johnson".to_string(),
                booking_date: "2024-12-22".parse().unwrap_or_default(),
                image_url: None,
            });
        }
        ledger
    }

    /// Add a booking. The id is `max(existing) + 1`, or 1 for an empty ledger.
    pub fn add(&self, new_booking: NewBooking) -> Result<Booking> {
        new_booking.validate()?;

        let mut bookings = self.bookings.write();
        let next_id = bookings.iter().map(|b| b.booking_id).max().unwrap_or(0) + 1;

        let booking = Booking {
            booking_id: next_id,
            room_id: new_booking.room_id,
            customer_name: new_booking.customer_name,
            booking_date: new_booking.booking_date,
            image_url: new_booking.image_url,
        };
        bookings.push(booking.clone());

        tracing::info!(
            booking_id = booking.booking_id,
            room_id = booking.room_id,
            "Added booking"
        );

        Ok(booking)
    }

    /// Remove a booking by id.
    pub fn remove(&self, booking_id: u32) -> Result<()> {
        let mut bookings = self.bookings.write();
        let before = bookings.len();
        bookings.retain(|b| b.booking_id != booking_id);

        if bookings.len() == before {
            return Err(BookingError::NotFound(booking_id));
        }

        tracing::info!(booking_id = booking_id, "Deleted booking");

        Ok(())
    }

    /// Snapshot of the ledger in insertion order.
    pub fn list(&self) -> Vec<Booking> {
        self.bookings.read().clone()
    }

    pub fn len(&self) -> usize {
        self.bookings.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.read().is_empty()
    }
}

impl Default for BookingLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for BookingLedger {
    fn clone(&self) -> Self {
        Self {
            bookings: Arc::clone(&self.bookings),
        }
    }
}

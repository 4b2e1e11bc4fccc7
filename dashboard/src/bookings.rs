use crate::api::GymApi;
use log::{info, warn};
use shared::Booking;

/// Bookings screen; a failed fetch shows an empty table
pub struct BookingsScreen<A: GymApi> {
    api: A,
    bookings: Vec<Booking>,
}

impl<A: GymApi> BookingsScreen<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            bookings: Vec::new(),
        }
    }

    pub async fn load(&mut self) {
        self.bookings = match self.api.list_bookings().await {
            Ok(bookings) => {
                info!("Loaded {} bookings", bookings.len());
                bookings
            }
            Err(e) => {
                warn!("Failed to fetch bookings: {}", e);
                Vec::new()
            }
        };
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Bookings still awaiting check-in or cancellation
    pub fn pending(&self) -> Vec<&Booking> {
        self.bookings.iter().filter(|b| b.is_actionable()).collect()
    }
}

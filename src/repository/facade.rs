use std::sync::Arc;

use chrono::NaiveDate;

use super::{
    BookingRepository, ClassRepository, InMemoryBookingRepo, InMemoryClassRepo, RepositoryError,
    RepositoryResult,
};
use crate::models::{Booking, Class};

/// Entry point for the request layer. Sequences the rules that span both
/// stores; everything else is forwarded unchanged.
#[derive(Clone)]
pub struct StudioRepository {
    classes: Arc<dyn ClassRepository>,
    bookings: Arc<dyn BookingRepository>,
}

impl StudioRepository {
    pub fn new(classes: Arc<dyn ClassRepository>, bookings: Arc<dyn BookingRepository>) -> Self {
        Self { classes, bookings }
    }

    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryClassRepo::new()),
            Arc::new(InMemoryBookingRepo::new()),
        )
    }

    pub async fn create_class(&self, class: &Class) -> RepositoryResult<()> {
        self.classes.create_class(class).await
    }

    pub async fn get_class_by_date(&self, date: NaiveDate) -> Option<Class> {
        self.classes.get_class_by_date(date).await
    }

    /// Books an attendee on a day that has a class.
    ///
    /// The class lookup completes (and releases the class store) before the
    /// booking store is touched.
    pub async fn create_booking(&self, booking: &Booking) -> RepositoryResult<()> {
        if self.classes.get_class_by_date(booking.date).await.is_none() {
            return Err(RepositoryError::NoClassOnDate { date: booking.date });
        }
        self.bookings.create_booking_if_absent(booking).await
    }

    pub async fn booking_exists(&self, date: NaiveDate, name: &str) -> RepositoryResult<bool> {
        self.bookings.booking_exists(date, name).await
    }

    pub async fn bookings_on(&self, date: NaiveDate) -> RepositoryResult<Vec<String>> {
        self.bookings.bookings_on(date).await
    }
}

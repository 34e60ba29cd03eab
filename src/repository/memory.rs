use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use super::{BookingRepository, ClassRepository, RepositoryError, RepositoryResult};
use crate::models::{Booking, Class, normalize_name};

#[derive(Debug, Default)]
pub struct InMemoryClassRepo {
    days: RwLock<HashMap<NaiveDate, Class>>,
}

impl InMemoryClassRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClassRepository for InMemoryClassRepo {
    async fn create_class(&self, class: &Class) -> RepositoryResult<()> {
        let mut days = self.days.write().await;

        // Nothing is written until the whole range is known to be free.
        if let Some(date) = class.days().find(|day| days.contains_key(day)) {
            return Err(RepositoryError::ClassConflict { date });
        }
        for day in class.days() {
            days.insert(day, class.clone());
        }
        Ok(())
    }

    async fn get_class_by_date(&self, date: NaiveDate) -> Option<Class> {
        self.days.read().await.get(&date).cloned()
    }
}

#[derive(Debug, Default)]
pub struct InMemoryBookingRepo {
    bookings: RwLock<HashMap<NaiveDate, Vec<String>>>,
}

impl InMemoryBookingRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

fn contains_name(names: Option<&Vec<String>>, name: &str) -> bool {
    let wanted = normalize_name(name);
    names.is_some_and(|names| names.iter().any(|n| normalize_name(n) == wanted))
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepo {
    async fn create_booking(&self, booking: &Booking) -> RepositoryResult<()> {
        self.bookings
            .write()
            .await
            .entry(booking.date)
            .or_default()
            .push(booking.name.clone());
        Ok(())
    }

    async fn create_booking_if_absent(&self, booking: &Booking) -> RepositoryResult<()> {
        let mut bookings = self.bookings.write().await;
        if contains_name(bookings.get(&booking.date), &booking.name) {
            return Err(RepositoryError::DuplicateBooking {
                date: booking.date,
                name: booking.name.clone(),
            });
        }
        bookings
            .entry(booking.date)
            .or_default()
            .push(booking.name.clone());
        Ok(())
    }

    async fn booking_exists(&self, date: NaiveDate, name: &str) -> RepositoryResult<bool> {
        Ok(contains_name(self.bookings.read().await.get(&date), name))
    }

    async fn bookings_on(&self, date: NaiveDate) -> RepositoryResult<Vec<String>> {
        Ok(self
            .bookings
            .read()
            .await
            .get(&date)
            .cloned()
            .unwrap_or_default())
    }
}

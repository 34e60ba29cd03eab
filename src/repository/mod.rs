//! Storage abstractions for classes and bookings.
//!
//! The stores only ever see validated [`Class`] and [`Booking`] values; date
//! parsing and request validation happen in the HTTP layer.

mod facade;
mod memory;

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{Booking, Class};

pub use facade::StudioRepository;
pub use memory::{InMemoryBookingRepo, InMemoryClassRepo};

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("class already exists on {date}")]
    ClassConflict { date: NaiveDate },
    #[error("no class scheduled on {date}")]
    NoClassOnDate { date: NaiveDate },
    #[error("{name} is already booked on {date}")]
    DuplicateBooking { date: NaiveDate, name: String },
    /// Backing store failure. The in-memory stores never raise it.
    #[error("storage fault: {0}")]
    StorageFault(String),
}

/// Owner of date to class occupancy.
#[async_trait]
pub trait ClassRepository: Send + Sync {
    /// Materializes `class` on every day of its range, or on none of them.
    ///
    /// Fails with [`RepositoryError::ClassConflict`] carrying the earliest
    /// already occupied day.
    async fn create_class(&self, class: &Class) -> RepositoryResult<()>;

    async fn get_class_by_date(&self, date: NaiveDate) -> Option<Class>;
}

/// Owner of date to attendee occupancy. Names compare after
/// [`normalize_name`](crate::models::normalize_name).
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Appends the attendee to the booking's date without checking for an
    /// existing entry.
    async fn create_booking(&self, booking: &Booking) -> RepositoryResult<()>;

    /// Appends the attendee unless an equivalent name is already booked on
    /// that date. Check and append happen atomically.
    async fn create_booking_if_absent(&self, booking: &Booking) -> RepositoryResult<()>;

    async fn booking_exists(&self, date: NaiveDate, name: &str) -> RepositoryResult<bool>;

    /// Names booked on `date` in booking order, as originally supplied.
    async fn bookings_on(&self, date: NaiveDate) -> RepositoryResult<Vec<String>>;
}

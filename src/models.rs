use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A run of identical daily sessions between `start_date` and `end_date`
/// (both inclusive).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct Class {
    #[schema(example = "Yoga")]
    pub name: String,
    #[schema(value_type = String, format = "date", example = "2024-01-01")]
    pub start_date: NaiveDate,
    #[schema(value_type = String, format = "date", example = "2024-01-03")]
    pub end_date: NaiveDate,
    #[schema(example = 10)]
    pub capacity: u32,
}

impl Class {
    pub fn new(
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        capacity: u32,
    ) -> Self {
        Self {
            name: name.into(),
            start_date,
            end_date,
            capacity,
        }
    }

    /// Every calendar day the class occupies, in ascending order.
    ///
    /// An inverted range (`start_date > end_date`) covers no days.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start_date
            .iter_days()
            .take_while(move |day| *day <= self.end_date)
    }
}

/// One attendee's reservation for one calendar day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct Booking {
    #[schema(example = "Alice")]
    pub name: String,
    #[schema(value_type = String, format = "date", example = "2024-01-01")]
    pub date: NaiveDate,
}

impl Booking {
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            date,
        }
    }
}

/// Attendee identity used for duplicate detection: surrounding whitespace is
/// dropped and case is folded.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

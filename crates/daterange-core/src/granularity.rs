//! Calendar granularity classification for pairs of instants.
//!
//! The classifier determines the coarsest calendar unit at which two
//! instants differ, which drives the choice of start/end patterns when
//! rendering a range. Comparisons are made over the calendar fields of
//! each instant's own timezone representation, so a range that crosses
//! midnight in UTC but not in the display timezone still classifies
//! relative to the rendered calendar date.

use std::fmt;

use jiff::Zoned;
use serde::{Deserialize, Serialize};

/// The coarsest calendar unit at which two instants are found to differ.
///
/// Variants are ordered from finest to coarsest difference: each
/// variant's precondition implies the preconditions of all variants
/// below it (`Equal` implies same day, same day implies same month, and
/// so on). Classification checks them in that order and takes the first
/// match.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    /// Start and end are the same instant
    Equal,

    /// Different instants on the same calendar day
    SameDay,

    /// Different days within the same month of the same year
    SameMonth,

    /// Different months within the same year
    SameYear,

    /// The endpoints share no calendar prefix at all
    Different,
}

impl Granularity {
    /// Classify a pair of instants by their coarsest differing calendar
    /// unit.
    ///
    /// Calendar fields are read from each instant's own zone-resolved
    /// representation rather than derived from epoch arithmetic. Pure and
    /// total: any pair of well-formed instants classifies to exactly one
    /// variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use daterange_core::Granularity;
    /// use jiff::Zoned;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let start: Zoned = "2024-06-01T10:00:00[UTC]".parse()?;
    /// let end: Zoned = "2024-06-01T14:00:00[UTC]".parse()?;
    /// assert_eq!(Granularity::classify(&start, &end), Granularity::SameDay);
    /// # Ok(())
    /// # }
    /// ```
    pub fn classify(start: &Zoned, end: &Zoned) -> Granularity {
        if start.timestamp() == end.timestamp() {
            Granularity::Equal
        } else if (start.year(), start.month(), start.day()) == (end.year(), end.month(), end.day())
        {
            Granularity::SameDay
        } else if (start.year(), start.month()) == (end.year(), end.month()) {
            Granularity::SameMonth
        } else if start.year() == end.year() {
            Granularity::SameYear
        } else {
            Granularity::Different
        }
    }

    /// Convert to the string representation used in messages and config.
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Equal => "equal",
            Granularity::SameDay => "same_day",
            Granularity::SameMonth => "same_month",
            Granularity::SameYear => "same_year",
            Granularity::Different => "different",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

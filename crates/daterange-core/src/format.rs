//! Pattern-formatting service used to render range endpoints.
//!
//! The renderer treats patterns as opaque strings and delegates all
//! interpretation to a [`PatternFormatter`]. The default implementation,
//! [`StrftimeFormatter`], drives jiff's strftime support and optionally
//! re-zones every instant into a configured override timezone before
//! formatting.

use jiff::fmt::strtime;
use jiff::tz::TimeZone;
use jiff::Zoned;

use crate::error::{RangeError, Result};

/// A service that turns an instant and an opaque pattern into text.
///
/// Implementations must be deterministic for a given (instant, pattern)
/// pair and fail only when the pattern itself cannot be interpreted;
/// such failures propagate unchanged out of rendering.
pub trait PatternFormatter {
    /// Format one instant with one pattern.
    fn format(&self, instant: &Zoned, pattern: &str) -> Result<String>;
}

/// Default formatter backed by jiff's strftime implementation.
///
/// Without an override, each instant renders in its own timezone. With
/// one, both endpoints of a range are re-zoned into the override before
/// formatting, which keeps a range's two segments on a single clock.
#[derive(Debug, Clone, Default)]
pub struct StrftimeFormatter {
    timezone_override: Option<TimeZone>,
}

impl StrftimeFormatter {
    /// Create a formatter that renders instants in their own timezone.
    pub fn new() -> Self {
        StrftimeFormatter {
            timezone_override: None,
        }
    }

    /// Create a formatter that re-zones instants into `timezone` before
    /// formatting.
    pub fn with_timezone_override(timezone: TimeZone) -> Self {
        StrftimeFormatter {
            timezone_override: Some(timezone),
        }
    }
}

impl PatternFormatter for StrftimeFormatter {
    fn format(&self, instant: &Zoned, pattern: &str) -> Result<String> {
        let rezoned;
        let instant = match &self.timezone_override {
            Some(tz) => {
                rezoned = instant.timestamp().to_zoned(tz.clone());
                &rezoned
            }
            None => instant,
        };
        strtime::format(pattern, instant).map_err(|source| RangeError::format(pattern, source))
    }
}

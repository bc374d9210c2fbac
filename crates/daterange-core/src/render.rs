//! Range rendering: classify, select patterns, format, join.
//!
//! This is the whole pipeline in one stateless pass. The only
//! side-effecting dependency is the formatting callback, injected per
//! call, so any number of ranges can be rendered concurrently without
//! coordination.

use std::fmt;

use jiff::Zoned;

use crate::error::Result;
use crate::granularity::Granularity;
use crate::profile::StyleProfile;

/// Everything one render call needs; constructed per call, borrowed
/// from the caller.
#[derive(Debug, Clone, Copy)]
pub struct RangeInput<'a> {
    /// Start of the range
    pub start: &'a Zoned,
    /// End of the range
    pub end: &'a Zoned,
    /// The pattern table to select from
    pub profile: &'a StyleProfile,
    /// Literal separator text, rendered with one space of padding on
    /// each side
    pub separator: &'a str,
}

/// A rendered range, either collapsed to a single instant or split into
/// start, separator, and end segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedRange {
    /// Start equalled end; one formatted segment, no separator
    Single(String),
    /// A proper range with both endpoints formatted
    Range {
        start: String,
        /// The configured separator padded with a single space each side
        separator: String,
        end: String,
    },
}

impl RenderedRange {
    /// The formatted start segment (the whole text for a collapsed
    /// range).
    pub fn start_text(&self) -> &str {
        match self {
            RenderedRange::Single(text) => text,
            RenderedRange::Range { start, .. } => start,
        }
    }

    /// The formatted end segment, absent for a collapsed range.
    pub fn end_text(&self) -> Option<&str> {
        match self {
            RenderedRange::Single(_) => None,
            RenderedRange::Range { end, .. } => Some(end),
        }
    }
}

impl fmt::Display for RenderedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderedRange::Single(text) => f.write_str(text),
            RenderedRange::Range {
                start,
                separator,
                end,
            } => write!(f, "{start}{separator}{end}"),
        }
    }
}

/// Render a range through an injected formatting callback.
///
/// Classifies the endpoints, selects the pattern pair the profile holds
/// for that granularity, formats each endpoint, and joins with the
/// padded separator. When start equals end the result collapses to a
/// single segment and the separator is not used at all.
///
/// Formatter failures propagate unchanged; there is no fallback pattern
/// and no partial output.
///
/// # Examples
///
/// ```rust
/// use daterange_core::{render, PatternFormatter, RangeInput, StrftimeFormatter, StyleProfile};
/// use jiff::Zoned;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let start: Zoned = "2024-06-01T10:00:00[UTC]".parse()?;
/// let end: Zoned = "2024-06-01T14:00:00[UTC]".parse()?;
/// let profile = StyleProfile::long();
/// let formatter = StrftimeFormatter::new();
///
/// let input = RangeInput {
///     start: &start,
///     end: &end,
///     profile: &profile,
///     separator: "to",
/// };
/// let rendered = render(&input, |instant, pattern| formatter.format(instant, pattern))?;
/// assert_eq!(rendered.to_string(), "June 01, 2024 - 10:00 AM to 02:00 PM");
/// # Ok(())
/// # }
/// ```
pub fn render<F>(input: &RangeInput<'_>, format_fn: F) -> Result<RenderedRange>
where
    F: Fn(&Zoned, &str) -> Result<String>,
{
    let granularity = Granularity::classify(input.start, input.end);
    let (start_pattern, end_pattern) = input.profile.patterns_for(granularity)?;

    if granularity == Granularity::Equal {
        return Ok(RenderedRange::Single(format_fn(input.start, start_pattern)?));
    }

    Ok(RenderedRange::Range {
        start: format_fn(input.start, start_pattern)?,
        separator: format!(" {} ", input.separator),
        end: format_fn(input.end, end_pattern)?,
    })
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use jiff::tz::TimeZone;

    use super::*;
    use crate::error::RangeError;
    use crate::format::{PatternFormatter, StrftimeFormatter};

    fn utc(year: i16, month: i8, day: i8, hour: i8, minute: i8) -> Zoned {
        date(year, month, day)
            .at(hour, minute, 0, 0)
            .to_zoned(TimeZone::UTC)
            .expect("valid test datetime")
    }

    fn render_with(
        start: &Zoned,
        end: &Zoned,
        profile: &StyleProfile,
        separator: &str,
    ) -> Result<RenderedRange> {
        let formatter = StrftimeFormatter::new();
        let input = RangeInput {
            start,
            end,
            profile,
            separator,
        };
        render(&input, |instant, pattern| formatter.format(instant, pattern))
    }

    #[test]
    fn test_equal_collapses_to_single_segment() {
        let start = utc(2024, 6, 1, 10, 0);
        let rendered =
            render_with(&start, &start, &StyleProfile::long(), "-").expect("render succeeds");

        assert_eq!(
            rendered,
            RenderedRange::Single("June 01, 2024 - 10:00 AM".to_string())
        );
        assert_eq!(rendered.end_text(), None);
        assert!(!rendered.to_string().contains(" - 10:00 AM - "));
    }

    #[test]
    fn test_same_day_short_profile() {
        // Start carries the full date, end carries only the time.
        let start = utc(2024, 6, 1, 10, 0);
        let end = utc(2024, 6, 1, 14, 0);
        let rendered =
            render_with(&start, &end, &StyleProfile::short(), "-").expect("render succeeds");

        assert_eq!(rendered.to_string(), "06/01/2024 - 10:00 am - 02:00 pm");
        assert_eq!(rendered.start_text(), "06/01/2024 - 10:00 am");
        assert_eq!(rendered.end_text(), Some("02:00 pm"));
    }

    #[test]
    fn test_same_month_long_profile() {
        let start = utc(2024, 6, 1, 10, 0);
        let end = utc(2024, 6, 15, 10, 0);
        let rendered =
            render_with(&start, &end, &StyleProfile::long(), "-").expect("render succeeds");

        assert_eq!(rendered.to_string(), "June 01 - 15, 2024");
    }

    #[test]
    fn test_same_year_profiles() {
        let start = utc(2024, 6, 1, 10, 0);
        let end = utc(2024, 9, 15, 10, 0);

        let long =
            render_with(&start, &end, &StyleProfile::long(), "-").expect("render succeeds");
        assert_eq!(long.to_string(), "June 01 - September 15, 2024");

        let short =
            render_with(&start, &end, &StyleProfile::short(), "-").expect("render succeeds");
        assert_eq!(short.to_string(), "06/01 - 09/15/2024");
    }

    #[test]
    fn test_different_years_repeat_full_date() {
        let start = utc(2024, 1, 1, 0, 0);
        let end = utc(2025, 1, 1, 0, 0);
        let rendered =
            render_with(&start, &end, &StyleProfile::long(), "-").expect("render succeeds");

        assert_eq!(rendered.to_string(), "January 01, 2024 - January 01, 2025");
    }

    #[test]
    fn test_separator_is_literal_with_single_space_padding() {
        let start = utc(2024, 6, 1, 10, 0);
        let end = utc(2024, 6, 15, 10, 0);
        let rendered =
            render_with(&start, &end, &StyleProfile::long(), "until").expect("render succeeds");

        match rendered {
            RenderedRange::Range { separator, .. } => assert_eq!(separator, " until "),
            other => panic!("Expected a proper range, got {other:?}"),
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let start = utc(2024, 6, 1, 10, 0);
        let end = utc(2024, 6, 1, 14, 0);
        let profile = StyleProfile::short();

        let first = render_with(&start, &end, &profile, "-").expect("render succeeds");
        let second = render_with(&start, &end, &profile, "-").expect("render succeeds");
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn test_missing_profile_entry_fails_before_formatting() {
        let profile = StyleProfile {
            label: "Custom".to_string(),
            same_instant: Some("%Y".to_string()),
            ..StyleProfile::default()
        };
        let start = utc(2024, 6, 1, 10, 0);
        let end = utc(2024, 6, 15, 10, 0);

        let result = render_with(&start, &end, &profile, "-");
        assert!(matches!(
            result,
            Err(RangeError::Configuration { .. })
        ));
    }

    #[test]
    fn test_format_error_propagates_unchanged() {
        let profile = StyleProfile {
            same_month_start: Some("%".to_string()),
            ..StyleProfile::long()
        };
        let start = utc(2024, 6, 1, 10, 0);
        let end = utc(2024, 6, 15, 10, 0);

        let result = render_with(&start, &end, &profile, "-");
        match result.expect_err("dangling specifier must fail") {
            RangeError::Format { pattern, .. } => assert_eq!(pattern, "%"),
            other => panic!("Expected Format error, got {other:?}"),
        }
    }
}

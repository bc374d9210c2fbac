use daterange_core::{render, PatternFormatter, RangeInput, RenderedRange, Result, StyleProfile};
use jiff::civil::date;
use jiff::tz::TimeZone;
use jiff::Zoned;

/// Helper function to build a UTC instant from civil fields
pub fn utc(year: i16, month: i8, day: i8, hour: i8, minute: i8) -> Zoned {
    date(year, month, day)
        .at(hour, minute, 0, 0)
        .to_zoned(TimeZone::UTC)
        .expect("valid test datetime")
}

/// Helper function to render a range with a given formatter
pub fn render_range(
    start: &Zoned,
    end: &Zoned,
    profile: &StyleProfile,
    separator: &str,
    formatter: &dyn PatternFormatter,
) -> Result<RenderedRange> {
    let input = RangeInput {
        start,
        end,
        profile,
        separator,
    };
    render(&input, |instant, pattern| formatter.format(instant, pattern))
}

//! Style profiles: named pattern tables keyed by range granularity.
//!
//! A [`StyleProfile`] bundles one strftime pattern (or pattern pair) per
//! [`Granularity`] outcome, so that a range sharing a calendar prefix can
//! drop the redundant repetition from its end segment. Two built-in
//! profiles are provided, reproducing the classic "nice" long and short
//! format tables; additional profiles can be supplied externally as JSON.
//!
//! Pattern strings are opaque to this module. They are only interpreted
//! by the pattern-formatting service that the renderer is given (see
//! [`crate::format`]).

use std::str::FromStr;

use jiff::Zoned;
use serde::{Deserialize, Serialize};

use crate::error::{RangeError, Result};
use crate::format::PatternFormatter;
use crate::granularity::Granularity;

/// A named, per-granularity table of format patterns.
///
/// Every slot is optional so that externally supplied profiles can be
/// deserialized even when incomplete; [`StyleProfile::patterns_for`]
/// checks the slot it needs and fails with a configuration error rather
/// than silently falling back to another pattern. The two built-in
/// profiles are total over the granularity domain, which
/// [`StyleProfile::is_total`] asserts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StyleProfile {
    /// Human-readable label shown when listing profiles
    pub label: String,
    /// Pattern used for both endpoints when start equals end
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub same_instant: Option<String>,
    /// Start pattern for a range within one calendar day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub same_day_start: Option<String>,
    /// End pattern for a range within one calendar day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub same_day_end: Option<String>,
    /// Start pattern for a range within one month
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub same_month_start: Option<String>,
    /// End pattern for a range within one month
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub same_month_end: Option<String>,
    /// Start pattern for a range within one year
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub same_year_start: Option<String>,
    /// End pattern for a range within one year
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub same_year_end: Option<String>,
    /// Start pattern for a range sharing no calendar prefix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub different_start: Option<String>,
    /// End pattern for a range sharing no calendar prefix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub different_end: Option<String>,
}

impl StyleProfile {
    /// The built-in "Nice long" profile: spelled-out month names and
    /// uppercase AM/PM.
    pub fn long() -> Self {
        StyleProfile {
            label: "Nice long".to_string(),
            same_instant: Some("%B %d, %Y - %I:%M %p".to_string()),
            same_day_start: Some("%B %d, %Y - %I:%M %p".to_string()),
            same_day_end: Some("%I:%M %p".to_string()),
            same_month_start: Some("%B %d".to_string()),
            same_month_end: Some("%d, %Y".to_string()),
            same_year_start: Some("%B %d".to_string()),
            same_year_end: Some("%B %d, %Y".to_string()),
            different_start: Some("%B %d, %Y".to_string()),
            different_end: Some("%B %d, %Y".to_string()),
        }
    }

    /// The built-in "Nice short" profile: numeric dates and lowercase
    /// am/pm.
    pub fn short() -> Self {
        StyleProfile {
            label: "Nice short".to_string(),
            same_instant: Some("%m/%d/%Y - %I:%M %P".to_string()),
            same_day_start: Some("%m/%d/%Y - %I:%M %P".to_string()),
            same_day_end: Some("%I:%M %P".to_string()),
            same_month_start: Some("%m/%d".to_string()),
            same_month_end: Some("%d/%Y".to_string()),
            same_year_start: Some("%m/%d".to_string()),
            same_year_end: Some("%m/%d/%Y".to_string()),
            different_start: Some("%m/%d/%Y".to_string()),
            different_end: Some("%m/%d/%Y".to_string()),
        }
    }

    /// Parse an externally supplied profile from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Look up the (start, end) pattern pair for a classified range.
    ///
    /// `Equal` uses the single-instant pattern for both slots. A missing
    /// slot is a configuration error naming the profile and granularity;
    /// the lookup never substitutes a pattern from another slot.
    pub fn patterns_for(&self, granularity: Granularity) -> Result<(&str, &str)> {
        let pair = match granularity {
            Granularity::Equal => (self.same_instant.as_deref(), self.same_instant.as_deref()),
            Granularity::SameDay => (self.same_day_start.as_deref(), self.same_day_end.as_deref()),
            Granularity::SameMonth => (
                self.same_month_start.as_deref(),
                self.same_month_end.as_deref(),
            ),
            Granularity::SameYear => (
                self.same_year_start.as_deref(),
                self.same_year_end.as_deref(),
            ),
            Granularity::Different => {
                (self.different_start.as_deref(), self.different_end.as_deref())
            }
        };
        match pair {
            (Some(start), Some(end)) => Ok((start, end)),
            _ => Err(RangeError::configuration(format!(
                "profile '{}' has no pattern entry for {} ranges",
                self.label, granularity
            ))),
        }
    }

    /// Whether the profile has a pattern pair for every granularity.
    pub fn is_total(&self) -> bool {
        const ALL: [Granularity; 5] = [
            Granularity::Equal,
            Granularity::SameDay,
            Granularity::SameMonth,
            Granularity::SameYear,
            Granularity::Different,
        ];
        ALL.iter().all(|g| self.patterns_for(*g).is_ok())
    }
}

/// Type-safe enumeration of the built-in profiles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BuiltinProfile {
    /// The "Nice long" table with spelled-out month names
    #[default]
    Long,

    /// The "Nice short" table with numeric dates
    Short,
}

impl FromStr for BuiltinProfile {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "long" => Ok(BuiltinProfile::Long),
            "short" => Ok(BuiltinProfile::Short),
            _ => Err(format!("Unknown profile: {s}")),
        }
    }
}

impl BuiltinProfile {
    /// All built-in profiles, in presentation order.
    pub const ALL: [BuiltinProfile; 2] = [BuiltinProfile::Long, BuiltinProfile::Short];

    /// Convert to the configuration string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuiltinProfile::Long => "long",
            BuiltinProfile::Short => "short",
        }
    }

    /// Materialize the full pattern table for this profile.
    pub fn profile(&self) -> StyleProfile {
        match self {
            BuiltinProfile::Long => StyleProfile::long(),
            BuiltinProfile::Short => StyleProfile::short(),
        }
    }
}

/// Produce `(label, sample)` pairs for the built-in profiles.
///
/// The sample renders the given instant with the profile's
/// single-instant pattern, which is what a host UI shows next to each
/// option when letting an operator pick a profile.
pub fn previews(example: &Zoned, formatter: &dyn PatternFormatter) -> Result<Vec<(String, String)>> {
    let mut out = Vec::with_capacity(BuiltinProfile::ALL.len());
    for builtin in BuiltinProfile::ALL {
        let profile = builtin.profile();
        let (pattern, _) = profile.patterns_for(Granularity::Equal)?;
        let sample = formatter.format(example, pattern)?;
        out.push((profile.label, sample));
    }
    Ok(out)
}

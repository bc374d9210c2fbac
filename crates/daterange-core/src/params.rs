//! Configuration parameters for range rendering.
//!
//! These structures carry the recognized rendering options across
//! interface layers (CLI, host settings forms, config files) without
//! framework-specific derives. Interface layers convert their own
//! argument types into [`RenderParams`] and call
//! [`RenderParams::resolve`] to turn the raw strings into a profile and
//! formatter.

use std::str::FromStr;

use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};

use crate::error::{RangeError, Result};
use crate::format::StrftimeFormatter;
use crate::profile::{BuiltinProfile, StyleProfile};

fn default_profile() -> String {
    BuiltinProfile::Long.as_str().to_string()
}

fn default_separator() -> String {
    "-".to_string()
}

/// Recognized rendering options.
///
/// All fields have defaults so a deserialized empty object is a valid
/// configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderParams {
    /// Name of the style profile to render with (default "long")
    #[serde(default = "default_profile")]
    pub profile: String,
    /// Literal separator placed between start and end text (default "-")
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Optional timezone identifier applied to both formatted endpoints
    /// instead of each instant's own timezone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone_override: Option<String>,
}

impl Default for RenderParams {
    fn default() -> Self {
        RenderParams {
            profile: default_profile(),
            separator: default_separator(),
            timezone_override: None,
        }
    }
}

impl RenderParams {
    /// Look up the named built-in profile.
    ///
    /// # Errors
    ///
    /// `RangeError::Configuration` when the name matches no built-in
    /// profile.
    pub fn profile(&self) -> Result<StyleProfile> {
        BuiltinProfile::from_str(&self.profile)
            .map(|builtin| builtin.profile())
            .map_err(RangeError::configuration)
    }

    /// Build the formatter, resolving the timezone override if present.
    ///
    /// # Errors
    ///
    /// `RangeError::Configuration` when the override is not a known
    /// timezone identifier.
    pub fn formatter(&self) -> Result<StrftimeFormatter> {
        match &self.timezone_override {
            Some(name) => {
                let tz = TimeZone::get(name).map_err(|err| {
                    RangeError::configuration(format!("unknown timezone '{name}': {err}"))
                })?;
                Ok(StrftimeFormatter::with_timezone_override(tz))
            }
            None => Ok(StrftimeFormatter::new()),
        }
    }

    /// Resolve both the profile and the formatter in one step.
    pub fn resolve(&self) -> Result<(StyleProfile, StrftimeFormatter)> {
        Ok((self.profile()?, self.formatter()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = RenderParams::default();
        assert_eq!(params.profile, "long");
        assert_eq!(params.separator, "-");
        assert_eq!(params.timezone_override, None);
    }

    #[test]
    fn test_empty_object_deserializes_to_defaults() {
        let params: RenderParams = serde_json::from_str("{}").expect("defaults apply");
        assert_eq!(params.profile, "long");
        assert_eq!(params.separator, "-");
    }

    #[test]
    fn test_resolve_builtin_profiles() {
        let params = RenderParams {
            profile: "short".to_string(),
            ..RenderParams::default()
        };
        let (profile, _formatter) = params.resolve().expect("short resolves");
        assert_eq!(profile.label, "Nice short");
    }

    #[test]
    fn test_unknown_profile_is_configuration_error() {
        let params = RenderParams {
            profile: "fancy".to_string(),
            ..RenderParams::default()
        };
        match params.profile().expect_err("unknown name must fail") {
            RangeError::Configuration { message } => assert!(message.contains("fancy")),
            other => panic!("Expected Configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_timezone_is_configuration_error() {
        let params = RenderParams {
            timezone_override: Some("Not/AZone".to_string()),
            ..RenderParams::default()
        };
        match params.formatter().expect_err("bad timezone must fail") {
            RangeError::Configuration { message } => assert!(message.contains("Not/AZone")),
            other => panic!("Expected Configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_timezone_override_resolves() {
        let params = RenderParams {
            timezone_override: Some("America/New_York".to_string()),
            ..RenderParams::default()
        };
        assert!(params.formatter().is_ok());
    }
}

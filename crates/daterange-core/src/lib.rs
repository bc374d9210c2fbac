//! Core library for rendering date ranges without redundant repetition.
//!
//! Given a start and end instant, this crate picks the coarsest calendar
//! granularity at which the two differ (same day, same month, same year,
//! or neither), selects a start/end pattern pair tuned to that
//! granularity from a style profile, formats both endpoints through an
//! injected pattern-formatting service, and joins them with a
//! separator. A range whose endpoints coincide collapses to a single
//! formatted instant.
//!
//! The result is "June 01, 2024 - 10:00 AM to 02:00 PM" rather than the
//! full date repeated on both sides of the separator.
//!
//! # Architecture
//!
//! The pipeline is a stateless pass over immutable inputs:
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │  Granularity │    │ StyleProfile │    │   render     │
//! │  ::classify  │───▶│ pattern pair │───▶│ format+join  │
//! └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! - [`Granularity`]: the classifier, pure and total over instant pairs
//! - [`StyleProfile`]: named pattern tables; two built-ins plus JSON
//!   loading for externally supplied profiles
//! - [`render`]: applies the pair through a formatting callback — the
//!   only side-effecting dependency, injected per call
//! - [`StrftimeFormatter`]: the default jiff-backed formatting service,
//!   with optional timezone override
//! - [`RenderParams`]: the string-level configuration surface used by
//!   interface layers
//!
//! Profiles and params are plain immutable data; nothing in this crate
//! holds module-level mutable state, so concurrent rendering needs no
//! coordination.
//!
//! # Quick Start
//!
//! ```rust
//! use daterange_core::{render, PatternFormatter, RangeInput, RenderParams};
//! use jiff::Zoned;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let start: Zoned = "2024-06-01T10:00:00[UTC]".parse()?;
//! let end: Zoned = "2024-06-01T14:00:00[UTC]".parse()?;
//!
//! let params = RenderParams::default();
//! let (profile, formatter) = params.resolve()?;
//!
//! let input = RangeInput {
//!     start: &start,
//!     end: &end,
//!     profile: &profile,
//!     separator: &params.separator,
//! };
//! let rendered = render(&input, |instant, pattern| formatter.format(instant, pattern))?;
//! assert_eq!(rendered.to_string(), "June 01, 2024 - 10:00 AM - 02:00 PM");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod format;
pub mod granularity;
pub mod params;
pub mod profile;
pub mod render;

// Re-export commonly used types
pub use error::{RangeError, Result};
pub use format::{PatternFormatter, StrftimeFormatter};
pub use granularity::Granularity;
pub use params::RenderParams;
pub use profile::{previews, BuiltinProfile, StyleProfile};
pub use render::{render, RangeInput, RenderedRange};

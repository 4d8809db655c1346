//! Seconds to `H:MM:SS` rendering.
//!
//! Hours and minutes are always derived by truncating division. The seconds
//! field follows [`Fractional`]: with [`Fractional::Preserve`] it is the raw
//! input modulo 60 and may carry a fraction, with [`Fractional::Truncate`]
//! the whole input is truncated to integer seconds first.

mod error;
mod pad;
mod parse;

pub use error::FormatError;
pub use parse::parse_seconds;

use std::fmt;

use serde::Deserialize;
use tracing::debug;

use pad::RawFields;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fractional {
    #[serde(alias = "raw")]
    Preserve,
    #[default]
    #[serde(alias = "floor")]
    Truncate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Padding {
    #[default]
    PerField,
    /// Lone-digit substitution over the joined string. Always pads hours.
    #[serde(alias = "regex")]
    Pattern,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoursStyle {
    #[default]
    #[serde(alias = "h")]
    Natural,
    #[serde(alias = "hh")]
    TwoDigit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    pub fractional: Fractional,
    pub padding: Padding,
    pub hours: HoursStyle,
    pub strict: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            fractional: Fractional::Truncate,
            padding: Padding::PerField,
            hours: HoursStyle::Natural,
            strict: true,
        }
    }
}

impl FormatOptions {
    /// No validation, fraction kept in the seconds field.
    pub const fn lenient() -> Self {
        Self {
            fractional: Fractional::Preserve,
            padding: Padding::PerField,
            hours: HoursStyle::Natural,
            strict: false,
        }
    }
}

/// Whole-second duration split into its display fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HmsParts {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl HmsParts {
    pub const fn from_secs(total_secs: u64) -> Self {
        Self {
            hours: total_secs / SECS_PER_HOUR,
            minutes: (total_secs / SECS_PER_MINUTE) % 60,
            seconds: total_secs % SECS_PER_MINUTE,
        }
    }

    /// `None` when the fields add up past `u64::MAX`.
    pub fn total_secs(&self) -> Option<u64> {
        self.hours
            .checked_mul(SECS_PER_HOUR)?
            .checked_add(self.minutes.checked_mul(SECS_PER_MINUTE)?)?
            .checked_add(self.seconds)
    }

    pub fn render(&self, hours: HoursStyle) -> String {
        match hours {
            HoursStyle::Natural => self.to_string(),
            HoursStyle::TwoDigit => format!(
                "{:02}:{:02}:{:02}",
                self.hours, self.minutes, self.seconds
            ),
        }
    }

    fn raw_fields(&self) -> RawFields {
        RawFields {
            hours: self.hours.to_string(),
            minutes: self.minutes.to_string(),
            seconds: self.seconds.to_string(),
        }
    }
}

impl fmt::Display for HmsParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

impl From<u64> for HmsParts {
    fn from(total_secs: u64) -> Self {
        Self::from_secs(total_secs)
    }
}

pub fn format_duration(total_secs: u64) -> String {
    HmsParts::from_secs(total_secs).to_string()
}

/// Formats any `f64` without validation, keeping a fractional seconds field.
///
/// Negative and non-finite input still produces a string; its content is
/// whatever the float arithmetic yields.
pub fn format_seconds(total_secs: f64) -> String {
    DurationFormatter::new(FormatOptions::lenient()).render(total_secs)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DurationFormatter {
    options: FormatOptions,
}

impl DurationFormatter {
    pub const fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Whole seconds below 2^128 are split with integer arithmetic, so the
    /// fields stay exact for any integer the `f64` holds in that range. Above
    /// it (or with a fractional or out-of-domain input) the fields come from
    /// `f64` arithmetic and lose precision once the value passes 2^53.
    pub fn format(&self, total_secs: f64) -> Result<String, FormatError> {
        if self.options.strict {
            FormatError::check(total_secs)?;
        }
        let rendered = self.render(total_secs);
        debug!(input = total_secs, output = %rendered, "formatted duration");
        Ok(rendered)
    }

    pub fn format_secs(&self, total_secs: u64) -> String {
        let parts = HmsParts::from_secs(total_secs);
        match self.options.padding {
            Padding::PerField => parts.render(self.options.hours),
            Padding::Pattern => pad::pattern(&parts.raw_fields()),
        }
    }

    fn render(&self, total_secs: f64) -> String {
        let fields = match self.options.fractional {
            Fractional::Truncate => {
                let whole = total_secs.trunc();
                if let Some(secs) = whole_secs(whole) {
                    return self.format_secs(secs);
                }
                wide_fields(whole).unwrap_or_else(|| float_fields(whole))
            }
            Fractional::Preserve => float_fields(total_secs),
        };

        match self.options.padding {
            Padding::PerField => pad::per_field(&fields, self.options.hours),
            Padding::Pattern => pad::pattern(&fields),
        }
    }
}

// u64::MAX is not representable as f64; the bound below is 2^64.
fn whole_secs(value: f64) -> Option<u64> {
    if value >= 0.0 && value < u64::MAX as f64 {
        Some(value as u64)
    } else {
        None
    }
}

// u128::MAX as f64 rounds up to 2^128, which is excluded.
fn wide_fields(value: f64) -> Option<RawFields> {
    if !(value >= 0.0 && value < u128::MAX as f64) {
        return None;
    }
    let total = value as u128;
    Some(RawFields {
        hours: (total / SECS_PER_HOUR as u128).to_string(),
        minutes: ((total / SECS_PER_MINUTE as u128) % 60).to_string(),
        seconds: (total % SECS_PER_MINUTE as u128).to_string(),
    })
}

fn float_fields(total_secs: f64) -> RawFields {
    let hours = (total_secs / SECS_PER_HOUR as f64).trunc();
    let minutes = (total_secs / SECS_PER_MINUTE as f64).trunc() % 60.0;
    let seconds = total_secs % SECS_PER_MINUTE as f64;
    RawFields {
        hours: render_number(hours),
        minutes: render_number(minutes),
        seconds: render_number(seconds),
    }
}

fn render_number(value: f64) -> String {
    if value == 0.0 {
        // drop the sign of -0
        return "0".to_string();
    }
    value.to_string()
}

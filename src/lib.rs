pub mod app;
pub mod config;
pub mod format;

pub use format::{
    DurationFormatter, FormatError, FormatOptions, Fractional, HmsParts, HoursStyle, Padding,
    format_duration, format_seconds, parse_seconds,
};

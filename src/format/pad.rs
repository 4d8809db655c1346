use once_cell::sync::Lazy;
use regex::Regex;

use super::HoursStyle;

static LONE_DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d)\b").unwrap());

/// Unpadded textual fields, in hours, minutes, seconds order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawFields {
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
}

impl RawFields {
    fn joined(&self) -> String {
        format!("{}:{}:{}", self.hours, self.minutes, self.seconds)
    }
}

/// Pads minutes and seconds (and hours when asked) to two digits.
///
/// Only the integer part of a field counts towards its width, so a
/// fractional seconds field `1.5` becomes `01.5`.
pub(crate) fn per_field(fields: &RawFields, hours: HoursStyle) -> String {
    let hours = match hours {
        HoursStyle::Natural => fields.hours.clone(),
        HoursStyle::TwoDigit => pad_field(&fields.hours),
    };
    format!(
        "{hours}:{}:{}",
        pad_field(&fields.minutes),
        pad_field(&fields.seconds)
    )
}

/// Prefixes every isolated digit in the joined string with `0`.
///
/// This also touches digits after a decimal point: `0:0:1.5` turns into
/// `00:00:01.05`.
pub(crate) fn pattern(fields: &RawFields) -> String {
    LONE_DIGIT_RE
        .replace_all(&fields.joined(), "0${1}")
        .into_owned()
}

fn pad_field(field: &str) -> String {
    let integer = field.split('.').next().unwrap_or(field);
    if integer.len() == 1 && integer.as_bytes()[0].is_ascii_digit() {
        format!("0{field}")
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(hours: &str, minutes: &str, seconds: &str) -> RawFields {
        RawFields {
            hours: hours.into(),
            minutes: minutes.into(),
            seconds: seconds.into(),
        }
    }

    #[test]
    fn per_field_leaves_wide_fields_alone() {
        let raw = fields("100", "5", "42");
        assert_eq!(per_field(&raw, HoursStyle::Natural), "100:05:42");
        assert_eq!(per_field(&raw, HoursStyle::TwoDigit), "100:05:42");
    }

    #[test]
    fn per_field_hours_style() {
        let raw = fields("1", "1", "1");
        assert_eq!(per_field(&raw, HoursStyle::Natural), "1:01:01");
        assert_eq!(per_field(&raw, HoursStyle::TwoDigit), "01:01:01");
    }

    #[test]
    fn per_field_pads_integer_part_of_fraction() {
        assert_eq!(per_field(&fields("0", "0", "1.5"), HoursStyle::Natural), "0:00:01.5");
        assert_eq!(per_field(&fields("0", "0", "12.25"), HoursStyle::Natural), "0:00:12.25");
    }

    #[test]
    fn per_field_does_not_pad_signed_fields() {
        assert_eq!(pad_field("-1"), "-1");
        assert_eq!(pad_field(""), "");
    }

    #[test]
    fn pattern_pads_every_lone_digit() {
        assert_eq!(pattern(&fields("0", "0", "0")), "00:00:00");
        assert_eq!(pattern(&fields("1", "1", "1")), "01:01:01");
        assert_eq!(pattern(&fields("100", "0", "0")), "100:00:00");
    }

    #[test]
    fn pattern_rewrites_fraction_digits() {
        assert_eq!(pattern(&fields("0", "0", "1.5")), "00:00:01.05");
    }
}

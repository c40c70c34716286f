//! Time-of-day value used throughout the rule schema.
//!
//! This module defines [`TimeValue`], an (hour, minute) pair carried as
//! two-digit zero-padded strings. It is an opaque, comparable label: the
//! core never performs arithmetic on it, the external classification engine
//! interprets it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{RuleError, RuleResult};

/// A time-of-day label with string-coded hour and minute fields.
///
/// Hours range `"00".."23"`, minutes `"00".."59"`; both are always exactly
/// two digits. Rendered as `"HH:MM"` via [`fmt::Display`].
///
/// # Examples
///
/// ```
/// use worktime_rules::models::TimeValue;
///
/// let t = TimeValue::from_hm(9, 30);
/// assert_eq!(t.hour, "09");
/// assert_eq!(t.minute, "30");
/// assert_eq!(t.to_string(), "09:30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeValue {
    /// Two-digit hour, "00" through "23".
    pub hour: String,
    /// Two-digit minute, "00" through "59".
    pub minute: String,
}

impl TimeValue {
    /// Creates a time value from numeric hour and minute, zero-padding both.
    ///
    /// Out-of-range inputs are clamped into the valid range rather than
    /// rejected; use [`TimeValue::new`] when rejection is wanted.
    pub fn from_hm(hour: u8, minute: u8) -> Self {
        Self {
            hour: format!("{:02}", hour.min(23)),
            minute: format!("{:02}", minute.min(59)),
        }
    }

    /// Creates a time value, rejecting out-of-range hours or minutes.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvalidTime`] if `hour > 23` or `minute > 59`.
    ///
    /// # Examples
    ///
    /// ```
    /// use worktime_rules::models::TimeValue;
    ///
    /// assert!(TimeValue::new(23, 59).is_ok());
    /// assert!(TimeValue::new(24, 0).is_err());
    /// ```
    pub fn new(hour: u8, minute: u8) -> RuleResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(RuleError::InvalidTime {
                value: format!("{:02}:{:02}", hour, minute),
            });
        }
        Ok(Self {
            hour: format!("{:02}", hour),
            minute: format!("{:02}", minute),
        })
    }

    /// Returns true if both fields are well-formed two-digit values in range.
    pub fn is_valid(&self) -> bool {
        let in_range = |s: &str, max: u8| {
            s.len() == 2
                && s.bytes().all(|b| b.is_ascii_digit())
                && s.parse::<u8>().map(|n| n <= max).unwrap_or(false)
        };
        in_range(&self.hour, 23) && in_range(&self.minute, 59)
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hm_zero_pads() {
        let t = TimeValue::from_hm(7, 5);
        assert_eq!(t.hour, "07");
        assert_eq!(t.minute, "05");
    }

    #[test]
    fn test_from_hm_clamps_out_of_range() {
        let t = TimeValue::from_hm(99, 99);
        assert_eq!(t.to_string(), "23:59");
    }

    #[test]
    fn test_new_rejects_out_of_range_hour() {
        match TimeValue::new(24, 0) {
            Err(RuleError::InvalidTime { value }) => assert_eq!(value, "24:00"),
            other => panic!("Expected InvalidTime, got {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_out_of_range_minute() {
        assert!(TimeValue::new(12, 60).is_err());
    }

    #[test]
    fn test_display_renders_hh_mm() {
        assert_eq!(TimeValue::from_hm(0, 0).to_string(), "00:00");
        assert_eq!(TimeValue::from_hm(23, 59).to_string(), "23:59");
    }

    #[test]
    fn test_is_valid() {
        assert!(TimeValue::from_hm(22, 0).is_valid());

        let bad = TimeValue {
            hour: "25".to_string(),
            minute: "00".to_string(),
        };
        assert!(!bad.is_valid());

        let malformed = TimeValue {
            hour: "9".to_string(),
            minute: "00".to_string(),
        };
        assert!(!malformed.is_valid());
    }

    #[test]
    fn test_serialization_round_trip() {
        let t = TimeValue::from_hm(22, 0);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"{"hour":"22","minute":"00"}"#);

        let back: TimeValue = serde_json::from_str(&json).unwrap();
        assert_eq!(t, back);
    }
}

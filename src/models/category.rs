//! Work category keys.
//!
//! This module defines the closed set of categories a rule can classify
//! minutes into, and the fixed ordering used everywhere tags are rendered.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A work category recognized by a rule.
///
/// `Basic` is always active for every rule; the other four are active only
/// when the matching enabling flag on the rule is set.
///
/// # Example
///
/// ```
/// use worktime_rules::models::Category;
///
/// assert_eq!(Category::Night.to_string(), "night");
/// assert_eq!(Category::ORDERED[0], Category::Basic);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Ordinary working time inside the day window.
    Basic,
    /// Work before the basic window begins.
    Early,
    /// Work beyond the basic window or a fixed target.
    Overtime,
    /// Work inside the configured night window.
    Night,
    /// Work on a holiday.
    Holiday,
}

impl Category {
    /// All categories in the fixed display order.
    ///
    /// Derived tags always list `Basic` first, then any enabled optional
    /// categories in this order.
    pub const ORDERED: [Category; 5] = [
        Category::Basic,
        Category::Early,
        Category::Overtime,
        Category::Night,
        Category::Holiday,
    ];

    /// Returns a short human-readable label for the category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Basic => "Basic",
            Category::Early => "Early",
            Category::Overtime => "Overtime",
            Category::Night => "Night",
            Category::Holiday => "Holiday",
        }
    }

    /// Parses a category from its snake_case key.
    ///
    /// Returns `None` for unrecognized keys.
    pub fn from_key(key: &str) -> Option<Category> {
        match key {
            "basic" => Some(Category::Basic),
            "early" => Some(Category::Early),
            "overtime" => Some(Category::Overtime),
            "night" => Some(Category::Night),
            "holiday" => Some(Category::Holiday),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            Category::Basic => "basic",
            Category::Early => "early",
            Category::Overtime => "overtime",
            Category::Night => "night",
            Category::Holiday => "holiday",
        };
        write!(f, "{}", key)
    }
}

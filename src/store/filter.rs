//! Listing filters for the rule repository.

use serde::{Deserialize, Serialize};

use crate::models::{Category, Rule, UseFlag};

/// Category dimension of a listing filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    /// Keep every rule.
    #[default]
    All,
    /// Keep rules whose derived tags include the category.
    Tagged(Category),
}

/// Use-flag dimension of a listing filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UseFilter {
    /// Keep every rule.
    #[default]
    All,
    /// Keep only active rules.
    Active,
    /// Keep only inactive rules.
    Inactive,
}

/// The three AND-combined filters recognized by the repository listing.
///
/// The default filter keeps everything.
///
/// # Example
///
/// ```
/// use worktime_rules::models::Category;
/// use worktime_rules::store::{CategoryFilter, RuleFilter};
///
/// let filter = RuleFilter {
///     category: CategoryFilter::Tagged(Category::Night),
///     ..RuleFilter::default()
/// };
/// assert_eq!(filter.query, "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleFilter {
    /// Category dimension.
    #[serde(default)]
    pub category: CategoryFilter,
    /// Use-flag dimension.
    #[serde(default)]
    pub use_flag: UseFilter,
    /// Case-insensitive substring matched against name and description.
    #[serde(default)]
    pub query: String,
}

impl RuleFilter {
    /// Returns true if the rule passes all three filter dimensions.
    ///
    /// Category matching consults the derived tags, so callers must keep
    /// tags refreshed (the repository does this at every commit point).
    pub fn matches(&self, rule: &Rule) -> bool {
        let category_ok = match self.category {
            CategoryFilter::All => true,
            CategoryFilter::Tagged(category) => rule.tags.contains(&category),
        };

        let use_ok = match self.use_flag {
            UseFilter::All => true,
            UseFilter::Active => rule.use_flag == UseFlag::Active,
            UseFilter::Inactive => rule.use_flag == UseFlag::Inactive,
        };

        let query = self.query.trim();
        let query_ok = query.is_empty() || {
            let haystack = format!("{} {}", rule.name, rule.desc).to_lowercase();
            haystack.contains(&query.to_lowercase())
        };

        category_ok && use_ok && query_ok
    }
}

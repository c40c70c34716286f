//! Seed file loading.
//!
//! This module reads an initial rule sequence from a YAML file, the
//! alternative to the in-code [`super::seed::builtin_rules`] seed. Any
//! conforming sequence is accepted, including an empty one.

use std::fs;
use std::path::Path;

use crate::error::{RuleError, RuleResult};
use crate::models::Rule;

/// Loads a sequence of rules from a YAML seed file.
///
/// The file holds a YAML list of complete rule objects; the `tags` field
/// may be omitted since the repository refreshes tags at seeding.
///
/// # Errors
///
/// Returns [`RuleError::SeedNotFound`] if the file cannot be read, or
/// [`RuleError::SeedParseError`] if its contents are not a valid rule
/// sequence.
///
/// # Example
///
/// ```no_run
/// use worktime_rules::config::load_rules;
/// use worktime_rules::store::RuleStore;
///
/// let rules = load_rules("./config/rules.yaml")?;
/// let store = RuleStore::seed(rules);
/// # Ok::<(), worktime_rules::error::RuleError>(())
/// ```
pub fn load_rules<P: AsRef<Path>>(path: P) -> RuleResult<Vec<Rule>> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| RuleError::SeedNotFound {
        path: path_str.clone(),
    })?;

    serde_yaml::from_str(&content).map_err(|e| RuleError::SeedParseError {
        path: path_str,
        message: e.to_string(),
    })
}

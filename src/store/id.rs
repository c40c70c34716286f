//! Sequential rule id allocation.
//!
//! Ids are formatted `R-###` with a zero-padded, monotonically increasing
//! numeric suffix. Allocation never reclaims a suffix: the next id is one
//! past the maximum suffix currently present, regardless of gaps.

use crate::models::Rule;

/// Computes the next rule id from the current repository contents.
///
/// The numeric suffix of every existing id is parsed; ids that do not
/// parse contribute 0 rather than raising an error. The result is the
/// maximum plus one, zero-padded to at least three digits (values >= 1000
/// simply widen the field).
///
/// # Examples
///
/// ```
/// use worktime_rules::models::Rule;
/// use worktime_rules::store::next_id;
///
/// let rules = vec![Rule::blank("R-001"), Rule::blank("R-002")];
/// assert_eq!(next_id(&rules), "R-003");
/// assert_eq!(next_id(&[]), "R-001");
/// ```
pub fn next_id(rules: &[Rule]) -> String {
    let max_suffix = rules
        .iter()
        .map(|rule| parse_suffix(&rule.id))
        .max()
        .unwrap_or(0);

    format!("R-{:03}", max_suffix + 1)
}

/// Extracts the numeric suffix of an `R-###` id, treating anything
/// unparseable as 0.
fn parse_suffix(id: &str) -> u64 {
    id.split('-')
        .nth(1)
        .and_then(|suffix| suffix.parse::<u64>().ok())
        .unwrap_or(0)
}

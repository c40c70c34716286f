//! The in-memory rule repository.
//!
//! The repository exclusively owns the canonical, ordered list of rules.
//! Workflows (the detail editor and the wizard) hold private deep copies
//! and commit through [`RuleStore::replace`] / [`RuleStore::insert`]; no
//! live references ever escape into a workflow draft.

use crate::error::{RuleError, RuleResult};
use crate::models::Rule;

use super::filter::RuleFilter;
use super::id::next_id;

/// An ordered, in-memory collection of rules keyed by id.
///
/// Ordering is newest-first: insertion prepends. State is process-local and
/// re-seeded on startup; durable persistence is out of scope.
///
/// # Example
///
/// ```
/// use worktime_rules::models::Rule;
/// use worktime_rules::store::{RuleFilter, RuleStore};
///
/// let store = RuleStore::seed(vec![Rule::blank("R-001")]);
/// assert_eq!(store.next_id(), "R-002");
///
/// let rule = store.get("R-001").unwrap();
/// assert_eq!(rule.id, "R-001");
/// assert_eq!(store.list(&RuleFilter::default()).len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleStore {
    rules: Vec<Rule>,
}

impl RuleStore {
    /// Creates a repository from an initial ordered sequence of rules.
    ///
    /// Accepts any conforming sequence, including empty. Derived tags are
    /// refreshed on every entry so seed data can never carry stale tags
    /// into the canonical list.
    pub fn seed(rules: Vec<Rule>) -> Self {
        let mut rules = rules;
        for rule in &mut rules {
            rule.refresh_tags();
        }
        Self { rules }
    }

    /// Returns the rules passing the filter, in repository order.
    ///
    /// The three filter dimensions are AND-combined; no pagination.
    pub fn list(&self, filter: &RuleFilter) -> Vec<&Rule> {
        self.rules.iter().filter(|rule| filter.matches(rule)).collect()
    }

    /// Looks up a rule by id.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::RuleNotFound`] if no rule carries the id.
    pub fn get(&self, id: &str) -> RuleResult<&Rule> {
        self.rules
            .iter()
            .find(|rule| rule.id == id)
            .ok_or_else(|| RuleError::RuleNotFound { id: id.to_string() })
    }

    /// Fully overwrites the rule stored under `id` with `rule`.
    ///
    /// This is the only mutation path for an existing rule; there is no
    /// partial merge. The repository is left untouched on any failure.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::IdentityMismatch`] if `rule.id != id`, or
    /// [`RuleError::RuleNotFound`] if the target id is absent.
    pub fn replace(&mut self, id: &str, rule: Rule) -> RuleResult<()> {
        if rule.id != id {
            return Err(RuleError::IdentityMismatch {
                expected: id.to_string(),
                found: rule.id,
            });
        }

        let slot = self
            .rules
            .iter_mut()
            .find(|existing| existing.id == id)
            .ok_or_else(|| RuleError::RuleNotFound { id: id.to_string() })?;

        *slot = rule;
        Ok(())
    }

    /// Prepends a new rule, keeping newest-first ordering.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::DuplicateId`] if the id already exists; the
    /// repository is unchanged in that case. The id allocator makes a
    /// collision impossible under correct use, but it is checked anyway.
    pub fn insert(&mut self, rule: Rule) -> RuleResult<()> {
        if self.rules.iter().any(|existing| existing.id == rule.id) {
            return Err(RuleError::DuplicateId { id: rule.id });
        }

        self.rules.insert(0, rule);
        Ok(())
    }

    /// Computes the next sequential rule id from the current contents.
    pub fn next_id(&self) -> String {
        next_id(&self.rules)
    }

    /// The full canonical list, newest first.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules in the repository.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the repository holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

//! The 4-step wizard that builds a brand-new rule.
//!
//! A strict linear state machine over a private draft:
//! BasicInfo → RuleSettings → CategorySelection → Preview. Forward progress
//! out of step 1 is gated on a non-empty trimmed name; gate failures refuse
//! the transition silently rather than raising an error. Completion is only
//! available at the preview step and hands the finished rule to the
//! repository.

use crate::error::RuleResult;
use crate::models::{Category, Rule};
use crate::store::RuleStore;

/// The wizard's four steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    /// Name and description.
    BasicInfo,
    /// Common fields: unit, rounding, day window.
    RuleSettings,
    /// Optional category toggles and their sub-policy panels.
    CategorySelection,
    /// Read-only projection of the draft.
    Preview,
}

impl WizardStep {
    /// The 1-based step number shown in the stepper.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::BasicInfo => 1,
            WizardStep::RuleSettings => 2,
            WizardStep::CategorySelection => 3,
            WizardStep::Preview => 4,
        }
    }

    /// The step's display label.
    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "Basic information",
            WizardStep::RuleSettings => "Rule settings",
            WizardStep::CategorySelection => "Work type selection",
            WizardStep::Preview => "Preview",
        }
    }

    fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::BasicInfo => Some(WizardStep::RuleSettings),
            WizardStep::RuleSettings => Some(WizardStep::CategorySelection),
            WizardStep::CategorySelection => Some(WizardStep::Preview),
            WizardStep::Preview => None,
        }
    }

    fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::BasicInfo => None,
            WizardStep::RuleSettings => Some(WizardStep::BasicInfo),
            WizardStep::CategorySelection => Some(WizardStep::RuleSettings),
            WizardStep::Preview => Some(WizardStep::CategorySelection),
        }
    }
}

/// The wizard state machine: current step plus a private draft.
///
/// Closing the wizard before completion is dropping the value; the draft
/// goes with it and the repository is untouched.
///
/// # Example
///
/// ```
/// use worktime_rules::session::{RuleWizard, WizardStep};
/// use worktime_rules::store::RuleStore;
///
/// let store = RuleStore::seed(vec![]);
/// let mut wizard = RuleWizard::open(store.next_id());
///
/// assert!(!wizard.advance()); // gated: no name yet
/// wizard.draft_mut().name = "Standard office".to_string();
/// assert!(wizard.advance());
/// assert_eq!(wizard.step(), WizardStep::RuleSettings);
/// ```
#[derive(Debug, Clone)]
pub struct RuleWizard {
    step: WizardStep,
    draft: Rule,
}

impl RuleWizard {
    /// Opens the wizard at step 1 with a blank draft carrying the given id.
    ///
    /// Callers pass the repository's `next_id()` so the finished rule slots
    /// straight into the canonical list.
    pub fn open(next_id: impl Into<String>) -> Self {
        Self {
            step: WizardStep::BasicInfo,
            draft: Rule::blank(next_id),
        }
    }

    /// The current step.
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// The private draft under construction.
    pub fn draft(&self) -> &Rule {
        &self.draft
    }

    /// Mutable access to the draft.
    ///
    /// The presentation layer writes primitive field edits through this;
    /// nothing reaches the repository until [`RuleWizard::complete`].
    pub fn draft_mut(&mut self) -> &mut Rule {
        &mut self.draft
    }

    /// Whether forward navigation is currently allowed.
    ///
    /// Step 1 requires a non-empty trimmed name; steps 2 and 3 have no
    /// gate; step 4 has no forward step.
    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::BasicInfo => self.draft.has_name(),
            WizardStep::RuleSettings | WizardStep::CategorySelection => true,
            WizardStep::Preview => false,
        }
    }

    /// Moves to the next step if the current gate allows it.
    ///
    /// Returns false, leaving state unchanged, when gated or already at
    /// the preview step.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        match self.step.next() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Moves back one step; unavailable at step 1.
    pub fn back(&mut self) -> bool {
        match self.step.previous() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Toggles an optional category's enabling flag on the draft.
    ///
    /// `Basic` is always implicitly selected and not togglable; toggling it
    /// returns false. Disabling a category retains its sub-policy fields so
    /// re-enabling restores the previously entered values.
    pub fn toggle_category(&mut self, category: Category) -> bool {
        match category {
            Category::Basic => false,
            Category::Early => {
                self.draft.early_enabled = !self.draft.early_enabled;
                true
            }
            Category::Overtime => {
                self.draft.overtime_enabled = !self.draft.overtime_enabled;
                true
            }
            Category::Night => {
                self.draft.night_enabled = !self.draft.night_enabled;
                true
            }
            Category::Holiday => {
                self.draft.holiday_enabled = !self.draft.holiday_enabled;
                true
            }
        }
    }

    /// Whether completion is currently available (preview step only).
    pub fn can_complete(&self) -> bool {
        self.step == WizardStep::Preview
    }

    /// Finishes the wizard: refreshes the draft's derived tags and inserts
    /// it at the head of the repository.
    ///
    /// Returns `Ok(None)`, leaving everything unchanged, when invoked
    /// before the preview step (a gate, not an error). On success the
    /// finished rule is returned so the caller can select it and close the
    /// wizard.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::error::RuleError::DuplicateId`] from the
    /// repository; impossible under correct id allocation but checked
    /// defensively.
    pub fn complete(&self, store: &mut RuleStore) -> RuleResult<Option<Rule>> {
        if !self.can_complete() {
            return Ok(None);
        }

        let mut finished = self.draft.clone();
        finished.refresh_tags();
        store.insert(finished.clone())?;
        Ok(Some(finished))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuleError;
    use crate::models::TimeValue;

    fn wizard_at_preview(name: &str) -> RuleWizard {
        let mut wizard = RuleWizard::open("R-003");
        wizard.draft_mut().name = name.to_string();
        assert!(wizard.advance());
        assert!(wizard.advance());
        assert!(wizard.advance());
        wizard
    }

    #[test]
    fn test_open_resets_to_step_one_with_blank_draft() {
        let wizard = RuleWizard::open("R-005");
        assert_eq!(wizard.step(), WizardStep::BasicInfo);
        assert_eq!(wizard.draft().id, "R-005");
        assert_eq!(wizard.draft().name, "");
    }

    #[test]
    fn test_step_numbers_and_labels() {
        assert_eq!(WizardStep::BasicInfo.number(), 1);
        assert_eq!(WizardStep::Preview.number(), 4);
        assert_eq!(WizardStep::RuleSettings.label(), "Rule settings");
    }

    #[test]
    fn test_step_one_gates_on_trimmed_name() {
        let mut wizard = RuleWizard::open("R-001");
        assert!(!wizard.can_advance());
        assert!(!wizard.advance());
        assert_eq!(wizard.step(), WizardStep::BasicInfo);

        wizard.draft_mut().name = "   ".to_string();
        assert!(!wizard.advance());

        wizard.draft_mut().name = " x".to_string();
        assert!(wizard.advance());
        assert_eq!(wizard.step(), WizardStep::RuleSettings);
    }

    #[test]
    fn test_steps_two_and_three_have_no_gate() {
        let mut wizard = RuleWizard::open("R-001");
        wizard.draft_mut().name = "Named".to_string();
        assert!(wizard.advance());
        assert!(wizard.advance());
        assert!(wizard.advance());
        assert_eq!(wizard.step(), WizardStep::Preview);
        assert!(!wizard.advance());
    }

    #[test]
    fn test_back_navigation_stops_at_step_one() {
        let mut wizard = wizard_at_preview("Named");
        assert!(wizard.back());
        assert!(wizard.back());
        assert!(wizard.back());
        assert_eq!(wizard.step(), WizardStep::BasicInfo);
        assert!(!wizard.back());
    }

    #[test]
    fn test_toggle_category_flips_flags_but_not_basic() {
        let mut wizard = RuleWizard::open("R-001");
        assert!(!wizard.toggle_category(Category::Basic));

        assert!(wizard.toggle_category(Category::Night));
        assert!(wizard.draft().night_enabled);

        assert!(wizard.toggle_category(Category::Night));
        assert!(!wizard.draft().night_enabled);
    }

    #[test]
    fn test_toggle_retains_sub_policy_values() {
        let mut wizard = RuleWizard::open("R-001");
        wizard.toggle_category(Category::Night);
        wizard.draft_mut().night_start = TimeValue::from_hm(23, 0);

        wizard.toggle_category(Category::Night);
        wizard.toggle_category(Category::Night);
        assert_eq!(wizard.draft().night_start.to_string(), "23:00");
    }

    #[test]
    fn test_complete_before_preview_is_refused() {
        let mut store = RuleStore::seed(vec![]);
        let wizard = RuleWizard::open("R-001");

        assert!(wizard.complete(&mut store).unwrap().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_complete_refreshes_tags_and_prepends() {
        let mut store = RuleStore::seed(vec![Rule::blank("R-001"), Rule::blank("R-002")]);
        let mut wizard = RuleWizard::open(store.next_id());
        wizard.draft_mut().name = "Night Shift A".to_string();
        wizard.toggle_category(Category::Night);
        assert!(wizard.advance());
        assert!(wizard.advance());
        assert!(wizard.advance());

        let finished = wizard.complete(&mut store).unwrap().unwrap();
        assert_eq!(finished.id, "R-003");
        assert_eq!(finished.tags, vec![Category::Basic, Category::Night]);
        assert_eq!(store.rules()[0].id, "R-003");
        assert_eq!(store.next_id(), "R-004");
    }

    #[test]
    fn test_complete_with_duplicate_id_propagates_error() {
        let mut store = RuleStore::seed(vec![Rule::blank("R-003")]);
        let wizard = wizard_at_preview("Colliding");

        match wizard.complete(&mut store) {
            Err(RuleError::DuplicateId { id }) => assert_eq!(id, "R-003"),
            other => panic!("Expected DuplicateId, got {:?}", other),
        }
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_closing_early_discards_draft() {
        let store = RuleStore::seed(vec![]);
        {
            let mut wizard = RuleWizard::open(store.next_id());
            wizard.draft_mut().name = "Abandoned".to_string();
            // dropped without complete()
        }
        assert!(store.is_empty());
    }
}

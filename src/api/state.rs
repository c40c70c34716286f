//! Application state for the rule management API.
//!
//! The workspace bundles the single interactive session the core models:
//! the canonical repository plus the detail-editor selection. Handlers
//! drive the wizard and editor workflows through it rather than mutating
//! the store directly.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::RuleResult;
use crate::models::Rule;
use crate::session::{DetailEditor, RuleWizard};
use crate::store::RuleStore;

/// The single interactive session: repository plus editor selection.
#[derive(Debug)]
pub struct Workspace {
    store: RuleStore,
    editor: DetailEditor,
}

impl Workspace {
    /// Seeds the repository and opens the detail editor with its startup
    /// selection.
    pub fn new(rules: Vec<Rule>) -> Self {
        let store = RuleStore::seed(rules);
        let editor = DetailEditor::open(&store);
        Self { store, editor }
    }

    /// The canonical repository.
    pub fn store(&self) -> &RuleStore {
        &self.store
    }

    /// The detail editor state.
    pub fn editor(&self) -> &DetailEditor {
        &self.editor
    }

    /// Selects a rule in the detail editor, discarding any in-flight draft.
    pub fn select(&mut self, id: &str) -> RuleResult<()> {
        self.editor.select(&self.store, id)
    }

    /// Builds a new rule by driving the wizard end to end.
    ///
    /// `edit` applies the caller's field values to the blank draft; the
    /// wizard then walks its gated steps and completes. Returns `Ok(None)`
    /// when the step-1 name gate refuses, leaving the repository untouched.
    /// On success the new rule becomes the current detail selection.
    pub fn create_rule<F>(&mut self, edit: F) -> RuleResult<Option<Rule>>
    where
        F: FnOnce(&mut Rule),
    {
        let mut wizard = RuleWizard::open(self.store.next_id());
        edit(wizard.draft_mut());

        if !wizard.advance() {
            return Ok(None);
        }
        // Steps 2 and 3 carry no gate.
        wizard.advance();
        wizard.advance();

        let finished = wizard.complete(&mut self.store)?;
        if let Some(rule) = &finished {
            self.editor.select(&self.store, &rule.id)?;
        }
        Ok(finished)
    }

    /// Updates an existing rule by driving the editor's draft/commit cycle.
    ///
    /// Selects the rule, clones it into a draft, applies `edit` to the
    /// draft only, then saves (which refreshes tags and replaces the
    /// canonical entry).
    pub fn update_rule<F>(&mut self, id: &str, edit: F) -> RuleResult<Rule>
    where
        F: FnOnce(&mut Rule),
    {
        self.editor.select(&self.store, id)?;
        self.editor.begin_edit(&self.store)?;
        if let Some(draft) = self.editor.draft_mut() {
            edit(draft);
        }
        self.editor.save(&mut self.store)?;
        Ok(self.store.get(id)?.clone())
    }
}

/// Shared application state.
///
/// One workspace behind a mutex: the session model is single-threaded and
/// event-driven, so handlers take the lock for the duration of one discrete
/// transition and never hold it across an await.
#[derive(Clone)]
pub struct AppState {
    workspace: Arc<Mutex<Workspace>>,
}

impl AppState {
    /// Creates application state seeded with the given rules.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self {
            workspace: Arc::new(Mutex::new(Workspace::new(rules))),
        }
    }

    /// Locks and returns the workspace.
    pub fn workspace(&self) -> MutexGuard<'_, Workspace> {
        // A poisoned lock only means a prior handler panicked mid-transition;
        // the workspace data itself is still structurally sound.
        self.workspace.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::builtin_rules;
    use crate::models::Category;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_workspace_opens_with_startup_selection() {
        let workspace = Workspace::new(builtin_rules());
        assert_eq!(workspace.editor().selected_id(), Some("R-002"));
    }

    #[test]
    fn test_create_rule_gates_on_blank_name() {
        let mut workspace = Workspace::new(builtin_rules());
        let created = workspace.create_rule(|draft| draft.desc = "no name".to_string());
        assert!(created.unwrap().is_none());
        assert_eq!(workspace.store().len(), 3);
    }

    #[test]
    fn test_create_rule_selects_new_rule() {
        let mut workspace = Workspace::new(builtin_rules());
        let created = workspace
            .create_rule(|draft| {
                draft.name = "Night Shift A".to_string();
                draft.night_enabled = true;
            })
            .unwrap()
            .unwrap();

        assert_eq!(created.id, "R-004");
        assert_eq!(created.tags, vec![Category::Basic, Category::Night]);
        assert_eq!(workspace.editor().selected_id(), Some("R-004"));
        assert_eq!(workspace.store().rules()[0].id, "R-004");
    }

    #[test]
    fn test_update_rule_commits_through_editor() {
        let mut workspace = Workspace::new(builtin_rules());
        let updated = workspace
            .update_rule("R-001", |draft| {
                draft.desc = "revised".to_string();
                draft.early_enabled = true;
            })
            .unwrap();

        assert_eq!(updated.desc, "revised");
        assert_eq!(updated.tags, vec![Category::Basic, Category::Early]);
        assert!(!workspace.editor().is_editing());
    }

    #[test]
    fn test_update_unknown_rule_fails() {
        let mut workspace = Workspace::new(builtin_rules());
        assert!(workspace.update_rule("R-404", |_| {}).is_err());
    }
}

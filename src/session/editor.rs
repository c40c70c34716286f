//! The detail editor's draft/commit workflow.
//!
//! A two-state machine (viewing / editing) scoped to one selected rule id.
//! Entering edit mode deep-clones the canonical rule into a private draft;
//! all field mutations apply to the draft only. `save` commits through the
//! repository's replace, `cancel` discards, and re-selection mid-edit
//! silently discards the in-flight draft.

use crate::error::{RuleError, RuleResult};
use crate::models::Rule;
use crate::store::RuleStore;

/// The editor's mode for the currently selected rule.
#[derive(Debug, Clone, PartialEq)]
enum EditorMode {
    /// Showing the canonical rule read-only.
    Viewing,
    /// Holding a private draft copy of the selected rule.
    Editing(Rule),
}

/// Draft/commit editor over the currently selected rule.
///
/// # Example
///
/// ```
/// use worktime_rules::models::Rule;
/// use worktime_rules::session::DetailEditor;
/// use worktime_rules::store::RuleStore;
///
/// let mut store = RuleStore::seed(vec![Rule::blank("R-001")]);
/// let mut editor = DetailEditor::open(&store);
/// editor.begin_edit(&store).unwrap();
///
/// editor.draft_mut().unwrap().desc = "updated".to_string();
/// editor.save(&mut store).unwrap();
/// assert_eq!(store.get("R-001").unwrap().desc, "updated");
/// ```
#[derive(Debug, Clone)]
pub struct DetailEditor {
    selected_id: Option<String>,
    mode: EditorMode,
}

impl DetailEditor {
    /// Opens the editor with the startup selection policy: the second
    /// repository entry if present, else the first, else no selection.
    ///
    /// A rule is therefore always selected while the repository is
    /// non-empty.
    pub fn open(store: &RuleStore) -> Self {
        let rules = store.rules();
        let selected_id = rules.get(1).or_else(|| rules.first()).map(|r| r.id.clone());
        Self {
            selected_id,
            mode: EditorMode::Viewing,
        }
    }

    /// Selects a different rule, silently discarding any in-flight draft
    /// and returning to viewing state.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::RuleNotFound`] if the id is absent; the
    /// previous selection and mode are kept in that case.
    pub fn select(&mut self, store: &RuleStore, id: &str) -> RuleResult<()> {
        store.get(id)?;
        self.selected_id = Some(id.to_string());
        self.mode = EditorMode::Viewing;
        Ok(())
    }

    /// The currently selected rule id, if any.
    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// Returns true while a draft is being edited.
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditorMode::Editing(_))
    }

    /// Enters editing state by deep-cloning the selected canonical rule
    /// into a private draft.
    ///
    /// Re-entering while already editing restarts from the canonical rule.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::RuleNotFound`] if nothing is selected or the
    /// selected id has vanished from the repository. The no-selection case
    /// reports a `<none selected>` sentinel rather than an empty id.
    pub fn begin_edit(&mut self, store: &RuleStore) -> RuleResult<()> {
        let id = self
            .selected_id
            .as_deref()
            .ok_or_else(|| RuleError::RuleNotFound {
                id: "<none selected>".to_string(),
            })?;
        let draft = store.get(id)?.clone();
        self.mode = EditorMode::Editing(draft);
        Ok(())
    }

    /// The current draft, if editing.
    pub fn draft(&self) -> Option<&Rule> {
        match &self.mode {
            EditorMode::Editing(draft) => Some(draft),
            EditorMode::Viewing => None,
        }
    }

    /// Mutable access to the current draft, if editing.
    ///
    /// Mutations apply only to the draft; the canonical rule is untouched
    /// until [`DetailEditor::save`].
    pub fn draft_mut(&mut self) -> Option<&mut Rule> {
        match &mut self.mode {
            EditorMode::Editing(draft) => Some(draft),
            EditorMode::Viewing => None,
        }
    }

    /// Discards the draft and returns to viewing state.
    ///
    /// A no-op while viewing.
    pub fn cancel(&mut self) {
        self.mode = EditorMode::Viewing;
    }

    /// Commits the draft: refreshes its derived tags, replaces the
    /// canonical entry, and returns to viewing state.
    ///
    /// A no-op while viewing.
    ///
    /// # Errors
    ///
    /// Returns the repository's error if the draft id has vanished; the
    /// editor stays in editing state with the draft intact so no work is
    /// lost.
    pub fn save(&mut self, store: &mut RuleStore) -> RuleResult<()> {
        let draft = match &self.mode {
            EditorMode::Editing(draft) => draft.clone(),
            EditorMode::Viewing => return Ok(()),
        };

        let mut committed = draft;
        committed.refresh_tags();
        let id = committed.id.clone();
        store.replace(&id, committed)?;

        self.mode = EditorMode::Viewing;
        Ok(())
    }
}

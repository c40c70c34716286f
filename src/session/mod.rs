//! Interactive workflows over the rule repository.
//!
//! Both the detail editor and the wizard hold private deep copies of rule
//! data, never live references into the repository; copy-on-enter and
//! replace-on-commit is the crate's aliasing-safety discipline.

mod editor;
mod preview;
mod wizard;

pub use editor::DetailEditor;
pub use preview::{category_summaries, setting_lines, CategoryLine, PreviewLine, PROCESSING_STEPS};
pub use wizard::{RuleWizard, WizardStep};

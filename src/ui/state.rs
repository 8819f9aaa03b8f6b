use std::{cell::RefCell, rc::Rc};

use lampskills::core::{DisplaySink, FileStore, LampChoiceSession, SelectionList, Skill};

use super::LampSkillsDialog;

/// Pushes the rendered summary into the dialog's label.
pub struct SummaryLabel {
    pub dialog: slint::Weak<LampSkillsDialog>,
}

impl DisplaySink for SummaryLabel {
    fn show_summary(&mut self, text: &str) {
        if let Some(dialog) = self.dialog.upgrade() {
            dialog.set_summary_text(text.into());
        }
    }
}

pub type DialogSession = LampChoiceSession<Skill, SelectionList<Skill>, FileStore, SummaryLabel>;

pub type SharedState = Rc<RefCell<DialogSession>>;

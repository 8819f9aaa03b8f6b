use slint::{ModelRc, VecModel};

use super::{LampSkillsDialog, SkillRow};
use crate::ui::state::SharedState;

/* =============================== UI Actions =============================== */

pub fn on_toggle_skill(dialog: &LampSkillsDialog, state: &SharedState, index: usize) {
    {
        let mut session = state.borrow_mut();
        session.surface_mut().toggle(index);
        session.pump();
    }
    refresh_skill_model(dialog, state);
}

pub fn refresh_skill_model(dialog: &LampSkillsDialog, state: &SharedState) {
    let rows: Vec<SkillRow> = {
        let session = state.borrow();
        session
            .surface()
            .rows()
            .map(|(skill, selected)| SkillRow {
                name: skill.name().into(),
                selected,
            })
            .collect()
    };
    dialog.set_skill_model(ModelRc::new(VecModel::from(rows)));
}

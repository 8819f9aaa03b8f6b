#[cfg(feature = "ui")]
mod ui;

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

#[cfg(feature = "ui")]
use std::{cell::RefCell, rc::Rc};

#[cfg(feature = "ui")]
use slint::ComponentHandle;

#[cfg(feature = "ui")]
use lampskills::core::{FileStore, LampChoiceSession, SelectionList, Skill};

#[cfg(feature = "ui")]
use ui::{LampSkillsDialog, SummaryLabel, on_toggle_skill, refresh_skill_model};

/// Choices live under `$LAMPSKILLS_ROOT/.lampskills/`, defaulting to the working directory.
fn choices_root() -> anyhow::Result<PathBuf> {
    match std::env::var_os("LAMPSKILLS_ROOT") {
        Some(root) => Ok(PathBuf::from(root)),
        None => Ok(std::env::current_dir()?),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(feature = "ui")]
fn main() -> anyhow::Result<()> {
    init_tracing();

    let root = choices_root()?;
    let dialog = LampSkillsDialog::new()?;

    let session = LampChoiceSession::open(
        SelectionList::new(Skill::domain()),
        FileStore::open(root),
        SummaryLabel {
            dialog: dialog.as_weak(),
        },
    );
    let state = Rc::new(RefCell::new(session));
    refresh_skill_model(&dialog, &state);

    {
        let dialog_weak = dialog.as_weak();
        let state = Rc::clone(&state);
        dialog.on_toggle_skill(move |idx| {
            let Ok(index) = usize::try_from(idx) else {
                return;
            };
            if let Some(dialog) = dialog_weak.upgrade() {
                on_toggle_skill(&dialog, &state, index);
            }
        });
    }

    dialog.run()?;
    Ok(())
}

#[cfg(not(feature = "ui"))]
fn main() -> anyhow::Result<()> {
    use lampskills::core::{ChoiceStore, FileStore, format_summary};

    init_tracing();

    let store = FileStore::open(choices_root()?);
    let chosen = store.chosen();
    if chosen.is_empty() {
        println!("No lamp skills chosen.");
    } else {
        println!("{}", format_summary(&chosen));
    }
    eprintln!("Built without the `ui` feature; enable it with `--features ui` to edit the choices.");
    Ok(())
}

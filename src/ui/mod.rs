// This module is only used when the `ui` feature is enabled.
slint::include_modules!();

pub mod handlers;
pub mod state;

pub use handlers::{on_toggle_skill, refresh_skill_model};
pub use state::SummaryLabel;

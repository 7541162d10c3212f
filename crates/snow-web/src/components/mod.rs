mod combo_builder;
mod copy_button;
mod done_button;
mod panel;
mod script_generator;

pub use combo_builder::ComboBuilder;
pub use copy_button::{CopyButton, CopyState, copy_code};
pub use done_button::{DoneButton, DoneState};
pub use panel::Panel;
pub use script_generator::ScriptGenerator;

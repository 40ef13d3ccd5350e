// UI module root: split implementation into focused submodules under `ui/`

pub mod list;
pub mod render;
pub mod run;
pub mod update;
pub mod wizard;

// Re-export commonly used symbols so call sites stay short (e.g. `crate::ui::ListModel`).
pub use list::{ListConfig, ListModel, PAGE_SIZE};
pub use render::{render_list_full, render_wizard_full};
pub use run::{run, App};
pub use update::{handle_list_update, handle_wizard_update};
pub use wizard::WizardModel;

// small layout constants reused by rendering code
pub const HEADER_LINES: usize = 3;
pub const MODELINE_LINES: usize = 1;
pub const RESERVED_LINES: usize = HEADER_LINES + MODELINE_LINES;
pub const DEFAULT_WIDTH: usize = 80;
pub const DEFAULT_HEIGHT: usize = 24;

// Messages used by the update logic
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    WindowSize { width: usize, height: usize },
    KeyBackspace,
    KeyEnter,
    KeyEsc,
    KeySpace,
    Rune(char),
    KeyUp,
    KeyDown,
    KeyLeft,
    KeyRight,
}

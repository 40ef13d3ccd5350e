// Render module split into focused submodules to reduce file size and compiler warnings.

pub mod full;
pub mod modeline;
pub mod question;
pub mod styles;
pub mod table;
pub mod util;

pub use full::{render_list_full, render_wizard_full};
pub use modeline::{render_list_modeline, render_wizard_modeline};
pub use question::{render_progress_bar, render_question};
pub use table::render_rows;

//! Prompt widgets.

pub mod buttons;
pub mod help_bar;
pub mod select_list;
pub mod text_field;

pub use buttons::ButtonRow;
pub use help_bar::HelpBar;
pub use select_list::{MAX_VISIBLE_ROWS, SelectList};
pub use text_field::TextField;

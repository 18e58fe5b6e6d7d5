//! Side-by-side edit preview

pub mod edit_action;
pub mod side_by_side;

pub use edit_action::{EditAction, EditPreview};
pub use side_by_side::{SideBySidePreview, escape_html};

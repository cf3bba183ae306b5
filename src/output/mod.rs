//! Output rendering for the demo CLI.

mod terminal;

// Re-export public functions
pub use terminal::{format_field, print_page};

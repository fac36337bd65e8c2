//! UI building blocks shared by the search screen.

/// Prompt row: title, query input, loading indicator and category tabs.
pub mod prompt;
/// Result rows with query highlighting.
pub mod rows;
/// Bordered table with header, scrollbar and empty state.
pub mod tables;

pub use prompt::{InputContext, ProgressState, render_input_with_tabs};
pub use rows::build_result_rows;
pub use tables::{TableSpec, render_table};

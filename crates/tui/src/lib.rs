//! Interactive terminal front-end for LineOps search.
//!
//! The crate draws a fuzzy-finder style screen around a
//! [`SearchSession`](lineops_search::SearchSession): a query prompt with a
//! loading indicator, one tab per category, the ranked results and an error
//! line. [`run`] owns the terminal until the user picks a result or cancels.

mod app;
pub mod components;
mod config;
pub mod input;
mod runtime;
pub mod style;

pub use app::{App, SearchOutcome};
pub use config::UiLabels;
pub use input::QueryInput;
pub use runtime::run;
pub use style::{StyleConfig, Theme, builtin_themes, default_theme};

//! The interactive search screen.
//!
//! [`App`] wraps a [`SearchSession`](lineops_search::SearchSession) with the
//! widgets needed to drive it from a terminal: the query input, the results
//! table selection and the theme. Input handling and rendering live in their
//! own submodules.

mod actions;
mod outcome;
mod render;
mod results;
mod state;


pub use outcome::SearchOutcome;
pub use state::App;

//! Visual styling for the search front-end.
//!
//! Themes are colour schemes loaded from the TOML files bundled with the
//! crate. [`StyleConfig`] is the place for any styling knob that is not a
//! colour.

pub mod theme;

pub use theme::{Theme, ThemeRegistration, builtin_themes, by_name, default_theme, names};

/// Styling applied to the whole application.
#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	pub theme: Theme,
}

impl StyleConfig {
	#[must_use]
	pub fn with_theme(theme: Theme) -> Self {
		Self { theme }
	}
}

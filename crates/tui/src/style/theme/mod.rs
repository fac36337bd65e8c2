mod builtins;
mod registry;
mod types;

pub use builtins::default_theme;
pub use registry::{by_name, names};
pub use types::{Theme, ThemeRegistration};

/// Return the built-in themes bundled with the application.
#[must_use]
pub fn builtin_themes() -> Vec<ThemeRegistration> {
	builtins::registrations().to_vec()
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

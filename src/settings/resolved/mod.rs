use std::path::PathBuf;
use std::time::Duration;

use lineops_search::{Category, DebounceDelay};
use lineops_tui::Theme;

mod errors;
mod sources;
mod summary;
pub(super) mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	/// Backend base URL without a trailing slash. Required by every command
	/// that talks to the backend.
	pub backend_url: Option<String>,
	/// Token that overrides the one stored by `lineops login`.
	pub token: Option<String>,
	pub timeout: Option<Duration>,
	pub debounce: DebounceDelay,
	pub category: Category,
	pub initial_query: String,
	pub title: Option<String>,
	/// Name the theme was selected by, `None` for the default theme.
	pub theme_name: Option<String>,
	pub theme: Theme,
	pub log_level: Option<String>,
	pub log_file: Option<PathBuf>,
	/// Recoverable problems, logged once logging is set up.
	pub(crate) warnings: Vec<ConfigError>,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}

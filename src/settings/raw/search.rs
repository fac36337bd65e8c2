use lineops_search::{Category, DebounceDelay};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::super::resolved::{ConfigError, ConfigSources, validation};
use super::non_blank;

/// `[search]`: what the session starts with.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) debounce_ms: Option<i64>,
	pub(super) category: Option<String>,
	pub(super) initial_query: Option<String>,
}

pub(super) struct SearchResolution {
	pub(super) debounce: DebounceDelay,
	pub(super) category: Category,
	pub(super) initial_query: String,
	pub(super) warnings: Vec<ConfigError>,
}

impl SearchSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(millis) = cli.debounce_ms {
			self.debounce_ms = Some(millis);
		}
		if let Some(category) = cli.category.clone() {
			self.category = Some(category);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
	}

	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<SearchResolution, ConfigError> {
		let mut warnings = Vec::new();
		let debounce = match self.debounce_ms {
			Some(millis) => {
				let (delay, warning) = validation::debounce(millis, sources.source_for_debounce());
				warnings.extend(warning);
				delay
			}
			None => DebounceDelay::default(),
		};
		let category = match non_blank(self.category) {
			Some(name) => validation::category(&name, sources.source_for_category())?,
			None => Category::default(),
		};

		Ok(SearchResolution {
			debounce,
			category,
			initial_query: self.initial_query.unwrap_or_default(),
			warnings,
		})
	}
}

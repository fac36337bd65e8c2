use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod backend;
mod logging;
mod search;
mod ui;

use backend::BackendSection;
use logging::LoggingSection;
use search::SearchSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	backend: BackendSection,
	search: SearchSection,
	ui: UiSection,
	logging: LoggingSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.backend.apply_cli_overrides(cli);
		self.search.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.logging.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			backend_url: detect_source(
				cli.backend_url.is_some(),
				self.backend.url.is_some(),
				"LINEOPS__BACKEND__URL",
				"--backend-url",
				"backend.url",
			),
			backend_timeout: detect_source(
				cli.timeout_secs.is_some(),
				self.backend.timeout_secs.is_some(),
				"LINEOPS__BACKEND__TIMEOUT_SECS",
				"--timeout-secs",
				"backend.timeout_secs",
			),
			debounce_ms: detect_source(
				cli.debounce_ms.is_some(),
				self.search.debounce_ms.is_some(),
				"LINEOPS__SEARCH__DEBOUNCE_MS",
				"--debounce-ms",
				"search.debounce_ms",
			),
			category: detect_source(
				cli.category.is_some(),
				self.search.category.is_some(),
				"LINEOPS__SEARCH__CATEGORY",
				"--category",
				"search.category",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"LINEOPS__UI__THEME",
				"--theme",
				"ui.theme",
			),
		};

		let backend = self.backend.resolve(&sources).map_err(Error::new)?;
		let search = self.search.resolve(&sources).map_err(Error::new)?;
		let ui = self.ui.resolve(&sources).map_err(Error::new)?;
		let logging = self.logging.resolve();

		Ok(ResolvedConfig {
			backend_url: backend.url,
			token: backend.token,
			timeout: backend.timeout,
			debounce: search.debounce,
			category: search.category,
			initial_query: search.initial_query,
			title: ui.title,
			theme_name: ui.theme_name,
			theme: ui.theme,
			log_level: logging.level,
			log_file: logging.file,
			warnings: search.warnings,
		})
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

/// Treat blank strings the same as an unset value.
fn non_blank(value: Option<String>) -> Option<String> {
	value
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
}

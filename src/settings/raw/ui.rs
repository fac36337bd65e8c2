use lineops_tui::Theme;
use serde::Deserialize;

use crate::cli::CliArgs;

use super::super::resolved::{ConfigError, ConfigSources, validation};
use super::non_blank;

/// `[ui]`: look of the search screen.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) title: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) theme_name: Option<String>,
	pub(super) theme: Theme,
	pub(super) title: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
	}

	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<UiResolution, ConfigError> {
		let theme_name = non_blank(self.theme);
		let theme = match &theme_name {
			Some(name) => validation::theme(name, sources.source_for_theme())?,
			None => Theme::default(),
		};

		Ok(UiResolution {
			theme_name,
			theme,
			title: non_blank(self.title),
		})
	}
}

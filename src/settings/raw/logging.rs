use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::CliArgs;

use super::non_blank;

/// `[logging]`: filter directive and log file for the search screen.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) level: Option<String>,
	pub(super) file: Option<PathBuf>,
}

pub(super) struct LoggingResolution {
	pub(super) level: Option<String>,
	pub(super) file: Option<PathBuf>,
}

impl LoggingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(level) = cli.log_level.clone() {
			self.level = Some(level);
		}
		if let Some(file) = cli.log_file.clone() {
			self.file = Some(file);
		}
	}

	pub(super) fn resolve(self) -> LoggingResolution {
		LoggingResolution {
			level: non_blank(self.level),
			file: self.file.filter(|path| !path.as_os_str().is_empty()),
		}
	}
}

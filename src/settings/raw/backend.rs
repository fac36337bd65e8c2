use std::time::Duration;

use serde::Deserialize;

use crate::cli::CliArgs;

use super::super::resolved::{ConfigError, ConfigSources, validation};
use super::non_blank;

/// `[backend]`: where to search and how to authenticate.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct BackendSection {
	pub(super) url: Option<String>,
	pub(super) token: Option<String>,
	pub(super) timeout_secs: Option<u64>,
}

pub(super) struct BackendResolution {
	pub(super) url: Option<String>,
	pub(super) token: Option<String>,
	pub(super) timeout: Option<Duration>,
}

impl BackendSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(url) = cli.backend_url.clone() {
			self.url = Some(url);
		}
		if let Some(token) = cli.token.clone() {
			self.token = Some(token);
		}
		if let Some(secs) = cli.timeout_secs {
			self.timeout_secs = Some(secs);
		}
	}

	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<BackendResolution, ConfigError> {
		let url = match non_blank(self.url) {
			Some(url) => Some(validation::backend_url(&url, sources.source_for_backend_url())?),
			None => None,
		};
		let timeout = match self.timeout_secs {
			Some(secs) => Some(validation::timeout(secs, sources.source_for_timeout())?),
			None => None,
		};

		Ok(BackendResolution {
			url,
			token: non_blank(self.token),
			timeout,
		})
	}
}

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, for error messages.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) backend_url: Option<SettingSource>,
	pub(crate) backend_timeout: Option<SettingSource>,
	pub(crate) debounce_ms: Option<SettingSource>,
	pub(crate) category: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_backend_url(&self) -> SettingSource {
		self.backend_url
			.clone()
			.unwrap_or(SettingSource::ConfigKey("backend.url"))
	}

	pub(crate) fn source_for_timeout(&self) -> SettingSource {
		self.backend_timeout
			.clone()
			.unwrap_or(SettingSource::ConfigKey("backend.timeout_secs"))
	}

	pub(crate) fn source_for_debounce(&self) -> SettingSource {
		self.debounce_ms
			.clone()
			.unwrap_or(SettingSource::ConfigKey("search.debounce_ms"))
	}

	pub(crate) fn source_for_category(&self) -> SettingSource {
		self.category
			.clone()
			.unwrap_or(SettingSource::ConfigKey("search.category"))
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		self.theme
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.theme"))
	}
}

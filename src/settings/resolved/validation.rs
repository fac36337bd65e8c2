//! Checks that turn raw setting values into typed ones.

use std::time::Duration;

use lineops_search::{Category, DEFAULT_DEBOUNCE, DebounceDelay};
use lineops_tui::Theme;
use lineops_tui::style;
use reqwest::Url;

use super::{ConfigError, SettingSource};

/// Accept an `http`/`https` URL with a host. The trailing slash is dropped.
pub(crate) fn backend_url(value: &str, origin: SettingSource) -> Result<String, ConfigError> {
	let invalid = |reason: String| ConfigError::invalid("backend.url", value, origin.clone(), reason);

	let url = Url::parse(value).map_err(|err| invalid(err.to_string()))?;
	if !matches!(url.scheme(), "http" | "https") {
		return Err(invalid("must start with http:// or https://".to_string()));
	}
	if url.host_str().is_none_or(str::is_empty) {
		return Err(invalid("must name a host".to_string()));
	}

	Ok(url.as_str().trim_end_matches('/').to_string())
}

pub(crate) fn timeout(secs: u64, origin: SettingSource) -> Result<Duration, ConfigError> {
	if secs == 0 {
		return Err(ConfigError::invalid(
			"backend.timeout_secs",
			secs.to_string(),
			origin,
			"must be greater than zero",
		));
	}
	Ok(Duration::from_secs(secs))
}

/// Negative delays are a recoverable mistake: the default is used and the
/// problem is handed back so it can be logged once the subscriber is up.
pub(crate) fn debounce(millis: i64, origin: SettingSource) -> (DebounceDelay, Option<ConfigError>) {
	match DebounceDelay::try_from_millis(millis) {
		Ok(delay) => (delay, None),
		Err(fallback) => {
			let warning = ConfigError::invalid(
				"search.debounce_ms",
				millis.to_string(),
				origin,
				format!(
					"must not be negative; using {}ms",
					DEFAULT_DEBOUNCE.as_millis()
				),
			);
			(fallback, Some(warning))
		}
	}
}

pub(crate) fn category(value: &str, origin: SettingSource) -> Result<Category, ConfigError> {
	value.parse().map_err(|_| {
		ConfigError::invalid(
			"search.category",
			value,
			origin,
			"expected one of workorders, cars, users",
		)
	})
}

pub(crate) fn theme(name: &str, origin: SettingSource) -> Result<Theme, ConfigError> {
	style::by_name(name).ok_or_else(|| {
		ConfigError::invalid(
			"ui.theme",
			name,
			origin,
			format!("unknown theme; available: {}", style::names().join(", ")),
		)
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	fn flag() -> SettingSource {
		SettingSource::CliFlag("--backend-url")
	}

	#[test]
	fn urls_need_scheme_and_host() {
		assert_eq!(
			backend_url("http://localhost:5000/", flag()).unwrap(),
			"http://localhost:5000"
		);
		assert_eq!(
			backend_url("https://lineops.example.com/base", flag()).unwrap(),
			"https://lineops.example.com/base"
		);

		let err = backend_url("localhost:5000", flag()).unwrap_err();
		assert_eq!(err.key, "backend.url");
		assert!(err.to_string().contains("value: localhost:5000"));
		assert!(backend_url("http://", flag()).is_err());
		assert!(backend_url("http://exa mple.com", flag()).is_err());
	}

	#[test]
	fn urls_are_parsed_not_pattern_matched() {
		assert_eq!(
			backend_url("HTTP://LineOps.Example.com:8080/api/", flag()).unwrap(),
			"http://lineops.example.com:8080/api"
		);
		let err = backend_url("http://[::1", flag()).unwrap_err();
		assert!(err.to_string().contains("value: http://[::1"), "{err}");
		let err = backend_url("mailto:ops@example.com", flag()).unwrap_err();
		assert!(err.to_string().contains("http://"), "{err}");
	}

	#[test]
	fn zero_timeout_is_rejected() {
		let err = timeout(0, SettingSource::Environment("LINEOPS__BACKEND__TIMEOUT_SECS"))
			.unwrap_err();
		assert!(err.to_string().contains("environment variable"));
		assert_eq!(
			timeout(3, SettingSource::ConfigKey("backend.timeout_secs")).unwrap(),
			Duration::from_secs(3)
		);
	}

	#[test]
	fn negative_debounce_uses_default() {
		let origin = SettingSource::ConfigKey("search.debounce_ms");
		let (delay, warning) = debounce(-5, origin.clone());
		assert_eq!(delay.as_duration(), DEFAULT_DEBOUNCE);
		let message = warning.unwrap().to_string();
		assert!(message.contains("using 500ms"), "{message}");
		assert!(message.contains("value: -5"), "{message}");

		let (delay, warning) = debounce(0, origin);
		assert_eq!(delay.as_duration(), Duration::ZERO);
		assert!(warning.is_none());
	}

	#[test]
	fn categories_parse_by_api_path() {
		let origin = SettingSource::ConfigKey("search.category");
		assert_eq!(category("cars", origin.clone()).unwrap(), Category::Cars);
		let err = category("trucks", origin).unwrap_err();
		assert_eq!(err.key, "search.category");
	}

	#[test]
	fn unknown_theme_lists_alternatives() {
		let err = theme("neon", SettingSource::CliFlag("--theme")).unwrap_err();
		let message = err.to_string();
		assert!(message.contains("slate"), "{message}");
		assert!(theme("Solarized", SettingSource::CliFlag("--theme")).is_ok());
	}
}

use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	for line in summary_lines(config) {
		println!("{line}");
	}
}

fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let mut lines = vec!["Effective configuration:".to_string()];
	lines.push(format!(
		"  Backend URL: {}",
		config.backend_url.as_deref().unwrap_or("(not set)")
	));
	lines.push(format!(
		"  Token: {}",
		if config.token.is_some() {
			"(set)"
		} else {
			"(stored login)"
		}
	));
	match config.timeout {
		Some(timeout) => lines.push(format!("  Request timeout: {}s", timeout.as_secs())),
		None => lines.push("  Request timeout: none".to_string()),
	}
	lines.push(format!(
		"  Debounce: {}ms",
		config.debounce.as_duration().as_millis()
	));
	lines.push(format!("  Category: {}", config.category.label()));
	if !config.initial_query.is_empty() {
		lines.push(format!("  Initial query: {}", config.initial_query));
	}
	lines.push(format!(
		"  UI theme: {}",
		config.theme_name.as_deref().unwrap_or("(default)")
	));
	if let Some(title) = &config.title {
		lines.push(format!("  Prompt title: {title}"));
	}
	lines.push(format!(
		"  Log level: {}",
		config.log_level.as_deref().unwrap_or("(RUST_LOG or info)")
	));
	if let Some(file) = &config.log_file {
		lines.push(format!("  Log file: {}", file.display()));
	}
	lines
}

#[cfg(test)]
mod tests {
	use lineops_search::{Category, DebounceDelay};
	use lineops_tui::Theme;

	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			backend_url: Some("http://localhost:5000".into()),
			token: Some("secret-token".into()),
			timeout: None,
			debounce: DebounceDelay::from_millis(300),
			category: Category::Cars,
			initial_query: "civic".into(),
			title: None,
			theme_name: Some("mono".into()),
			theme: Theme::default(),
			log_level: None,
			log_file: None,
			warnings: Vec::new(),
		}
	}

	#[test]
	fn summary_hides_the_token() {
		let lines = summary_lines(&config()).join("\n");
		assert!(lines.contains("Backend URL: http://localhost:5000"));
		assert!(lines.contains("Token: (set)"));
		assert!(!lines.contains("secret-token"));
		assert!(lines.contains("Debounce: 300ms"));
		assert!(lines.contains("Category: Cars"));
		assert!(lines.contains("Initial query: civic"));
	}

	#[test]
	fn summary_prints_without_panic() {
		print_summary(&config());
	}
}

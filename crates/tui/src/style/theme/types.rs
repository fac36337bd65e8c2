use ratatui::style::{Color, Style};

/// Styles for every themed element of the search screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
	/// Table header, borders and the active category tab.
	pub header: Style,
	/// The selected result row.
	pub row_highlight: Style,
	/// Prompt title in front of the query input.
	pub prompt: Style,
	/// Placeholders, hints and the loading indicator.
	pub empty: Style,
	/// Query matches inside result labels.
	pub highlight: Style,
	/// The fetch error line.
	pub error: Style,
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn error_style(&self) -> Style {
		self.error
	}

	/// Returns the style for inactive tabs.
	#[must_use]
	pub fn tab_inactive_style(&self) -> Style {
		Style::new()
			.fg(self.header.fg.unwrap_or(Color::Reset))
			.bg(self.row_highlight.bg.unwrap_or(Color::Reset))
	}

	/// Returns the style for the highlighted tab.
	#[must_use]
	pub fn tab_highlight_style(&self) -> Style {
		Style::new().bg(self.header.bg.unwrap_or(Color::Reset))
	}

	/// Foreground used for borders and separators.
	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::new().fg(self.header.fg.unwrap_or(Color::Reset))
	}
}

/// A named theme as it appears in `--list-themes`.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	pub name: String,
	pub theme: Theme,
	/// Alternate names accepted by `--theme`.
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	pub fn alias(mut self, alias: impl Into<String>) -> Self {
		self.aliases.push(alias.into());
		self
	}

	/// Whether `name` refers to this theme, ignoring case.
	#[must_use]
	pub fn answers_to(&self, name: &str) -> bool {
		let name = name.trim();
		self.name.eq_ignore_ascii_case(name)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(name))
	}
}

//! Single-line query input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// The editable query line.
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> QueryInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	/// Current query text.
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Feed a key to the editor. Returns `true` when the text changed.
	///
	/// Keys that would start a second line are swallowed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let newline = matches!(key.code, KeyCode::Enter)
			|| (key.modifiers.contains(KeyModifiers::CONTROL)
				&& matches!(key.code, KeyCode::Char('m' | 'j')));
		if newline {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	pub fn clear(&mut self) {
		*self = Self::new(String::new());
	}

	pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_appends_at_the_end() {
		let mut input = QueryInput::new("ci");
		assert!(input.input(key(KeyCode::Char('v'))));
		assert_eq!(input.text(), "civ");
		assert!(input.input(key(KeyCode::Backspace)));
		assert_eq!(input.text(), "ci");
	}

	#[test]
	fn newline_keys_are_ignored() {
		let mut input = QueryInput::new("jo");
		assert!(!input.input(key(KeyCode::Enter)));
		assert!(!input.input(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::CONTROL)));
		assert_eq!(input.text(), "jo");
	}

	#[test]
	fn cursor_motion_is_not_a_change() {
		let mut input = QueryInput::new("jo");
		assert!(!input.input(key(KeyCode::Left)));
		input.clear();
		assert_eq!(input.text(), "");
	}
}

use std::time::Instant;

use lineops_search::Category;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tracing::debug;

use super::{App, SearchOutcome};

impl App<'_> {
	/// Process a key press. Returns the outcome once the user leaves the screen.
	pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Option<SearchOutcome> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => return Some(self.cancel()),
			KeyCode::Char('c') if ctrl => return Some(self.cancel()),
			KeyCode::Enter => return Some(self.accept()),
			KeyCode::Tab => self.switch_category(self.session.category().next()),
			KeyCode::BackTab => self.switch_category(self.session.category().previous()),
			KeyCode::Char('r') if ctrl => {
				debug!("manual retry");
				self.session.refresh();
			}
			KeyCode::Up => self.results.move_up(),
			KeyCode::Down => self.results.move_down(),
			_ => {
				if self.input.input(key) {
					self.session.set_query(self.input.text(), now);
					if self.input.text().is_empty() {
						self.resync();
					}
				}
			}
		}
		None
	}

	pub fn handle_mouse(&mut self, mouse: MouseEvent) {
		self.results.update_hover(mouse.column, mouse.row);
		match mouse.kind {
			MouseEventKind::ScrollUp if self.results.hovered => self.results.move_up(),
			MouseEventKind::ScrollDown if self.results.hovered => self.results.move_down(),
			MouseEventKind::Down(MouseButton::Left) if self.results.hovered => {
				self.results.select_at(mouse.row);
			}
			_ => {}
		}
	}

	fn switch_category(&mut self, category: Category) {
		self.session.set_category(category);
		self.resync();
	}

	fn cancel(&self) -> SearchOutcome {
		SearchOutcome::cancelled(self.input.text(), self.session.category())
	}

	fn accept(&mut self) -> SearchOutcome {
		let query = self.input.text().to_string();
		let category = self.session.category();
		let selection = self
			.results
			.selected()
			.and_then(|index| self.session.select(index));
		if selection.is_some() {
			self.input.clear();
			self.resync();
		}
		SearchOutcome::accepted(query, category, selection)
	}
}

//! Selection and scrolling state for the results table.

use ratatui::layout::{Position, Rect};
use ratatui::widgets::{ScrollbarState, TableState};

use crate::components::tables::TABLE_HEADER_ROWS;

#[derive(Default)]
pub(crate) struct ResultsState {
	pub table_state: TableState,
	pub scrollbar_state: ScrollbarState,
	/// Where the table was last drawn, for mouse hit testing.
	pub area: Option<Rect>,
	pub hovered: bool,
	len: usize,
}

impl ResultsState {
	/// Adopt a new result count, keeping the selection inside it.
	pub fn sync(&mut self, len: usize) {
		self.len = len;
		match self.table_state.selected() {
			_ if len == 0 => self.table_state.select(None),
			None => self.table_state.select(Some(0)),
			Some(selected) if selected >= len => self.table_state.select(Some(len - 1)),
			Some(_) => {}
		}
	}

	/// Row count the selection was last synced to.
	pub fn len(&self) -> usize {
		self.len
	}

	/// Back to the first row, e.g. after a new result set arrives.
	pub fn reset(&mut self, len: usize) {
		self.table_state = TableState::default();
		self.sync(len);
	}

	pub fn selected(&self) -> Option<usize> {
		self.table_state.selected().filter(|index| *index < self.len)
	}

	pub fn move_up(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected > 0
		{
			self.table_state.select(Some(selected - 1));
		}
	}

	pub fn move_down(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected + 1 < self.len
		{
			self.table_state.select(Some(selected + 1));
		}
	}

	pub fn update_hover(&mut self, column: u16, row: u16) {
		self.hovered = self
			.area
			.is_some_and(|area| area.contains(Position::new(column, row)));
	}

	/// Select the row under the pointer. Returns `true` when a row was hit.
	pub fn select_at(&mut self, row: u16) -> bool {
		let Some(area) = self.area else {
			return false;
		};
		// Rows start below the top border, the header and its margin.
		let body_top = area.y.saturating_add(1).saturating_add(TABLE_HEADER_ROWS);
		let body_bottom = area.bottom().saturating_sub(1);
		if row < body_top || row >= body_bottom {
			return false;
		}

		let index = self.table_state.offset() + usize::from(row - body_top);
		if index >= self.len {
			return false;
		}
		self.table_state.select(Some(index));
		true
	}
}

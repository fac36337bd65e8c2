use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::text::Line;
use ratatui::widgets::{
	Block, Borders, Cell, HighlightSpacing, Paragraph, Row, Scrollbar, ScrollbarOrientation,
	ScrollbarState, Table, TableState,
};

use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
/// Header row plus its bottom margin.
pub(crate) const TABLE_HEADER_ROWS: u16 = 2;

/// Everything needed to draw one bordered table.
pub struct TableSpec<'a> {
	pub title: String,
	pub headers: Vec<&'a str>,
	pub widths: Vec<Constraint>,
	pub rows: Vec<Row<'a>>,
	/// Centered in the body when there are no rows.
	pub empty_message: Option<&'a str>,
}

/// Draw a rounded, titled table with a scrollbar when rows overflow.
pub fn render_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	scrollbar_state: &mut ScrollbarState,
	spec: TableSpec<'_>,
	theme: &Theme,
) {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style())
		.title(spec.title);
	let inner = block.inner(area);
	frame.render_widget(block, area);
	if inner.width == 0 || inner.height == 0 {
		return;
	}

	let visible_rows = usize::from(inner.height.saturating_sub(TABLE_HEADER_ROWS));
	let total_rows = spec.rows.len();
	let needs_scrollbar = visible_rows > 0 && total_rows > visible_rows;
	let table_area = if needs_scrollbar {
		Rect {
			width: inner.width.saturating_sub(1),
			..inner
		}
	} else {
		inner
	};

	let header = Row::new(spec.headers.into_iter().map(Cell::from))
		.style(theme.header_style())
		.bottom_margin(1);
	let table = Table::new(spec.rows, spec.widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::WhenSelected)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, table_area, table_state);

	if total_rows == 0
		&& let Some(message) = spec.empty_message
	{
		render_empty_message(frame, inner, message, theme);
	}

	if needs_scrollbar {
		*scrollbar_state = scrollbar_state
			.content_length(total_rows)
			.viewport_content_length(visible_rows)
			.position(table_state.selected().unwrap_or_default());
		let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
			.begin_symbol(None)
			.end_symbol(None)
			.track_symbol(Some("│"))
			.style(theme.border_style());
		let scrollbar_area = Rect {
			y: inner.y.saturating_add(TABLE_HEADER_ROWS),
			height: inner.height.saturating_sub(TABLE_HEADER_ROWS),
			..inner
		};
		frame.render_stateful_widget(scrollbar, scrollbar_area, scrollbar_state);
	} else {
		*scrollbar_state = ScrollbarState::default();
	}
}

fn render_empty_message(frame: &mut Frame, inner: Rect, message: &str, theme: &Theme) {
	if inner.height <= TABLE_HEADER_ROWS {
		return;
	}
	let body = Rect {
		y: inner.y + TABLE_HEADER_ROWS,
		height: inner.height - TABLE_HEADER_ROWS,
		..inner
	};
	let paragraph = Paragraph::new(Line::from(message))
		.style(theme.empty_style())
		.alignment(Alignment::Center);
	frame.render_widget(paragraph, body);
}

use lineops_search::Category;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Tabs};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::input::QueryInput;
use crate::style::Theme;

/// Argument bundle for rendering the prompt row.
pub struct InputContext<'a> {
	pub input: &'a QueryInput<'a>,
	pub title: &'a str,
	pub placeholder: &'a str,
	pub category: Category,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Loading indicator drawn at the right edge of the input.
pub struct ProgressState<'a> {
	pub label: &'a str,
	pub loading: bool,
	pub throbber_state: &'a ThrobberState,
}

/// Render `title > query` followed by the category tabs.
pub fn render_input_with_tabs(frame: &mut Frame, input: InputContext<'_>, progress: ProgressState<'_>) {
	let InputContext {
		input,
		title,
		placeholder,
		category,
		area,
		theme,
	} = input;

	let [prompt_area, input_area, tabs_area] = Layout::horizontal(layout_constraints(
		prompt_width(title),
		tabs_width(),
	))
	.areas(area);

	if !title.is_empty() {
		let prompt = Paragraph::new(format!("{title} > ")).style(theme.prompt_style());
		frame.render_widget(prompt, prompt_area);
	}

	input.render_textarea(frame, input_area);
	if input.text().is_empty() {
		render_placeholder(frame, input_area, placeholder, theme);
	}
	render_progress(frame, input_area, progress, theme);

	let tabs_inner = Rect {
		x: tabs_area.x.saturating_add(1),
		width: tabs_area.width.saturating_sub(1),
		..tabs_area
	};
	let tabs = Tabs::new(tab_titles(theme, category))
		.select(category.index())
		.divider("")
		.padding("", " ")
		.highlight_style(theme.tab_highlight_style());
	frame.render_widget(tabs, tabs_inner);
}

fn prompt_width(title: &str) -> u16 {
	if title.is_empty() {
		0
	} else {
		(title.width() as u16).saturating_add(3)
	}
}

fn layout_constraints(prompt_width: u16, tabs_width: u16) -> [Constraint; 3] {
	[
		Constraint::Length(prompt_width),
		Constraint::Min(1),
		Constraint::Length(tabs_width),
	]
}

fn tab_titles(theme: &Theme, active: Category) -> Vec<Line<'static>> {
	Category::ALL
		.iter()
		.map(|category| {
			let style = if *category == active {
				theme.header_style()
			} else {
				theme.tab_inactive_style()
			};
			Line::from(format!(" {} ", category.label())).style(style)
		})
		.collect()
}

fn tabs_width() -> u16 {
	Category::ALL
		.iter()
		.map(|category| (category.label().width() as u16).saturating_add(3))
		.fold(2u16, u16::saturating_add)
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width == 0 || area.height == 0 || text.is_empty() {
		return;
	}
	let visible: String = text.chars().take(area.width as usize).collect();
	frame.buffer_mut().set_line(
		area.left(),
		area.top(),
		&Line::from(Span::styled(visible, theme.empty_style())),
		area.width,
	);
}

/// Right-align the spinner and label, never overlapping typed text.
fn render_progress(frame: &mut Frame, area: Rect, progress: ProgressState<'_>, theme: &Theme) {
	if !progress.loading || area.width == 0 || area.height == 0 {
		return;
	}

	let muted = theme.empty_style();
	let spinner = Throbber::default()
		.style(muted)
		.throbber_style(muted)
		.to_symbol_span(progress.throbber_state);
	let line = Line::from(vec![spinner, Span::styled(progress.label.to_string(), muted)]);
	let line_width = line.width() as u16;

	let buffer = frame.buffer_mut();
	let row = area.top();
	let last_typed = (area.left()..area.right())
		.rev()
		.find(|&x| {
			buffer
				.cell((x, row))
				.is_some_and(|cell| !cell.symbol().trim().is_empty())
		});

	let mut start_x = area.right().saturating_sub(line_width).max(area.left());
	if let Some(last_x) = last_typed {
		start_x = start_x.max(last_x.saturating_add(3));
	}
	if start_x >= area.right() {
		return;
	}
	let max_width = area.right().saturating_sub(start_x).min(line_width);
	buffer.set_line(start_x, row, &line, max_width);
}

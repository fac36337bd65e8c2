use lineops_search::SearchStatus;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::App;
use crate::components::{
	InputContext, ProgressState, TableSpec, build_result_rows, render_input_with_tabs,
	render_table,
};

const LOADING_LABEL: &str = "Searching";

impl App<'_> {
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let [prompt_area, results_area, status_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Min(3),
			Constraint::Length(1),
		])
		.areas(area);

		self.render_prompt(frame, prompt_area);
		self.render_results(frame, results_area);
		self.render_status(frame, status_area);
	}

	fn render_prompt(&self, frame: &mut Frame, area: Rect) {
		let category = self.session.category();
		let placeholder = self.ui.placeholder(category);
		let input = InputContext {
			input: &self.input,
			title: &self.ui.prompt_title,
			placeholder: &placeholder,
			category,
			area,
			theme: &self.style.theme,
		};
		let progress = ProgressState {
			label: LOADING_LABEL,
			loading: self.session.is_loading(),
			throbber_state: &self.throbber_state,
		};
		render_input_with_tabs(frame, input, progress);
	}

	fn render_results(&mut self, frame: &mut Frame, area: Rect) {
		self.results.area = Some(area);
		let results = self.session.results();
		let rows = build_result_rows(
			results,
			self.session.category(),
			self.session.debounced_query(),
			self.style.theme.highlight,
		);
		let empty_message = (self.session.status() == SearchStatus::Displayed)
			.then_some(self.ui.no_results.as_str());

		let spec = TableSpec {
			title: self.ui.results_title_with_count(results.len()),
			headers: vec![self.session.category().label(), "Score"],
			widths: vec![Constraint::Fill(1), Constraint::Length(5)],
			rows,
			empty_message,
		};
		render_table(
			frame,
			area,
			&mut self.results.table_state,
			&mut self.results.scrollbar_state,
			spec,
			&self.style.theme,
		);
	}

	fn render_status(&self, frame: &mut Frame, area: Rect) {
		let line = match self.session.error() {
			Some(error) => Line::from(Span::styled(error, self.style.theme.error_style())),
			None => Line::from(Span::styled(
				self.ui.hint.as_str(),
				self.style.theme.empty_style(),
			)),
		};
		frame.render_widget(Paragraph::new(line), area);
	}
}

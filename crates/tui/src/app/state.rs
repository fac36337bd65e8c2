use std::time::{Duration, Instant};

use lineops_search::SearchSession;
use throbber_widgets_tui::ThrobberState;

use super::results::ResultsState;
use crate::config::UiLabels;
use crate::input::QueryInput;
use crate::style::{StyleConfig, Theme};

/// Aggregate state behind the search screen.
pub struct App<'a> {
	pub(crate) session: SearchSession,
	pub(crate) input: QueryInput<'a>,
	pub(crate) ui: UiLabels,
	pub style: StyleConfig,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) results: ResultsState,
}

impl<'a> App<'a> {
	/// Build the screen around a session. The input starts with the session's
	/// current query.
	pub fn new(session: SearchSession) -> Self {
		let input = QueryInput::new(session.query());
		Self {
			session,
			input,
			ui: UiLabels::default(),
			style: StyleConfig::default(),
			throbber_state: ThrobberState::default(),
			results: ResultsState::default(),
		}
	}

	#[must_use]
	pub fn with_ui(mut self, ui: UiLabels) -> Self {
		self.ui = ui;
		self
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.style.theme = theme;
	}

	pub fn session(&self) -> &SearchSession {
		&self.session
	}

	/// Advance the session and fold its results into the table state.
	/// Returns `true` when anything on screen changed.
	pub fn tick(&mut self, now: Instant) -> bool {
		let changed = self.session.tick(now);
		if self.session.is_loading() {
			self.throbber_state.calc_next();
		}

		// Results applied outside `tick` (e.g. by `wait_idle`) still need a
		// table resync.
		let stale_table = self.results.len() != self.session.results().len();
		if changed || stale_table {
			self.resync();
		}
		changed || stale_table
	}

	/// Block until the in-flight fetch resolves, then show its results.
	pub fn wait_idle(&mut self, timeout: Duration) -> bool {
		let idle = self.session.wait_idle(timeout);
		self.resync();
		idle
	}

	/// Point the table at a fresh result set.
	pub(crate) fn resync(&mut self) {
		self.results.reset(self.session.results().len());
	}
}

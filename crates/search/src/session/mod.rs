//! Query lifecycle for one search box.
//!
//! A [`SearchSession`] owns everything that changes while the user types: the
//! raw query, its debounced form, the active category, the ranked results and
//! the error line. Fetching and scoring run on a background worker; the
//! session applies only the response belonging to the most recent request.
//!
//! The session is driven from a single thread. Callers feed it input through
//! [`set_query`](SearchSession::set_query) and
//! [`set_category`](SearchSession::set_category) and call
//! [`tick`](SearchSession::tick) from their event loop.

mod commands;
mod runtime;
mod worker;

#[cfg(test)]
mod tests;

use std::sync::Arc;
use std::sync::mpsc::{RecvTimeoutError, TryRecvError};
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, trace, warn};

use self::commands::SearchResponse;
use self::runtime::SearchRuntime;
use crate::candidate::Candidate;
use crate::category::Category;
use crate::debounce::{DebounceDelay, Debouncer};
use crate::scoring::ScoredCandidate;
use crate::source::CandidateSource;

/// Where the session is in its query lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStatus {
	/// No query; nothing shown, nothing requested.
	#[default]
	Idle,
	/// A fetch for the current query is in flight.
	Pending,
	/// Ranked results (possibly none) are available.
	Displayed,
	/// The last fetch failed; see [`SearchSession::error`].
	Errored,
}

/// A result the user picked, with the category it was found in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
	pub candidate: Candidate,
	pub category: Category,
}

type SelectHandler = Box<dyn FnMut(&Candidate, Category)>;

/// State machine behind a debounced, category-scoped search box.
pub struct SearchSession {
	category: Category,
	query: String,
	input: Debouncer<String>,
	last_fetched: Option<(String, Category)>,
	runtime: SearchRuntime,
	results: Vec<ScoredCandidate>,
	status: SearchStatus,
	error: Option<String>,
	on_select: Option<SelectHandler>,
}

impl SearchSession {
	/// Start a session with an empty query.
	pub fn new(
		source: Arc<dyn CandidateSource>,
		category: Category,
		delay: impl Into<DebounceDelay>,
	) -> Self {
		Self {
			category,
			query: String::new(),
			input: Debouncer::new(String::new(), delay),
			last_fetched: None,
			runtime: SearchRuntime::spawn(source),
			results: Vec::new(),
			status: SearchStatus::Idle,
			error: None,
			on_select: None,
		}
	}

	/// Seed the query. The seed counts as already debounced, so the first
	/// [`tick`](Self::tick) fetches it.
	#[must_use]
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		let query = query.into();
		self.input.reset(query.clone());
		self.query = query;
		self
	}

	/// Register the handler invoked once per [`select`](Self::select).
	#[must_use]
	pub fn on_select(mut self, handler: impl FnMut(&Candidate, Category) + 'static) -> Self {
		self.on_select = Some(Box::new(handler));
		self
	}

	/// Record a keystroke's worth of query text.
	///
	/// An empty query clears the results at once and never reaches the
	/// backend.
	pub fn set_query(&mut self, text: impl Into<String>, now: Instant) {
		let text = text.into();
		if text == self.query {
			return;
		}
		self.query = text;

		if self.query.is_empty() {
			self.clear();
			return;
		}

		self.input.update(self.query.clone(), now);
	}

	/// Switch the category, fetching straight away when a debounced query
	/// already exists.
	pub fn set_category(&mut self, category: Category) {
		if category == self.category {
			return;
		}
		debug!(from = %self.category, to = %category, "switching category");
		self.category = category;
		self.results.clear();

		let query = self.input.stable().clone();
		if query.is_empty() {
			self.runtime.invalidate();
			self.status = SearchStatus::Idle;
			return;
		}
		self.issue(query);
	}

	/// Re-run the current debounced query, e.g. after a failure.
	pub fn refresh(&mut self) {
		let query = self.input.stable().clone();
		if !query.is_empty() {
			self.issue(query);
		}
	}

	/// Settle the pending query without waiting for its deadline.
	pub fn flush(&mut self) -> bool {
		self.input.flush();
		let issued = self.issue_if_stale();
		self.drain() || issued
	}

	/// Advance the session: settle the debounced query, fetch it when needed
	/// and apply any response that arrived. Returns whether visible state
	/// changed.
	pub fn tick(&mut self, now: Instant) -> bool {
		self.input.poll(now);
		let issued = self.issue_if_stale();
		self.drain() || issued
	}

	/// Block until the in-flight fetch resolves or `timeout` passes.
	/// Returns `true` when nothing is in flight any more.
	pub fn wait_idle(&mut self, timeout: Duration) -> bool {
		let deadline = Instant::now() + timeout;
		while self.runtime.is_in_flight() {
			let remaining = deadline.saturating_duration_since(Instant::now());
			if remaining.is_zero() {
				return false;
			}
			match self.runtime.recv_timeout(remaining) {
				Ok(response) => {
					self.apply(response);
				}
				Err(RecvTimeoutError::Timeout) => return false,
				Err(RecvTimeoutError::Disconnected) => self.worker_lost(),
			}
		}
		true
	}

	/// Pick the result at `index`. Invokes the select handler, then resets the
	/// query and results.
	pub fn select(&mut self, index: usize) -> Option<Selection> {
		let scored = self.results.get(index)?;
		let selection = Selection {
			candidate: scored.candidate.clone(),
			category: self.category,
		};

		if let Some(handler) = self.on_select.as_mut() {
			handler(&selection.candidate, selection.category);
		}

		self.query.clear();
		self.clear();
		Some(selection)
	}

	/// Cancel the pending debounce, drop in-flight requests and stop the worker.
	pub fn shutdown(&mut self) {
		self.input.cancel();
		self.runtime.shutdown();
	}

	/// The query text as typed.
	pub fn query(&self) -> &str {
		&self.query
	}

	/// The query after debouncing; this is what gets fetched.
	pub fn debounced_query(&self) -> &str {
		self.input.stable()
	}

	pub fn category(&self) -> Category {
		self.category
	}

	pub fn results(&self) -> &[ScoredCandidate] {
		&self.results
	}

	pub fn status(&self) -> SearchStatus {
		self.status
	}

	/// User-facing description of the last failure.
	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}

	pub fn is_loading(&self) -> bool {
		self.runtime.is_in_flight()
	}

	/// When the pending query settles, for event loops that sleep between ticks.
	pub fn next_deadline(&self) -> Option<Instant> {
		self.input.deadline()
	}

	fn clear(&mut self) {
		self.input.reset(String::new());
		self.last_fetched = None;
		self.runtime.invalidate();
		self.results.clear();
		self.error = None;
		self.status = SearchStatus::Idle;
	}

	fn issue_if_stale(&mut self) -> bool {
		let query = self.input.stable();
		if query.is_empty() {
			return false;
		}
		let current = (query.clone(), self.category);
		if self.last_fetched.as_ref() == Some(&current) {
			return false;
		}
		self.issue(current.0);
		true
	}

	fn issue(&mut self, query: String) {
		let id = self.runtime.issue(query.clone(), self.category);
		debug!(id, category = %self.category, query = %query, "issuing search");
		self.last_fetched = Some((query, self.category));
		self.error = None;
		self.status = SearchStatus::Pending;
	}

	fn drain(&mut self) -> bool {
		let mut changed = false;
		loop {
			match self.runtime.try_recv() {
				Ok(response) => changed |= self.apply(response),
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => {
					if self.runtime.is_in_flight() {
						self.worker_lost();
						changed = true;
					}
					break;
				}
			}
		}
		changed
	}

	fn apply(&mut self, response: SearchResponse) -> bool {
		let SearchResponse {
			id,
			category,
			query,
			outcome,
		} = response;

		if !self.runtime.matches_latest(id) {
			trace!(id, %category, query = %query, "discarding stale response");
			return false;
		}
		self.runtime.record_completion();

		match outcome {
			Ok(results) => {
				debug!(id, %category, matches = results.len(), "search complete");
				self.results = results;
				self.error = None;
				self.status = SearchStatus::Displayed;
			}
			Err(err) => {
				warn!(id, %category, query = %query, error = %err, "search failed");
				self.results.clear();
				self.error = Some(format!("Failed to fetch results: {err}"));
				self.status = SearchStatus::Errored;
			}
		}
		true
	}

	fn worker_lost(&mut self) {
		warn!("search worker disconnected");
		self.runtime.record_completion();
		self.results.clear();
		self.error = Some("Failed to fetch results: search worker stopped".to_string());
		self.status = SearchStatus::Errored;
	}
}

impl Drop for SearchSession {
	fn drop(&mut self) {
		self.shutdown();
	}
}

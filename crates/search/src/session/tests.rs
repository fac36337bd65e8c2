use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use super::*;
use crate::error::FetchError;

const DELAY: Duration = Duration::from_millis(300);
const WAIT: Duration = Duration::from_secs(5);

/// Canned backend that records every fetch it serves.
#[derive(Default)]
struct ScriptedSource {
	responses: HashMap<(Category, String), Result<Vec<Candidate>, String>>,
	slow: HashMap<String, Duration>,
	calls: Mutex<Vec<(Category, String)>>,
}

impl ScriptedSource {
	fn respond(mut self, category: Category, query: &str, candidates: Vec<Candidate>) -> Self {
		self.responses
			.insert((category, query.to_string()), Ok(candidates));
		self
	}

	fn fail(mut self, category: Category, query: &str, reason: &str) -> Self {
		self.responses
			.insert((category, query.to_string()), Err(reason.to_string()));
		self
	}

	fn slow(mut self, query: &str, delay: Duration) -> Self {
		self.slow.insert(query.to_string(), delay);
		self
	}

	fn calls(&self) -> Vec<(Category, String)> {
		self.calls.lock().unwrap().clone()
	}
}

impl CandidateSource for ScriptedSource {
	fn fetch(&self, category: Category, query: &str) -> Result<Vec<Candidate>, FetchError> {
		self.calls
			.lock()
			.unwrap()
			.push((category, query.to_string()));
		if let Some(delay) = self.slow.get(query) {
			thread::sleep(*delay);
		}
		match self.responses.get(&(category, query.to_string())) {
			Some(Ok(candidates)) => Ok(candidates.clone()),
			Some(Err(reason)) => Err(FetchError::Other(reason.clone())),
			None => Ok(Vec::new()),
		}
	}
}

fn car(make: &str, model: &str, plate: &str) -> Candidate {
	Candidate::from_pairs([("make", make), ("model", model), ("licensePlate", plate)])
}

fn user(first: &str, last: &str) -> Candidate {
	Candidate::from_pairs([("firstName", first), ("lastName", last)])
}

fn session(source: &Arc<ScriptedSource>, category: Category) -> SearchSession {
	SearchSession::new(source.clone(), category, DELAY)
}

/// Type `text` one character at a time, `gap` apart, starting at `start`.
/// Returns the instant of the last keystroke.
fn type_text(session: &mut SearchSession, text: &str, start: Instant, gap: Duration) -> Instant {
	let mut now = start;
	for end in 1..=text.len() {
		now = start + gap * (end as u32 - 1);
		session.set_query(&text[..end], now);
		session.tick(now);
	}
	now
}

#[test]
fn burst_of_keystrokes_fetches_once() {
	let source = Arc::new(ScriptedSource::default().respond(
		Category::Cars,
		"civ",
		vec![car("Honda", "Civic", "ABC123"), car("Ford", "Focus", "XYZ789")],
	));
	let mut session = session(&source, Category::Cars);

	let start = Instant::now();
	let last = type_text(&mut session, "civ", start, Duration::from_millis(100));
	assert!(source.calls().is_empty(), "nothing should be fetched mid-burst");
	assert_eq!(session.status(), SearchStatus::Idle);

	assert!(session.tick(last + DELAY));
	assert!(session.wait_idle(WAIT));

	assert_eq!(source.calls(), vec![(Category::Cars, "civ".to_string())]);
	assert_eq!(session.status(), SearchStatus::Displayed);
	assert_eq!(session.results().len(), 1);
	assert_eq!(session.results()[0].score, 5);
	assert_eq!(
		session.results()[0].candidate.display_label(Category::Cars),
		"Honda Civic (ABC123)"
	);

	// Settling on the same text again does not refetch.
	session.tick(last + DELAY * 3);
	assert_eq!(source.calls().len(), 1);
}

#[test]
fn empty_query_clears_without_fetching() {
	let source = Arc::new(ScriptedSource::default().respond(
		Category::Users,
		"jo",
		vec![user("John", "Doe")],
	));
	let mut session = session(&source, Category::Users);

	let start = Instant::now();
	session.set_query("jo", start);
	session.tick(start + DELAY);
	assert!(session.wait_idle(WAIT));
	assert_eq!(session.results().len(), 1);

	session.set_query("", start + DELAY * 2);
	assert!(session.results().is_empty());
	assert_eq!(session.status(), SearchStatus::Idle);
	assert_eq!(session.debounced_query(), "");

	session.tick(start + DELAY * 10);
	assert_eq!(source.calls().len(), 1, "empty query must not reach the backend");
	assert!(!session.is_loading());
}

#[test]
fn clearing_mid_burst_cancels_the_pending_fetch() {
	let source = Arc::new(ScriptedSource::default());
	let mut session = session(&source, Category::WorkOrders);

	let start = Instant::now();
	session.set_query("oil", start);
	session.set_query("", start + Duration::from_millis(50));
	session.tick(start + DELAY * 4);

	assert!(source.calls().is_empty());
	assert_eq!(session.next_deadline(), None);
}

#[test]
fn switching_category_refetches_immediately() {
	let source = Arc::new(
		ScriptedSource::default()
			.respond(Category::Cars, "jo", vec![car("Jowett", "Javelin", "JJ1")])
			.respond(Category::Users, "jo", vec![user("John", "Doe")]),
	);
	let mut session = session(&source, Category::Cars);

	let start = Instant::now();
	session.set_query("jo", start);
	session.tick(start + DELAY);
	assert!(session.wait_idle(WAIT));

	session.set_category(Category::Users);
	assert!(session.results().is_empty());
	assert!(session.is_loading());
	assert!(session.wait_idle(WAIT));

	assert_eq!(
		source.calls(),
		vec![
			(Category::Cars, "jo".to_string()),
			(Category::Users, "jo".to_string()),
		]
	);
	assert_eq!(session.category(), Category::Users);
	assert_eq!(session.results()[0].candidate.field("firstName"), "John");
}

#[test]
fn switching_category_without_query_does_nothing() {
	let source = Arc::new(ScriptedSource::default());
	let mut session = session(&source, Category::WorkOrders);

	session.set_category(Category::Cars);
	session.tick(Instant::now() + DELAY);

	assert!(source.calls().is_empty());
	assert_eq!(session.category(), Category::Cars);
	assert_eq!(session.status(), SearchStatus::Idle);
}

#[test]
fn fetch_failure_sets_error_and_empties_results() {
	let source = Arc::new(
		ScriptedSource::default()
			.respond(Category::Users, "jo", vec![user("John", "Doe")])
			.fail(Category::Users, "job", "connection refused"),
	);
	let mut session = session(&source, Category::Users);

	let start = Instant::now();
	session.set_query("jo", start);
	session.tick(start + DELAY);
	assert!(session.wait_idle(WAIT));
	assert_eq!(session.results().len(), 1);

	session.set_query("job", start + DELAY);
	session.tick(start + DELAY * 2);
	assert!(session.wait_idle(WAIT));

	assert_eq!(session.status(), SearchStatus::Errored);
	assert_eq!(
		session.error(),
		Some("Failed to fetch results: connection refused")
	);
	assert!(session.results().is_empty());
	assert!(!session.is_loading());
}

#[test]
fn next_fetch_clears_previous_error() {
	let source = Arc::new(
		ScriptedSource::default()
			.fail(Category::Cars, "x", "boom")
			.respond(Category::Cars, "ford", vec![car("Ford", "Focus", "F1")]),
	);
	let mut session = session(&source, Category::Cars);

	let start = Instant::now();
	session.set_query("x", start);
	session.tick(start + DELAY);
	assert!(session.wait_idle(WAIT));
	assert!(session.error().is_some());

	session.set_query("ford", start + DELAY);
	session.tick(start + DELAY * 2);
	assert_eq!(session.error(), None);
	assert!(session.wait_idle(WAIT));
	assert_eq!(session.status(), SearchStatus::Displayed);
}

#[test]
fn stale_response_is_discarded() {
	let source = Arc::new(
		ScriptedSource::default()
			.respond(Category::Users, "ann", vec![user("Anna", "Slow")])
			.respond(Category::Users, "bob", vec![user("Bob", "Fast")])
			.slow("ann", Duration::from_millis(200)),
	);
	let mut session = session(&source, Category::Users);

	let start = Instant::now();
	session.set_query("ann", start);
	session.tick(start + DELAY);

	// Let the worker pick up the slow query before it is superseded.
	let picked_up = Instant::now() + WAIT;
	while source.calls().is_empty() && Instant::now() < picked_up {
		thread::sleep(Duration::from_millis(5));
	}

	session.set_query("bob", start + DELAY);
	session.tick(start + DELAY * 2);
	assert!(session.wait_idle(WAIT));

	assert_eq!(source.calls().len(), 2);
	assert_eq!(session.results().len(), 1);
	assert_eq!(session.results()[0].candidate.field("firstName"), "Bob");

	// Nothing left in the channel may overwrite the newer results.
	thread::sleep(Duration::from_millis(50));
	session.tick(start + DELAY * 3);
	assert_eq!(session.results()[0].candidate.field("firstName"), "Bob");
}

#[test]
fn response_arriving_after_clear_is_ignored() {
	let source = Arc::new(
		ScriptedSource::default()
			.respond(Category::Cars, "hon", vec![car("Honda", "Civic", "H1")])
			.slow("hon", Duration::from_millis(100)),
	);
	let mut session = session(&source, Category::Cars);

	let start = Instant::now();
	session.set_query("hon", start);
	session.tick(start + DELAY);
	session.set_query("", start + DELAY);

	thread::sleep(Duration::from_millis(250));
	session.tick(start + DELAY * 2);
	assert!(session.results().is_empty());
	assert_eq!(session.status(), SearchStatus::Idle);
}

#[test]
fn select_invokes_handler_once_and_resets() {
	let source = Arc::new(ScriptedSource::default().respond(
		Category::Users,
		"jo",
		vec![user("John", "Doe"), user("Joanna", "Smith")],
	));
	let picked = Arc::new(Mutex::new(Vec::new()));
	let sink = Arc::clone(&picked);
	let mut session = SearchSession::new(source.clone(), Category::Users, DELAY).on_select(
		move |candidate, category| {
			sink.lock()
				.unwrap()
				.push((candidate.field("firstName"), category));
		},
	);

	let start = Instant::now();
	session.set_query("jo", start);
	session.tick(start + DELAY);
	assert!(session.wait_idle(WAIT));

	let selection = session.select(1).unwrap();
	assert_eq!(selection.category, Category::Users);
	assert_eq!(selection.candidate.field("firstName"), "Joanna");
	assert_eq!(
		*picked.lock().unwrap(),
		vec![("Joanna".to_string(), Category::Users)]
	);

	assert_eq!(session.query(), "");
	assert!(session.results().is_empty());
	assert_eq!(session.status(), SearchStatus::Idle);
	assert!(session.select(0).is_none());
	assert_eq!(picked.lock().unwrap().len(), 1);
}

#[test]
fn loading_flag_tracks_in_flight_fetch() {
	let source = Arc::new(
		ScriptedSource::default()
			.respond(Category::Cars, "vw", vec![car("VW", "Golf", "V1")])
			.slow("vw", Duration::from_millis(100)),
	);
	let mut session = session(&source, Category::Cars);

	let start = Instant::now();
	assert!(!session.is_loading());
	session.set_query("vw", start);
	assert!(!session.is_loading(), "debouncing is not loading");

	session.tick(start + DELAY);
	assert!(session.is_loading());
	assert_eq!(session.status(), SearchStatus::Pending);

	assert!(session.wait_idle(WAIT));
	assert!(!session.is_loading());
}

#[test]
fn initial_query_is_fetched_on_first_tick() {
	let source = Arc::new(ScriptedSource::default().respond(
		Category::WorkOrders,
		"brake",
		vec![Candidate::from_pairs([
			("workOrderId", "1042"),
			("serviceType", "Brake Repair"),
		])],
	));
	let mut session = SearchSession::new(source.clone(), Category::WorkOrders, DELAY)
		.with_initial_query("brake");

	session.tick(Instant::now());
	assert!(session.wait_idle(WAIT));
	assert_eq!(session.results()[0].score, 5);
}

#[test]
fn refresh_reissues_current_query() {
	let source = Arc::new(ScriptedSource::default().fail(Category::Cars, "civ", "timeout"));
	let mut session = session(&source, Category::Cars);

	let start = Instant::now();
	session.set_query("civ", start);
	session.flush();
	assert!(session.wait_idle(WAIT));
	assert_eq!(session.status(), SearchStatus::Errored);

	session.refresh();
	assert!(session.wait_idle(WAIT));
	assert_eq!(source.calls().len(), 2);
}

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::{debug, trace};

use super::commands::{SearchCommand, SearchResponse};
use crate::scoring::rank;
use crate::source::CandidateSource;

/// Launch the background fetch worker and return its channels.
///
/// The returned counter holds the id of the newest query the session cares
/// about; the worker skips queued queries that are already superseded.
pub(crate) fn spawn(
	source: Arc<dyn CandidateSource>,
) -> (
	Sender<SearchCommand>,
	Receiver<SearchResponse>,
	Arc<AtomicU64>,
) {
	let (command_tx, command_rx) = mpsc::channel();
	let (response_tx, response_rx) = mpsc::channel();
	let latest_query_id = Arc::new(AtomicU64::new(0));
	let thread_latest = Arc::clone(&latest_query_id);

	thread::spawn(move || worker_loop(source.as_ref(), command_rx, response_tx, thread_latest));

	(command_tx, response_rx, latest_query_id)
}

fn worker_loop(
	source: &dyn CandidateSource,
	command_rx: Receiver<SearchCommand>,
	response_tx: Sender<SearchResponse>,
	latest_query_id: Arc<AtomicU64>,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(source, &response_tx, &latest_query_id, command) {
			break;
		}
	}
	debug!("search worker stopped");
}

fn handle_command(
	source: &dyn CandidateSource,
	response_tx: &Sender<SearchResponse>,
	latest_query_id: &AtomicU64,
	command: SearchCommand,
) -> bool {
	match command {
		SearchCommand::Query {
			id,
			category,
			query,
		} => {
			if latest_query_id.load(Ordering::Acquire) != id {
				trace!(id, %category, "skipping superseded query");
				return true;
			}

			let outcome = source
				.fetch(category, &query)
				.map(|candidates| rank(candidates, &query, category));
			response_tx
				.send(SearchResponse {
					id,
					category,
					query,
					outcome,
				})
				.is_ok()
		}
		SearchCommand::Shutdown => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::candidate::Candidate;
	use crate::category::Category;
	use crate::error::FetchError;

	struct Fixed;

	impl CandidateSource for Fixed {
		fn fetch(&self, _category: Category, _query: &str) -> Result<Vec<Candidate>, FetchError> {
			Ok(vec![
				Candidate::from_pairs([("make", "Ford")]),
				Candidate::from_pairs([("make", "Honda")]),
			])
		}
	}

	#[test]
	fn worker_ranks_fetched_candidates() {
		let (tx, rx, latest) = spawn(Arc::new(Fixed));
		latest.store(1, Ordering::Release);
		tx.send(SearchCommand::Query {
			id: 1,
			category: Category::Cars,
			query: "hon".into(),
		})
		.unwrap();

		let response = rx.recv().unwrap();
		assert_eq!(response.id, 1);
		let ranked = response.outcome.unwrap();
		assert_eq!(ranked.len(), 1);
		assert_eq!(ranked[0].candidate.field("make"), "Honda");
		tx.send(SearchCommand::Shutdown).unwrap();
	}

	#[test]
	fn superseded_queries_are_not_fetched() {
		let (tx, rx, latest) = spawn(Arc::new(Fixed));
		latest.store(2, Ordering::Release);
		for id in [1, 2] {
			tx.send(SearchCommand::Query {
				id,
				category: Category::Cars,
				query: "ford".into(),
			})
			.unwrap();
		}

		assert_eq!(rx.recv().unwrap().id, 2);
		tx.send(SearchCommand::Shutdown).unwrap();
		assert!(rx.recv().is_err(), "worker should exit after shutdown");
	}
}

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::Duration;

use super::commands::{SearchCommand, SearchResponse};
use super::worker;
use crate::category::Category;
use crate::source::CandidateSource;

/// Session-side handle on the fetch worker.
///
/// Every query gets the next sequence number. Only the response carrying the
/// current number may be applied; anything older is stale.
pub(crate) struct SearchRuntime {
	tx: Sender<SearchCommand>,
	rx: Receiver<SearchResponse>,
	latest_query_id: Arc<AtomicU64>,
	next_query_id: u64,
	current_query_id: Option<u64>,
	in_flight: bool,
}

impl SearchRuntime {
	pub(crate) fn spawn(source: Arc<dyn CandidateSource>) -> Self {
		let (tx, rx, latest_query_id) = worker::spawn(source);
		Self {
			tx,
			rx,
			latest_query_id,
			next_query_id: 0,
			current_query_id: None,
			in_flight: false,
		}
	}

	pub(crate) fn shutdown(&mut self) {
		self.invalidate();
		let _ = self.tx.send(SearchCommand::Shutdown);
	}

	/// Send a query to the worker and make it the only one whose response counts.
	pub(crate) fn issue(&mut self, query: String, category: Category) -> u64 {
		let id = self.bump();
		self.current_query_id = Some(id);
		self.in_flight = true;
		if self
			.tx
			.send(SearchCommand::Query {
				id,
				category,
				query,
			})
			.is_err()
		{
			self.in_flight = false;
		}
		id
	}

	/// Forget the current query so that any response still on its way is ignored.
	pub(crate) fn invalidate(&mut self) {
		self.bump();
		self.current_query_id = None;
		self.in_flight = false;
	}

	pub(crate) fn matches_latest(&self, id: u64) -> bool {
		Some(id) == self.current_query_id
	}

	pub(crate) fn record_completion(&mut self) {
		self.in_flight = false;
	}

	pub(crate) fn is_in_flight(&self) -> bool {
		self.in_flight
	}

	pub(crate) fn try_recv(&self) -> Result<SearchResponse, TryRecvError> {
		self.rx.try_recv()
	}

	pub(crate) fn recv_timeout(&self, timeout: Duration) -> Result<SearchResponse, RecvTimeoutError> {
		self.rx.recv_timeout(timeout)
	}

	fn bump(&mut self) -> u64 {
		self.next_query_id = self.next_query_id.saturating_add(1);
		self.latest_query_id
			.store(self.next_query_id, Ordering::Release);
		self.next_query_id
	}
}

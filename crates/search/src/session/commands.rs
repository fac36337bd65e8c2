use crate::category::Category;
use crate::error::FetchError;
use crate::scoring::ScoredCandidate;

/// Commands understood by the background fetch worker.
#[derive(Debug)]
pub(crate) enum SearchCommand {
	/// Fetch and rank candidates for a query.
	Query {
		/// Sequence number used to recognise stale responses.
		id: u64,
		category: Category,
		query: String,
	},
	/// Stop the worker thread.
	Shutdown,
}

/// A ranked result set (or the reason there is none) sent back to the session.
#[derive(Debug)]
pub(crate) struct SearchResponse {
	/// Identifier of the [`SearchCommand::Query`] that produced the response.
	pub(crate) id: u64,
	pub(crate) category: Category,
	pub(crate) query: String,
	pub(crate) outcome: Result<Vec<ScoredCandidate>, FetchError>,
}

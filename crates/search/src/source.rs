//! Where candidates come from.

use std::sync::Arc;
use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use serde_json::Value;
use tracing::debug;

use crate::auth::CredentialProvider;
use crate::candidate::Candidate;
use crate::category::Category;
use crate::error::FetchError;

/// Fetches the raw candidate list for a query.
///
/// Implementations may filter on the server, but callers always re-score the
/// result, so the filter is only a hint.
pub trait CandidateSource: Send + Sync {
	fn fetch(&self, category: Category, query: &str) -> Result<Vec<Candidate>, FetchError>;
}

impl<T: CandidateSource + ?Sized> CandidateSource for Arc<T> {
	fn fetch(&self, category: Category, query: &str) -> Result<Vec<Candidate>, FetchError> {
		(**self).fetch(category, query)
	}
}

/// Reads candidates from the REST backend: `GET /api/{collection}?search=...`.
pub struct HttpCandidateSource {
	base_url: String,
	client: Client,
	credentials: Arc<dyn CredentialProvider>,
}

impl HttpCandidateSource {
	pub fn new(
		base_url: impl Into<String>,
		credentials: Arc<dyn CredentialProvider>,
		timeout: Option<Duration>,
	) -> Result<Self, FetchError> {
		let base_url = base_url.into();
		let client = Client::builder()
			.timeout(timeout)
			.build()
			.map_err(|source| FetchError::Transport {
				url: base_url.clone(),
				source,
			})?;
		Ok(Self {
			base_url,
			client,
			credentials,
		})
	}

	/// Collection URL for a category, without the query string.
	#[must_use]
	pub fn collection_url(&self, category: Category) -> String {
		format!(
			"{}/api/{}",
			self.base_url.trim_end_matches('/'),
			category.api_path()
		)
	}

	fn request(&self, category: Category, query: &str) -> Result<RequestBuilder, FetchError> {
		let token = self
			.credentials
			.bearer_token()
			.ok_or(FetchError::MissingCredential)?;
		Ok(self
			.client
			.get(self.collection_url(category))
			.query(&[("search", query)])
			.bearer_auth(token))
	}
}

impl CandidateSource for HttpCandidateSource {
	fn fetch(&self, category: Category, query: &str) -> Result<Vec<Candidate>, FetchError> {
		let url = self.collection_url(category);
		let transport = |source| FetchError::Transport {
			url: url.clone(),
			source,
		};

		let response = self.request(category, query)?.send().map_err(transport)?;
		let status = response.status();
		if !status.is_success() {
			return Err(FetchError::Status {
				category,
				status: status.as_u16(),
			});
		}

		let body: Value = response.json().map_err(|err| FetchError::Decode {
			category,
			reason: err.to_string(),
		})?;
		decode_candidates(category, body)
	}
}

/// Turn a response body into candidates. Non-object elements are skipped.
pub(crate) fn decode_candidates(category: Category, body: Value) -> Result<Vec<Candidate>, FetchError> {
	let Value::Array(items) = body else {
		return Err(FetchError::Decode {
			category,
			reason: "expected a JSON array".to_string(),
		});
	};

	let total = items.len();
	let candidates: Vec<Candidate> = items.into_iter().filter_map(Candidate::from_value).collect();
	if candidates.len() < total {
		debug!(
			%category,
			skipped = total - candidates.len(),
			"ignoring non-object entries in response"
		);
	}
	Ok(candidates)
}

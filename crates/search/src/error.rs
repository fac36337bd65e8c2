use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::category::Category;

/// Reasons a search fetch can fail. None of them are fatal to a session.
#[derive(Debug, Error)]
pub enum FetchError {
	/// No bearer token was available for the request.
	#[error("not logged in")]
	MissingCredential,

	/// The request never produced a response.
	#[error("request to {url} failed: {source}")]
	Transport {
		url: String,
		#[source]
		source: reqwest::Error,
	},

	/// The backend answered with a non-success status.
	#[error("{category} search returned HTTP {status}")]
	Status { category: Category, status: u16 },

	/// The response body was not a JSON array of records.
	#[error("malformed {category} response: {reason}")]
	Decode { category: Category, reason: String },

	/// A source-specific failure, used by non-HTTP sources.
	#[error("{0}")]
	Other(String),
}

/// Errors surfaced by [`AuthClient::login`](crate::AuthClient::login).
#[derive(Debug, Error)]
pub enum LoginError {
	#[error("username and password are required")]
	MissingCredentials,

	/// The backend refused the credentials; carries its message.
	#[error("{0}")]
	Rejected(String),

	#[error("login request failed: {0}")]
	Transport(#[from] reqwest::Error),

	#[error("login response did not contain a token")]
	MissingToken,
}

/// Errors reading or writing the persisted session token.
#[derive(Debug, Error)]
pub enum TokenStoreError {
	#[error("failed to read token from {path}: {source}")]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("failed to write token to {path}: {source}")]
	Write {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

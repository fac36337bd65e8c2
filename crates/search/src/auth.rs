//! Session credentials and the login exchange.
//!
//! Components that talk to the backend never look a token up on their own;
//! they are handed a [`CredentialProvider`] instead.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{LoginError, TokenStoreError};

/// Supplies the bearer token attached to backend requests.
pub trait CredentialProvider: Send + Sync {
	/// The current token, or `None` when the user is not logged in.
	fn bearer_token(&self) -> Option<String>;
}

impl<T: CredentialProvider + ?Sized> CredentialProvider for Arc<T> {
	fn bearer_token(&self) -> Option<String> {
		(**self).bearer_token()
	}
}

/// A token fixed at construction, e.g. taken from configuration.
#[derive(Debug, Clone)]
pub struct StaticToken(String);

impl StaticToken {
	pub fn new(token: impl Into<String>) -> Self {
		Self(token.into())
	}
}

impl CredentialProvider for StaticToken {
	fn bearer_token(&self) -> Option<String> {
		let token = self.0.trim();
		(!token.is_empty()).then(|| token.to_string())
	}
}

/// A token persisted in a single file between runs.
#[derive(Debug, Clone)]
pub struct TokenStore {
	path: PathBuf,
}

impl TokenStore {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Read the stored token. A missing or blank file means "logged out".
	pub fn load(&self) -> Result<Option<String>, TokenStoreError> {
		match fs::read_to_string(&self.path) {
			Ok(contents) => {
				let token = contents.trim();
				Ok((!token.is_empty()).then(|| token.to_string()))
			}
			Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
			Err(source) => Err(TokenStoreError::Read {
				path: self.path.clone(),
				source,
			}),
		}
	}

	/// Persist a token, creating parent directories as needed.
	pub fn save(&self, token: &str) -> Result<(), TokenStoreError> {
		let write_error = |source| TokenStoreError::Write {
			path: self.path.clone(),
			source,
		};
		if let Some(parent) = self.path.parent()
			&& !parent.as_os_str().is_empty()
		{
			fs::create_dir_all(parent).map_err(write_error)?;
		}
		fs::write(&self.path, token.trim()).map_err(write_error)
	}

	/// Forget the stored token. Clearing an absent token is not an error.
	pub fn clear(&self) -> Result<(), TokenStoreError> {
		match fs::remove_file(&self.path) {
			Ok(()) => Ok(()),
			Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
			Err(source) => Err(TokenStoreError::Write {
				path: self.path.clone(),
				source,
			}),
		}
	}
}

impl CredentialProvider for TokenStore {
	fn bearer_token(&self) -> Option<String> {
		match self.load() {
			Ok(token) => token,
			Err(err) => {
				debug!(error = %err, "token store unreadable");
				None
			}
		}
	}
}

#[derive(Serialize)]
struct LoginRequest<'a> {
	username: &'a str,
	password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
	token: Option<String>,
}

#[derive(Deserialize)]
struct LoginFailure {
	message: Option<String>,
}

/// Exchanges a username and password for a session token.
#[derive(Debug, Clone)]
pub struct AuthClient {
	base_url: String,
	client: Client,
}

impl AuthClient {
	pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, LoginError> {
		let client = Client::builder().timeout(timeout).build()?;
		Ok(Self {
			base_url: base_url.into(),
			client,
		})
	}

	fn login_url(&self) -> String {
		format!("{}/api/login", self.base_url.trim_end_matches('/'))
	}

	/// `POST /api/login` and return the issued token.
	pub fn login(&self, username: &str, password: &str) -> Result<String, LoginError> {
		if username.trim().is_empty() || password.is_empty() {
			return Err(LoginError::MissingCredentials);
		}

		let url = self.login_url();
		debug!(%url, username, "logging in");
		let response = self
			.client
			.post(&url)
			.json(&LoginRequest { username, password })
			.send()?;

		if !response.status().is_success() {
			let status = response.status();
			let message = response
				.json::<LoginFailure>()
				.ok()
				.and_then(|failure| failure.message)
				.filter(|message| !message.trim().is_empty())
				.unwrap_or_else(|| "Login failed".to_string());
			info!(status = status.as_u16(), "login rejected");
			return Err(LoginError::Rejected(message));
		}

		let body: LoginResponse = response.json()?;
		body.token
			.filter(|token| !token.trim().is_empty())
			.ok_or(LoginError::MissingToken)
	}
}

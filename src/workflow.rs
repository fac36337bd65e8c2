use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow, bail};
use lineops_search::{
	AuthClient, CandidateSource, CredentialProvider, HttpCandidateSource, ScoredCandidate,
	SearchSession, StaticToken, TokenStore,
};
use lineops_tui::{App, SearchOutcome, UiLabels};
use tracing::{debug, info};

use crate::app_dirs;
use crate::settings::ResolvedConfig;

/// How long a one-shot query waits when no request timeout is configured.
const DEFAULT_QUERY_WAIT: Duration = Duration::from_secs(60);

/// Coordinates building and running searches from the resolved configuration.
pub(crate) struct SearchWorkflow {
	config: ResolvedConfig,
	source: Arc<dyn CandidateSource>,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let url = backend_url(&config)?;
		let credentials = credentials(&config)?;
		let source = HttpCandidateSource::new(url, credentials, config.timeout)
			.context("failed to build the backend client")?;
		Ok(Self {
			config,
			source: Arc::new(source),
		})
	}

	fn session(&self) -> SearchSession {
		SearchSession::new(
			Arc::clone(&self.source),
			self.config.category,
			self.config.debounce,
		)
	}

	/// Open the interactive search screen.
	pub(crate) fn run(self) -> Result<SearchOutcome> {
		let session = self
			.session()
			.with_initial_query(self.config.initial_query.clone())
			.on_select(|candidate, category| {
				info!(category = %category, id = %candidate.id(), "result selected");
			});

		let mut ui = UiLabels::default();
		if let Some(title) = &self.config.title {
			ui = ui.with_prompt_title(title);
		}

		let mut app = App::new(session).with_ui(ui);
		app.set_theme(self.config.theme);
		app.run()
	}

	/// Run `text` once and return the ranked results.
	pub(crate) fn query(self, text: &str, limit: Option<usize>) -> Result<Vec<ScoredCandidate>> {
		let mut session = self.session().with_initial_query(text);
		session.tick(Instant::now());

		let wait = self
			.config
			.timeout
			.map_or(DEFAULT_QUERY_WAIT, |timeout| timeout + Duration::from_secs(1));
		if !session.wait_idle(wait) {
			bail!("backend did not answer within {}s", wait.as_secs());
		}
		if let Some(error) = session.error() {
			bail!("{error}");
		}

		let mut results = session.results().to_vec();
		if let Some(limit) = limit {
			results.truncate(limit);
		}
		debug!(query = text, count = results.len(), "query finished");
		Ok(results)
	}
}

fn backend_url(config: &ResolvedConfig) -> Result<String> {
	config
		.backend_url
		.clone()
		.ok_or_else(|| anyhow!("no backend configured; pass --backend-url or set backend.url"))
}

/// A configured token wins over the one stored by `lineops login`.
fn credentials(config: &ResolvedConfig) -> Result<Arc<dyn CredentialProvider>> {
	if let Some(token) = &config.token {
		debug!("using configured token");
		return Ok(Arc::new(StaticToken::new(token.clone())));
	}
	Ok(Arc::new(token_store()?))
}

fn token_store() -> Result<TokenStore> {
	let path = app_dirs::token_path().context("failed to locate the token file")?;
	Ok(TokenStore::new(path))
}

/// Log in and persist the issued token.
pub(crate) fn login(config: &ResolvedConfig, username: &str, password: Option<String>) -> Result<()> {
	let password = match password {
		Some(password) => password,
		None => read_password(&mut io::stdin().lock(), &mut io::stderr())?,
	};

	let client = AuthClient::new(backend_url(config)?, config.timeout)
		.context("failed to build the backend client")?;
	let token = client.login(username, &password)?;

	let store = token_store()?;
	store.save(&token)?;
	info!(username, path = %store.path().display(), "stored session token");
	println!("Logged in as {username}");
	Ok(())
}

/// Forget the stored token.
pub(crate) fn logout() -> Result<()> {
	let store = token_store()?;
	store.clear()?;
	info!(path = %store.path().display(), "cleared session token");
	println!("Logged out");
	Ok(())
}

fn read_password(input: &mut impl BufRead, prompt: &mut impl Write) -> Result<String> {
	write!(prompt, "Password (input is visible): ")?;
	prompt.flush()?;

	let mut line = String::new();
	input
		.read_line(&mut line)
		.context("failed to read password from stdin")?;
	Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

//! Resolve configuration, cache, and data directories for `lineops`.
//!
//! Environment overrides win; otherwise the platform locations from the
//! `directories` crate are used.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "lineops";
const APPLICATION: &str = "lineops";

const CONFIG_DIR_ENV: &str = "LINEOPS_CONFIG_DIR";
const DATA_DIR_ENV: &str = "LINEOPS_DATA_DIR";
const CACHE_DIR_ENV: &str = "LINEOPS_CACHE_DIR";

const TOKEN_FILE: &str = "token";
const LOG_FILE: &str = "lineops.log";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for lineops"))
}

/// Resolve an override directory from an environment variable.
///
/// An empty string is treated the same as an unset value.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Directory holding `config.toml`.
pub(crate) fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Directory holding the session token and the default log file.
pub(crate) fn get_data_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.data_local_dir().to_path_buf())
}

pub(crate) fn get_cache_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CACHE_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.cache_dir().to_path_buf())
}

/// Where `lineops login` persists the bearer token.
pub(crate) fn token_path() -> Result<PathBuf> {
	Ok(get_data_dir()?.join(TOKEN_FILE))
}

/// Log file used while the interactive screen owns the terminal.
pub(crate) fn default_log_file() -> Result<PathBuf> {
	Ok(get_data_dir()?.join(LOG_FILE))
}

//! Subscriber setup for the `tracing` events emitted by the library crates.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

const DEFAULT_LEVEL: &str = "info";

/// Where formatted log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LogTarget {
	/// Non-interactive commands log next to their output.
	Stderr,
	/// The interactive screen owns the terminal, so logs go to a file.
	File(PathBuf),
}

/// Build the event filter. An explicit level wins over `RUST_LOG`.
pub(crate) fn filter(level: Option<&str>) -> Result<EnvFilter> {
	match level {
		Some(level) => EnvFilter::try_new(level)
			.with_context(|| format!("invalid log level directive '{level}'")),
		None => Ok(EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))),
	}
}

/// Install the global subscriber.
pub(crate) fn initialize(level: Option<&str>, target: &LogTarget) -> Result<()> {
	let filter = filter(level)?;
	let builder = tracing_subscriber::fmt().with_env_filter(filter);

	let installed = match target {
		LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
		LogTarget::File(path) => {
			let file = open_log_file(path)?;
			builder
				.with_ansi(false)
				.with_writer(Mutex::new(file))
				.try_init()
		}
	};

	installed.map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}

fn open_log_file(path: &Path) -> Result<File> {
	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))
}

#[cfg(test)]
mod tests {
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn explicit_level_is_parsed() {
		let filter = filter(Some("lineops_search=debug,warn")).unwrap();
		assert!(filter.to_string().contains("lineops_search=debug"));
	}

	#[test]
	fn garbage_level_is_rejected() {
		assert!(filter(Some("lineops=loud")).is_err());
	}

	#[test]
	fn log_file_parent_is_created() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("nested/logs/lineops.log");
		open_log_file(&path).unwrap();
		assert!(path.exists());
	}
}

use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::command::Command;
use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `lineops` binary.
#[derive(Parser, Debug)]
#[command(
	name = "lineops",
	version,
	long_version = long_version(),
	about = "Search LineOps work orders, cars and users from the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[command(subcommand)]
	pub(crate) command: Option<Command>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "LINEOPS_CONFIG",
		action = ArgAction::Append,
		global = true,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		global = true,
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'b',
		long = "backend-url",
		value_name = "URL",
		global = true,
		help = "Base URL of the LineOps backend (default: backend.url)"
	)]
	pub(crate) backend_url: Option<String>,
	#[arg(
		long,
		value_name = "TOKEN",
		global = true,
		help = "Bearer token to use instead of the stored login (default: stored token)"
	)]
	pub(crate) token: Option<String>,
	#[arg(
		long = "timeout-secs",
		value_name = "SECS",
		global = true,
		help = "Give up on a backend request after SECS seconds (default: no timeout)"
	)]
	pub(crate) timeout_secs: Option<u64>,
	#[arg(
		short = 'd',
		long = "debounce-ms",
		value_name = "MS",
		allow_negative_numbers = true,
		global = true,
		help = "Delay before a typed query is sent (default: 300)"
	)]
	pub(crate) debounce_ms: Option<i64>,
	#[arg(
		short = 'k',
		long,
		value_name = "CATEGORY",
		global = true,
		help = "Category to search: workorders, cars or users (default: workorders)"
	)]
	pub(crate) category: Option<String>,
	#[arg(
		short = 'q',
		long = "initial-query",
		value_name = "QUERY",
		global = true,
		help = "Start the search screen with a query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		global = true,
		help = "Set the input prompt title (default: Search)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		global = true,
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		global = true,
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		long = "log-level",
		value_name = "FILTER",
		global = true,
		help = "Log filter directive, e.g. debug or lineops_search=trace (default: RUST_LOG or info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		global = true,
		help = "Where the search screen writes its log (default: <data dir>/lineops.log)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		global = true,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}

impl CliArgs {
	/// The subcommand to run; a bare `lineops` opens the search screen.
	pub(crate) fn selected_command(&self) -> Command {
		self.command.clone().unwrap_or(Command::Search)
	}
}

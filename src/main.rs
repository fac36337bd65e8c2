mod app_dirs;
mod cli;
mod logging;
mod settings;
mod workflow;

use anyhow::{Context, Result};
use cli::{
	Command, OutputFormat, format_ranked_json, format_ranked_plain, parse_cli, print_json,
	print_plain,
};
use logging::LogTarget;
use settings::ResolvedConfig;
use tracing::warn;
use workflow::SearchWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in lineops_tui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;
	let command = cli.selected_command();
	init_logging(&command, &resolved)?;
	for warning in &resolved.warnings {
		warn!("{warning}");
	}

	if cli.print_config {
		resolved.print_summary();
	}

	match command {
		Command::Search => run_search(cli.output, resolved),
		Command::Query { text, limit } => run_query(cli.output, resolved, &text, limit),
		Command::Login { username, password } => workflow::login(&resolved, &username, password),
		Command::Logout => workflow::logout(),
	}
}

/// The search screen owns the terminal, so it logs to a file.
fn init_logging(command: &Command, config: &ResolvedConfig) -> Result<()> {
	let target = if command.is_interactive() {
		let path = match &config.log_file {
			Some(path) => path.clone(),
			None => app_dirs::default_log_file().context("failed to locate the log file")?,
		};
		LogTarget::File(path)
	} else {
		LogTarget::Stderr
	};
	logging::initialize(config.log_level.as_deref(), &target)
}

/// Execute the interactive search and print output in the chosen format.
fn run_search(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = SearchWorkflow::from_config(settings)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}

fn run_query(
	format: OutputFormat,
	settings: ResolvedConfig,
	text: &str,
	limit: Option<usize>,
) -> Result<()> {
	let category = settings.category;
	let results = SearchWorkflow::from_config(settings)?.query(text, limit)?;

	match format {
		OutputFormat::Plain => println!("{}", format_ranked_plain(&results, category)),
		OutputFormat::Json => println!("{}", format_ranked_json(&results, text, category)?),
	}

	Ok(())
}

use clap::{CommandFactory, Parser};

use super::{CliArgs, Command, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn bare_invocation_opens_the_search_screen() {
	let cli = CliArgs::parse_from(["lineops"]);
	assert_eq!(cli.selected_command(), Command::Search);
	assert_eq!(cli.output, OutputFormat::Plain);
}

#[test]
fn global_flags_follow_subcommands() {
	let cli = CliArgs::parse_from([
		"lineops",
		"query",
		"civic",
		"--category",
		"cars",
		"--output",
		"json",
	]);
	assert_eq!(
		cli.selected_command(),
		Command::Query {
			text: "civic".into(),
			limit: None,
		}
	);
	assert_eq!(cli.category.as_deref(), Some("cars"));
	assert_eq!(cli.output, OutputFormat::Json);
}

#[test]
fn negative_debounce_parses() {
	let cli = CliArgs::parse_from(["lineops", "--debounce-ms", "-20"]);
	assert_eq!(cli.debounce_ms, Some(-20));
}

#[test]
fn login_takes_username_and_password() {
	let cli = CliArgs::parse_from(["lineops", "login", "-u", "ann", "--password", "hunter2"]);
	assert_eq!(
		cli.selected_command(),
		Command::Login {
			username: "ann".into(),
			password: Some("hunter2".into()),
		}
	);
	assert!(!cli.selected_command().is_interactive());
}

#[test]
fn password_help_warns_that_the_prompt_echoes() {
	let mut command = CliArgs::command();
	let login = command.find_subcommand_mut("login").unwrap();
	let password = login
		.get_arguments()
		.find(|arg| arg.get_id() == "password")
		.unwrap();
	let help = password.get_help().unwrap().to_string();
	assert!(help.contains("echoes"), "{help}");
}

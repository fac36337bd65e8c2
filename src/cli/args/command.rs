use clap::Subcommand;

/// Subcommands of the `lineops` binary.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
	/// Open the interactive search screen.
	Search,
	/// Run one search and print the ranked results.
	Query {
		/// Text to search for.
		#[arg(value_name = "TEXT")]
		text: String,
		#[arg(
			short = 'm',
			long,
			value_name = "NUM",
			help = "Print at most NUM results (default: all ranked results)"
		)]
		limit: Option<usize>,
	},
	/// Exchange a username and password for a stored session token.
	Login {
		#[arg(short, long, value_name = "NAME")]
		username: String,
		#[arg(
			short = 'P',
			long,
			value_name = "PASSWORD",
			env = "LINEOPS_PASSWORD",
			hide_env_values = true,
			help = "Password (default: read one line from stdin; the prompt echoes what is typed)"
		)]
		password: Option<String>,
	},
	/// Forget the stored session token.
	Logout,
}

impl Command {
	/// Whether the command takes over the terminal.
	pub(crate) fn is_interactive(&self) -> bool {
		matches!(self, Self::Search)
	}
}

mod args;
mod output;

pub(crate) use args::{CliArgs, Command, OutputFormat, parse_cli};
pub(crate) use output::{format_ranked_json, format_ranked_plain, print_json, print_plain};

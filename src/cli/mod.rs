//! CLI argument parsing for Birthday TUI.

mod args;

pub use args::{parse_args, parse_args_from, print_usage, CliConfig, Command, ParsedArgs, VERSION};

//! CLI argument parsing and configuration.

use std::io;
use std::path::PathBuf;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// What the binary should do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Run the interactive journey in the terminal
    #[default]
    Play,
    /// Run the HTTP ingress for dream submissions
    Serve,
}

/// Configuration from CLI arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub command: Command,
    pub state_dir: Option<PathBuf>,
    pub port: Option<u16>,
    /// Forget stored progress before starting
    pub fresh: bool,
}

/// Outcome of parsing
#[derive(Debug, PartialEq, Eq)]
pub enum ParsedArgs {
    Run(CliConfig),
    Help,
    Version,
}

/// Print usage information
pub fn print_usage() {
    eprintln!("Birthday TUI - An interactive birthday journey in your terminal");
    eprintln!();
    eprintln!("Usage: birthday-tui [serve] [OPTIONS]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  serve                  Run the dream submission endpoint instead of the journey");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --state-dir <DIR>      Where progress and logs are kept");
    eprintln!("  --port <N>             Port for `serve` (default: $PORT or 3000)");
    eprintln!("  --fresh                Start over from the welcome stage");
    eprintln!("  -h, --help             Show this help message");
    eprintln!("  -V, --version          Show version");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  DISCORD_WEBHOOK_URL    Where collected dreams are sent");
    eprintln!("  BIRTHDAY_NAME          Name of the birthday person (default: Alina)");
    eprintln!("  BIRTHDAY_STATE_DIR     Same as --state-dir");
}

fn missing_value(flag: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("Missing value for {}", flag),
    )
}

/// Parse arguments, not including the program name
pub fn parse_args_from(args: &[String]) -> io::Result<ParsedArgs> {
    let mut config = CliConfig::default();

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => return Ok(ParsedArgs::Help),
            "-V" | "--version" => return Ok(ParsedArgs::Version),
            "--fresh" => {
                config.fresh = true;
                i += 1;
            }
            "--state-dir" => {
                i += 1;
                let value = args.get(i).ok_or_else(|| missing_value("--state-dir"))?;
                config.state_dir = Some(PathBuf::from(value));
                i += 1;
            }
            "--port" => {
                i += 1;
                let value = args.get(i).ok_or_else(|| missing_value("--port"))?;
                config.port = Some(value.parse().map_err(|_| {
                    io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("Invalid port value: {}", value),
                    )
                })?);
                i += 1;
            }
            "serve" => {
                config.command = Command::Serve;
                i += 1;
            }
            _ => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Unknown argument: {}", arg),
                ));
            }
        }
    }

    Ok(ParsedArgs::Run(config))
}

/// Parse the process arguments. Prints help/version and exits when asked.
pub fn parse_args() -> io::Result<CliConfig> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match parse_args_from(&args) {
        Ok(ParsedArgs::Run(config)) => Ok(config),
        Ok(ParsedArgs::Help) => {
            print_usage();
            std::process::exit(0);
        }
        Ok(ParsedArgs::Version) => {
            println!("birthday-tui {}", VERSION);
            std::process::exit(0);
        }
        Err(e) => {
            print_usage();
            Err(e)
        }
    }
}

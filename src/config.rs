use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Name used when `BIRTHDAY_NAME` is not set
pub const DEFAULT_NAME: &str = "Alina";

#[derive(Debug, Clone)]
pub struct Config {
    /// Target of the dream notification. Unset disables delivery.
    pub webhook_url: Option<String>,
    /// Celebrant name used in titles and the webhook message
    pub name: String,
    /// Directory for the stage database and the log file
    pub state_dir: PathBuf,
    /// Port for the HTTP ingress
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let webhook_url = non_blank(env::var("DISCORD_WEBHOOK_URL").ok());

        let name = non_blank(env::var("BIRTHDAY_NAME").ok())
            .unwrap_or_else(|| DEFAULT_NAME.to_string());

        let state_dir = env::var("BIRTHDAY_STATE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_state_dir());

        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid number")?;

        Ok(Config {
            webhook_url,
            name,
            state_dir,
            port,
        })
    }

    pub fn database_path(&self) -> PathBuf {
        self.state_dir.join("birthday.db")
    }

    pub fn log_path(&self) -> PathBuf {
        self.state_dir.join("birthday-tui.log")
    }
}

/// `<data dir>/birthday-tui`, or the current directory if the platform has none
pub fn default_state_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("birthday-tui"))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Treat missing, empty and whitespace-only values alike
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

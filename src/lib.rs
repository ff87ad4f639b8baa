//! Birthday TUI: an interactive five-stage birthday journey for the terminal.

pub mod app;
pub mod cli;
pub mod config;
pub mod machine;
pub mod models;
pub mod notify;
pub mod persistence;
pub mod server;
pub mod storage;
pub mod theme;
pub mod transition;
pub mod ui;
pub mod webhook;

#[cfg(test)]
mod test_utils;

//! Salary Split command-line front end.
//!
//! Wires configuration, logging and rendering around `split-calculator`.

pub mod cli;
pub mod config;
pub mod logging;
pub mod report;

pub use cli::{App, Commands, SplitCli};
pub use config::{ConfigError, SplitConfig};

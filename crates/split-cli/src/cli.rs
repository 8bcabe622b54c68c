//! Command-line interface
//!
//! `methods` lists the catalog, `calculate` splits a salary. An invalid
//! salary is not an error: nothing is computed and the process exits cleanly.

use clap::{Args, Parser, Subcommand, ValueEnum};
use split_calculator::{Calculator, Catalog, parse_salary};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::config::SplitConfig;
use crate::report;

#[derive(Parser, Debug)]
#[command(name = "salary-split")]
#[command(about = "Split a salary across the categories of a budgeting method")]
#[command(version)]
pub struct SplitCli {
    /// Configuration file (defaults to $SALARY_SPLIT_CONFIG_PATH or ./salary-split.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the available allocation methods
    Methods(MethodsArgs),
    /// Split a salary with one method
    Calculate(CalculateArgs),
}

#[derive(Args, Debug)]
pub struct MethodsArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct CalculateArgs {
    /// Salary to split, as typed by the user
    #[arg(allow_hyphen_values = true)]
    pub salary: String,

    /// Method id (see `methods`); unknown ids use the first method
    #[arg(long, short)]
    pub method: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Resolved configuration plus the catalog it describes.
pub struct App {
    config: SplitConfig,
    catalog: Catalog,
}

impl App {
    pub fn new(config: SplitConfig) -> anyhow::Result<Self> {
        let catalog = config.catalog()?;
        Ok(Self { config, catalog })
    }

    /// Runs one command, returning the text to print.
    ///
    /// `Ok(None)` means the input was ignored and there is nothing to show.
    pub fn execute(&self, command: &Commands) -> anyhow::Result<Option<String>> {
        match command {
            Commands::Methods(args) => {
                let methods = self.catalog.list_methods();
                let output = match args.format {
                    OutputFormat::Text => report::render_methods(methods),
                    OutputFormat::Json => report::to_json(methods)?,
                };
                Ok(Some(output))
            }
            Commands::Calculate(args) => {
                let method_id = args
                    .method
                    .as_deref()
                    .or(self.config.default_method.as_deref())
                    .unwrap_or_else(|| self.catalog.default_method().id.as_str());

                let Some(salary) = parse_salary(&args.salary) else {
                    warn!(input = %args.salary, "salary is not a number, nothing to calculate");
                    return Ok(None);
                };

                let Some(result) = Calculator::new(&self.catalog).calculate_by_id(salary, method_id)
                else {
                    warn!(salary, "salary must be a positive number, nothing to calculate");
                    return Ok(None);
                };

                info!(method = %result.method_id, salary, "calculated salary split");
                let output = match args.format {
                    OutputFormat::Text => report::render_result(&result, &self.config.display),
                    OutputFormat::Json => report::to_json(&result)?,
                };
                Ok(Some(output))
            }
        }
    }
}

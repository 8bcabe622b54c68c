use clap::Parser;
use split_cli::{App, SplitCli, SplitConfig, logging};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = SplitCli::parse();
    logging::init_tracing(cli.json_logs);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting salary split calculator");

    let config = SplitConfig::load(cli.config.as_deref())?.apply_env_overrides();
    let app = App::new(config)?;

    match app.execute(&cli.command)? {
        Some(output) => print!("{output}"),
        None => eprintln!("Aucun calcul effectué : le salaire doit être un nombre positif."),
    }

    Ok(())
}

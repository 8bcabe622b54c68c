use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "salary_split=info,split_calculator=info,split_cli=info,warn";

/// Installs the global subscriber. Output goes to stderr so stdout only carries results.
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

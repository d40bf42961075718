//! indexcfg CLI - copy Algolia index configuration
//!
//! # Examples
//!
//! ```bash
//! # Copy settings only
//! indexcfg copy_config --from=products_dev --to=products_prod --settings
//!
//! # Copy synonyms and rules
//! indexcfg copy_config --from=a --to=b --synonyms --rules
//!
//! # Show configuration
//! indexcfg show-config
//! ```

use clap::Parser;
use indexcfg::cli::{output, run, Cli, LogFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logs go to stderr, stdout carries command output only
fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "indexcfg=warn".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format);

    let format = cli.format;
    if let Err(e) = run(cli).await {
        output::print_failure(&e, format);
        std::process::exit(e.exit_code());
    }
}

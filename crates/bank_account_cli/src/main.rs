mod cli;
mod store;
mod terminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging. The `bank-account` binary compiles as crate
    // `bank_account`, so one directive covers it and the library.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive("bank_account=info".parse().unwrap())
                .from_env_lossy(),
        )
        .with_ansi(cli.color.enabled())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = cli::run(cli).await {
        eprintln!("{err}");
        err.chain()
            .skip(1)
            .for_each(|cause| eprintln!("because: {}", cause));
        std::process::exit(1);
    }
}

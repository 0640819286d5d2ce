use std::io;

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use lifegrid::config::Config;
use lifegrid::driver::Driver;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never end up in the middle of a drawn generation
    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "lifegrid=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env().context("Invalid configuration")?;

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    Driver::new(config, stdin, stdout).run()?;

    Ok(())
}

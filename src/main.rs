mod cli;

use anyhow::Result;
use std::io::{self, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::CommandLine;
use solid_payments::{run_all, run_principle};

fn main() -> Result<()> {
    let commands = CommandLine::parse_args();

    // Diagnostics go to stderr so the demo output on stdout stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = commands.config();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match commands.principle() {
        Some(principle) => run_principle(principle, &config, &mut out)?,
        None => run_all(&config, &mut out)?,
    }

    out.flush()?;
    Ok(())
}

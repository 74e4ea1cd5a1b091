use std::io;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use primes::driver::{print_primes, DriverConfig};
use primes::metrics::SequenceMetrics;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // stdout carries the primes, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("primes=info".parse()?))
        .with_writer(io::stderr)
        .init();

    let config = DriverConfig::from_env()?;
    tracing::info!(width = ?config.width, limit = ?config.limit, "Starting prime sequence");

    let metrics = config
        .report_metrics
        .then(|| Arc::new(SequenceMetrics::new()));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let written = print_primes(&mut out, &config, metrics)?;

    tracing::info!(written, "Prime sequence finished");
    Ok(())
}

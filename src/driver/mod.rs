//! Reference driver: prints a prime sequence one value per line.

use std::io::{self, Write};
use std::str::FromStr;
use std::sync::Arc;

use num_bigint::BigUint;

use crate::contracts::{Candidate, PrimesError};
use crate::generator::PrimeSequence;
use crate::metrics::SequenceMetrics;

/// Integer representation the driver counts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Width {
    U8,
    U16,
    U32,
    #[default]
    U64,
    U128,
    /// Arbitrary precision, never overflows.
    Big,
}

impl FromStr for Width {
    type Err = PrimesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "u8" => Ok(Self::U8),
            "u16" => Ok(Self::U16),
            "u32" => Ok(Self::U32),
            "u64" => Ok(Self::U64),
            "u128" => Ok(Self::U128),
            "big" | "bigint" | "unbounded" => Ok(Self::Big),
            other => Err(PrimesError::InvalidConfig(format!(
                "unknown width '{}', expected one of u8, u16, u32, u64, u128, big",
                other
            ))),
        }
    }
}

/// Configuration for the reference driver.
#[derive(Debug, Clone, Default)]
pub struct DriverConfig {
    /// Number of primes to print. `None` prints until the width is exhausted.
    pub limit: Option<usize>,
    pub width: Width,
    /// Log a Prometheus dump of the sequence metrics when done.
    pub report_metrics: bool,
}

impl DriverConfig {
    /// Creates a DriverConfig from environment variables.
    ///
    /// Environment variables:
    /// - `PRIMES_LIMIT`: Number of primes to print (default: unbounded)
    /// - `PRIMES_WIDTH`: `u8`, `u16`, `u32`, `u64`, `u128` or `big` (default: `u64`)
    /// - `PRIMES_METRICS`: `true` or `1` to report metrics (default: off)
    pub fn from_env() -> Result<Self, PrimesError> {
        let lookup = |key: &str| std::env::var(key).ok();
        Self::from_lookup(lookup)
    }

    /// Builds a config from an arbitrary key lookup. Unparsable limits fall
    /// back to the default; an unknown width is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PrimesError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();
        let width = match lookup("PRIMES_WIDTH") {
            Some(value) => value.parse()?,
            None => default.width,
        };

        Ok(Self {
            limit: lookup("PRIMES_LIMIT")
                .and_then(|v| v.trim().parse().ok())
                .or(default.limit),
            width,
            report_metrics: lookup("PRIMES_METRICS")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(default.report_metrics),
        })
    }
}

/// Writes primes to `out`, one decimal value per line, and returns how many
/// were written.
///
/// A closed pipe on the reader's side ends output without error.
pub fn print_primes<W: Write>(
    out: &mut W,
    config: &DriverConfig,
    metrics: Option<Arc<SequenceMetrics>>,
) -> Result<usize, PrimesError> {
    tracing::debug!(width = ?config.width, limit = ?config.limit, "Printing primes");

    let written = match config.width {
        Width::U8 => emit(out, sequence::<u8>(&metrics), config.limit),
        Width::U16 => emit(out, sequence::<u16>(&metrics), config.limit),
        Width::U32 => emit(out, sequence::<u32>(&metrics), config.limit),
        Width::U64 => emit(out, sequence::<u64>(&metrics), config.limit),
        Width::U128 => emit(out, sequence::<u128>(&metrics), config.limit),
        Width::Big => emit(out, sequence::<BigUint>(&metrics), config.limit),
    }?;

    if let Some(metrics) = metrics.filter(|_| config.report_metrics) {
        tracing::info!(metrics = %metrics.format_prometheus(), "Sequence metrics");
    }

    Ok(written)
}

fn sequence<T: Candidate>(metrics: &Option<Arc<SequenceMetrics>>) -> PrimeSequence<T> {
    match metrics {
        Some(metrics) => PrimeSequence::new().with_metrics(Arc::clone(metrics)),
        None => PrimeSequence::new(),
    }
}

fn emit<W, T>(out: &mut W, seq: PrimeSequence<T>, limit: Option<usize>) -> Result<usize, PrimesError>
where
    W: Write,
    T: Candidate,
{
    let mut written = 0;
    for prime in seq.take(limit.unwrap_or(usize::MAX)) {
        match writeln!(out, "{}", prime) {
            Ok(()) => written += 1,
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                tracing::debug!(written, "Output closed");
                return Ok(written);
            }
            Err(e) => return Err(e.into()),
        }
    }

    match out.flush() {
        Err(e) if e.kind() != io::ErrorKind::BrokenPipe => Err(e.into()),
        _ => Ok(written),
    }
}

//! Counters describing how much work a prime sequence has done.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Histogram;

/// Work counters for one or more prime sequences.
#[derive(Debug, Default)]
pub struct SequenceMetrics {
    /// Primes handed out by `next_prime`
    pub primes_emitted_total: AtomicU64,
    /// Candidates tested, prime or not
    pub candidates_tested_total: AtomicU64,
    /// Remainder checks against known primes
    pub trial_divisions_total: AtomicU64,
    /// Calls that hit the end of a fixed-width representation
    pub overflow_total: AtomicU64,
    /// Trial divisions spent finding each emitted prime
    pub divisions_per_prime: Histogram,
}

impl SequenceMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one emitted prime and the work it took to find it.
    #[inline]
    pub fn record_prime(&self, candidates: u64, divisions: u64) {
        self.primes_emitted_total.fetch_add(1, Ordering::Relaxed);
        self.candidates_tested_total
            .fetch_add(candidates, Ordering::Relaxed);
        self.trial_divisions_total
            .fetch_add(divisions, Ordering::Relaxed);
        self.divisions_per_prime.observe(divisions);
    }

    /// Records a call that ran out of candidates.
    #[inline]
    pub fn record_overflow(&self, candidates: u64, divisions: u64) {
        self.overflow_total.fetch_add(1, Ordering::Relaxed);
        self.candidates_tested_total
            .fetch_add(candidates, Ordering::Relaxed);
        self.trial_divisions_total
            .fetch_add(divisions, Ordering::Relaxed);
    }

    /// Formats all sequence metrics in Prometheus exposition format.
    pub fn format_prometheus(&self) -> String {
        let mut output = String::with_capacity(2048);

        let counters = [
            (
                "primes_emitted_total",
                "Total primes produced",
                &self.primes_emitted_total,
            ),
            (
                "primes_candidates_tested_total",
                "Total candidates tested for primality",
                &self.candidates_tested_total,
            ),
            (
                "primes_trial_divisions_total",
                "Total trial divisions against known primes",
                &self.trial_divisions_total,
            ),
            (
                "primes_overflow_total",
                "Total calls that exhausted a fixed-width candidate range",
                &self.overflow_total,
            ),
        ];

        for (name, help, counter) in counters {
            let _ = writeln!(output, "# HELP {} {}", name, help);
            let _ = writeln!(output, "# TYPE {} counter", name);
            let _ = writeln!(output, "{} {}", name, counter.load(Ordering::Relaxed));
            output.push('\n');
        }

        output.push_str(&self.divisions_per_prime.format_prometheus(
            "primes_divisions_per_prime",
            "Trial divisions spent finding each prime",
        ));

        output
    }
}

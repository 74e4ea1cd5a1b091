//! Lock-free histogram for per-prime work distributions.
//!
//! Buckets are fixed powers of two, so `histogram_quantile()` works on the
//! exported series without any client-side configuration.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

/// Upper bounds of the histogram buckets.
pub const HISTOGRAM_BUCKETS: [u64; 12] = [1, 2, 4, 8, 16, 32, 64, 128, 256, 512, 1_024, 4_096];

/// Histogram with cumulative buckets, safe to share between threads.
///
/// # Example
///
/// ```
/// use primes::metrics::Histogram;
///
/// let histogram = Histogram::new();
/// histogram.observe(5);
///
/// let (sum, count, buckets) = histogram.snapshot();
/// assert_eq!((sum, count), (5, 1));
/// assert_eq!(buckets[2], 0); // le=4
/// assert_eq!(buckets[3], 1); // le=8
/// ```
#[derive(Debug)]
pub struct Histogram {
    sum: AtomicU64,
    count: AtomicU64,
    /// Cumulative: each bucket includes every smaller observation.
    buckets: [AtomicU64; 12],
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}

impl Histogram {
    #[allow(clippy::declare_interior_mutable_const)]
    pub fn new() -> Self {
        const ZERO: AtomicU64 = AtomicU64::new(0);
        Self {
            sum: AtomicU64::new(0),
            count: AtomicU64::new(0),
            buckets: [ZERO; 12],
        }
    }

    #[inline]
    pub fn observe(&self, value: u64) {
        self.sum.fetch_add(value, Ordering::Relaxed);
        self.count.fetch_add(1, Ordering::Relaxed);

        for (bucket, &bound) in self.buckets.iter().zip(HISTOGRAM_BUCKETS.iter()) {
            if value <= bound {
                bucket.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    /// Returns `(sum, count, cumulative_buckets)`.
    pub fn snapshot(&self) -> (u64, u64, [u64; 12]) {
        let mut buckets = [0u64; 12];
        for (out, bucket) in buckets.iter_mut().zip(self.buckets.iter()) {
            *out = bucket.load(Ordering::Relaxed);
        }
        (
            self.sum.load(Ordering::Relaxed),
            self.count.load(Ordering::Relaxed),
            buckets,
        )
    }

    #[inline]
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn sum(&self) -> u64 {
        self.sum.load(Ordering::Relaxed)
    }

    /// Formats the histogram in Prometheus exposition format under `name`.
    pub fn format_prometheus(&self, name: &str, help: &str) -> String {
        let (sum, count, buckets) = self.snapshot();
        let mut output = String::with_capacity(1024);

        let _ = writeln!(output, "# HELP {} {}", name, help);
        let _ = writeln!(output, "# TYPE {} histogram", name);
        for (bound, value) in HISTOGRAM_BUCKETS.iter().zip(buckets.iter()) {
            let _ = writeln!(output, "{}_bucket{{le=\"{}\"}} {}", name, bound, value);
        }
        let _ = writeln!(output, "{}_bucket{{le=\"+Inf\"}} {}", name, count);
        let _ = writeln!(output, "{}_sum {}", name, sum);
        let _ = writeln!(output, "{}_count {}", name, count);

        output
    }
}

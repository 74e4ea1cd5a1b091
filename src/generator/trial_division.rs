use std::iter::FusedIterator;
use std::sync::Arc;

use crate::contracts::{Candidate, PrimeGenerator, SequenceError};
use crate::metrics::SequenceMetrics;

/// Lazy, infinite sequence of primes found by trial division.
///
/// Each candidate is tested only against the primes already produced, so the
/// work per candidate is bounded by the number of primes below it. Nothing is
/// ever recomputed: `known` only grows, and `cursor` only moves forward.
///
/// A sequence cannot be rewound. Build a new one to start again from 2.
///
/// ```
/// use primes::generator::PrimeSequence;
///
/// let first: Vec<u64> = PrimeSequence::new().take(5).collect();
/// assert_eq!(first, vec![2, 3, 5, 7, 11]);
/// ```
#[derive(Debug)]
pub struct PrimeSequence<T: Candidate = u64> {
    known: Vec<T>,
    /// `None` once a fixed-width representation has no candidates left.
    cursor: Option<T>,
    metrics: Option<Arc<SequenceMetrics>>,
}

impl<T: Candidate> PrimeSequence<T> {
    pub fn new() -> Self {
        Self {
            known: Vec::new(),
            cursor: Some(T::first()),
            metrics: None,
        }
    }

    /// Reports work counters into `metrics` on every call.
    pub fn with_metrics(mut self, metrics: Arc<SequenceMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// The primes produced so far, in ascending order.
    pub fn primes(&self) -> &[T] {
        &self.known
    }

    /// Tests `candidate` against every known prime, stopping at the first
    /// divisor. Returns the verdict and the number of divisions performed.
    fn trial_divide(&self, candidate: &T) -> (bool, u64) {
        let mut divisions = 0;
        for prime in &self.known {
            divisions += 1;
            if prime.divides(candidate) {
                return (false, divisions);
            }
        }
        (true, divisions)
    }
}

impl<T: Candidate> Default for PrimeSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Candidate> PrimeGenerator for PrimeSequence<T> {
    type Prime = T;

    fn next_prime(&mut self) -> Result<T, SequenceError> {
        if self.cursor.is_none() {
            return Err(SequenceError::Overflow { width: T::WIDTH });
        }

        let mut candidates = 0u64;
        let mut divisions = 0u64;

        loop {
            let Some(current) = self.cursor.take() else {
                // Ran off the end of the width during this call.
                if let Some(metrics) = &self.metrics {
                    metrics.record_overflow(candidates, divisions);
                }
                tracing::warn!(
                    width = T::WIDTH,
                    produced = self.known.len(),
                    "Prime sequence exhausted"
                );
                return Err(SequenceError::Overflow { width: T::WIDTH });
            };

            let (is_prime, spent) = self.trial_divide(&current);
            candidates += 1;
            divisions += spent;
            self.cursor = current.successor();

            if is_prime {
                debug_assert!(self.known.last().map_or(true, |last| *last < current));
                self.known.push(current.clone());

                if let Some(metrics) = &self.metrics {
                    metrics.record_prime(candidates, divisions);
                }
                tracing::trace!(
                    prime = %current,
                    candidates,
                    divisions,
                    "Produced prime"
                );
                return Ok(current);
            }
        }
    }

    fn has_next(&self) -> bool {
        match (&self.cursor, T::largest_prime()) {
            (None, _) => false,
            (Some(cursor), Some(largest)) => *cursor <= largest,
            (Some(_), None) => true,
        }
    }

    fn current(&self) -> Option<&T> {
        self.known.last()
    }

    fn produced(&self) -> usize {
        self.known.len()
    }
}

impl<T: Candidate> Iterator for PrimeSequence<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.next_prime().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if !self.has_next() {
            (0, Some(0))
        } else if T::largest_prime().is_none() {
            (usize::MAX, None)
        } else {
            (1, None)
        }
    }
}

// Once the cursor is gone it never comes back.
impl<T: Candidate> FusedIterator for PrimeSequence<T> {}

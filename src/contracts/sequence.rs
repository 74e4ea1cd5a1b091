use crate::contracts::error::SequenceError;

/// Produces primes in increasing order, starting from 2.
///
/// # Invariants
/// - `p[n+1] > p[n]` always, no value is produced twice
/// - Every produced value is prime, and no prime is skipped
/// - Position is not rewindable; a fresh generator restarts at 2
pub trait PrimeGenerator {
    type Prime;

    /// Returns the next prime and advances past it.
    /// Only fails when the candidate representation is exhausted.
    fn next_prime(&mut self) -> Result<Self::Prime, SequenceError>;

    /// Returns whether another prime can be produced.
    fn has_next(&self) -> bool;

    /// Returns the most recently produced prime without advancing.
    fn current(&self) -> Option<&Self::Prime>;

    /// Returns how many primes have been produced so far.
    fn produced(&self) -> usize;
}

#![allow(dead_code)]

use proptest::prelude::*;
use primes::contracts::PrimeGenerator;
use primes::generator::PrimeSequence;

// Property checks that work against any PrimeGenerator over u64. The
// proptest blocks at the bottom plug in the trial-division sequence.

fn is_prime_brute_force(n: u64) -> bool {
    n >= 2 && (2u64..).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

// =============================================================================
// Ordering: strictly increasing, starting at 2
// =============================================================================

/// Property: `count` pulls from a fresh generator are strictly increasing and >= 2.
pub fn prop_strictly_increasing<G: PrimeGenerator<Prime = u64>>(gen: &mut G, count: usize) {
    let mut prev = 1u64;
    for _ in 0..count {
        let next = gen.next_prime().expect("next_prime() should not fail");
        assert!(
            next > prev,
            "Primes must be strictly increasing: got {} after {}",
            next,
            prev
        );
        prev = next;
    }
}

// =============================================================================
// Primality: every pulled value is prime, none skipped
// =============================================================================

/// Property: every pulled value has no divisor in 2..=sqrt(value), and the
/// pulled values are exactly the primes up to the last one.
pub fn prop_exactly_the_primes<G: PrimeGenerator<Prime = u64>>(gen: &mut G, count: usize) {
    let mut pulled = Vec::with_capacity(count);
    for _ in 0..count {
        let value = gen.next_prime().expect("next_prime() should not fail");
        assert!(is_prime_brute_force(value), "{} is not prime", value);
        pulled.push(value);
    }

    if let Some(&last) = pulled.last() {
        let expected: Vec<u64> = (2..=last).filter(|n| is_prime_brute_force(*n)).collect();
        assert_eq!(pulled, expected, "A prime below {} was skipped", last);
    }
}

// =============================================================================
// Split pulls: k then m equals k + m from a fresh instance
// =============================================================================

/// Property: pulling in arbitrary chunks yields the same values as one run.
pub fn prop_chunking_is_invisible<G, F>(make: F, chunks: &[usize])
where
    G: PrimeGenerator<Prime = u64>,
    F: Fn() -> G,
{
    let mut chunked = make();
    let mut values = Vec::new();
    for &chunk in chunks {
        for _ in 0..chunk {
            values.push(chunked.next_prime().expect("next_prime() should not fail"));
        }
        assert_eq!(chunked.produced(), values.len());
        assert_eq!(chunked.current(), values.last());
    }

    let mut single = make();
    let total: usize = chunks.iter().sum();
    let expected: Vec<u64> = (0..total)
        .map(|_| single.next_prime().expect("next_prime() should not fail"))
        .collect();

    assert_eq!(values, expected);
}

// =============================================================================
// No repeats across the lifetime of one instance
// =============================================================================

/// Property: a single instance never produces the same value twice.
pub fn prop_no_repeats<G: PrimeGenerator<Prime = u64>>(gen: &mut G, count: usize) {
    let mut seen = std::collections::HashSet::with_capacity(count);
    for _ in 0..count {
        let value = gen.next_prime().expect("next_prime() should not fail");
        assert!(seen.insert(value), "{} was produced twice", value);
    }
}

// =============================================================================
// Proptest strategies
// =============================================================================

prop_compose! {
    fn arb_count()(n in 1usize..400) -> usize {
        n
    }
}

prop_compose! {
    fn arb_chunks()(chunks in prop::collection::vec(0usize..60, 1..8)) -> Vec<usize> {
        chunks
    }
}

// =============================================================================
// Test module with the trial-division implementation
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_ten() {
        let first: Vec<u64> = PrimeSequence::new().take(10).collect();
        assert_eq!(first, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_no_repeats_over_a_long_run() {
        prop_no_repeats(&mut PrimeSequence::<u64>::new(), 2_000);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn test_strictly_increasing(count in arb_count()) {
            prop_strictly_increasing(&mut PrimeSequence::<u64>::new(), count);
        }

        #[test]
        fn test_exactly_the_primes(count in arb_count()) {
            prop_exactly_the_primes(&mut PrimeSequence::<u64>::new(), count);
        }

        #[test]
        fn test_chunking_is_invisible(chunks in arb_chunks()) {
            prop_chunking_is_invisible(PrimeSequence::<u64>::new, &chunks);
        }

        /// Any two fresh instances agree, whatever else has been pulled.
        #[test]
        fn test_fresh_instances_restart_at_two(advance in 0usize..300) {
            let mut advanced = PrimeSequence::<u64>::new();
            advanced.by_ref().take(advance).for_each(drop);
            prop_assert_eq!(advanced.produced(), advance);

            let mut fresh = PrimeSequence::<u64>::new();
            prop_assert_eq!(fresh.next_prime().unwrap(), 2);
        }

        /// Narrower widths agree with u64 on every value they can hold.
        #[test]
        fn test_widths_agree(count in 1usize..54) {
            let narrow: Vec<u64> = PrimeSequence::<u8>::new().take(count).map(u64::from).collect();
            let wide: Vec<u64> = PrimeSequence::<u64>::new().take(count).collect();
            prop_assert_eq!(narrow, wide);
        }
    }
}

#![no_main]

use libfuzzer_sys::fuzz_target;
use primes::contracts::PrimeGenerator;
use primes::generator::PrimeSequence;

fuzz_target!(|data: &[u8]| {
    // Pull past the end of u8 in arbitrary steps; overflow must stick and
    // never corrupt what was already produced.
    let mut seq = PrimeSequence::<u8>::new();
    for &step in data {
        for _ in 0..step {
            let had_next = seq.has_next();
            assert_eq!(seq.next_prime().is_ok(), had_next);
        }
        assert!(seq.primes().windows(2).all(|w| w[0] < w[1]));
        assert!(seq.produced() <= 54);
    }
});

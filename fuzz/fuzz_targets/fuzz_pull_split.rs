#![no_main]

use libfuzzer_sys::fuzz_target;
use primes::contracts::PrimeGenerator;
use primes::generator::PrimeSequence;

fuzz_target!(|data: &[u8]| {
    // Each byte is the size of one pull batch; batching must never change
    // the values produced.
    let mut chunked = PrimeSequence::<u64>::new();
    let mut values = Vec::new();
    for &chunk in data.iter().take(32) {
        for _ in 0..chunk {
            values.push(chunked.next_prime().unwrap());
        }
    }

    let single: Vec<u64> = PrimeSequence::new().take(values.len()).collect();
    assert_eq!(values, single);
    assert_eq!(chunked.primes(), single.as_slice());
});

use std::fmt;

use num_bigint::BigUint;

/// Integer representation a prime sequence counts in.
///
/// Fixed-width types overflow once the next candidate no longer fits;
/// `BigUint` never does.
pub trait Candidate: Clone + Ord + fmt::Display + fmt::Debug {
    /// Human-readable name of the representation, used in errors and logs.
    const WIDTH: &'static str;

    /// The first candidate tested, 2.
    fn first() -> Self;

    /// Returns `self + 1`, or `None` if it does not fit.
    fn successor(&self) -> Option<Self>;

    /// Returns true if `self` divides `candidate` evenly.
    fn divides(&self, candidate: &Self) -> bool;

    /// The largest prime the representation can hold, or `None` if unbounded.
    fn largest_prime() -> Option<Self>;
}

macro_rules! fixed_width_candidate {
    ($($ty:ty => $largest_prime:expr),* $(,)?) => {
        $(
            impl Candidate for $ty {
                const WIDTH: &'static str = stringify!($ty);

                #[inline]
                fn first() -> Self {
                    2
                }

                #[inline]
                fn successor(&self) -> Option<Self> {
                    self.checked_add(1)
                }

                #[inline]
                fn divides(&self, candidate: &Self) -> bool {
                    candidate % self == 0
                }

                #[inline]
                fn largest_prime() -> Option<Self> {
                    Some($largest_prime)
                }
            }
        )*
    };
}

fixed_width_candidate!(
    u8 => 251,
    u16 => 65_521,
    u32 => 4_294_967_291,
    u64 => 18_446_744_073_709_551_557,
    u128 => 340_282_366_920_938_463_463_374_607_431_768_211_297,
);

impl Candidate for BigUint {
    const WIDTH: &'static str = "unbounded";

    fn first() -> Self {
        BigUint::from(2u32)
    }

    fn successor(&self) -> Option<Self> {
        Some(self + 1u32)
    }

    fn divides(&self, candidate: &Self) -> bool {
        candidate % self == BigUint::ZERO
    }

    fn largest_prime() -> Option<Self> {
        None
    }
}

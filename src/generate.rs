//! Pattern 2: Lazy Sequence Producers
//!
//! A generator here is an explicit state struct implementing `Iterator`:
//! each call to `next()` resumes from the stored state, produces one value,
//! and suspends again. Nothing is computed until a value is requested.
//! Exhaustion is `None` — or `Err(Exhausted)` through the strict
//! [`DemandNext`] extension, which mirrors driving a producer by hand.

use std::iter::FusedIterator;

use thiserror::Error;

/// The exhaustion signal: a producer was asked for a value after its last
/// one was produced.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("sequence exhausted: no more values to produce")]
pub struct Exhausted;

/// Strict form of `next()`: asking an exhausted producer for a value is an
/// error rather than a quiet `None`.
pub trait DemandNext: Iterator {
    fn demand_next(&mut self) -> Result<Self::Item, Exhausted> {
        self.next().ok_or(Exhausted)
    }
}

// Blanket impl: every iterator can be driven strictly.
impl<I: Iterator> DemandNext for I {}

/// Counts from 1 up to `limit`, inclusive. The loop counter lives in the
/// struct and is preserved across suspensions.
#[derive(Debug, Clone)]
pub struct CountUpTo {
    current: u64,
    limit: u64,
}

/// Builds the producer without producing anything yet.
pub fn count_up_to(limit: u64) -> CountUpTo {
    CountUpTo { current: 1, limit }
}

impl Iterator for CountUpTo {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.current > self.limit {
            return None;
        }
        let value = self.current;
        self.current += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.current > self.limit {
            0
        } else {
            (self.limit - self.current + 1) as usize
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CountUpTo {}

// Once `current` passes `limit` it never comes back: exhaustion is permanent.
impl FusedIterator for CountUpTo {}

/// An infinite producer of Fibonacci numbers, starting 0, 1, 1, 2, ...
/// The `(current, next)` pair is the suspended state; `checked_add` ends the
/// sequence at `u64` overflow instead of wrapping.
#[derive(Debug, Clone)]
pub struct Fibonacci {
    current: u64,
    next: u64,
}

impl Fibonacci {
    pub fn new() -> Self {
        Fibonacci { current: 0, next: 1 }
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let value = self.current;
        let after = self.current.checked_add(self.next)?;
        self.current = self.next;
        self.next = after;
        Some(value)
    }
}

// The failing `checked_add` leaves the state untouched, so every later call
// fails the same way.
impl FusedIterator for Fibonacci {}

// ============================================================================
// Example: Counting Up and Running Out
// ============================================================================


// ============================================================================
// Example: The Infinite Fibonacci Producer
// ============================================================================

#[cfg(test)]
mod fibonacci_tests {
    use super::*;

    #[test]
    fn starts_with_the_documented_prefix() {
        let prefix: Vec<u64> = Fibonacci::new().take(10).collect();
        assert_eq!(prefix, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
    }

    #[test]
    fn nothing_is_computed_until_requested() {
        let mut fib = Fibonacci::new();
        assert_eq!(fib.next(), Some(0));
        assert_eq!(fib.next(), Some(1));
        assert_eq!(fib.next(), Some(1));
        assert_eq!(fib.next(), Some(2));
    }

    #[test]
    fn stops_at_overflow_instead_of_wrapping() {
        // Finite because checked_add refuses the first sum past u64::MAX.
        let produced = Fibonacci::new().count();
        assert!(produced > 90 && produced < 100);
    }

    #[test]
    fn stays_exhausted_after_overflow() {
        let mut fib = Fibonacci::new();
        while fib.next().is_some() {}
        assert_eq!(fib.next(), None);
        assert_eq!(fib.demand_next(), Err(Exhausted));
    }
}

//! Pattern 2: Lazy Sequence Producers
//! Example: An Infinite Producer
//!
//! Run with: cargo run --example p2_fibonacci

use colored::Colorize;
use decorator_generator_patterns::Fibonacci;
use itertools::{iterate, Itertools};

fn main() {
    println!("{}", "=== Infinite Producer: Fibonacci ===".bold());
    let prefix: Vec<u64> = Fibonacci::new().take(10).collect();
    assert_eq!(prefix, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
    println!("First 10 Fibonacci numbers: {}", prefix.iter().join(", "));

    println!("\n{}", "=== Lazy Evaluation ===".bold());
    let mut fib = Fibonacci::new();
    println!("Created the producer; nothing computed yet");
    println!("First request:  {:?}", fib.next());
    println!("Second request: {:?}", fib.next());
    println!("Third request:  {:?}", fib.next());

    println!("\n{}", "=== Adapters Work on Infinite Producers ===".bold());
    let even_fibs: Vec<u64> = Fibonacci::new().take(20).filter(|n| n % 2 == 0).collect();
    println!("Even values in the first 20: {}", even_fibs.iter().join(", "));

    println!("\n{}", "=== The Same Sequence as a Combinator ===".bold());
    // itertools::iterate carries the (current, next) pair the way the
    // struct carries its fields.
    let via_iterate: Vec<u64> = iterate((0u64, 1u64), |&(a, b)| (b, a + b))
        .map(|(a, _)| a)
        .take(10)
        .collect();
    assert_eq!(via_iterate, prefix);
    println!("iterate(..) produced the same prefix: {}", via_iterate.iter().join(", "));

    println!("\n{}", "=== Overflow Ends the Sequence ===".bold());
    let produced = Fibonacci::new().count();
    println!("Fibonacci numbers that fit in u64: {produced}");
    let last = Fibonacci::new().last();
    println!("Largest produced value: {last:?}");

    println!("\n=== Key Points ===");
    println!("1. Infinite producers are possible because production is lazy");
    println!("2. Use take(n) to bound an infinite sequence");
    println!("3. checked_add stops at overflow instead of wrapping");
    println!("4. Combinators like iterate() express the same state machine");
}

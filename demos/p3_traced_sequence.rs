//! Pattern 3: Decorators Over Generators
//! Example: Tracing a Producer
//!
//! Run with: cargo run --example p3_traced_sequence

use colored::Colorize;
use decorator_generator_patterns::{count_up_to, Fibonacci, TraceExt};

fn main() {
    println!("{}", "=== Tracing a Finite Producer ===".bold());
    // The adapter logs around each production step; the values themselves
    // are untouched.
    let values: Vec<u64> = count_up_to(5).traced("count_up_to(5)").collect();
    println!("collected: {values:?}");
    assert_eq!(values, vec![1, 2, 3, 4, 5]);

    println!("\n{}", "=== Tracing an Infinite Producer ===".bold());
    // take(5) stops before exhaustion, so there is no "done" line.
    let prefix: Vec<u64> = Fibonacci::new().traced("fib").take(5).collect();
    println!("collected: {prefix:?}");
    assert_eq!(prefix, vec![0, 1, 1, 2, 3]);

    println!("\n{}", "=== Tracing Composes with Other Adapters ===".bold());
    let doubled: Vec<u64> = count_up_to(3).traced("source").map(|n| n * 2).collect();
    println!("doubled: {doubled:?}");
    assert_eq!(doubled, vec![2, 4, 6]);

    println!("\n=== Key Points ===");
    println!("1. A tracing adapter is a decorator whose callable is next()");
    println!("2. It logs the start, every yield, and the end of the sequence");
    println!("3. The produced values and their order are never altered");
    println!("4. Because it is itself an iterator, it composes with any adapter");
}

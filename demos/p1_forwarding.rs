//! Pattern 1: Decorating Callables
//! Example: Forwarding Arguments and Results
//!
//! Run with: cargo run --example p1_forwarding

use colored::Colorize;
use decorator_generator_patterns::{logged, Counted, StdoutSink, Timed};

fn main() {
    println!("{}", "=== Logging Calls and Results ===".bold());
    // The wrapper accepts the same argument shape as the original and
    // propagates the result unchanged.
    let mut double = logged("double", |x: i32| x * 2, StdoutSink);
    let result = double(21);
    assert_eq!(result, 42);

    println!("\n{}", "=== Tuples Stand In for Multiple Arguments ===".bold());
    let mut add = logged("add", |(a, b): (i32, i32)| a + b, StdoutSink);
    let sum = add((2, 3));
    assert_eq!(sum, 5);

    println!("\n{}", "=== A Wrapper Struct That Keeps State ===".bold());
    let mut square = Counted::new(|x: i64| x * x);
    for n in 1..=4 {
        println!("square({n}) = {}", square.call(n));
    }
    println!("square was called {} times", square.calls());
    assert_eq!(square.calls(), 4);

    println!("\n{}", "=== Timing a Call ===".bold());
    let mut summed = Timed::new(
        "sum of the first million integers",
        |n: u64| (1..=n).sum::<u64>(),
        StdoutSink,
    );
    let total = summed.call(1_000_000);
    println!("total = {total}");

    println!("\n=== Key Points ===");
    println!("1. Generic closures forward any argument type the original takes");
    println!("2. The result is returned unchanged, so callers never notice the wrapper");
    println!("3. Wrapper structs can carry state across calls (counters, timers)");
    println!("4. Side effects go through a sink, so tests can observe them");
}

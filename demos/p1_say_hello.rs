//! Pattern 1: Decorating Callables
//! Example: Before/After Wrapping
//!
//! Run with: cargo run --example p1_say_hello

use colored::Colorize;
use decorator_generator_patterns::announce;

fn say_hello() {
    println!("Hello!");
}

fn main() {
    println!("{}", "=== Decorating a Function ===".bold());
    println!("Calling the plain function:\n");
    say_hello();

    // The decorator returns a replacement callable that wraps the original.
    println!("\nCalling the decorated function:\n");
    let mut decorated = announce(say_hello);
    decorated();

    println!("\n{}", "=== The Wrapper Is Just a Value ===".bold());
    // The original function is untouched; the wrapper is a new callable
    // that can be called as many times as you like.
    decorated();

    println!("\n{}", "=== Results Pass Through ===".bold());
    let mut answer = announce(|| 42);
    let result = answer();
    assert_eq!(result, 42);
    println!("The wrapper returned: {result}");

    println!("\n=== Key Points ===");
    println!("1. A decorator takes a callable and returns a replacement callable");
    println!("2. The replacement runs extra behavior before and after the original");
    println!("3. The original's return value passes through unchanged");
    println!("4. In Rust the replacement is a closure that owns the original");
}

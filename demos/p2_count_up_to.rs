//! Pattern 2: Lazy Sequence Producers
//! Example: Counting Up and Running Out
//!
//! Run with: cargo run --example p2_count_up_to

use colored::Colorize;
use decorator_generator_patterns::{count_up_to, DemandNext};

fn main() {
    println!("{}", "=== Iterating a Producer ===".bold());
    // Building the producer computes nothing; values appear one request at
    // a time.
    let counter = count_up_to(5);
    for value in counter {
        println!("got {value}");
    }

    println!("\n{}", "=== Driving It by Hand ===".bold());
    let mut counter = count_up_to(5);
    println!("First request:  {:?}", counter.next());
    println!("Second request: {:?}", counter.next());
    // The loop counter is suspended state: resuming continues from 3.
    println!("Remaining: {:?}", counter.by_ref().collect::<Vec<_>>());

    println!("\n{}", "=== Exhaustion ===".bold());
    // The producer is done; every further request signals exhaustion.
    match counter.demand_next() {
        Ok(value) => println!("unexpected value {value}"),
        Err(err) => println!("sixth request failed: {err}"),
    }
    assert!(counter.demand_next().is_err());
    assert_eq!(counter.next(), None);

    println!("\n{}", "=== Producers Compose with Adapters ===".bold());
    let even_sum: u64 = count_up_to(10).filter(|n| n % 2 == 0).sum();
    println!("sum of even values up to 10: {even_sum}");
    assert_eq!(even_sum, 30);

    println!("\n=== Key Points ===");
    println!("1. A producer is an explicit state struct implementing Iterator");
    println!("2. Each next() resumes from the stored state and suspends again");
    println!("3. Exhaustion is None, and it is permanent");
    println!("4. demand_next() turns exhaustion into an error, like a strict next()");
}

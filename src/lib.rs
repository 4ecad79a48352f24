//! # Function Decorators & Lazy Generators
//!
//! A runnable tutorial on two patterns that often arrive together: wrapping
//! a callable to add behavior around its calls, and producing a sequence of
//! values lazily, one request at a time.
//!
//! ## Patterns Covered
//!
//! 1. **Decorating Callables**
//!    - Before/after wrapping with closures (`announce`, `announced`)
//!    - Forwarding arguments and results unchanged (`logged`)
//!    - Wrapper structs that keep state (`Counted`, `Timed`)
//!    - Injectable output sinks (`LogSink`)
//!
//! 2. **Lazy Sequence Producers**
//!    - A finite counter with explicit suspended state (`count_up_to`)
//!    - Driving a producer by hand and hitting exhaustion (`DemandNext`,
//!      `Exhausted`)
//!    - An infinite, overflow-checked producer (`Fibonacci`)
//!
//! 3. **Decorators Over Generators**
//!    - A tracing adapter that logs around each production step without
//!      changing the values (`Traced`, `TraceExt`)
//!
//! ## Running Examples
//!
//! ```bash
//! # Pattern 1: Decorating Callables
//! cargo run --example p1_say_hello
//! cargo run --example p1_forwarding
//!
//! # Pattern 2: Lazy Sequence Producers
//! cargo run --example p2_count_up_to
//! cargo run --example p2_fibonacci
//!
//! # Pattern 3: Decorators Over Generators
//! cargo run --example p3_traced_sequence
//! ```

pub mod decorate;
pub mod generate;
pub mod trace;

pub use decorate::{announce, announced, logged, Counted, LogSink, StdoutSink, Timed};
pub use generate::{count_up_to, CountUpTo, DemandNext, Exhausted, Fibonacci};
pub use trace::{TraceExt, Traced};

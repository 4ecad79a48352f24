//! Pattern 1: Decorating Callables
//!
//! A decorator takes a callable and returns a replacement callable that runs
//! extra behavior before and/or after the original, forwarding arguments and
//! the return value unchanged. In Rust the replacement is a closure (or a
//! wrapper struct) that owns the original.

use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::Rc;
use std::time::Instant;

/// Where decorator side effects go. The demos print; tests inject a
/// collecting sink and check the documented output line by line.
pub trait LogSink {
    fn log(&mut self, line: &str);
}

/// Prints each line, matching the tutorial snippets.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn log(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Collecting sink for tests.
impl LogSink for Vec<String> {
    fn log(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

impl<S: LogSink + ?Sized> LogSink for &mut S {
    fn log(&mut self, line: &str) {
        (**self).log(line);
    }
}

// Shared sink, for when the wrapper and the wrapped callable both need to
// log to the same place.
impl<S: LogSink> LogSink for Rc<RefCell<S>> {
    fn log(&mut self, line: &str) {
        self.borrow_mut().log(line);
    }
}

/// Wraps a no-argument callable so one line is logged before the call and
/// one after it. The result is passed through unchanged.
pub fn announced<F, R, S>(mut f: F, mut sink: S) -> impl FnMut() -> R
where
    F: FnMut() -> R,
    S: LogSink,
{
    move || {
        sink.log("Something is happening before the function is called.");
        let result = f();
        sink.log("Something is happening after the function is called.");
        result
    }
}

/// Stdout shorthand for [`announced`], used by the demos.
pub fn announce<F, R>(f: F) -> impl FnMut() -> R
where
    F: FnMut() -> R,
{
    announced(f, StdoutSink)
}

/// Wraps a single-argument callable so each call and its result are logged.
/// The argument and the result are forwarded unchanged; pass a tuple to
/// decorate a multi-argument callable.
pub fn logged<A, R, F, S>(name: &str, mut f: F, mut sink: S) -> impl FnMut(A) -> R
where
    A: Debug,
    R: Debug,
    F: FnMut(A) -> R,
    S: LogSink,
{
    let name = name.to_string();
    move |arg: A| {
        sink.log(&format!("calling {}({:?})", name, arg));
        let result = f(arg);
        sink.log(&format!("{} returned {:?}", name, result));
        result
    }
}

/// Wrapper-struct form of a decorator: forwards every call to the wrapped
/// callable and remembers how many times it ran.
#[derive(Debug)]
pub struct Counted<F> {
    inner: F,
    calls: u64,
}

impl<F> Counted<F> {
    pub fn new(inner: F) -> Self {
        Counted { inner, calls: 0 }
    }

    pub fn calls(&self) -> u64 {
        self.calls
    }

    pub fn call<A, R>(&mut self, arg: A) -> R
    where
        F: FnMut(A) -> R,
    {
        self.calls += 1;
        (self.inner)(arg)
    }
}

/// Wrapper that reports the wall time of each call through its sink.
pub struct Timed<F, S> {
    inner: F,
    name: String,
    sink: S,
}

impl<F, S: LogSink> Timed<F, S> {
    pub fn new(name: &str, inner: F, sink: S) -> Self {
        Timed {
            inner,
            name: name.to_string(),
            sink,
        }
    }

    pub fn call<A, R>(&mut self, arg: A) -> R
    where
        F: FnMut(A) -> R,
    {
        let start = Instant::now();
        let result = (self.inner)(arg);
        self.sink
            .log(&format!("{} took {:?}", self.name, start.elapsed()));
        result
    }
}

// ============================================================================
// Example: The Documented say_hello Output
// ============================================================================

#[cfg(test)]
mod announce_tests {
    use super::*;

    #[test]
    fn say_hello_logs_three_lines_in_order() {
        let lines: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

        let mut say_hello = announced(
            {
                let mut lines = lines.clone();
                move || lines.log("Hello!")
            },
            lines.clone(),
        );
        say_hello();

        assert_eq!(
            *lines.borrow(),
            vec![
                "Something is happening before the function is called.",
                "Hello!",
                "Something is happening after the function is called.",
            ]
        );
    }

    #[test]
    fn announced_propagates_the_result() {
        let mut wrapped = announced(|| 7, Vec::<String>::new());
        assert_eq!(wrapped(), 7);
    }

    #[test]
    fn announced_can_be_called_repeatedly() {
        let lines: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let mut wrapped = announced(|| (), lines.clone());
        wrapped();
        wrapped();
        assert_eq!(lines.borrow().len(), 4);
    }
}

// ============================================================================
// Example: Forwarding Arguments and Results
// ============================================================================

#[cfg(test)]
mod forwarding_tests {
    use super::*;

    #[test]
    fn logged_forwards_argument_and_result() {
        let mut lines: Vec<String> = Vec::new();
        {
            let mut double = logged("double", |x: i32| x * 2, &mut lines);
            assert_eq!(double(21), 42);
        }
        assert_eq!(lines, vec!["calling double(21)", "double returned 42"]);
    }

    #[test]
    fn logged_handles_tuple_arguments() {
        let mut lines: Vec<String> = Vec::new();
        {
            let mut add = logged("add", |(a, b): (i32, i32)| a + b, &mut lines);
            assert_eq!(add((2, 3)), 5);
        }
        assert_eq!(lines, vec!["calling add((2, 3))", "add returned 5"]);
    }

    #[test]
    fn counted_counts_every_call() {
        let mut square = Counted::new(|x: i32| x * x);
        assert_eq!(square.calls(), 0);
        assert_eq!(square.call(3), 9);
        assert_eq!(square.call(4), 16);
        assert_eq!(square.calls(), 2);
    }

    #[test]
    fn timed_propagates_result_and_logs_once_per_call() {
        let mut lines: Vec<String> = Vec::new();
        {
            let mut slow = Timed::new("slow", |x: u32| x + 1, &mut lines);
            assert_eq!(slow.call(1), 2);
            assert_eq!(slow.call(2), 3);
        }
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("slow took "));
    }
}

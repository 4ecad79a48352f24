//! Pattern 3: Decorating a Producer
//!
//! Composes the two mechanisms: a tracing adapter wraps any iterator and
//! interposes log lines around the start of the sequence, each production
//! step, and the end, without touching the values themselves.

use std::fmt::Debug;

use crate::decorate::{LogSink, StdoutSink};

/// Iterator adapter that logs around each production step. Yields exactly
/// the same items as the inner iterator, in the same order.
#[derive(Debug)]
pub struct Traced<I, S> {
    inner: I,
    label: String,
    sink: S,
    started: bool,
    finished: bool,
}

impl<I, S> Traced<I, S> {
    /// Consumes the adapter and hands back the sink, so callers can inspect
    /// what was logged.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<I, S> Iterator for Traced<I, S>
where
    I: Iterator,
    I::Item: Debug,
    S: LogSink,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if !self.started {
            self.started = true;
            self.sink.log(&format!("{}: starting", self.label));
        }
        match self.inner.next() {
            Some(item) => {
                self.sink.log(&format!("{}: yield {:?}", self.label, item));
                Some(item)
            }
            None => {
                // "done" is logged once, on the request that hits exhaustion.
                if !self.finished {
                    self.finished = true;
                    self.sink.log(&format!("{}: done", self.label));
                }
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Blanket extension adding `.traced(..)` to every iterator.
pub trait TraceExt: Iterator {
    /// Traces to stdout, like the tutorial snippets.
    fn traced(self, label: &str) -> Traced<Self, StdoutSink>
    where
        Self: Sized,
    {
        self.traced_with(label, StdoutSink)
    }

    /// Traces to an injected sink.
    fn traced_with<S: LogSink>(self, label: &str, sink: S) -> Traced<Self, S>
    where
        Self: Sized,
    {
        Traced {
            inner: self,
            label: label.to_string(),
            sink,
            started: false,
            finished: false,
        }
    }
}

impl<I: Iterator> TraceExt for I {}

// ============================================================================
// Example: Tracing Without Changing the Sequence
// ============================================================================

#[cfg(test)]
mod trace_tests {
    use super::*;
    use crate::generate::{count_up_to, Fibonacci};

    #[test]
    fn values_pass_through_unchanged() {
        let mut lines: Vec<String> = Vec::new();
        let traced: Vec<u64> = count_up_to(3).traced_with("numbers", &mut lines).collect();
        assert_eq!(traced, count_up_to(3).collect::<Vec<u64>>());
        // starting + one line per yield + done
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn logs_start_each_yield_and_done_in_order() {
        let mut traced = count_up_to(3).traced_with("numbers", Vec::<String>::new());
        while traced.next().is_some() {}
        assert_eq!(
            traced.into_sink(),
            vec![
                "numbers: starting",
                "numbers: yield 1",
                "numbers: yield 2",
                "numbers: yield 3",
                "numbers: done",
            ]
        );
    }

    #[test]
    fn done_is_logged_only_once() {
        let mut traced = count_up_to(1).traced_with("one", Vec::<String>::new());
        assert_eq!(traced.next(), Some(1));
        assert_eq!(traced.next(), None);
        assert_eq!(traced.next(), None);
        let lines = traced.into_sink();
        assert_eq!(lines, vec!["one: starting", "one: yield 1", "one: done"]);
    }

    #[test]
    fn works_on_an_infinite_producer() {
        let mut lines: Vec<String> = Vec::new();
        let prefix: Vec<u64> = Fibonacci::new()
            .traced_with("fib", &mut lines)
            .take(3)
            .collect();
        assert_eq!(prefix, vec![0, 1, 1]);
        // take(3) never hits exhaustion, so there is no "done" line.
        assert_eq!(
            lines,
            vec!["fib: starting", "fib: yield 0", "fib: yield 1", "fib: yield 1"]
        );
    }
}

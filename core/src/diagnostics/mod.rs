//! Reporting of lexical errors.
//!
//! The scanner never fails; it hands every [`LexError`] to an
//! [`ErrorReporter`] and carries on. Callers decide whether a run failed by
//! asking the reporter afterwards.

mod reporter;
pub mod source_map;

pub use reporter::{Collector, ErrorReporter, StreamReporter, format_diagnostic};

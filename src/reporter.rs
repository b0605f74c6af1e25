//! Operator-facing line sink

use std::fmt;

/// Sink for report lines. `info` for routine output, `error` for problems.
pub trait Reporter {
    fn info(&self, msg: fmt::Arguments<'_>);
    fn error(&self, msg: fmt::Arguments<'_>);
}

/// Reporter that writes through the tracing subscriber
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn info(&self, msg: fmt::Arguments<'_>) {
        tracing::info!("{}", msg);
    }

    fn error(&self, msg: fmt::Arguments<'_>) {
        tracing::error!("{}", msg);
    }
}

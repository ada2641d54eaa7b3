//! Injectable diagnostic sink for non-fatal build conditions.
//!
//! The core performs no logging of its own beyond this sink. The default
//! implementation forwards to the `log` crate at debug level, so a driver
//! that installs a logger sees correspondence fallbacks without any extra
//! wiring; tests inject a counting sink instead.

use core::fmt;

/// Non-fatal conditions surfaced during `build`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Diagnostic {
    /// An identifier on the current snapshot was absent from a knot's
    /// correspondence index; the point's own position was substituted.
    MissingCorrespondence {
        point: usize,
        identifier: i64,
        knot: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCorrespondence {
                point,
                identifier,
                knot,
            } => write!(
                f,
                "missing correspondence for id {identifier} (point {point}) at knot {knot}"
            ),
        }
    }
}

pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: &Diagnostic);
}

/// Discards every diagnostic.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&mut self, _diagnostic: &Diagnostic) {}
}

/// Default sink: forwards to the `log` crate at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: &Diagnostic) {
        log::debug!("{diagnostic}");
    }
}

//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.
//!
//! Errors in this workspace always point back at the piece of input that caused them, whether
//! that is an expression handed to the parser or a rule string handed to the algebra builder.
//! Each error kind is a small struct implementing [`ErrorKind`] (usually through the derive
//! macro in `regula-attrs`), and [`Error`] bundles a kind with the source spans it refers to.

// the derive macro in `regula-attrs` emits paths starting with `regula_error`, so give this
// crate's tests a way to resolve them
#[cfg(test)]
extern crate self as regula_error;

use ariadne::{Color, Report};
use std::{any::Any, fmt::Debug, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;

    /// Returns the error kind as an [`Any`] reference, so callers can downcast to the concrete
    /// kind.
    fn as_any(&self) -> &dyn Any;
}

/// An error associated with regions of the input that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the input that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Creates a new error with no useful location, pointing at the start of the input.
    pub fn without_span(kind: impl ErrorKind + 'static) -> Self {
        Self::new(vec![0..0], kind)
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ariadne::Source;
    use regula_attrs::ErrorKind;

    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(
        message = "rule does not terminate",
        labels = ["this rule"],
        help = format!("rewriting stopped after {} passes", passes),
    )]
    struct Loopy {
        passes: usize,
    }

    /// Renders the report for the given error against the given source and strips the color
    /// codes.
    fn render(error: &Error, src: &str) -> String {
        let mut buf = Vec::new();
        error
            .build_report("input")
            .write(("input", Source::from(src)), &mut buf)
            .unwrap();
        String::from_utf8(strip_ansi_escapes::strip(&buf)).unwrap()
    }

    #[test]
    fn report_contains_message_and_help() {
        let error = Error::new(vec![0..2], Loopy { passes: 16 });
        let report = render(&error, "ji = ij");
        assert!(report.contains("rule does not terminate"));
        assert!(report.contains("this rule"));
        assert!(report.contains("stopped after 16 passes"));
    }

    #[test]
    fn downcast_through_as_any() {
        let error = Error::without_span(Loopy { passes: 3 });
        let kind = error.kind.as_any().downcast_ref::<Loopy>().unwrap();
        assert_eq!(kind, &Loopy { passes: 3 });
    }
}

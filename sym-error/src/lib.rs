//! Span-carrying errors shared by the parsers in this workspace, and their rendering as
//! [`ariadne`] reports.
//!
//! An [`Error`] pairs the regions of the input it points at with a boxed [`ErrorKind`]. Kinds
//! are usually plain structs deriving `sym_attrs::ErrorKind`, which supplies the message, one
//! label per span, and an optional help line.

use ariadne::{Color, Label, Report, ReportKind};
use std::{any::Any, fmt::{self, Debug, Display, Formatter}, iter, ops::Range};

/// Highlight color for expressions in messages and help text.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// The description of one kind of error.
pub trait ErrorKind: Debug + Send + Sync {
    /// Returns `self` as [`Any`], so that callers can inspect the concrete error kind.
    fn as_any(&self) -> &dyn Any;

    /// The one-line message describing this error, without any source context.
    fn message(&self) -> String;

    /// The text attached to each span, in order. Spans without a label, or with an empty one,
    /// are highlighted without text.
    fn labels(&self) -> Vec<String>;

    /// What the user can do to fix the error.
    fn help(&self) -> Option<String> {
        None
    }

    /// Builds a report highlighting the given spans of the source `src_id`.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        let offset = spans.first().map_or(0, |span| span.start);
        let labels = spans.iter()
            .zip(self.labels().into_iter().chain(iter::repeat(String::new())))
            .map(|(span, text)| {
                let label = Label::new((src_id, span.clone())).with_color(EXPR);
                if text.is_empty() {
                    label
                } else {
                    label.with_message(text)
                }
            });

        let mut builder = Report::build(ReportKind::Error, src_id, offset)
            .with_message(self.message())
            .with_labels(labels);
        if let Some(help) = self.help() {
            builder.set_help(help);
        }
        builder.finish()
    }
}

/// An error pointing at one or more regions of the input.
#[derive(Debug)]
pub struct Error {
    /// The regions of the input the error points at. The first one is the primary location.
    pub spans: Vec<Range<usize>>,

    /// What went wrong.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Builds the report for this error. `src_id` names the source in the rendered output.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Returns true if the kind of this error is `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Returns the kind of this error if it is `K`.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.spans.first() {
            Some(span) => write!(f, "{} (at {}..{})", self.kind.message(), span.start, span.end),
            None => write!(f, "{}", self.kind.message()),
        }
    }
}

impl std::error::Error for Error {}

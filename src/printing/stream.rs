//! The document tree is good for building layouts, but not for printing them. For that, it gets
//! flattened into a stream of these elements.

use crate::element::Cond;
use crate::geometry::Col;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind<'d> {
    Text(&'d str),
    Cond(&'d Cond),
    LineBreak,
    GroupBegin,
    GroupEnd,
    NestBegin,
    NestEnd,
}

/// A single event in the stream, along with its horizontal position `hpos`.
///
/// For every kind except `GroupBegin` and `NestBegin`, `hpos` is the column just after this
/// element, supposing the whole document were printed on one line. For `GroupBegin`, it's the
/// column at which the group ends (again, on one line). `NestBegin` never gets a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamElement<'d> {
    pub kind: StreamKind<'d>,
    pub hpos: Option<Col>,
}

impl<'d> StreamElement<'d> {
    pub fn new(kind: StreamKind<'d>) -> StreamElement<'d> {
        StreamElement { kind, hpos: None }
    }

    pub fn with_hpos(kind: StreamKind<'d>, hpos: Col) -> StreamElement<'d> {
        StreamElement {
            kind,
            hpos: Some(hpos),
        }
    }
}

struct Hpos(Option<Col>);

impl fmt::Display for Hpos {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(col) => write!(f, "{}", col),
            None => write!(f, "?"),
        }
    }
}

impl<'d> fmt::Display for StreamElement<'d> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use StreamKind::*;

        let hpos = Hpos(self.hpos);
        match self.kind {
            Text(payload) => write!(f, "TE(\"{}\")", payload),
            Cond(cond) => write!(
                f,
                "CE(\"{}\",\"{}\",\"{}\")",
                cond.small(),
                cond.continuation(),
                cond.tail()
            ),
            LineBreak => write!(f, "CR({})", hpos),
            GroupBegin => write!(f, "GBeg({})", hpos),
            GroupEnd => write!(f, "GEnd({})", hpos),
            NestBegin => write!(f, "NBeg({})", hpos),
            NestEnd => write!(f, "NEnd({})", hpos),
        }
    }
}

/// Dump a stream as a single line, for debugging and testing.
pub fn stream_to_string<'d>(stream: impl IntoIterator<Item = StreamElement<'d>>) -> String {
    stream
        .into_iter()
        .map(|elem| elem.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

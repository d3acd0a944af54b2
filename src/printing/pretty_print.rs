use super::annotate::annotate_positions;
use super::linearize::linearize;
use super::render::{render, PrintingError};
use super::resolve::resolve_groups;
use super::stream::StreamElement;
use crate::element::Element;
use crate::geometry::Width;
use std::io;
use tracing::debug;

/// Pretty print `doc` to `out`, attempting to keep every line within `width` columns.
///
/// The document is streamed: it is flattened, annotated with positions, and printed in a single
/// pass, holding back only the contents of groups that are still open. Fails on the first write
/// error, leaving whatever was already written in `out`.
pub fn pretty_print<W: io::Write>(doc: &Element, width: Width, out: W) -> Result<(), PrintingError> {
    debug!(width, "pretty printing document");
    render(pretty_print_stream(doc), width, out)
}

/// Print the entirety of the document to a string.
pub fn pretty_print_to_string(doc: &Element, width: Width) -> Result<String, PrintingError> {
    let mut bytes = Vec::new();
    pretty_print(doc, width, &mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// The fully annotated stream that [`pretty_print`] renders, for debugging: every element has a
/// position except `NestBegin`.
pub fn pretty_print_stream(doc: &Element) -> impl Iterator<Item = StreamElement<'_>> {
    resolve_groups(annotate_positions(linearize(doc)))
}

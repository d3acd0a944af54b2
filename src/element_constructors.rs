//! Short constructors for building [`Element`]s.

use crate::element::{Element, COND_LB, DOT_LB, EMPTY};

pub fn empty() -> Element {
    EMPTY.clone()
}

pub fn text(payload: &str) -> Element {
    Element::text(payload)
}

/// Displays `small` if the enclosing group fits, or else `tail`, a line break, the indentation,
/// and `continuation`.
pub fn cond(small: &str, continuation: &str, tail: &str) -> Element {
    Element::cond(small, continuation, tail)
}

/// A space or a line break.
pub fn cond_lb() -> Element {
    COND_LB.clone()
}

/// A dot, or a line break followed by a dot.
pub fn dot_lb() -> Element {
    DOT_LB.clone()
}

pub fn lb() -> Element {
    Element::LineBreak
}

pub fn concat(elements: impl IntoIterator<Item = Element>) -> Element {
    Element::concat(elements)
}

pub fn group(element: Element) -> Element {
    Element::group(element)
}

pub fn nest(element: Element) -> Element {
    Element::nest(element)
}

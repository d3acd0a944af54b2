//! Helpers for common layouts: argument lists, comma separated lists, and chained method calls.
//! These are built entirely out of the primitive [`Element`]s.

use crate::element::{Element, COND_LB, DOT_LB, EMPTY};

/// A comma separated list, nested so that the elements line up when it breaks:
///
/// ```text
/// foo, bar, baz        foo,
///                      bar,
///                      baz
/// ```
pub fn csv(elements: Vec<Element>) -> Element {
    if elements.is_empty() {
        return EMPTY.clone();
    }
    let mut children = Vec::with_capacity(elements.len() * 3 - 2);
    for (i, element) in elements.into_iter().enumerate() {
        if i > 0 {
            children.push(Element::text(","));
            children.push(COND_LB.clone());
        }
        children.push(element);
    }
    Element::nest(Element::Concat(children))
}

/// C-style arguments: a parenthesized [`csv`].
pub fn args(elements: Vec<Element>) -> Element {
    Element::concat(vec![
        Element::text("("),
        csv(elements),
        Element::text(")"),
    ])
}

/// Chained method calls, in the style of "fluent" interfaces. `dotted_list([a, b, c])` is
/// `a + Nest("." + b + DOT_LB + c)`, so that the dots line up when it breaks. There is never a
/// break before the first dot.
pub fn dotted_list(elements: Vec<Element>) -> Element {
    let mut elements = elements.into_iter();
    let first = match elements.next() {
        None => return EMPTY.clone(),
        Some(first) => first,
    };
    let mut rest = Vec::new();
    for (i, element) in elements.enumerate() {
        if i == 0 {
            rest.push(Element::text("."));
        } else {
            rest.push(DOT_LB.clone());
        }
        rest.push(element);
    }
    if rest.is_empty() {
        Element::nest(first)
    } else {
        Element::concat(vec![first, Element::nest(Element::Concat(rest))])
    }
}

/// A call of the function `name` with the given arguments.
pub fn funcall(name: &str, arguments: Vec<Element>) -> Element {
    Element::concat(vec![Element::text(name), args(arguments)])
}

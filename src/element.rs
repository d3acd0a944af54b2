use crate::geometry::{str_width, Width};
use once_cell::sync::Lazy;
use std::fmt;
use std::ops::Add;

/// Describes how to lay out a document. The set of primitives is closed: the printer handles
/// exactly these cases.
///
/// Line breaks are only ever decided per `Group`. Every `Cond` inside a group renders the same
/// way: either all of them flat, if the whole group fits before the right margin, or all of them
/// broken.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Element {
    /// Literal text. Should not contain a newline.
    Text(String),
    /// A conditional line break. See [`Cond`].
    Cond(Cond),
    /// An unconditional line break, followed by the current indentation.
    LineBreak,
    /// Display each element in order, with nothing in between.
    Concat(Vec<Element>),
    /// Make every conditional break in the contained element resolve the same way.
    Group(Box<Element>),
    /// Like `Group`, but additionally indent any line break inside it to (at least) the column at
    /// which the `Nest` began.
    Nest(Box<Element>),
}

/// A conditional line break. If the enclosing group fits, it is displayed as `small`. Otherwise
/// it is displayed as `tail`, then a newline, then the current indentation, then `continuation`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Cond {
    small: String,
    continuation: String,
    tail: String,
}

/// Displays nothing. Identical to `Text("")`.
pub static EMPTY: Lazy<Element> = Lazy::new(|| Element::text(""));
/// A space, or a line break if the enclosing group doesn't fit.
pub static COND_LB: Lazy<Element> = Lazy::new(|| Element::cond(" ", "", ""));
/// A dot, or a line break followed by a dot if the enclosing group doesn't fit. For formatting
/// chained method calls.
pub static DOT_LB: Lazy<Element> = Lazy::new(|| Element::cond(".", ".", ""));
/// An unconditional line break.
pub static LB: Lazy<Element> = Lazy::new(|| Element::LineBreak);

impl Cond {
    pub fn new(small: &str, continuation: &str, tail: &str) -> Cond {
        Cond {
            small: small.to_owned(),
            continuation: continuation.to_owned(),
            tail: tail.to_owned(),
        }
    }

    /// What to display if the enclosing group fits.
    pub fn small(&self) -> &str {
        &self.small
    }

    /// What to display at the start of the new line, after the indentation, when breaking.
    pub fn continuation(&self) -> &str {
        &self.continuation
    }

    /// What to display at the end of the current line, just before the newline, when breaking.
    pub fn tail(&self) -> &str {
        &self.tail
    }
}

impl Element {
    pub fn text(payload: &str) -> Element {
        Element::Text(payload.to_owned())
    }

    pub fn cond(small: &str, continuation: &str, tail: &str) -> Element {
        Element::Cond(Cond::new(small, continuation, tail))
    }

    pub fn concat(elements: impl IntoIterator<Item = Element>) -> Element {
        Element::Concat(elements.into_iter().collect())
    }

    pub fn group(element: Element) -> Element {
        Element::Group(Box::new(element))
    }

    pub fn nest(element: Element) -> Element {
        Element::Nest(Box::new(element))
    }

    /// How many columns this element would take up if it were displayed on a single line.
    ///
    /// Only meant for debugging and testing: the printer never consults it, since the width of a
    /// group depends on where it starts.
    pub fn width(&self) -> Width {
        use Element::*;

        match self {
            Text(payload) => str_width(payload),
            Cond(cond) => str_width(&cond.small),
            LineBreak => 0,
            Concat(children) => children.iter().map(|child| child.width()).sum(),
            Group(child) | Nest(child) => child.width(),
        }
    }
}

impl fmt::Display for Cond {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Cond(\"{}\",\"{}\",\"{}\")",
            self.small, self.continuation, self.tail
        )
    }
}

/// The canonical structural dump, e.g. `Group(Text("a")Cond(" ","","")Text("b"))`. A `Concat`
/// shows its children back to back without a wrapper.
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Element::*;

        match self {
            Text(payload) => write!(f, "Text(\"{}\")", payload),
            Cond(cond) => write!(f, "{}", cond),
            LineBreak => write!(f, "CR"),
            Concat(children) => {
                for child in children {
                    write!(f, "{}", child)?;
                }
                Ok(())
            }
            Group(child) => write!(f, "Group({})", child),
            Nest(child) => write!(f, "Nest({})", child),
        }
    }
}

impl Add<Element> for Element {
    type Output = Element;

    /// Shorthand for `Concat`. Extends the left element if it is already a `Concat`.
    fn add(self, other: Element) -> Element {
        match self {
            Element::Concat(mut children) => {
                children.push(other);
                Element::Concat(children)
            }
            element => Element::Concat(vec![element, other]),
        }
    }
}

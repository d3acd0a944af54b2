//! A streaming pretty printer. Documents are built out of a small, fixed set of layout
//! [`Element`]s, and printed within a page width by deciding, for each `Group`, whether it fits
//! on the rest of the line.

mod element;
mod geometry;
mod infra;
mod printing;

pub mod combinators;
pub mod element_constructors;

pub use element::{Cond, Element, COND_LB, DOT_LB, EMPTY, LB};
pub use geometry::{str_width, Col, Width};
pub use printing::{
    oracular_pretty_print, pretty_print, pretty_print_stream, pretty_print_to_string,
    stream_to_string, PrintingError, StreamElement, StreamKind,
};

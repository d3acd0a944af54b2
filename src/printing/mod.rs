mod annotate;
mod linearize;
mod oracle;
mod pretty_print;
mod render;
mod resolve;
mod stream;

pub use oracle::oracular_pretty_print;
pub use pretty_print::{pretty_print, pretty_print_stream, pretty_print_to_string};
pub use render::PrintingError;
pub use stream::{stream_to_string, StreamElement, StreamKind};

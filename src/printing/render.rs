use super::stream::{StreamElement, StreamKind};
use crate::geometry::{str_width, Col, Width};
use crate::infra::span;
use std::io;
use tracing::trace;

#[derive(thiserror::Error, Debug)]
pub enum PrintingError {
    #[error("Failed to write pretty printed output: {0}")]
    Io(#[from] io::Error),
}

/// Print a fully resolved stream to `out`. Every element must have a position, except
/// `NestBegin`.
///
/// Whenever a `GroupBegin` is seen, its position says where the group would end if printed on
/// one line, so comparing it against `right_edge` says whether it fits. If it does, every
/// `Cond` inside is printed flat. If it doesn't, `fitting` is reset to 0, which makes `Cond`s
/// break. Positions are measured in the one-line coordinates of the whole document, so after
/// each line break `right_edge` is moved to wherever the page edge now falls in those
/// coordinates: a `Cond` that ends at column 300 and leaves the cursor at column 4 puts the new
/// right edge at `300 - 4 + width`.
pub fn render<'d, W: io::Write>(
    stream: impl Iterator<Item = StreamElement<'d>>,
    width: Width,
    out: W,
) -> Result<(), PrintingError> {
    span!("render");

    let mut renderer = Renderer::new(width, out);
    for elem in stream {
        renderer.render_elem(elem)?;
    }
    renderer.out.flush()?;
    Ok(())
}

struct Renderer<W: io::Write> {
    out: W,
    width: Width,
    /// Number of open groups known to fit. 0 means the innermost open group is broken.
    fitting: usize,
    /// The page edge, in one-line coordinates. Can go negative when the indentation alone passes
    /// the page width.
    right_edge: isize,
    /// Current output column.
    hpos: Col,
    /// Indentation of each open `Nest`. Last element is innermost.
    indentation: Vec<Col>,
}

impl<W: io::Write> Renderer<W> {
    fn new(width: Width, out: W) -> Renderer<W> {
        Renderer {
            out,
            width,
            fitting: 0,
            right_edge: width as isize,
            hpos: 0,
            indentation: Vec::new(),
        }
    }

    fn render_elem(&mut self, elem: StreamElement) -> Result<(), PrintingError> {
        use StreamKind::*;

        match elem.kind {
            Text(payload) => {
                self.out.write_all(payload.as_bytes())?;
                self.hpos += str_width(payload);
            }
            Cond(cond) => {
                if self.fitting == 0 {
                    self.out.write_all(cond.tail().as_bytes())?;
                    self.newline(expect_hpos(&elem), cond.continuation())?;
                } else {
                    self.out.write_all(cond.small().as_bytes())?;
                    self.hpos += str_width(cond.small());
                }
            }
            LineBreak => {
                self.newline(expect_hpos(&elem), "")?;
                self.fitting = 0;
            }
            GroupBegin => {
                let group_end = expect_hpos(&elem);
                if self.fitting != 0 || group_end as isize <= self.right_edge {
                    self.fitting += 1;
                } else {
                    trace!(group_end, right_edge = self.right_edge, "group breaks");
                    self.fitting = 0;
                }
            }
            GroupEnd => {
                if self.fitting != 0 {
                    self.fitting -= 1;
                }
            }
            NestBegin => self.indentation.push(self.hpos),
            NestEnd => {
                self.indentation.pop();
            }
        }
        Ok(())
    }

    /// Start a new line at the current indentation, followed by `continuation`. `elem_hpos` is the
    /// one-line position of the element causing the break.
    fn newline(&mut self, elem_hpos: Col, continuation: &str) -> Result<(), PrintingError> {
        let indent = self.indentation.last().copied().unwrap_or(0);
        write!(self.out, "\n{:indent$}{}", "", continuation, indent = indent)?;
        self.hpos = indent + str_width(continuation);
        self.right_edge = self.width as isize - self.hpos as isize + elem_hpos as isize;
        trace!(indent, right_edge = self.right_edge, "line break");
        Ok(())
    }
}

fn expect_hpos(elem: &StreamElement) -> Col {
    match elem.hpos {
        Some(hpos) => hpos,
        None => panic!("bug in render: unresolved position on {}", elem),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Cond;

    fn render_to_string(stream: Vec<StreamElement>, width: Width) -> String {
        let mut out = Vec::new();
        render(stream.into_iter(), width, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render_group_decision() {
        let cond = Cond::new(" ", "", "");
        let stream = |group_end| {
            vec![
                StreamElement::with_hpos(StreamKind::GroupBegin, group_end),
                StreamElement::with_hpos(StreamKind::Text("a"), 1),
                StreamElement::with_hpos(StreamKind::Cond(&cond), 2),
                StreamElement::with_hpos(StreamKind::Text("b"), 3),
                StreamElement::with_hpos(StreamKind::GroupEnd, 3),
            ]
        };
        assert_eq!(render_to_string(stream(3), 3), "a b");
        assert_eq!(render_to_string(stream(3), 2), "a\nb");
    }

    #[test]
    fn test_render_indentation_and_tail() {
        let cond = Cond::new("+", "-", ";");
        let stream = vec![
            StreamElement::with_hpos(StreamKind::Text("ab"), 2),
            StreamElement::new(StreamKind::NestBegin),
            StreamElement::with_hpos(StreamKind::Text("c"), 3),
            StreamElement::with_hpos(StreamKind::Cond(&cond), 4),
            StreamElement::with_hpos(StreamKind::Text("d"), 5),
            StreamElement::with_hpos(StreamKind::NestEnd, 5),
            StreamElement::with_hpos(StreamKind::LineBreak, 5),
            StreamElement::with_hpos(StreamKind::Text("e"), 6),
        ];
        assert_eq!(render_to_string(stream, 80), "abc;\n  -d\ne");
    }

    #[test]
    #[should_panic(expected = "bug in render")]
    fn test_render_unresolved_group() {
        render_to_string(vec![StreamElement::new(StreamKind::GroupBegin)], 80);
    }

    struct FailingWriter;

    impl io::Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_render_write_failure() {
        let stream = vec![StreamElement::with_hpos(StreamKind::Text("hello"), 5)];
        let result = render(stream.into_iter(), 80, FailingWriter);
        match result {
            Err(PrintingError::Io(err)) => assert_eq!(err.kind(), io::ErrorKind::BrokenPipe),
            Ok(()) => panic!("expected a write failure"),
        }
    }
}

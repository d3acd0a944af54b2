use super::stream::{StreamElement, StreamKind};
use crate::geometry::{str_width, Col};

/// Fill in the position of every element that ends at a known column: everything except
/// `GroupBegin` and `NestBegin`, whose positions depend on elements that haven't been seen yet.
/// Positions are computed as if the whole document were printed on one line.
pub fn annotate_positions<'d, I>(stream: I) -> PositionAnnotator<I>
where
    I: Iterator<Item = StreamElement<'d>>,
{
    PositionAnnotator {
        stream,
        position: 0,
    }
}

pub struct PositionAnnotator<I> {
    stream: I,
    /// Column just after the last element seen, on one line.
    position: Col,
}

impl<'d, I> Iterator for PositionAnnotator<I>
where
    I: Iterator<Item = StreamElement<'d>>,
{
    type Item = StreamElement<'d>;

    fn next(&mut self) -> Option<StreamElement<'d>> {
        use StreamKind::*;

        let mut elem = self.stream.next()?;
        match elem.kind {
            Text(payload) => self.position += str_width(payload),
            Cond(cond) => self.position += str_width(cond.small()),
            LineBreak | GroupEnd | NestEnd => (),
            GroupBegin | NestBegin => return Some(elem),
        }
        elem.hpos = Some(self.position);
        Some(elem)
    }
}

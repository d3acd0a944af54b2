use super::stream::{StreamElement, StreamKind};
use std::collections::VecDeque;
use tracing::trace;

/// Fill in the position of every `GroupBegin`: the column at which its group ends, on one line.
/// That's the position of the matching `GroupEnd`, so the contents of each open group are held
/// back until its end is seen. Only the groups that are currently open are buffered, never the
/// whole document.
///
/// The input must already have positions for every element except `GroupBegin` and `NestBegin`.
pub fn resolve_groups<'d, I>(stream: I) -> GroupResolver<'d, I>
where
    I: Iterator<Item = StreamElement<'d>>,
{
    GroupResolver {
        stream,
        lookahead: Vec::new(),
        ready: VecDeque::new(),
    }
}

pub struct GroupResolver<'d, I> {
    stream: I,
    /// One buffer per open group, holding its contents so far. Last element is innermost.
    lookahead: Vec<Vec<StreamElement<'d>>>,
    /// Fully resolved elements, waiting to be yielded.
    ready: VecDeque<StreamElement<'d>>,
}

impl<'d, I> GroupResolver<'d, I>
where
    I: Iterator<Item = StreamElement<'d>>,
{
    fn push(&mut self, elem: StreamElement<'d>) {
        match self.lookahead.last_mut() {
            None => self.ready.push_back(elem),
            Some(buffer) => buffer.push(elem),
        }
    }

    fn close_group(&mut self, group_end: StreamElement<'d>) {
        let hpos = match group_end.hpos {
            Some(hpos) => hpos,
            None => panic!("bug in resolve_groups: GroupEnd without a position"),
        };
        let contents = match self.lookahead.pop() {
            Some(contents) => contents,
            None => panic!("bug in resolve_groups: GroupEnd without a GroupBegin"),
        };
        if self.lookahead.is_empty() {
            trace!(hpos, buffered = contents.len(), "resolved outermost group");
        }
        self.push(StreamElement::with_hpos(StreamKind::GroupBegin, hpos));
        match self.lookahead.last_mut() {
            None => self.ready.extend(contents),
            Some(parent) => parent.extend(contents),
        }
        self.push(group_end);
    }
}

impl<'d, I> Iterator for GroupResolver<'d, I>
where
    I: Iterator<Item = StreamElement<'d>>,
{
    type Item = StreamElement<'d>;

    fn next(&mut self) -> Option<StreamElement<'d>> {
        use StreamKind::*;

        loop {
            if let Some(elem) = self.ready.pop_front() {
                return Some(elem);
            }
            let elem = match self.stream.next() {
                Some(elem) => elem,
                None => {
                    if !self.lookahead.is_empty() {
                        panic!("bug in resolve_groups: GroupBegin without a GroupEnd");
                    }
                    return None;
                }
            };
            match elem.kind {
                Text(_) | Cond(_) | LineBreak | NestBegin | NestEnd => self.push(elem),
                GroupBegin => self.lookahead.push(Vec::new()),
                GroupEnd => self.close_group(elem),
            }
        }
    }
}

use super::stream::{StreamElement, StreamKind};
use crate::element::Element;

/// Walk the document depth-first, producing the stream of elements in document order. `Group`s
/// become `GroupBegin ... GroupEnd`, and `Nest`s become `NestBegin GroupBegin ... GroupEnd
/// NestEnd` (every nest is also a group). No positions are filled in yet.
pub fn linearize<'d>(doc: &'d Element) -> Linearizer<'d> {
    Linearizer {
        stack: vec![Work::Visit(doc)],
    }
}

enum Work<'d> {
    Visit(&'d Element),
    Emit(StreamKind<'d>),
}

pub struct Linearizer<'d> {
    /// Work still to do. Last element is next.
    stack: Vec<Work<'d>>,
}

impl<'d> Iterator for Linearizer<'d> {
    type Item = StreamElement<'d>;

    fn next(&mut self) -> Option<StreamElement<'d>> {
        use Element::*;

        loop {
            let element = match self.stack.pop()? {
                Work::Emit(kind) => return Some(StreamElement::new(kind)),
                Work::Visit(element) => element,
            };
            let kind = match element {
                Text(payload) => StreamKind::Text(payload),
                Cond(cond) => StreamKind::Cond(cond),
                LineBreak => StreamKind::LineBreak,
                Concat(children) => {
                    self.stack.extend(children.iter().rev().map(Work::Visit));
                    continue;
                }
                Group(child) => {
                    self.stack.push(Work::Emit(StreamKind::GroupEnd));
                    self.stack.push(Work::Visit(child));
                    StreamKind::GroupBegin
                }
                Nest(child) => {
                    self.stack.push(Work::Emit(StreamKind::NestEnd));
                    self.stack.push(Work::Emit(StreamKind::GroupEnd));
                    self.stack.push(Work::Visit(child));
                    self.stack.push(Work::Emit(StreamKind::GroupBegin));
                    StreamKind::NestBegin
                }
            };
            return Some(StreamElement::new(kind));
        }
    }
}

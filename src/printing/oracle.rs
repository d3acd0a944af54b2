use crate::element::Element;
use crate::geometry::{str_width, Col, Width};

/// For testing!
///
/// Pretty print the document with the given width, walking the document tree directly instead of
/// streaming it. Every group's one-line extent is found by measuring its whole subtree with
/// [`Element::width`], so this is quadratic in the nesting depth and holds the whole document.
/// It should always agree with [`pretty_print`](crate::pretty_print).
pub fn oracular_pretty_print(doc: &Element, width: Width) -> String {
    let mut oracle = Oracle {
        width,
        fitting: 0,
        right_edge: width as isize,
        hpos: 0,
        flat_pos: 0,
        indentation: Vec::new(),
        output: String::new(),
    };
    oracle.pp(doc);
    oracle.output
}

struct Oracle {
    width: Width,
    fitting: usize,
    right_edge: isize,
    hpos: Col,
    /// Position in the one-line layout of the whole document.
    flat_pos: Col,
    indentation: Vec<Col>,
    output: String,
}

impl Oracle {
    fn pp(&mut self, element: &Element) {
        use Element::*;

        match element {
            Text(payload) => {
                self.output.push_str(payload);
                self.hpos += str_width(payload);
                self.flat_pos += str_width(payload);
            }
            Cond(cond) => {
                self.flat_pos += str_width(cond.small());
                if self.fitting == 0 {
                    self.output.push_str(cond.tail());
                    self.newline(cond.continuation());
                } else {
                    self.output.push_str(cond.small());
                    self.hpos += str_width(cond.small());
                }
            }
            LineBreak => {
                self.newline("");
                self.fitting = 0;
            }
            Concat(children) => {
                for child in children {
                    self.pp(child);
                }
            }
            Group(child) => self.pp_group(child),
            Nest(child) => {
                self.indentation.push(self.hpos);
                self.pp_group(child);
                self.indentation.pop();
            }
        }
    }

    fn pp_group(&mut self, child: &Element) {
        let group_end = self.flat_pos + child.width();
        if self.fitting != 0 || group_end as isize <= self.right_edge {
            self.fitting += 1;
        } else {
            self.fitting = 0;
        }
        self.pp(child);
        if self.fitting != 0 {
            self.fitting -= 1;
        }
    }

    fn newline(&mut self, continuation: &str) {
        let indent = self.indentation.last().copied().unwrap_or(0);
        self.output.push('\n');
        self.output.push_str(&" ".repeat(indent));
        self.output.push_str(continuation);
        self.hpos = indent + str_width(continuation);
        self.right_edge = self.width as isize - self.hpos as isize + self.flat_pos as isize;
    }
}

mod common;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use streaming_pretty_printer::element_constructors::{
    concat, cond, cond_lb, dot_lb, group, lb, nest, text,
};
use streaming_pretty_printer::{oracular_pretty_print, pretty_print_to_string, Element};

const NUM_TESTS: u64 = 500;
const MAX_WIDTH: usize = 30;

const WORDS: &[&str] = &["", "a", "bb", "ccc", "dddd", "eeeee", "λμ"];

/// Generate a random document with roughly `size` nodes.
fn random_element(rng: &mut StdRng, size: u32, breaks: bool) -> Element {
    if size <= 1 {
        let leaf_kinds = if breaks { 6 } else { 1 };
        return match rng.gen_range(0..leaf_kinds) {
            0 => text(WORDS[rng.gen_range(0..WORDS.len())]),
            1 | 2 => cond_lb(),
            3 => dot_lb(),
            4 => cond("+", "- ", ";"),
            _ => lb(),
        };
    }
    match rng.gen_range(0..4) {
        0 | 1 => {
            let num_children = rng.gen_range(0..4);
            let mut remaining = size - 1;
            let mut children = Vec::new();
            for i in 0..num_children {
                let child_size = if i + 1 == num_children {
                    remaining
                } else {
                    rng.gen_range(0..=remaining)
                };
                remaining -= child_size;
                children.push(random_element(rng, child_size, breaks));
            }
            concat(children)
        }
        2 => group(random_element(rng, size - 1, breaks)),
        _ => nest(random_element(rng, size - 1, breaks)),
    }
}

fn texts(element: &Element, output: &mut String) {
    match element {
        Element::Text(payload) => output.push_str(payload),
        Element::Cond(_) | Element::LineBreak => (),
        Element::Concat(children) => {
            for child in children {
                texts(child, output);
            }
        }
        Element::Group(child) | Element::Nest(child) => texts(child, output),
    }
}

fn contains_line_break(element: &Element) -> bool {
    match element {
        Element::Text(_) | Element::Cond(_) => false,
        Element::LineBreak => true,
        Element::Concat(children) => children.iter().any(contains_line_break),
        Element::Group(child) | Element::Nest(child) => contains_line_break(child),
    }
}

#[test]
fn random_streaming_agrees_with_oracle() {
    common::init_logging();

    for seed in 0..NUM_TESTS {
        let mut rng = StdRng::seed_from_u64(seed);
        let size = rng.gen_range(1..40);
        let doc = random_element(&mut rng, size, true);
        let width = rng.gen_range(0..MAX_WIDTH);
        let actual = pretty_print_to_string(&doc, width).unwrap();
        let expected = oracular_pretty_print(&doc, width);
        if actual != expected {
            eprintln!(
                "SEED {} WIDTH {}\nDOC: {}\nEXPECTED:\n{}\nACTUAL:\n{}",
                seed, width, doc, expected, actual
            );
            assert_eq!(actual, expected);
        }
    }
}

#[test]
fn random_without_breaks_prints_all_text() {
    for seed in 0..NUM_TESTS {
        let mut rng = StdRng::seed_from_u64(seed);
        let size = rng.gen_range(1..40);
        let doc = random_element(&mut rng, size, false);
        let mut expected = String::new();
        texts(&doc, &mut expected);
        for width in [0, 1, 7, 80] {
            assert_eq!(pretty_print_to_string(&doc, width).unwrap(), expected);
        }
    }
}

#[test]
fn random_fitting_group_is_flat() {
    for seed in 0..NUM_TESTS {
        let mut rng = StdRng::seed_from_u64(seed);
        let size = rng.gen_range(1..40);
        let doc = group(random_element(&mut rng, size, true));
        if contains_line_break(&doc) {
            continue;
        }
        let output = pretty_print_to_string(&doc, doc.width()).unwrap();
        assert!(!output.contains('\n'), "doc {} broke: {:?}", doc, output);
        assert_eq!(output.chars().count(), doc.width());
    }
}

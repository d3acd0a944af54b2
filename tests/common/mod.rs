#![allow(unused)]

use streaming_pretty_printer::{oracular_pretty_print, pretty_print_to_string, Element, Width};
use tracing_subscriber::EnvFilter;

/// Show the printer's tracing output for failing tests, filtered by `RUST_LOG`.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn compare_lines(message: &str, actual: &[&str], expected: &[&str]) {
    if actual != expected {
        eprintln!(
            "{}\nEXPECTED:\n{}\nACTUAL:\n{}\n=========",
            message,
            expected.join("\n"),
            actual.join("\n"),
        );
        assert_eq!(actual, expected);
    }
}

/// Print `doc` both with the streaming printer and with the oracle, and check that both give
/// `expected_lines`.
#[track_caller]
pub fn assert_pp(doc: &Element, width: Width, expected_lines: &[&str]) {
    init_logging();

    let oracle = oracular_pretty_print(doc, width);
    let oracle_lines = oracle.split('\n').collect::<Vec<_>>();
    compare_lines(
        &format!("BAD TEST CASE! ORACLE DISAGREES AT WIDTH {}", width),
        &oracle_lines,
        expected_lines,
    );

    let actual = pretty_print_to_string(doc, width).expect("failed to pretty print");
    let actual_lines = actual.split('\n').collect::<Vec<_>>();
    compare_lines(
        &format!("IN PRETTY PRINTING AT WIDTH {}", width),
        &actual_lines,
        expected_lines,
    );
}

use clap::Parser;
use std::io;
use streaming_pretty_printer::combinators::{dotted_list, funcall};
use streaming_pretty_printer::element_constructors::text;
use streaming_pretty_printer::{pretty_print, pretty_print_stream, stream_to_string, Element};

/// Pretty print a chain of method calls.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Page width, in columns.
    #[arg(short, long, default_value_t = 80)]
    width: usize,

    /// Print the annotated stream instead of the document.
    #[arg(long)]
    stream: bool,
}

fn chain() -> Element {
    let expr = |n: &str| funcall("expr", vec![text(n)]);
    dotted_list(vec![
        expr("5"),
        funcall("add", vec![dotted_list(vec![expr("7"), funcall("frob", vec![])])]),
        funcall(
            "mul",
            vec![
                dotted_list(vec![expr("17")]),
                funcall("mul", vec![dotted_list(vec![expr("17")])]),
                funcall("mul", vec![dotted_list(vec![expr("17")])]),
            ],
        ),
    ])
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let doc = chain();
    if args.stream {
        println!("{}", stream_to_string(pretty_print_stream(&doc)));
    } else {
        pretty_print(&doc, args.width, io::stdout().lock())?;
        println!();
    }
    Ok(())
}

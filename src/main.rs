use std::{fs, path::PathBuf, process::ExitCode};

use clap::{Parser, ValueEnum};
use exprtree::{
    Report,
    engine::render::{LayoutConfig, layout, text_tree},
    error::{Error, ParseError},
    process,
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer};

/// exprtree builds the expression tree of an integer arithmetic expression and
/// shows its traversals, its value and a stack-machine program computing it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells exprtree to read the expression from a file instead.
    #[arg(short, long)]
    file: bool,

    /// Sections to print, in order.
    #[arg(short, long, value_delimiter = ',', default_values_t = [Section::Tree, Section::Traversals, Section::Value, Section::Asm])]
    show: Vec<Section>,

    /// Writes the generated program to this path. A directory receives
    /// `expression.asm`.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Width of the layout canvas.
    #[arg(long, default_value_t = LayoutConfig::default().width)]
    width: f64,

    /// Vertical distance between tree levels in the layout.
    #[arg(long, default_value_t = LayoutConfig::default().level_gap)]
    level_gap: f64,

    /// Horizontal child offset at the root level of the layout.
    #[arg(long, default_value_t = LayoutConfig::default().spread)]
    spread: f64,

    /// Increases log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    Tree,
    Layout,
    Traversals,
    Value,
    Asm,
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = self.to_possible_value()
                       .map(|v| v.get_name().to_string())
                       .unwrap_or_default();
        f.write_str(&name)
    }
}

impl Args {
    fn layout_config(&self) -> LayoutConfig {
        LayoutConfig { width: self.width,
                       level_gap: self.level_gap,
                       spread: self.spread,
                       ..LayoutConfig::default() }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let fmt_layer = fmt::layer().with_writer(std::io::stderr)
                                .with_target(true)
                                .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();
}

fn print_report(report: &Report, args: &Args) {
    for section in &args.show {
        match section {
            Section::Tree => print!("{}", text_tree(&report.tree)),
            Section::Layout => {
                let layout = layout(&report.tree, &args.layout_config());
                for (i, node) in layout.nodes.iter().enumerate() {
                    println!("node {i}: '{}' at ({:.1}, {:.1}) depth {}",
                             node.label, node.x, node.y, node.depth);
                }
                for edge in &layout.edges {
                    println!("edge {} -> {}", edge.parent, edge.child);
                }
            },
            Section::Traversals => println!("{}", report.traversals),
            Section::Value => match &report.value {
                Ok(value) => println!("Result: {value}"),
                Err(e) => println!("Result: {e}"),
            },
            Section::Asm => print!("{}", report.program),
        }
        println!();
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let report = process(&args.contents)?;
    print_report(&report, args);

    if let Some(path) = &args.output {
        let written = report.program.write_to(path)?;
        tracing::info!(path = %written.display(), "program saved");
    }

    Ok(())
}

fn main() -> ExitCode {
    let mut args = Args::parse();
    setup_logging(args.verbose);

    if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => args.contents = script,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Parse(ParseError::EmptyExpression)) => {
            eprintln!("Please enter an expression, for example: exprtree \"2+3*4\"");
            ExitCode::FAILURE
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

use std::{fs::read_to_string, path::PathBuf, process, rc::Rc, time::Instant};

use clap::Parser;
use quasar::{
    errors::errors::Error,
    lexer::lexer::tokenize,
    parser::parser::{parse_with_config, ParserConfig},
    render_error,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse a quasar source file and print its syntax tree
#[derive(Parser, Debug)]
#[command(name = "quasar")]
#[command(version)]
struct Cli {
    /// Source file to parse
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Print the token stream instead of the tree
    #[arg(short, long)]
    tokens: bool,

    /// Log parser progress at debug level
    #[arg(short, long)]
    verbose: bool,

    /// How deeply expressions and blocks may nest
    #[arg(long, value_name = "N", default_value_t = ParserConfig::default().max_depth)]
    max_depth: usize,
}

fn init_tracing(verbose: bool) {
    let filter_level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let file_path = cli.file.display().to_string();
    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.clone());

    let source = match read_to_string(&cli.file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            process::exit(1);
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(source.clone(), Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(error) => fail(&error, &source, &file_path),
    };

    tracing::debug!(elapsed = ?start.elapsed(), "tokenized");

    if cli.tokens {
        for token in &tokens {
            println!("{}", token.debug());
        }
        return;
    }

    let parse_start = Instant::now();
    let config = ParserConfig::default().with_max_depth(cli.max_depth);
    let program = match parse_with_config(tokens, Rc::new(file_name), config) {
        Ok(program) => program,
        Err(error) => fail(&error, &source, &file_path),
    };

    tracing::debug!(elapsed = ?parse_start.elapsed(), total = ?start.elapsed(), "parsed");

    println!("{:#?}", program);
}

fn fail(error: &Error, source: &str, file_path: &str) -> ! {
    eprint!("{}", render_error(error, source, file_path));
    process::exit(1);
}

//! `jsonr`: check whether a document is valid JSON.

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
};

use clap::{ArgAction, Parser};
use json_reader::{ParseOptions, parse_with_options, tokenize};

const INVALID_EXIT_CODE: u8 = 1;
const IO_EXIT_CODE: u8 = 2;

#[derive(Parser)]
#[command(name = "jsonr")]
#[command(about = "Check whether a document is valid JSON", long_about = None)]
#[command(version)]
struct Cli {
    /// File to read; standard input when absent or `-`
    path: Option<PathBuf>,

    /// Ignore tokens after the root value
    #[arg(long)]
    allow_trailing: bool,

    /// Maximum nesting depth of arrays and objects
    #[arg(long, default_value_t = ParseOptions::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Print the token stream instead of parsing
    #[arg(long)]
    tokens: bool,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn read_source(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path),
        _ => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let source = match read_source(cli.path.as_ref()) {
        Ok(source) => source,
        Err(err) => {
            let name = cli
                .path
                .as_ref()
                .map_or_else(|| "<stdin>".into(), |path| path.display().to_string());
            eprintln!("Error: could not read {name}: {err}");
            return ExitCode::from(IO_EXIT_CODE);
        }
    };
    tracing::debug!(bytes = source.len(), "read input");

    if cli.tokens {
        return match tokenize(&source) {
            Ok(tokens) => {
                for token in tokens {
                    println!("{token}");
                }
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("Error: lex error: {err}");
                ExitCode::from(INVALID_EXIT_CODE)
            }
        };
    }

    let options = ParseOptions {
        allow_trailing_tokens: cli.allow_trailing,
        max_depth: cli.max_depth,
    };

    match parse_with_options(&source, options) {
        Ok(value) => {
            tracing::info!(root = value.type_name(), "document is valid");
            println!("Valid JSON");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(stage = %err.stage(), position = ?err.position(), "document is invalid");
            eprintln!("Error: {err}");
            ExitCode::from(INVALID_EXIT_CODE)
        }
    }
}

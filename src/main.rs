use std::{fs::read_to_string, path::PathBuf, process, time::Instant};

use clap::Parser;
use exprlex::{lexer::lexer::tokenize_with, render_error, NumberPolicy};

const SAMPLES: [&str; 5] = [
    "age >= 123",
    "  age    >=    123    ",
    "age     >= 123   ",
    "a113g_e > 0",
    "0-1+22/33*5",
];

/// Tokenize comparison and arithmetic expressions.
#[derive(Parser, Debug)]
#[command(name = "exprlex")]
struct Cli {
    /// Expressions to tokenize. The built-in samples are used when none are given.
    #[arg(value_name = "EXPR")]
    expressions: Vec<String>,

    /// Read the expression from a file instead.
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Split `12a` into a number and an identifier instead of rejecting it.
    #[arg(long)]
    lenient: bool,
}

fn main() {
    let cli = Cli::parse();

    let policy = if cli.lenient {
        NumberPolicy::Lenient
    } else {
        NumberPolicy::Strict
    };

    let inputs: Vec<(String, String)> = if let Some(path) = &cli.file {
        match read_to_string(path) {
            Ok(contents) => vec![(path.to_string_lossy().into_owned(), contents)],
            Err(error) => {
                eprintln!("Failed to read {}: {}", path.display(), error);
                process::exit(1);
            }
        }
    } else if cli.expressions.is_empty() {
        SAMPLES
            .iter()
            .map(|sample| (String::from("<sample>"), sample.to_string()))
            .collect()
    } else {
        cli.expressions
            .iter()
            .map(|expression| (String::from("<input>"), expression.clone()))
            .collect()
    };

    for (name, source) in inputs {
        let start = Instant::now();

        match tokenize_with(&source, policy) {
            Ok(tokens) => {
                println!("{:?}", source);
                for token in &tokens {
                    token.debug();
                }
                println!("Tokenized in {:?}", start.elapsed());
            }
            Err(error) => {
                print!("{}", render_error(&error, &source, &name));
                process::exit(1);
            }
        }
    }
}

//! The Metric Math tokenizer CLI.
//!
//! Provides the `mmathc` command with the following subcommands:
//!
//! - `mmathc tokenize <file>` - Lex a file (or stdin with `-`) and print the
//!   token stream, one token per line
//! - `mmathc config` - Dump the lexical tables and bracket/auto-close pair
//!   configuration as JSON for host editors
//!
//! Options:
//! - `--json` - Emit one JSON object per input line instead of the
//!   human-readable listing

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use mmath_common::LineIndex;
use mmath_lexer::{pairs, tables, tokenize};

#[derive(Parser)]
#[command(name = "mmathc", version, about = "Metric Math tokenizer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lex a Metric Math file and print its token stream
    Tokenize {
        /// Path to the input file, or `-` to read stdin
        file: PathBuf,

        /// Emit one JSON object per input line instead of the human-readable listing
        #[arg(long)]
        json: bool,
    },
    /// Dump the lexical tables and pair configuration as JSON
    Config,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Tokenize { file, json } => run_tokenize(&file, json),
        Commands::Config => run_config(),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

/// Read the input, lex every line with state carry-over, and print tokens.
fn run_tokenize(file: &Path, json: bool) -> Result<(), String> {
    let source = read_input(file)?;
    let lines = tokenize(&source);
    let index = LineIndex::new(&source);

    for (line_no, (line_text, lexed)) in source.split('\n').zip(&lines).enumerate() {
        if json {
            let tokens: Vec<_> = lexed
                .tokens
                .iter()
                .map(|t| {
                    serde_json::json!({
                        "class": t.kind.as_str(),
                        "start": t.span.start,
                        "end": t.span.end,
                        "text": &line_text[t.span.start as usize..t.span.end as usize],
                    })
                })
                .collect();
            let record = serde_json::json!({
                "line": line_no + 1,
                "tokens": tokens,
                "end_stack": lexed.end_stack.states(),
            });
            println!("{}", record);
        } else {
            let line_start = index.line_start(line_no as u32 + 1).unwrap_or(0);
            for t in &lexed.tokens {
                let (line, col) = index.line_col(line_start + t.span.start);
                println!(
                    "{}:{}\t{}\t{:?}",
                    line,
                    col,
                    t.kind.as_str(),
                    &line_text[t.span.start as usize..t.span.end as usize],
                );
            }
        }
    }
    Ok(())
}

/// Dump the static config surface a host editor combines with its own
/// rendering engine: the three lexical tables plus the pair tables.
fn run_config() -> Result<(), String> {
    let config = serde_json::json!({
        "functions": tables::METRIC_MATH_FNS,
        "keywords": tables::METRIC_MATH_KEYWORDS,
        "operators": tables::METRIC_MATH_OPERATORS,
        "brackets": pairs::BRACKET_PAIRS,
        "auto_closing_pairs": pairs::AUTO_CLOSING_PAIRS,
        "surrounding_pairs": pairs::SURROUNDING_PAIRS,
    });
    let rendered = serde_json::to_string_pretty(&config)
        .map_err(|e| format!("failed to render config: {}", e))?;
    println!("{}", rendered);
    Ok(())
}

/// Read the whole input: a file path, or stdin when the path is `-`.
fn read_input(file: &Path) -> Result<String, String> {
    if file.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read stdin: {}", e))?;
        Ok(buf)
    } else {
        std::fs::read_to_string(file)
            .map_err(|e| format!("failed to read '{}': {}", file.display(), e))
    }
}

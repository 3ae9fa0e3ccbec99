use std::{io::Read, path::PathBuf, time::Instant};

use anyhow::Context;
use clap::Parser;
use minifront::{
    ast::printer::pretty_print,
    errors::errors::ErrorTip,
    get_line_at_position,
    lexer::{lexer::tokenize, tokens::group_by_kind},
    parser::parser::parse,
};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

fn main() -> anyhow::Result<()> {
    initialize_logging();

    let args = Minifront::parse();
    let (source, name) = read_source(args.source.as_ref())?;

    let start = Instant::now();
    let scan = tokenize(&source);
    debug!(elapsed = ?start.elapsed(), tokens = scan.tokens.len(), errors = scan.errors.len(), "tokenized");

    let parse_start = Instant::now();
    let tree = parse(&scan.tokens);
    debug!(elapsed = ?parse_start.elapsed(), ok = tree.is_ok(), "parsed");

    if let Format::Json = args.format {
        let report = match &tree {
            Ok(tree) => serde_json::json!({
                "tokens": scan.tokens,
                "lex_errors": scan.errors,
                "tree": tree,
            }),
            Err(error) => serde_json::json!({
                "tokens": scan.tokens,
                "lex_errors": scan.errors,
                "parse_error": {
                    "name": error.get_error_name(),
                    "message": error.to_string(),
                    "position": error.get_position(),
                },
            }),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);

        if tree.is_err() {
            std::process::exit(1);
        }
        return Ok(());
    }

    if args.tokens {
        println!("Tokens:");
        for (kind, values) in group_by_kind(&scan.tokens) {
            println!("{}: {}", kind, values.join(" "));
        }
        println!();
    }

    for error in &scan.errors {
        display_error(
            error.get_error_name(),
            &error.to_string(),
            error.get_tip(),
            &source,
            error.position,
            &name,
        );
    }

    match tree {
        Ok(tree) => {
            print!("{}", pretty_print(&tree));
            Ok(())
        }
        Err(error) => {
            display_error(
                error.get_error_name(),
                &error.to_string(),
                error.get_tip(),
                &source,
                error.get_position(),
                &name,
            );
            std::process::exit(1);
        }
    }
}

fn read_source(path: Option<&PathBuf>) -> anyhow::Result<(String, String)> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok((source, path.display().to_string()))
        }
        _ => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("failed to read source from stdin")?;
            Ok((source, String::from("<stdin>")))
        }
    }
}

fn display_error(
    error_name: &str,
    message: &str,
    tip: ErrorTip,
    source: &str,
    position: usize,
    file: &str,
) {
    /*
        error: message
        -> input.c
           |
        20 | int a = #;
           | --------^
    */

    let (line, line_text, line_pos) = get_line_at_position(source, position);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = tip {
        eprintln!("Error: {}: {}", error_name, message);
    } else {
        eprintln!("Error: {}: {} ({})", error_name, message, tip);
    }
    eprintln!("-> {}", file);
    eprintln!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    eprintln!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    eprintln!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ' || *c == '\t').count();

    (string.chars().skip(start).collect(), start)
}

fn initialize_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_filter(env_filter))
        .init();
}

#[derive(clap::Parser)]
#[clap(
    name = "minifront",
    about = "Tokenize and parse a toy C-like program, then print its syntax tree."
)]
struct Minifront {
    /// Source file to analyze; reads stdin when omitted or `-`
    source: Option<PathBuf>,

    /// Output format
    #[clap(short, long, value_enum, default_value = "text")]
    format: Format,

    /// Print the tokens grouped by kind before the tree
    #[clap(short, long, default_value = "false")]
    tokens: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum Format {
    Text,
    Json,
}

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use kruti_core::corpus::run_reference_corpus;
use kruti_core::document::{convert_run, StyledRun};
use kruti_core::error::InputError;
use kruti_core::output::write_atomic;
use kruti_core::trace_init::init_tracing;
use kruti_core::{LegacyConverter, Settings};

#[derive(Parser)]
#[command(name = "kruti", about = "Unicode Devanagari to Kruti Dev 010 converter")]
struct Cli {
    /// Settings file (TOML); embedded defaults when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert text given directly, from a file, or from stdin
    Convert {
        /// Text to convert
        text: Option<String>,
        /// Read input from this file instead
        #[arg(long, conflicts_with = "text")]
        input: Option<PathBuf>,
        /// Write the converted text to this file
        #[arg(long)]
        output: Option<PathBuf>,
        /// Print segments with their legacy-font flag
        #[arg(long)]
        segments: bool,
        /// Print segments as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply the document-run layer to one plain run and print the runs as JSON
    Runs {
        text: String,
        /// Font family the run starts with
        #[arg(long)]
        font: Option<String>,
    },

    /// Run the built-in reference corpus
    Check,
}

fn main() {
    let cli = Cli::parse();

    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    init_tracing(&settings.logging.filter);

    let converter = LegacyConverter::new();
    let result = match cli.command {
        Command::Convert { text, input, output, segments, json } => run_convert(
            &converter,
            &settings,
            text,
            input.as_deref(),
            output.as_deref(),
            segments,
            json,
        ),
        Command::Runs { text, font } => run_runs(&converter, &settings, text, font),
        Command::Check => run_check(&converter),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Positional text and stdin are direct input and must respect the length
/// limit; whole files are not limited.
fn read_input(text: Option<String>, input: Option<&Path>, max: usize) -> Result<String, InputError> {
    match (text, input) {
        (Some(text), _) => {
            check_length(&text, max)?;
            Ok(text)
        }
        (None, Some(path)) => Ok(fs::read_to_string(path)?),
        (None, None) => read_limited(io::stdin().lock(), max),
    }
}

fn read_limited(mut reader: impl Read, max: usize) -> Result<String, InputError> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    check_length(&buf, max)?;
    Ok(buf)
}

fn check_length(text: &str, max: usize) -> Result<(), InputError> {
    let len = text.chars().count();
    if len > max {
        return Err(InputError::TooLong { len, max });
    }
    Ok(())
}

fn run_convert(
    converter: &LegacyConverter,
    settings: &Settings,
    text: Option<String>,
    input: Option<&Path>,
    output: Option<&Path>,
    segments: bool,
    json: bool,
) -> Result<(), InputError> {
    let source = read_input(text, input, settings.limits.max_text_chars)?;

    if json {
        let segs = converter.convert_with_segments(&source);
        println!("{}", serde_json::to_string_pretty(&segs)?);
    } else if segments {
        for seg in converter.convert_with_segments(&source) {
            let tag = if seg.needs_legacy_font { "legacy" } else { "plain" };
            println!("[{tag}] {:?}", seg.text);
        }
    }

    if let Some(path) = output {
        write_atomic(path, &converter.convert(&source))?;
        eprintln!("Wrote {}", path.display());
    } else if !segments && !json {
        println!("{}", converter.convert(&source));
    }
    Ok(())
}

fn run_runs(
    converter: &LegacyConverter,
    settings: &Settings,
    text: String,
    font: Option<String>,
) -> Result<(), InputError> {
    check_length(&text, settings.limits.max_text_chars)?;
    let run = StyledRun { text, font, embedded: false };
    let runs = convert_run(converter, run, &settings.font.family).into_runs();
    println!("{}", serde_json::to_string_pretty(&runs)?);
    Ok(())
}

fn run_check(converter: &LegacyConverter) -> Result<(), InputError> {
    let outcomes = run_reference_corpus(converter);
    let mut failed = 0;
    for outcome in &outcomes {
        if outcome.passed() {
            println!("  PASS  {} -> {}", outcome.input, outcome.actual);
        } else {
            failed += 1;
            println!(
                "  FAIL  {} -> {} (expected {})",
                outcome.input, outcome.actual, outcome.expected
            );
        }
    }
    println!("\n{} passed, {} failed", outcomes.len() - failed, failed);
    if failed > 0 {
        process::exit(1);
    }
    Ok(())
}

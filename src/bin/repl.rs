use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;

use kruti_core::trace_init::init_tracing;
use kruti_core::{LegacyConverter, Settings};

fn main() -> io::Result<()> {
    let settings = match Settings::load(None) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    init_tracing(&settings.logging.filter);

    let converter = LegacyConverter::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Kruti Dev converter. Type 'exit' to quit.");
    println!("Text shown in {} needs the {} font.", "yellow".yellow(), settings.font.family);
    println!("---------------------------------------------------------------");
    print!("> ");
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim() == "exit" {
            break;
        }

        for segment in converter.convert_with_segments(&line) {
            if segment.needs_legacy_font {
                print!("{}", segment.text.as_str().yellow().bold());
            } else {
                print!("{}", segment.text);
            }
        }
        print!("\n> ");
        stdout.flush()?;
    }
    println!();
    Ok(())
}

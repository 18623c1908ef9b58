use anyhow::Result;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use sasm6502::classify::{parse_line, LineError};
use sasm6502::render::fmt_instruction;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Classify 6502 assembly lines into addressing-mode records"
)]
struct Opts {
    /// Input assembly file (one instruction per line, labels pre-stripped)
    #[arg(value_name = "ASMFILE")]
    input: PathBuf,
    /// Emit one JSON record per line instead of rendered text
    #[arg(long)]
    json: bool,
    /// Report bad lines and continue instead of stopping at the first error
    #[arg(long)]
    keep_going: bool,
}

fn run(
    text: &str,
    json: bool,
    keep_going: bool,
    out: &mut dyn Write,
    errs: &mut dyn Write,
) -> Result<()> {
    for (i, line) in text.lines().enumerate() {
        match parse_line(line) {
            Ok(None) => {}
            Ok(Some(instr)) => {
                if json {
                    writeln!(out, "{}", serde_json::to_string(&instr)?)?;
                } else {
                    writeln!(out, "{}", fmt_instruction(&instr))?;
                }
            }
            Err(source) => {
                let err = LineError {
                    number: i + 1,
                    text: line.trim().to_string(),
                    source,
                };
                if keep_going {
                    writeln!(errs, "error: {err}: {}", err.source)?;
                } else {
                    return Err(err.into());
                }
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    let text = std::fs::read_to_string(&opts.input)?;
    run(
        &text,
        opts.json,
        opts.keep_going,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )
}

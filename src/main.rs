use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

use pattern_expander::logging::{init_logging, level_from_verbosity};
use pattern_expander::{Rule, expand_iter, expansion_count};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pattern with placeholder runs, e.g. `img-aaa.png`
    #[arg(value_name = "PATTERN")]
    pattern: String,

    /// Rule definition `VAR[/PAD]=VALUES`, e.g. `a=1..12` or `c/_=red,blue`
    #[arg(short = 'r', long = "rule", value_name = "RULE")]
    rules: Vec<Rule>,

    /// Write results to a file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Only print how many strings the expansion produces
    #[arg(long)]
    count: bool,

    /// Fail if the expansion would produce more than N strings
    #[arg(long, value_name = "N")]
    max: Option<usize>,

    /// More diagnostics on stderr (repeatable)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = init_logging(level_from_verbosity(args.verbose)) {
        eprintln!("{err}");
        std::process::exit(1);
    }
    if let Err(err) = run(&args) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let total = expansion_count(&args.pattern, &args.rules);
    if let Some(max) = args.max
        && total > max
    {
        bail!("expansion would produce {total} strings, more than --max {max}");
    }
    if args.count {
        println!("{total}");
        return Ok(());
    }

    let results = expand_iter(&args.pattern, &args.rules);
    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_lines(BufWriter::new(file), results)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), count = total, "wrote expansions");
        }
        None => {
            write_lines(BufWriter::new(io::stdout().lock()), results)
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}

fn write_lines<W: Write>(mut out: W, lines: impl Iterator<Item = String>) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

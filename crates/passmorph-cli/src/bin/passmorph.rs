// passmorph: Generate password candidates from seed words.
//
// Seeds are mutated (look-alike substitution, casing, insertion, deletion,
// reversal, doubling, separators), wrapped in common prefixes, suffixes and
// keyboard walks, and combined into 2- and 3-word concatenations. Output goes
// to a text file, one candidate per line, until the ceiling is reached.
//
// Usage:
//   passmorph [--seeds LIST] [-o PATH] [--ceiling N] [--max-pool N]
//
// Without --seeds, one comma-separated line is read from stdin.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use passmorph_core::tables::DEFAULT_CEILING;
use passmorph_gen::{GeneratorConfig, PasswordGenerator, StopReason};

#[derive(Parser)]
#[command(
    name = "passmorph",
    about = "Derive a bounded set of password candidates from seed words",
    long_about = None
)]
struct Args {
    /// Comma-separated seed words (prompted on stdin if omitted)
    #[arg(short = 's', long = "seeds")]
    seeds: Option<String>,

    /// Output file, truncated at start
    #[arg(short = 'o', long = "output", default_value = passmorph_cli::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Maximum number of candidates to write
    #[arg(long = "ceiling", default_value_t = DEFAULT_CEILING)]
    ceiling: u64,

    /// Fail instead of growing the multi-word pool past this many variants
    #[arg(long = "max-pool")]
    max_pool: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    passmorph_cli::init_logging();

    let seeds = match &args.seeds {
        Some(list) => passmorph_cli::parse_seeds(list),
        None => passmorph_cli::prompt_seeds(io::stdin().lock(), io::stdout())
            .context("failed to read seed words from stdin")?,
    };
    info!("seeds: {seeds:?}");

    let mut sink = passmorph_cli::open_output(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;

    let generator = PasswordGenerator::new(GeneratorConfig {
        ceiling: args.ceiling,
        max_pool: args.max_pool,
    });
    let summary = generator
        .run(&seeds, &mut sink)
        .with_context(|| format!("generation into {} aborted", args.output.display()))?;

    match summary.stop {
        StopReason::CeilingReached => info!(
            "wrote {} candidates to {} (ceiling reached)",
            summary.emitted,
            args.output.display()
        ),
        StopReason::Exhausted => info!(
            "wrote {} candidates to {}",
            summary.emitted,
            args.output.display()
        ),
    }
    Ok(())
}

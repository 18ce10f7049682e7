// passmorph-cli: shared utilities for the command-line generator.

use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;

use passmorph_gen::LineSink;

/// Output file written when no path is given.
pub const DEFAULT_OUTPUT: &str = "ultimate_passwords.txt";

/// Prompt shown before reading seeds from stdin.
const SEED_PROMPT: &str = "Enter your seed words (comma-separated): ";

/// Split one comma-separated line into seeds.
///
/// Each token is trimmed; tokens that are empty after trimming are dropped.
/// An empty result is valid and produces an empty run.
pub fn parse_seeds(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Show the seed prompt on `prompt` and parse one line from `input`.
///
/// End of input counts as an empty line.
pub fn prompt_seeds<R: BufRead, W: Write>(mut input: R, mut prompt: W) -> io::Result<Vec<String>> {
    prompt.write_all(SEED_PROMPT.as_bytes())?;
    prompt.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(parse_seeds(&line))
}

/// Create (or truncate) the output file and wrap it in a buffered line sink.
pub fn open_output(path: &Path) -> io::Result<LineSink<BufWriter<File>>> {
    let file = File::create(path)?;
    Ok(LineSink::new(BufWriter::new(file)))
}

/// Initialise `env_logger` with an `info` default; `RUST_LOG` overrides it.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use passmorph_gen::CandidateSink;

    #[test]
    fn parse_trims_and_drops_empty_tokens() {
        assert_eq!(parse_seeds(" cat , dog,,  ,fish "), vec!["cat", "dog", "fish"]);
    }

    #[test]
    fn parse_empty_line() {
        assert!(parse_seeds("").is_empty());
        assert!(parse_seeds(" , ,\n").is_empty());
    }

    #[test]
    fn parse_keeps_inner_spaces() {
        assert_eq!(parse_seeds("new york,la"), vec!["new york", "la"]);
    }

    #[test]
    fn prompt_reads_one_line() {
        let input = b"alpha, beta\ngamma\n";
        let mut prompt = Vec::new();
        let seeds = prompt_seeds(&input[..], &mut prompt).unwrap();
        assert_eq!(seeds, vec!["alpha", "beta"]);
        assert_eq!(String::from_utf8(prompt).unwrap(), SEED_PROMPT);
    }

    #[test]
    fn prompt_at_end_of_input() {
        let seeds = prompt_seeds(&b""[..], io::sink()).unwrap();
        assert!(seeds.is_empty());
    }

    #[test]
    fn open_output_truncates() {
        let path = std::env::temp_dir().join(format!("passmorph-test-{}.txt", std::process::id()));
        std::fs::write(&path, "stale\nlines\n").unwrap();
        {
            let mut sink = open_output(&path).unwrap();
            sink.accept("fresh").unwrap();
            sink.finish().unwrap();
        }
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh\n");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn open_output_in_missing_directory_fails() {
        let path = std::env::temp_dir()
            .join("passmorph-missing-dir")
            .join("nested")
            .join("out.txt");
        assert!(open_output(&path).is_err());
    }
}

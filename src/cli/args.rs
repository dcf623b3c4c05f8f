use clap::Parser;
use std::path::PathBuf;

use crate::config::DEFAULT_ABBREVIATIONS_PATH;

#[derive(Parser, Debug)]
#[command(name = "pdf-abbrev")]
#[command(
    author,
    version,
    about = "Compress PDF text by substituting configured abbreviations"
)]
pub struct Args {
    /// Input PDF file path
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output PDF file path (defaults to input with .min.pdf extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Abbreviation dictionary (JSON object of term to abbreviation)
    #[arg(short, long, default_value = DEFAULT_ABBREVIATIONS_PATH)]
    pub abbreviations: PathBuf,

    /// Append reference pages listing the replacements made
    #[arg(short = 'r', long)]
    pub reference_pages: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Get the output path, defaulting to input with a .min.pdf extension
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension("min.pdf"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        let args = Args {
            input: PathBuf::from("report.pdf"),
            output: None,
            abbreviations: PathBuf::from("config/abbreviations.json"),
            reference_pages: false,
            verbose: 0,
        };
        assert_eq!(args.output_path(), PathBuf::from("report.min.pdf"));
    }

    #[test]
    fn test_explicit_output_path_wins() {
        let args = Args {
            input: PathBuf::from("report.pdf"),
            output: Some(PathBuf::from("out/minimized.pdf")),
            abbreviations: PathBuf::from("config/abbreviations.json"),
            reference_pages: false,
            verbose: 0,
        };
        assert_eq!(args.output_path(), PathBuf::from("out/minimized.pdf"));
    }
}

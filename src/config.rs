//! Command line arguments and their resolution into a run configuration.

use crate::error::{Result, TagCloudError};
use crate::font::ScaleMode;
use crate::html::DEFAULT_STYLESHEETS;
use crate::tokenizer::SeparatorSet;
use clap::Parser;
use std::io::{BufRead, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate an HTML tag cloud of the most frequent words in a text file", long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Args {
    /// Text file to read [prompted for if omitted]
    pub input: Option<PathBuf>,

    /// HTML file to write, created or overwritten [prompted for if omitted]
    pub output: Option<PathBuf>,

    /// Number of words in the cloud, a positive integer [prompted for if omitted]
    pub count: Option<String>,

    /// How counts map to font sizes
    #[arg(long, value_enum, default_value_t = ScaleMode::Shift)]
    pub scale: ScaleMode,

    /// Extra characters that end a word, on top of the default set
    #[arg(long, value_name = "CHARS", default_value_t = String::new())]
    pub separators: String,

    /// Stylesheet to link from the page; repeat for several [default: the tagcloud.css pair]
    #[arg(long = "stylesheet", value_name = "HREF")]
    pub stylesheets: Vec<String>,

    /// Log progress to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub num_words: NonZeroUsize,
    pub scale: ScaleMode,
    pub separators: SeparatorSet,
    pub stylesheets: Vec<String>,
}

/// Parses a word count. Only plain digit strings above zero are accepted.
pub fn parse_word_count(raw: &str) -> Result<NonZeroUsize> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TagCloudError::InvalidCount(raw.to_string()));
    }
    trimmed
        .parse::<NonZeroUsize>()
        .map_err(|_| TagCloudError::InvalidCount(raw.to_string()))
}

/// Writes `label`, then reads one line. The trailing newline is stripped.
pub fn prompt<R: BufRead, W: Write>(label: &str, input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "{label}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

impl Args {
    /// Fills in missing arguments from the console and validates the count.
    ///
    /// Prompts follow the order input, output, count. The count is checked before
    /// anything touches the filesystem.
    pub fn resolve<R: BufRead, W: Write>(self, console_in: &mut R, console_out: &mut W) -> Result<Config> {
        let input = match self.input {
            Some(path) => path,
            None => prompt("Enter file for input: ", console_in, console_out)?.into(),
        };
        let output = match self.output {
            Some(path) => path,
            None => prompt("Enter file for output: ", console_in, console_out)?.into(),
        };
        let raw_count = match self.count {
            Some(count) => count,
            None => prompt("Enter number of words to be read: ", console_in, console_out)?,
        };
        let num_words = parse_word_count(&raw_count)?;

        let stylesheets = if self.stylesheets.is_empty() {
            DEFAULT_STYLESHEETS.iter().map(|s| s.to_string()).collect()
        } else {
            self.stylesheets
        };

        Ok(Config {
            input,
            output,
            num_words,
            scale: self.scale,
            separators: SeparatorSet::with_extra(self.separators.chars()),
            stylesheets,
        })
    }
}

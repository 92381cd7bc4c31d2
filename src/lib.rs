//! Word frequency tag clouds.
//!
//! Text is split into words, counted case-insensitively, trimmed to the most frequent
//! entries and written out as an HTML page where font size follows frequency.

pub mod config;
pub mod counter;
pub mod error;
pub mod font;
pub mod html;
pub mod render;
pub mod select;
pub mod tokenizer;

use crate::config::Config;
use crate::error::{Result, TagCloudError};
use crate::render::Report;
use std::fs::File;
use std::io::{BufWriter, Write};

/// What a completed run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub distinct_words: usize,
    pub selected_words: usize,
}

/// Reads `config.input`, and writes the tag cloud to `config.output`.
///
/// The output file is only created once the input has been fully counted, so a
/// failed read leaves any existing output untouched.
#[tracing::instrument(skip_all, fields(input = %config.input.display(), output = %config.output.display()))]
pub fn run(config: &Config) -> Result<Summary> {
    let table = counter::count_file(&config.input, &config.separators)?;
    let distinct_words = table.len();

    let selection = select::trim(table, config.num_words.get());
    tracing::info!(distinct_words, selected = selection.len(), "selected top words");
    let report = Report::new(selection, config.scale);

    let write_error = |source: std::io::Error| TagCloudError::OutputWrite {
        path: config.output.clone(),
        source,
    };
    let file = File::create(&config.output).map_err(|source| TagCloudError::OutputOpen {
        path: config.output.clone(),
        source,
    })?;
    let mut out = BufWriter::new(file);
    let source_name = config.input.display().to_string();
    let selected_words = html::write_document(&mut out, &source_name, report, &config.stylesheets)
        .map_err(write_error)?;
    out.flush().map_err(write_error)?;

    Ok(Summary {
        distinct_words,
        selected_words,
    })
}

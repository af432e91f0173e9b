//! `lit segments` command implementation.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use lit_renderer::Language;
use lit_segments::{Segment, segment_source};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the segments command.
#[derive(Args)]
pub(crate) struct SegmentsArgs {
    /// Source file to segment.
    file: PathBuf,

    /// Enable verbose output (log every segmentation decision).
    #[arg(short, long)]
    pub verbose: bool,
}

impl SegmentsArgs {
    /// Execute the segments command.
    ///
    /// # Errors
    ///
    /// Returns an error if the file has no known language or cannot be read.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let language = Language::from_path(&self.file)?;
        let contents = fs::read_to_string(&self.file)?;
        let file = segment_source(&contents, language.entry_marker());

        output.info(&format!(
            "{}: {} segments ({})",
            self.file.display(),
            file.segments.len(),
            language.name()
        ));
        for (idx, segment) in file.segments.iter().enumerate() {
            output.info(&format!("{:>3} {}", idx + 1, describe(segment)));
            if let Some(preview) = preview(segment) {
                output.detail(&format!("    {preview}"));
            }
        }

        Ok(())
    }
}

/// Kind label of a segment, with its line count.
fn describe(segment: &Segment) -> String {
    let (kind, text) = if segment.has_docs() {
        ("docs", &segment.docs)
    } else {
        ("code", &segment.code)
    };
    let lines = text.lines().count();
    let mut label = format!("{kind} ({lines} line{})", if lines == 1 { "" } else { "s" });
    if segment.is_entry_point {
        label.push_str(" [entry]");
    }
    label
}

/// First line of a segment's text.
fn preview(segment: &Segment) -> Option<&str> {
    let text = if segment.has_docs() {
        &segment.docs
    } else {
        &segment.code
    };
    text.lines().next().filter(|line| !line.trim().is_empty())
}

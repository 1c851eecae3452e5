//! Changelog generation

use std::path::PathBuf;

use relnotes_core::Result;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::classifier::Classifier;
use crate::formatter::{SectionFormatter, UnderlineFormatter};
use crate::types::SectionMap;
use crate::writer::{ChangelogWriter, FileWriter};

/// Where, if anywhere, rendered notes should be stored
#[derive(Debug, Clone, Default)]
pub struct WriteTarget {
    /// Directory receiving the notes file
    pub dir: PathBuf,
    /// Version code naming the file; nothing is written without one
    pub version: Option<String>,
    /// Render only, never write
    pub read_only: bool,
}

impl WriteTarget {
    /// Target writing `{version}.txt` into `dir`
    pub fn new(dir: impl Into<PathBuf>, version: Option<String>) -> Self {
        Self {
            dir: dir.into(),
            version,
            read_only: false,
        }
    }

    /// Never write
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }
}

/// Result of a full generate run
#[derive(Debug, Clone, Serialize)]
pub struct ChangelogOutput {
    /// Rendered release notes
    pub notes: String,
    /// Classified sections the notes were rendered from
    pub sections: SectionMap,
    /// File the notes were written to
    pub written: Option<PathBuf>,
}

/// Changelog generator
pub struct ChangelogGenerator {
    classifier: Classifier,
    formatter: Box<dyn SectionFormatter>,
    writer: Box<dyn ChangelogWriter>,
}

impl ChangelogGenerator {
    /// Create a new generator with the underline formatter and file writer
    pub fn new(classifier: Classifier) -> Self {
        Self {
            classifier,
            formatter: Box::new(UnderlineFormatter::new()),
            writer: Box::new(FileWriter::new()),
        }
    }

    /// Use a custom formatter
    pub fn with_formatter<F: SectionFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Use a custom writer
    pub fn with_writer<W: ChangelogWriter + 'static>(mut self, writer: W) -> Self {
        self.writer = Box::new(writer);
        self
    }

    /// Classify raw log text
    pub fn generate(&self, raw: &str) -> Result<SectionMap> {
        self.classifier.classify(raw)
    }

    /// Format classified sections to string
    pub fn format(&self, sections: &SectionMap) -> String {
        self.formatter.format(sections)
    }

    /// Generate and format in one step
    #[instrument(skip(self, raw), fields(input_len = raw.len()))]
    pub fn generate_formatted(&self, raw: &str) -> Result<String> {
        let sections = self.generate(raw)?;
        let output = self.format(&sections);
        debug!(output_len = output.len(), "changelog formatted");
        Ok(output)
    }

    /// Generate, format and store release notes for `target`
    #[instrument(skip(self, raw, target), fields(version = ?target.version, read_only = target.read_only))]
    pub fn run(&self, raw: &str, target: &WriteTarget) -> Result<ChangelogOutput> {
        info!("generating release notes");
        let sections = self.generate(raw)?;
        let notes = self.format(&sections);

        let written = match (&target.version, target.read_only) {
            (Some(version), false) => Some(self.writer.write(&target.dir, version, &notes)?),
            (Some(_), true) => {
                debug!("read-only run, skipping write");
                None
            }
            (None, _) => {
                warn!("No version code provided, so could not write file");
                None
            }
        };

        Ok(ChangelogOutput {
            notes,
            sections,
            written,
        })
    }
}

//! relnotes Changelog - Prefix-based release notes
//!
//! This crate files commit-message lines into sections by their leading
//! keyword and renders the sections as release notes.

pub mod classifier;
pub mod formatter;
pub mod generator;
pub mod types;
pub mod writer;

pub use classifier::{Classifier, ClassifierConfig};
pub use formatter::{SectionFormatter, UnderlineFormatter};
pub use generator::{ChangelogGenerator, ChangelogOutput, WriteTarget};
pub use types::{EntryCase, Section, SectionMap};
pub use writer::{ChangelogWriter, FileWriter};

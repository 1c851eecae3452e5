//! Changelog formatters

mod underline;

pub use underline::UnderlineFormatter;

use crate::types::SectionMap;

/// Trait for changelog formatters
pub trait SectionFormatter: Send + Sync {
    /// Render classified sections to text
    fn format(&self, sections: &SectionMap) -> String;
}

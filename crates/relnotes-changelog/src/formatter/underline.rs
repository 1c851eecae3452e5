//! Underlined-title plain text formatter

use tracing::{debug, instrument};

use super::SectionFormatter;
use crate::types::SectionMap;

/// Renders each non-empty section as an `<u>Title</u>` line followed by its
/// entries and one blank line.
///
/// Store listings and in-app "what's new" views read this markup, so the
/// layout is fixed.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnderlineFormatter;

impl UnderlineFormatter {
    /// Create a new underline formatter
    pub fn new() -> Self {
        Self
    }
}

impl SectionFormatter for UnderlineFormatter {
    #[instrument(skip(self, sections), fields(section_count = sections.len()))]
    fn format(&self, sections: &SectionMap) -> String {
        let mut output = String::new();

        for section in sections {
            if section.is_empty() {
                continue;
            }

            output.push_str(&format!("<u>{}</u>\n", section.title));
            for entry in &section.entries {
                output.push_str(entry);
                output.push('\n');
            }
            output.push('\n');
        }

        debug!(output_len = output.len(), "release notes formatted");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SectionMap;

    fn sections(data: Vec<(&str, Vec<&str>)>) -> SectionMap {
        let mut map = SectionMap::new();
        for (title, entries) in data {
            let idx = map.push_section(title);
            for entry in entries {
                map.add_entry(idx, entry.to_string());
            }
        }
        map
    }

    #[test]
    fn test_format_basic() {
        let map = sections(vec![
            ("Fixed", vec!["random bug", "other bug"]),
            ("Added", vec!["new feature"]),
            ("Other", vec!["Do other thing"]),
        ]);

        assert_eq!(
            UnderlineFormatter::new().format(&map),
            "<u>Fixed</u>\nrandom bug\nother bug\n\n<u>Added</u>\nnew feature\n\n<u>Other</u>\nDo other thing\n\n"
        );
    }

    #[test]
    fn test_skips_empty_sections() {
        let map = sections(vec![
            ("Fixed", vec!["bug"]),
            ("Added", vec![]),
            ("Other", vec!["thing"]),
        ]);

        assert_eq!(
            UnderlineFormatter::new().format(&map),
            "<u>Fixed</u>\nbug\n\n<u>Other</u>\nthing\n\n"
        );
    }

    #[test]
    fn test_all_empty_renders_nothing() {
        let map = sections(vec![("Fixed", vec![]), ("Other", vec![])]);
        assert_eq!(UnderlineFormatter::new().format(&map), "");
        assert_eq!(UnderlineFormatter::new().format(&SectionMap::new()), "");
    }

    #[test]
    fn test_blank_entry_kept() {
        let map = sections(vec![("Other", vec!["", "thing"])]);
        assert_eq!(
            UnderlineFormatter::new().format(&map),
            "<u>Other</u>\n\nthing\n\n"
        );
    }
}

//! Text normalization shared by the classifier

use crate::types::EntryCase;

/// Collapse every pair of consecutive line breaks into one.
///
/// `git log --format=%B` separates messages with an empty line. Pairs are
/// replaced left to right without overlap, so three breaks become two.
pub fn collapse_blank_lines(text: &str) -> String {
    text.replace("\n\n", "\n")
}

/// Uppercase the first character and lowercase the rest
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Trim an entry and apply the configured casing
pub fn normalize_entry(text: &str, case: EntryCase) -> String {
    let trimmed = text.trim();
    match case {
        EntryCase::Preserve => trimmed.to_string(),
        EntryCase::Capitalize => capitalize(trimmed),
    }
}

/// Drop the first `count` characters of `line`
pub fn skip_chars(line: &str, count: usize) -> &str {
    match line.char_indices().nth(count) {
        Some((offset, _)) => &line[offset..],
        None => "",
    }
}

/// Lazy iterator over the lines of a normalized log.
///
/// Both `\n` and `\r\n` end a line. A trailing line break does not produce
/// an extra empty line.
#[derive(Debug, Clone)]
pub struct LogLines<'a> {
    inner: std::str::Lines<'a>,
}

impl<'a> LogLines<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            inner: text.lines(),
        }
    }
}

impl<'a> Iterator for LogLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_blank_lines() {
        assert_eq!(collapse_blank_lines("a\n\nb\n\n"), "a\nb\n");
        assert_eq!(collapse_blank_lines("a\n\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_lines("a\nb"), "a\nb");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("other"), "Other");
        assert_eq!(capitalize("fIXED"), "Fixed");
        assert_eq!(capitalize("random bug"), "Random bug");
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_normalize_entry() {
        assert_eq!(normalize_entry("  random bug \n", EntryCase::Preserve), "random bug");
        assert_eq!(normalize_entry("  random bug \n", EntryCase::Capitalize), "Random bug");
        assert_eq!(normalize_entry("   ", EntryCase::Capitalize), "");
    }

    #[test]
    fn test_skip_chars() {
        assert_eq!(skip_chars("Fixed random bug", 5), " random bug");
        assert_eq!(skip_chars("Fixé bug", 4), " bug");
        assert_eq!(skip_chars("Fix", 5), "");
    }

    #[test]
    fn test_log_lines() {
        let lines: Vec<&str> = LogLines::new("a\r\nb\n\nc\n").collect();
        assert_eq!(lines, vec!["a", "b", "", "c"]);
        assert_eq!(LogLines::new("").count(), 0);
    }
}

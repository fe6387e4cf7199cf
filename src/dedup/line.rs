//! Line entries and normalization.

/// Deduplication key for a line: surrounding whitespace stripped, lower-cased.
///
/// Returns `None` for blank lines, which never take part in deduplication.
pub fn normalize(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// A raw line, terminator included, with its normalized form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEntry<'a> {
    /// 1-based line number.
    pub number: usize,
    pub raw: &'a str,
    pub normalized: Option<String>,
}

impl<'a> LineEntry<'a> {
    /// Split file content into entries, keeping each line's terminator so
    /// that surviving lines can be written back verbatim.
    pub fn parse(content: &'a str) -> impl Iterator<Item = LineEntry<'a>> {
        content
            .split_inclusive('\n')
            .enumerate()
            .map(|(i, raw)| LineEntry {
                number: i + 1,
                raw,
                normalized: normalize(raw),
            })
    }

    /// The line text without surrounding whitespace.
    pub fn text(&self) -> &'a str {
        self.raw.trim()
    }

    pub fn is_blank(&self) -> bool {
        self.normalized.is_none()
    }
}

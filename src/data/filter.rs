// ============================================================
// Layer 4 — Filename Prefix Filter
// ============================================================
// Decides which files belong to a label. The test is purely on
// the file name, never on the directory it lives in:
//
//   d_hilton_3.txt   prefix 'd' → match
//   td.txt           prefix 'd' → no match (starts with 't')
//   d_hilton_3.TXT   prefix 'd' → no match (extension is exact)
//
// The polarity/fold directories of op_spam are a convention of
// the data provider and are not checked here.

use std::path::Path;

/// The only file extension the scanner reads
pub const TEXT_EXTENSION: &str = ".txt";

/// Accepts `.txt` file names that start with one character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixFilter {
    prefix: char,
}

impl PrefixFilter {
    /// Filter for names starting with `prefix`; used literally,
    /// no validation beyond being a single char.
    pub fn new(prefix: char) -> Self {
        Self { prefix }
    }

    /// The character this filter tests for
    pub fn prefix(&self) -> char {
        self.prefix
    }

    /// Case-sensitive prefix test plus exact `.txt` suffix.
    pub fn matches_name(&self, file_name: &str) -> bool {
        file_name.starts_with(self.prefix) && file_name.ends_with(TEXT_EXTENSION)
    }

    /// File names that are not valid UTF-8 never match.
    pub fn matches_path(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| self.matches_name(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_prefix_name_matches() {
        assert!(PrefixFilter::new('d').matches_name("d.txt"));
    }

    #[test]
    fn test_prefix_is_not_substring() {
        let d = PrefixFilter::new('d');
        let t = PrefixFilter::new('t');
        assert!(!d.matches_name("td.txt"));
        assert!(t.matches_name("td.txt"));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!PrefixFilter::new('d').matches_name("D_1.txt"));
    }

    #[test]
    fn test_extension_must_be_exact() {
        let d = PrefixFilter::new('d');
        assert!(!d.matches_name("d_1.TXT"));
        assert!(!d.matches_name("d_1.txt.bak"));
        assert!(!d.matches_name("d_1"));
    }

    #[test]
    fn test_matches_path_uses_file_name_only() {
        let d = PrefixFilter::new('d');
        assert!(d.matches_path(Path::new("truthful/fold1/d_1.txt")));
        assert!(!d.matches_path(Path::new("deceptive/fold1/t_1.txt")));
    }
}

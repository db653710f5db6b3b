//! Output path derivation.

use std::path::{Path, PathBuf};

/// Derives the tangled output path for a document.
///
/// A trailing `.{document_extension}` on the file name is replaced with
/// `.{source_extension}`. Only a true suffix counts: `archive.md.bak` is left
/// alone, as is any `.md` in a directory name. Paths without the suffix, or
/// whose file name is not valid UTF-8, come back unchanged.
pub fn derive_output_path(
    document: &Path,
    document_extension: &str,
    source_extension: &str,
) -> PathBuf {
    let suffix = format!(".{}", document_extension);

    let Some(name) = document.file_name().and_then(|n| n.to_str()) else {
        return document.to_path_buf();
    };
    match name.strip_suffix(&suffix) {
        Some(stem) => document.with_file_name(format!("{}.{}", stem, source_extension)),
        None => document.to_path_buf(),
    }
}

/// Returns true if tangling `document` would write over it.
pub fn is_same_path(document: &Path, output: &Path) -> bool {
    document == output
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn derive(path: &str) -> PathBuf {
        derive_output_path(Path::new(path), "md", "py")
    }

    #[test]
    fn test_trailing_extension() {
        assert_eq!(derive("notes.md"), PathBuf::from("notes.py"));
    }

    #[test]
    fn test_nested_path() {
        assert_eq!(derive("docs/intro/1_start.md"), PathBuf::from("docs/intro/1_start.py"));
        assert_eq!(derive("./notes.md"), PathBuf::from("./notes.py"));
    }

    #[test]
    fn test_non_trailing_extension_is_kept() {
        assert_eq!(derive("archive.md.bak"), PathBuf::from("archive.md.bak"));
        assert_eq!(derive("notes.mdx"), PathBuf::from("notes.mdx"));
    }

    #[test]
    fn test_directory_with_extension_is_kept() {
        assert_eq!(derive("site.md/readme.txt"), PathBuf::from("site.md/readme.txt"));
        assert_eq!(derive("site.md/page.md"), PathBuf::from("site.md/page.py"));
    }

    #[test]
    fn test_only_last_suffix_replaced() {
        assert_eq!(derive("notes.md.md"), PathBuf::from("notes.md.py"));
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(derive("NOTES.MD"), PathBuf::from("NOTES.MD"));
    }

    #[test]
    fn test_dot_file() {
        assert_eq!(derive(".md"), PathBuf::from(".py"));
    }

    #[test]
    fn test_custom_extensions() {
        let out = derive_output_path(Path::new("lib.lit"), "lit", "rs");
        assert_eq!(out, PathBuf::from("lib.rs"));
    }

    #[test]
    fn test_same_path() {
        let doc = Path::new("notes.txt");
        assert!(is_same_path(doc, &derive("notes.txt")));
        assert!(!is_same_path(Path::new("notes.md"), &derive("notes.md")));
    }
}

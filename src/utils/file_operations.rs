/// Split a filename into (stem, extension) at the last dot.
///
/// The extension keeps its leading dot. A dot at position zero belongs to
/// the stem, so hidden files like `.gitignore` have no extension.
pub fn split_file_name(name: &str) -> (&str, Option<&str>) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => (&name[..idx], Some(&name[idx..])),
        _ => (name, None),
    }
}

/// Check if an extension is in the allow-list.
///
/// An empty list accepts everything. List entries may be written with or
/// without the leading dot; comparison is ASCII case-insensitive.
pub fn matches_extensions(extension: Option<&str>, extensions: &[String]) -> bool {
    if extensions.is_empty() {
        return true;
    }

    extension
        .map(|ext| {
            let bare = ext.trim_start_matches('.');
            extensions
                .iter()
                .any(|target| target.eq_ignore_ascii_case(ext) || target.eq_ignore_ascii_case(bare))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_file_name() {
        assert_eq!(split_file_name("report.csv"), ("report", Some(".csv")));
        assert_eq!(
            split_file_name("archive.tar.gz"),
            ("archive.tar", Some(".gz"))
        );
        assert_eq!(split_file_name("README"), ("README", None));
    }

    #[test]
    fn test_split_file_name_hidden_files() {
        assert_eq!(split_file_name(".gitignore"), (".gitignore", None));
        assert_eq!(split_file_name(".env.local"), (".env", Some(".local")));
    }

    #[test]
    fn test_matches_extensions() {
        let extensions = vec![".txt".to_string(), ".log".to_string()];
        assert!(matches_extensions(Some(".txt"), &extensions));
        assert!(!matches_extensions(Some(".pdf"), &extensions));
        assert!(!matches_extensions(None, &extensions));
    }

    #[test]
    fn test_matches_extensions_case_insensitive() {
        let extensions = vec![".txt".to_string()];
        assert!(matches_extensions(Some(".TXT"), &extensions));
    }

    #[test]
    fn test_matches_extensions_empty_list_accepts_all() {
        assert!(matches_extensions(Some(".csv"), &[]));
        assert!(matches_extensions(None, &[]));
    }
}

use crate::error::MatchCopyError;
use crate::models::PatternSpec;
use crate::utils::{matches_extensions, split_file_name};
use globset::{Glob, GlobMatcher};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Find every file under `root` satisfying a single pattern spec.
///
/// Walks the tree recursively (symlinks are not followed), splits each
/// filename into (stem, extension) at the last dot, glob-matches the stem
/// case-sensitively, then applies the spec's extension allow-list. Returns
/// paths in walk order; no matches is an empty vec, not an error.
pub fn find_matches(root: &Path, spec: &PatternSpec) -> Result<Vec<PathBuf>, MatchCopyError> {
    let matcher = compile_glob(&spec.pattern)?;

    let matches: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            let Some(name) = entry.file_name().to_str() else {
                return false;
            };
            let (stem, extension) = split_file_name(name.trim());
            matcher.is_match(stem) && matches_extensions(extension, &spec.extensions)
        })
        .map(|entry| entry.into_path())
        .collect();

    debug!(
        "Pattern \"{}\" matched {} files under {}",
        spec.pattern,
        matches.len(),
        root.display()
    );

    Ok(matches)
}

/// Run every spec in order and deduplicate across specs, keeping the first
/// occurrence so receipts come out in a deterministic order.
pub fn find_all_matches(
    root: &Path,
    specs: &[PatternSpec],
) -> Result<Vec<PathBuf>, MatchCopyError> {
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut all_matches = Vec::new();

    for spec in specs {
        for path in find_matches(root, spec)? {
            if seen.insert(path.clone()) {
                all_matches.push(path);
            }
        }
    }

    info!(
        "Discovered {} unique files across {} patterns",
        all_matches.len(),
        specs.len()
    );

    Ok(all_matches)
}

fn compile_glob(pattern: &str) -> Result<GlobMatcher, MatchCopyError> {
    Glob::new(pattern)
        .map(|glob| glob.compile_matcher())
        .map_err(|e| {
            MatchCopyError::Configuration(format!("invalid pattern \"{}\": {}", pattern, e))
        })
}

use crate::error::MatchCopyError;
use crate::models::PatternSpec;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// One row of the pattern input file. `pattern` is required; `extensions`
/// is an optional comma-separated list overriding the global default.
#[derive(Debug, Deserialize)]
struct PatternRow {
    pattern: String,
    #[serde(default)]
    extensions: Option<String>,
}

/// Build the ordered list of pattern specs for a run.
///
/// A CSV input file takes precedence over command-line patterns; rows
/// without their own `extensions` value fall back to `default_exts`, as do
/// all command-line patterns. Supplying neither source is a configuration
/// error, raised before any filesystem scan.
pub fn resolve_specs(
    input_file: Option<&Path>,
    patterns: &[String],
    default_exts: &[String],
) -> Result<Vec<PatternSpec>, MatchCopyError> {
    if let Some(path) = input_file {
        return read_specs_from_csv(path, default_exts);
    }

    if patterns.is_empty() {
        return Err(MatchCopyError::Configuration(
            "must provide either -p/--patterns or -i/--input-file".to_string(),
        ));
    }

    Ok(patterns
        .iter()
        .map(|pattern| PatternSpec::new(pattern.clone(), default_exts))
        .collect())
}

fn read_specs_from_csv(
    path: &Path,
    default_exts: &[String],
) -> Result<Vec<PatternSpec>, MatchCopyError> {
    if !path.exists() {
        return Err(MatchCopyError::InputNotFound(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path).map_err(|e| MatchCopyError::MalformedInput {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut specs = Vec::new();
    for row in reader.deserialize::<PatternRow>() {
        let row = row.map_err(|e| MatchCopyError::MalformedInput {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let spec = match row.extensions.as_deref().map(str::trim) {
            Some(exts) if !exts.is_empty() => {
                let row_exts: Vec<String> =
                    exts.split(',').map(|ext| ext.trim().to_string()).collect();
                PatternSpec::new(row.pattern, &row_exts)
            }
            _ => PatternSpec::new(row.pattern, default_exts),
        };
        specs.push(spec);
    }

    info!("Loaded {} pattern specs from {}", specs.len(), path.display());
    Ok(specs)
}

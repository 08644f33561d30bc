//! Delimited problem file loader.
//!
//! Reads `prompt,answer` rows (no header) into a [`ProblemSet`], keeping
//! file order.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::LoadError;
use crate::model::{Problem, ProblemSet};

/// Load a problem set from a comma-separated file.
pub fn load_problems(path: &Path) -> Result<ProblemSet, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })?;

    let set = parse_problems(file, path)?;
    tracing::debug!("loaded {} problems from {}", set.len(), path.display());
    Ok(set)
}

/// Parse problems from any reader (useful for testing).
///
/// `source_path` is only used to label I/O errors.
pub fn parse_problems<R: Read>(reader: R, source_path: &Path) -> Result<ProblemSet, LoadError> {
    // Not flexible: every row must carry as many fields as the first one.
    let mut rows = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(reader);

    let mut problems = Vec::new();
    for result in rows.records() {
        let record = result.map_err(|e| classify_csv_error(e, source_path))?;
        let line = record.position().map(|p| p.line());

        if record.len() < 2 {
            return Err(LoadError::Format {
                line,
                reason: format!("expected at least 2 fields, found {}", record.len()),
            });
        }

        let problem = Problem::new(&record[0], &record[1]);
        if problem.prompt.is_empty() {
            return Err(LoadError::Format {
                line,
                reason: "prompt is empty".into(),
            });
        }
        problems.push(problem);
    }

    Ok(ProblemSet::new(problems))
}

fn classify_csv_error(err: csv::Error, source_path: &Path) -> LoadError {
    let line = err.position().map(|p| p.line());
    let reason = err.to_string();

    match err.into_kind() {
        csv::ErrorKind::Io(source) => LoadError::File {
            path: source_path.to_path_buf(),
            source,
        },
        _ => LoadError::Format { line, reason },
    }
}

//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolve file patterns to file paths, preserving argument order
///
/// Matches of one pattern are sorted; a file matched by several patterns is
/// read once, at its first position.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        let mut matched = Vec::new();
        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                matched.push(path);
            }
        }

        matched.sort();
        for path in matched {
            if !files.contains(&path) {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::FileNotFound(format!(
            "No files found matching the provided patterns: {}",
            patterns.join(", ")
        ))
        .into());
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_argument_order_is_kept() {
        let temp_dir = TempDir::new().unwrap();
        let a = temp_dir.path().join("a.txt");
        let b = temp_dir.path().join("b.txt");
        fs::write(&a, "a").unwrap();
        fs::write(&b, "b").unwrap();

        let patterns = vec![b.display().to_string(), a.display().to_string()];
        let files = resolve_patterns(&patterns).unwrap();
        assert_eq!(files, vec![b, a]);
    }

    #[test]
    fn test_glob_matches_are_sorted_and_deduplicated() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["2.txt", "1.txt", "3.md"] {
            fs::write(temp_dir.path().join(name), name).unwrap();
        }

        let pattern = temp_dir.path().join("*.txt").display().to_string();
        let files = resolve_patterns(&[pattern.clone(), pattern]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["1.txt", "2.txt"]);
    }

    #[test]
    fn test_no_match_is_an_error() {
        let err = resolve_patterns(&["/nonexistent/*.txt".to_string()]).unwrap_err();
        assert!(err.to_string().contains("No files found"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[invalid".to_string()]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid file pattern: [invalid");
    }
}

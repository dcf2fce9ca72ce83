//! Input directory validation and CSV file discovery

use crate::error::{ConversorError, Result};
use log::debug;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// An input file eligible for conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvSource {
    pub path: PathBuf,
    pub file_name: String,
}

/// Fail unless `dir` exists, is a directory and can be listed.
pub fn validate_input_dir(dir: &Path) -> Result<()> {
    let invalid = |reason: &str| ConversorError::InvalidInputDirectory {
        path: dir.to_path_buf(),
        reason: reason.to_string(),
    };

    if !dir.exists() {
        return Err(invalid("does not exist"));
    }
    if !dir.is_dir() {
        return Err(invalid("not a directory"));
    }
    fs::read_dir(dir).map_err(|e| invalid(&format!("not readable ({})", e)))?;

    Ok(())
}

/// List the regular, readable files directly inside `dir` whose names end in
/// `extension`, sorted by file name.
pub fn scan_input_dir(dir: &Path, extension: &str) -> Result<Vec<CsvSource>> {
    validate_input_dir(dir)?;

    let read_error = |source| ConversorError::Read {
        path: dir.to_path_buf(),
        source,
    };

    let mut sources = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        let path = entry.path();

        let Some(file_name) = entry.file_name().to_str().map(str::to_string) else {
            debug!("Skipping entry with non UTF-8 name: {}", path.display());
            continue;
        };
        if !file_name.ends_with(extension) {
            debug!("Skipping {}: not a {} file", file_name, extension);
            continue;
        }
        if !is_regular_file(&path) {
            debug!("Skipping {}: not a regular file", file_name);
            continue;
        }
        if File::open(&path).is_err() {
            debug!("Skipping {}: not readable", file_name);
            continue;
        }

        sources.push(CsvSource { path, file_name });
    }

    sources.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(sources)
}

fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("entradas");

        let result = scan_input_dir(&missing, ".csv");
        assert!(matches!(result, Err(ConversorError::InvalidInputDirectory { .. })));
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.csv");
        fs::write(&file, "x").unwrap();

        let result = validate_input_dir(&file);
        assert!(matches!(result, Err(ConversorError::InvalidInputDirectory { .. })));
    }

    #[test]
    fn test_filters_and_sorts() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.csv"), "").unwrap();
        fs::write(temp_dir.path().join("a.csv"), "").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "").unwrap();
        fs::write(temp_dir.path().join("data.csv.bak"), "").unwrap();
        fs::create_dir(temp_dir.path().join("nested.csv")).unwrap();

        let sources = scan_input_dir(temp_dir.path(), ".csv").unwrap();
        let names: Vec<&str> = sources.iter().map(|s| s.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.csv", "b.csv"]);
        assert_eq!(sources[0].path, temp_dir.path().join("a.csv"));
    }

    #[test]
    fn test_suffix_match_is_case_sensitive() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("UPPER.CSV"), "").unwrap();

        let sources = scan_input_dir(temp_dir.path(), ".csv").unwrap();
        assert!(sources.is_empty());
    }
}

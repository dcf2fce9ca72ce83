//! Writing converted files to the output directory

use crate::error::{ConversorError, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Create the output directory and any missing parents.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| ConversorError::Write {
        path: dir.to_path_buf(),
        source,
    })
}

/// Write `header` followed by `lines` to `output_dir/file_name`, each line
/// terminated by `\n`. An existing file is truncated.
pub fn write_converted(
    output_dir: &Path,
    file_name: &str,
    header: &str,
    lines: &[String],
) -> Result<PathBuf> {
    let path = output_dir.join(file_name);
    let write_error = |source| ConversorError::Write {
        path: path.clone(),
        source,
    };

    let file = File::create(&path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", header).map_err(write_error)?;
    for line in lines {
        writeln!(writer, "{}", line).map_err(write_error)?;
    }
    writer.flush().map_err(write_error)?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_converted() {
        let temp_dir = TempDir::new().unwrap();
        let lines = vec!["A,1".to_string(), "B,2".to_string()];

        let path = write_converted(temp_dir.path(), "out.csv", "H1,H2", &lines).unwrap();
        assert_eq!(path, temp_dir.path().join("out.csv"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "H1,H2\nA,1\nB,2\n");
    }

    #[test]
    fn test_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("out.csv");
        fs::write(&target, "stale content that is longer than the new one\n").unwrap();

        write_converted(temp_dir.path(), "out.csv", "H", &["x".to_string()]).unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "H\nx\n");
    }

    #[test]
    fn test_ensure_output_dir_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b").join("saidas");

        ensure_output_dir(&nested).unwrap();
        assert!(nested.is_dir());
        ensure_output_dir(&nested).unwrap();
    }

    #[test]
    fn test_ensure_output_dir_over_a_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("saidas");
        fs::write(&file, "").unwrap();

        let result = ensure_output_dir(&file);
        assert!(matches!(result, Err(ConversorError::Write { .. })));
    }
}

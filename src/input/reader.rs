//! Line-by-line reading of input files with header skipping

use crate::error::{ConversorError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// A non-header line and its 1-based position in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLine {
    pub number: usize,
    pub content: String,
}

/// Iterator over the data lines of one input file.
///
/// Every line starting with the header prefix is skipped, wherever it
/// appears. An empty prefix disables skipping. The file is closed when the
/// iterator is dropped.
pub struct DataLines {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    header_prefix: String,
    line_number: usize,
    headers_skipped: usize,
}

impl DataLines {
    pub fn open(path: &Path, header_prefix: &str) -> Result<Self> {
        let file = File::open(path).map_err(|source| ConversorError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            lines: BufReader::new(file).lines(),
            header_prefix: header_prefix.to_string(),
            line_number: 0,
            headers_skipped: 0,
        })
    }

    pub fn headers_skipped(&self) -> usize {
        self.headers_skipped
    }

    fn is_header(&self, line: &str) -> bool {
        !self.header_prefix.is_empty() && line.starts_with(&self.header_prefix)
    }
}

impl Iterator for DataLines {
    type Item = Result<DataLine>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut line = match self.lines.next()? {
                Ok(line) => line,
                Err(source) => {
                    return Some(Err(ConversorError::Read {
                        path: self.path.clone(),
                        source,
                    }))
                }
            };
            self.line_number += 1;

            if self.line_number == 1 && line.starts_with(BYTE_ORDER_MARK) {
                line.remove(0);
            }

            if self.is_header(&line) {
                self.headers_skipped += 1;
                continue;
            }

            return Some(Ok(DataLine {
                number: self.line_number,
                content: line,
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn lines_of(content: &str, prefix: &str) -> (Vec<DataLine>, usize) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("input.csv");
        fs::write(&path, content).unwrap();

        let mut reader = DataLines::open(&path, prefix).unwrap();
        let lines = reader.by_ref().collect::<Result<Vec<_>>>().unwrap();
        (lines, reader.headers_skipped())
    }

    #[test]
    fn test_skips_header() {
        let (lines, skipped) = lines_of("Nome,Nascimento,Email,CPF\nAna,01/01/2000,a@x.com,12345678901\n", "Nome");
        assert_eq!(skipped, 1);
        assert_eq!(
            lines,
            vec![DataLine {
                number: 2,
                content: "Ana,01/01/2000,a@x.com,12345678901".to_string(),
            }]
        );
    }

    #[test]
    fn test_prefix_match_drops_matching_data_rows() {
        let (lines, skipped) = lines_of("Nome,x\nNomeado Silva,01/01/2000,a@x.com,12345678901\nAna,y\n", "Nome");
        assert_eq!(skipped, 2);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].number, 3);
    }

    #[test]
    fn test_handles_crlf_and_bom() {
        let (lines, skipped) = lines_of("\u{feff}Nome,Nascimento\r\nAna,b\r\n", "Nome");
        assert_eq!(skipped, 1);
        assert_eq!(lines[0].content, "Ana,b");
    }

    #[test]
    fn test_empty_prefix_keeps_everything() {
        let (lines, skipped) = lines_of("Nome,x\nAna,y\n", "");
        assert_eq!(skipped, 0);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = DataLines::open(&temp_dir.path().join("missing.csv"), "Nome");
        assert!(matches!(result, Err(ConversorError::Read { .. })));
    }

    #[test]
    fn test_invalid_utf8_is_a_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("latin1.csv");
        fs::write(&path, [b'J', b'o', 0xe3, b'o', b'\n']).unwrap();

        let mut reader = DataLines::open(&path, "Nome").unwrap();
        assert!(matches!(reader.next(), Some(Err(ConversorError::Read { .. }))));
    }
}

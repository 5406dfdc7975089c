//! Flat-file persistence for the inventory store.
//!
//! A stateless pair of transforms between the record collection and a
//! newline-delimited text file. The file is opened and closed within each
//! call; no handles are held and no locking is performed — the system is
//! single-process by design.

use crate::error::StorageError;
use crate::record::Record;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Backing file adapter: loads and saves the full record collection.
///
/// Constructed with an explicit path so tests can point it at temporary
/// files instead of a fixed global file name.
#[derive(Debug, Clone)]
pub struct InventoryFile {
    path: PathBuf,
}

impl InventoryFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        InventoryFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all records from the backing file, in file order.
    ///
    /// A missing file is an empty collection. A malformed line (wrong field
    /// count, non-numeric id/quantity/price) is skipped with a warning and
    /// does not abort the rest of the load. An unreadable file degrades to
    /// an empty collection with an error diagnostic.
    pub fn load(&self) -> Vec<Record> {
        if !self.path.exists() {
            return Vec::new();
        }

        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(
                    "Failed to read inventory file {}: {}",
                    self.path.display(),
                    e
                );
                return Vec::new();
            }
        };

        let mut records = Vec::new();
        for (line_no, line) in content.lines().enumerate() {
            match Record::parse_line(line) {
                Some(record) => records.push(record),
                None => {
                    tracing::warn!(
                        "Skipping malformed line {} in {}: {:?}",
                        line_no + 1,
                        self.path.display(),
                        line
                    );
                }
            }
        }
        records
    }

    /// Overwrite the backing file with the given records, one per line in
    /// order. An empty collection produces an empty file.
    pub fn save(&self, records: &[Record]) -> Result<(), StorageError> {
        let mut out = String::new();
        for record in records {
            out.push_str(&record.to_line());
            out.push('\n');
        }

        let mut file = std::fs::File::create(&self.path)?;
        file.write_all(out.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let file = InventoryFile::new(dir.path().join("absent.txt"));
        assert!(file.load().is_empty());
    }

    #[test]
    fn test_load_unreadable_path_degrades_to_empty() {
        // A directory at the backing path exists but cannot be read as a
        // file; load reports the error and yields an empty collection.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.txt");
        std::fs::create_dir(&path).unwrap();
        let file = InventoryFile::new(&path);
        assert!(file.load().is_empty());
    }

    #[test]
    fn test_save_then_load_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let file = InventoryFile::new(dir.path().join("inventory.txt"));
        let records = vec![
            Record::new(2, "clamp", 9, 4.75),
            Record::new(1, "vise", 1, 89.0),
        ];
        file.save(&records).unwrap();
        assert_eq!(file.load(), records);
    }

    #[test]
    fn test_load_skips_malformed_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.txt");
        std::fs::write(&path, "1,saw,4,9.99\n2,drill,many,1.0\nnot a record\n").unwrap();
        let records = InventoryFile::new(&path).load();
        assert_eq!(records, vec![Record::new(1, "saw", 4, 9.99)]);
    }

    #[test]
    fn test_load_skips_blank_lines_like_any_malformed_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.txt");
        std::fs::write(&path, "1,saw,4,9.99\n\n2,drill,7,79.0\n").unwrap();
        let records = InventoryFile::new(&path).load();
        assert_eq!(
            records,
            vec![Record::new(1, "saw", 4, 9.99), Record::new(2, "drill", 7, 79.0)]
        );
    }

    #[test]
    fn test_save_empty_collection_writes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = InventoryFile::new(dir.path().join("inventory.txt"));
        file.save(&[]).unwrap();
        assert_eq!(std::fs::read_to_string(file.path()).unwrap(), "");
        assert!(file.load().is_empty());
    }

    #[test]
    fn test_save_to_unwritable_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file = InventoryFile::new(dir.path().join("no_such_dir").join("inventory.txt"));
        assert!(file.save(&[Record::new(1, "saw", 4, 9.99)]).is_err());
    }
}

//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::ExpenseError;

/// Read JSON from a file, returning `None` if the file doesn't exist
pub fn read_json_optional<T, P>(path: P) -> Result<Option<T>, ExpenseError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ExpenseError::Storage(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            )))
        }
    };

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map(Some)
        .map_err(|e| ExpenseError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all. Output is
/// pretty-printed with two-space indentation.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), ExpenseError>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            ExpenseError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("json.tmp");

    if let Err(e) = write_temp_file(&temp_path, data) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ExpenseError::Storage(format!("Failed to replace {}: {}", path.display(), e))
    })?;

    Ok(())
}

fn write_temp_file<T>(temp_path: &Path, data: &T) -> Result<(), ExpenseError>
where
    T: Serialize + ?Sized,
{
    let file = File::create(temp_path)
        .map_err(|e| ExpenseError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| ExpenseError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| ExpenseError::Storage(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| ExpenseError::Storage(format!("Failed to sync data: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestData {
        name: String,
        value: i32,
    }

    fn sample() -> TestData {
        TestData {
            name: "test".to_string(),
            value: 42,
        }
    }

    #[test]
    fn test_read_nonexistent_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let data: Option<TestData> = read_json_optional(&path).unwrap();
        assert!(data.is_none());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        write_json_atomic(&path, &sample()).unwrap();
        assert!(path.exists());

        let loaded: Option<TestData> = read_json_optional(&path).unwrap();
        assert_eq!(loaded, Some(sample()));
    }

    #[test]
    fn test_write_is_pretty_printed_with_two_spaces() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        write_json_atomic(&path, &sample()).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "{\n  \"name\": \"test\",\n  \"value\": 42\n}");
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");
        let temp_path = temp_dir.path().join("test.json.tmp");

        write_json_atomic(&path, &sample()).unwrap();

        assert!(path.exists());
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.json");

        write_json_atomic(&path, &sample()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_read_invalid_json_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("invalid.json");
        fs::write(&path, "not json at all").unwrap();

        let err = read_json_optional::<TestData, _>(&path).unwrap_err();
        assert!(matches!(err, ExpenseError::Storage(_)));
    }

    #[test]
    fn test_failed_write_leaves_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");
        write_json_atomic(&path, &sample()).unwrap();

        // A directory where the temp file should go makes File::create fail
        fs::create_dir(temp_dir.path().join("test.json.tmp")).unwrap();
        let other = TestData {
            name: "other".to_string(),
            value: 1,
        };
        assert!(write_json_atomic(&path, &other).is_err());

        let loaded: Option<TestData> = read_json_optional(&path).unwrap();
        assert_eq!(loaded, Some(sample()));
    }
}

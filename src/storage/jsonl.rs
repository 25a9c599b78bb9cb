//! Line-delimited JSON helpers shared by the file-backed stores.

use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::StorageError;

/// Reads every line of a JSONL file. A missing file reads as empty.
pub(crate) fn read_all<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StorageError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let reader = BufReader::new(fs::File::open(path)?);
    reader
        .lines()
        .filter(|line| line.as_ref().map_or(true, |l| !l.trim().is_empty()))
        .map(|line| {
            let line = line?;
            serde_json::from_str(&line).map_err(StorageError::Json)
        })
        .collect()
}

/// Overwrites a JSONL file with the given items.
pub(crate) fn write_all<T: Serialize>(path: &Path, items: &[T]) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    for item in items {
        serde_json::to_writer(&mut file, item)?;
        writeln!(file)?;
    }
    Ok(())
}

/// Appends one item to a JSONL file, creating it if needed.
pub(crate) fn append<T: Serialize>(path: &Path, item: &T) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    serde_json::to_writer(&mut file, item)?;
    writeln!(file)?;
    Ok(())
}

/// Makes an id safe to use as a file name (ids may contain `/`).
pub(crate) fn safe_file_stem(id: &str) -> String {
    id.replace(['/', '\\'], "_")
}

/// Generates an id of the form `{prefix}-{YYYYMMDDHHMMSSmmm}`, adding a
/// numeric suffix while `taken` reports a collision.
pub(crate) fn generate_id(
    prefix: &str,
    now: DateTime<Utc>,
    taken: impl Fn(&str) -> bool,
) -> String {
    let base = format!("{prefix}-{}", now.format("%Y%m%d%H%M%S%3f"));
    if !taken(&base) {
        return base;
    }
    (2..)
        .map(|n| format!("{base}-{n}"))
        .find(|candidate| !taken(candidate))
        .unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde::Deserialize;
    use tempfile::tempdir;

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Item {
        n: u32,
    }

    #[test]
    fn missing_file_reads_empty() {
        let dir = tempdir().unwrap();
        let items: Vec<Item> = read_all(&dir.path().join("nope.jsonl")).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn write_then_append() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("items.jsonl");
        write_all(&path, &[Item { n: 1 }]).unwrap();
        append(&path, &Item { n: 2 }).unwrap();
        let items: Vec<Item> = read_all(&path).unwrap();
        assert_eq!(items, vec![Item { n: 1 }, Item { n: 2 }]);
    }

    #[test]
    fn blank_lines_skipped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items.jsonl");
        fs::write(&path, "{\"n\":1}\n\n{\"n\":2}\n").unwrap();
        let items: Vec<Item> = read_all(&path).unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn corrupt_line_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items.jsonl");
        fs::write(&path, "{\"n\":1}\nnot json\n").unwrap();
        let result: Result<Vec<Item>, _> = read_all(&path);
        assert!(matches!(result, Err(StorageError::Json(_))));
    }

    #[test]
    fn safe_file_stem_replaces_separators() {
        assert_eq!(safe_file_stem("a/b\\c"), "a_b_c");
    }

    #[test]
    fn generate_id_formats_timestamp() {
        let now = Utc.with_ymd_and_hms(2026, 2, 16, 12, 30, 5).unwrap();
        assert_eq!(generate_id("preset", now, |_| false), "preset-20260216123005000");
    }

    #[test]
    fn generate_id_skips_taken() {
        let now = Utc.with_ymd_and_hms(2026, 2, 16, 12, 30, 5).unwrap();
        let taken = ["preset-20260216123005000", "preset-20260216123005000-2"];
        assert_eq!(
            generate_id("preset", now, |id| taken.contains(&id)),
            "preset-20260216123005000-3"
        );
    }
}

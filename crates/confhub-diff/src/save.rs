//! Per-file chunk export
//!
//! Materializes split records as `chunk_<suffix>.diff` files so downstream
//! tools can consume one file's diff at a time.

use crate::types::ParsedFileDiff;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Generate chunk suffix (aa-zz, then numbers)
pub fn chunk_suffix(index: usize) -> String {
    // First use aa-zz (26*26 = 676 combinations)
    if index < 676 {
        let first = (index / 26) as u8;
        let second = (index % 26) as u8;
        format!("{}{}", (b'a' + first) as char, (b'a' + second) as char)
    } else {
        // After zz, use numbers
        format!("{:04}", index - 676)
    }
}

/// Write each record to `<output_dir>/chunk_<suffix>.diff`.
///
/// Creates the directory if needed and removes stale `.diff` files from a
/// previous export first, so the directory always mirrors the latest split.
/// Returns the written paths in record order.
pub fn export_chunks(records: &[ParsedFileDiff], output_dir: &str) -> io::Result<Vec<PathBuf>> {
    let dir = Path::new(output_dir);

    if dir.exists() {
        for entry in fs::read_dir(dir)?.flatten() {
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|e| e == "diff") {
                let _ = fs::remove_file(&path);
            }
        }
    } else {
        fs::create_dir_all(dir)?;
    }

    let mut written = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let chunk_path = dir.join(format!("chunk_{}.diff", chunk_suffix(index)));

        let mut file = fs::File::create(&chunk_path)?;
        file.write_all(record.diff.as_bytes())?;
        file.write_all(b"\n")?;

        tracing::debug!(path = %chunk_path.display(), file = %record.path, "wrote chunk");
        written.push(chunk_path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splitter::split_combined_diff;

    #[test]
    fn test_chunk_suffix_sequence() {
        assert_eq!(chunk_suffix(0), "aa");
        assert_eq!(chunk_suffix(25), "az");
        assert_eq!(chunk_suffix(26), "ba");
        assert_eq!(chunk_suffix(675), "zz");
        assert_eq!(chunk_suffix(676), "0000");
        assert_eq!(chunk_suffix(700), "0024");
    }

    #[test]
    fn test_export_chunks_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let raw = "diff --git a/a.yaml b/a.yaml\n@@ -1 +1 @@\n-x\n+y\n\
                   diff --git a/b.yaml b/b.yaml\n@@ -1 +1 @@\n-p\n+q\n";
        let outcome = split_combined_diff(raw);

        let written = export_chunks(&outcome.records, dir.path().to_str().unwrap()).unwrap();
        assert_eq!(written.len(), 2);
        assert!(written[0].ends_with("chunk_aa.diff"));
        assert!(written[1].ends_with("chunk_ab.diff"));

        let first = fs::read_to_string(&written[0]).unwrap();
        assert!(first.starts_with("diff --git a/a.yaml b/a.yaml"));
        assert!(first.contains("+y"));
    }

    #[test]
    fn test_export_removes_stale_chunks() {
        let dir = tempfile::tempdir().unwrap();
        let stale = dir.path().join("chunk_zz.diff");
        fs::write(&stale, "old").unwrap();
        let keep = dir.path().join("notes.txt");
        fs::write(&keep, "keep me").unwrap();

        let outcome = split_combined_diff("diff --git a/a b/a\n@@ -1 +1 @@\n-x\n+y\n");
        export_chunks(&outcome.records, dir.path().to_str().unwrap()).unwrap();

        assert!(!stale.exists());
        assert!(keep.exists());
    }
}

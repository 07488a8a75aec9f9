//! File-backed backend
//!
//! Each key maps to one file under a data directory:
//!
//! ```text
//! {data_dir}/
//!   └── {sanitized_key}.kv
//! ```
//!
//! Writes go to a `.tmp` sibling first and are renamed into place, so a
//! crash mid-write leaves the previous value intact rather than a
//! truncated file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::{GiftrError, Result};
use super::KvBackend;

/// Extension for value files
const VALUE_EXT: &str = "kv";

/// One-file-per-key durable backend
#[derive(Debug)]
pub struct FileBackend {
    data_dir: PathBuf,
}

impl FileBackend {
    /// Open or create a backend rooted at `data_dir`
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        std::fs::create_dir_all(&data_dir)
            .map_err(|e| GiftrError::Persistence(format!("create {}: {e}", data_dir.display())))?;
        Ok(Self { data_dir })
    }

    /// Path of the value file for `key`
    fn value_path(&self, key: &str) -> PathBuf {
        self.data_dir
            .join(format!("{}.{VALUE_EXT}", sanitize_key(key)))
    }
}

/// Map a key to a filesystem-safe file stem
///
/// Alphanumerics and `- _ . @` pass through; everything else (path
/// separators included) becomes `_`.
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '@') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[async_trait]
impl KvBackend for FileBackend {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.value_path(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(GiftrError::Persistence(format!(
                "read {}: {e}",
                path.display()
            ))),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let path = self.value_path(key);
        let tmp = path.with_extension("tmp");

        let io_err = |what: &str, path: &Path, e: std::io::Error| {
            GiftrError::Persistence(format!("{what} {}: {e}", path.display()))
        };

        tokio::fs::write(&tmp, value)
            .await
            .map_err(|e| io_err("write", &tmp, e))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| io_err("rename", &path, e))?;
        Ok(())
    }
}

//! Core engine: validated keys, atomic writes, tolerant reads.

use crate::builder::PrefsBuilder;
use crate::error::{PrefsError, PrefsErrorExt};
use crate::maintenance;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Marker embedded in temp file names; entries never contain it, so the
/// self-healing sweep can identify leftovers unambiguously.
pub(crate) const TMP_MARKER: &str = ".foliotmp.";

/// The internal shared state of a [`Prefs`] instance.
#[derive(Debug)]
pub(crate) struct PrefsInner {
    /// Canonicalized root directory holding one file per preference key.
    pub(crate) root: PathBuf,
    /// Unique counter used to generate temp file names.
    tmp_counter: AtomicU64,
}

/// A thread-safe handle to the preference engine.
///
/// Internally reference-counted; clone freely across tasks.
#[derive(Debug, Clone)]
pub struct Prefs {
    pub(crate) inner: Arc<PrefsInner>,
}

impl Prefs {
    #[must_use = "The engine is not initialized until you call .connect()"]
    pub fn builder() -> PrefsBuilder {
        PrefsBuilder::new()
    }

    pub(crate) fn from_root(root: PathBuf) -> Self {
        Self { inner: Arc::new(PrefsInner { root, tmp_counter: AtomicU64::new(1) }) }
    }

    /// The directory entries are stored in.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.inner.root
    }

    /// Reads the value stored under `key`.
    ///
    /// A key that was never written returns `Ok(None)`. An entry that exists
    /// but is not UTF-8 text returns [`PrefsError::Corrupt`]; callers holding
    /// low-value settings should treat that the same as absent.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::InvalidKey`] for malformed keys,
    /// [`PrefsError::Corrupt`] for non-text entries, or [`PrefsError::Io`]
    /// for filesystem failures other than "not found".
    pub async fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        let path = self.resolve(key)?;
        match fs::read(&path).await {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(value) => Ok(Some(value)),
                Err(_) => Err(PrefsError::Corrupt {
                    message: key.to_owned().into(),
                    context: Some("Entry is not valid UTF-8".into()),
                }),
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => {
                Err(e).context(format!("Failed to read preference: {}", path.display()))
            },
        }
    }

    /// Stores `value` under `key` atomically.
    ///
    /// The value is written to a unique temp file, synced to disk, and then
    /// renamed over the entry, so concurrent readers observe either the old
    /// or the new value.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::InvalidKey`] for malformed keys or
    /// [`PrefsError::Io`] if any step of the swap fails.
    pub async fn put(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        let resolved = self.resolve(key)?;
        let temp = self.unique_tmp_path(&resolved);

        {
            let mut file = fs::OpenOptions::new()
                .create_new(true)
                .write(true)
                .open(&temp)
                .await
                .context(format!("Temp creation failed: {}", temp.display()))?;
            file.write_all(value.as_bytes()).await.context("Write failed")?;
            file.sync_all().await.context("Hardware sync failed")?;
        }

        if let Err(err) = fs::rename(&temp, &resolved).await {
            if err.kind() == std::io::ErrorKind::AlreadyExists {
                fs::remove_file(&resolved)
                    .await
                    .context(format!("Failed to replace entry: {}", resolved.display()))?;
                fs::rename(&temp, &resolved).await.context(format!(
                    "Atomic swap failed: {} -> {}",
                    temp.display(),
                    resolved.display()
                ))?;
            } else {
                return Err(PrefsError::Io {
                    source: err,
                    context: Some(
                        format!("Atomic swap failed: {} -> {}", temp.display(), resolved.display())
                            .into(),
                    ),
                });
            }
        }

        debug!(key, "Preference saved atomically");
        Ok(())
    }

    /// Removes the entry stored under `key`.
    ///
    /// Removing a key that was never written is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::InvalidKey`] for malformed keys or
    /// [`PrefsError::Io`] for filesystem failures.
    pub async fn remove(&self, key: &str) -> Result<(), PrefsError> {
        let resolved = self.resolve(key)?;
        match fs::remove_file(&resolved).await {
            Ok(()) => {
                debug!(key, "Preference removed");
                Ok(())
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).context(format!("Failed to remove: {}", resolved.display())),
        }
    }

    /// Maps a key to its physical path inside the root.
    ///
    /// Keys are identifiers, not paths: lowercase ASCII letters, digits,
    /// `_` and `-`. This rules out traversal (`..`, separators) entirely.
    pub(crate) fn resolve(&self, key: &str) -> Result<PathBuf, PrefsError> {
        if key.is_empty() {
            return Err(PrefsError::InvalidKey {
                message: "Empty key".into(),
                context: None,
            });
        }
        if !key.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
        {
            return Err(PrefsError::InvalidKey {
                message: key.to_owned().into(),
                context: Some("Keys are lowercase ASCII identifiers".into()),
            });
        }
        Ok(self.inner.root.join(key))
    }

    fn unique_tmp_path(&self, target: &Path) -> PathBuf {
        let id = self.inner.tmp_counter.fetch_add(1, Ordering::Relaxed);
        let pid = std::process::id();
        let mut name = target.file_name().map_or_else(String::new, |n| {
            n.to_string_lossy().into_owned()
        });
        name.push_str(TMP_MARKER);
        name.push_str(&format!("{pid}.{id}"));
        target.with_file_name(name)
    }

    /// Removes stale temp files left behind by earlier crashes.
    pub async fn purge_tmp(&self) {
        maintenance::purge_tmp(&self.inner.root).await;
    }
}

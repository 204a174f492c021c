//! A small, durable key-value store for per-user preferences.
//!
//! Each preference is one UTF-8 text file inside a sandboxed root directory.
//! The engine is built for low-value, re-derivable settings (a language
//! choice, a theme flag): writes are atomic so a crash can never leave a
//! half-written entry, and a missing or unreadable entry is an ordinary
//! outcome rather than a failure of the application.
//!
//! # Core Features
//!
//! - **Atomic Writes**: unique temp file + `fsync` + `rename`, so readers see
//!   either the old value or the new one, never a torn write.
//! - **Sandboxed Keys**: keys are validated identifiers, so an entry can
//!   never resolve outside the root directory.
//! - **Self-Healing**: stale temp files left behind by crashes are removed
//!   when the engine connects.
//!
//! # Example
//!
//! ```rust
//! use folio_prefs::{Prefs, PrefsError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), PrefsError> {
//!     # let tmp = tempfile::tempdir().unwrap();
//!     # let root = tmp.path().join("prefs");
//!     let prefs = Prefs::builder().root(&root).create(true).connect().await?;
//!
//!     prefs.put("language", "de").await?;
//!     assert_eq!(prefs.get("language").await?.as_deref(), Some("de"));
//!
//!     assert_eq!(prefs.get("never_written").await?, None);
//!     Ok(())
//! }
//! ```

mod builder;
mod engine;
mod error;
mod maintenance;

pub use builder::PrefsBuilder;
pub use engine::Prefs;
pub use error::{PrefsError, PrefsErrorExt};

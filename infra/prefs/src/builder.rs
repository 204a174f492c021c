use crate::engine::Prefs;
use crate::error::{PrefsError, PrefsErrorExt};
use private::Sealed;
use std::path::PathBuf;
use tokio::fs;
use tracing::info;

#[derive(Debug, Clone, Copy)]
struct PrefsConfig {
    create: bool,
}

impl Default for PrefsConfig {
    fn default() -> Self {
        Self { create: true }
    }
}

#[derive(Debug, Default)]
pub struct NoRoot;
#[derive(Debug)]
pub struct WithRoot(PathBuf);

mod private {
    pub(super) trait Sealed {}
}
impl Sealed for NoRoot {}
impl Sealed for WithRoot {}

/// Type-safe fluent builder: a root directory must be supplied before the
/// engine can connect.
#[allow(private_bounds)]
#[derive(Debug, Default)]
pub struct PrefsBuilder<S: Sealed = NoRoot> {
    state: S,
    config: PrefsConfig,
}

#[allow(private_bounds)]
impl<S: Sealed> PrefsBuilder<S> {
    #[must_use = "Sets whether the preference root should be created if missing"]
    pub const fn create(mut self, enable: bool) -> Self {
        self.config.create = enable;
        self
    }
}

impl PrefsBuilder<NoRoot> {
    #[must_use = "Creates a new builder with default configuration"]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "Sets the root directory for preference entries"]
    pub fn root(self, path: impl Into<PathBuf>) -> PrefsBuilder<WithRoot> {
        PrefsBuilder { state: WithRoot(path.into()), config: self.config }
    }
}

impl PrefsBuilder<WithRoot> {
    /// Consumes the configuration and initializes the engine.
    ///
    /// Boot sequence: create the root if requested, canonicalize it (so
    /// later joins cannot be redirected through symlinked parents), then
    /// sweep stale temp files from earlier crashes. The sweep is
    /// non-critical; a failed cleanup logs and proceeds.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::Io`] if the root is missing with `create(false)`,
    /// or cannot be created or resolved.
    pub async fn connect(self) -> Result<Prefs, PrefsError> {
        let root = &self.state.0;

        if self.config.create {
            fs::create_dir_all(root)
                .await
                .context(format!("Failed to bootstrap preference root: {}", root.display()))?;
            info!(path = %root.display(), "Bootstrapped preference root directory");
        }

        let canonical = fs::canonicalize(root)
            .await
            .context(format!("Failed to resolve preference root: {}", root.display()))?;

        let prefs = Prefs::from_root(canonical);
        prefs.purge_tmp().await;

        Ok(prefs)
    }
}

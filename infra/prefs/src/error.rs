use std::borrow::Cow;

/// A specialized [`PrefsError`] enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum PrefsError {
    /// The key is not a valid preference identifier.
    #[error("Invalid preference key{}: {message}", format_context(.context))]
    InvalidKey { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The stored entry exists but is not valid UTF-8 text.
    #[error("Corrupt preference entry{}: {message}", format_context(.context))]
    Corrupt { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Filesystem failure underneath the engine.
    #[error("Preference I/O failure{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },
}

impl PrefsError {
    fn with_context(mut self, new_context: Cow<'static, str>) -> Self {
        match &mut self {
            Self::InvalidKey { context, .. }
            | Self::Corrupt { context, .. }
            | Self::Io { context, .. } => *context = Some(new_context),
        }
        self
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> String {
    context.as_ref().map_or_else(String::new, |c| format!(" ({c})"))
}

/// Adds `.context(...)` to results flowing into [`PrefsError`].
pub trait PrefsErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, PrefsError>;
}

impl<T> PrefsErrorExt<T> for Result<T, std::io::Error> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, PrefsError> {
        self.map_err(|source| PrefsError::Io { source, context: Some(context.into()) })
    }
}

impl<T> PrefsErrorExt<T> for Result<T, PrefsError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, PrefsError> {
        self.map_err(|e| e.with_context(context.into()))
    }
}

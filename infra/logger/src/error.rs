use std::borrow::Cow;

/// A specialized [`LoggerError`] enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The global subscriber could not be installed.
    #[error("Logger initialization failed{}: {message}", format_context(.context))]
    Init { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The log directory or appender could not be prepared.
    #[error("Logger I/O failure{}: {message}", format_context(.context))]
    Io { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn format_context(context: &Option<Cow<'static, str>>) -> String {
    context.as_ref().map_or_else(String::new, |c| format!(" ({c})"))
}

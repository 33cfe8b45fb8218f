use thiserror::Error;

/// The host engine rejected a rendered pattern.
///
/// The builder itself has no failure modes; this is the only error the crate
/// produces, and it always originates in [`regex`]'s compiler.
#[derive(Debug, Error)]
#[error("pattern '{pattern}' was rejected by the host engine: {source}")]
pub struct CompileError {
    pattern: String,
    #[source]
    source: regex::Error,
}

impl CompileError {
    pub(crate) fn new(pattern: String, source: regex::Error) -> Self {
        Self { pattern, source }
    }

    /// The pattern string that failed to compile.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

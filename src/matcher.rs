use regex::Regex;

use crate::error::CompileError;

/// A rendered pattern compiled by the host engine.
///
/// The host dialect is the `regex` crate's; Java-only constructs a tree can
/// render (`\Q...\E` spans, possessive quantifiers, back-references, `\h`,
/// `\Z`, `\G`, POSIX `\p{...}` spellings) come back as a [`CompileError`]
/// rather than a match failure.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pattern: Regex,
    anchored: Regex,
}

impl CompiledPattern {
    /// Compiles `pattern`, along with an anchored variant used for
    /// whole-input queries.
    #[tracing::instrument(level = "trace", fields(pattern = %pattern))]
    pub fn compile(pattern: &str) -> Result<Self, CompileError> {
        let compiled =
            Regex::new(pattern).map_err(|source| CompileError::new(pattern.to_string(), source))?;
        // the non-capturing wrapper keeps group numbering intact
        let anchored = Regex::new(&format!("\\A(?:{pattern})\\z"))
            .map_err(|source| CompileError::new(pattern.to_string(), source))?;
        Ok(Self {
            pattern: compiled,
            anchored,
        })
    }

    /// Does the whole haystack match the pattern?
    pub fn is_full_match(&self, haystack: &str) -> bool {
        self.anchored.is_match(haystack)
    }

    /// The first occurrence of the pattern in the haystack, if any.
    pub fn find_first<'h>(&self, haystack: &'h str) -> Option<&'h str> {
        self.pattern.find(haystack).map(|found| found.as_str())
    }

    /// The source pattern string.
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

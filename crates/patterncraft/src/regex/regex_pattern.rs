//! # Regex Pattern Labeled Wrapper

use crate::regex::{ErrorWrapper, RegexWrapper};

/// Which regex engine should compile a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum RegexEngine {
    /// Try the `regex` crate first; fall back to `fancy_regex`.
    #[default]
    Adaptive,

    /// Only the `regex` crate.
    ///
    /// Patterns using back-references or lookaround will fail to compile.
    Basic,

    /// Only the `fancy_regex` crate.
    Fancy,
}

impl RegexEngine {
    /// Label the given pattern text for this engine.
    pub fn label<S: Into<String>>(
        self,
        pattern: S,
    ) -> RegexPattern {
        let pattern = pattern.into();
        match self {
            Self::Adaptive => RegexPattern::Adaptive(pattern),
            Self::Basic => RegexPattern::Basic(pattern),
            Self::Fancy => RegexPattern::Fancy(pattern),
        }
    }
}

/// Labeled wrapper for regex patterns.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum RegexPattern {
    /// This is a basic regex pattern, without extensions.
    Basic(String),

    /// This is a regex pattern that requires regex extensions.
    Fancy(String),

    /// The requirements of this pattern are unknown; it may need extensions.
    Adaptive(String),
}

impl<S: AsRef<str>> From<S> for RegexPattern {
    fn from(pattern: S) -> Self {
        Self::Adaptive(pattern.as_ref().to_string())
    }
}

impl RegexPattern {
    /// Get the underlying regex pattern.
    ///
    /// ## Returns
    /// The regex pattern string slice.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(pattern) => pattern,
            Self::Fancy(pattern) => pattern,
            Self::Adaptive(pattern) => pattern,
        }
    }

    /// Compile the regex pattern into a `RegexWrapper`.
    ///
    /// ## Returns
    /// A `Result` containing the compiled `RegexWrapper` or an `ErrorWrapper`.
    pub fn compile(&self) -> Result<RegexWrapper, ErrorWrapper> {
        match self {
            Self::Basic(pattern) => regex::Regex::new(pattern)
                .map(RegexWrapper::from)
                .map_err(ErrorWrapper::from),
            Self::Fancy(pattern) => fancy_regex::Regex::new(pattern)
                .map(RegexWrapper::from)
                .map_err(ErrorWrapper::from),
            Self::Adaptive(pattern) => {
                regex::Regex::new(pattern)
                    .map(RegexWrapper::from)
                    .or_else(|err| {
                        log::debug!("`regex` rejected pattern ({err}); retrying with `fancy_regex`");
                        fancy_regex::Regex::new(pattern)
                            .map(RegexWrapper::from)
                            .map_err(ErrorWrapper::from)
                    })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        assert_eq!(
            RegexEngine::Fancy.label("a+"),
            RegexPattern::Fancy("a+".to_string())
        );
        assert_eq!(
            RegexEngine::default().label("a+"),
            RegexPattern::from("a+")
        );
    }

    #[test]
    fn test_adaptive_fallback() {
        let re = RegexPattern::from(r"(a)\1").compile().unwrap();
        assert!(re.is_fancy());

        let re = RegexPattern::from(r"(a)b").compile().unwrap();
        assert!(re.is_basic());
    }

    #[test]
    fn test_basic_rejects_extensions() {
        assert!(RegexPattern::Basic(r"a(?=b)".to_string()).compile().is_err());
        assert!(RegexPattern::Fancy(r"a(?=b)".to_string()).compile().is_ok());
    }
}

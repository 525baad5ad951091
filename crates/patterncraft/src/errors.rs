//! # Error Types

use crate::regex::ErrorWrapper;

/// Errors from patterncraft operations.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// The regex engine rejected the generated pattern.
    #[error("pattern `{pattern}` failed to compile: {source}")]
    Compile {
        /// The full pattern text handed to the engine.
        pattern: String,

        /// The engine error.
        source: ErrorWrapper,
    },

    /// A back-reference names a group which does not precede it.
    ///
    /// Only reported when strict mode is enabled.
    #[error("back-reference \\{index} does not name one of the {groups} preceding capture groups")]
    InvalidBackreference {
        /// The referenced group index.
        index: usize,

        /// The number of capture groups emitted before the reference.
        groups: usize,
    },

    /// The matching engine failed at match time.
    #[error("match failed: {0}")]
    Match(ErrorWrapper),
}

/// Result type for patterncraft operations.
pub type PCResult<T> = core::result::Result<T, PatternError>;

//! # Pattern Options

use crate::regex::RegexEngine;

/// Options for compiling a [`PatternBuilder`](super::PatternBuilder).
///
/// Options accumulate over the life of a builder; flushing a term never
/// resets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PatternOptions {
    case_insensitive: bool,
    multi_line: bool,
    strict: bool,
    engine: RegexEngine,
}

impl PatternOptions {
    /// Is case-insensitive matching enabled?
    pub fn case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Set case-insensitive matching.
    pub fn set_case_insensitive(
        &mut self,
        case_insensitive: bool,
    ) {
        self.case_insensitive = case_insensitive;
    }

    /// Set case-insensitive matching.
    pub fn with_case_insensitive(
        mut self,
        case_insensitive: bool,
    ) -> Self {
        self.set_case_insensitive(case_insensitive);
        self
    }

    /// Is multi-line matching enabled?
    ///
    /// When enabled, `^` and `$` match at line boundaries
    /// rather than only at the ends of the input.
    pub fn multi_line(&self) -> bool {
        self.multi_line
    }

    /// Set multi-line matching.
    pub fn set_multi_line(
        &mut self,
        multi_line: bool,
    ) {
        self.multi_line = multi_line;
    }

    /// Set multi-line matching.
    pub fn with_multi_line(
        mut self,
        multi_line: bool,
    ) -> Self {
        self.set_multi_line(multi_line);
        self
    }

    /// Is strict back-reference validation enabled?
    ///
    /// In strict mode, a back-reference to a group which has not been
    /// emitted before it makes compilation fail with
    /// [`PatternError::InvalidBackreference`](crate::PatternError::InvalidBackreference).
    /// The literal build is unaffected.
    pub fn strict(&self) -> bool {
        self.strict
    }

    /// Set strict back-reference validation.
    pub fn set_strict(
        &mut self,
        strict: bool,
    ) {
        self.strict = strict;
    }

    /// Set strict back-reference validation.
    pub fn with_strict(
        mut self,
        strict: bool,
    ) -> Self {
        self.set_strict(strict);
        self
    }

    /// The engine used to compile the pattern.
    pub fn engine(&self) -> RegexEngine {
        self.engine
    }

    /// Set the engine used to compile the pattern.
    pub fn set_engine(
        &mut self,
        engine: RegexEngine,
    ) {
        self.engine = engine;
    }

    /// Set the engine used to compile the pattern.
    pub fn with_engine(
        mut self,
        engine: RegexEngine,
    ) -> Self {
        self.set_engine(engine);
        self
    }

    /// The inline flag group which applies these options to a pattern.
    ///
    /// ## Returns
    /// One of `""`, `"(?i)"`, `"(?m)"` or `"(?im)"`.
    pub fn inline_flags(&self) -> &'static str {
        match (self.case_insensitive, self.multi_line) {
            (false, false) => "",
            (true, false) => "(?i)",
            (false, true) => "(?m)",
            (true, true) => "(?im)",
        }
    }
}

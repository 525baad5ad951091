//! # Shorthand Vocabulary
//!
//! Convenience operations with preset quantities and sources.
//! Everything here is expressed through the primitive builder operations.

use crate::builder::{Alternative, PatternBuilder, Term, TermSource};

const LETTERS: &str = "A-Za-z";
const LOWER_CASE_LETTERS: &str = "a-z";
const UPPER_CASE_LETTERS: &str = "A-Z";

impl PatternBuilder {
    /// Use the pending quantity if one was set without a source;
    /// otherwise start a new term matching exactly once.
    fn once_unless_quantified(self) -> Self {
        let term = self.pending();
        if term.has_quantity() && term.is_empty() {
            self
        } else {
            self.exactly(1)
        }
    }

    /// Match the text exactly once.
    pub fn then<S: AsRef<str>>(
        self,
        text: S,
    ) -> Self {
        self.exactly(1).of(text)
    }

    /// Alias of [`then`](Self::then).
    pub fn find<S: AsRef<str>>(
        self,
        text: S,
    ) -> Self {
        self.then(text)
    }

    /// Match one or more characters from the set.
    pub fn some<I>(
        self,
        chars: I,
    ) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        self.min(1).from_set(chars)
    }

    /// Match zero or more characters from the set.
    pub fn maybe_some<I>(
        self,
        chars: I,
    ) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        self.min(0).from_set(chars)
    }

    /// Match the text zero or one times.
    pub fn maybe<S: AsRef<str>>(
        self,
        text: S,
    ) -> Self {
        self.max(1).of(text)
    }

    /// Match one or more of any character.
    pub fn something(self) -> Self {
        self.min(1).of_any()
    }

    /// Match one or more characters, not starting with `text`.
    ///
    /// A single character is excluded from every position instead.
    pub fn something_but(
        self,
        text: &str,
    ) -> Self {
        if text.chars().count() == 1 {
            return self.min(1).not_from_set(text.chars());
        }
        self.not_ahead(PatternBuilder::new().then(text))
            .something()
    }

    /// Match zero or more of any character.
    pub fn anything(self) -> Self {
        self.min(0).of_any()
    }

    /// Match zero or more characters, not starting with `text`.
    ///
    /// A single character is excluded from every position instead.
    pub fn anything_but(
        self,
        text: &str,
    ) -> Self {
        if text.chars().count() == 1 {
            return self.min(0).not_from_set(text.chars());
        }
        self.not_ahead(PatternBuilder::new().then(text))
            .anything()
    }

    /// Match exactly one of any character.
    pub fn any(self) -> Self {
        self.exactly(1).of_any()
    }

    /// Match one line break: `\r\n`, `\r` or `\n`.
    pub fn line_break(self) -> Self {
        self.either(["\r\n", "\r", "\n"])
    }

    /// Repeat line breaks, using the pending quantity.
    pub fn line_breaks(self) -> Self {
        self.like(PatternBuilder::new().line_break())
    }

    /// Match a whitespace character.
    ///
    /// Uses the pending quantity if one is set; otherwise matches once.
    pub fn whitespace(self) -> Self {
        self.once_unless_quantified().of(r"\s")
    }

    /// Match a non-whitespace character.
    ///
    /// Uses the pending quantity if one is set; otherwise matches once.
    pub fn not_whitespace(self) -> Self {
        self.once_unless_quantified().of(r"\S")
    }

    /// Match one tab.
    pub fn tab(self) -> Self {
        self.exactly(1).of("\t")
    }

    /// Repeat tabs, using the pending quantity.
    pub fn tabs(self) -> Self {
        self.like(PatternBuilder::new().tab())
    }

    /// Match one digit.
    pub fn digit(self) -> Self {
        self.exactly(1).of(r"\d")
    }

    /// Match one non-digit.
    pub fn not_digit(self) -> Self {
        self.exactly(1).of(r"\D")
    }

    /// Repeat digits, using the pending quantity.
    pub fn digits(self) -> Self {
        self.like(PatternBuilder::new().digit())
    }

    /// Repeat non-digits, using the pending quantity.
    pub fn not_digits(self) -> Self {
        self.like(PatternBuilder::new().not_digit())
    }

    /// Match one ASCII letter.
    pub fn letter(self) -> Self {
        self.exactly(1).from_raw_set(LETTERS)
    }

    /// Match one character which is not an ASCII letter.
    pub fn not_letter(self) -> Self {
        self.exactly(1).not_from_raw_set(LETTERS)
    }

    /// Repeat ASCII letters, using the pending quantity.
    pub fn letters(self) -> Self {
        self.from_raw_set(LETTERS)
    }

    /// Repeat characters which are not ASCII letters, using the pending quantity.
    pub fn not_letters(self) -> Self {
        self.not_from_raw_set(LETTERS)
    }

    /// Match one lower case ASCII letter.
    pub fn lower_case_letter(self) -> Self {
        self.exactly(1).from_raw_set(LOWER_CASE_LETTERS)
    }

    /// Repeat lower case ASCII letters, using the pending quantity.
    pub fn lower_case_letters(self) -> Self {
        self.from_raw_set(LOWER_CASE_LETTERS)
    }

    /// Match one upper case ASCII letter.
    pub fn upper_case_letter(self) -> Self {
        self.exactly(1).from_raw_set(UPPER_CASE_LETTERS)
    }

    /// Repeat upper case ASCII letters, using the pending quantity.
    pub fn upper_case_letters(self) -> Self {
        self.from_raw_set(UPPER_CASE_LETTERS)
    }

    /// Assert that the alternative does not follow.
    pub fn neither<A: Into<Alternative>>(
        self,
        alternative: A,
    ) -> Self {
        self.not_ahead(alternative.into().into_fragment())
    }

    /// Also assert that the alternative does not follow, then match anything.
    ///
    /// Chains after [`neither`](Self::neither); the trailing
    /// [`anything`](Self::anything) left by a previous `nor` is replaced, so
    /// all assertions sit before a single "anything" term.
    pub fn nor<A: Into<Alternative>>(
        self,
        alternative: A,
    ) -> Self {
        let anything = Term {
            min: Some(0),
            source: Some(TermSource::Any),
            ..Default::default()
        };
        let builder = if *self.pending() == anything {
            self.discard_pending()
        } else {
            self
        };
        builder.neither(alternative).anything()
    }
}

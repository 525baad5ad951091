//! # Builder Entry Points
//!
//! Free functions which start a new [`PatternBuilder`] and apply one
//! operation to it, so a chain can begin without naming the type:
//!
//! ```rust
//! use patterncraft::factory;
//!
//! let literal = factory::exactly(2).of("ab").into_literal();
//! assert_eq!(literal, "(?:(?:ab){2,2})");
//! ```

use crate::builder::{Alternative, PatternBuilder, SubPattern};

/// Start a builder with case-insensitive matching.
pub fn ignore_case() -> PatternBuilder {
    PatternBuilder::new().ignore_case()
}

/// Start a builder with multi-line matching.
pub fn multi_line() -> PatternBuilder {
    PatternBuilder::new().multi_line()
}

/// Start a builder with strict back-reference validation.
pub fn strict() -> PatternBuilder {
    PatternBuilder::new().strict()
}

/// See [`PatternBuilder::start_of_input`].
pub fn start_of_input() -> PatternBuilder {
    PatternBuilder::new().start_of_input()
}

/// See [`PatternBuilder::start_of_line`].
pub fn start_of_line() -> PatternBuilder {
    PatternBuilder::new().start_of_line()
}

/// See [`PatternBuilder::end_of_input`].
pub fn end_of_input() -> PatternBuilder {
    PatternBuilder::new().end_of_input()
}

/// See [`PatternBuilder::end_of_line`].
pub fn end_of_line() -> PatternBuilder {
    PatternBuilder::new().end_of_line()
}

/// See [`PatternBuilder::either`].
pub fn either<I>(alternatives: I) -> PatternBuilder
where
    I: IntoIterator,
    I::Item: Into<Alternative>,
{
    PatternBuilder::new().either(alternatives)
}

/// See [`PatternBuilder::either_like`].
pub fn either_like<P: SubPattern>(sub: P) -> PatternBuilder {
    PatternBuilder::new().either_like(sub)
}

/// See [`PatternBuilder::neither`].
pub fn neither<A: Into<Alternative>>(alternative: A) -> PatternBuilder {
    PatternBuilder::new().neither(alternative)
}

/// See [`PatternBuilder::exactly`].
pub fn exactly(n: usize) -> PatternBuilder {
    PatternBuilder::new().exactly(n)
}

/// See [`PatternBuilder::min`].
pub fn min(n: usize) -> PatternBuilder {
    PatternBuilder::new().min(n)
}

/// See [`PatternBuilder::max`].
pub fn max(n: usize) -> PatternBuilder {
    PatternBuilder::new().max(n)
}

/// See [`PatternBuilder::min_max`].
pub fn min_max(
    min: usize,
    max: usize,
) -> PatternBuilder {
    PatternBuilder::new().min_max(min, max)
}

/// See [`PatternBuilder::ahead`].
pub fn ahead<P: SubPattern>(sub: P) -> PatternBuilder {
    PatternBuilder::new().ahead(sub)
}

/// See [`PatternBuilder::not_ahead`].
pub fn not_ahead<P: SubPattern>(sub: P) -> PatternBuilder {
    PatternBuilder::new().not_ahead(sub)
}

/// See [`PatternBuilder::behind`].
pub fn behind<P: SubPattern>(sub: P) -> PatternBuilder {
    PatternBuilder::new().behind(sub)
}

/// See [`PatternBuilder::not_behind`].
pub fn not_behind<P: SubPattern>(sub: P) -> PatternBuilder {
    PatternBuilder::new().not_behind(sub)
}

/// See [`PatternBuilder::then`].
pub fn then<S: AsRef<str>>(text: S) -> PatternBuilder {
    PatternBuilder::new().then(text)
}

/// See [`PatternBuilder::find`].
pub fn find<S: AsRef<str>>(text: S) -> PatternBuilder {
    PatternBuilder::new().find(text)
}

/// See [`PatternBuilder::some`].
pub fn some<I>(chars: I) -> PatternBuilder
where
    I: IntoIterator<Item = char>,
{
    PatternBuilder::new().some(chars)
}

/// See [`PatternBuilder::maybe_some`].
pub fn maybe_some<I>(chars: I) -> PatternBuilder
where
    I: IntoIterator<Item = char>,
{
    PatternBuilder::new().maybe_some(chars)
}

/// See [`PatternBuilder::maybe`].
pub fn maybe<S: AsRef<str>>(text: S) -> PatternBuilder {
    PatternBuilder::new().maybe(text)
}

/// See [`PatternBuilder::something`].
pub fn something() -> PatternBuilder {
    PatternBuilder::new().something()
}

/// See [`PatternBuilder::something_but`].
pub fn something_but(text: &str) -> PatternBuilder {
    PatternBuilder::new().something_but(text)
}

/// See [`PatternBuilder::anything`].
pub fn anything() -> PatternBuilder {
    PatternBuilder::new().anything()
}

/// See [`PatternBuilder::anything_but`].
pub fn anything_but(text: &str) -> PatternBuilder {
    PatternBuilder::new().anything_but(text)
}

/// See [`PatternBuilder::any`].
pub fn any() -> PatternBuilder {
    PatternBuilder::new().any()
}

/// See [`PatternBuilder::line_break`].
pub fn line_break() -> PatternBuilder {
    PatternBuilder::new().line_break()
}

/// See [`PatternBuilder::whitespace`].
pub fn whitespace() -> PatternBuilder {
    PatternBuilder::new().whitespace()
}

/// See [`PatternBuilder::not_whitespace`].
pub fn not_whitespace() -> PatternBuilder {
    PatternBuilder::new().not_whitespace()
}

/// See [`PatternBuilder::tab`].
pub fn tab() -> PatternBuilder {
    PatternBuilder::new().tab()
}

/// See [`PatternBuilder::digit`].
pub fn digit() -> PatternBuilder {
    PatternBuilder::new().digit()
}

/// See [`PatternBuilder::not_digit`].
pub fn not_digit() -> PatternBuilder {
    PatternBuilder::new().not_digit()
}

/// See [`PatternBuilder::letter`].
pub fn letter() -> PatternBuilder {
    PatternBuilder::new().letter()
}

/// See [`PatternBuilder::not_letter`].
pub fn not_letter() -> PatternBuilder {
    PatternBuilder::new().not_letter()
}

/// See [`PatternBuilder::lower_case_letter`].
pub fn lower_case_letter() -> PatternBuilder {
    PatternBuilder::new().lower_case_letter()
}

/// See [`PatternBuilder::upper_case_letter`].
pub fn upper_case_letter() -> PatternBuilder {
    PatternBuilder::new().upper_case_letter()
}

/// See [`PatternBuilder::append`].
pub fn append<P: SubPattern>(sub: P) -> PatternBuilder {
    PatternBuilder::new().append(sub)
}

/// See [`PatternBuilder::optional`].
pub fn optional<P: SubPattern>(sub: P) -> PatternBuilder {
    PatternBuilder::new().optional(sub)
}

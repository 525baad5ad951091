//! # Regex Engine Utilities
//!
//! Builder output frequently needs extended regex machinery (back-references,
//! lookaround) which only the [`fancy_regex`] crate provides; but naturally, this has
//! performance costs. We'd prefer to avoid using the [`fancy_regex`] crate when possible,
//! falling back on the standard [`regex`] crate when patterns permit this.
//!
//! This recurses into two problems:
//!
//! * Labeling Patterns - [`RegexPattern`]
//!   * [`RegexPattern::Basic`] - a pattern which was written for basic regular expressions.
//!   * [`RegexPattern::Fancy`] - a pattern which was written for regex extensions.
//!   * [`RegexPattern::Adaptive`] - unknown target, try basic; then fall-up to fancy.
//! * Wrapping Compiled Regex - [`RegexWrapper`]

mod regex_pattern;
mod regex_wrapper;

#[doc(inline)]
pub use regex_pattern::*;
#[doc(inline)]
pub use regex_wrapper::*;

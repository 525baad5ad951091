//! # Sub-Pattern Fragments
//!
//! Composition operators never share state with the sub-builders they
//! consume. A sub-pattern is reduced to a [`Fragment`], the finalized
//! literal plus the number of capture groups it contains, and only the
//! fragment is spliced into the parent.

use crate::builder::PatternBuilder;

/// A back-reference inside a [`Fragment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackreferenceSite {
    /// The referenced group index.
    pub index: usize,

    /// The number of capture groups in the fragment which open before the reference.
    pub preceding: usize,
}

impl BackreferenceSite {
    /// The same site, behind `groups` more capture groups.
    pub fn shifted(
        self,
        groups: usize,
    ) -> Self {
        Self {
            preceding: self.preceding + groups,
            ..self
        }
    }

    /// Can the reference name a group, given `before` groups ahead of the fragment?
    pub fn is_valid_after(
        &self,
        before: usize,
    ) -> bool {
        self.index != 0 && self.index <= before + self.preceding
    }
}

/// A finalized sub-pattern literal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fragment {
    literal: String,
    groups: usize,
    backreferences: Vec<BackreferenceSite>,
}

impl Fragment {
    /// Create a fragment from a literal and its capture group count.
    pub fn new<S: Into<String>>(
        literal: S,
        groups: usize,
    ) -> Self {
        Self {
            literal: literal.into(),
            groups,
            backreferences: Vec::new(),
        }
    }

    /// Attach the back-reference sites found in the literal.
    pub fn with_backreferences<I>(
        mut self,
        sites: I,
    ) -> Self
    where
        I: IntoIterator<Item = BackreferenceSite>,
    {
        self.backreferences = sites.into_iter().collect();
        self
    }

    /// The pattern text.
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// The number of capture groups in the pattern text.
    pub fn groups(&self) -> usize {
        self.groups
    }

    /// The back-references in the pattern text, in order.
    pub fn backreferences(&self) -> &[BackreferenceSite] {
        &self.backreferences
    }

    /// Append plain pattern text, without groups or references.
    pub fn push_str(
        &mut self,
        text: &str,
    ) {
        self.literal.push_str(text);
    }

    /// Append another fragment; its groups are numbered after ours.
    pub fn push(
        &mut self,
        other: Fragment,
    ) {
        let offset = self.groups;
        self.backreferences.extend(
            other
                .backreferences
                .into_iter()
                .map(|site| site.shifted(offset)),
        );
        self.literal.push_str(&other.literal);
        self.groups += other.groups;
    }

    /// Surround the fragment with non-capturing text, e.g. `(?=` and `)`.
    pub fn wrap(
        self,
        open: &str,
        close: &str,
    ) -> Self {
        let mut out = Fragment::new(open, 0);
        out.push(self);
        out.push_str(close);
        out
    }

    /// Consume the fragment, returning the pattern text.
    pub fn into_literal(self) -> String {
        self.literal
    }
}

/// Anything which can describe a sub-pattern.
///
/// Implemented for:
/// * [`PatternBuilder`] values, which are consumed;
/// * `&PatternBuilder`, which is rendered without being modified;
/// * closures `FnOnce(PatternBuilder) -> PatternBuilder`, which are run
///   against a fresh builder;
/// * [`Fragment`]s.
pub trait SubPattern {
    /// Build the sub-pattern in isolation and extract its fragment.
    fn into_fragment(self) -> Fragment;
}

impl SubPattern for Fragment {
    fn into_fragment(self) -> Fragment {
        self
    }
}

impl SubPattern for PatternBuilder {
    fn into_fragment(mut self) -> Fragment {
        self.build_fragment()
    }
}

impl SubPattern for &PatternBuilder {
    fn into_fragment(self) -> Fragment {
        self.clone().into_fragment()
    }
}

impl<F> SubPattern for F
where
    F: FnOnce(PatternBuilder) -> PatternBuilder,
{
    fn into_fragment(self) -> Fragment {
        self(PatternBuilder::new()).into_fragment()
    }
}

/// Build a sub-pattern in isolation and return its literal.
///
/// ## Arguments
/// * `description` - The sub-pattern; see [`SubPattern`].
pub fn literal_of<P: SubPattern>(description: P) -> String {
    description.into_fragment().into_literal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_and_builder_agree() {
        let from_closure = literal_of(|p: PatternBuilder| p.exactly(2).of("ab"));
        let from_builder = literal_of(PatternBuilder::new().exactly(2).of("ab"));
        assert_eq!(from_closure, from_builder);
        assert_eq!(from_closure, "(?:(?:ab){2,2})");
    }

    #[test]
    fn test_borrowed_builder_is_unchanged() {
        let sub = PatternBuilder::new().min(1).of("p");
        let fragment = (&sub).into_fragment();
        assert_eq!(fragment.literal(), "(?:(?:p){1,})");
        assert_eq!(sub.pending().min, Some(1));
    }

    #[test]
    fn test_group_count() {
        let fragment = PatternBuilder::new()
            .exactly(1)
            .of("a")
            .as_group()
            .exactly(1)
            .of("b")
            .as_group()
            .into_fragment();
        assert_eq!(fragment.groups(), 2);
    }

    #[test]
    fn test_backreference_sites() {
        let fragment = PatternBuilder::new()
            .exactly(1)
            .of_backreference(2)
            .exactly(1)
            .of("a")
            .as_group()
            .exactly(1)
            .of_backreference(1)
            .into_fragment();
        assert_eq!(
            fragment.backreferences(),
            &[
                BackreferenceSite {
                    index: 2,
                    preceding: 0
                },
                BackreferenceSite {
                    index: 1,
                    preceding: 1
                },
            ]
        );
        assert!(!fragment.backreferences()[0].is_valid_after(1));
        assert!(fragment.backreferences()[0].is_valid_after(2));
        assert!(fragment.backreferences()[1].is_valid_after(0));
    }

    #[test]
    fn test_push_and_wrap_shift_sites() {
        let mut fragment = Fragment::new("(a)", 1);
        fragment.push(
            Fragment::new(r"\1", 0).with_backreferences([BackreferenceSite {
                index: 1,
                preceding: 0,
            }]),
        );
        let fragment = fragment.wrap("(?=", ")");
        assert_eq!(fragment.literal(), r"(?=(a)\1)");
        assert_eq!(fragment.groups(), 1);
        assert_eq!(fragment.backreferences()[0].preceding, 1);
    }
}

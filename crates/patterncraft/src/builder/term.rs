//! # Pending Terms
//!
//! A [`Term`] is a single quantified unit which has not yet been
//! emitted into a pattern. Terms are rendered exactly once, on flush.

use crate::builder::{BackreferenceSite, Fragment};

/// The thing a [`Term`] repeats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermSource {
    /// Literal text; already escaped.
    Text(String),

    /// Any single character: `.`.
    Any,

    /// A back-reference to a numbered capture group.
    Backreference(usize),

    /// A character class; members already escaped.
    Set(String),

    /// A negated character class; members already escaped.
    NotSet(String),

    /// A sub-pattern, embedded verbatim.
    Embedded(Fragment),
}

impl TermSource {
    /// Render the source as pattern text.
    pub fn render(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Any => ".".to_string(),
            Self::Backreference(index) => format!("\\{index}"),
            Self::Set(members) => format!("[{members}]"),
            Self::NotSet(members) => format!("[^{members}]"),
            Self::Embedded(fragment) => fragment.literal().to_string(),
        }
    }

    /// Does the source render nothing?
    ///
    /// Empty text, empty sets and empty sub-patterns leave the term unset.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Set(members) | Self::NotSet(members) => members.is_empty(),
            Self::Embedded(fragment) => fragment.literal().is_empty(),
            Self::Any | Self::Backreference(_) => false,
        }
    }

    /// The back-references in the rendered source.
    fn backreferences(&self) -> Vec<BackreferenceSite> {
        match self {
            Self::Backreference(index) => vec![BackreferenceSite {
                index: *index,
                preceding: 0,
            }],
            Self::Embedded(fragment) => fragment.backreferences().to_vec(),
            _ => Vec::new(),
        }
    }
}

/// A pending quantified unit.
///
/// Bounds which are unset render as `0` (min) and unbounded (max).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Term {
    /// Lower repetition bound.
    pub min: Option<usize>,

    /// Upper repetition bound.
    pub max: Option<usize>,

    /// What is repeated.
    pub source: Option<TermSource>,

    /// Use a non-greedy quantifier.
    pub reluctant: bool,

    /// Render as a capturing group.
    pub captured: bool,
}

impl Term {
    /// Is there nothing to emit?
    ///
    /// Only terms with a non-empty source produce output; quantities and
    /// modifiers without one are dropped on flush.
    pub fn is_empty(&self) -> bool {
        self.source.as_ref().is_none_or(TermSource::is_empty)
    }

    /// The number of capture groups the rendered term contains.
    pub fn groups(&self) -> usize {
        let embedded = match &self.source {
            Some(TermSource::Embedded(fragment)) => fragment.groups(),
            _ => 0,
        };
        usize::from(self.captured) + embedded
    }

    /// Have any quantity bounds been set?
    pub fn has_quantity(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    /// The quantifier text, e.g. `{2,5}`, `{2,}` or `{0,5}`.
    pub fn quantity_literal(&self) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!("{{{min},{max}}}"),
            (Some(min), None) => format!("{{{min},}}"),
            (None, Some(max)) => format!("{{0,{max}}}"),
            (None, None) => "{0,}".to_string(),
        }
    }

    /// Render the term as pattern text.
    ///
    /// ## Returns
    /// `None` if the term is empty; otherwise
    /// `(<capture>(?:<source>)<quantity><reluctant>)`.
    pub fn render(&self) -> Option<String> {
        self.fragment().map(Fragment::into_literal)
    }

    /// Render the term as a fragment, tracking its groups and back-references.
    pub fn fragment(&self) -> Option<Fragment> {
        if self.is_empty() {
            return None;
        }
        let source = self.source.as_ref()?;

        let mut out = String::from("(");
        if !self.captured {
            out.push_str("?:");
        }
        out.push_str("(?:");
        out.push_str(&source.render());
        out.push(')');
        out.push_str(&self.quantity_literal());
        if self.reluctant {
            out.push('?');
        }
        out.push(')');

        // A capturing term opens its group before any group in an embedded source.
        let outer = match source {
            TermSource::Embedded(_) => usize::from(self.captured),
            _ => 0,
        };
        let sites = source
            .backreferences()
            .into_iter()
            .map(|site| site.shifted(outer));

        Some(Fragment::new(out, self.groups()).with_backreferences(sites))
    }
}

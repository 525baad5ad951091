//! # Compiled Matchers

use core::ops::Range;

use crate::{
    builder::PatternOptions,
    errors::{PCResult, PatternError},
    regex::{GroupSpans, RegexWrapper},
};

/// A match found by a [`Matcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch<'h> {
    haystack: &'h str,
    groups: GroupSpans,
}

impl<'h> PatternMatch<'h> {
    /// The span of the whole match.
    pub fn range(&self) -> Range<usize> {
        // Group 0 is always present on a match.
        self.groups
            .first()
            .cloned()
            .flatten()
            .unwrap_or_default()
    }

    /// The matched text.
    pub fn as_str(&self) -> &'h str {
        &self.haystack[self.range()]
    }

    /// The number of groups, including group `0` (the whole match).
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Is this match without groups?
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The span of group `index`, if it participated in the match.
    pub fn group_range(
        &self,
        index: usize,
    ) -> Option<Range<usize>> {
        self.groups.get(index).cloned().flatten()
    }

    /// The text of group `index`, if it participated in the match.
    pub fn group(
        &self,
        index: usize,
    ) -> Option<&'h str> {
        self.group_range(index).map(|range| &self.haystack[range])
    }
}

/// A compiled pattern.
#[derive(Debug, Clone)]
pub struct Matcher {
    literal: String,
    options: PatternOptions,
    regex: RegexWrapper,
}

impl Matcher {
    /// Compile a pattern literal with the given options.
    ///
    /// Case-insensitive and multi-line options are applied as an inline flag
    /// prefix; the engine is selected by [`PatternOptions::engine`].
    ///
    /// ## Returns
    /// The compiled matcher, or [`PatternError::Compile`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(literal)))]
    pub fn compile<S: Into<String>>(
        literal: S,
        options: PatternOptions,
    ) -> PCResult<Self> {
        let literal = literal.into();
        let pattern = options
            .engine()
            .label(format!("{}{}", options.inline_flags(), literal));

        log::debug!("compiling pattern ({:?}): {}", options.engine(), pattern.as_str());

        let regex = pattern
            .compile()
            .map_err(|source| PatternError::Compile {
                pattern: pattern.as_str().to_string(),
                source,
            })?;

        Ok(Self {
            literal,
            options,
            regex,
        })
    }

    /// The builder literal, without the option flag prefix.
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// The full pattern handed to the engine.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// The options the pattern was compiled with.
    pub fn options(&self) -> &PatternOptions {
        &self.options
    }

    /// The compiled regex.
    pub fn regex(&self) -> &RegexWrapper {
        &self.regex
    }

    /// Does the pattern match anywhere in `haystack`?
    pub fn is_match(
        &self,
        haystack: &str,
    ) -> PCResult<bool> {
        self.regex.is_match(haystack).map_err(PatternError::Match)
    }

    /// Find the leftmost match.
    pub fn find<'h>(
        &self,
        haystack: &'h str,
    ) -> PCResult<Option<PatternMatch<'h>>> {
        let span = self.regex.find(haystack).map_err(PatternError::Match)?;
        Ok(span.map(|range| PatternMatch {
            haystack,
            groups: vec![Some(range)],
        }))
    }

    /// Find the leftmost match, with capture group spans.
    pub fn captures<'h>(
        &self,
        haystack: &'h str,
    ) -> PCResult<Option<PatternMatch<'h>>> {
        let groups = self.regex.captures(haystack).map_err(PatternError::Match)?;
        Ok(groups.map(|groups| PatternMatch { haystack, groups }))
    }

    /// Iterate over successive non-overlapping matches.
    pub fn find_iter<'r, 'h>(
        &'r self,
        haystack: &'h str,
    ) -> impl Iterator<Item = PCResult<PatternMatch<'h>>> + 'r
    where
        'h: 'r,
    {
        self.regex.find_iter(haystack).map(move |span| {
            span.map(|range| PatternMatch {
                haystack,
                groups: vec![Some(range)],
            })
            .map_err(PatternError::Match)
        })
    }
}

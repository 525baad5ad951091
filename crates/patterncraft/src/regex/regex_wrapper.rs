//! # Regex Wrapper
//! This modules provides mechanisms to mix `regex` and `fancy_regex` types.

use core::{fmt::Debug, ops::Range};

/// Error wrapper for regex patterns.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub enum ErrorWrapper {
    /// Error from `regex`.
    Basic(Box<regex::Error>),

    /// Error from `fancy_regex`.
    Fancy(Box<fancy_regex::Error>),
}

impl From<regex::Error> for ErrorWrapper {
    fn from(err: regex::Error) -> Self {
        Self::Basic(err.into())
    }
}

impl From<fancy_regex::Error> for ErrorWrapper {
    fn from(err: fancy_regex::Error) -> Self {
        Self::Fancy(err.into())
    }
}

impl core::fmt::Display for ErrorWrapper {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        match self {
            Self::Basic(err) => core::fmt::Display::fmt(err, f),
            Self::Fancy(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl core::error::Error for ErrorWrapper {}

/// Capture group spans of a single match.
///
/// Index `0` is the whole match; unmatched groups are `None`.
pub type GroupSpans = Vec<Option<Range<usize>>>;

/// Wrapper for compiled regex patterns.
#[derive(Debug, Clone)]
pub enum RegexWrapper {
    /// Wrapper for `regex::Regex`.
    Basic(regex::Regex),

    /// Wrapper for `fancy_regex::Regex`.
    Fancy(fancy_regex::Regex),
}

impl From<regex::Regex> for RegexWrapper {
    fn from(regex: regex::Regex) -> Self {
        Self::Basic(regex)
    }
}

impl From<fancy_regex::Regex> for RegexWrapper {
    fn from(regex: fancy_regex::Regex) -> Self {
        Self::Fancy(regex)
    }
}

impl RegexWrapper {
    /// Is this `Basic`?
    ///
    /// ## Returns
    /// `true` if it wraps a `regex::Regex`, `false` otherwise.
    pub fn is_basic(&self) -> bool {
        matches!(self, Self::Basic(_))
    }

    /// Is this `Fancy`?
    ///
    /// ## Returns
    /// `true` if it wraps a `fancy_regex::Regex`, `false` otherwise.
    pub fn is_fancy(&self) -> bool {
        matches!(self, Self::Fancy(_))
    }

    /// Get the underlying regex pattern.
    ///
    /// ## Returns
    /// The regex pattern string slice.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(regex) => regex.as_str(),
            Self::Fancy(regex) => regex.as_str(),
        }
    }

    /// Does the pattern match anywhere in `haystack`?
    pub fn is_match(
        &self,
        haystack: &str,
    ) -> Result<bool, ErrorWrapper> {
        match self {
            Self::Basic(regex) => Ok(regex.is_match(haystack)),
            Self::Fancy(regex) => regex.is_match(haystack).map_err(ErrorWrapper::from),
        }
    }

    /// Find the span of the leftmost match.
    pub fn find(
        &self,
        haystack: &str,
    ) -> Result<Option<Range<usize>>, ErrorWrapper> {
        match self {
            Self::Basic(regex) => Ok(regex.find(haystack).map(|m| m.start()..m.end())),
            Self::Fancy(regex) => regex
                .find(haystack)
                .map(|m| m.map(|m| m.start()..m.end()))
                .map_err(ErrorWrapper::from),
        }
    }

    /// Find the leftmost match and the spans of its capture groups.
    ///
    /// ## Arguments
    /// * `haystack` - The string to search in.
    ///
    /// ## Returns
    /// The group spans of the match, or `None` if there is no match.
    pub fn captures(
        &self,
        haystack: &str,
    ) -> Result<Option<GroupSpans>, ErrorWrapper> {
        match self {
            Self::Basic(regex) => Ok(regex.captures(haystack).map(|caps| {
                (0..caps.len())
                    .map(|i| caps.get(i).map(|m| m.start()..m.end()))
                    .collect()
            })),
            Self::Fancy(regex) => regex
                .captures(haystack)
                .map(|caps| {
                    caps.map(|caps| {
                        (0..caps.len())
                            .map(|i| caps.get(i).map(|m| m.start()..m.end()))
                            .collect()
                    })
                })
                .map_err(ErrorWrapper::from),
        }
    }

    /// Wrapper for `find_iter`.
    ///
    /// ## Arguments
    /// * `haystack` - The string to search in.
    ///
    /// ## Returns
    /// A `MatchesWrapper` iterator over the match spans.
    pub fn find_iter<'r, 'h>(
        &'r self,
        haystack: &'h str,
    ) -> MatchesWrapper<'r, 'h> {
        match self {
            Self::Basic(regex) => regex.find_iter(haystack).into(),
            Self::Fancy(regex) => regex.find_iter(haystack).into(),
        }
    }
}

/// Wrapper for regex matches.
pub enum MatchesWrapper<'r, 'h> {
    /// Wrapper for `regex::Matches`.
    Regex(regex::Matches<'r, 'h>),

    /// Wrapper for `fancy_regex::Matches`.
    FancyRegex(fancy_regex::Matches<'r, 'h>),
}

impl<'r, 'h> From<regex::Matches<'r, 'h>> for MatchesWrapper<'r, 'h> {
    fn from(matches: regex::Matches<'r, 'h>) -> Self {
        Self::Regex(matches)
    }
}

impl<'r, 'h> From<fancy_regex::Matches<'r, 'h>> for MatchesWrapper<'r, 'h> {
    fn from(matches: fancy_regex::Matches<'r, 'h>) -> Self {
        Self::FancyRegex(matches)
    }
}

impl Iterator for MatchesWrapper<'_, '_> {
    type Item = Result<Range<usize>, ErrorWrapper>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Regex(matches) => matches.next().map(|m| Ok(m.start()..m.end())),
            Self::FancyRegex(matches) => matches.next().map(|m| {
                m.map(|m| m.start()..m.end())
                    .map_err(ErrorWrapper::from)
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regex::RegexPattern;

    #[test]
    fn test_find_iter_both_engines() {
        let text = "apple 123 [x] xyz boat";

        for pattern in [
            RegexPattern::Basic(r"(apple|\[x\]|boat)".to_string()),
            RegexPattern::Fancy(r"(apple|\[x\]|boat)".to_string()),
        ] {
            let re = pattern.compile().unwrap();
            assert_eq!(
                re.find_iter(text)
                    .collect::<Result<Vec<_>, _>>()
                    .unwrap(),
                vec![0..5, 10..13, 18..22]
            );
        }
    }

    #[test]
    fn test_captures() {
        let re = RegexPattern::Fancy(r"(a+)(x)?(b)\1".to_string())
            .compile()
            .unwrap();
        let groups = re.captures("zzaabaa").unwrap().unwrap();
        assert_eq!(groups, vec![Some(2..7), Some(2..4), None, Some(4..5)]);

        assert_eq!(re.captures("zzz").unwrap(), None);
        assert_eq!(re.find("zzaabaa").unwrap(), Some(2..7));
        assert!(re.is_match("aba").unwrap());
    }
}

//! # Pattern Builder
//!
//! [`PatternBuilder`] accumulates at most one pending [`Term`]. Calls which
//! would conflict with the pending term (a new quantity, an anchor, a
//! composition operator) flush it first; source and modifier setters never
//! flush, so a source can be attached before or after its quantity.

use core::fmt;

use crate::{
    builder::{
        Alternative,
        Fragment,
        OpenAlternation,
        PatternOptions,
        SubPattern,
        Term,
        TermSource,
        escape::{escape_inside_class, escape_outside_class},
    },
    errors::{PCResult, PatternError},
    matcher::Matcher,
};

/// A strict-mode back-reference violation: `(index, groups)`.
type Violation = (usize, usize);

/// Fluent regular expression builder.
///
/// ## Style Hints
///
/// Builders are chained by value; every operation consumes the builder
/// and returns it.
///
/// ```rust
/// use patterncraft::PatternBuilder;
///
/// let literal = PatternBuilder::new()
///     .start_of_input()
///     .exactly(3)
///     .digits()
///     .then("-")
///     .exactly(4)
///     .digits()
///     .end_of_input()
///     .into_literal();
///
/// assert_eq!(
///     literal,
///     r"(?:^)(?:(?:(?:(?:\d){1,1})){3,3})(?:(?:-){1,1})(?:(?:(?:(?:\d){1,1})){4,4})(?:$)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PatternBuilder {
    /// Emitted output, in order.
    segments: Vec<Fragment>,

    /// The unit which has not yet been emitted.
    term: Term,

    /// An alternation group still accepting branches.
    alternation: Option<OpenAlternation>,

    options: PatternOptions,

    /// The first strict-mode violation, if any.
    violation: Option<Violation>,
}

impl PatternBuilder {
    /// Create an empty builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder with the given options.
    pub fn with_options(options: PatternOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    /// Get the accumulated [`PatternOptions`].
    pub fn options(&self) -> &PatternOptions {
        &self.options
    }

    /// Get the pending term.
    pub fn pending(&self) -> &Term {
        &self.term
    }

    /// The number of capture groups emitted so far.
    ///
    /// Groups in the pending term are not counted until it is flushed.
    pub fn capture_count(&self) -> usize {
        let emitted: usize = self.segments.iter().map(Fragment::groups).sum();
        emitted + self.alternation.as_ref().map_or(0, OpenAlternation::groups)
    }

    /// Close any open alternation, then emit the pending term.
    ///
    /// Empty terms are dropped.
    fn flush(&mut self) {
        self.close_alternation();

        let term = core::mem::take(&mut self.term);
        let Some(fragment) = term.fragment() else {
            return;
        };

        log::trace!("flushed term: {}", fragment.literal());
        self.emit(fragment);
    }

    fn close_alternation(&mut self) {
        if let Some(alternation) = self.alternation.take() {
            self.emit(alternation.close());
        }
    }

    /// Quantities only flush a term which already has a source,
    /// so that bounds set back to back accumulate.
    fn flush_for_quantity(&mut self) {
        if self.term.is_empty() {
            self.close_alternation();
        } else {
            self.flush();
        }
    }

    /// Append a fragment to the output.
    ///
    /// Called with no open alternation, so [`capture_count`](Self::capture_count)
    /// is the number of groups ahead of the fragment.
    fn emit(
        &mut self,
        fragment: Fragment,
    ) {
        self.check_backreferences(&fragment);
        self.segments.push(fragment);
    }

    fn check_backreferences(
        &mut self,
        fragment: &Fragment,
    ) {
        if !self.options.strict() || self.violation.is_some() {
            return;
        }
        let before = self.capture_count();
        let invalid = fragment
            .backreferences()
            .iter()
            .find(|site| !site.is_valid_after(before));
        if let Some(site) = invalid {
            let groups = before + site.preceding;
            log::warn!(
                "back-reference \\{} precedes its group ({groups} groups emitted)",
                site.index
            );
            self.violation = Some((site.index, groups));
        }
    }

    fn with_source(
        mut self,
        source: TermSource,
    ) -> Self {
        self.term.source = Some(source);
        self
    }

    fn flush_then_emit(
        mut self,
        fragment: Fragment,
    ) -> Self {
        self.flush();
        log::trace!("emitted: {}", fragment.literal());
        self.emit(fragment);
        self
    }

    // Options.

    /// Enable case-insensitive matching.
    pub fn ignore_case(mut self) -> Self {
        self.options.set_case_insensitive(true);
        self
    }

    /// Enable multi-line matching; `^` and `$` match at line boundaries.
    pub fn multi_line(mut self) -> Self {
        self.options.set_multi_line(true);
        self
    }

    /// Enable strict back-reference validation.
    ///
    /// See [`PatternOptions::strict`].
    pub fn strict(mut self) -> Self {
        self.options.set_strict(true);
        self
    }

    // Quantities.

    /// Repeat the next source exactly `n` times.
    pub fn exactly(
        self,
        n: usize,
    ) -> Self {
        self.min_max(n, n)
    }

    /// Repeat the next source at least `n` times.
    pub fn min(
        mut self,
        n: usize,
    ) -> Self {
        self.flush_for_quantity();
        self.term.min = Some(n);
        self
    }

    /// Repeat the next source at most `n` times.
    pub fn max(
        mut self,
        n: usize,
    ) -> Self {
        self.flush_for_quantity();
        self.term.max = Some(n);
        self
    }

    /// Repeat the next source between `min` and `max` times.
    pub fn min_max(
        self,
        min: usize,
        max: usize,
    ) -> Self {
        self.min(min).max(max)
    }

    // Sources.

    /// Repeat literal text; special characters are escaped.
    ///
    /// Empty text leaves the term unset.
    pub fn of<S: AsRef<str>>(
        self,
        text: S,
    ) -> Self {
        let text = escape_outside_class(text.as_ref());
        self.with_source(TermSource::Text(text))
    }

    /// Repeat any single character.
    pub fn of_any(self) -> Self {
        self.with_source(TermSource::Any)
    }

    /// Repeat the text matched by capture group `index`.
    ///
    /// Groups are numbered from `1` by position in the final pattern;
    /// the builder does not renumber or (unless strict) validate them.
    pub fn of_backreference(
        self,
        index: usize,
    ) -> Self {
        self.with_source(TermSource::Backreference(index))
    }

    /// Repeat any one of the given characters.
    ///
    /// Only `^`, `-` and `]` are escaped. The engine also treats `[`, `&&`,
    /// `--` and `~~` as class syntax, so `['a', '[']` fails to compile and
    /// `"a&&b"` builds an intersection which matches nothing.
    /// An empty set leaves the term unset.
    pub fn from_set<I>(
        self,
        chars: I,
    ) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let members: String = chars.into_iter().collect();
        self.with_source(TermSource::Set(escape_inside_class(&members)))
    }

    /// Repeat any character except the given characters.
    ///
    /// Escaping follows [`from_set`](Self::from_set). An empty set leaves the
    /// term unset.
    pub fn not_from_set<I>(
        self,
        chars: I,
    ) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let members: String = chars.into_iter().collect();
        self.with_source(TermSource::NotSet(escape_inside_class(&members)))
    }

    /// Drop the pending term without emitting it.
    pub(crate) fn discard_pending(mut self) -> Self {
        self.term = Term::default();
        self
    }

    /// Use raw character class members, e.g. `A-Za-z`, without escaping.
    pub(crate) fn from_raw_set(
        self,
        members: &str,
    ) -> Self {
        self.with_source(TermSource::Set(members.to_string()))
    }

    /// Use raw negated character class members without escaping.
    pub(crate) fn not_from_raw_set(
        self,
        members: &str,
    ) -> Self {
        self.with_source(TermSource::NotSet(members.to_string()))
    }

    /// Repeat a sub-pattern.
    ///
    /// Without an earlier quantity, the sub-pattern repeats zero or more times.
    pub fn like<P: SubPattern>(
        self,
        sub: P,
    ) -> Self {
        self.with_source(TermSource::Embedded(sub.into_fragment()))
    }

    // Modifiers.

    /// Use a non-greedy quantifier for the pending term.
    pub fn reluctantly(mut self) -> Self {
        self.term.reluctant = true;
        self
    }

    /// Capture the pending term as a numbered group.
    pub fn as_group(mut self) -> Self {
        self.term.captured = true;
        self
    }

    // Anchors.

    /// Match at the start of the input.
    pub fn start_of_input(self) -> Self {
        self.flush_then_emit(Fragment::new("(?:^)", 0))
    }

    /// Match at the start of a line; enables multi-line matching.
    pub fn start_of_line(self) -> Self {
        self.multi_line().start_of_input()
    }

    /// Match at the end of the input.
    pub fn end_of_input(self) -> Self {
        self.flush_then_emit(Fragment::new("(?:$)", 0))
    }

    /// Match at the end of a line; enables multi-line matching.
    pub fn end_of_line(self) -> Self {
        self.multi_line().end_of_input()
    }

    // Alternation.

    /// Match any one of the given alternatives.
    ///
    /// Text alternatives match exactly one occurrence of the text.
    /// The group stays open; a following [`or`](Self::or) or
    /// [`or_like`](Self::or_like) adds another branch to it.
    pub fn either<I>(
        mut self,
        alternatives: I,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Alternative>,
    {
        self.flush();
        let mut alternation = OpenAlternation::default();
        for alternative in alternatives {
            alternation.push(alternative.into().into_fragment());
        }
        self.alternation = Some(alternation);
        self
    }

    /// Open an alternation whose first branch is the given sub-pattern.
    pub fn either_like<P: SubPattern>(
        self,
        sub: P,
    ) -> Self {
        self.either([Alternative::like(sub)])
    }

    /// Add a branch to the open alternation.
    ///
    /// See [`or_like`](Self::or_like).
    pub fn or<A: Into<Alternative>>(
        self,
        alternative: A,
    ) -> Self {
        self.or_like(alternative.into().into_fragment())
    }

    /// Add a sub-pattern branch to the open alternation.
    ///
    /// If no alternation is open, the pending term is flushed and a new
    /// alternation is started whose first branch is the most recently
    /// emitted unit (if there is one).
    pub fn or_like<P: SubPattern>(
        mut self,
        sub: P,
    ) -> Self {
        let fragment = sub.into_fragment();

        if self.term.is_empty()
            && let Some(alternation) = self.alternation.as_mut()
        {
            alternation.push(fragment);
            return self;
        }

        self.flush();
        let mut alternation = OpenAlternation::default();
        if let Some(previous) = self.segments.pop() {
            alternation.push(previous);
        }
        alternation.push(fragment);
        self.alternation = Some(alternation);
        self
    }

    // Lookaround.

    fn lookaround<P: SubPattern>(
        self,
        open: &str,
        sub: P,
    ) -> Self {
        self.flush_then_emit(sub.into_fragment().wrap(open, ")"))
    }

    /// Assert that the sub-pattern follows, without consuming it.
    pub fn ahead<P: SubPattern>(
        self,
        sub: P,
    ) -> Self {
        self.lookaround("(?=", sub)
    }

    /// Assert that the sub-pattern does not follow.
    pub fn not_ahead<P: SubPattern>(
        self,
        sub: P,
    ) -> Self {
        self.lookaround("(?!", sub)
    }

    /// Assert that the sub-pattern precedes, without consuming it.
    ///
    /// The engine requires the sub-pattern to have a fixed length.
    pub fn behind<P: SubPattern>(
        self,
        sub: P,
    ) -> Self {
        self.lookaround("(?<=", sub)
    }

    /// Assert that the sub-pattern does not precede.
    ///
    /// The engine requires the sub-pattern to have a fixed length.
    pub fn not_behind<P: SubPattern>(
        self,
        sub: P,
    ) -> Self {
        self.lookaround("(?<!", sub)
    }

    // Embedding.

    /// Match the sub-pattern exactly once.
    pub fn append<P: SubPattern>(
        self,
        sub: P,
    ) -> Self {
        self.exactly(1).like(sub)
    }

    /// Match the sub-pattern zero or one times.
    pub fn optional<P: SubPattern>(
        self,
        sub: P,
    ) -> Self {
        self.max(1).like(sub)
    }

    // Building.

    /// Flush the pending term and return the output as one fragment.
    pub fn build_fragment(&mut self) -> Fragment {
        self.flush();
        let mut fragment = Fragment::default();
        for segment in &self.segments {
            fragment.push(segment.clone());
        }
        fragment
    }

    /// Flush the pending term and return the pattern text.
    ///
    /// Repeated calls return the same text.
    pub fn build_literal(&mut self) -> String {
        self.flush();
        self.segments.iter().map(Fragment::literal).collect()
    }

    /// Render the pattern text, leaving this builder untouched.
    pub fn literal(&self) -> String {
        self.clone().build_literal()
    }

    /// Consume the builder, returning the pattern text.
    pub fn into_literal(mut self) -> String {
        self.build_literal()
    }

    /// Flush the pending term and compile the pattern.
    ///
    /// ## Returns
    /// The compiled [`Matcher`], or:
    /// * [`PatternError::InvalidBackreference`] on a strict-mode violation;
    /// * [`PatternError::Compile`] if the engine rejects the pattern.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn build(&mut self) -> PCResult<Matcher> {
        let literal = self.build_literal();
        if let Some((index, groups)) = self.violation {
            return Err(PatternError::InvalidBackreference { index, groups });
        }
        Matcher::compile(literal, self.options)
    }
}

impl fmt::Display for PatternBuilder {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.literal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_rendering() {
        assert_eq!(PatternBuilder::new().exactly(3).of("p").into_literal(), "(?:(?:p){3,3})");
        assert_eq!(PatternBuilder::new().min(3).of("p").into_literal(), "(?:(?:p){3,})");
        assert_eq!(PatternBuilder::new().max(3).of("p").into_literal(), "(?:(?:p){0,3})");
        assert_eq!(
            PatternBuilder::new().min(3).max(7).of("p").into_literal(),
            "(?:(?:p){3,7})"
        );
        assert_eq!(PatternBuilder::new().min_max(3, 7).of("p").into_literal(), "(?:(?:p){3,7})");
        assert_eq!(PatternBuilder::new().of("p").into_literal(), "(?:(?:p){0,})");
    }

    #[test]
    fn test_source_before_quantity() {
        // The quantity setter does not flush a term which has no source yet.
        let a = PatternBuilder::new().exactly(2).of("p").into_literal();
        let b = PatternBuilder::new().of("p").exactly(2).into_literal();
        assert_eq!(a, "(?:(?:p){2,2})");
        assert_eq!(b, "(?:(?:p){0,})");
    }

    #[test]
    fn test_quantity_flushes_previous_term() {
        let literal = PatternBuilder::new()
            .exactly(1)
            .of("a")
            .min(2)
            .of("b")
            .into_literal();
        assert_eq!(literal, "(?:(?:a){1,1})(?:(?:b){2,})");
    }

    #[test]
    fn test_last_source_wins() {
        let literal = PatternBuilder::new()
            .exactly(1)
            .of("a")
            .of_any()
            .into_literal();
        assert_eq!(literal, "(?:(?:.){1,1})");
    }

    #[test]
    fn test_empty_term_dropped() {
        let literal = PatternBuilder::new()
            .exactly(1)
            .of("a")
            .exactly(5)
            .reluctantly()
            .as_group()
            .into_literal();
        assert_eq!(literal, "(?:(?:a){1,1})");
    }

    #[test]
    fn test_modifiers_reset_on_flush() {
        let literal = PatternBuilder::new()
            .min(1)
            .of_any()
            .reluctantly()
            .as_group()
            .exactly(1)
            .of("x")
            .into_literal();
        assert_eq!(literal, "((?:.){1,}?)(?:(?:x){1,1})");
    }

    #[test]
    fn test_build_literal_idempotent() {
        let mut builder = PatternBuilder::new().exactly(2).of("ab").min(1).of_any();
        let first = builder.build_literal();
        let second = builder.build_literal();
        assert_eq!(first, second);
        assert_eq!(first, "(?:(?:ab){2,2})(?:(?:.){1,})");
    }

    #[test]
    fn test_literal_does_not_flush() {
        let builder = PatternBuilder::new().exactly(1).of("a");
        assert_eq!(builder.literal(), "(?:(?:a){1,1})");
        assert_eq!(builder.to_string(), "(?:(?:a){1,1})");
        assert!(!builder.pending().is_empty());
    }

    #[test]
    fn test_sets() {
        assert_eq!(
            PatternBuilder::new().exactly(1).from_set(['p', '-', 'q']).into_literal(),
            r"(?:(?:[p\-q]){1,1})"
        );
        assert_eq!(
            PatternBuilder::new().exactly(1).not_from_set("^]".chars()).into_literal(),
            r"(?:(?:[^\^\]]){1,1})"
        );
    }

    #[test]
    fn test_anchors_flush() {
        let literal = PatternBuilder::new()
            .start_of_input()
            .exactly(1)
            .of("p")
            .end_of_input()
            .into_literal();
        assert_eq!(literal, "(?:^)(?:(?:p){1,1})(?:$)");

        let builder = PatternBuilder::new().start_of_line();
        assert!(builder.options().multi_line());
    }

    #[test]
    fn test_options_survive_flush() {
        let mut builder = PatternBuilder::new()
            .ignore_case()
            .exactly(1)
            .of("a")
            .exactly(1)
            .of("b");
        builder.build_literal();
        assert!(builder.options().case_insensitive());
        assert!(!builder.options().multi_line());
    }

    #[test]
    fn test_either_list() {
        let literal = PatternBuilder::new()
            .either([
                Alternative::from("p"),
                Alternative::like(PatternBuilder::new().exactly(2).of("q")),
            ])
            .into_literal();
        assert_eq!(literal, "(?:(?:(?:p){1,1})|(?:(?:q){2,2}))");
    }

    #[test]
    fn test_either_or_chain() {
        let chained = PatternBuilder::new()
            .either_like(PatternBuilder::new().exactly(1).of("p"))
            .or_like(PatternBuilder::new().exactly(1).of("q"))
            .or("r")
            .into_literal();
        let listed = PatternBuilder::new().either(["p", "q", "r"]).into_literal();
        assert_eq!(chained, listed);
        assert_eq!(chained, "(?:(?:(?:p){1,1})|(?:(?:q){1,1})|(?:(?:r){1,1}))");
    }

    #[test]
    fn test_alternation_closed_by_next_call() {
        let literal = PatternBuilder::new()
            .either(["a", "b"])
            .exactly(1)
            .of("c")
            .or("d")
            .into_literal();
        assert_eq!(
            literal,
            "(?:(?:(?:a){1,1})|(?:(?:b){1,1}))(?:(?:(?:c){1,1})|(?:(?:d){1,1}))"
        );
    }

    #[test]
    fn test_or_without_either() {
        let literal = PatternBuilder::new().or("a").into_literal();
        assert_eq!(literal, "(?:(?:(?:a){1,1}))");
    }

    #[test]
    fn test_lookaround() {
        let sub = PatternBuilder::new().exactly(1).of("x");
        assert_eq!(PatternBuilder::new().ahead(&sub).into_literal(), "(?=(?:(?:x){1,1}))");
        assert_eq!(PatternBuilder::new().not_ahead(&sub).into_literal(), "(?!(?:(?:x){1,1}))");
        assert_eq!(PatternBuilder::new().behind(&sub).into_literal(), "(?<=(?:(?:x){1,1}))");
        assert_eq!(
            PatternBuilder::new().not_behind(&sub).into_literal(),
            "(?<!(?:(?:x){1,1}))"
        );
    }

    #[test]
    fn test_embedding() {
        let sub = PatternBuilder::new().exactly(1).of("x");
        assert_eq!(
            PatternBuilder::new().append(&sub).into_literal(),
            "(?:(?:(?:(?:x){1,1})){1,1})"
        );
        assert_eq!(
            PatternBuilder::new().optional(&sub).into_literal(),
            "(?:(?:(?:(?:x){1,1})){0,1})"
        );
        assert_eq!(
            PatternBuilder::new().like(&sub).into_literal(),
            "(?:(?:(?:(?:x){1,1})){0,})"
        );
        assert_eq!(
            PatternBuilder::new().min(2).like(&sub).into_literal(),
            "(?:(?:(?:(?:x){1,1})){2,})"
        );
    }

    #[test]
    fn test_capture_count() {
        let inner = PatternBuilder::new().exactly(1).of("a").as_group();
        let mut builder = PatternBuilder::new()
            .exactly(1)
            .of("b")
            .as_group()
            .either([Alternative::like(&inner), Alternative::from("c")])
            .exactly(1)
            .like(&inner)
            .as_group();
        assert_eq!(builder.capture_count(), 2);
        builder.build_literal();
        assert_eq!(builder.capture_count(), 4);
    }

    #[test]
    fn test_strict_backreference() {
        let mut builder = PatternBuilder::new()
            .strict()
            .exactly(1)
            .of("a")
            .as_group()
            .exactly(1)
            .of_backreference(2);
        assert!(matches!(
            builder.build(),
            Err(PatternError::InvalidBackreference { index: 2, groups: 1 })
        ));

        let mut builder = PatternBuilder::new()
            .strict()
            .exactly(1)
            .of("a")
            .as_group()
            .exactly(1)
            .of_backreference(1);
        assert!(builder.build().is_ok());
    }

    #[test]
    fn test_strict_checks_nested_backreferences() {
        let strict = || PatternBuilder::new().strict();
        let rejected = [
            strict()
                .exactly(1)
                .like(|p: PatternBuilder| p.exactly(1).of_backreference(3)),
            strict()
                .ahead(|p: PatternBuilder| p.exactly(1).of_backreference(1))
                .exactly(1)
                .of("a")
                .as_group(),
            strict().either([
                Alternative::from("a"),
                Alternative::like(PatternBuilder::new().exactly(1).of_backreference(1)),
            ]),
            strict().append(PatternBuilder::new().exactly(1).of_backreference(0)),
        ];
        for mut builder in rejected {
            let literal = builder.build_literal();
            assert!(
                matches!(
                    builder.build(),
                    Err(PatternError::InvalidBackreference { .. })
                ),
                "{literal}"
            );
        }

        let mut builder = strict()
            .exactly(1)
            .like(|p: PatternBuilder| p.exactly(1).of_backreference(3));
        assert!(matches!(
            builder.build(),
            Err(PatternError::InvalidBackreference { index: 3, groups: 0 })
        ));

        // Groups ahead of the sub-pattern, and inside it, are both counted.
        let mut builder = strict()
            .exactly(1)
            .of("a")
            .as_group()
            .exactly(1)
            .like(|p: PatternBuilder| {
                p.exactly(1)
                    .of("b")
                    .as_group()
                    .exactly(1)
                    .of_backreference(2)
                    .exactly(1)
                    .of_backreference(1)
            });
        assert!(builder.build().is_ok());
    }

    #[test]
    fn test_nested_backreferences_unchecked_by_default() {
        let literal = PatternBuilder::new()
            .exactly(1)
            .like(|p: PatternBuilder| p.exactly(1).of_backreference(3))
            .into_literal();
        assert_eq!(literal, r"(?:(?:(?:(?:\3){1,1})){1,1})");
    }

    #[test]
    fn test_empty_sources_dropped() {
        let literal = PatternBuilder::new()
            .then("a")
            .min(1)
            .from_set("".chars())
            .then("b")
            .into_literal();
        assert_eq!(literal, "(?:(?:a){1,1})(?:(?:b){1,1})");

        let literal = PatternBuilder::new()
            .then("a")
            .min(1)
            .not_from_set(core::iter::empty())
            .exactly(1)
            .of("")
            .like(PatternBuilder::new())
            .then("b")
            .into_literal();
        assert_eq!(literal, "(?:(?:a){1,1})(?:(?:b){1,1})");
    }

    #[test]
    fn test_empty_source_keeps_bounds_accumulating() {
        let literal = PatternBuilder::new().min(2).of("").max(4).of("p").into_literal();
        assert_eq!(literal, "(?:(?:p){2,4})");
    }

    #[test]
    fn test_permissive_backreference_literal() {
        let literal = PatternBuilder::new().exactly(1).of_backreference(0).into_literal();
        assert_eq!(literal, r"(?:(?:\0){1,1})");
    }
}

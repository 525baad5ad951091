//! # Pattern Assembly
//!
//! The [`PatternBuilder`] state machine and its parts:
//! * [`Term`] - the pending quantified unit, rendered on flush.
//! * [`escape`] - context-dependent escaping of literal text.
//! * [`Fragment`] / [`SubPattern`] - isolated sub-pattern construction.
//! * [`Alternative`] / [`OpenAlternation`] - alternation groups.
//! * [`PatternOptions`] - global matcher options.

pub mod escape;

mod alternation;
mod fragment;
mod options;
mod pattern_builder;
mod shorthand;
mod term;

#[doc(inline)]
pub use alternation::{Alternative, OpenAlternation};
#[doc(inline)]
pub use fragment::{BackreferenceSite, Fragment, SubPattern, literal_of};
#[doc(inline)]
pub use options::PatternOptions;
#[doc(inline)]
pub use pattern_builder::PatternBuilder;
#[doc(inline)]
pub use term::{Term, TermSource};

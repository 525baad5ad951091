//! # `patterncraft` Fluent Regex Builder
//!
//! Build regular expressions from a chain of readable operations, instead
//! of writing the pattern syntax by hand.
//!
//! See:
//! * [`PatternBuilder`] for the fluent builder.
//! * [`factory`] for free functions which start a new builder.
//! * [`Matcher`] for the compiled result.
//!
//! Every emitted unit is wrapped in a non-capturing group, so units compose
//! without precedence surprises; only [`PatternBuilder::as_group`] introduces
//! numbered capture groups.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! The default feature set is empty.
//!
//! #### feature: ``tracing``
//!
//! This enables ``tracing`` instrumentation spans on pattern compilation.
//! This is only useful for timing tracing of the library itself.
//!
//! ## Building a Pattern
//!
//! ```rust
//! use patterncraft::factory;
//!
//! let mut builder = factory::start_of_line()
//!     .exactly(1)
//!     .of("p")
//!     .min(1)
//!     .digits()
//!     .as_group()
//!     .end_of_line();
//!
//! let matcher = builder.build()?;
//! let found = matcher.captures("x\np42")?.unwrap();
//! assert_eq!(found.as_str(), "p42");
//! assert_eq!(found.group(1), Some("42"));
//! # Ok::<(), patterncraft::PatternError>(())
//! ```
#![warn(missing_docs, unused)]

pub mod builder;
pub mod errors;
pub mod factory;
pub mod matcher;
pub mod regex;

#[doc(inline)]
pub use builder::{Alternative, PatternBuilder, PatternOptions, SubPattern};
#[doc(inline)]
pub use errors::{PCResult, PatternError};
#[doc(inline)]
pub use matcher::{Matcher, PatternMatch};

//! # Alternation Groups

use crate::builder::{Fragment, PatternBuilder, SubPattern};

/// One branch of an alternation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alternative {
    /// Literal text; matched as exactly one occurrence of the text.
    Text(String),

    /// A sub-pattern.
    Pattern(Fragment),
}

impl Alternative {
    /// Build an alternative from any sub-pattern description.
    pub fn like<P: SubPattern>(sub: P) -> Self {
        Self::Pattern(sub.into_fragment())
    }

    /// Reduce the alternative to a fragment.
    pub fn into_fragment(self) -> Fragment {
        match self {
            Self::Text(text) => PatternBuilder::new().exactly(1).of(text).into_fragment(),
            Self::Pattern(fragment) => fragment,
        }
    }
}

impl From<&str> for Alternative {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Alternative {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for Alternative {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<PatternBuilder> for Alternative {
    fn from(builder: PatternBuilder) -> Self {
        Self::like(builder)
    }
}

impl From<&PatternBuilder> for Alternative {
    fn from(builder: &PatternBuilder) -> Self {
        Self::like(builder)
    }
}

impl From<Fragment> for Alternative {
    fn from(fragment: Fragment) -> Self {
        Self::Pattern(fragment)
    }
}

/// An alternation group which is still accepting branches.
///
/// The group is only serialized when it is closed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OpenAlternation {
    branches: Vec<Fragment>,
}

impl OpenAlternation {
    /// Add a branch.
    pub fn push(
        &mut self,
        fragment: Fragment,
    ) {
        self.branches.push(fragment);
    }

    /// The number of branches so far.
    pub fn len(&self) -> usize {
        self.branches.len()
    }

    /// The number of capture groups in the branches.
    pub fn groups(&self) -> usize {
        self.branches.iter().map(Fragment::groups).sum()
    }

    /// Are there no branches?
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    /// Close the group.
    ///
    /// ## Returns
    /// The group as a fragment: `(?:alt1|alt2|...)`.
    pub fn close(self) -> Fragment {
        let mut group = Fragment::new("(?:", 0);
        for (i, branch) in self.branches.into_iter().enumerate() {
            if i > 0 {
                group.push_str("|");
            }
            group.push(branch);
        }
        group.push_str(")");
        group
    }
}

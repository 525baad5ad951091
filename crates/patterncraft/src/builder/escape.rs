//! # Escaping
//!
//! Literal text is escaped differently depending on whether it lands
//! inside or outside of a character class.

/// Characters escaped in literal text outside a character class.
pub const OUTSIDE_CLASS_SPECIALS: &[char] = &['.', '^', '$', '*', '+', '?', '(', ')', '[', '{'];

/// Characters escaped in character class members.
pub const INSIDE_CLASS_SPECIALS: &[char] = &['^', '-', ']'];

/// Where escaped text will be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeContext {
    /// Plain pattern text.
    OutsideClass,

    /// Between the brackets of a character class.
    InsideClass,
}

impl EscapeContext {
    /// The special characters for this context.
    pub fn specials(self) -> &'static [char] {
        match self {
            Self::OutsideClass => OUTSIDE_CLASS_SPECIALS,
            Self::InsideClass => INSIDE_CLASS_SPECIALS,
        }
    }

    /// Escape `text` for this context.
    ///
    /// Each special character is prefixed by a backslash;
    /// everything else, including backslashes, is copied unchanged.
    pub fn escape(
        self,
        text: &str,
    ) -> String {
        let specials = self.specials();
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            if specials.contains(&c) {
                escaped.push('\\');
            }
            escaped.push(c);
        }
        escaped
    }
}

/// Escape literal text for use outside a character class.
pub fn escape_outside_class(text: &str) -> String {
    EscapeContext::OutsideClass.escape(text)
}

/// Escape set members for use inside a character class.
pub fn escape_inside_class(text: &str) -> String {
    EscapeContext::InsideClass.escape(text)
}

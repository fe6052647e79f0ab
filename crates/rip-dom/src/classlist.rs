//! Class token list
//!
//! A `class` attribute viewed as its whitespace-separated tokens. Unlike
//! `DOMTokenList` this keeps duplicates, since every occurrence is counted
//! and every occurrence is rewritten.

/// Ordered class tokens of one `class` attribute
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    /// Parse from a whitespace-separated attribute value.
    ///
    /// Only ASCII whitespace separates tokens; U+00A0 and other Unicode
    /// spaces are part of a token.
    pub fn from_string(s: &str) -> Self {
        let tokens = s.split_ascii_whitespace()
            .map(|s| s.to_string())
            .collect();
        Self { tokens }
    }

    /// Replace every token for which `f` returns a new spelling.
    ///
    /// Returns how many tokens changed.
    pub fn map_tokens<F>(&mut self, mut f: F) -> usize
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut changed = 0;
        for token in self.tokens.iter_mut() {
            if let Some(new) = f(token) {
                if *token != new {
                    *token = new;
                    changed += 1;
                }
            }
        }
        changed
    }

    /// Get value as string, tokens joined by a single space
    pub fn value(&self) -> String {
        self.tokens.join(" ")
    }

    /// Iterate over tokens
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|s| s.as_str())
    }
}

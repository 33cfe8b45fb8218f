pub mod predefined;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::node::Node;
use crate::quantifier::Quantified;

/// A bracketed character class.
///
/// Every variant answers two questions: what its members look like *inside* a
/// bracket pair (`range_string`), and what the class looks like as a
/// standalone pattern fragment (`render`). Union flattens its members into a
/// single bracket pair while intersection keeps each operand bracketed and
/// joins them with `&&`; the asymmetry matches the host grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharClass {
    /// A fixed set of individual characters, e.g. `[abc]`.
    Simple(SmallVec<[char; 8]>),
    /// An inclusive range, e.g. `[a-z]`. `lo <= hi` is the caller's
    /// responsibility and is not checked.
    Range { lo: char, hi: char },
    /// Membership complement of the wrapped class, e.g. `[^abc]`.
    Negation(Box<CharClass>),
    /// Membership union of several classes, e.g. `[abca-z]`.
    Union(Vec<CharClass>),
    /// Membership intersection, e.g. `[[abc]&&[a-z]]`.
    Intersection(Vec<CharClass>),
    /// An opaque leaf with a fixed spelling, e.g. `\d` or `\p{Alnum}`.
    Predefined(Cow<'static, str>),
}

impl CharClass {
    pub fn simple(characters: impl IntoIterator<Item = char>) -> Self {
        Self::Simple(characters.into_iter().collect())
    }

    pub fn range(lo: char, hi: char) -> Self {
        Self::Range { lo, hi }
    }

    pub fn negation(class: CharClass) -> Self {
        Self::Negation(Box::new(class))
    }

    pub fn union(classes: impl IntoIterator<Item = CharClass>) -> Self {
        Self::Union(classes.into_iter().collect())
    }

    pub fn intersection(classes: impl IntoIterator<Item = CharClass>) -> Self {
        Self::Intersection(classes.into_iter().collect())
    }

    pub const fn predefined(notation: &'static str) -> Self {
        Self::Predefined(Cow::Borrowed(notation))
    }

    /// The class's members as they appear inside a bracket pair, without the
    /// brackets themselves.
    pub fn range_string(&self) -> String {
        match self {
            Self::Simple(characters) => {
                let mut out = String::new();
                for &c in characters {
                    // a bare '-' would be read as a range operator
                    if c == '-' {
                        out.push_str("\\-");
                    } else {
                        out.push(c);
                    }
                }
                out
            }
            Self::Range { lo, hi } => format!("{lo}-{hi}"),
            Self::Negation(class) => class.range_string(),
            Self::Union(classes) => classes.iter().map(CharClass::range_string).collect(),
            Self::Intersection(classes) => classes
                .iter()
                .map(CharClass::render)
                .collect::<Vec<_>>()
                .join("&&"),
            Self::Predefined(notation) => notation.to_string(),
        }
    }

    /// The class as a standalone pattern fragment.
    pub fn render(&self) -> String {
        match self {
            Self::Negation(_) => format!("[^{}]", self.range_string()),
            Self::Predefined(notation) => notation.to_string(),
            _ => format!("[{}]", self.range_string()),
        }
    }

    pub fn once_or_not_at_all(self) -> Quantified {
        Quantified::new(self, 0, Some(1))
    }

    pub fn zero_or_more_times(self) -> Quantified {
        Quantified::new(self, 0, None)
    }

    pub fn one_or_more_times(self) -> Quantified {
        Quantified::new(self, 1, None)
    }

    pub fn repeated(self, from: u32, to: u32) -> Quantified {
        Quantified::new(self, from, Some(to))
    }

    pub fn repeated_exactly(self, times: u32) -> Quantified {
        Quantified::exactly(self, times)
    }

    pub fn repeated_at_least(self, times: u32) -> Quantified {
        Quantified::new(self, times, None)
    }
}

impl From<CharClass> for Node {
    fn from(class: CharClass) -> Self {
        Node::Class(class)
    }
}

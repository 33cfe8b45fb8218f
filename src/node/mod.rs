mod boundary;

pub use boundary::{
    BEGINNING_OF_INPUT, BEGINNING_OF_LINE, Boundary, END_OF_INPUT,
    END_OF_INPUT_BUT_FOR_THE_FINAL_TERMINATOR, END_OF_LINE, END_OF_PREVIOUS_MATCH,
    NON_WORD_BOUNDARY, WORD_BOUNDARY,
};

use serde::{Deserialize, Serialize};

use crate::class::CharClass;
use crate::error::CompileError;
use crate::escape;
use crate::matcher::CompiledPattern;
use crate::quantifier::Quantified;

/// One element of an expression tree.
///
/// A node owns its children exclusively; trees are immutable once built and
/// their only observable behaviour is [`Node::render`]. The builder never
/// parenthesises on its own: wherever alternation or quantification needs the
/// author's grouping preserved, the caller inserts a [`Node::Group`] or
/// [`Node::NonCapturing`] explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// Literal text, quoted on render whenever it contains a metacharacter.
    Characters(String),
    /// An already-valid pattern fragment inserted verbatim.
    Raw(String),
    Class(CharClass),
    Quantified(Quantified),
    /// A capturing group `(...)`.
    Group(Box<Node>),
    /// A named capturing group `(?<name>...)`. The name is inserted verbatim;
    /// an identifier the host engine rejects surfaces when the rendered
    /// pattern is compiled, not here.
    NamedGroup { name: String, node: Box<Node> },
    /// A non-capturing group `(?:...)`.
    NonCapturing(Box<Node>),
    /// Children concatenated in order.
    Sequence(Vec<Node>),
    /// Children joined with `|`; order defines try order.
    Either(Vec<Node>),
    Boundary(Boundary),
    /// `\N`, referring back to capturing group `N`.
    IndexedBackReference(u32),
    /// `\k<name>`, referring back to a named capturing group.
    NamedBackReference(String),
}

impl Node {
    pub fn characters(text: impl Into<String>) -> Self {
        Self::Characters(text.into())
    }

    pub fn raw(pattern: impl Into<String>) -> Self {
        Self::Raw(pattern.into())
    }

    pub fn group(node: impl Into<Node>) -> Self {
        Self::Group(Box::new(node.into()))
    }

    pub fn named_group(node: impl Into<Node>, name: impl Into<String>) -> Self {
        Self::NamedGroup {
            name: name.into(),
            node: Box::new(node.into()),
        }
    }

    pub fn non_capturing_group(node: impl Into<Node>) -> Self {
        Self::NonCapturing(Box::new(node.into()))
    }

    pub fn sequence(nodes: impl IntoIterator<Item = Node>) -> Self {
        Self::Sequence(nodes.into_iter().collect())
    }

    pub fn either(nodes: impl IntoIterator<Item = Node>) -> Self {
        Self::Either(nodes.into_iter().collect())
    }

    pub fn indexed_back_reference(index: u32) -> Self {
        Self::IndexedBackReference(index)
    }

    pub fn named_back_reference(name: impl Into<String>) -> Self {
        Self::NamedBackReference(name.into())
    }

    /// Renders the tree to a pattern string.
    ///
    /// Pure and deterministic: each subtree renders independently of its
    /// siblings, and rendering the same tree twice yields the same string.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_into(&mut out);
        out
    }

    pub(crate) fn write_into(&self, out: &mut String) {
        match self {
            Self::Characters(text) => out.push_str(&escape::quote(text)),
            Self::Raw(pattern) => out.push_str(pattern),
            Self::Class(class) => out.push_str(&class.render()),
            Self::Quantified(quantified) => quantified.write_into(out),
            Self::Group(node) => {
                out.push('(');
                node.write_into(out);
                out.push(')');
            }
            Self::NamedGroup { name, node } => {
                out.push_str("(?<");
                out.push_str(name);
                out.push('>');
                node.write_into(out);
                out.push(')');
            }
            Self::NonCapturing(node) => {
                out.push_str("(?:");
                node.write_into(out);
                out.push(')');
            }
            Self::Sequence(nodes) => {
                for node in nodes {
                    node.write_into(out);
                }
            }
            Self::Either(nodes) => {
                for (i, node) in nodes.iter().enumerate() {
                    if i > 0 {
                        out.push('|');
                    }
                    node.write_into(out);
                }
            }
            Self::Boundary(boundary) => out.push_str(boundary.notation()),
            Self::IndexedBackReference(index) => {
                out.push('\\');
                out.push_str(&index.to_string());
            }
            Self::NamedBackReference(name) => {
                out.push_str("\\k<");
                out.push_str(name);
                out.push('>');
            }
        }
    }

    /// Renders the tree and hands the string to the host engine.
    pub fn compile(&self) -> Result<CompiledPattern, CompileError> {
        CompiledPattern::compile(&self.render())
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

use serde::{Deserialize, Serialize};

use super::Node;

/// A zero-width assertion about position in the haystack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Boundary {
    BeginningOfLine,
    EndOfLine,
    WordBoundary,
    NonWordBoundary,
    BeginningOfInput,
    EndOfPreviousMatch,
    EndOfInputButForTheFinalTerminator,
    EndOfInput,
}

impl Boundary {
    pub fn notation(self) -> &'static str {
        match self {
            Self::BeginningOfLine => "^",
            Self::EndOfLine => "$",
            Self::WordBoundary => "\\b",
            Self::NonWordBoundary => "\\B",
            Self::BeginningOfInput => "\\A",
            Self::EndOfPreviousMatch => "\\G",
            Self::EndOfInputButForTheFinalTerminator => "\\Z",
            Self::EndOfInput => "\\z",
        }
    }
}

impl From<Boundary> for Node {
    fn from(boundary: Boundary) -> Self {
        Node::Boundary(boundary)
    }
}

pub const BEGINNING_OF_LINE: Node = Node::Boundary(Boundary::BeginningOfLine);
pub const END_OF_LINE: Node = Node::Boundary(Boundary::EndOfLine);
pub const WORD_BOUNDARY: Node = Node::Boundary(Boundary::WordBoundary);
pub const NON_WORD_BOUNDARY: Node = Node::Boundary(Boundary::NonWordBoundary);
pub const BEGINNING_OF_INPUT: Node = Node::Boundary(Boundary::BeginningOfInput);
pub const END_OF_PREVIOUS_MATCH: Node = Node::Boundary(Boundary::EndOfPreviousMatch);
pub const END_OF_INPUT_BUT_FOR_THE_FINAL_TERMINATOR: Node =
    Node::Boundary(Boundary::EndOfInputButForTheFinalTerminator);
pub const END_OF_INPUT: Node = Node::Boundary(Boundary::EndOfInput);

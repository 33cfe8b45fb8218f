use serde::{Deserialize, Serialize};

use crate::node::Node;

/// How a quantifier behaves when the engine backtracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Greediness {
    /// Match as much as possible (the default).
    Greedy,
    /// Match as little as possible.
    Reluctant,
    /// Match greedily and never give anything back.
    Possessive,
}

impl Greediness {
    pub fn notation(self) -> &'static str {
        match self {
            Self::Greedy => "",
            Self::Reluctant => "?",
            Self::Possessive => "+",
        }
    }
}

/// A repetition of a single child node.
///
/// `from` is the inclusive lower bound; `to` is the inclusive upper bound, or
/// `None` for no upper limit. `to < from` is not checked and renders a count
/// range the host engine will reject. The child is rendered as-is with no
/// implicit grouping, so a multi-token child must already be wrapped in a
/// group by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quantified {
    node: Box<Node>,
    from: u32,
    to: Option<u32>,
    mode: Greediness,
}

impl Quantified {
    pub fn new(node: impl Into<Node>, from: u32, to: Option<u32>) -> Self {
        Self {
            node: Box::new(node.into()),
            from,
            to,
            mode: Greediness::Greedy,
        }
    }

    /// Sugar for `from == to == times`.
    pub fn exactly(node: impl Into<Node>, times: u32) -> Self {
        Self::new(node, times, Some(times))
    }

    pub fn reluctant(mut self) -> Self {
        self.mode = Greediness::Reluctant;
        self
    }

    pub fn possessive(mut self) -> Self {
        self.mode = Greediness::Possessive;
        self
    }

    pub fn mode(&self) -> Greediness {
        self.mode
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_into(&mut out);
        out
    }

    pub(crate) fn write_into(&self, out: &mut String) {
        self.node.write_into(out);
        match (self.from, self.to) {
            (0, Some(1)) => out.push('?'),
            (0, None) => out.push('*'),
            (1, None) => out.push('+'),
            (from, Some(to)) if from == to => out.push_str(&format!("{{{from}}}")),
            (from, None) => out.push_str(&format!("{{{from},}}")),
            (from, Some(to)) => out.push_str(&format!("{{{from},{to}}}")),
        }
        out.push_str(self.mode.notation());
    }
}

impl From<Quantified> for Node {
    fn from(quantified: Quantified) -> Self {
        Node::Quantified(quantified)
    }
}

//! A typed, compositional builder for regular expression patterns.
//!
//! Instead of hand-writing a pattern string, a caller assembles an expression
//! tree from typed nodes and renders it. Rendering is pure and deterministic;
//! escaping and class/quantifier syntax are handled by the node types, while
//! precedence grouping stays under the caller's control.
//!
//! ```
//! use regex_dsl_rs::{CharClass, Node};
//!
//! let hex = CharClass::union([CharClass::range('0', '9'), CharClass::range('a', 'f')]);
//! let color = Node::sequence([Node::characters("#"), hex.repeated_exactly(6).into()]);
//! assert_eq!(color.render(), "#[0-9a-f]{6}");
//! ```

pub mod class;
pub mod error;
pub mod escape;
pub mod matcher;
pub mod node;
pub mod quantifier;

pub use class::CharClass;
pub use error::CompileError;
pub use matcher::CompiledPattern;
pub use node::{Boundary, Node};
pub use quantifier::{Greediness, Quantified};

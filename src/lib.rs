//! Slice-of-strings helpers for command-line token lists.
//!
//! A [`TokenSequence`] holds the process arguments (or any list of tokens)
//! and lets a program pick off flags and their values one call at a time:
//!
//! ```text
//! $ prog -a A --b=B -c -t NAME VALUE X Y Z
//! ```
//!
//! `pop` yields `prog`, `arg("a")` yields `A`, `arg("b")` yields `B`,
//! `flag("c")` yields `true`, `ternary("t")` yields `(NAME, VALUE)` and
//! `X Y Z` is left over.

pub mod ast;
pub mod error;
pub mod parser;
pub mod sequence;

pub use ast::{Assignment, FlagToken};
pub use error::TokenError;
pub use parser::FlagParser;
pub use sequence::TokenSequence;

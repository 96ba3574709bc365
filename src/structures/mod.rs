//! The abstract elements of interpretation and reasoning, and their representation.
//!
//! - [Tokens](token) are produced by lexical analysis and consumed when building a proposition.
//! - [Operators](operator) are closed enumerations carrying precedence, associativity, and truth-functional application.
//! - [Propositions](proposition) are immutable trees whose leaves are constants or atom handles.
//! - [The representation table](representation) fixes the textual spellings of grammatical symbols.

pub mod operator;
pub mod proposition;
pub mod representation;
pub mod token;

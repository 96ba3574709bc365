//! A library for reading, rendering, and reasoning about propositional-logic formulas.
//!
//! ponens reads a textual formula over atoms, the constants, negation, and the four usual binary connectives, builds an expression tree from it, and answers semantic questions about the result by exhaustive truth-table search.
//! Formulas are read and written under a choice of [notation](crate::config::Notation), from unicode connectives through LaTeX markup to plain English words.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context](crate::context::LogicContext).
//!
//! Contexts are built with a configuration, and propositions are added by [reading](crate::context::LogicContext::read_proposition) formula text.
//! Reading is a pipeline of three passes, each exposed in the [builder](crate::builder) module:
//! - The [lexer](crate::builder::lex) cuts text into tokens by longest match against a [table of spellings](crate::structures::representation).
//! - The [restructurer](crate::builder::shunt) reorders the infix token stream to reverse polish notation, diagnosing structural faults.
//! - The tree builder folds the reverse polish stream to an immutable [proposition tree](crate::structures::proposition), interning each named atom in the context.
//!
//! Atoms are interned by name, so every occurrence of a name within a context shares one handle and one truth value.
//! The [procedures](crate::procedures) rest on this: a truth-table sweep toggles each relevant atom once per assignment, and every stored proposition sees the update.
//!
//! Useful starting points, then, may be:
//! - The [context](crate::context) to see how propositions are read and stored.
//! - The [procedures](crate::procedures) for rendering, truth tables, equivalence, and validity.
//! - The [structures](crate::structures) to familiarise yourself with tokens, operators, and trees.
//! - The [error types](crate::types::err) to see every way reading or reasoning may fail.
//!
//! # Examples
//!
//! + Read a proposition written with typable spellings and render it symbolically.
//!
//! ```rust
//! # use ponens::config::Config;
//! # use ponens::context::LogicContext;
//! let mut the_context = LogicContext::from_config(Config::default());
//!
//! let entry = the_context.read_proposition("(-t ^ s) -> -r").unwrap();
//!
//! assert_eq!(the_context.render_entry(&entry), "(¬t ∧ s) → ¬r");
//! ```
//!
//! + Check an argument by exhaustive search.
//!
//! ```rust
//! # use ponens::config::Config;
//! # use ponens::context::LogicContext;
//! let mut the_context = LogicContext::from_config(Config::default());
//!
//! let conditional = the_context.read_proposition("p → q").unwrap();
//! let antecedent = the_context.read_proposition("p").unwrap();
//! let conclusion = the_context.read_proposition("q").unwrap();
//!
//! assert_eq!(the_context.valid(&[&conditional, &antecedent], &conclusion), Ok(true));
//! ```

pub mod builder;
pub mod config;
pub mod context;
pub mod generative;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;

/*!
Error types used in the library.

- None of these are unrecoverable faults: each stage of the pipeline returns either a value or a descriptive error, and a failure from an earlier stage is wrapped when surfaced through a later stage so a caller sees which phase failed and why.
- Reasoning errors are the 'indeterminate' outcome of an equivalence or validity check --- an ordinary result, distinguishable from both `true` and `false`.
- Genuine internal-invariant violations (e.g. a parenthesis token reaching the tree builder) panic, and are not represented here.

Names of the error enums --- for the most part --- follow the module the error arises in.
As such, throughout the library `err::{self}` is often used to prefix use of the types with `err::`.
*/

/// The errors of the library, by phase.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// An error during restructuring or tree building, including any wrapped lexical error.
    Syntax(SyntaxError),

    /// An error during tree building.
    Build(BuildError),

    /// An indeterminate outcome from the reasoner.
    Reasoning(ReasoningError),
}

impl ErrorKind {
    /// The positioned lexical error behind this error, if there is one.
    pub fn lexical(&self) -> Option<&LexicalError> {
        match self {
            Self::Syntax(SyntaxError::Lexical(lexical)) => Some(lexical),
            _ => None,
        }
    }

    /// A human-readable diagnostic against the input the error arose from.
    ///
    /// Lexical errors render the original input with a caret marking the failing offset; every other error renders its display form.
    pub fn diagnostic(&self, input: &str) -> String {
        match self.lexical() {
            Some(lexical) => lexical.diagnostic(input),
            None => self.to_string(),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Build(e) => write!(f, "{e}"),
            Self::Reasoning(e) => write!(f, "{e}"),
        }
    }
}

/// A positioned error noted during lexical analysis.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LexicalError {
    /// The character offset at which analysis failed.
    pub offset: usize,

    /// What went wrong at the offset.
    pub kind: LexicalErrorKind,
}

/// The ways lexical analysis fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LexicalErrorKind {
    /// A character outside whitespace, identifier characters, and every registered spelling.
    DisallowedCharacter(char),

    /// A run of symbol characters which matches no registered spelling.
    UnresolvedSequence(String),

    /// A partial symbol spelling left dangling at the end of input.
    DanglingSequence(String),
}

impl LexicalError {
    /// The original input with a caret marking the failing offset, followed by the message.
    ///
    /// ```text
    /// p #
    ///   ^
    /// Invalid character: '#'
    /// ```
    pub fn diagnostic(&self, input: &str) -> String {
        format!("{input}\n{caret:>width$}\n{self}", caret = '^', width = self.offset + 1)
    }
}

impl std::fmt::Display for LexicalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            LexicalErrorKind::DisallowedCharacter(c) => write!(f, "Invalid character: '{c}'"),
            LexicalErrorKind::UnresolvedSequence(text) => write!(f, "Invalid sequence: \"{text}\""),
            LexicalErrorKind::DanglingSequence(text) => {
                write!(f, "Incomplete sequence at end of input: \"{text}\"")
            }
        }
    }
}

/// Structural errors noted while restructuring an infix token sequence to postfix order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SyntaxError {
    /// Lexical analysis failed beneath the restructurer.
    Lexical(LexicalError),

    /// A proposition token where no proposition was expected, e.g. `p q`.
    UnexpectedProposition,

    /// A proposition with no operator left which could consume it.
    UnattachedProposition,

    /// An open parenthesis where no proposition was expected.
    UnexpectedOpenParen,

    /// A close parenthesis where a proposition was expected, e.g. `()` or `(p ∧)`.
    UnexpectedCloseParen,

    /// A close parenthesis with no matching open parenthesis.
    UnbalancedCloseParen,

    /// An open parenthesis left unclosed at the end of input.
    UnclosedOpenParen,

    /// A binary operator with no left operand, e.g. directly after an open parenthesis.
    UnexpectedBinaryOperator,

    /// A unary operator where no proposition was expected.
    UnexpectedUnaryOperator,
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexical(e) => write!(f, "Tokenization error: {e}"),
            Self::UnexpectedProposition => write!(f, "Unexpected proposition"),
            Self::UnattachedProposition => {
                write!(f, "Proposition used without an associated operator")
            }
            Self::UnexpectedOpenParen => write!(f, "Unexpected open parenthesis"),
            Self::UnexpectedCloseParen => {
                write!(f, "Close parenthesis found when a proposition was expected")
            }
            Self::UnbalancedCloseParen => write!(f, "Incorrect use of closing parenthesis"),
            Self::UnclosedOpenParen => write!(f, "Open parenthesis was not closed"),
            Self::UnexpectedBinaryOperator => {
                write!(f, "Binary operator found when a proposition was expected")
            }
            Self::UnexpectedUnaryOperator => write!(f, "Unexpected unary operator"),
        }
    }
}

/// Errors noted while reducing a postfix token sequence to a proposition tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// A binary operator without two propositions to consume.
    MissingBinaryOperand,

    /// A unary operator without a proposition to consume.
    MissingUnaryOperand,

    /// No proposition remained when the token sequence ended.
    NoProposition,

    /// More than one proposition remained when the token sequence ended.
    LeftoverPropositions,

    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingBinaryOperand => {
                write!(f, "Binary operator does not have two propositions")
            }
            Self::MissingUnaryOperand => write!(f, "Unary operator does not have a proposition"),
            Self::NoProposition => write!(f, "No proposition found"),
            Self::LeftoverPropositions => write!(f, "More than one proposition found"),
            Self::AtomsExhausted => write!(f, "No fresh atoms remain"),
        }
    }
}

/// Indeterminate outcomes from the brute-force reasoner.
///
/// These are ordinary results --- a reasoning call which cannot be carried out exhaustively reports so, rather than guessing or crashing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ReasoningError {
    /// Too many distinct atoms for the 2ᵏ sweep counter, or for the configured ceiling.
    TooManyAtoms(usize),

    /// Validity was requested with no premises.
    NoPremises,
}

impl std::fmt::Display for ReasoningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooManyAtoms(count) => {
                write!(f, "Too many atomic propositions to enumerate ({count})")
            }
            Self::NoPremises => write!(f, "An argument requires at least one premise"),
        }
    }
}

impl From<LexicalError> for SyntaxError {
    fn from(e: LexicalError) -> Self {
        SyntaxError::Lexical(e)
    }
}

impl From<LexicalError> for ErrorKind {
    fn from(e: LexicalError) -> Self {
        ErrorKind::Syntax(SyntaxError::Lexical(e))
    }
}

impl From<SyntaxError> for ErrorKind {
    fn from(e: SyntaxError) -> Self {
        ErrorKind::Syntax(e)
    }
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

impl From<ReasoningError> for ErrorKind {
    fn from(e: ReasoningError) -> Self {
        ErrorKind::Reasoning(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caret_marks_the_offset() {
        let error = LexicalError {
            offset: 2,
            kind: LexicalErrorKind::DisallowedCharacter('#'),
        };
        let diagnostic = error.diagnostic("p #");
        let mut lines = diagnostic.lines();
        assert_eq!(lines.next(), Some("p #"));
        assert_eq!(lines.next(), Some("  ^"));
        assert_eq!(lines.next(), Some("Invalid character: '#'"));
    }
}

/*!
The token --- a single unit of data after lexical analysis.

Tokens are immutable values whose lifetime is the parse of one input string.
Only identifier tokens carry a text payload.
*/

use crate::structures::operator::{BinaryOperator, UnaryOperator};

/// A single unit of data after lexical analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// An atomic proposition, named by the carried text.
    Identifier(String),

    /// The constant true.
    True,

    /// The constant false.
    False,

    /// An open parenthesis.
    OpenParen,

    /// A close parenthesis.
    CloseParen,

    /// A binary connective.
    Binary(BinaryOperator),

    /// A unary operation.
    Unary(UnaryOperator),
}

impl Token {
    /// Whether the token represents some (typically atomic) proposition.
    pub fn is_proposition(&self) -> bool {
        matches!(self, Self::Identifier(_) | Self::True | Self::False)
    }

    /// The precedence of an operator token, if the token is an operator.
    pub fn precedence(&self) -> Option<u8> {
        match self {
            Self::Binary(operator) => Some(operator.precedence()),
            Self::Unary(operator) => Some(operator.precedence()),
            _ => None,
        }
    }
}

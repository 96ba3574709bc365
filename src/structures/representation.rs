/*!
The representation table --- the spellings under which grammatical symbols are read and written.

Each [symbol](LogicSymbol) carries a short ordered list of spellings.
The first four positions correspond to the [notation modes](Notation) in order, and any further entries are aliases which are accepted when lexing but never produced when rendering.

The table is consulted from both directions:
- The [lexer](crate::builder::lex) asks which symbol some text spells, whether a partial match could still extend, and whether a character may appear in input at all.
- Rendering asks for the spelling of a symbol under the active notation.

A table is an owned value, typically held by a [context](crate::context::LogicContext).
The spelling data is fixed, so any two tables agree; owning one is a matter of avoiding ambient global state rather than of configuration.
*/

use std::collections::HashSet;

use crate::config::Notation;
use crate::structures::operator::{BinaryOperator, UnaryOperator};
use crate::structures::token::Token;

/// A grammatical symbol, abstracted from any particular spelling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogicSymbol {
    /// An open parenthesis.
    OpenParen,

    /// A close parenthesis.
    CloseParen,

    /// Conjunction.
    And,

    /// Disjunction.
    Or,

    /// The material conditional.
    Imply,

    /// The biconditional.
    Iff,

    /// Negation.
    Not,

    /// The constant true.
    True,

    /// The constant false.
    False,
}

/// Spellings, row by row.
///
/// Positions 0..4 are the notation modes in [Notation] order; later positions are accepted aliases.
const SPELLINGS: [(LogicSymbol, &[&str]); 9] = [
    (LogicSymbol::OpenParen, &["("]),
    (LogicSymbol::CloseParen, &[")"]),
    (LogicSymbol::And, &["∧", "\\land", "^", "AND", "&", "&&", "*"]),
    (LogicSymbol::Or, &["∨", "\\lor", "v", "OR", "|", "||", "+"]),
    (LogicSymbol::Imply, &["→", "\\rightarrow", "->", "IMPLIES", "⇒"]),
    (
        LogicSymbol::Iff,
        &["↔", "\\leftrightarrow", "<->", "EQUALS", "⇔", "\\equiv"],
    ),
    (LogicSymbol::Not, &["¬", "\\neg", "-", "NOT", "!", "~"]),
    (LogicSymbol::True, &["T", "T", "T", "TRUE", "1"]),
    (LogicSymbol::False, &["F", "F", "F", "FALSE", "0"]),
];

/// A lookup table between grammatical symbols and their textual spellings.
#[derive(Clone, Debug)]
pub struct RepresentationTable {
    /// Every character appearing in some registered spelling.
    allowed_characters: HashSet<char>,
}

impl Default for RepresentationTable {
    fn default() -> Self {
        let mut allowed_characters = HashSet::default();
        for (_, spellings) in SPELLINGS {
            for spelling in spellings {
                allowed_characters.extend(spelling.chars());
            }
        }
        RepresentationTable { allowed_characters }
    }
}

impl RepresentationTable {
    /// The spellings registered for a symbol, notation modes first.
    pub fn spellings(&self, symbol: LogicSymbol) -> &'static [&'static str] {
        match SPELLINGS.iter().find(|(row, _)| *row == symbol) {
            Some((_, spellings)) => *spellings,
            None => unreachable!("a row is present for every symbol"),
        }
    }

    /// The symbol some text spells exactly, if any.
    pub fn symbol_for(&self, text: &str) -> Option<LogicSymbol> {
        for (symbol, spellings) in SPELLINGS {
            if spellings.contains(&text) {
                return Some(symbol);
            }
        }
        None
    }

    /// Every symbol with a registered spelling of which `text` is a prefix.
    ///
    /// Used by the lexer to decide whether a partial match could still extend.
    pub fn symbols_with_prefix(&self, text: &str) -> Vec<LogicSymbol> {
        let mut symbols = Vec::default();
        for (symbol, spellings) in SPELLINGS {
            if spellings.iter().any(|spelling| spelling.starts_with(text)) {
                symbols.push(symbol);
            }
        }
        symbols
    }

    /// Whether a character may appear anywhere in input.
    pub fn is_allowed(&self, character: char) -> bool {
        character.is_whitespace()
            || Self::is_identifier_character(character)
            || self.allowed_characters.contains(&character)
    }

    /// Whether a character may appear in an identifier.
    pub fn is_identifier_character(character: char) -> bool {
        character == '_' || character.is_alphanumeric()
    }

    /// The spelling of a symbol under the given notation.
    pub fn display(&self, symbol: LogicSymbol, notation: Notation) -> &'static str {
        match symbol {
            LogicSymbol::OpenParen => "(",
            LogicSymbol::CloseParen => ")",
            _ => self.spellings(symbol)[notation.spelling_index()],
        }
    }

    /// The text of a token under the given notation.
    ///
    /// Identifiers spell themselves; every other token is spelt by its symbol.
    pub fn token_text(&self, token: &Token, notation: Notation) -> String {
        match token {
            Token::Identifier(name) => name.clone(),
            _ => {
                let symbol = match token {
                    Token::Identifier(_) => unreachable!("handled above"),
                    Token::True => LogicSymbol::True,
                    Token::False => LogicSymbol::False,
                    Token::OpenParen => LogicSymbol::OpenParen,
                    Token::CloseParen => LogicSymbol::CloseParen,
                    Token::Binary(operator) => LogicSymbol::from(*operator),
                    Token::Unary(operator) => LogicSymbol::from(*operator),
                };
                self.display(symbol, notation).to_owned()
            }
        }
    }
}

impl LogicSymbol {
    /// The token a lexed instance of the symbol becomes.
    pub fn token(self) -> Token {
        match self {
            Self::OpenParen => Token::OpenParen,
            Self::CloseParen => Token::CloseParen,
            Self::And => Token::Binary(BinaryOperator::And),
            Self::Or => Token::Binary(BinaryOperator::Or),
            Self::Imply => Token::Binary(BinaryOperator::Imply),
            Self::Iff => Token::Binary(BinaryOperator::Iff),
            Self::Not => Token::Unary(UnaryOperator::Not),
            Self::True => Token::True,
            Self::False => Token::False,
        }
    }
}

impl From<BinaryOperator> for LogicSymbol {
    fn from(operator: BinaryOperator) -> Self {
        match operator {
            BinaryOperator::And => Self::And,
            BinaryOperator::Or => Self::Or,
            BinaryOperator::Imply => Self::Imply,
            BinaryOperator::Iff => Self::Iff,
        }
    }
}

impl From<UnaryOperator> for LogicSymbol {
    fn from(operator: UnaryOperator) -> Self {
        match operator {
            UnaryOperator::Not => Self::Not,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_matches() {
        let table = RepresentationTable::default();
        assert_eq!(table.symbol_for("\\land"), Some(LogicSymbol::And));
        assert_eq!(table.symbol_for("<->"), Some(LogicSymbol::Iff));
        assert_eq!(table.symbol_for("v"), Some(LogicSymbol::Or));
        assert_eq!(table.symbol_for("TRUE"), Some(LogicSymbol::True));
        assert_eq!(table.symbol_for("<-"), None);
        assert_eq!(table.symbol_for("p"), None);
    }

    #[test]
    fn prefixes_extend() {
        let table = RepresentationTable::default();
        // "<" and "<-" are prefixes of "<->" alone.
        assert_eq!(table.symbols_with_prefix("<"), vec![LogicSymbol::Iff]);
        assert_eq!(table.symbols_with_prefix("<-"), vec![LogicSymbol::Iff]);
        assert!(table.symbols_with_prefix("<>").is_empty());
        // "\\l" could still become \land, \lor, or \leftrightarrow.
        assert_eq!(table.symbols_with_prefix("\\l").len(), 3);
    }

    #[test]
    fn allowed_characters() {
        let table = RepresentationTable::default();
        assert!(table.is_allowed('p'));
        assert!(table.is_allowed('_'));
        assert!(table.is_allowed('¬'));
        assert!(table.is_allowed('\\'));
        assert!(table.is_allowed(' '));
        assert!(!table.is_allowed('#'));
        assert!(!table.is_allowed('%'));
    }

    #[test]
    fn notation_spellings() {
        let table = RepresentationTable::default();
        assert_eq!(table.display(LogicSymbol::And, Notation::Symbolic), "∧");
        assert_eq!(table.display(LogicSymbol::And, Notation::Latex), "\\land");
        assert_eq!(table.display(LogicSymbol::Imply, Notation::Typable), "->");
        assert_eq!(table.display(LogicSymbol::Iff, Notation::Words), "EQUALS");
        assert_eq!(table.display(LogicSymbol::True, Notation::Words), "TRUE");
    }
}

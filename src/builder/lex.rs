/*!
Lexical analysis of an input string into a typed token stream.

The [Lexer] is an iterator over `Result<Token, LexicalError>`, so the stages downstream may fail as early as the failing character.

The scan is left to right:
- Whitespace is skipped.
- Parentheses are recognized immediately.
- A character valid in an identifier opens a maximal run of identifier characters, and the run is then checked against the registered spellings --- so `T` becomes the true constant and `AND` the conjunction operator rather than identifiers.
- Any other character opens a symbol buffer which is extended greedily while [symbols_with_prefix](RepresentationTable::symbols_with_prefix) is non-empty, backing up one character when extension fails.

The longest-match-with-backtrack strategy is required because spellings vary in length and share prefixes --- `<->` and `⇔` against `<`, or `\land` against `\lor` and `\leftrightarrow`.
*/

use log::trace;

use crate::misc::log::targets;
use crate::structures::representation::RepresentationTable;
use crate::structures::token::Token;
use crate::types::err::{LexicalError, LexicalErrorKind};

/// A lexer over a single input string.
///
/// After an error has been returned the iterator is fused --- the remainder of the input is not examined.
pub struct Lexer<'t> {
    /// The representation table spellings are resolved against.
    table: &'t RepresentationTable,

    /// The input, as characters, so offsets count characters rather than bytes.
    characters: Vec<char>,

    /// The offset of the next character to examine.
    offset: usize,

    /// Set when an error has been returned.
    failed: bool,
}

impl<'t> Lexer<'t> {
    pub fn new(table: &'t RepresentationTable, input: &str) -> Self {
        Lexer {
            table,
            characters: input.chars().collect(),
            offset: 0,
            failed: false,
        }
    }

    /// The token opened by an identifier character: a maximal identifier run, re-resolved against registered spellings.
    fn identifier_or_spelling(&mut self) -> Token {
        let start = self.offset;
        while let Some(&c) = self.characters.get(self.offset) {
            if !RepresentationTable::is_identifier_character(c) {
                break;
            }
            self.offset += 1;
        }
        let name: String = self.characters[start..self.offset].iter().collect();

        match self.table.symbol_for(&name) {
            // E.g. 'T' is the true constant rather than an identifier.
            Some(symbol) => symbol.token(),
            None => Token::Identifier(name),
        }
    }

    /// The token opened by a symbol character, by longest match with one character of backtrack.
    fn symbol_run(&mut self) -> Result<Token, LexicalError> {
        let mut buffer = String::new();

        while let Some(&c) = self.characters.get(self.offset) {
            let mut extended = buffer.clone();
            extended.push(c);

            if self.table.symbols_with_prefix(&extended).is_empty() {
                if buffer.is_empty() {
                    // No spelling opens with this character.
                    return Err(LexicalError {
                        offset: self.offset,
                        kind: LexicalErrorKind::DisallowedCharacter(c),
                    });
                }
                return match self.table.symbol_for(&buffer) {
                    Some(symbol) => Ok(symbol.token()),
                    None => Err(LexicalError {
                        offset: self.offset,
                        kind: LexicalErrorKind::UnresolvedSequence(extended),
                    }),
                };
            }

            buffer = extended;
            self.offset += 1;
        }

        // The input ended while a match could still extend.
        match self.table.symbol_for(&buffer) {
            Some(symbol) => Ok(symbol.token()),
            None => Err(LexicalError {
                offset: self.offset - 1,
                kind: LexicalErrorKind::DanglingSequence(buffer),
            }),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexicalError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let c = loop {
            match self.characters.get(self.offset) {
                None => return None,
                Some(c) if c.is_whitespace() => self.offset += 1,
                Some(&c) => break c,
            }
        };

        if !self.table.is_allowed(c) {
            self.failed = true;
            return Some(Err(LexicalError {
                offset: self.offset,
                kind: LexicalErrorKind::DisallowedCharacter(c),
            }));
        }

        let token = if c == '(' {
            self.offset += 1;
            Ok(Token::OpenParen)
        } else if c == ')' {
            self.offset += 1;
            Ok(Token::CloseParen)
        } else if RepresentationTable::is_identifier_character(c) {
            Ok(self.identifier_or_spelling())
        } else {
            self.symbol_run()
        };

        match &token {
            Ok(token) => trace!(target: targets::LEX, "Token: {token:?}"),
            Err(_) => self.failed = true,
        }

        Some(token)
    }
}

/// Every token of the input, or the first lexical error.
pub fn tokenize(table: &RepresentationTable, input: &str) -> Result<Vec<Token>, LexicalError> {
    Lexer::new(table, input).collect()
}

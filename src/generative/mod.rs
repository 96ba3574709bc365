/*!
Generation of token streams, for exercising the reading pipeline.

Two generators are provided, both generic over a source of randomness:

- [SmartTokens] follows the grammar while generating, so its streams always restructure and build.
  The generator tracks whether a proposition is expected and how many parentheses are open, mirroring the state of the [restructurer](crate::builder::shunt), and winds the stream down to a well formed close once a length goal is met.
- [RandomTokens] draws tokens with no regard for grammar.
  Its streams mostly fail to restructure, which is the point: whatever is drawn, reading must either accept or diagnose.

[untokenize] writes a stream back to text which lexes to the same stream, token for token.
*/

use rand::Rng;

use crate::config::Notation;
use crate::structures::operator::{BinaryOperator, UnaryOperator};
use crate::structures::representation::RepresentationTable;
use crate::structures::token::Token;

/// Atom names which are not a registered spelling of anything.
///
/// Note, in particular, the absence of "v".
pub const ATOM_NAMES: [&str; 4] = ["p", "q", "r", "s"];

/// The text of a token stream, spelt under a notation and joined by spaces.
pub fn untokenize(table: &RepresentationTable, notation: Notation, tokens: &[Token]) -> String {
    let spelt: Vec<String> = tokens
        .iter()
        .map(|token| table.token_text(token, notation))
        .collect();
    spelt.join(" ")
}

/// A grammar-following token stream of roughly a goal length.
pub struct SmartTokens<R: Rng> {
    rng: R,
    names: Vec<String>,

    /// Tokens to draw before winding the stream down.
    tokens_left: usize,

    /// Whether the grammar expects a proposition at this point of the stream.
    expecting_proposition: bool,

    /// Open parentheses yet to close.
    depth: usize,

    /// Set once the length goal is spent, to stop opening parentheses and start closing them.
    winding_down: bool,
}

impl<R: Rng> SmartTokens<R> {
    pub fn new(rng: R, length_goal: usize, names: &[&str]) -> Self {
        SmartTokens {
            rng,
            names: names.iter().map(|name| (*name).to_owned()).collect(),
            tokens_left: length_goal,
            expecting_proposition: true,
            depth: 0,
            winding_down: false,
        }
    }

    fn random_name(&mut self) -> String {
        let index = self.rng.gen_range(0..self.names.len());
        self.names[index].clone()
    }

    fn proposition_token(&mut self) -> Token {
        let choices = match self.winding_down {
            true => 4,
            false => 5,
        };
        match self.rng.gen_range(0..choices) {
            0 | 1 | 2 => {
                self.expecting_proposition = false;
                match self.rng.gen_range(0..5) {
                    0 => Token::True,
                    1 => Token::False,
                    _ => Token::Identifier(self.random_name()),
                }
            }
            3 => Token::Unary(UnaryOperator::Not),
            _ => {
                self.depth += 1;
                Token::OpenParen
            }
        }
    }

    fn operation_token(&mut self) -> Token {
        if self.winding_down && self.depth > 0 {
            self.depth -= 1;
            return Token::CloseParen;
        }
        let choices = match self.depth {
            0 => 1,
            _ => 2,
        };
        match self.rng.gen_range(0..choices) {
            0 => {
                self.expecting_proposition = true;
                Token::Binary(match self.rng.gen_range(0..4) {
                    0 => BinaryOperator::And,
                    1 => BinaryOperator::Or,
                    2 => BinaryOperator::Imply,
                    _ => BinaryOperator::Iff,
                })
            }
            _ => {
                self.depth -= 1;
                Token::CloseParen
            }
        }
    }
}

impl<R: Rng> Iterator for SmartTokens<R> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.tokens_left == 0 && !self.expecting_proposition && self.depth == 0 {
            return None;
        }
        match self.tokens_left {
            0 => self.winding_down = true,
            _ => self.tokens_left -= 1,
        }
        match self.expecting_proposition {
            true => Some(self.proposition_token()),
            false => Some(self.operation_token()),
        }
    }
}

/// A token stream drawn with no regard for grammar.
pub struct RandomTokens<R: Rng> {
    rng: R,
    names: Vec<String>,
    tokens_left: usize,
}

impl<R: Rng> RandomTokens<R> {
    pub fn new(rng: R, length: usize, names: &[&str]) -> Self {
        RandomTokens {
            rng,
            names: names.iter().map(|name| (*name).to_owned()).collect(),
            tokens_left: length,
        }
    }
}

impl<R: Rng> Iterator for RandomTokens<R> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.tokens_left == 0 {
            return None;
        }
        self.tokens_left -= 1;

        // Identifiers are drawn three times as often as anything else.
        let token = match self.rng.gen_range(0..10) {
            0 => Token::OpenParen,
            1 => Token::CloseParen,
            3 => Token::Binary(BinaryOperator::And),
            4 => Token::Binary(BinaryOperator::Or),
            5 => Token::Binary(BinaryOperator::Imply),
            6 => Token::Binary(BinaryOperator::Iff),
            7 => Token::Unary(UnaryOperator::Not),
            _ => {
                let index = self.rng.gen_range(0..self.names.len());
                Token::Identifier(self.names[index].clone())
            }
        };
        Some(token)
    }
}

/*!
The pipeline from a string of formula text to a stored proposition tree.

Reading happens in three passes:
1. [Lexing](lex): the string is cut into [tokens](crate::structures::token::Token) by longest match against the spelling table.
2. [Restructuring](shunt): the infix token stream is reordered to reverse polish notation, with every structural error of the input surfaced here.
3. Building: the reverse polish stream is folded to a [proposition tree](crate::structures::proposition::Proposition), interning each named atom in the context.

The passes are exposed individually, and chained by [read_proposition](crate::context::LogicContext::read_proposition).
*/

pub mod lex;
pub mod shunt;

use log::trace;

use crate::context::LogicContext;
use crate::misc::log::targets;
use crate::structures::proposition::{Atom, Proposition, PropositionEntry};
use crate::structures::token::Token;
use crate::types::err::{BuildError, ErrorKind};

impl LogicContext {
    /// Reads a proposition from formula text, without storing the result.
    ///
    /// Atoms named in the text are interned in the context, whether or not the read succeeds as a whole.
    pub fn read_proposition(&mut self, input: &str) -> Result<PropositionEntry, ErrorKind> {
        let lexer = lex::Lexer::new(&self.representations, input);
        let postfix = shunt::reverse_polish(lexer)?;
        self.build_postfix(postfix)
    }

    /// Reads a proposition from formula text and stores it, returning the index of the entry.
    pub fn add_proposition(&mut self, input: &str) -> Result<usize, ErrorKind> {
        let entry = self.read_proposition(input)?;
        Ok(self.push_entry(entry))
    }

    /// Folds a reverse polish token stream to a proposition tree.
    ///
    /// Each token is either pushed as a leaf or applied to trees popped from the stack.
    /// A well-formed stream leaves exactly one tree on the stack.
    pub fn build_postfix(&mut self, tokens: Vec<Token>) -> Result<PropositionEntry, ErrorKind> {
        let mut stack: Vec<Proposition> = Vec::default();
        let mut atoms: Vec<Atom> = Vec::default();

        for token in tokens {
            match token {
                Token::True => stack.push(Proposition::Constant(true)),

                Token::False => stack.push(Proposition::Constant(false)),

                Token::Identifier(name) => {
                    let atom = self.atom_or_fresh(&name)?;
                    if !atoms.contains(&atom) {
                        atoms.push(atom);
                    }
                    stack.push(Proposition::Atomic(atom));
                }

                Token::Binary(operator) => {
                    let right = stack.pop().ok_or(BuildError::MissingBinaryOperand)?;
                    let left = stack.pop().ok_or(BuildError::MissingBinaryOperand)?;
                    stack.push(Proposition::Binary {
                        operator,
                        left: Box::new(left),
                        right: Box::new(right),
                    });
                }

                Token::Unary(operator) => {
                    let child = stack.pop().ok_or(BuildError::MissingUnaryOperand)?;
                    stack.push(Proposition::Unary {
                        operator,
                        child: Box::new(child),
                    });
                }

                // Restructuring consumes every parenthesis.
                Token::OpenParen | Token::CloseParen => {
                    panic!("parenthesis in a reverse polish stream")
                }
            }
        }

        let proposition = match stack.pop() {
            Some(proposition) => proposition,
            None => return Err(BuildError::NoProposition.into()),
        };
        if !stack.is_empty() {
            return Err(BuildError::LeftoverPropositions.into());
        }

        trace!(target: targets::BUILD, "Built a tree over {} atom(s)", atoms.len());
        Ok(PropositionEntry { proposition, atoms })
    }
}

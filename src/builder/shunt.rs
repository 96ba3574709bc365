/*!
Restructuring a token sequence from infix to postfix (Reverse Polish) order.

The shunting-yard algorithm, with two pieces of structural bookkeeping beyond the usual operator stack:
- A flag recording whether a proposition is expected next, which rejects adjacent operators, an operator opening the input, and similar.
- A count of operands not yet consumed by an operator, which rejects two propositions standing adjacent with nothing to connect them.

Operator precedence decides the emission order: arriving binary operators pop any stacked operator of strictly greater precedence, and of equal precedence when the arriving operator is left-associative.
A stacked unary operator always has strictly greater precedence than an arriving binary operator, so negation binds to the proposition it prefixes.
*/

use log::trace;

use crate::misc::log::targets;
use crate::structures::token::Token;
use crate::types::err::{LexicalError, SyntaxError};

/// The tokens of an infix sequence in postfix order, or the first structural error.
///
/// The source is consumed token by token, so a lexical error ends the restructuring as early as the failing character.
pub fn reverse_polish<I>(tokens: I) -> Result<Vec<Token>, SyntaxError>
where
    I: IntoIterator<Item = Result<Token, LexicalError>>,
{
    let mut output: Vec<Token> = Vec::default();
    let mut stack: Vec<Token> = Vec::default();

    let mut proposition_expected = true;
    let mut unattached_operands: usize = 0;

    for token in tokens {
        let token = token.map_err(SyntaxError::from)?;
        trace!(target: targets::SHUNT, "Restructuring: {token:?}");

        match token {
            Token::Identifier(_) | Token::True | Token::False => {
                if !proposition_expected {
                    return Err(SyntaxError::UnexpectedProposition);
                }
                if unattached_operands > 0 && stack.is_empty() {
                    return Err(SyntaxError::UnattachedProposition);
                }
                unattached_operands += 1;
                proposition_expected = false;
                output.push(token);
            }

            Token::OpenParen => {
                if !proposition_expected {
                    return Err(SyntaxError::UnexpectedOpenParen);
                }
                stack.push(token);
            }

            Token::CloseParen => {
                if proposition_expected {
                    return Err(SyntaxError::UnexpectedCloseParen);
                }
                loop {
                    match stack.pop() {
                        None => return Err(SyntaxError::UnbalancedCloseParen),
                        Some(Token::OpenParen) => break,
                        Some(operator) => {
                            if matches!(operator, Token::Binary(_)) {
                                unattached_operands -= 1;
                            }
                            output.push(operator);
                        }
                    }
                }
            }

            Token::Binary(operator) => {
                if proposition_expected || output.is_empty() {
                    return Err(SyntaxError::UnexpectedBinaryOperator);
                }
                let precedence = operator.precedence();
                while let Some(top) = stack.last() {
                    let pops = match top.precedence() {
                        // The top of the stack is an open parenthesis.
                        None => false,
                        Some(top_precedence) => {
                            top_precedence > precedence
                                || (top_precedence == precedence && operator.left_associative())
                        }
                    };
                    if !pops {
                        break;
                    }
                    let top = stack.pop().expect("the stack top was just inspected");
                    if matches!(top, Token::Binary(_)) {
                        unattached_operands -= 1;
                    }
                    output.push(top);
                }
                proposition_expected = true;
                stack.push(Token::Binary(operator));
            }

            Token::Unary(_) => {
                if !proposition_expected {
                    return Err(SyntaxError::UnexpectedUnaryOperator);
                }
                // Nothing on the stack outranks an operator about to receive its operand.
                stack.push(token);
            }
        }
    }

    while let Some(operator) = stack.pop() {
        if matches!(operator, Token::OpenParen) {
            return Err(SyntaxError::UnclosedOpenParen);
        }
        output.push(operator);
    }

    Ok(output)
}

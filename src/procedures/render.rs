/*!
Rendering proposition trees back to text.

Infix rendering uses the [notation](crate::config::Notation) from the context configuration and parenthesizes minimally: atoms and constants are never wrapped, a binary child is, and negation binds tightest so a negated child is not.
The output lexes back to the tree it came from, whichever notation is active.

Reverse polish rendering writes the tree in postfix order with no parentheses at all.
*/

use crate::config::Notation;
use crate::context::LogicContext;
use crate::structures::proposition::{Proposition, PropositionEntry};
use crate::structures::representation::LogicSymbol;

impl LogicContext {
    /// The infix text of a tree under the configured notation.
    pub fn render(&self, proposition: &Proposition) -> String {
        let mut text = String::default();
        self.render_into(proposition, &mut text);
        text
    }

    /// The infix text of a stored entry under the configured notation.
    pub fn render_entry(&self, entry: &PropositionEntry) -> String {
        self.render(&entry.proposition)
    }

    /// The reverse polish text of a tree under the configured notation.
    pub fn render_rpn(&self, proposition: &Proposition) -> String {
        let mut parts: Vec<String> = Vec::default();
        self.rpn_into(proposition, &mut parts);
        parts.join(" ")
    }

    fn render_into(&self, proposition: &Proposition, text: &mut String) {
        let notation = self.config.notation;
        match proposition {
            Proposition::Constant(value) => {
                let symbol = match value {
                    true => LogicSymbol::True,
                    false => LogicSymbol::False,
                };
                text.push_str(self.representations.display(symbol, notation));
            }

            Proposition::Atomic(atom) => text.push_str(self.atom_name(*atom)),

            Proposition::Unary { operator, child } => {
                text.push_str(
                    self.representations
                        .display(LogicSymbol::from(*operator), notation),
                );
                // Multi-character spellings would otherwise run into the operand.
                if matches!(notation, Notation::Latex | Notation::Words) {
                    text.push(' ');
                }
                self.render_child(child, text);
            }

            Proposition::Binary {
                operator,
                left,
                right,
            } => {
                self.render_child(left, text);
                text.push(' ');
                text.push_str(
                    self.representations
                        .display(LogicSymbol::from(*operator), notation),
                );
                text.push(' ');
                self.render_child(right, text);
            }
        }
    }

    /// As [render_into](Self::render_into), wrapped in parentheses when the child is a binary node.
    fn render_child(&self, child: &Proposition, text: &mut String) {
        match child {
            Proposition::Binary { .. } => {
                text.push('(');
                self.render_into(child, text);
                text.push(')');
            }
            _ => self.render_into(child, text),
        }
    }

    fn rpn_into(&self, proposition: &Proposition, parts: &mut Vec<String>) {
        let notation = self.config.notation;
        match proposition {
            Proposition::Constant(value) => {
                let symbol = match value {
                    true => LogicSymbol::True,
                    false => LogicSymbol::False,
                };
                parts.push(self.representations.display(symbol, notation).to_owned());
            }

            Proposition::Atomic(atom) => parts.push(self.atom_name(*atom).to_owned()),

            Proposition::Unary { operator, child } => {
                self.rpn_into(child, parts);
                parts.push(
                    self.representations
                        .display(LogicSymbol::from(*operator), notation)
                        .to_owned(),
                );
            }

            Proposition::Binary {
                operator,
                left,
                right,
            } => {
                self.rpn_into(left, parts);
                self.rpn_into(right, parts);
                parts.push(
                    self.representations
                        .display(LogicSymbol::from(*operator), notation)
                        .to_owned(),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn context_with(notation: Notation) -> LogicContext {
        LogicContext::from_config(Config {
            notation,
            ..Config::default()
        })
    }

    #[test]
    fn minimal_parentheses() {
        let mut ctx = LogicContext::default();
        let entry = ctx.read_proposition("p ^ (q v r)").unwrap();
        assert_eq!(ctx.render_entry(&entry), "p ∧ (q ∨ r)");

        let flat = ctx.read_proposition("p v q ^ r").unwrap();
        assert_eq!(ctx.render_entry(&flat), "p ∨ (q ∧ r)");
    }

    #[test]
    fn negated_children_are_not_wrapped() {
        let mut ctx = LogicContext::default();
        let entry = ctx.read_proposition("(-t ^ s) -> -r").unwrap();
        assert_eq!(ctx.render_entry(&entry), "(¬t ∧ s) → ¬r");
    }

    #[test]
    fn negated_conjunctions_are() {
        let mut ctx = LogicContext::default();
        let entry = ctx.read_proposition("-(p ^ q)").unwrap();
        assert_eq!(ctx.render_entry(&entry), "¬(p ∧ q)");
    }

    #[test]
    fn notation_selects_spellings() {
        let mut ctx = context_with(Notation::Latex);
        let entry = ctx.read_proposition("-p -> q <-> r").unwrap();
        assert_eq!(
            ctx.render_entry(&entry),
            "(\\neg p \\rightarrow q) \\leftrightarrow r"
        );

        ctx.config.notation = Notation::Words;
        assert_eq!(ctx.render_entry(&entry), "(NOT p IMPLIES q) EQUALS r");

        ctx.config.notation = Notation::Typable;
        assert_eq!(ctx.render_entry(&entry), "(-p -> q) <-> r");
    }

    #[test]
    fn constants_render_by_notation() {
        let mut ctx = context_with(Notation::Words);
        let entry = ctx.read_proposition("TRUE AND FALSE").unwrap();
        assert_eq!(ctx.render_entry(&entry), "TRUE AND FALSE");

        ctx.config.notation = Notation::Symbolic;
        assert_eq!(ctx.render_entry(&entry), "T ∧ F");
    }

    #[test]
    fn reverse_polish_order() {
        let mut ctx = LogicContext::default();
        let entry = ctx.read_proposition("(-t ^ s) -> -r").unwrap();
        assert_eq!(ctx.render_rpn(&entry.proposition), "t ¬ s ∧ r ¬ →");
    }

    #[test]
    fn rendering_is_idempotent() {
        let mut ctx = LogicContext::default();
        let entry = ctx.read_proposition("p -> (q <-> -r)").unwrap();
        assert_eq!(ctx.render_entry(&entry), ctx.render_entry(&entry));
    }

    #[test]
    fn rendered_text_reads_back() {
        for notation in [
            Notation::Symbolic,
            Notation::Latex,
            Notation::Typable,
            Notation::Words,
        ] {
            let mut ctx = context_with(notation);
            let entry = ctx.read_proposition("-(p ^ q) -> (r v T)").unwrap();
            let text = ctx.render_entry(&entry);
            let reread = ctx.read_proposition(&text).unwrap();
            assert_eq!(ctx.equivalent(&entry, &reread), Ok(true));
        }
    }
}

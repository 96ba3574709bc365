/*!
Propositions, and the atoms they are built over.

A proposition is a finite, acyclic, immutable tree.
Leaves are the two constants or [atoms](Atom), and interior nodes apply a [unary](crate::structures::operator::UnaryOperator) or [binary](crate::structures::operator::BinaryOperator) operator to owned children.

# Atoms

An atom is a `u32` handle into the atom table of the [context](crate::context::LogicContext) the proposition was built within.
Two occurrences of the same name intern to the same handle, so "the same variable" is the same index by construction --- there is no way for two occurrences of `p` from one context to be toggled independently.

Truth values live in a [valuation](Valuation) owned by the context rather than in the leaves, following the usual atom/valuation split.
Evaluation, then, is a pure structural recursion over the tree and a read of the valuation.
*/

use crate::structures::operator::{BinaryOperator, UnaryOperator};

/// An atom, aka. a propositional variable.
///
/// A handle into the atom table of the context the atom was interned by.
pub type Atom = u32;

/// The maximum instance of an atom.
pub const ATOM_MAX: Atom = Atom::MAX;

/// An assignment of a truth value to each atom of a context, indexed by atom.
pub type Valuation = Vec<bool>;

/// A proposition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Proposition {
    /// One of the two distinguished constants, whose value is fixed.
    Constant(bool),

    /// An atomic proposition, whose value is read from a valuation.
    Atomic(Atom),

    /// A unary operation applied to a proposition.
    Unary {
        /// The operator applied.
        operator: UnaryOperator,

        /// The operand.
        child: Box<Proposition>,
    },

    /// A binary connective applied to a pair of propositions, order significant.
    Binary {
        /// The connective applied.
        operator: BinaryOperator,

        /// The left operand.
        left: Box<Proposition>,

        /// The right operand.
        right: Box<Proposition>,
    },
}

impl Proposition {
    /// The truth value of the proposition on the given valuation.
    ///
    /// The valuation must cover every atom appearing in the proposition, which holds for any valuation taken from the context the proposition was built within.
    pub fn value_on(&self, valuation: &[bool]) -> bool {
        match self {
            Self::Constant(value) => *value,

            Self::Atomic(atom) => valuation[*atom as usize],

            Self::Unary { operator, child } => operator.apply(child.value_on(valuation)),

            Self::Binary {
                operator,
                left,
                right,
            } => operator.apply(left.value_on(valuation), right.value_on(valuation)),
        }
    }

    /// Whether the proposition is a leaf, and so is never parenthesized when rendered.
    pub fn is_atomic(&self) -> bool {
        matches!(self, Self::Constant(_) | Self::Atomic(_))
    }
}

/// A proposition paired with its free atoms, in order of first occurrence.
///
/// Created when a parse succeeds, and never structurally mutated thereafter.
/// The constants are not free atoms, and do not appear in the atom list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropositionEntry {
    /// The proposition.
    pub proposition: Proposition,

    /// The distinct atoms appearing in the proposition, in order of first occurrence.
    pub atoms: Vec<Atom>,
}

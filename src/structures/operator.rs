/*!
The logical operators, as closed enumerations.

Each operator knows its own precedence, associativity, and truth function.
Precedence increases from the biconditional up to negation, and every binary operator associates to the left.
*/

/// A binary logical connective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Conjunction.
    And,

    /// (Inclusive) disjunction.
    Or,

    /// The material conditional.
    Imply,

    /// The biconditional.
    Iff,
}

/// A unary logical operation.
///
/// Only negation, at present, though nothing leans on this being so.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Negation.
    Not,
}

impl BinaryOperator {
    /// A numeric representation of the operator's precedence, higher binding tighter.
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Iff => 0,
            Self::Imply => 1,
            Self::Or => 2,
            Self::And => 3,
        }
    }

    /// Whether the operator associates to the left.
    pub const fn left_associative(self) -> bool {
        match self {
            Self::And | Self::Or | Self::Imply | Self::Iff => true,
        }
    }

    /// The truth value of the operator applied to a pair of truth values, in order.
    pub const fn apply(self, left: bool, right: bool) -> bool {
        match self {
            Self::And => left && right,
            Self::Or => left || right,
            Self::Imply => !left || right,
            Self::Iff => left == right,
        }
    }
}

impl UnaryOperator {
    /// A numeric representation of the operator's precedence, above every binary operator.
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Not => 4,
        }
    }

    /// The truth value of the operator applied to a truth value.
    pub const fn apply(self, value: bool) -> bool {
        match self {
            Self::Not => !value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_order() {
        assert!(BinaryOperator::Iff.precedence() < BinaryOperator::Imply.precedence());
        assert!(BinaryOperator::Imply.precedence() < BinaryOperator::Or.precedence());
        assert!(BinaryOperator::Or.precedence() < BinaryOperator::And.precedence());
        assert!(BinaryOperator::And.precedence() < UnaryOperator::Not.precedence());
    }

    #[test]
    fn truth_functions() {
        assert!(BinaryOperator::Imply.apply(false, false));
        assert!(!BinaryOperator::Imply.apply(true, false));
        assert!(BinaryOperator::Iff.apply(false, false));
        assert!(!BinaryOperator::Iff.apply(true, false));
        assert!(UnaryOperator::Not.apply(false));
    }
}

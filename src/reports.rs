/*!
Reports for reasoning outcomes.
*/

/// High-level reports regarding a reasoning procedure.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The propositions examined are equivalent.
    Equivalent,

    /// The propositions examined are not equivalent.
    Inequivalent,

    /// The argument examined is valid.
    Valid,

    /// The argument examined is not valid.
    Invalid,

    /// The procedure did not settle the question, for some reason.
    Unknown,
}

impl Report {
    /// The report of an equivalence check.
    pub fn of_equivalence(outcome: bool) -> Self {
        match outcome {
            true => Self::Equivalent,
            false => Self::Inequivalent,
        }
    }

    /// The report of a validity check.
    pub fn of_validity(outcome: bool) -> Self {
        match outcome {
            true => Self::Valid,
            false => Self::Invalid,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Equivalent => write!(f, "The two propositions are equivalent."),
            Self::Inequivalent => write!(f, "The two propositions are not equivalent."),
            Self::Valid => write!(f, "The argument is valid."),
            Self::Invalid => write!(f, "The argument is not valid."),
            Self::Unknown => write!(f, "Something went wrong."),
        }
    }
}

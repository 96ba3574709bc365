/*!
Semantic equivalence of two propositions, by exhaustive sweep.

Two propositions are equivalent when they take the same value on every assignment to the union of their atoms.
Both entries must come from the same context, as the sweep toggles atoms through the context valuation.
*/

use log::info;

use crate::context::LogicContext;
use crate::misc::log::targets;
use crate::procedures::enumerate::{assignments, atom_union};
use crate::structures::proposition::PropositionEntry;
use crate::types::err::ReasoningError;

impl LogicContext {
    /// Whether two propositions take the same value on every assignment.
    pub fn equivalent(
        &mut self,
        left: &PropositionEntry,
        right: &PropositionEntry,
    ) -> Result<bool, ReasoningError> {
        let atoms = atom_union([left, right]);

        for assignment in assignments(atoms.len(), self.config.atom_ceiling)? {
            self.apply_assignment(&atoms, assignment);
            if left.proposition.value_on(self.valuation())
                != right.proposition.value_on(self.valuation())
            {
                info!(
                    target: targets::REASONER,
                    "Distinguished on assignment {assignment:b} over {} atom(s)",
                    atoms.len()
                );
                return Ok(false);
            }
        }
        Ok(true)
    }
}

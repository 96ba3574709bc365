/*!
Validity of an argument, by exhaustive sweep.

An argument is valid when no assignment makes every premise true and the conclusion false.
Validity of an argument with no premises is not defined here, as the empty conjunction is a matter of convention rather than of the argument given.
*/

use log::info;

use crate::context::LogicContext;
use crate::misc::log::targets;
use crate::procedures::enumerate::{assignments, atom_union};
use crate::structures::proposition::PropositionEntry;
use crate::types::err::ReasoningError;

impl LogicContext {
    /// Whether the premises entail the conclusion.
    pub fn valid(
        &mut self,
        premises: &[&PropositionEntry],
        conclusion: &PropositionEntry,
    ) -> Result<bool, ReasoningError> {
        if premises.is_empty() {
            return Err(ReasoningError::NoPremises);
        }

        let atoms = atom_union(premises.iter().copied().chain([conclusion]));

        for assignment in assignments(atoms.len(), self.config.atom_ceiling)? {
            self.apply_assignment(&atoms, assignment);
            let premises_hold = premises
                .iter()
                .all(|premise| premise.proposition.value_on(self.valuation()));
            if premises_hold && !conclusion.proposition.value_on(self.valuation()) {
                info!(
                    target: targets::REASONER,
                    "Countermodel at assignment {assignment:b} over {} atom(s)",
                    atoms.len()
                );
                return Ok(false);
            }
        }
        Ok(true)
    }
}

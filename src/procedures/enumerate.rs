/*!
Exhaustive enumeration of truth assignments.

An assignment over `k` atoms is packed into a `u64`, with bit `i` giving the value of the `i`-th atom of some fixed atom ordering.
A sweep visits every assignment, descending from all-true to all-false.

The packing bounds a sweep at 63 atoms, and a [configured ceiling](crate::config::Config::atom_ceiling) may cut in sooner.
Breaching either bound is an ordinary [error](ReasoningError::TooManyAtoms), as a sweep past it would not terminate in reasonable time anyway.
*/

use crate::context::LogicContext;
use crate::structures::proposition::Atom;
use crate::structures::proposition::PropositionEntry;
use crate::types::err::ReasoningError;

/// Every assignment over `count` atoms, from all-true down to all-false.
///
/// With no atoms there is a single, empty, assignment.
pub fn assignments(
    count: usize,
    ceiling: u32,
) -> Result<impl Iterator<Item = u64>, ReasoningError> {
    if count >= u64::BITS as usize || count as u64 > ceiling as u64 {
        return Err(ReasoningError::TooManyAtoms(count));
    }
    let all_true = match count {
        0 => 0,
        _ => (1_u64 << count) - 1,
    };
    Ok((0..=all_true).rev())
}

/// The atoms of some entries, deduplicated, in first-occurrence order.
pub fn atom_union<'e>(entries: impl IntoIterator<Item = &'e PropositionEntry>) -> Vec<Atom> {
    let mut atoms: Vec<Atom> = Vec::default();
    for entry in entries {
        for atom in &entry.atoms {
            if !atoms.contains(atom) {
                atoms.push(*atom);
            }
        }
    }
    atoms
}

impl LogicContext {
    /// Writes a packed assignment over the given atoms into the valuation.
    pub(crate) fn apply_assignment(&mut self, atoms: &[Atom], assignment: u64) {
        for (index, atom) in atoms.iter().enumerate() {
            self.set_value(*atom, (assignment >> index) & 1 == 1);
        }
    }
}

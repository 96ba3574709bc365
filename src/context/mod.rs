/*!
The context --- within which propositions are built, stored, rendered, and reasoned about.

A context owns:
- A [configuration](crate::config::Config).
- A [representation table](crate::structures::representation::RepresentationTable).
- The atom table: an interning map from names to [atom](Atom) handles, append-only until [cleared](LogicContext::clear).
- The valuation: the current truth value of every atom, toggled during an exhaustive sweep.
- The stored [entries](PropositionEntry), in insertion order.

The atom table is the interning scope of the library: every occurrence of a name, in any entry built within the context, resolves to the same handle.
So, toggling an atom during a sweep of the [reasoner](crate::procedures) is visible to every occurrence of the atom in every stored entry.

Methods which toggle the valuation take `&mut self`, so one sweep is in flight per context at a time.

# Example

```rust
use ponens::config::Config;
use ponens::context::LogicContext;

let mut the_context = LogicContext::from_config(Config::default());

let premise = the_context.read_proposition("p → q").unwrap();
let rewrite = the_context.read_proposition("¬p ∨ q").unwrap();

assert_eq!(the_context.equivalent(&premise, &rewrite), Ok(true));
```
*/

use std::collections::HashMap;

use log::info;

use crate::config::Config;
use crate::misc::log::targets;
use crate::structures::proposition::{Atom, PropositionEntry, Valuation, ATOM_MAX};
use crate::structures::representation::RepresentationTable;
use crate::types::err::BuildError;

/// A context: configuration, representations, the atom table, the valuation, and stored entries.
pub struct LogicContext {
    /// The configuration of the context.
    pub config: Config,

    /// The spellings under which input is read and output written.
    pub representations: RepresentationTable,

    /// The name of each atom, indexed by the atom.
    atom_names: Vec<String>,

    /// The interning map from names to atoms.
    atom_map: HashMap<String, Atom>,

    /// The current truth value of each atom, indexed by the atom.
    valuation: Valuation,

    /// The stored entries, in insertion order.
    entries: Vec<PropositionEntry>,
}

impl LogicContext {
    /// A context with the given configuration and no atoms or entries.
    pub fn from_config(config: Config) -> Self {
        LogicContext {
            config,
            representations: RepresentationTable::default(),
            atom_names: Vec::default(),
            atom_map: HashMap::default(),
            valuation: Valuation::default(),
            entries: Vec::default(),
        }
    }

    /// The atom interned for a name, freshly interned if the name is new.
    pub fn atom_or_fresh(&mut self, name: &str) -> Result<Atom, BuildError> {
        if let Some(atom) = self.atom_map.get(name) {
            return Ok(*atom);
        }
        if self.atom_names.len() > ATOM_MAX as usize {
            return Err(BuildError::AtomsExhausted);
        }
        let atom = self.atom_names.len() as Atom;
        self.atom_names.push(name.to_owned());
        self.atom_map.insert(name.to_owned(), atom);
        self.valuation.push(false);
        info!(target: targets::CONTEXT, "Fresh atom {atom} for '{name}'");
        Ok(atom)
    }

    /// The atom interned for a name, if the name has been interned.
    pub fn atom(&self, name: &str) -> Option<Atom> {
        self.atom_map.get(name).copied()
    }

    /// The name an atom was interned for.
    ///
    /// # Panics
    /// If the atom is not from this context.
    pub fn atom_name(&self, atom: Atom) -> &str {
        &self.atom_names[atom as usize]
    }

    /// A count of interned atoms.
    pub fn atom_count(&self) -> usize {
        self.atom_names.len()
    }

    /// The current truth value of an atom.
    ///
    /// Atom values are scratch state for sweeps --- the value read is whatever the most recent sweep left behind.
    pub fn value_of(&self, atom: Atom) -> bool {
        self.valuation[atom as usize]
    }

    /// The current valuation.
    pub fn valuation(&self) -> &[bool] {
        &self.valuation
    }

    /// Sets the truth value of an atom.
    pub(crate) fn set_value(&mut self, atom: Atom, value: bool) {
        self.valuation[atom as usize] = value;
    }

    /// Stores an entry, returning its index.
    pub fn push_entry(&mut self, entry: PropositionEntry) -> usize {
        self.entries.push(entry);
        self.entries.len() - 1
    }

    /// The stored entry at an index, if there is one.
    pub fn entry(&self, index: usize) -> Option<&PropositionEntry> {
        self.entries.get(index)
    }

    /// The stored entries, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &PropositionEntry> {
        self.entries.iter()
    }

    /// Removes and returns the stored entry at an index, if there is one.
    ///
    /// Names whose atom appears in no remaining entry are released for fresh interning.
    /// Handles held by remaining entries are unaffected: the atom table itself is append-only until [clear](Self::clear).
    pub fn remove_entry(&mut self, index: usize) -> Option<PropositionEntry> {
        if index >= self.entries.len() {
            return None;
        }
        let removed = self.entries.remove(index);

        let mut orphaned: Vec<Atom> = removed.atoms.clone();
        for entry in &self.entries {
            orphaned.retain(|atom| !entry.atoms.contains(atom));
        }
        for atom in orphaned {
            self.atom_map.remove(&self.atom_names[atom as usize]);
        }

        Some(removed)
    }

    /// A count of stored entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clears every entry and the atom table, resetting the variable namespace.
    pub fn clear(&mut self) {
        info!(target: targets::CONTEXT, "Context cleared");
        self.entries.clear();
        self.atom_names.clear();
        self.atom_map.clear();
        self.valuation.clear();
    }
}

impl Default for LogicContext {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_shares_handles() {
        let mut ctx = LogicContext::default();
        let p_first = ctx.atom_or_fresh("p").unwrap();
        let q = ctx.atom_or_fresh("q").unwrap();
        let p_again = ctx.atom_or_fresh("p").unwrap();

        assert_eq!(p_first, p_again);
        assert_ne!(p_first, q);
        assert_eq!(ctx.atom_count(), 2);
        assert_eq!(ctx.atom_name(q), "q");
    }

    #[test]
    fn removal_releases_exclusive_names() {
        let mut ctx = LogicContext::default();
        let shared = ctx.read_proposition("p ^ q").unwrap();
        let exclusive = ctx.read_proposition("q ^ r").unwrap();
        ctx.push_entry(shared);
        let index = ctx.push_entry(exclusive);

        ctx.remove_entry(index);

        // "r" appeared in the removed entry alone, "q" survives.
        assert_eq!(ctx.atom("r"), None);
        assert!(ctx.atom("q").is_some());
        assert!(ctx.atom("p").is_some());

        // Re-reading "r" interns afresh.
        assert!(ctx.read_proposition("r").is_ok());
        assert!(ctx.atom("r").is_some());
    }

    #[test]
    fn clear_resets_the_namespace() {
        let mut ctx = LogicContext::default();
        let p = ctx.atom_or_fresh("p").unwrap();
        ctx.atom_or_fresh("q").unwrap();
        ctx.clear();

        assert_eq!(ctx.atom_count(), 0);
        let q = ctx.atom_or_fresh("q").unwrap();
        assert_eq!(q, p);
    }
}

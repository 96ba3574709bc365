/*!
Truth tables, rendered as a block of text.

A table has one column per atom of the entry, rightmost columns toggling fastest, and a final column for the whole proposition.
The header names the two column groups, a second line spells each column, and a dashed divider separates the header from the rows.
Rows sweep every assignment from all-true down to all-false.
*/

use crate::context::LogicContext;
use crate::procedures::enumerate::assignments;
use crate::structures::proposition::PropositionEntry;
use crate::types::err::ReasoningError;

/// Text centered within a width, or unpadded when it does not fit.
fn justify_center(text: &str, width: usize) -> String {
    let length = text.chars().count();
    if length >= width {
        return text.to_owned();
    }
    let left = (width - length) / 2;
    let right = width - length - left;
    format!("{:left$}{text}{:right$}", "", "")
}

fn truth_letter(value: bool) -> &'static str {
    match value {
        true => "T",
        false => "F",
    }
}

impl LogicContext {
    /// The truth table of an entry, under the configured notation.
    pub fn truth_table(&mut self, entry: &PropositionEntry) -> Result<String, ReasoningError> {
        let sweep = assignments(entry.atoms.len(), self.config.atom_ceiling)?;

        let rendered = self.render_entry(entry);
        let rendered_width = rendered.chars().count();

        // Later atoms first, so the last column toggles on every row.
        let columns: Vec<(usize, usize)> = entry
            .atoms
            .iter()
            .enumerate()
            .rev()
            .map(|(index, atom)| (index, self.atom_name(*atom).chars().count()))
            .collect();
        let atoms_width = 2 + columns
            .iter()
            .map(|(_, width)| width + 3)
            .sum::<usize>();

        let mut table = String::default();

        table.push_str(&justify_center("Atomics", atoms_width.saturating_sub(3)));
        table.push_str("| ");
        table.push_str(&justify_center("Proposition", rendered_width + 1));
        table.push('\n');

        table.push(' ');
        for (index, _) in &columns {
            table.push_str(self.atom_name(entry.atoms[*index]));
            table.push_str(" | ");
        }
        table.push_str(&rendered);
        table.push('\n');

        for _ in 0..atoms_width + rendered_width {
            table.push('-');
        }
        table.push('\n');

        for assignment in sweep {
            self.apply_assignment(&entry.atoms, assignment);
            for (index, width) in &columns {
                let value = self.value_of(entry.atoms[*index]);
                table.push_str(&justify_center(truth_letter(value), width + 2));
                table.push('|');
            }
            table.push_str(&justify_center(
                truth_letter(entry.proposition.value_on(self.valuation())),
                rendered_width + 1,
            ));
            table.push('\n');
        }

        Ok(table)
    }
}

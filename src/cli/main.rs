/*!
An interactive console for propositional logic.

A session holds one [context](LogicContext) and loops over a numbered menu: store propositions, list them, print truth tables, and check equivalence and validity between stored entries.
Propositions are selected by the index shown when listing.
A blank line at the menu ends the session, and a blank line at any selection prompt abandons the procedure in progress.
*/

use std::io::{BufRead, Write};

use clap::Parser;

use ponens::config::{Config, Notation};
use ponens::context::LogicContext;
use ponens::reports::Report;
use ponens::structures::proposition::PropositionEntry;

/// An interactive playground for propositional logic.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// The notation under which propositions are rendered.
    #[arg(long, value_enum, default_value_t = Notation::Symbolic)]
    notation: Notation,

    /// The most atoms a reasoning sweep may cover.
    #[arg(long, default_value_t = 63)]
    atom_ceiling: u32,
}

fn main() -> std::io::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = Config {
        notation: args.notation,
        atom_ceiling: args.atom_ceiling,
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(
        LogicContext::from_config(config),
        stdin.lock(),
        stdout.lock(),
    );
    session.run()
}

/// A menu loop over a context, reading from and writing to the given handles.
struct Session<R: BufRead, W: Write> {
    context: LogicContext,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    fn new(context: LogicContext, input: R, output: W) -> Self {
        Session {
            context,
            input,
            output,
        }
    }

    fn run(&mut self) -> std::io::Result<()> {
        writeln!(self.output, "Propositional Logic Playground")?;
        writeln!(self.output, "Type the number of an option, or press Enter to quit.")?;

        loop {
            self.print_menu()?;
            let Some(choice) = self.read_line()? else {
                break;
            };

            match choice.as_str() {
                "" => {
                    writeln!(self.output, "Goodbye!")?;
                    break;
                }
                "0" => self.format_settings()?,
                "1" => {
                    self.list_propositions()?;
                }
                "2" => self.add_proposition()?,
                "3" => self.show_truth_table()?,
                "4" => self.equivalence_check()?,
                "5" => self.validity_check()?,
                unknown => writeln!(self.output, "Unknown option: {unknown}")?,
            }
        }
        Ok(())
    }

    /// The next input line, trimmed, or none at end of input.
    fn read_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::default();
        match self.input.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line.trim().to_owned())),
        }
    }

    fn print_menu(&mut self) -> std::io::Result<()> {
        writeln!(self.output, "\nOptions:")?;
        writeln!(self.output, "  0: Change format settings")?;
        writeln!(self.output, "  1: Show propositions in the current context")?;
        writeln!(self.output, "  2: Add a proposition")?;
        writeln!(self.output, "  3: Show a truth table for a proposition")?;
        writeln!(self.output, "  4: Check for equivalence between propositions")?;
        writeln!(self.output, "  5: Evaluate validity of an argument")?;
        write!(self.output, "> ")?;
        self.output.flush()
    }

    fn format_settings(&mut self) -> std::io::Result<()> {
        writeln!(self.output, "\nOptions:")?;
        writeln!(self.output, "  1: Symbolic")?;
        writeln!(self.output, "  2: LaTeX markup")?;
        writeln!(self.output, "  3: Typable characters")?;
        writeln!(self.output, "  4: Words")?;
        write!(self.output, "> ")?;
        self.output.flush()?;

        let choice = self.read_line()?.unwrap_or_default();
        match choice.as_str() {
            "1" => self.context.config.notation = Notation::Symbolic,
            "2" => self.context.config.notation = Notation::Latex,
            "3" => self.context.config.notation = Notation::Typable,
            "4" => self.context.config.notation = Notation::Words,
            _ => writeln!(self.output, "No changes made.")?,
        }
        Ok(())
    }

    fn add_proposition(&mut self) -> std::io::Result<()> {
        write!(self.output, "Enter proposition: ")?;
        self.output.flush()?;

        let text = self.read_line()?.unwrap_or_default();
        if text.is_empty() {
            return Ok(());
        }

        match self.context.add_proposition(&text) {
            Ok(index) => {
                let entry = self.context.entry(index).cloned();
                if let Some(entry) = entry {
                    let rendered = self.context.render_entry(&entry);
                    writeln!(self.output, "Added to context: {rendered}")?;
                }
            }
            Err(kind) => {
                writeln!(self.output, "Couldn't add proposition.")?;
                writeln!(self.output, "{}", kind.diagnostic(&text))?;
            }
        }
        Ok(())
    }

    /// Lists the stored propositions, noting whether any were listed.
    fn list_propositions(&mut self) -> std::io::Result<bool> {
        if self.context.is_empty() {
            writeln!(self.output, "No propositions in context.")?;
            return Ok(false);
        }
        writeln!(self.output, "Propositions in context:")?;
        let listing: Vec<String> = self
            .context
            .entries()
            .map(|entry| self.context.render_entry(entry))
            .collect();
        for (index, rendered) in listing.iter().enumerate() {
            writeln!(self.output, "  {index}: {rendered}")?;
        }
        Ok(true)
    }

    /// Lists the stored propositions and asks for an index.
    ///
    /// A cloned entry is returned, leaving the context free for reasoning sweeps.
    fn ask_entry(&mut self, message: &str) -> std::io::Result<Option<PropositionEntry>> {
        if !self.list_propositions()? {
            return Ok(None);
        }
        if !message.is_empty() {
            writeln!(self.output, "{message}")?;
        }

        write!(self.output, "Enter index: ")?;
        self.output.flush()?;
        let text = self.read_line()?.unwrap_or_default();
        if text.is_empty() {
            writeln!(self.output, "Exiting early.")?;
            return Ok(None);
        }

        let index: usize = match text.parse() {
            Ok(index) => index,
            Err(_) => {
                writeln!(self.output, "Not a valid number.")?;
                writeln!(self.output, "Exiting early.")?;
                return Ok(None);
            }
        };
        let Some(entry) = self.context.entry(index).cloned() else {
            writeln!(self.output, "No proposition at that index.")?;
            writeln!(self.output, "Exiting early.")?;
            return Ok(None);
        };

        let rendered = self.context.render_entry(&entry);
        writeln!(self.output, "Selected: {rendered}")?;
        Ok(Some(entry))
    }

    fn show_truth_table(&mut self) -> std::io::Result<()> {
        let Some(entry) = self.ask_entry("")? else {
            return Ok(());
        };
        match self.context.truth_table(&entry) {
            Ok(table) => write!(self.output, "{table}")?,
            Err(error) => writeln!(self.output, "{error}")?,
        }
        Ok(())
    }

    fn equivalence_check(&mut self) -> std::io::Result<()> {
        if self.context.is_empty() {
            writeln!(self.output, "Not enough propositions to check equivalence.")?;
            return Ok(());
        }

        let Some(first) = self.ask_entry("Select the first proposition.")? else {
            return Ok(());
        };
        let Some(second) = self.ask_entry("Select the second proposition.")? else {
            return Ok(());
        };

        writeln!(self.output, "\nEvaluating equivalence between the two selections...")?;
        match self.context.equivalent(&first, &second) {
            Ok(outcome) => writeln!(self.output, "{}", Report::of_equivalence(outcome))?,
            Err(error) => {
                writeln!(self.output, "{}", Report::Unknown)?;
                writeln!(self.output, "{error}")?;
            }
        }
        Ok(())
    }

    fn validity_check(&mut self) -> std::io::Result<()> {
        if self.context.is_empty() {
            writeln!(self.output, "Not enough propositions to evaluate argument validity.")?;
            return Ok(());
        }

        let Some(conclusion) =
            self.ask_entry("Select a conclusion (the proposition you want to prove)")?
        else {
            return Ok(());
        };

        let mut premises: Vec<PropositionEntry> = Vec::default();
        loop {
            match self.ask_entry("Select a premise to add (or nothing to quit)")? {
                Some(premise) => premises.push(premise),
                None => break,
            }
        }
        if premises.is_empty() {
            writeln!(self.output, "No premises entered.")?;
            return Ok(());
        }

        writeln!(self.output, "\nArgument:")?;
        for premise in &premises {
            let rendered = self.context.render_entry(premise);
            writeln!(self.output, "{rendered}")?;
        }
        writeln!(self.output, "{}", "-".repeat(10))?;
        writeln!(self.output, "∴ {}", self.context.render_entry(&conclusion))?;

        writeln!(self.output, "Evaluating validity...")?;
        let premise_refs: Vec<&PropositionEntry> = premises.iter().collect();
        match self.context.valid(&premise_refs, &conclusion) {
            Ok(outcome) => writeln!(self.output, "{}", Report::of_validity(outcome))?,
            Err(error) => {
                writeln!(self.output, "{}", Report::Unknown)?;
                writeln!(self.output, "{error}")?;
            }
        }
        Ok(())
    }
}

use ponens::{
    config::{Config, Notation},
    context::LogicContext,
    structures::proposition::Proposition,
    types::err::{BuildError, ErrorKind, SyntaxError},
};

mod reading {
    use super::*;

    #[test]
    fn precedence_without_parentheses() {
        let mut the_context = LogicContext::default();

        // Binding order: ¬, ∧, ∨, →, ↔.
        let entry = the_context.read_proposition("-p v q ^ r -> s <-> p").unwrap();
        assert_eq!(
            the_context.render_entry(&entry),
            "((¬p ∨ (q ∧ r)) → s) ↔ p"
        );
    }

    #[test]
    fn parentheses_override_precedence() {
        let mut the_context = LogicContext::default();

        let grouped = the_context.read_proposition("p ^ (q v r)").unwrap();
        let flat = the_context.read_proposition("p ^ q v r").unwrap();

        assert_eq!(the_context.render_entry(&grouped), "p ∧ (q ∨ r)");
        assert_eq!(the_context.render_entry(&flat), "(p ∧ q) ∨ r");
        assert_eq!(the_context.equivalent(&grouped, &flat), Ok(false));
    }

    #[test]
    fn implication_is_left_associative() {
        let mut the_context = LogicContext::default();

        let bare = the_context.read_proposition("p -> q -> r").unwrap();
        let grouped = the_context.read_proposition("(p -> q) -> r").unwrap();

        assert_eq!(the_context.equivalent(&bare, &grouped), Ok(true));
    }

    #[test]
    fn every_spelling_of_a_connective_reads_alike() {
        let mut the_context = LogicContext::default();

        let symbolic = the_context.read_proposition("p ∧ q").unwrap();
        for spelling in ["p \\land q", "p ^ q", "p AND q", "p & q", "p && q", "p * q"] {
            let alias = the_context.read_proposition(spelling).unwrap();
            assert_eq!(the_context.equivalent(&symbolic, &alias), Ok(true));
            assert_eq!(the_context.render_entry(&alias), "p ∧ q");
        }
    }

    #[test]
    fn a_typable_formula_renders_symbolically() {
        let mut the_context = LogicContext::default();

        let entry = the_context.read_proposition("(-t ^ s) -> -r").unwrap();
        assert_eq!(the_context.render_entry(&entry), "(¬t ∧ s) → ¬r");
    }

    #[test]
    fn shared_names_share_atoms_across_entries() {
        let mut the_context = LogicContext::default();

        let first = the_context.read_proposition("p -> q").unwrap();
        let second = the_context.read_proposition("q -> p").unwrap();

        assert_eq!(first.atoms.len(), 2);
        assert_eq!(second.atoms.len(), 2);
        assert_eq!(the_context.atom_count(), 2);
        assert_eq!(first.atoms[0], second.atoms[1]);
    }

    #[test]
    fn constants_are_not_atoms() {
        let mut the_context = LogicContext::default();

        let entry = the_context.read_proposition("T -> p").unwrap();
        assert_eq!(entry.atoms.len(), 1);
        assert!(matches!(
            entry.proposition,
            Proposition::Binary { ref left, .. } if matches!(**left, Proposition::Constant(true))
        ));
    }
}

mod rendering {
    use super::*;

    fn context_with(notation: Notation) -> LogicContext {
        LogicContext::from_config(Config {
            notation,
            ..Config::default()
        })
    }

    #[test]
    fn round_trips_preserve_semantics() {
        for notation in [
            Notation::Symbolic,
            Notation::Latex,
            Notation::Typable,
            Notation::Words,
        ] {
            let mut the_context = context_with(notation);

            for formula in ["p ^ (q v r)", "-(p <-> q) -> (r ^ T)", "--p v -(q -> F)"] {
                let entry = the_context.read_proposition(formula).unwrap();
                let rendered = the_context.render_entry(&entry);
                let reread = the_context.read_proposition(&rendered).unwrap();
                assert_eq!(the_context.equivalent(&entry, &reread), Ok(true));
                // A second render of the re-read tree is textually stable.
                assert_eq!(the_context.render_entry(&reread), rendered);
            }
        }
    }

    #[test]
    fn truth_tables_sweep_from_all_true() {
        let mut the_context = LogicContext::default();

        let entry = the_context.read_proposition("p v q").unwrap();
        let table = the_context.truth_table(&entry).unwrap();
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[1], " q | p | p ∨ q");
        assert_eq!(lines[3], " T | T |  T   ");
        assert_eq!(lines[6], " F | F |  F   ");
    }
}

mod diagnostics {
    use super::*;

    #[test]
    fn lexical_errors_carry_a_caret() {
        let mut the_context = LogicContext::default();

        let Err(kind) = the_context.read_proposition("p ^ #q") else {
            panic!("a disallowed character was read");
        };
        let lexical = kind.lexical().expect("a lexical error");
        assert_eq!(lexical.offset, 4);
        assert_eq!(
            kind.diagnostic("p ^ #q"),
            "p ^ #q\n    ^\nInvalid character: '#'"
        );
    }

    #[test]
    fn adjacent_propositions_are_rejected() {
        let mut the_context = LogicContext::default();

        assert!(matches!(
            the_context.read_proposition("p q"),
            Err(ErrorKind::Syntax(SyntaxError::UnexpectedProposition))
        ));
    }

    #[test]
    fn dangling_operators_are_rejected() {
        let mut the_context = LogicContext::default();

        assert!(the_context.read_proposition("p ^").is_err());
        assert!(the_context.read_proposition("^ p").is_err());
        assert!(the_context.read_proposition("p ^ q)").is_err());
        assert!(the_context.read_proposition("(p ^ q").is_err());
        assert!(matches!(
            the_context.read_proposition(""),
            Err(ErrorKind::Build(BuildError::NoProposition))
        ));
    }

    #[test]
    fn failed_reads_leave_the_context_usable() {
        let mut the_context = LogicContext::default();

        assert!(the_context.read_proposition("p ^ ^ q").is_err());
        assert!(the_context.read_proposition("p ^ q").is_ok());
    }
}

use ponens::{context::LogicContext, types::err::ReasoningError};

mod equivalence {
    use super::*;

    #[test]
    fn classical_rewrites() {
        let mut the_context = LogicContext::default();

        let pairs = [
            ("p -> q", "-p v q"),
            ("-(p ^ q)", "-p v -q"),
            ("-(p v q)", "-p ^ -q"),
            ("p <-> q", "(p -> q) ^ (q -> p)"),
            ("p v (q ^ r)", "(p v q) ^ (p v r)"),
            ("--p", "p"),
        ];
        for (left, right) in pairs {
            let left = the_context.read_proposition(left).unwrap();
            let right = the_context.read_proposition(right).unwrap();
            assert_eq!(the_context.equivalent(&left, &right), Ok(true));
        }
    }

    #[test]
    fn near_misses_are_distinguished() {
        let mut the_context = LogicContext::default();

        let pairs = [
            ("p ^ q", "p v q"),
            ("p -> q", "q -> p"),
            ("p -> q", "p <-> q"),
            ("p", "q"),
        ];
        for (left, right) in pairs {
            let left = the_context.read_proposition(left).unwrap();
            let right = the_context.read_proposition(right).unwrap();
            assert_eq!(the_context.equivalent(&left, &right), Ok(false));
        }
    }

    #[test]
    fn constants_against_tautologies() {
        let mut the_context = LogicContext::default();

        let truth = the_context.read_proposition("T").unwrap();
        let excluded_middle = the_context.read_proposition("p v -p").unwrap();
        assert_eq!(the_context.equivalent(&truth, &excluded_middle), Ok(true));

        let falsity = the_context.read_proposition("F").unwrap();
        assert_eq!(the_context.equivalent(&falsity, &excluded_middle), Ok(false));
    }

    #[test]
    fn a_pair_differing_on_one_assignment() {
        let mut the_context = LogicContext::default();

        // Differ only when every atom is false.
        let left = the_context.read_proposition("p v q v r").unwrap();
        let right = the_context.read_proposition("T").unwrap();

        assert_eq!(the_context.equivalent(&left, &right), Ok(false));
    }
}

mod validity {
    use super::*;

    #[test]
    fn classical_argument_forms() {
        let mut the_context = LogicContext::default();

        // Modus ponens.
        let conditional = the_context.read_proposition("p -> q").unwrap();
        let antecedent = the_context.read_proposition("p").unwrap();
        let consequent = the_context.read_proposition("q").unwrap();
        assert_eq!(
            the_context.valid(&[&conditional, &antecedent], &consequent),
            Ok(true)
        );

        // Modus tollens.
        let denied = the_context.read_proposition("-q").unwrap();
        let negated = the_context.read_proposition("-p").unwrap();
        assert_eq!(the_context.valid(&[&conditional, &denied], &negated), Ok(true));

        // Disjunctive syllogism.
        let disjunction = the_context.read_proposition("p v q").unwrap();
        assert_eq!(
            the_context.valid(&[&disjunction, &negated], &consequent),
            Ok(true)
        );

        // Hypothetical syllogism.
        let second = the_context.read_proposition("q -> r").unwrap();
        let chained = the_context.read_proposition("p -> r").unwrap();
        assert_eq!(the_context.valid(&[&conditional, &second], &chained), Ok(true));
    }

    #[test]
    fn classical_fallacies() {
        let mut the_context = LogicContext::default();

        let conditional = the_context.read_proposition("p -> q").unwrap();

        // Affirming the consequent.
        let consequent = the_context.read_proposition("q").unwrap();
        let antecedent = the_context.read_proposition("p").unwrap();
        assert_eq!(
            the_context.valid(&[&conditional, &consequent], &antecedent),
            Ok(false)
        );

        // Denying the antecedent.
        let negated_antecedent = the_context.read_proposition("-p").unwrap();
        let negated_consequent = the_context.read_proposition("-q").unwrap();
        assert_eq!(
            the_context.valid(&[&conditional, &negated_antecedent], &negated_consequent),
            Ok(false)
        );
    }

    #[test]
    fn no_premises_is_indeterminate() {
        let mut the_context = LogicContext::default();

        let tautology = the_context.read_proposition("p v -p").unwrap();
        assert_eq!(
            the_context.valid(&[], &tautology),
            Err(ReasoningError::NoPremises)
        );
    }

    #[test]
    fn reasoning_leaves_entries_intact() {
        let mut the_context = LogicContext::default();

        let premise = the_context.read_proposition("p -> q").unwrap();
        let conclusion = the_context.read_proposition("q").unwrap();
        let rendered = the_context.render_entry(&premise);

        let _ = the_context.valid(&[&premise], &conclusion);

        // Sweeps toggle atom values, never structure.
        assert_eq!(the_context.render_entry(&premise), rendered);
        assert_eq!(the_context.equivalent(&premise, &premise), Ok(true));
    }
}

mod bounds {
    use super::*;

    #[test]
    fn the_ceiling_bounds_every_procedure() {
        let mut the_context = LogicContext::default();
        the_context.config.atom_ceiling = 3;

        let wide = the_context.read_proposition("p ^ q ^ r ^ s").unwrap();
        let narrow = the_context.read_proposition("p").unwrap();

        assert_eq!(
            the_context.truth_table(&wide),
            Err(ReasoningError::TooManyAtoms(4))
        );
        assert_eq!(
            the_context.equivalent(&wide, &narrow),
            Err(ReasoningError::TooManyAtoms(4))
        );
        assert_eq!(
            the_context.valid(&[&wide], &narrow),
            Err(ReasoningError::TooManyAtoms(4))
        );
    }
}

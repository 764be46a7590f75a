//! Property-based tests for closure and satisfiability.
//!
//! Relations are drawn over small sets of integers, so that both closures and solves stay cheap.

use proptest::prelude::*;
use relsat::{
    config::Config,
    procedures::{
        closure::closure,
        conversion::to_clauses,
        propagation::literal_closures,
        solve::{forced_assignment, is_satisfiable, verify, Solution},
    },
    structures::{
        clause::Clause,
        pair::{Element, Pair},
        relation::Relation,
    },
};

// ============================================================================
// Strategies
// ============================================================================

fn element() -> impl Strategy<Value = Element> {
    prop_oneof![1..=6_i64, -6..=-1_i64]
}

fn pair() -> impl Strategy<Value = Pair> {
    (element(), proptest::option::weighted(0.8, element())).prop_map(|(x, y)| match y {
        Some(y) => Pair::new(x, y),
        None => Pair::reflexive(x),
    })
}

fn relation() -> impl Strategy<Value = Relation> {
    proptest::collection::vec(pair(), 0..12).prop_map(|pairs| pairs.into_iter().collect())
}

// ============================================================================
// Closure
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_closure_reflexive(relation in relation()) {
        let closed = closure(&relation);
        for element in relation.elements() {
            prop_assert!(closed.contains(&Pair::new(element, element)));
        }
    }

    #[test]
    fn prop_closure_transitive(relation in relation()) {
        let closed = closure(&relation);
        for ab in &closed {
            for bc in &closed {
                if ab.target() == bc.x() {
                    prop_assert!(closed.relates(ab.x(), bc.target()));
                }
            }
        }
    }

    #[test]
    fn prop_closure_idempotent(relation in relation()) {
        let closed = closure(&relation);
        prop_assert_eq!(closure(&closed), closed);
    }

    #[test]
    fn prop_closure_monotone(relation in relation()) {
        let closed = closure(&relation);

        let mut ordered = Relation::new();
        ordered.extend(relation.iter().filter(|pair| !pair.is_reflexive()).copied());
        prop_assert!(ordered.is_subset(&closed));

        for pair in relation.iter().filter(|pair| pair.is_reflexive()) {
            prop_assert!(closed.contains(&Pair::new(pair.x(), pair.x())));
        }
        prop_assert_eq!(closed.elements(), relation.elements());
    }
}

// ============================================================================
// Formulas
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_one_clause_per_pair(x in element(), y in element()) {
        let reflexive: Relation = [Pair::reflexive(x)].into_iter().collect();
        let clauses = to_clauses(&reflexive);
        prop_assert_eq!(clauses.len(), 1);
        prop_assert!(clauses.iter().all(Clause::is_unit));

        let forward = to_clauses(&[Pair::new(x, y)].into_iter().collect());
        let backward = to_clauses(&[Pair::new(y, x)].into_iter().collect());
        prop_assert_eq!(forward.len(), 1);
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn prop_witness_agrees(relation in relation()) {
        let clauses = to_clauses(&relation);
        let solution = is_satisfiable(&relation, &Config::default());
        prop_assert!(solution.is_ok());

        match solution.ok() {
            Some(Solution::Satisfiable(witness)) => {
                prop_assert!(verify(&clauses, &witness));
            }
            Some(Solution::Unsatisfiable(_)) | None => {}
        }
    }

    #[test]
    fn prop_consistent_units_witness_keeps_forced(relation in relation()) {
        let clauses = to_clauses(&relation);
        if let Ok(forced) = forced_assignment(&clauses) {
            if let Ok(Solution::Satisfiable(witness)) = is_satisfiable(&relation, &Config::default()) {
                for (atom, value) in forced {
                    prop_assert_eq!(witness.get(&atom), Some(&value));
                }
            }
        }
    }

    #[test]
    fn prop_inconsistent_literals_false_on_witness(relation in relation()) {
        let clauses = to_clauses(&relation);
        if let Ok(Solution::Satisfiable(witness)) = is_satisfiable(&relation, &Config::default()) {
            for closure in literal_closures(&clauses) {
                if !closure.is_consistent() {
                    let atom = closure.literal.atom();
                    prop_assert_ne!(witness.get(&atom), Some(&closure.literal.polarity()));
                }
            }
        }
    }
}

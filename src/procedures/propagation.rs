//! The literals forced by assuming some literal, by unit resolution over binary clauses.
//!
//! The closure *T*(*l*) of a literal *l* is the least set of literals containing *l* and such that, for each literal *m* in the set and each binary clause (*a* ∨ *b*):
//! - If ¬*m* is *a*, then *b* is in the set.
//! - If ¬*m* is *b*, then *a* is in the set.
//!
//! In other words, *T*(*l*) is the collection of literals reachable from *l* in the [implication graph](crate::structures::implication_graph).
//! Unit clauses play no part.
//!
//! If *T*(*l*) contains some literal and its negation, then *l* cannot be true on any valuation satisfying the binary clauses, and *T*(*l*) is *inconsistent*.
//!
//! ```rust
//! # use relsat::procedures::propagation::{literal_closure, inconsistent_atoms};
//! # use relsat::structures::clause::{Clause, ClauseSet};
//! # use relsat::structures::literal::Literal;
//! let p = Literal::from_element(1);
//! let q = Literal::from_element(2);
//! let clauses: ClauseSet = [Clause::binary(p, q), Clause::binary(p, -q)].into_iter().collect();
//!
//! // -p gives both q and -q, and from either of these p follows.
//! let closure = literal_closure(-p, &clauses);
//! assert_eq!(closure.into_iter().collect::<Vec<_>>(), vec![-p, p, -q, q]);
//! assert_eq!(inconsistent_atoms(&literal_closure(-p, &clauses)), vec![1, 2]);
//! ```
//!
//! As literals are drawn from the (finite) clauses, and the set only grows, the fixed point is always reached.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::{
    misc::log::targets::{self},
    structures::{atom::Atom, clause::Clause, clause::ClauseSet, literal::Literal},
};

/// The closure of a literal, with any inconsistencies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LiteralClosure {
    /// The assumed literal.
    pub literal: Literal,

    /// The literals forced by the assumption, including the assumption.
    pub implied: BTreeSet<Literal>,

    /// Each atom with both literals forced by the assumption.
    pub inconsistent: Vec<Atom>,
}

impl LiteralClosure {
    pub fn is_consistent(&self) -> bool {
        self.inconsistent.is_empty()
    }
}

impl std::fmt::Display for LiteralClosure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let implied = self
            .implied
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "T({}) = {{{implied}}}", self.literal)
    }
}

/// The literals forced by assuming the given literal.
pub fn literal_closure(literal: Literal, clauses: &ClauseSet) -> BTreeSet<Literal> {
    let mut closure = BTreeSet::from([literal]);

    loop {
        let mut fresh = BTreeSet::new();

        for present in &closure {
            let complement = present.negate();
            for clause in clauses {
                if let Clause::Binary(a, b) = clause {
                    if *a == complement && !closure.contains(b) {
                        fresh.insert(*b);
                    }
                    if *b == complement && !closure.contains(a) {
                        fresh.insert(*a);
                    }
                }
            }
        }

        if fresh.is_empty() {
            break;
        }
        log::trace!(target: targets::PROPAGATION, "T({literal}) grows by {}", fresh.len());
        closure.extend(fresh);
    }

    closure
}

/// Each atom with both literals in the given set, in ascending order.
pub fn inconsistent_atoms(literals: &BTreeSet<Literal>) -> Vec<Atom> {
    literals
        .iter()
        .filter(|literal| literal.polarity() && literals.contains(&literal.negate()))
        .map(|literal| literal.atom())
        .collect()
}

/// The closure of both literals of every atom of the clauses, in ascending literal order.
pub fn literal_closures(clauses: &ClauseSet) -> Vec<LiteralClosure> {
    let mut closures = Vec::new();

    for atom in clauses.atoms() {
        for literal in [Literal::new(atom, true), Literal::new(atom, false)] {
            let implied = literal_closure(literal, clauses);
            let inconsistent = inconsistent_atoms(&implied);
            if !inconsistent.is_empty() {
                log::info!(target: targets::PROPAGATION, "T({literal}) is inconsistent on {inconsistent:?}");
            }
            closures.push(LiteralClosure {
                literal,
                implied,
                inconsistent,
            });
        }
    }

    closures
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(element: i64) -> Literal {
        Literal::from_element(element)
    }

    #[test]
    fn unit_clauses_ignored() {
        let clauses: ClauseSet = [Clause::unit(lit(2))].into_iter().collect();
        assert_eq!(literal_closure(lit(-2), &clauses), BTreeSet::from([lit(-2)]));
    }

    #[test]
    fn chained_resolution() {
        // -1 → 2, -2 → 3
        let clauses: ClauseSet = [
            Clause::binary(lit(1), lit(2)),
            Clause::binary(lit(2), lit(3)),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            literal_closure(lit(-1), &clauses),
            BTreeSet::from([lit(-1), lit(2)])
        );

        // -1 → 2 does not force 3, as 3 follows from -2.
        assert!(!literal_closure(lit(-1), &clauses).contains(&lit(3)));

        // -3 → 2, and then nothing from 2.
        assert_eq!(
            literal_closure(lit(-3), &clauses),
            BTreeSet::from([lit(-3), lit(2)])
        );
    }

    #[test]
    fn transitive_through_negations() {
        // -1 → -2, 2 → 1, and 2 → 3
        let clauses: ClauseSet = [
            Clause::binary(lit(1), lit(-2)),
            Clause::binary(lit(-2), lit(3)),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            literal_closure(lit(2), &clauses),
            BTreeSet::from([lit(1), lit(2), lit(3)])
        );
    }

    #[test]
    fn derived_literals_propagate() {
        // -1 → 2, then 2 → 3 through (-2 ∨ 3), then 3 → 4 through (-3 ∨ 4)
        let clauses: ClauseSet = [
            Clause::binary(lit(1), lit(2)),
            Clause::binary(lit(-2), lit(3)),
            Clause::binary(lit(4), lit(-3)),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            literal_closure(lit(-1), &clauses),
            BTreeSet::from([lit(-1), lit(2), lit(3), lit(4)])
        );
    }

    #[test]
    fn contradiction_feeds_back() {
        let clauses: ClauseSet = [
            Clause::binary(lit(1), lit(2)),
            Clause::binary(lit(1), lit(-2)),
        ]
        .into_iter()
        .collect();

        let closure = literal_closure(lit(-1), &clauses);
        assert_eq!(
            closure,
            BTreeSet::from([lit(-1), lit(1), lit(-2), lit(2)])
        );
        assert_eq!(inconsistent_atoms(&closure), vec![1, 2]);
    }

    #[test]
    fn closures_for_every_atom() {
        let clauses: ClauseSet = [
            Clause::binary(lit(1), lit(2)),
            Clause::binary(lit(1), lit(-2)),
            Clause::unit(lit(3)),
        ]
        .into_iter()
        .collect();

        let closures = literal_closures(&clauses);
        let literals = closures
            .iter()
            .map(|closure| closure.literal)
            .collect::<Vec<_>>();
        assert_eq!(
            literals,
            vec![lit(1), lit(-1), lit(2), lit(-2), lit(3), lit(-3)]
        );

        let inconsistent = closures
            .iter()
            .filter(|closure| !closure.is_consistent())
            .map(|closure| closure.literal)
            .collect::<Vec<_>>();
        assert_eq!(inconsistent, vec![lit(-1)]);
    }
}

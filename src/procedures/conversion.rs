//! Conversion of a relation to a formula.
//!
//! Each pair of the relation gives exactly one [clause](crate::structures::clause):
//!
//! - The reflexive singleton (*x*) gives the unit clause (*x*), asserting *x*.
//! - The ordered pair (*x*,*y*) gives the binary clause (*x* ∨ *y*), i.e. ¬*x* → *y* and ¬*y* → *x*.
//!
//! Clauses are collected in a [ClauseSet], and so the pairs (*x*,*y*) and (*y*,*x*) give the same clause.
//!
//! ```rust
//! # use relsat::procedures::conversion::to_clauses;
//! # use relsat::structures::{pair::Pair, relation::Relation};
//! let relation: Relation = [Pair::new(1, 2), Pair::new(2, 1), Pair::reflexive(1)].into_iter().collect();
//! let clauses = to_clauses(&relation);
//!
//! assert_eq!(clauses.len(), 2);
//! assert_eq!(clauses.units().count(), 1);
//! ```
//!
//! A reflexive singleton is read as asserting its element, rather than as the tautology *x* → *x*.

use crate::{
    misc::log::targets::{self},
    structures::{
        clause::{Clause, ClauseSet},
        relation::Relation,
    },
};

/// The formula of a relation.
pub fn to_clauses(relation: &Relation) -> ClauseSet {
    let mut clauses = ClauseSet::new();
    for pair in relation {
        let clause = Clause::from_pair(pair);
        if clauses.insert(clause) {
            log::trace!(target: targets::CONVERSION, "{pair} gives {clause}");
        } else {
            log::trace!(target: targets::CONVERSION, "{pair} gives {clause}, already present");
        }
    }
    log::info!(target: targets::CONVERSION, "{} pairs give {} clauses", relation.len(), clauses.len());
    clauses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::{literal::Literal, pair::Pair};

    #[test]
    fn empty_relation_empty_formula() {
        assert!(to_clauses(&Relation::new()).is_empty());
    }

    #[test]
    fn one_clause_per_pair() {
        let relation: Relation = [Pair::new(1, 2), Pair::reflexive(3), Pair::new(-1, 4)]
            .into_iter()
            .collect();
        let clauses = to_clauses(&relation);

        assert_eq!(clauses.len(), 3);
        assert!(clauses.contains(&Clause::unit(Literal::from_element(3))));
        assert!(clauses.contains(&Clause::binary(
            Literal::from_element(4),
            Literal::from_element(-1)
        )));
    }

    #[test]
    fn repeatable() {
        let relation: Relation = [Pair::new(5, 6), Pair::reflexive(5)].into_iter().collect();
        assert_eq!(to_clauses(&relation), to_clauses(&relation));
    }
}

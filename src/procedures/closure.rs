//! The reflexive-transitive closure of a relation.
//!
//! # Overview
//!
//! The closure is computed with Warshall's algorithm on a [matrix](crate::structures::matrix::ClosureMatrix) indexed by the elements of the relation:
//!
//! - The matrix *A* marks each pair of the relation, with a reflexive singleton (*x*) marking the cell (*x*,*x*).
//! - The matrix *R* is a copy of *A* with every cell on the diagonal marked.
//! - For each index *k*, in ascending order, and each pair of indicies *i* and *j*, also in ascending order, the cell (*i*,*j*) of *R* is marked if both (*i*,*k*) and (*k*,*j*) are marked.
//!
//! *R* is updated in place, so marks made when considering *k* are visible to every later step.
//!
//! The closure is then the relation of ordered pairs marked by *R*, which is:
//! - Reflexive, on every element of the relation.
//! - Transitive.
//! - The smallest such relation containing the (reflexive closure of the) relation.
//!
//! ```rust
//! # use relsat::procedures::closure::closure;
//! # use relsat::structures::{pair::Pair, relation::Relation};
//! let relation: Relation = [Pair::new(1, 2), Pair::new(2, 3)].into_iter().collect();
//! let closed = closure(&relation);
//!
//! assert!(closed.contains(&Pair::new(1, 3)));
//! assert!(closed.contains(&Pair::new(2, 2)));
//! assert!(!closed.contains(&Pair::new(3, 1)));
//! ```
//!
//! # Observing
//!
//! Progress through the algorithm may be observed by a callback, called after each *k* with a [WarshallStep].
//! By default, nothing observes a closure.

use crate::{
    misc::log::targets::{self},
    structures::{matrix::ClosureMatrix, pair::Element, relation::Relation},
};

/// A cell marked during a step of Warshall's algorithm, by way of `from → via → to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Addition {
    pub from: Element,
    pub via: Element,
    pub to: Element,
}

impl std::fmt::Display for Addition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} → {} → {}", self.from, self.via, self.to)
    }
}

/// The record of a step of Warshall's algorithm, given after all cells for the step have been marked.
#[derive(Debug)]
pub struct WarshallStep<'m> {
    /// The index of the intermediate element.
    pub k: usize,

    /// The intermediate element.
    pub element: Element,

    /// The cells marked during the step, in the order marked.
    pub additions: Vec<Addition>,

    /// The matrix, after the step.
    pub matrix: &'m ClosureMatrix,
}

/// The type of callbacks which observe a closure.
pub type CallbackWarshall = dyn FnMut(&WarshallStep);

/// Closes the matrix under transitivity, in place, with each step passed to the observer.
pub fn warshall(matrix: &mut ClosureMatrix, observer: &mut dyn FnMut(&WarshallStep)) {
    let size = matrix.size();

    for k in 0..size {
        let element = matrix.element(k);
        let mut additions = Vec::new();

        for i in 0..size {
            for j in 0..size {
                if matrix.get(i, k) && matrix.get(k, j) && matrix.set(i, j) {
                    let addition = Addition {
                        from: matrix.element(i),
                        via: element,
                        to: matrix.element(j),
                    };
                    log::trace!(target: targets::CLOSURE, "+R[{i}][{j}] ({addition})");
                    additions.push(addition);
                }
            }
        }

        log::debug!(target: targets::CLOSURE, "Iteration k = {k} (element {element}): {} additions", additions.len());

        observer(&WarshallStep {
            k,
            element,
            additions,
            matrix: &*matrix,
        });
    }
}

/// The initial matrix of the relation and its reflexive-transitive closure, with each step of closing passed to the observer.
///
/// For an empty relation there is nothing to close and None is returned without calling the observer.
pub fn closure_matrices_observed(
    relation: &Relation,
    observer: &mut dyn FnMut(&WarshallStep),
) -> Option<(ClosureMatrix, ClosureMatrix)> {
    if relation.is_empty() {
        log::info!(target: targets::CLOSURE, "Empty relation");
        return None;
    }

    let initial = ClosureMatrix::from_relation(relation);

    let mut closed = initial.clone();
    closed.set_diagonal();
    warshall(&mut closed, observer);

    log::info!(target: targets::CLOSURE, "Closure over {} elements", closed.size());
    Some((initial, closed))
}

/// The initial matrix of the relation and its reflexive-transitive closure, if the relation is not empty.
pub fn closure_matrices(relation: &Relation) -> Option<(ClosureMatrix, ClosureMatrix)> {
    closure_matrices_observed(relation, &mut |_| {})
}

/// The reflexive-transitive closure of a relation.
pub fn closure(relation: &Relation) -> Relation {
    match closure_matrices(relation) {
        Some((_, closed)) => closed.to_relation(),
        None => Relation::new(),
    }
}

/// The reflexive-transitive closure of a relation, with each step of closing passed to the observer.
pub fn closure_observed(relation: &Relation, observer: &mut dyn FnMut(&WarshallStep)) -> Relation {
    match closure_matrices_observed(relation, observer) {
        Some((_, closed)) => closed.to_relation(),
        None => Relation::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::pair::Pair;

    fn relation_of(pairs: &[Pair]) -> Relation {
        pairs.iter().copied().collect()
    }

    #[test]
    fn single_pair() {
        let closed = closure(&relation_of(&[Pair::new(1, 2)]));
        let expected = relation_of(&[Pair::new(1, 1), Pair::new(1, 2), Pair::new(2, 2)]);
        assert_eq!(closed, expected);
    }

    #[test]
    fn empty_is_silent() {
        let mut calls = 0;
        let closed = closure_observed(&Relation::new(), &mut |_: &WarshallStep| calls += 1);
        assert!(closed.is_empty());
        assert_eq!(calls, 0);
    }

    #[test]
    fn reflexive_singleton_only() {
        let closed = closure(&relation_of(&[Pair::reflexive(7)]));
        assert_eq!(closed, relation_of(&[Pair::new(7, 7)]));
    }

    #[test]
    fn cycle_is_complete() {
        let closed = closure(&relation_of(&[
            Pair::new(1, 2),
            Pair::new(2, 3),
            Pair::new(3, 1),
        ]));
        assert_eq!(closed.len(), 9);
    }

    #[test]
    fn steps_in_order() {
        let relation = relation_of(&[Pair::new(3, 2), Pair::new(2, 1)]);
        let mut steps = vec![];
        closure_observed(&relation, &mut |step: &WarshallStep| {
            steps.push((step.k, step.element, step.additions.clone()))
        });

        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0], (0, 1, vec![]));
        assert_eq!(
            steps[1],
            (
                1,
                2,
                vec![Addition {
                    from: 3,
                    via: 2,
                    to: 1
                }]
            )
        );
        assert_eq!(steps[2], (2, 3, vec![]));
    }

    #[test]
    fn matrices_keep_initial() {
        let relation = relation_of(&[Pair::new(1, 2), Pair::new(2, 3)]);
        let Some((initial, closed)) = closure_matrices(&relation) else {
            panic!("Missing matrices");
        };
        assert!(!initial.relates(1, 1));
        assert!(!initial.relates(1, 3));
        assert!(closed.relates(1, 1));
        assert!(closed.relates(1, 3));
    }
}

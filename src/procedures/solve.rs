//! Determines the satisfiability of a collection of clauses, by brute force.
//!
//! # Overview
//!
//! A solve proceeds in two phases.
//!
//! First, the *forced* assignment is read from the unit clauses: a positive literal forces its atom true and a negative literal forces its atom false.
//! If two unit clauses force some atom to different values the clauses are unsatisfiable, and nothing further is done.
//!
//! Second, the remaining *free* atoms are taken in ascending order and every valuation of the free atoms is tried in turn:
//! - For candidate *i*, from 0 to 2<sup>*m*</sup> − 1, bit *j* of *i* gives the value of free atom *j*.
//! - Each candidate is merged with the forced assignment, and is a witness if every clause evaluates true.
//!
//! The first witness found is returned.
//! If no candidate is a witness, the clauses are unsatisfiable.
//!
//! ```rust
//! # use relsat::config::Config;
//! # use relsat::procedures::solve::{is_satisfiable, Solution};
//! # use relsat::structures::{pair::Pair, relation::Relation};
//! # use relsat::structures::valuation::Assignment;
//! let relation: Relation = [Pair::new(1, 2)].into_iter().collect();
//! let solution = is_satisfiable(&relation, &Config::default()).unwrap();
//!
//! let expected = Assignment::from([(1, true), (2, false)]);
//! assert_eq!(solution, Solution::Satisfiable(expected));
//! ```
//!
//! # Limits
//!
//! The cost of a solve is exponential in the number of free atoms, and so the number of free atoms is bounded by [Config::enumeration_limit].
//! Regardless of configuration, the count of candidates must fit in a u64.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::{
    config::Config,
    misc::log::targets::{self},
    procedures::conversion::to_clauses,
    reports::Report,
    structures::{
        atom::Atom,
        clause::{Clause, ClauseSet},
        relation::Relation,
        valuation::{Assignment, Valuation},
    },
    types::err::SolveError,
};

/// Why a collection of clauses is unsatisfiable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Unsatisfiable {
    /// Unit clauses force the atom to be both true and false.
    UnitConflict(Atom),

    /// Every candidate valuation was tried, and each falsified some clause.
    Exhausted(u64),
}

impl std::fmt::Display for Unsatisfiable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnitConflict(atom) => write!(f, "unit clauses conflict on {atom}"),
            Self::Exhausted(count) => write!(f, "no witness among {count} candidates"),
        }
    }
}

/// The result of a solve.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Solution {
    /// The clauses are satisfiable, with the given assignment as a witness.
    Satisfiable(Assignment),

    /// The clauses are unsatisfiable, for the given reason.
    Unsatisfiable(Unsatisfiable),
}

impl Solution {
    pub fn report(&self) -> Report {
        match self {
            Self::Satisfiable(_) => Report::Satisfiable,
            Self::Unsatisfiable(_) => Report::Unsatisfiable,
        }
    }

    /// The witness to satisfiability, if the clauses are satisfiable.
    pub fn witness(&self) -> Option<&Assignment> {
        match self {
            Self::Satisfiable(assignment) => Some(assignment),
            Self::Unsatisfiable(_) => None,
        }
    }
}

/// The assignment forced by the unit clauses, or the first atom on which the unit clauses conflict.
pub fn forced_assignment(clauses: &ClauseSet) -> Result<Assignment, Atom> {
    let mut forced = Assignment::new();

    for clause in clauses.units() {
        let Clause::Unit(literal) = clause else {
            continue;
        };
        match forced.insert(literal.atom(), literal.polarity()) {
            Some(previous) if previous != literal.polarity() => {
                log::info!(target: targets::SOLVE, "Unit conflict on {}", literal.atom());
                return Err(literal.atom());
            }
            _ => {
                log::trace!(target: targets::SOLVE, "Forced {literal}");
            }
        }
    }

    Ok(forced)
}

/// The atoms of the clauses without a forced value, in ascending order.
pub fn free_atoms(clauses: &ClauseSet, forced: &Assignment) -> Vec<Atom> {
    clauses
        .atoms()
        .into_iter()
        .filter(|atom| !forced.contains_key(atom))
        .collect()
}

/// Whether every clause is true on the assignment.
///
/// A clause with some atom lacking a value is not true.
pub fn verify(clauses: &ClauseSet, assignment: &impl Valuation) -> bool {
    clauses
        .iter()
        .all(|clause| clause.evaluate(assignment) == Some(true))
}

/// Determines the satisfiability of the clauses.
pub fn solve_clauses(clauses: &ClauseSet, config: &Config) -> Result<Solution, SolveError> {
    let forced = match forced_assignment(clauses) {
        Ok(assignment) => assignment,
        Err(atom) => return Ok(Solution::Unsatisfiable(Unsatisfiable::UnitConflict(atom))),
    };

    let atoms: BTreeSet<Atom> = clauses.atoms();
    if atoms.is_empty() {
        log::info!(target: targets::SOLVE, "No atoms, trivially satisfiable");
        return Ok(Solution::Satisfiable(Assignment::new()));
    }

    let free = free_atoms(clauses, &forced);
    let limit = config.effective_enumeration_limit();
    if free.len() > limit {
        return Err(SolveError::EnumerationLimit {
            free: free.len(),
            limit,
        });
    }

    let candidates: u64 = 1 << free.len();
    log::info!(target: targets::SOLVE, "{} forced, {} free, {candidates} candidates", forced.len(), free.len());

    let mut assignment = forced;
    for candidate in 0..candidates {
        for (index, atom) in free.iter().enumerate() {
            assignment.insert(*atom, (candidate >> index) & 1 == 1);
        }

        if verify(clauses, &assignment) {
            log::info!(target: targets::SOLVE, "Witness at candidate {candidate}: {}", assignment.as_display_string());
            return Ok(Solution::Satisfiable(assignment));
        }
        log::trace!(target: targets::SOLVE, "Candidate {candidate} fails");
    }

    Ok(Solution::Unsatisfiable(Unsatisfiable::Exhausted(candidates)))
}

/// Determines the satisfiability of the formula of a relation.
pub fn is_satisfiable(relation: &Relation, config: &Config) -> Result<Solution, SolveError> {
    solve_clauses(&to_clauses(relation), config)
}

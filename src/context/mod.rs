/*!
The context, to which the elements and pairs of a relation are added and within which analysis takes place.

A context holds a universe of elements and a relation over the universe.
Elements and pairs are added through the [builder] methods, and every pair added to a context is checked against the universe.

# Example
```rust
# use relsat::config::Config;
# use relsat::context::Context;
# use relsat::reports::Report;
# use relsat::structures::pair::Pair;
let mut the_context = Context::from_config(Config::default());

for element in [1, 2, 3] {
    assert!(the_context.add_element(element));
}
assert!(the_context.add_pair(Pair::new(1, 2)).is_ok());
assert!(the_context.add_pair_string("2,3").is_ok());
assert!(the_context.add_pair_string("4,1").is_err());

let analysis = the_context.analyse().unwrap();
assert!(analysis.closure.contains(&Pair::new(1, 3)));
assert_eq!(analysis.report(), Report::Satisfiable);
```

After an analysis the context may be [cleared](Context::clear), for a fresh universe and relation.
*/

pub mod builder;
pub mod callbacks;

use std::collections::BTreeSet;

use crate::{
    config::Config,
    misc::log::targets::{self},
    procedures::{
        closure::{closure_matrices, closure_matrices_observed, CallbackWarshall},
        conversion::to_clauses,
        propagation::literal_closures,
        solve::solve_clauses,
    },
    reports::Analysis,
    structures::{pair::Element, relation::Relation},
    types::err::{BuildError, ErrorKind},
};

/// A context.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    universe: BTreeSet<Element>,

    relation: Relation,

    callback_warshall: Option<Box<CallbackWarshall>>,
}

impl Default for Context {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            universe: BTreeSet::new(),
            relation: Relation::new(),
            callback_warshall: None,
        }
    }

    /// The elements of the context, in ascending order.
    pub fn universe(&self) -> &BTreeSet<Element> {
        &self.universe
    }

    /// The relation of the context.
    pub fn relation(&self) -> &Relation {
        &self.relation
    }

    /// Analyses the relation of the context.
    ///
    /// The relation is closed, converted to a formula, and the formula is propagated and solved.
    pub fn analyse(&mut self) -> Result<Analysis, ErrorKind> {
        if self.universe.is_empty() {
            return Err(BuildError::EmptyUniverse.into());
        }

        log::info!(target: targets::CONTEXT, "Analysis of {} pairs over {} elements", self.relation.len(), self.universe.len());

        let matrices = match &mut self.callback_warshall {
            Some(callback) => closure_matrices_observed(&self.relation, callback.as_mut()),
            None => closure_matrices(&self.relation),
        };

        let (initial, closed) = match matrices {
            Some((initial, closed)) => (Some(initial), Some(closed)),
            None => (None, None),
        };

        let closure = match &closed {
            Some(matrix) => matrix.to_relation(),
            None => Relation::new(),
        };

        let clauses = to_clauses(&self.relation);
        let literal_closures = literal_closures(&clauses);
        let solution = solve_clauses(&clauses, &self.config)?;

        log::info!(target: targets::CONTEXT, "Analysis complete: {}", solution.report());

        Ok(Analysis {
            universe: self.universe.clone(),
            relation: self.relation.clone(),
            closure,
            clauses,
            literal_closures,
            solution,
            initial,
            closed,
        })
    }

    /// Removes all elements and pairs from the context.
    ///
    /// Configuration and callbacks are kept.
    pub fn clear(&mut self) {
        log::info!(target: targets::CONTEXT, "Cleared");
        self.universe.clear();
        self.relation.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        procedures::{
            closure::WarshallStep,
            solve::{Solution, Unsatisfiable},
        },
        reports::Report,
        structures::pair::Pair,
        types::err::SolveError,
    };

    #[test]
    fn empty_universe() {
        let mut the_context = Context::default();
        assert_eq!(
            the_context.analyse().err(),
            Some(ErrorKind::Build(BuildError::EmptyUniverse))
        );
    }

    #[test]
    fn empty_relation() {
        let mut the_context = Context::default();
        the_context.add_element(1);

        let Ok(analysis) = the_context.analyse() else {
            panic!("Analysis failed");
        };
        assert!(analysis.closure.is_empty());
        assert!(analysis.clauses.is_empty());
        assert!(analysis.initial.is_none());
        assert_eq!(analysis.report(), Report::Satisfiable);
    }

    #[test]
    fn unit_conflict() {
        let mut the_context = Context::default();
        for element in [-1, 1] {
            the_context.add_element(element);
        }
        assert!(the_context.add_pair(Pair::reflexive(1)).is_ok());
        assert!(the_context.add_pair(Pair::reflexive(-1)).is_ok());

        let Ok(analysis) = the_context.analyse() else {
            panic!("Analysis failed");
        };
        assert_eq!(
            analysis.solution,
            Solution::Unsatisfiable(Unsatisfiable::UnitConflict(1))
        );
    }

    #[test]
    fn limit_propagates() {
        let config = Config {
            enumeration_limit: Some(1),
            ..Default::default()
        };
        let mut the_context = Context::from_config(config);
        for element in [1, 2] {
            the_context.add_element(element);
        }
        assert!(the_context.add_pair(Pair::new(1, 2)).is_ok());

        assert_eq!(
            the_context.analyse().err(),
            Some(ErrorKind::Solve(SolveError::EnumerationLimit {
                free: 2,
                limit: 1
            }))
        );
    }

    #[test]
    fn observed_steps() {
        let mut the_context = Context::default();
        for element in [1, 2, 3] {
            the_context.add_element(element);
        }
        assert!(the_context.add_pair(Pair::new(1, 2)).is_ok());
        assert!(the_context.add_pair(Pair::new(2, 3)).is_ok());

        let steps = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let recorded = steps.clone();
        the_context.set_callback_warshall(Box::new(move |step: &WarshallStep| {
            recorded.borrow_mut().push(step.additions.len())
        }));

        assert!(the_context.analyse().is_ok());
        assert_eq!(*steps.borrow(), vec![0, 1, 0]);
    }

    #[test]
    fn clear() {
        let mut the_context = Context::default();
        the_context.add_element(1);
        assert!(the_context.add_pair(Pair::reflexive(1)).is_ok());

        the_context.clear();
        assert!(the_context.universe().is_empty());
        assert!(the_context.relation().is_empty());
    }
}

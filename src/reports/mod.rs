/*!
Reports for the context.

A [Report] is the verdict of an analysis, and an [Analysis] is everything derived from a relation by a context.

An analysis may be written as JSON, with literals, pairs, and clauses written as their string forms, and each matrix written as its elements and rows.

```rust
# use relsat::context::Context;
# use relsat::reports::Report;
let mut the_context = Context::default();
for element in [1, 2] {
    the_context.add_element(element);
}
assert!(the_context.add_pair_string("1,2").is_ok());

let analysis = the_context.analyse().unwrap();
assert_eq!(analysis.report(), Report::Satisfiable);

let json = analysis.to_json().unwrap();
assert!(json.contains("\"(1 ∨ 2)\""));
```
*/

use std::collections::BTreeSet;

use serde::Serialize;

use crate::{
    procedures::{propagation::LiteralClosure, solve::Solution},
    structures::{
        clause::ClauseSet, implication_graph::ImplicationGraph, matrix::ClosureMatrix,
        pair::Element, relation::Relation,
    },
};

/// High-level reports regarding an analysis.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize)]
pub enum Report {
    /// The formula of the relation is satisfiable.
    Satisfiable,

    /// The formula of the relation is unsatisfiable.
    Unsatisfiable,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "SATISFIABLE"),
            Self::Unsatisfiable => write!(f, "UNSATISFIABLE"),
        }
    }
}

/// Everything derived from a relation during an analysis.
#[derive(Clone, Debug, Serialize)]
pub struct Analysis {
    /// The elements the relation is over.
    pub universe: BTreeSet<Element>,

    /// The relation, as given.
    pub relation: Relation,

    /// The reflexive-transitive closure of the relation.
    pub closure: Relation,

    /// The formula of the relation.
    pub clauses: ClauseSet,

    /// The closure of each literal of the formula, and its complement.
    pub literal_closures: Vec<LiteralClosure>,

    pub solution: Solution,

    /// The matrix of the relation, if the relation is not empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial: Option<ClosureMatrix>,

    /// The matrix of the closure, if the relation is not empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed: Option<ClosureMatrix>,
}

impl Analysis {
    pub fn report(&self) -> Report {
        self.solution.report()
    }

    /// The implication graph of the formula.
    pub fn implication_graph(&self) -> ImplicationGraph {
        ImplicationGraph::from_clauses(&self.clauses)
    }

    /// Each literal closure which contains some literal and its negation.
    pub fn inconsistent_closures(&self) -> impl Iterator<Item = &LiteralClosure> {
        self.literal_closures
            .iter()
            .filter(|closure| !closure.is_consistent())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

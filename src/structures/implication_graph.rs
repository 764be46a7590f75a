/*!
The implication graph of a collection of clauses.

Each binary clause (*a* ∨ *b*) contributes the edges ¬*a* → *b* and ¬*b* → *a*, labelled by the clause.
Unit clauses contribute nothing.

The graph is for consumers which display or inspect implications, e.g. as [Graphviz DOT](ImplicationGraph::as_dot).

```rust
# use relsat::structures::clause::{Clause, ClauseSet};
# use relsat::structures::implication_graph::ImplicationGraph;
# use relsat::structures::literal::Literal;
let p = Literal::from_element(1);
let q = Literal::from_element(2);
let clauses: ClauseSet = [Clause::binary(p, q), Clause::unit(p)].into_iter().collect();

let graph = ImplicationGraph::from_clauses(&clauses);
assert_eq!(graph.node_count(), 4);
assert_eq!(graph.edges(), vec![(-p, q), (-q, p)]);
```
*/

use std::collections::BTreeMap;

use petgraph::{
    dot::Dot,
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
    Direction,
};

use crate::{
    misc::log::targets::{self},
    structures::{
        clause::{Clause, ClauseSet},
        literal::Literal,
    },
};

#[derive(Clone, Debug, Default)]
pub struct ImplicationGraph {
    /// The node of each literal in the graph.
    literal_indicies: BTreeMap<Literal, NodeIndex>,

    graph: DiGraph<Literal, Clause>,
}

impl ImplicationGraph {
    pub fn from_clauses(clauses: &ClauseSet) -> Self {
        let mut the_graph = ImplicationGraph::default();
        for clause in clauses.binaries() {
            for (antecedent, consequent) in clause.implications() {
                the_graph.add_implication(antecedent, consequent, *clause);
            }
        }
        log::debug!(target: targets::GRAPH, "Implication graph with {} nodes and {} edges", the_graph.node_count(), the_graph.edge_count());
        the_graph
    }

    fn get_or_make_literal(&mut self, literal: Literal) -> NodeIndex {
        match self.literal_indicies.get(&literal) {
            Some(index) => *index,
            None => {
                let index = self.graph.add_node(literal);
                self.literal_indicies.insert(literal, index);
                index
            }
        }
    }

    /// Adds the edge `from → to`, labelled by the clause.
    /// An existing edge between the literals is relabelled rather than duplicated.
    pub fn add_implication(&mut self, from: Literal, to: Literal, clause: Clause) {
        let from_index = self.get_or_make_literal(from);
        let to_index = self.get_or_make_literal(to);
        let edge_index = self.graph.update_edge(from_index, to_index, clause);
        log::trace!(target: targets::GRAPH, "+Implication {from} --[{}]-> {to} from {clause}", edge_index.index());
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// The literals of the graph, in ascending order.
    pub fn literals(&self) -> impl Iterator<Item = Literal> + '_ {
        self.literal_indicies.keys().copied()
    }

    /// Every edge of the graph as an (antecedent, consequent) pair, in ascending order.
    pub fn edges(&self) -> Vec<(Literal, Literal)> {
        let mut edges = self
            .graph
            .edge_references()
            .map(|edge| (self.graph[edge.source()], self.graph[edge.target()]))
            .collect::<Vec<_>>();
        edges.sort_unstable();
        edges
    }

    /// The literals directly implied by the given literal, in ascending order.
    pub fn successors(&self, literal: Literal) -> Vec<Literal> {
        let Some(index) = self.literal_indicies.get(&literal) else {
            return vec![];
        };
        let mut successors = self
            .graph
            .neighbors_directed(*index, Direction::Outgoing)
            .map(|successor| self.graph[successor])
            .collect::<Vec<_>>();
        successors.sort_unstable();
        successors
    }

    /// The underlying graph, with literals as nodes and edges labelled by clauses.
    pub fn graph(&self) -> &DiGraph<Literal, Clause> {
        &self.graph
    }

    /// A textual summary, with one line `l → {m, …}` for each literal with some successor.
    pub fn summary(&self) -> String {
        let mut the_string = String::new();
        for literal in self.literals() {
            let successors = self.successors(literal);
            if successors.is_empty() {
                continue;
            }
            let successors = successors
                .iter()
                .map(|successor| successor.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            the_string.push_str(&format!("{literal} → {{{successors}}}\n"));
        }
        the_string
    }

    /// The graph in Graphviz DOT form, with edges labelled by clauses.
    pub fn as_dot(&self) -> String {
        format!("{}", Dot::new(&self.graph))
    }
}

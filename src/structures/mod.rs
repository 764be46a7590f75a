//! Key structures, such as pairs, relations, literals and clauses.
//!
//! # Relations
//!
//! A relation is a set of [pairs](pair) over some finite universe of integers, extended with a shorthand (*x*) for the reflexive pair (*x*,*x*).
//! The closure of a relation is computed on a [matrix](matrix) indexed by the elements of the relation.
//!
//! # Formulas
//!
//! A relation may also be read as a formula, a set of [clauses](clause) interpreted as the conjunction of those clauses.
//! Each clause is a disjunction of at most two [literals](literal), and each literal is an [atom](atom) paired with a polarity.
//!
//! The implications of a formula are collected in an [implication graph](implication_graph), and a [valuation] is a (partial) map from atoms to truth values.

pub mod atom;
pub mod clause;
pub mod implication_graph;
pub mod literal;
pub mod matrix;
pub mod pair;
pub mod relation;
pub mod valuation;

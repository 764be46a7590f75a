//! Procedures applied to a relation, and to the formula of a relation.
//!
//! For the most part these are called through a [context](crate::context), in the order:
//! - [closure], for the reflexive-transitive closure of the relation.
//! - [conversion], for the formula of the relation.
//! - [propagation], for the literals forced by each literal of the formula.
//! - [solve], for the satisfiability of the formula.

pub mod closure;
pub mod conversion;
pub mod propagation;
pub mod solve;

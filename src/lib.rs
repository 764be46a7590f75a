//! A library for closing finite relations, and for determining the satisfiability of relations read as formulas.
//!
//! relsat takes a finite set of integers and a relation over the set, and:
//! - Computes the reflexive-transitive closure of the relation with Warshall's algorithm.
//! - Reads the relation as a formula in 2-CNF, with each pair (*x*,*y*) the clause (*x* ∨ *y*) and each reflexive singleton (*x*) the unit clause (*x*).
//! - For each literal of the formula, finds the literals forced by unit resolution, and notes any inconsistency.
//! - Decides the satisfiability of the formula, with a witness if satisfiable.
//!
//! Integers double as literals, with a negative integer the negation of its absolute value.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a [configuration](crate::config), and elements and pairs are added to a context through its [builder](crate::context::builder) methods.
//! An [analysis](crate::reports::Analysis) of a context collects everything derived from the relation of the context.
//!
//! Useful starting points, then, may be:
//! - The [procedures] to inspect how each part of an analysis is derived.
//! - The [structures] to familiarise yourself with relations, literals, clauses, and their representation.
//!
//! # Examples
//!
//! + Close a relation, and solve its formula.
//!
//! ```rust
//! # use relsat::config::Config;
//! # use relsat::context::Context;
//! # use relsat::reports::Report;
//! # use relsat::structures::pair::Pair;
//! # use relsat::structures::valuation::Valuation;
//! let mut the_context = Context::from_config(Config::default());
//!
//! for element in [1, 2, 3] {
//!     the_context.add_element(element);
//! }
//! for pair in ["1,2", "2,3", "3"] {
//!     assert!(the_context.add_pair_string(pair).is_ok());
//! }
//!
//! let analysis = the_context.analyse().unwrap();
//!
//! assert!(analysis.closure.contains(&Pair::new(1, 3)));
//! assert!(!analysis.closure.contains(&Pair::new(3, 1)));
//!
//! assert_eq!(analysis.report(), Report::Satisfiable);
//! let witness = analysis.solution.witness().unwrap();
//! assert_eq!(witness.as_display_string(), "1 -2 3");
//! ```
//!
//! + Find the literals which cannot be true.
//!
//! ```rust
//! # use relsat::procedures::{conversion::to_clauses, propagation::literal_closures};
//! # use relsat::structures::{pair::Pair, relation::Relation};
//! let relation: Relation = [Pair::new(1, 2), Pair::new(1, -2)].into_iter().collect();
//! let clauses = to_clauses(&relation);
//!
//! let inconsistent = literal_closures(&clauses)
//!     .into_iter()
//!     .filter(|closure| !closure.is_consistent())
//!     .map(|closure| closure.literal.to_string())
//!     .collect::<Vec<_>>();
//!
//! assert_eq!(inconsistent, vec!["-1"]);
//! ```
//!
//! # Logs
//!
//! Logs are made through the [log] facade, with [targets](crate::misc::log::targets) for each stage of an analysis.

pub mod config;
pub mod context;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;

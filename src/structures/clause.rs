/*!
Clauses, interpreted as the disjunction of (at most two) literals.

A clause is either:
- A unit clause (*l*), which asserts the literal *l*.
- A binary clause (*a* ∨ *b*), which may equivalently be read as the implications ¬*a* → *b* and ¬*b* → *a*.

Binary clauses are unordered, so (*a* ∨ *b*) and (*b* ∨ *a*) are the same clause, though each displays in the order given.

```rust
# use relsat::structures::clause::Clause;
# use relsat::structures::literal::Literal;
let p = Literal::from_element(1);
let q = Literal::from_element(2);

assert_eq!(Clause::binary(p, q), Clause::binary(q, p));
assert_ne!(Clause::unit(p), Clause::binary(p, p));
assert_eq!(Clause::binary(q, p).to_string(), "(2 ∨ 1)");
```

Clauses are derived from the pairs of a relation, one clause for each pair:
- The reflexive singleton (*x*) gives the unit clause (*x*).
- The ordered pair (*x*,*y*) gives the binary clause (*x* ∨ *y*).
*/

use std::collections::BTreeSet;

use serde::{Serialize, Serializer};

use crate::structures::{
    atom::Atom,
    literal::Literal,
    pair::Pair,
    valuation::Valuation,
};

#[derive(Clone, Copy, Debug)]
pub enum Clause {
    Unit(Literal),
    Binary(Literal, Literal),
}

impl Clause {
    pub fn unit(literal: Literal) -> Self {
        Clause::Unit(literal)
    }

    pub fn binary(a: Literal, b: Literal) -> Self {
        Clause::Binary(a, b)
    }

    /// The clause read off a pair of a relation.
    pub fn from_pair(pair: &Pair) -> Self {
        let x = Literal::from_element(pair.x());
        match pair.y() {
            None => Clause::Unit(x),
            Some(y) => Clause::Binary(x, Literal::from_element(y)),
        }
    }

    pub fn is_unit(&self) -> bool {
        matches!(self, Clause::Unit(_))
    }

    /// The literals of the clause, in the order given.
    pub fn literals(&self) -> impl Iterator<Item = Literal> {
        let (first, second) = match *self {
            Clause::Unit(literal) => (literal, None),
            Clause::Binary(a, b) => (a, Some(b)),
        };
        std::iter::once(first).chain(second)
    }

    pub fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.literals().map(|literal| literal.atom())
    }

    /// The value of the clause on a valuation.
    ///
    /// True if some literal is true, false if every literal is false, and otherwise None.
    pub fn evaluate(&self, valuation: &impl Valuation) -> Option<bool> {
        let mut value = Some(false);
        for literal in self.literals() {
            match valuation.value_of_literal(literal) {
                Some(true) => return Some(true),
                Some(false) => {}
                None => value = None,
            }
        }
        value
    }

    /// The implications of the clause, as (antecedent, consequent) pairs.
    ///
    /// Unit clauses have no implications.
    pub fn implications(&self) -> Vec<(Literal, Literal)> {
        match *self {
            Clause::Unit(_) => vec![],
            Clause::Binary(a, b) => vec![(a.negate(), b), (b.negate(), a)],
        }
    }

    /// The literals of the clause with binary clauses in ascending literal order.
    fn canonical(&self) -> (Literal, Option<Literal>) {
        match *self {
            Clause::Unit(literal) => (literal, None),
            Clause::Binary(a, b) if b < a => (b, Some(a)),
            Clause::Binary(a, b) => (a, Some(b)),
        }
    }
}

impl PartialEq for Clause {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Clause::Unit(a), Clause::Unit(b)) => a == b,
            (Clause::Binary(a, b), Clause::Binary(c, d)) => (a == c && b == d) || (a == d && b == c),
            _ => false,
        }
    }
}

impl Eq for Clause {}

impl std::hash::Hash for Clause {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.canonical().hash(state)
    }
}

impl PartialOrd for Clause {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// Consistent with equality, as equal clauses have the same canonical form.
impl Ord for Clause {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.canonical().cmp(&other.canonical())
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Clause::Unit(literal) => write!(f, "({literal})"),
            Clause::Binary(a, b) => write!(f, "({a} ∨ {b})"),
        }
    }
}

impl Serialize for Clause {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A set of clauses, interpreted as their conjunction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClauseSet {
    clauses: BTreeSet<Clause>,
}

impl ClauseSet {
    pub fn new() -> Self {
        ClauseSet::default()
    }

    /// Adds a clause, returning whether the clause was fresh.
    pub fn insert(&mut self, clause: Clause) -> bool {
        self.clauses.insert(clause)
    }

    pub fn contains(&self, clause: &Clause) -> bool {
        self.clauses.contains(clause)
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    pub fn units(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter().filter(|clause| clause.is_unit())
    }

    pub fn binaries(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter().filter(|clause| !clause.is_unit())
    }

    /// Every atom of some clause, in ascending order.
    pub fn atoms(&self) -> BTreeSet<Atom> {
        self.clauses.iter().flat_map(|clause| clause.atoms()).collect()
    }
}

impl FromIterator<Clause> for ClauseSet {
    fn from_iter<I: IntoIterator<Item = Clause>>(iter: I) -> Self {
        ClauseSet {
            clauses: iter.into_iter().collect(),
        }
    }
}

impl<'c> IntoIterator for &'c ClauseSet {
    type Item = &'c Clause;
    type IntoIter = std::collections::btree_set::Iter<'c, Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.iter()
    }
}

impl std::fmt::Display for ClauseSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let clauses = self
            .clauses
            .iter()
            .map(|clause| clause.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{{{clauses}}}")
    }
}

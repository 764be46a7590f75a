/*!
A relation, as a set of [pairs](crate::structures::pair) over some finite universe.

Relations iterate in ascending pair order, and contain no duplicate pairs.

```rust
# use relsat::structures::{pair::Pair, relation::Relation};
let relation: Relation = [Pair::new(2, 3), Pair::new(1, 2), Pair::new(1, 2)].into_iter().collect();

assert_eq!(relation.len(), 2);
assert_eq!(relation.to_string(), "{(1,2), (2,3)}");
assert!(relation.relates(1, 2));
assert!(!relation.relates(2, 1));
```
*/

use std::collections::BTreeSet;

use serde::Serialize;

use crate::structures::pair::{Element, Pair};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Relation {
    pairs: BTreeSet<Pair>,
}

impl Relation {
    pub fn new() -> Self {
        Relation::default()
    }

    /// Adds a pair to the relation, returning whether the pair was fresh.
    pub fn insert(&mut self, pair: Pair) -> bool {
        self.pairs.insert(pair)
    }

    pub fn contains(&self, pair: &Pair) -> bool {
        self.pairs.contains(pair)
    }

    /// Whether *x* is related to *y*, through either an ordered pair or (if *x* is *y*) a reflexive singleton.
    pub fn relates(&self, x: Element, y: Element) -> bool {
        self.pairs.contains(&Pair::new(x, y)) || (x == y && self.pairs.contains(&Pair::reflexive(x)))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn clear(&mut self) {
        self.pairs.clear()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pair> {
        self.pairs.iter()
    }

    /// The elements which appear in some pair of the relation, in ascending order.
    pub fn elements(&self) -> BTreeSet<Element> {
        self.pairs.iter().flat_map(|pair| pair.elements()).collect()
    }

    /// Whether every pair of the relation is also in the other relation.
    pub fn is_subset(&self, other: &Relation) -> bool {
        self.pairs.is_subset(&other.pairs)
    }
}

impl FromIterator<Pair> for Relation {
    fn from_iter<I: IntoIterator<Item = Pair>>(iter: I) -> Self {
        Relation {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl Extend<Pair> for Relation {
    fn extend<I: IntoIterator<Item = Pair>>(&mut self, iter: I) {
        self.pairs.extend(iter)
    }
}

impl<'r> IntoIterator for &'r Relation {
    type Item = &'r Pair;
    type IntoIter = std::collections::btree_set::Iter<'r, Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (index, pair) in self.pairs.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{pair}")?;
        }
        write!(f, "}}")
    }
}

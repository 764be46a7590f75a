/*!
Pairs of elements, the members of a [relation](crate::structures::relation).

A pair is either:
- An ordered pair (*x*,*y*).
- A reflexive singleton (*x*), shorthand for (*x*,*x*).

Pairs are order sensitive, so (1,2) and (2,1) are distinct, and the singleton (1) is distinct from the ordered pair (1,1).

```rust
# use relsat::structures::pair::Pair;
assert_ne!(Pair::new(1, 2), Pair::new(2, 1));
assert_ne!(Pair::reflexive(1), Pair::new(1, 1));
assert_eq!(Pair::reflexive(1).to_string(), "(1)");
```

That every element of a pair belongs to some universe is not a property of the pair, and is instead checked by a [context](crate::context).
*/

use serde::{Serialize, Serializer};

/// An element of a universe.
pub type Element = i64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair {
    x: Element,
    y: Option<Element>,
}

impl Pair {
    /// The ordered pair (*x*,*y*).
    pub fn new(x: Element, y: Element) -> Self {
        Pair { x, y: Some(y) }
    }

    /// The reflexive singleton (*x*).
    pub fn reflexive(x: Element) -> Self {
        Pair { x, y: None }
    }

    pub fn x(&self) -> Element {
        self.x
    }

    /// The second element, if the pair is not a reflexive singleton.
    pub fn y(&self) -> Option<Element> {
        self.y
    }

    pub fn is_reflexive(&self) -> bool {
        self.y.is_none()
    }

    /// The element related to by *x*, which is *x* itself for a reflexive singleton.
    pub fn target(&self) -> Element {
        self.y.unwrap_or(self.x)
    }

    /// The elements of the pair, without repetition for a singleton.
    pub fn elements(&self) -> impl Iterator<Item = Element> {
        std::iter::once(self.x).chain(self.y)
    }
}

impl std::fmt::Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.y {
            None => write!(f, "({})", self.x),
            Some(y) => write!(f, "({},{})", self.x, y),
        }
    }
}

impl Serialize for Pair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn hash_respects_order() {
        let mut pairs = HashSet::new();
        assert!(pairs.insert(Pair::new(1, 2)));
        assert!(pairs.insert(Pair::new(2, 1)));
        assert!(!pairs.insert(Pair::new(1, 2)));
        assert!(pairs.insert(Pair::reflexive(1)));
        assert!(!pairs.insert(Pair::reflexive(1)));
        assert_eq!(pairs.len(), 3);
    }

    #[test]
    fn elements_and_target() {
        assert_eq!(Pair::new(3, -4).elements().collect::<Vec<_>>(), vec![3, -4]);
        assert_eq!(Pair::reflexive(3).elements().collect::<Vec<_>>(), vec![3]);
        assert_eq!(Pair::reflexive(3).target(), 3);
        assert_eq!(Pair::new(3, -4).to_string(), "(3,-4)");
    }
}

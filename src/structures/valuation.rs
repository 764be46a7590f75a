/*!
A (partial) function from atoms to truth values.

The canonical representation of a valuation is an [Assignment], a map from atoms to booleans ordered by atom.
An assignment is built up during a single attempt at satisfying a collection of clauses, and is the witness returned when such an attempt succeeds.

```rust
# use relsat::structures::literal::Literal;
# use relsat::structures::valuation::{Assignment, Valuation};
let mut assignment = Assignment::new();
assignment.insert(1, true);
assignment.insert(2, false);

assert_eq!(assignment.value_of_literal(Literal::from_element(-2)), Some(true));
assert_eq!(assignment.value_of(3), None);
assert_eq!(assignment.as_display_string(), "1 -2");
```
*/

use std::collections::BTreeMap;

use crate::structures::{atom::Atom, literal::Literal};

/// The canonical representation of a valuation.
pub type Assignment = BTreeMap<Atom, bool>;

/// Something which may store a value for an atom.
pub trait Valuation {
    /// The value of an atom under the valuation, if the atom has a value.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// An iterator through all valued atoms, paired with their value, in ascending atom order.
    fn atom_value_pairs(&self) -> impl Iterator<Item = (Atom, bool)>;

    /// The value of a literal under the valuation, if the atom of the literal has a value.
    fn value_of_literal(&self, literal: Literal) -> Option<bool> {
        self.value_of(literal.atom())
            .map(|value| literal.is_true_on(value))
    }

    /// The valuation as a string of the literals it makes true.
    fn as_display_string(&self) -> String {
        self.atom_value_pairs()
            .map(|(atom, value)| Literal::new(atom, value).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Valuation for Assignment {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.get(&atom).copied()
    }

    fn atom_value_pairs(&self) -> impl Iterator<Item = (Atom, bool)> {
        self.iter().map(|(atom, value)| (*atom, *value))
    }
}

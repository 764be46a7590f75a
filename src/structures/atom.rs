/*!
(The representation of) an atom, aka. a 'variable'.

Atoms are read off the elements of a universe.
The atom of an element is the magnitude of the element, so both `3` and `-3` have atom `3`, and the sign of an element is instead recorded as the [polarity](crate::structures::literal::Literal::polarity) of a literal.

```rust
# use relsat::structures::atom::Atom;
# use relsat::structures::literal::Literal;
let literal = Literal::from_element(-3);
assert_eq!(literal.atom(), 3 as Atom);
assert!(!literal.polarity());
```
*/

/// An atom, as the unsigned magnitude of an element.
pub type Atom = u64;

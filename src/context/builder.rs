/*!
Methods for building the universe and relation of a context.

Elements are integers, and pairs are written either `x,y` for an ordered pair or `x` for a reflexive singleton, with whitespace around either part ignored.

```rust
# use relsat::context::Context;
# use relsat::structures::pair::Pair;
# use relsat::types::err::{BuildError, ErrorKind, ParseError};
let mut the_context = Context::default();

assert_eq!(the_context.element_from_string(" -4 "), Ok(-4));
assert_eq!(the_context.pair_from_string("1, 2"), Ok(Pair::new(1, 2)));
assert_eq!(the_context.pair_from_string("3"), Ok(Pair::reflexive(3)));
assert_eq!(
    the_context.pair_from_string("1,2,3"),
    Err(ParseError::PairFormat("1,2,3".to_string()))
);

assert!(the_context.add_element(1));
assert_eq!(
    the_context.add_pair_string("1,2"),
    Err(ErrorKind::Build(BuildError::UnknownElement(2)))
);
```
*/

use crate::{
    misc::log::targets::{self},
    structures::pair::{Element, Pair},
    types::err::{BuildError, ErrorKind, ParseError},
};

use super::Context;

impl Context {
    /// An element, from a string.
    pub fn element_from_string(&self, string: &str) -> Result<Element, ParseError> {
        let trimmed_string = string.trim();
        if trimmed_string.is_empty() {
            return Err(ParseError::Empty);
        }

        match trimmed_string.parse::<Element>() {
            Ok(element) => Ok(element),
            Err(_) => Err(ParseError::Element(trimmed_string.to_string())),
        }
    }

    /// Adds an element to the universe, returning false if the element was already present.
    pub fn add_element(&mut self, element: Element) -> bool {
        let fresh = self.universe.insert(element);
        if fresh {
            log::trace!(target: targets::CONTEXT, "Added element {element}");
        } else {
            log::trace!(target: targets::CONTEXT, "Element {element} already present");
        }
        fresh
    }

    /// A pair, from a string of the form `x,y` or `x`.
    ///
    /// The elements of the pair need not be in the universe.
    pub fn pair_from_string(&self, string: &str) -> Result<Pair, ParseError> {
        let trimmed_string = string.trim();
        if trimmed_string.is_empty() {
            return Err(ParseError::Empty);
        }

        let parts = trimmed_string.split(',').collect::<Vec<_>>();
        match parts.as_slice() {
            [x] => Ok(Pair::reflexive(self.element_from_string(x)?)),
            [x, y] => Ok(Pair::new(
                self.element_from_string(x)?,
                self.element_from_string(y)?,
            )),
            _ => Err(ParseError::PairFormat(trimmed_string.to_string())),
        }
    }

    /// Adds a pair to the relation, returning false if the pair was already present.
    ///
    /// Each element of the pair must be in the universe.
    pub fn add_pair(&mut self, pair: Pair) -> Result<bool, BuildError> {
        if let Some(unknown) = pair.elements().find(|e| !self.universe.contains(e)) {
            log::trace!(target: targets::CONTEXT, "Rejected {pair}: {unknown} is unknown");
            return Err(BuildError::UnknownElement(unknown));
        }

        let fresh = self.relation.insert(pair);
        if fresh {
            log::trace!(target: targets::CONTEXT, "Added pair {pair}");
        } else {
            log::trace!(target: targets::CONTEXT, "Pair {pair} already present");
        }
        Ok(fresh)
    }

    /// Adds a pair, from a string, to the relation.
    pub fn add_pair_string(&mut self, string: &str) -> Result<bool, ErrorKind> {
        let pair = self.pair_from_string(string)?;
        Ok(self.add_pair(pair)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_errors() {
        let the_context = Context::default();
        assert_eq!(the_context.element_from_string("  "), Err(ParseError::Empty));
        assert_eq!(
            the_context.element_from_string("two"),
            Err(ParseError::Element("two".to_string()))
        );
    }

    #[test]
    fn duplicate_element() {
        let mut the_context = Context::default();
        assert!(the_context.add_element(5));
        assert!(!the_context.add_element(5));
        assert_eq!(the_context.universe().len(), 1);
    }

    #[test]
    fn pair_errors() {
        let the_context = Context::default();
        assert_eq!(the_context.pair_from_string(""), Err(ParseError::Empty));
        assert_eq!(
            the_context.pair_from_string("1,x"),
            Err(ParseError::Element("x".to_string()))
        );
        assert_eq!(
            the_context.pair_from_string("1,"),
            Err(ParseError::Empty)
        );
        assert_eq!(
            the_context.pair_from_string(" -1 , 2 "),
            Ok(Pair::new(-1, 2))
        );
    }

    #[test]
    fn unknown_elements_rejected() {
        let mut the_context = Context::default();
        the_context.add_element(1);

        assert_eq!(
            the_context.add_pair(Pair::new(2, 1)),
            Err(BuildError::UnknownElement(2))
        );
        assert_eq!(
            the_context.add_pair(Pair::reflexive(3)),
            Err(BuildError::UnknownElement(3))
        );
        assert!(the_context.relation().is_empty());
    }

    #[test]
    fn duplicate_pair() {
        let mut the_context = Context::default();
        the_context.add_element(1);
        the_context.add_element(2);

        assert_eq!(the_context.add_pair_string("1,2"), Ok(true));
        assert_eq!(the_context.add_pair_string("1 ,2"), Ok(false));
        assert_eq!(the_context.add_pair_string("2,1"), Ok(true));
        assert_eq!(the_context.relation().len(), 2);
    }
}

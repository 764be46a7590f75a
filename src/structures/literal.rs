/*!
Literals are atoms paired with a (boolean) polarity.

The external form of a literal is a string: the atom for a positive literal, and the atom prefixed with '-' for a negative literal.
As elements of a universe may themselves be negative, the literal of an element is the literal whose external form is the element written as a string.

```rust
# use relsat::structures::literal::Literal;
let literal: Literal = "-7".parse().unwrap();

assert_eq!(literal.atom(), 7);
assert!(!literal.polarity());
assert_eq!(literal.negate().to_string(), "7");
assert_eq!(literal, Literal::from_element(-7));
```

Literals are ordered by atom and then polarity, with the negative literal of an atom (strictly) less than the positive literal.
*/

use serde::{Serialize, Serializer};

use crate::{
    structures::{atom::Atom, pair::Element},
    types::err::ParseError,
};

/// The representation of a literal as an atom paired with a boolean.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    /// The atom of a literal.
    atom: Atom,

    /// The polarity of a literal.
    polarity: bool,
}

impl Literal {
    /// A fresh literal, specified by pairing an atom with a boolean.
    pub fn new(atom: Atom, polarity: bool) -> Self {
        Literal { atom, polarity }
    }

    /// The literal whose external form is the string form of the element.
    pub fn from_element(element: Element) -> Self {
        Literal {
            atom: element.unsigned_abs(),
            polarity: element >= 0,
        }
    }

    /// The negation, or complement, of the literal.
    pub fn negate(&self) -> Self {
        Literal {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }

    pub fn atom(&self) -> Atom {
        self.atom
    }

    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// Whether the literal is true when its atom has the given value.
    pub fn is_true_on(&self, value: bool) -> bool {
        self.polarity == value
    }
}

impl std::ops::Neg for Literal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "-{}", self.atom),
        }
    }
}

impl std::str::FromStr for Literal {
    type Err = ParseError;

    /// Negation may be written with either '-' or '¬'.
    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let trimmed = string.trim();

        let (polarity, name) = match trimmed
            .strip_prefix('-')
            .or_else(|| trimmed.strip_prefix('¬'))
        {
            Some(name) => (false, name),
            None => (true, trimmed),
        };

        match name.parse::<Atom>() {
            Ok(atom) => Ok(Literal::new(atom, polarity)),
            Err(_) => Err(ParseError::Literal(trimmed.to_string())),
        }
    }
}

impl Serialize for Literal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_sign_is_polarity() {
        assert_eq!(Literal::from_element(4), Literal::new(4, true));
        assert_eq!(Literal::from_element(-4), Literal::new(4, false));
        assert_eq!(Literal::from_element(0), Literal::new(0, true));
    }

    #[test]
    fn complement_flips_sign() {
        let p = Literal::from_element(12);
        assert_eq!(p.negate().to_string(), "-12");
        assert_eq!(-(-p), p);
    }

    #[test]
    fn parse_forms() {
        assert_eq!("5".parse::<Literal>(), Ok(Literal::new(5, true)));
        assert_eq!(" -5 ".parse::<Literal>(), Ok(Literal::new(5, false)));
        assert_eq!("¬5".parse::<Literal>(), Ok(Literal::new(5, false)));
        assert!("p".parse::<Literal>().is_err());
        assert!("--5".parse::<Literal>().is_err());
        assert!("-".parse::<Literal>().is_err());
    }

    #[test]
    fn negative_before_positive() {
        let mut literals = vec![
            Literal::new(2, true),
            Literal::new(1, true),
            Literal::new(2, false),
        ];
        literals.sort();
        assert_eq!(
            literals,
            vec![
                Literal::new(1, true),
                Literal::new(2, false),
                Literal::new(2, true)
            ]
        );
    }
}

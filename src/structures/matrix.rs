/*!
A dense boolean adjacency matrix over the elements of a relation.

Rows and columns are indexed by the elements of the relation in ascending order, so the element at index *i* is the *i*th smallest element.
This ordering is part of how a matrix displays:

```rust
# use relsat::structures::matrix::ClosureMatrix;
let mut matrix = ClosureMatrix::new(vec![1, 2]);
matrix.set(0, 1);

assert_eq!(matrix.to_string(), "       1   2\n   1   0   1\n   2   0   0\n");
```
*/

use serde::{ser::SerializeStruct, Serialize, Serializer};

use crate::structures::{
    pair::{Element, Pair},
    relation::Relation,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClosureMatrix {
    /// The elements indexing the matrix, ascending.
    elements: Vec<Element>,

    /// The cells of the matrix, in row-major order.
    cells: Vec<bool>,
}

impl ClosureMatrix {
    /// An empty (all false) matrix indexed by the given elements.
    ///
    /// The elements are sorted and deduplicated.
    pub fn new(mut elements: Vec<Element>) -> Self {
        elements.sort_unstable();
        elements.dedup();
        let size = elements.len();
        ClosureMatrix {
            elements,
            cells: vec![false; size * size],
        }
    }

    /// The adjacency matrix of a relation, where a reflexive singleton (*x*) marks the diagonal cell of *x*.
    pub fn from_relation(relation: &Relation) -> Self {
        let mut matrix = ClosureMatrix::new(relation.elements().into_iter().collect());
        for pair in relation {
            // Every element of the relation indexes the matrix.
            if let (Some(i), Some(j)) = (matrix.index_of(pair.x()), matrix.index_of(pair.target())) {
                matrix.set(i, j);
            }
        }
        matrix
    }

    /// The number of rows (and columns) of the matrix.
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn element(&self, index: usize) -> Element {
        self.elements[index]
    }

    pub fn index_of(&self, element: Element) -> Option<usize> {
        self.elements.binary_search(&element).ok()
    }

    pub fn get(&self, i: usize, j: usize) -> bool {
        self.cells[i * self.size() + j]
    }

    /// Sets the cell at row *i* and column *j*, returning whether the cell was previously unset.
    pub fn set(&mut self, i: usize, j: usize) -> bool {
        let index = i * self.size() + j;
        let fresh = !self.cells[index];
        self.cells[index] = true;
        fresh
    }

    /// Sets every cell on the diagonal.
    pub fn set_diagonal(&mut self) {
        for i in 0..self.size() {
            self.set(i, i);
        }
    }

    /// Whether *x* is related to *y* by the matrix.
    pub fn relates(&self, x: Element, y: Element) -> bool {
        match (self.index_of(x), self.index_of(y)) {
            (Some(i), Some(j)) => self.get(i, j),
            _ => false,
        }
    }

    /// The row at index *i* as a string of '0' and '1', separated by spaces.
    pub fn row_string(&self, i: usize) -> String {
        (0..self.size())
            .map(|j| if self.get(i, j) { "1" } else { "0" })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The relation of ordered pairs marked by the matrix.
    pub fn to_relation(&self) -> Relation {
        let size = self.size();
        (0..size)
            .flat_map(|i| (0..size).map(move |j| (i, j)))
            .filter(|(i, j)| self.get(*i, *j))
            .map(|(i, j)| Pair::new(self.elements[i], self.elements[j]))
            .collect()
    }
}

impl std::fmt::Display for ClosureMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "    ")?;
        for element in &self.elements {
            write!(f, "{element:4}")?;
        }
        writeln!(f)?;

        for (i, element) in self.elements.iter().enumerate() {
            write!(f, "{element:4}")?;
            for j in 0..self.size() {
                match self.get(i, j) {
                    true => write!(f, "   1")?,
                    false => write!(f, "   0")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Serialize for ClosureMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let rows = (0..self.size())
            .map(|i| self.row_string(i))
            .collect::<Vec<_>>();

        let mut state = serializer.serialize_struct("ClosureMatrix", 2)?;
        state.serialize_field("elements", &self.elements)?;
        state.serialize_field("rows", &rows)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relation_round_trip_marks() {
        let relation: Relation = [Pair::new(3, 1), Pair::reflexive(2)].into_iter().collect();
        let matrix = ClosureMatrix::from_relation(&relation);

        assert_eq!(matrix.elements(), &[1, 2, 3]);
        assert!(matrix.relates(3, 1));
        assert!(matrix.relates(2, 2));
        assert!(!matrix.relates(1, 3));
        assert!(!matrix.relates(1, 1));
        assert_eq!(matrix.row_string(2), "1 0 0");
    }

    #[test]
    fn set_reports_freshness() {
        let mut matrix = ClosureMatrix::new(vec![5, 4]);
        assert!(matrix.set(0, 1));
        assert!(!matrix.set(0, 1));
        assert_eq!(matrix.element(0), 4);
    }

    #[test]
    fn unknown_elements_unrelated() {
        let matrix = ClosureMatrix::new(vec![1]);
        assert!(!matrix.relates(1, 7));
    }
}

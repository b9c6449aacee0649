use super::object::Tableau;
use crate::port::{EdgeType, Input, Output};

impl Tableau {
    /// The [`EdgeType`] of wire `i`, or `None` when `i` is not in `1..=3n + 1`.
    ///
    /// Wire `i` enters the port given by the row of `i` and leaves the port given by the row
    /// of `i - 1`. Wires `1` and `3n + 1` are the wire at infinity.
    ///
    /// ```rust
    /// use pc_prographs::port::*;
    /// use pc_prographs::tableau::*;
    /// let t = Tableau::new(vec![vec![3, 6], vec![2, 5], vec![1, 4]]).unwrap();
    /// assert_eq!(t.edge_type(1), Some(EdgeType::INFINITE));
    /// assert_eq!(t.edge_type(2), Some(EdgeType::new(Output::LeftCoproduct, Input::LeftProduct)));
    /// assert_eq!(t.edge_type(3), Some(EdgeType::new(Output::RightCoproduct, Input::RightProduct)));
    /// assert_eq!(t.edge_type(8), None);
    /// ```
    pub fn edge_type(&self, i: usize) -> Option<EdgeType> {
        let end = self.max_label() + 1;
        if i == 1 || i == end {
            return (self.size() > 0).then_some(EdgeType::INFINITE);
        }
        if i == 0 || i > end {
            return None;
        }

        let target = match self.row_of(i)? {
            0 => Input::RightProduct,
            1 => Input::LeftProduct,
            _ => Input::Coproduct,
        };
        let source = match self.row_of(i - 1)? {
            0 => Output::Product,
            1 => Output::RightCoproduct,
            _ => Output::LeftCoproduct,
        };
        Some(EdgeType::new(source, target))
    }

    /// Whether wire `i` can be flipped in either direction.
    pub fn is_edge_flipable(&self, i: usize) -> bool {
        self.finite_edge_type(i).is_some_and(|t| t.is_flipable())
    }

    /// Whether flipping wire `i` gives a tableau covered by `self`.
    pub fn is_edge_reducible(&self, i: usize) -> bool {
        self.finite_edge_type(i).is_some_and(|t| t.is_reducible())
    }

    /// Whether flipping wire `i` gives a tableau covering `self`.
    pub fn is_edge_raisable(&self, i: usize) -> bool {
        self.finite_edge_type(i).is_some_and(|t| t.is_raisable())
    }

    /// The reducible wires of `self`, in increasing order.
    ///
    /// ```rust
    /// use pc_prographs::tableau::*;
    /// let t = Tableau::new(vec![vec![3, 6, 9], vec![2, 5, 8], vec![1, 4, 7]]).unwrap();
    /// assert_eq!(t.reducible_edges(), vec![4, 7]);
    /// ```
    pub fn reducible_edges(&self) -> Vec<usize> {
        (1..=self.max_label())
            .filter(|&i| self.is_edge_reducible(i))
            .collect()
    }

    /// The raisable wires of `self`, in increasing order.
    pub fn raisable_edges(&self) -> Vec<usize> {
        (1..=self.max_label())
            .filter(|&i| self.is_edge_raisable(i))
            .collect()
    }

    // The wire at infinity never flips.
    pub(super) fn finite_edge_type(&self, i: usize) -> Option<EdgeType> {
        if i == 1 || i == self.max_label() + 1 {
            None
        } else {
            self.edge_type(i)
        }
    }
}

use super::object::Tableau;
use crate::port::{DownRotation, UpRotation};
use crate::rotation::*;

/// Failure to flip a wire of a tableau.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FlipError {
    #[error("edge {0} is not reducible")]
    NotReducible(usize),
    #[error("edge {0} is not raisable")]
    NotRaisable(usize),
    /// A generator adjacent to the flipped wire has no partner port.
    #[error("no partner port found while flipping edge {0}")]
    UnmatchedPort(usize),
}

impl Tableau {
    /// Flip wire `i` downwards, returning the tableau covered by `self` along `i`.
    ///
    /// ```rust
    /// use pc_prographs::tableau::*;
    /// let t = Tableau::new(vec![vec![4, 6], vec![2, 5], vec![1, 3]]).unwrap();
    /// let s = t.flip_down_edge(5).unwrap();
    /// assert_eq!(s.rows(), &[vec![5, 6], vec![2, 4], vec![1, 3]]);
    /// assert_eq!(t.flip_down_edge(1), Err(FlipError::NotReducible(1)));
    /// ```
    pub fn flip_down_edge(&self, i: usize) -> Result<Tableau, FlipError> {
        let rotation = self
            .finite_edge_type(i)
            .and_then(|t| t.down_rotation())
            .ok_or(FlipError::NotReducible(i))?;
        let unmatched = FlipError::UnmatchedPort(i);
        let rows = self.rows().clone();

        let rows = match rotation {
            DownRotation::LeftCoproduct => {
                let (o1, _) = self.coproduct_by_right(i).ok_or(unmatched)?;
                left_rotation_coprod(rows, o1 - 1, i)
            }
            DownRotation::RightProduct => {
                let (_, p2) = self.product_by_left(i).ok_or(unmatched)?;
                right_rotation_prod(rows, i - 1, p2)
            }
            DownRotation::JumpOver => jump_over_rotation(rows, i - 1),
            DownRotation::LandOver => {
                let (_, k) = self.coproduct_by_left(i + 1).ok_or(unmatched)?;
                let (j, _) = self.product_by_right(i - 1).ok_or(unmatched)?;
                land_over_rotation(rows, i, j, k)
            }
        };
        Ok(Tableau::from_rows_unchecked(rows))
    }

    /// Flip wire `i` upwards, returning the tableau covering `self` along `i`.
    /// Every downward flip is undone by an upward flip, and conversely.
    ///
    /// ```rust
    /// use pc_prographs::tableau::*;
    /// let t = Tableau::new(vec![vec![5, 6], vec![2, 4], vec![1, 3]]).unwrap();
    /// let s = t.flip_up_edge(6).unwrap();
    /// assert_eq!(s.rows(), &[vec![4, 6], vec![2, 5], vec![1, 3]]);
    /// ```
    pub fn flip_up_edge(&self, i: usize) -> Result<Tableau, FlipError> {
        let rotation = self
            .finite_edge_type(i)
            .and_then(|t| t.up_rotation())
            .ok_or(FlipError::NotRaisable(i))?;
        let unmatched = FlipError::UnmatchedPort(i);
        let rows = self.rows().clone();

        let rows = match rotation {
            UpRotation::LeftProduct => {
                let (p1, _) = self.product_by_right(i - 1).ok_or(unmatched)?;
                left_rotation_prod(rows, p1, i)
            }
            UpRotation::RightCoproduct => {
                let (_, o2) = self.coproduct_by_left(i + 1).ok_or(unmatched)?;
                right_rotation_coprod(rows, i - 1, o2 - 1)
            }
            UpRotation::JumpOver => jump_over_rotation(rows, i - 1),
            UpRotation::LandOver => {
                let (o1, _) = self.coproduct_by_right(i).ok_or(unmatched)?;
                let (_, p2) = self.product_by_left(i).ok_or(unmatched)?;
                land_over_rotation(rows, i, o1 - 1, p2 + 1)
            }
        };
        Ok(Tableau::from_rows_unchecked(rows))
    }

    /// The tableaux covered by `self`, one per reducible wire.
    ///
    /// # Panics
    ///
    /// If a reducible wire has no partner port, which cannot happen for a valid tableau.
    pub fn lower_elements(&self) -> Vec<Tableau> {
        self.reducible_edges()
            .into_iter()
            .map(|i| {
                self.flip_down_edge(i)
                    .expect("invalid tableau: reducible wire without partner")
            })
            .collect()
    }

    /// The tableaux covering `self`, one per raisable wire.
    ///
    /// # Panics
    ///
    /// If a raisable wire has no partner port, which cannot happen for a valid tableau.
    pub fn upper_elements(&self) -> Vec<Tableau> {
        self.raisable_edges()
            .into_iter()
            .map(|i| {
                self.flip_up_edge(i)
                    .expect("invalid tableau: raisable wire without partner")
            })
            .collect()
    }

    ////////////////////////////////////////
    // Partner lookups

    fn product_by_left(&self, left: usize) -> Option<(usize, usize)> {
        self.products_inputs().into_iter().find(|(l, _)| *l == left)
    }

    fn product_by_right(&self, right: usize) -> Option<(usize, usize)> {
        self.products_inputs().into_iter().find(|(_, r)| *r == right)
    }

    fn coproduct_by_left(&self, left: usize) -> Option<(usize, usize)> {
        self.coproducts_outputs().into_iter().find(|(l, _)| *l == left)
    }

    fn coproduct_by_right(&self, right: usize) -> Option<(usize, usize)> {
        self.coproducts_outputs().into_iter().find(|(_, r)| *r == right)
    }
}

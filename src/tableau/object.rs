use crate::rotation::{self, Rows};

/// Reasons for a list of rows not to be a standard tableau of shape `(3, n)`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("a tableau has at least one row")]
    Empty,
    #[error("a tableau has 3 rows, got {0}")]
    RowCount(usize),
    #[error("row {row} has length {found}, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("row {row} is not increasing at column {column}")]
    RowNotIncreasing { row: usize, column: usize },
    #[error("column {column} is not decreasing at row {row}")]
    ColumnNotDecreasing { row: usize, column: usize },
    #[error("labels are not exactly 1..={0}")]
    NotStandard(usize),
}

/// Check that `values` is a standard tableau with three rows.
///
/// Checks are run in order and the first failing one is reported.
///
/// ```rust
/// use pc_prographs::tableau::*;
/// assert_eq!(validate(&[vec![4, 6], vec![2, 5], vec![1, 3]]), Ok(()));
/// assert_eq!(validate(&[]), Err(ValidationError::Empty));
/// assert_eq!(validate(&[vec![1], vec![2]]), Err(ValidationError::RowCount(2)));
/// assert_eq!(
///     validate(&[vec![5, 6], vec![2, 4], vec![3, 1]]),
///     Err(ValidationError::RowNotIncreasing { row: 2, column: 1 })
/// );
/// ```
pub fn validate(values: &[Vec<usize>]) -> Result<(), ValidationError> {
    if values.is_empty() {
        return Err(ValidationError::Empty);
    }
    if values.len() != 3 {
        return Err(ValidationError::RowCount(values.len()));
    }

    let n = values[0].len();
    for (row, values) in values.iter().enumerate() {
        if values.len() != n {
            return Err(ValidationError::RowLength {
                row,
                expected: n,
                found: values.len(),
            });
        }
    }

    for (row, values) in values.iter().enumerate() {
        if let Some(column) = (1..n).find(|&i| values[i] <= values[i - 1]) {
            return Err(ValidationError::RowNotIncreasing { row, column });
        }
    }

    for row in 1..3 {
        if let Some(column) = (0..n).find(|&i| values[row - 1][i] < values[row][i]) {
            return Err(ValidationError::ColumnNotDecreasing { row, column });
        }
    }

    let mut seen = vec![false; 3 * n];
    for &x in values.iter().flatten() {
        match x.checked_sub(1).and_then(|i| seen.get_mut(i)) {
            Some(slot) if !*slot => *slot = true,
            _ => return Err(ValidationError::NotStandard(3 * n)),
        }
    }

    Ok(())
}

/// A standard Young tableau of shape `(3, n)`.
///
/// # Invariants
///
/// - Each row is strictly increasing
/// - Each column is decreasing from row 0 to row 2
/// - The labels are exactly `1..=3n`
///
/// These are checked by [`Tableau::new`].
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Tableau {
    rows: Rows,
}

impl Tableau {
    /// Construct a tableau from its rows, top first.
    ///
    /// ```rust
    /// use pc_prographs::tableau::*;
    /// let t = Tableau::new(vec![vec![4, 6], vec![2, 5], vec![1, 3]]).unwrap();
    /// assert_eq!(t.size(), 2);
    /// assert!(Tableau::new(vec![vec![], vec![], vec![]]).is_ok());
    /// ```
    pub fn new(values: Vec<Vec<usize>>) -> Result<Self, ValidationError> {
        validate(&values)?;
        let mut rows = values.into_iter();
        let mut next = || rows.next().unwrap_or_default();
        Ok(Tableau {
            rows: [next(), next(), next()],
        })
    }

    pub fn from_rows(rows: Rows) -> Result<Self, ValidationError> {
        validate(&rows)?;
        Ok(Tableau { rows })
    }

    /// Rows produced by a rotation rule applied to a valid tableau are valid.
    pub(crate) fn from_rows_unchecked(rows: Rows) -> Self {
        debug_assert_eq!(validate(&rows), Ok(()));
        Tableau { rows }
    }

    /// The unique tableau of size 0.
    pub fn empty() -> Self {
        Tableau {
            rows: Default::default(),
        }
    }

    /// The number of columns `n`.
    pub fn size(&self) -> usize {
        self.rows[0].len()
    }

    /// The largest label `3n`.
    pub fn max_label(&self) -> usize {
        3 * self.size()
    }

    pub fn rows(&self) -> &Rows {
        &self.rows
    }

    pub fn row(&self, j: usize) -> &[usize] {
        &self.rows[j]
    }

    pub fn into_rows(self) -> Rows {
        self.rows
    }

    /// The row containing `label`, if any.
    pub fn row_of(&self, label: usize) -> Option<usize> {
        (0..3).find(|&j| self.rows[j].binary_search(&label).is_ok())
    }

    /// The Schützenberger involution of `self`.
    ///
    /// ```rust
    /// use pc_prographs::tableau::*;
    /// let t = Tableau::new(vec![vec![4, 7, 9], vec![2, 5, 8], vec![1, 3, 6]]).unwrap();
    /// assert_eq!(t.schutzenberger().schutzenberger(), t);
    /// ```
    pub fn schutzenberger(&self) -> Self {
        Tableau::from_rows_unchecked(rotation::schutzenberger(&self.rows))
    }

    /// The `(left, right)` inputs of every product, in the order of their right inputs.
    ///
    /// ```rust
    /// use pc_prographs::tableau::*;
    /// let t = Tableau::new(vec![vec![6, 8, 9], vec![2, 5, 7], vec![1, 3, 4]]).unwrap();
    /// assert_eq!(t.products_inputs(), vec![(5, 6), (7, 8), (2, 9)]);
    /// ```
    pub fn products_inputs(&self) -> Vec<(usize, usize)> {
        match_rows(&self.rows[0], &self.rows[1])
    }

    /// The `(left, right)` outputs of every coproduct, in the order of their right outputs.
    ///
    /// ```rust
    /// use pc_prographs::tableau::*;
    /// let t = Tableau::new(vec![vec![3, 6], vec![2, 5], vec![1, 4]]).unwrap();
    /// assert_eq!(t.coproducts_outputs(), vec![(2, 3), (5, 6)]);
    /// ```
    pub fn coproducts_outputs(&self) -> Vec<(usize, usize)> {
        match_rows(&self.rows[1], &self.rows[2])
            .into_iter()
            .map(|(l, r)| (l + 1, r + 1))
            .collect()
    }

    /// The faces of the prograph, each given by its boundary wires.
    ///
    /// The first two faces are the outer left and outer right faces, both bounded by wire `1`.
    /// They are followed by one face per coproduct, opened between its two outputs.
    ///
    /// ```rust
    /// use pc_prographs::tableau::*;
    /// let t = Tableau::new(vec![vec![4, 6], vec![2, 5], vec![1, 3]]).unwrap();
    /// assert_eq!(t.faces(), vec![vec![1, 2, 5], vec![1, 3, 6], vec![2, 3, 4], vec![4, 5, 6]]);
    /// ```
    pub fn faces(&self) -> Vec<Vec<usize>> {
        let products = self.products_inputs();
        let coproducts = self.coproducts_outputs();

        let next_left = |e: usize| {
            if let Some(&(_, r)) = coproducts.iter().find(|(l, _)| *l == e + 1) {
                Some(r)
            } else {
                products.iter().find(|(_, r)| *r == e).map(|(_, r)| r + 1)
            }
        };
        let next_right = |e: usize| {
            if let Some(&(l, _)) = coproducts.iter().find(|(l, _)| *l == e + 1) {
                Some(l)
            } else {
                products.iter().find(|(l, _)| *l == e).map(|(_, r)| r + 1)
            }
        };

        let end = self.max_label() + 1;
        let mut faces = Vec::with_capacity(self.size() + 2);
        for next in [&next_right as &dyn Fn(usize) -> Option<usize>, &next_left] {
            let mut face = Vec::new();
            if self.size() > 0 {
                walk_face(&mut face, 1, end, next);
            }
            faces.push(face);
        }

        for &(l, r) in coproducts.iter() {
            let mut face = Vec::new();
            walk_face(&mut face, l, end, &next_left);
            walk_face(&mut face, r, end, &next_right);
            faces.push(face);
        }
        faces
    }
}

/// Follow `next` from `start` until it stops or reaches `end`.
fn walk_face(
    face: &mut Vec<usize>,
    start: usize,
    end: usize,
    next: &dyn Fn(usize) -> Option<usize>,
) {
    let mut edge = Some(start);
    while let Some(e) = edge.filter(|&e| e != end) {
        face.push(e);
        edge = next(e);
    }
}

/// Match each entry `r` of `upper` (left to right) with the rightmost unused entry of `lower`
/// smaller than `r`.
///
/// # Panics
///
/// If some entry has no partner, which cannot happen when `upper` dominates `lower`.
fn match_rows(upper: &[usize], lower: &[usize]) -> Vec<(usize, usize)> {
    let mut used = vec![false; lower.len()];
    upper
        .iter()
        .map(|&right| {
            let j = (0..lower.len())
                .rev()
                .find(|&j| !used[j] && lower[j] < right)
                .expect("invalid tableau: unmatched port");
            used[j] = true;
            (lower[j], right)
        })
        .collect()
}

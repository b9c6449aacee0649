//! The set of all tableaux of shape `(3, n)`.
use crate::poset::Intervals;
use crate::tableau::Tableau;

use num_traits::{NumCast, PrimInt};
use rand::Rng;
use std::fmt;

/// The number of tableaux of shape `(3, n)`, `2·(3n)! / (n!·(n+1)!·(n+2)!)`, or `None` if it
/// overflows `T`.
///
/// Computed with the recurrence `a(k+1) = a(k)·(3k+1)(3k+2)(3k+3) / ((k+1)(k+2)(k+3))`, whose
/// divisions are exact.
///
/// ```rust
/// use pc_prographs::enumerate::cardinality;
/// assert_eq!(cardinality::<u64>(3), Some(42));
/// assert_eq!(cardinality::<u8>(4), None);
/// ```
pub fn cardinality<T: PrimInt>(n: usize) -> Option<T> {
    let mut a = T::one();
    for k in 0..n {
        for x in [3 * k + 1, 3 * k + 2, 3 * k + 3] {
            a = a.checked_mul(&<T as NumCast>::from(x)?)?;
        }
        for d in [k + 1, k + 2, k + 3] {
            a = a / <T as NumCast>::from(d)?;
        }
    }
    Some(a)
}

/// Rectangular standard Young tableaux of shape `(3, n)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct RectangularTableaux {
    size: usize,
}

impl RectangularTableaux {
    pub fn new(size: usize) -> Self {
        RectangularTableaux { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The number of elements.
    ///
    /// # Panics
    ///
    /// If the count does not fit in a `usize`.
    pub fn len(&self) -> usize {
        cardinality(self.size).expect("cardinality overflows usize")
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, t: &Tableau) -> bool {
        t.size() == self.size
    }

    /// All elements, in the order they are produced by filling cells with the labels
    /// `1, 2, ..., 3n` (trying columns left to right, then rows top to bottom).
    ///
    /// ```rust
    /// use pc_prographs::enumerate::RectangularTableaux;
    /// let all = RectangularTableaux::new(2).elements();
    /// assert_eq!(all.len(), 5);
    /// assert_eq!(all[0].rows(), &[vec![3, 6], vec![2, 5], vec![1, 4]]);
    /// ```
    pub fn elements(&self) -> Vec<Tableau> {
        let mut grid = Grid::new(self.size);
        let mut result = Vec::new();
        fill(&mut grid, 1, &mut result);
        result
    }

    pub fn iter(&self) -> std::vec::IntoIter<Tableau> {
        self.elements().into_iter()
    }

    /// A random element, placing each label in a legal cell chosen uniformly among the rows.
    /// The result is always a valid tableau, but tableaux are not equally likely.
    pub fn random_element<R: Rng>(&self, rng: &mut R) -> Tableau {
        let mut grid = Grid::new(self.size);
        for label in 1..=3 * self.size {
            let rows: Vec<(usize, usize)> = (0..3)
                .filter_map(|j| grid.first_empty(j).map(|i| (j, i)))
                .filter(|&(j, i)| grid.is_legal(j, i))
                .collect();
            // Row 2 always has a legal cell until the grid is full.
            let (j, i) = rows[rng.random_range(0..rows.len())];
            grid.cells[j][i] = label;
        }
        grid.into_tableau()
    }

    /// The maximal element of the order: `1` and `3` in row 2, `2` in row 1, then the labels
    /// `4..3n` dealt to rows 0, 1 and 2 in turn, and `3n` closing row 0. For `n <= 1` it is the
    /// only tableau.
    ///
    /// ```rust
    /// use pc_prographs::enumerate::RectangularTableaux;
    /// let t = RectangularTableaux::new(3).max_element();
    /// assert_eq!(t.rows(), &[vec![4, 7, 9], vec![2, 5, 8], vec![1, 3, 6]]);
    /// ```
    pub fn max_element(&self) -> Tableau {
        let n = self.size;
        match n {
            0 => return Tableau::empty(),
            1 => return Tableau::from_rows_unchecked([vec![3], vec![2], vec![1]]),
            _ => {}
        }
        // Labels 1, 2 and 3 are already placed, so this needs n >= 2.
        let mut rows = [vec![], vec![2], vec![1, 3]];
        for (pos, label) in (4..3 * n).enumerate() {
            rows[pos % 3].push(label);
        }
        rows[0].push(3 * n);
        Tableau::from_rows_unchecked(rows)
    }

    /// The minimal element of the order: the blocks `1..=n`, `n+1..=2n` and `2n+1..=3n` in
    /// rows 2, 1 and 0.
    pub fn min_element(&self) -> Tableau {
        let n = self.size;
        Tableau::from_rows_unchecked([
            (2 * n + 1..=3 * n).collect(),
            (n + 1..=2 * n).collect(),
            (1..=n).collect(),
        ])
    }

    /// The down set of every tableau below [`RectangularTableaux::max_element`].
    pub fn intervals(&self) -> Intervals {
        Intervals::below(self.max_element())
    }
}

impl IntoIterator for &RectangularTableaux {
    type Item = Tableau;
    type IntoIter = std::vec::IntoIter<Tableau>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for RectangularTableaux {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rectangular standard Young tableaux of shape (3, {})",
            self.size
        )
    }
}

////////////////////////////////////////
// Partial fillings

/// A partially filled `3 × n` grid, `0` marking empty cells.
struct Grid {
    cells: [Vec<usize>; 3],
}

impl Grid {
    fn new(n: usize) -> Self {
        Grid {
            cells: [vec![0; n], vec![0; n], vec![0; n]],
        }
    }

    fn width(&self) -> usize {
        self.cells[0].len()
    }

    /// Cell `(j, i)` can take the next label when it is empty, its left neighbour is filled and
    /// the cell below it is filled.
    fn is_legal(&self, j: usize, i: usize) -> bool {
        self.cells[j][i] == 0
            && (i == 0 || self.cells[j][i - 1] != 0)
            && (j == 2 || self.cells[j + 1][i] != 0)
    }

    fn first_empty(&self, j: usize) -> Option<usize> {
        self.cells[j].iter().position(|&x| x == 0)
    }

    fn into_tableau(self) -> Tableau {
        Tableau::from_rows_unchecked(self.cells)
    }
}

fn fill(grid: &mut Grid, label: usize, result: &mut Vec<Tableau>) {
    if label > 3 * grid.width() {
        result.push(Tableau::from_rows_unchecked(grid.cells.clone()));
        return;
    }
    for i in 0..grid.width() {
        for j in 0..3 {
            if grid.is_legal(j, i) {
                grid.cells[j][i] = label;
                fill(grid, label + 1, result);
                grid.cells[j][i] = 0;
            }
        }
    }
}

//! Elementary rewrites of the raw three-row representation of a tableau.
//!
//! Each rule realizes the flip of a single edge of the prograph encoded by a tableau. Rules take
//! their rows by value and return new rows whose labels are renumbered so that the result is
//! standard again. They do not check their preconditions: callers pass labels obtained from the
//! product/coproduct matchings of a valid [`Tableau`](crate::tableau::Tableau).
//!
//! The downward rules are [`right_rotation_prod`], [`left_rotation_coprod`],
//! [`jump_over_rotation`] and [`land_over_rotation`]. The upward rules [`left_rotation_prod`]
//! and [`right_rotation_coprod`] are their inverses (together with `jump_over_rotation` and
//! `land_over_rotation`, which serve both directions).

/// Rows 0 (top), 1 and 2 (bottom) of a tableau.
pub type Rows = [Vec<usize>; 3];

/// The largest label `N = 3n` of rows of size `n`.
fn max_label(t: &Rows) -> usize {
    3 * t[0].len()
}

fn sort_rows(mut t: Rows) -> Rows {
    for row in t.iter_mut() {
        row.sort_unstable();
    }
    t
}

/// The Schützenberger involution: entry `(r, c)` becomes `N + 1 - t[2 - r][n - 1 - c]`.
///
/// ```rust
/// use pc_prographs::rotation::schutzenberger;
/// let t = [vec![6, 8, 9], vec![2, 5, 7], vec![1, 3, 4]];
/// assert_eq!(schutzenberger(&t), [vec![6, 7, 9], vec![3, 5, 8], vec![1, 2, 4]]);
/// ```
pub fn schutzenberger(t: &Rows) -> Rows {
    let top = max_label(t) + 1;
    let reverse = |row: &Vec<usize>| row.iter().rev().map(|x| top - x).collect::<Vec<_>>();
    [reverse(&t[2]), reverse(&t[1]), reverse(&t[0])]
}

/// Rotate right at the product whose inputs are `(p1 + 1, p2)`.
///
/// Row 0 entries in `(p1, p2]` pull their left neighbour up to one less than themselves, and
/// all labels of rows 1 and 2 strictly between `p1` and `p2` are decremented.
///
/// ```rust
/// use pc_prographs::rotation::right_rotation_prod;
/// let t = [vec![4, 7, 9], vec![2, 5, 8], vec![1, 3, 6]];
/// assert_eq!(right_rotation_prod(t.clone(), 4, 7), [vec![6, 7, 9], vec![2, 4, 8], vec![1, 3, 5]]);
/// assert_eq!(right_rotation_prod(t, 7, 9), [vec![4, 8, 9], vec![2, 5, 7], vec![1, 3, 6]]);
/// ```
pub fn right_rotation_prod(mut t: Rows, p1: usize, p2: usize) -> Rows {
    let n = t[0].len();
    for i in 0..n.saturating_sub(1) {
        let next = t[0][i + 1];
        if p1 < next && next <= p2 {
            t[0][i] = next - 1;
        }
    }
    for row in t[1..].iter_mut() {
        for x in row.iter_mut() {
            if p1 < *x && *x < p2 {
                *x -= 1;
            }
        }
    }
    t
}

/// Rotate left at the coproduct whose outputs are `(i1 + 1, i2)`.
///
/// Row 2 entries in `(i1, i2]` are pushed to one more than their left neighbour (right to
/// left), and all labels of rows 0 and 1 strictly between `i1` and `i2` are incremented.
///
/// ```rust
/// use pc_prographs::rotation::left_rotation_coprod;
/// let t = [vec![4, 7, 9], vec![2, 5, 8], vec![1, 3, 6]];
/// assert_eq!(left_rotation_coprod(t.clone(), 1, 3), [vec![4, 7, 9], vec![3, 5, 8], vec![1, 2, 6]]);
/// assert_eq!(left_rotation_coprod(t, 3, 6), [vec![5, 7, 9], vec![2, 6, 8], vec![1, 3, 4]]);
/// ```
pub fn left_rotation_coprod(mut t: Rows, i1: usize, i2: usize) -> Rows {
    let n = t[2].len();
    for i in (1..n).rev() {
        let x = t[2][i];
        if i1 < x && x <= i2 {
            t[2][i] = t[2][i - 1] + 1;
        }
    }
    for row in t[..2].iter_mut() {
        for x in row.iter_mut() {
            if i1 < *x && *x < i2 {
                *x += 1;
            }
        }
    }
    t
}

/// Swap the labels `k` and `k + 1`.
///
/// ```rust
/// use pc_prographs::rotation::jump_over_rotation;
/// let t = [vec![4, 7, 9], vec![2, 5, 8], vec![1, 3, 6]];
/// assert_eq!(jump_over_rotation(t.clone(), 3), [vec![3, 7, 9], vec![2, 5, 8], vec![1, 4, 6]]);
/// assert_eq!(jump_over_rotation(t, 6), [vec![4, 6, 9], vec![2, 5, 8], vec![1, 3, 7]]);
/// ```
pub fn jump_over_rotation(mut t: Rows, k: usize) -> Rows {
    for row in t.iter_mut() {
        for x in row.iter_mut() {
            if *x == k {
                *x = k + 1;
            } else if *x == k + 1 {
                *x = k;
            }
        }
    }
    t
}

/// Exchange the blocks of labels `[j, i)` and `[i, k)`, then sort each row.
///
/// ```rust
/// use pc_prographs::rotation::land_over_rotation;
/// let t = [vec![3, 6], vec![2, 5], vec![1, 4]];
/// assert_eq!(land_over_rotation(t, 4, 2, 6), [vec![5, 6], vec![3, 4], vec![1, 2]]);
///
/// let t = [vec![3, 6, 9], vec![2, 5, 8], vec![1, 4, 7]];
/// assert_eq!(land_over_rotation(t, 7, 5, 9), [vec![3, 8, 9], vec![2, 6, 7], vec![1, 4, 5]]);
/// ```
pub fn land_over_rotation(mut t: Rows, i: usize, j: usize, k: usize) -> Rows {
    for row in t.iter_mut() {
        for x in row.iter_mut() {
            if j <= *x && *x < i {
                *x += k - i;
            } else if i <= *x && *x < k {
                *x -= i - j;
            }
        }
    }
    sort_rows(t)
}

/// Rotate left at the product whose inputs are `(p1, p2)`.
/// This is the inverse of [`right_rotation_prod`] with the same arguments: `p2 - 1` becomes
/// `p1` and the labels in `[p1, p2 - 1)` move up by one.
///
/// ```rust
/// use pc_prographs::rotation::{left_rotation_prod, right_rotation_prod};
/// let t = [vec![4, 7, 9], vec![2, 5, 8], vec![1, 3, 6]];
/// let s = right_rotation_prod(t.clone(), 4, 7);
/// assert_eq!(left_rotation_prod(s, 4, 7), t);
/// ```
pub fn left_rotation_prod(mut t: Rows, p1: usize, p2: usize) -> Rows {
    let last = p2 - 1;
    for row in t.iter_mut() {
        for x in row.iter_mut() {
            if *x == last {
                *x = p1;
            } else if p1 <= *x && *x < last {
                *x += 1;
            }
        }
    }
    sort_rows(t)
}

/// Rotate right at the coproduct whose outputs are `(i1 + 1, i2)` after the left rotation.
/// This is the inverse of [`left_rotation_coprod`] with the same arguments, obtained by
/// conjugating [`left_rotation_prod`] with the Schützenberger involution.
///
/// ```rust
/// use pc_prographs::rotation::{left_rotation_coprod, right_rotation_coprod};
/// let t = [vec![4, 7, 9], vec![2, 5, 8], vec![1, 3, 6]];
/// let s = left_rotation_coprod(t.clone(), 3, 6);
/// assert_eq!(right_rotation_coprod(s, 3, 6), t);
/// ```
pub fn right_rotation_coprod(t: Rows, i1: usize, i2: usize) -> Rows {
    let top = max_label(&t) + 1;
    let rotated = left_rotation_prod(schutzenberger(&t), top - i2, top - i1);
    schutzenberger(&rotated)
}

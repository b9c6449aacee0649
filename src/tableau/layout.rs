//! The fixed-width text layout of a tableau.
//!
//! ```text
//! ---------
//! | 4 | 6 |
//! ---------
//! | 2 | 5 |
//! ---------
//! | 1 | 3 |
//! ---------
//! ```
use super::object::{Tableau, ValidationError};
use std::fmt;
use std::str::FromStr;

/// Failure to read a tableau from its text layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseTableauError {
    #[error("invalid label {0:?}")]
    Label(String),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl fmt::Display for Tableau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_label().max(1).to_string().len();
        let rule = "-".repeat((width + 3) * self.size() + 1);

        write!(f, "{rule}")?;
        for row in self.rows() {
            let cells: Vec<String> = row.iter().map(|x| format!("{x:>width$}")).collect();
            write!(f, "\n| {} |\n{rule}", cells.join(" | "))?;
        }
        Ok(())
    }
}

impl FromStr for Tableau {
    type Err = ParseTableauError;

    /// Read the layout written by [`Display`](fmt::Display). Rule lines and blank lines are
    /// skipped.
    ///
    /// ```rust
    /// use pc_prographs::tableau::*;
    /// let t = Tableau::new(vec![vec![4, 6], vec![2, 5], vec![1, 3]]).unwrap();
    /// assert_eq!(t.to_string().parse::<Tableau>(), Ok(t));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values = Vec::new();
        for line in s.lines().map(str::trim) {
            if line.is_empty() || line.chars().all(|c| c == '-') {
                continue;
            }
            let row = line
                .trim_matches('|')
                .split('|')
                .map(str::trim)
                .filter(|cell| !cell.is_empty())
                .map(|cell| {
                    cell.parse::<usize>()
                        .map_err(|_| ParseTableauError::Label(cell.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?;
            values.push(row);
        }
        Ok(Tableau::new(values)?)
    }
}

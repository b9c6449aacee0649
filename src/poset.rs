//! Intervals of the order on tableaux generated by [`Tableau::flip_down_edge`].
use crate::tableau::Tableau;

use std::collections::{HashMap, HashSet, VecDeque};
use tracing::debug;

/// Every tableau reachable from a top element, together with its down set.
///
/// Tops are stored in the order they are discovered: breadth-first from the top element.
#[derive(Clone, Debug)]
pub struct Intervals {
    tops: Vec<Tableau>,
    down_sets: Vec<HashSet<Tableau>>,
    index: HashMap<Tableau, usize>,
}

impl Intervals {
    /// Compute the down set of `top` and of every tableau below it.
    ///
    /// Each down set is grown from its own worklist, and the covered elements of each tableau
    /// are computed once.
    ///
    /// ```rust
    /// use pc_prographs::enumerate::RectangularTableaux;
    /// use pc_prographs::poset::Intervals;
    /// let intervals = Intervals::below(RectangularTableaux::new(2).max_element());
    /// assert_eq!(intervals.sizes(), vec![5, 2, 2, 2, 1]);
    /// ```
    pub fn below(top: Tableau) -> Self {
        let mut children: HashMap<Tableau, Vec<Tableau>> = HashMap::new();
        let mut tops = vec![top.clone()];
        let mut index = HashMap::from([(top, 0)]);
        let mut down_sets = Vec::new();

        let mut next = 0;
        while next < tops.len() {
            let top = tops[next].clone();
            let mut down_set = HashSet::from([top.clone()]);
            let mut worklist = VecDeque::from([top]);

            while let Some(e) = worklist.pop_front() {
                let covered = children
                    .entry(e.clone())
                    .or_insert_with(|| e.lower_elements());
                for child in covered.iter() {
                    if !index.contains_key(child) {
                        index.insert(child.clone(), tops.len());
                        tops.push(child.clone());
                    }
                    if down_set.insert(child.clone()) {
                        worklist.push_back(child.clone());
                    }
                }
            }

            down_sets.push(down_set);
            next += 1;
        }

        debug!(
            tops = tops.len(),
            covers = children.values().map(Vec::len).sum::<usize>(),
            "computed intervals"
        );
        Intervals {
            tops,
            down_sets,
            index,
        }
    }

    /// The number of tops.
    pub fn len(&self) -> usize {
        self.tops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tops.is_empty()
    }

    pub fn tops(&self) -> &[Tableau] {
        &self.tops
    }

    /// The down set of `top`, if `top` is below the top element.
    pub fn get(&self, top: &Tableau) -> Option<&HashSet<Tableau>> {
        self.index.get(top).map(|&i| &self.down_sets[i])
    }

    /// The size of each down set, in discovery order.
    pub fn sizes(&self) -> Vec<usize> {
        self.down_sets.iter().map(HashSet::len).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Tableau, &HashSet<Tableau>)> {
        self.tops.iter().zip(self.down_sets.iter())
    }
}

use pc_prographs::enumerate::RectangularTableaux;
use pc_prographs::tableau::*;

use super::strategy::{tableau, tableau_strategy};

use proptest::{prop_assert, prop_assert_eq, proptest};
use std::collections::HashSet;

#[test]
fn test_lower_elements_of_max() {
    let t = tableau([&[4, 6], &[2, 5], &[1, 3]]);
    assert_eq!(
        t.lower_elements(),
        vec![
            tableau([&[4, 6], &[3, 5], &[1, 2]]),
            tableau([&[3, 6], &[2, 5], &[1, 4]]),
            tableau([&[5, 6], &[2, 4], &[1, 3]]),
        ]
    );
    assert!(t.upper_elements().is_empty());
}

#[test]
fn test_flip_up() {
    let t = tableau([&[5, 6], &[2, 4], &[1, 3]]);
    assert_eq!(t.raisable_edges(), vec![6]);
    assert_eq!(
        t.flip_up_edge(6),
        Ok(tableau([&[4, 6], &[2, 5], &[1, 3]]))
    );

    let t = tableau([&[4, 6], &[3, 5], &[1, 2]]);
    assert_eq!(t.raisable_edges(), vec![2]);
    assert_eq!(t.upper_elements(), vec![tableau([&[4, 6], &[2, 5], &[1, 3]])]);
}

#[test]
fn test_flip_errors() {
    let t = tableau([&[4, 6], &[2, 5], &[1, 3]]);
    assert_eq!(t.flip_down_edge(1), Err(FlipError::NotReducible(1)));
    assert_eq!(t.flip_down_edge(6), Err(FlipError::NotReducible(6)));
    assert_eq!(t.flip_down_edge(9), Err(FlipError::NotReducible(9)));
    assert_eq!(t.flip_up_edge(3), Err(FlipError::NotRaisable(3)));
}

proptest! {
    #[test]
    fn lower_elements_are_distinct(t in tableau_strategy()) {
        let lower = t.lower_elements();
        prop_assert_eq!(lower.len(), t.reducible_edges().len());
        let distinct: HashSet<_> = lower.iter().collect();
        prop_assert_eq!(distinct.len(), lower.len());
        for child in lower.iter() {
            prop_assert_eq!(child.size(), t.size());
            prop_assert!(child != &t);
        }
    }

    #[test]
    fn flip_down_is_undone_by_flip_up(t in tableau_strategy()) {
        for child in t.lower_elements() {
            prop_assert!(child.upper_elements().contains(&t));
        }
        for parent in t.upper_elements() {
            prop_assert!(parent.lower_elements().contains(&t));
        }
    }

    #[test]
    fn flips_give_valid_tableaux(t in tableau_strategy()) {
        for child in t.lower_elements().into_iter().chain(t.upper_elements()) {
            let rows = child.rows().to_vec();
            prop_assert_eq!(Tableau::new(rows), Ok(child));
        }
    }

    #[test]
    fn schutzenberger_preserves_covers(t in tableau_strategy()) {
        let expected: HashSet<_> = t.lower_elements().iter().map(Tableau::schutzenberger).collect();
        let actual: HashSet<_> = t.schutzenberger().lower_elements().into_iter().collect();
        prop_assert_eq!(actual, expected);
    }
}

#[test]
fn test_every_wire_flips() {
    for n in 0..=4 {
        for t in RectangularTableaux::new(n).iter() {
            assert_eq!(t.lower_elements().len(), t.reducible_edges().len());
            assert_eq!(t.upper_elements().len(), t.raisable_edges().len());
        }
    }
}

use pc_prographs::enumerate::*;
use pc_prographs::tableau::Tableau;

use crate::tableau::strategy::{size_strategy, tableau, tableau_strategy};

use proptest::{prop_assert, prop_assert_eq, proptest};
use rand::{rngs::StdRng, SeedableRng};
use std::collections::HashSet;

#[test]
fn test_cardinality() {
    let counts: Vec<u64> = (0..10).map(|n| cardinality(n).unwrap()).collect();
    assert_eq!(
        counts,
        vec![1, 1, 5, 42, 462, 6006, 87516, 1385670, 23371634, 414315330]
    );
    assert_eq!(cardinality::<u16>(4), Some(462));
    assert_eq!(cardinality::<u16>(5), None);
    assert!(cardinality::<u64>(40).is_none());
    assert!(cardinality::<u128>(20).is_some());
}

#[test]
fn test_elements_are_all_tableaux() {
    for n in 0..=5 {
        let all = RectangularTableaux::new(n);
        let elements = all.elements();
        assert_eq!(elements.len(), all.len());

        let distinct: HashSet<&Tableau> = elements.iter().collect();
        assert_eq!(distinct.len(), elements.len());
        for t in elements.iter() {
            assert_eq!(t.size(), n);
            assert_eq!(Tableau::new(t.rows().to_vec()).as_ref(), Ok(t));
        }
    }
}

#[test]
fn test_elements_order() {
    let elements: Vec<Tableau> = RectangularTableaux::new(2).into_iter().collect();
    assert_eq!(
        elements,
        vec![
            tableau([&[3, 6], &[2, 5], &[1, 4]]),
            tableau([&[4, 6], &[2, 5], &[1, 3]]),
            tableau([&[5, 6], &[2, 4], &[1, 3]]),
            tableau([&[4, 6], &[3, 5], &[1, 2]]),
            tableau([&[5, 6], &[3, 4], &[1, 2]]),
        ]
    );
    assert_eq!(RectangularTableaux::new(0).elements(), vec![Tableau::empty()]);
}

#[test]
fn test_extremal_elements() {
    assert_eq!(RectangularTableaux::new(0).max_element(), Tableau::empty());
    assert_eq!(RectangularTableaux::new(0).min_element(), Tableau::empty());
    assert_eq!(
        RectangularTableaux::new(1).max_element(),
        tableau([&[3], &[2], &[1]])
    );
    assert_eq!(
        RectangularTableaux::new(4).max_element(),
        tableau([&[4, 7, 10, 12], &[2, 5, 8, 11], &[1, 3, 6, 9]])
    );
    assert_eq!(
        RectangularTableaux::new(3).min_element(),
        tableau([&[7, 8, 9], &[4, 5, 6], &[1, 2, 3]])
    );

    for n in 0..=8 {
        let all = RectangularTableaux::new(n);
        for t in [all.max_element(), all.min_element()] {
            assert_eq!(t.size(), n);
            assert_eq!(Tableau::new(t.rows().to_vec()), Ok(t));
        }
        assert!(all.max_element().upper_elements().is_empty());
        assert!(all.min_element().lower_elements().is_empty());
        assert!(all.contains(&all.max_element()));
        assert!(all.contains(&all.min_element()));
    }
}

#[test]
fn test_random_element_is_reproducible() {
    let all = RectangularTableaux::new(6);
    let a = all.random_element(&mut StdRng::seed_from_u64(7));
    let b = all.random_element(&mut StdRng::seed_from_u64(7));
    assert_eq!(a, b);
    assert_eq!(a.size(), 6);
}

#[test]
fn test_display() {
    assert_eq!(
        RectangularTableaux::new(4).to_string(),
        "Rectangular standard Young tableaux of shape (3, 4)"
    );
}

proptest! {
    #[test]
    fn contains_its_elements(t in tableau_strategy()) {
        prop_assert!(RectangularTableaux::new(t.size()).contains(&t));
        prop_assert!(!RectangularTableaux::new(t.size() + 1).contains(&t));
    }

    #[test]
    fn never_empty(n in size_strategy()) {
        let all = RectangularTableaux::new(n);
        prop_assert!(!all.is_empty());
        prop_assert_eq!(all.size(), n);
    }
}

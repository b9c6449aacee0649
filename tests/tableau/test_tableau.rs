use pc_prographs::port::{EdgeType, Input, Output};
use pc_prographs::tableau::*;

use super::strategy::{tableau, tableau_strategy};

use proptest::{prop_assert, prop_assert_eq, proptest};
use std::collections::HashMap;

////////////////////////////////////////////////////////////////////////////////
// Construction

#[test]
fn test_new_rejects_invalid_rows() {
    assert_eq!(Tableau::new(vec![]), Err(ValidationError::Empty));
    assert_eq!(
        Tableau::new(vec![vec![1], vec![2], vec![3], vec![4]]),
        Err(ValidationError::RowCount(4))
    );
    assert_eq!(
        Tableau::new(vec![vec![4, 6], vec![2], vec![1, 3]]),
        Err(ValidationError::RowLength {
            row: 1,
            expected: 2,
            found: 1
        })
    );
    assert_eq!(
        Tableau::new(vec![vec![1, 2], vec![3, 4], vec![5, 6]]),
        Err(ValidationError::ColumnNotDecreasing { row: 1, column: 0 })
    );
    assert_eq!(
        Tableau::new(vec![vec![4, 7], vec![2, 5], vec![1, 3]]),
        Err(ValidationError::NotStandard(6))
    );
    assert_eq!(
        Tableau::new(vec![vec![4, 6], vec![2, 5], vec![1, 5]]),
        Err(ValidationError::NotStandard(6))
    );
}

#[test]
fn test_empty_tableau() {
    let t = Tableau::empty();
    assert_eq!(t.size(), 0);
    assert_eq!(t.max_label(), 0);
    assert_eq!(Tableau::new(vec![vec![], vec![], vec![]]), Ok(t.clone()));
    assert_eq!(t.edge_type(1), None);
    assert!(t.reducible_edges().is_empty());
    assert!(t.lower_elements().is_empty());
    assert_eq!(t.schutzenberger(), t);
}

#[test]
fn test_row_of() {
    let t = tableau([&[4, 6], &[2, 5], &[1, 3]]);
    let rows: Vec<_> = (1..=6).map(|x| t.row_of(x)).collect();
    assert_eq!(
        rows,
        vec![Some(2), Some(1), Some(2), Some(0), Some(1), Some(0)]
    );
    assert_eq!(t.row_of(7), None);
    assert_eq!(t.row_of(0), None);
}

////////////////////////////////////////////////////////////////////////////////
// Wires

#[test]
fn test_products_inputs() {
    let t = tableau([&[4, 7, 10, 12], &[2, 5, 8, 11], &[1, 3, 6, 9]]);
    assert_eq!(t.products_inputs(), vec![(2, 4), (5, 7), (8, 10), (11, 12)]);

    let t = tableau([&[9, 10, 11, 12], &[2, 4, 6, 8], &[1, 3, 5, 7]]);
    assert_eq!(t.products_inputs(), vec![(8, 9), (6, 10), (4, 11), (2, 12)]);
    assert_eq!(t.coproducts_outputs(), vec![(2, 3), (4, 5), (6, 7), (8, 9)]);
}

#[test]
fn test_edge_types() {
    use Input::*;
    use Output::*;
    let t = tableau([&[3, 6], &[2, 5], &[1, 4]]);
    let types: Vec<_> = (1..=7).map(|i| t.edge_type(i)).collect();
    assert_eq!(
        types,
        vec![
            Some(EdgeType::INFINITE),
            Some(EdgeType::new(LeftCoproduct, LeftProduct)),
            Some(EdgeType::new(RightCoproduct, RightProduct)),
            Some(EdgeType::new(Product, Coproduct)),
            Some(EdgeType::new(LeftCoproduct, LeftProduct)),
            Some(EdgeType::new(RightCoproduct, RightProduct)),
            Some(EdgeType::INFINITE),
        ]
    );
    assert_eq!(t.edge_type(0), None);
    assert_eq!(t.edge_type(8), None);
}

#[test]
fn test_flipable_edges() {
    let t = tableau([&[4, 6], &[2, 5], &[1, 3]]);
    let flipable: Vec<_> = (1..=6).map(|i| t.is_edge_flipable(i)).collect();
    assert_eq!(flipable, vec![false, false, true, true, true, false]);
    assert_eq!(t.reducible_edges(), vec![3, 4, 5]);
    assert!(t.raisable_edges().is_empty());
}

#[test]
fn test_reducible_edges() {
    let t = tableau([&[4, 7, 9], &[2, 5, 8], &[1, 3, 6]]);
    assert_eq!(t.reducible_edges(), vec![3, 4, 5, 6, 7, 8]);

    let t = tableau([&[7, 8, 9], &[4, 5, 6], &[1, 2, 3]]);
    assert!(t.reducible_edges().is_empty());

    let t = tableau([&[4, 9, 11, 13, 15], &[2, 5, 7, 12, 14], &[1, 3, 6, 8, 10]]);
    assert_eq!(t.reducible_edges(), vec![3, 4, 5, 6, 8, 9, 10, 11, 12, 14]);
}

#[test]
fn test_faces() {
    let t = tableau([&[8, 9, 11, 14, 15], &[2, 7, 10, 12, 13], &[1, 3, 4, 5, 6]]);
    assert_eq!(
        t.faces(),
        vec![
            vec![1, 2, 10, 12],
            vec![1, 3, 14, 15],
            vec![2, 3, 4, 5, 6, 7, 9],
            vec![7, 8],
            vec![6, 8, 9, 10, 11],
            vec![5, 11, 12, 13, 15],
            vec![4, 13, 14],
        ]
    );

    let t = tableau([&[4, 9, 11, 13, 15], &[2, 5, 7, 12, 14], &[1, 3, 6, 8, 10]]);
    assert_eq!(
        t.faces(),
        vec![
            vec![1, 2, 5, 12, 14],
            vec![1, 3, 6, 8, 15],
            vec![2, 3, 4],
            vec![4, 5, 6, 7, 10, 11],
            vec![7, 8, 9],
            vec![11, 12, 13],
            vec![9, 10, 13, 14, 15],
        ]
    );
}

#[test]
fn test_schutzenberger() {
    let t = tableau([&[6, 8, 9], &[2, 5, 7], &[1, 3, 4]]);
    assert_eq!(t.schutzenberger(), tableau([&[6, 7, 9], &[3, 5, 8], &[1, 2, 4]]));

    let t = tableau([&[4, 9, 11, 13, 15], &[2, 5, 7, 12, 14], &[1, 3, 6, 8, 10]]);
    assert_eq!(
        t.schutzenberger(),
        tableau([&[6, 8, 10, 13, 15], &[2, 4, 9, 11, 14], &[1, 3, 5, 7, 12]])
    );
}

proptest! {
    #[test]
    fn schutzenberger_is_involution(t in tableau_strategy()) {
        let s = t.schutzenberger();
        prop_assert_eq!(s.size(), t.size());
        prop_assert_eq!(s.schutzenberger(), t);
    }

    #[test]
    fn schutzenberger_reverses_wires(t in tableau_strategy()) {
        let s = t.schutzenberger();
        let end = t.max_label() + 2;
        let mut reversed: Vec<usize> = t.reducible_edges().iter().map(|i| end - i).collect();
        reversed.sort();
        prop_assert_eq!(s.reducible_edges(), reversed);

        let mut reversed: Vec<usize> = t.raisable_edges().iter().map(|i| end - i).collect();
        reversed.sort();
        prop_assert_eq!(s.raisable_edges(), reversed);
    }

    #[test]
    fn products_read_left_then_right(t in tableau_strategy()) {
        let products = t.products_inputs();
        prop_assert_eq!(products.len(), t.size());
        for (l, r) in products {
            prop_assert!(l < r);
            prop_assert_eq!(t.row_of(l), Some(1));
            prop_assert_eq!(t.row_of(r), Some(0));
        }

        let coproducts = t.coproducts_outputs();
        prop_assert_eq!(coproducts.len(), t.size());
        for (l, r) in coproducts {
            prop_assert!(l < r);
            prop_assert_eq!(t.row_of(l - 1), Some(2));
            prop_assert_eq!(t.row_of(r - 1), Some(1));
        }
    }

    #[test]
    fn every_wire_bounds_two_faces(t in tableau_strategy()) {
        let faces = t.faces();
        prop_assert_eq!(faces.len(), t.size() + 2);

        let mut count: HashMap<usize, usize> = HashMap::new();
        for &wire in faces.iter().flatten() {
            *count.entry(wire).or_default() += 1;
        }
        prop_assert_eq!(count.len(), t.max_label());
        prop_assert!(count.values().all(|&c| c == 2));
    }

    #[test]
    fn reducible_and_raisable_wires_are_flipable(t in tableau_strategy()) {
        for i in t.reducible_edges().into_iter().chain(t.raisable_edges()) {
            prop_assert!(i != 1);
            prop_assert!(t.is_edge_flipable(i));
        }
    }
}

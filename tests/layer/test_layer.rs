use pc_prographs::enumerate::RectangularTableaux;
use pc_prographs::layer::{layers, Layer, Operator::*};
use pc_prographs::tableau::Tableau;

use crate::tableau::strategy::{tableau, tableau_strategy};

use proptest::{prop_assert_eq, proptest};

#[test]
fn test_layers_n2() {
    let cases: Vec<(_, Vec<Layer>)> = vec![
        (
            tableau([&[4, 6], &[2, 5], &[1, 3]]),
            vec![
                vec![Coproduct],
                vec![Identity, Coproduct],
                vec![Product, Identity],
                vec![Product],
            ],
        ),
        (
            tableau([&[5, 6], &[2, 4], &[1, 3]]),
            vec![
                vec![Coproduct],
                vec![Identity, Coproduct],
                vec![Identity, Product],
                vec![Product],
            ],
        ),
        (
            tableau([&[4, 6], &[3, 5], &[1, 2]]),
            vec![
                vec![Coproduct],
                vec![Coproduct, Identity],
                vec![Product, Identity],
                vec![Product],
            ],
        ),
        (
            tableau([&[3, 6], &[2, 5], &[1, 4]]),
            vec![vec![Coproduct], vec![Product], vec![Coproduct], vec![Product]],
        ),
        (
            tableau([&[5, 6], &[3, 4], &[1, 2]]),
            vec![
                vec![Coproduct],
                vec![Coproduct, Identity],
                vec![Identity, Product],
                vec![Product],
            ],
        ),
    ];
    for (t, expected) in cases {
        assert_eq!(t.to_bialgebra_layers(), expected, "layers of\n{t}");
    }
}

#[test]
fn test_layers_n5() {
    let t = tableau([&[4, 9, 11, 13, 15], &[2, 5, 7, 12, 14], &[1, 3, 6, 8, 10]]);
    assert_eq!(
        layers(&t),
        vec![
            vec![Coproduct],
            vec![Identity, Coproduct],
            vec![Product, Coproduct],
            vec![Identity, Identity, Coproduct],
            vec![Identity, Product, Identity],
            vec![Identity, Coproduct, Identity],
            vec![Product, Identity, Identity],
            vec![Product, Identity],
            vec![Product],
        ]
    );
    assert_eq!(t.height(), 9);
}

#[test]
fn test_operator_display() {
    let names: Vec<String> = [Identity, Product, Coproduct]
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(names, vec!["Id", "P", "C"]);
}

proptest! {
    #[test]
    fn layers_use_every_generator_once(t in tableau_strategy()) {
        let ops: Vec<_> = layers(&t).into_iter().flatten().collect();
        prop_assert_eq!(ops.iter().filter(|op| **op == Product).count(), t.size());
        prop_assert_eq!(ops.iter().filter(|op| **op == Coproduct).count(), t.size());
    }
}

#[test]
fn test_layers_of_every_tableau() {
    assert!(layers(&Tableau::empty()).is_empty());
    for n in 1..=4 {
        for t in RectangularTableaux::new(n).iter() {
            let slices = layers(&t);
            assert_eq!(slices.first(), Some(&vec![Coproduct]));
            assert_eq!(slices.last(), Some(&vec![Product]));
            let ops: Vec<_> = slices.iter().flatten().collect();
            assert_eq!(ops.iter().filter(|op| ***op == Product).count(), n);
            assert_eq!(ops.iter().filter(|op| ***op == Coproduct).count(), n);
        }
    }
}

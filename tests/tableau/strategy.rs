use {
    pc_prographs::{enumerate::RectangularTableaux, tableau::Tableau},
    proptest::prelude::{any, Strategy},
    rand::{rngs::StdRng, SeedableRng},
};

const MAX_SIZE: usize = 8;

pub(crate) fn size_strategy() -> impl Strategy<Value = usize> {
    0..=MAX_SIZE
}

/// A tableau of random size. The same seed always gives the same tableau.
pub(crate) fn tableau_strategy() -> impl Strategy<Value = Tableau> {
    (size_strategy(), any::<u64>()).prop_map(|(n, seed)| {
        RectangularTableaux::new(n).random_element(&mut StdRng::seed_from_u64(seed))
    })
}

pub(crate) fn tableau_of_size_strategy(n: usize) -> impl Strategy<Value = Tableau> {
    any::<u64>().prop_map(move |seed| {
        RectangularTableaux::new(n).random_element(&mut StdRng::seed_from_u64(seed))
    })
}

/// Shorthand for tableaux written out in tests.
pub(crate) fn tableau(rows: [&[usize]; 3]) -> Tableau {
    Tableau::new(rows.iter().map(|r| r.to_vec()).collect()).expect("valid tableau")
}

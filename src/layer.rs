//! Decomposition of a prograph into horizontal slices of generators.
//!
//! Each [`Layer`] is a tensor product of [`Operator`]s, and composing the layers from top to
//! bottom rebuilds the prograph of the tableau. For example, the tableau
//!
//! ```text
//! | 4 | 6 |
//! | 2 | 5 |
//! | 1 | 3 |
//! ```
//!
//! decomposes as `Δ ; (id ● Δ) ; (μ ● id) ; μ`.
use crate::tableau::Tableau;
use std::fmt;

/// A generator in a slice of a prograph.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Operator {
    Identity,
    Product,
    Coproduct,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Identity => write!(f, "Id"),
            Operator::Product => write!(f, "P"),
            Operator::Coproduct => write!(f, "C"),
        }
    }
}

pub type Layer = Vec<Operator>;

/// Greedily slice the prograph of `t`, starting from the wire at infinity.
///
/// A wire entering a coproduct is replaced by the coproduct's two outputs, two adjacent wires
/// entering the same product are replaced by its output, and any other wire passes through.
///
/// # Panics
///
/// If a slice contains only identities, which cannot happen for a valid tableau.
///
/// ```rust
/// use pc_prographs::layer::{layers, Operator::*};
/// use pc_prographs::tableau::Tableau;
/// let t = Tableau::new(vec![vec![3, 6], vec![2, 5], vec![1, 4]]).unwrap();
/// assert_eq!(layers(&t), vec![vec![Coproduct], vec![Product], vec![Coproduct], vec![Product]]);
/// ```
pub fn layers(t: &Tableau) -> Vec<Layer> {
    let coproducts = t.coproducts_outputs();
    let mut products = t.products_inputs();
    let mut remaining_coproducts = t.size();

    let mut result = Vec::new();
    let mut wires = vec![1];
    while !products.is_empty() || remaining_coproducts > 0 {
        let mut layer = Layer::new();
        let mut next = Vec::with_capacity(wires.len() + 1);

        let mut i = 0;
        while i < wires.len() {
            let wire = wires[i];
            let coproduct = (t.row_of(wire) == Some(2))
                .then(|| coproducts.iter().find(|(l, _)| *l == wire + 1))
                .flatten();
            let product = wires
                .get(i + 1)
                .and_then(|&right| products.iter().position(|&p| p == (wire, right)));

            if let Some(&(l, r)) = coproduct {
                layer.push(Operator::Coproduct);
                next.extend([l, r]);
                remaining_coproducts = remaining_coproducts.saturating_sub(1);
                i += 1;
            } else if let Some(p) = product {
                let (_, right) = products.remove(p);
                layer.push(Operator::Product);
                next.push(right + 1);
                i += 2;
            } else {
                layer.push(Operator::Identity);
                next.push(wire);
                i += 1;
            }
        }

        assert!(
            layer.iter().any(|op| *op != Operator::Identity),
            "invalid tableau: no generator can be sliced off"
        );
        result.push(layer);
        wires = next;
    }
    result
}

impl Tableau {
    /// See [`layers`].
    pub fn to_bialgebra_layers(&self) -> Vec<Layer> {
        layers(self)
    }

    /// The number of slices of [`Tableau::to_bialgebra_layers`].
    pub fn height(&self) -> usize {
        layers(self).len()
    }
}

//! # Product-coproduct prographs
//!
//! A *prograph* is a planar network of binary products `μ : 2 → 1` and coproducts
//! `Δ : 1 → 2`, closed at infinity by a single wire. For example:
//!
//! ```text
//!          │ 1
//!         ┌┴┐
//!         │Δ│
//!        ┌┘ └┐
//!      2 │   │ 3
//!        │  ┌┴┐
//!        │  │Δ│
//!        │ ┌┘ └┐
//!        │ │ 4 │ 6
//!       ┌┴─┴┐  │
//!       │ μ │  │
//!       └─┬─┘  │
//!         │ 5  │
//!        ┌┴────┴┐
//!        │  μ   │
//!        └──┬───┘
//!           │ 1
//! ```
//!
//! The wires are labelled in the order they are met by a depth-first walk from the wire at
//! infinity. This prograph has tableau
//!
//! ```text
//! | 4 | 6 |
//! | 2 | 5 |
//! | 1 | 3 |
//! ```
//!
//! Prographs with `n` products and `n` coproducts are in bijection with
//!
//! - [standard Young tableaux](crate::tableau::Tableau) of rectangular shape `(3, n)`, and
//! - [triangulations of the sphere](crate::triangulation::Triangulation) with `n + 2` vertices
//!   grown by point insertion.
//!
//! Flipping a wire of a prograph is an elementary [rotation](crate::rotation) of its tableau,
//! and the flips that decrease the tableau generate a partial order whose unique maximum and
//! minimum are given by [`RectangularTableaux`](crate::enumerate::RectangularTableaux).
//!
//! ```rust
//! use pc_prographs::prelude::*;
//!
//! let all = RectangularTableaux::new(2);
//! assert_eq!(all.len(), 5);
//!
//! let top = all.max_element();
//! assert_eq!(top.reducible_edges(), vec![3, 4, 5]);
//! for child in top.lower_elements() {
//!     assert!(child.upper_elements().contains(&top));
//! }
//!
//! let mut mesh = Triangulation::new(400., 400.);
//! mesh.add_point(200., 150.);
//! assert_eq!(mesh.to_standard_young_tableau().unwrap(), top);
//! ```
pub mod port;
pub mod rotation;
pub mod tableau;

pub mod enumerate;
pub mod layer;
pub mod poset;

pub mod triangulation;

pub mod prelude {
    //! The main types of the crate.
    pub use crate::enumerate::{cardinality, RectangularTableaux};
    pub use crate::layer::{Layer, Operator};
    pub use crate::poset::Intervals;
    pub use crate::port::{EdgeType, Input, Output, Port};
    pub use crate::tableau::{FlipError, Tableau, ValidationError};
    pub use crate::triangulation::{
        Direction, HalfEdgeId, Triangulation, TriangulationError, Viewport,
    };
}

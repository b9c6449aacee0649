//! Rectangular standard Young tableaux with three rows, read as product-coproduct prographs.
//!
//! A [`Tableau`] of size `n` encodes a planar prograph with `n` products and `n` coproducts
//! whose `3n` wires are labelled `1..=3n` (wire `3n + 1` is identified with wire `1`, the wire
//! closing the graph at infinity):
//!
//! - row 0 holds the right inputs of products,
//! - row 1 holds the left inputs of products,
//! - row 2 holds the inputs of coproducts.
//!
//! Flipping a wire gives the covering relation of a poset on tableaux of fixed size, see
//! [`Tableau::flip_down_edge`] and [`Tableau::flip_up_edge`].
mod edge;
mod flip;
mod layout;
mod object;

pub use flip::*;
pub use layout::*;
pub use object::*;

//! Triangulations of the sphere dual to product-coproduct prographs.
//!
//! A [`Triangulation`] is a half-edge mesh. Every triangle is a generator of the prograph:
//! a *product triangle* has half-edges labelled by the two inputs and the output of a product,
//! a *coproduct triangle* by the input and two outputs of a coproduct. An edge of the mesh is a
//! wire, stored as two twin half-edges with the same orientation: one labelled by the output
//! port the wire leaves, the other by the input port it enters.
//!
//! ```text
//!             north (triangle 0, product)
//!      1 ───────────── 0 ───────────── 2
//!             south (triangle 1, coproduct)
//! ```
//!
//! Triangles 0 and 1 are unbounded. The edge `1 → 2` between them is the wire at infinity,
//! which is never flipped.
//!
//! Reading the mesh with [`Triangulation::to_standard_young_tableau`] gives the tableau of the
//! prograph, and the mesh operations agree with those of [`Tableau`](crate::tableau::Tableau):
//! [`Triangulation::flip_down`] realizes [`flip_down_edge`](crate::tableau::Tableau::flip_down_edge)
//! and [`Triangulation::schutzenberger_involution`] realizes
//! [`schutzenberger`](crate::tableau::Tableau::schutzenberger).
pub mod geometry;

mod flip;
mod insert;
mod object;
mod walk;

pub use flip::*;
pub use object::*;

//! Port kinds of the generators of a prograph and the typed edges between them.
//!
//! A prograph has two generators, the product `μ : 2 → 1` and the coproduct `Δ : 1 → 2`:
//!
//! ```text
//!      ──┐                ┌──
//!        μ────        ────Δ
//!      ──┘                └──
//! ```
//!
//! Every wire leaves an [`Output`] port and enters an [`Input`] port, so its [`EdgeType`] is a
//! pair of the two. The edge type alone decides whether a wire can be flipped, and in which
//! direction.
use std::fmt;

/// The port a wire leaves from.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Output {
    /// The single output of a product.
    Product,
    /// The left output of a coproduct.
    LeftCoproduct,
    /// The right output of a coproduct.
    RightCoproduct,
}

/// The port a wire enters.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Input {
    /// The left input of a product.
    LeftProduct,
    /// The right input of a product.
    RightProduct,
    /// The single input of a coproduct.
    Coproduct,
}

/// Either end of a wire.
/// Half-edges of a [`Triangulation`](crate::triangulation::Triangulation) are labelled by ports.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Port {
    Input(Input),
    Output(Output),
}

impl Port {
    pub fn is_output(&self) -> bool {
        matches!(self, Port::Output(_))
    }

    pub fn is_input(&self) -> bool {
        matches!(self, Port::Input(_))
    }

    /// The orientation-reversing involution on ports.
    ///
    /// Reversing a prograph turns products into coproducts and swaps left and right, so
    /// `LeftProduct ↔ RightCoproduct`, `RightProduct ↔ LeftCoproduct` and
    /// `Product ↔ Coproduct`.
    ///
    /// ```rust
    /// use pc_prographs::port::*;
    /// let p = Port::Input(Input::LeftProduct);
    /// assert_eq!(p.involution(), Port::Output(Output::RightCoproduct));
    /// assert_eq!(p.involution().involution(), p);
    /// ```
    pub fn involution(&self) -> Port {
        match self {
            Port::Input(Input::LeftProduct) => Port::Output(Output::RightCoproduct),
            Port::Input(Input::RightProduct) => Port::Output(Output::LeftCoproduct),
            Port::Input(Input::Coproduct) => Port::Output(Output::Product),
            Port::Output(Output::Product) => Port::Input(Input::Coproduct),
            Port::Output(Output::LeftCoproduct) => Port::Input(Input::RightProduct),
            Port::Output(Output::RightCoproduct) => Port::Input(Input::LeftProduct),
        }
    }
}

impl From<Input> for Port {
    fn from(value: Input) -> Self {
        Port::Input(value)
    }
}

impl From<Output> for Port {
    fn from(value: Output) -> Self {
        Port::Output(value)
    }
}

/// The rotation realizing a downward flip, see [`crate::rotation`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum DownRotation {
    RightProduct,
    LeftCoproduct,
    JumpOver,
    LandOver,
}

/// The rotation realizing an upward flip, see [`crate::rotation`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum UpRotation {
    LeftProduct,
    RightCoproduct,
    JumpOver,
    LandOver,
}

/// The type of a wire: the port it leaves and the port it enters.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct EdgeType {
    pub source: Output,
    pub target: Input,
}

impl EdgeType {
    /// The type of the wire closing the prograph at infinity.
    pub const INFINITE: EdgeType = EdgeType::new(Output::Product, Input::Coproduct);

    pub const fn new(source: Output, target: Input) -> Self {
        EdgeType { source, target }
    }

    /// Whether a wire of this type can be flipped at all.
    /// Only wires passing straight through a pair of generators on the same side cannot.
    pub fn is_flipable(&self) -> bool {
        !matches!(
            (self.source, self.target),
            (Output::LeftCoproduct, Input::LeftProduct)
                | (Output::RightCoproduct, Input::RightProduct)
        )
    }

    /// The rotation which flips a wire of this type downwards, if any.
    pub fn down_rotation(&self) -> Option<DownRotation> {
        use Input::*;
        use Output::*;
        match (self.source, self.target) {
            (Product, LeftProduct) => Some(DownRotation::RightProduct),
            (RightCoproduct, Coproduct) => Some(DownRotation::LeftCoproduct),
            (LeftCoproduct, RightProduct) => Some(DownRotation::JumpOver),
            (Product, Coproduct) => Some(DownRotation::LandOver),
            (Product, RightProduct)
            | (LeftCoproduct, LeftProduct)
            | (LeftCoproduct, Coproduct)
            | (RightCoproduct, LeftProduct)
            | (RightCoproduct, RightProduct) => None,
        }
    }

    /// The rotation which flips a wire of this type upwards, if any.
    pub fn up_rotation(&self) -> Option<UpRotation> {
        use Input::*;
        use Output::*;
        match (self.source, self.target) {
            (Product, RightProduct) => Some(UpRotation::LeftProduct),
            (LeftCoproduct, Coproduct) => Some(UpRotation::RightCoproduct),
            (Product, Coproduct) => Some(UpRotation::JumpOver),
            (RightCoproduct, LeftProduct) => Some(UpRotation::LandOver),
            (Product, LeftProduct)
            | (LeftCoproduct, LeftProduct)
            | (LeftCoproduct, RightProduct)
            | (RightCoproduct, Coproduct)
            | (RightCoproduct, RightProduct) => None,
        }
    }

    pub fn is_reducible(&self) -> bool {
        self.down_rotation().is_some()
    }

    pub fn is_raisable(&self) -> bool {
        self.up_rotation().is_some()
    }
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} → {:?}", self.source, self.target)
    }
}

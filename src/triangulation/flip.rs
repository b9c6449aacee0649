use super::object::*;
use crate::port::{EdgeType, Input, Output, Port};

use tracing::trace;

/// The direction of a flip in the order on tableaux.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Down,
    Up,
}

/// Ports of the two triangles produced by a flip. The first two ports relabel the half-edges
/// kept from the old triangles, the third labels the new diagonal.
type Relabelling = ([Port; 3], [Port; 3]);

/// The relabelling of a flip of an edge of type `edge_type`, if it can be flipped that way.
///
/// The first triangle gathers the half-edges at the origin of the flipped edge, the second
/// those at its destination.
fn relabelling(edge_type: EdgeType, direction: Direction) -> Option<Relabelling> {
    use Input::*;
    use Output::*;
    match (direction, edge_type.source, edge_type.target) {
        (Direction::Down, Product, LeftProduct) => Some((
            [LEFT_PRODUCT, PRODUCT, RIGHT_PRODUCT],
            [LEFT_PRODUCT, RIGHT_PRODUCT, PRODUCT],
        )),
        (Direction::Down, RightCoproduct, Coproduct) => Some((
            [LEFT_COPRODUCT, RIGHT_COPRODUCT, COPRODUCT],
            [COPRODUCT, RIGHT_COPRODUCT, LEFT_COPRODUCT],
        )),
        (Direction::Down, LeftCoproduct, RightProduct) => Some((
            [RIGHT_PRODUCT, LEFT_PRODUCT, PRODUCT],
            [RIGHT_COPRODUCT, LEFT_COPRODUCT, COPRODUCT],
        )),
        (Direction::Down, Product, Coproduct) => Some((
            [COPRODUCT, LEFT_COPRODUCT, RIGHT_COPRODUCT],
            [RIGHT_PRODUCT, PRODUCT, LEFT_PRODUCT],
        )),
        (Direction::Up, Product, RightProduct) => Some((
            [RIGHT_PRODUCT, LEFT_PRODUCT, PRODUCT],
            [RIGHT_PRODUCT, PRODUCT, LEFT_PRODUCT],
        )),
        (Direction::Up, LeftCoproduct, Coproduct) => Some((
            [COPRODUCT, LEFT_COPRODUCT, RIGHT_COPRODUCT],
            [RIGHT_COPRODUCT, LEFT_COPRODUCT, COPRODUCT],
        )),
        (Direction::Up, Product, Coproduct) => Some((
            [LEFT_PRODUCT, PRODUCT, RIGHT_PRODUCT],
            [COPRODUCT, RIGHT_COPRODUCT, LEFT_COPRODUCT],
        )),
        (Direction::Up, RightCoproduct, LeftProduct) => Some((
            [LEFT_COPRODUCT, RIGHT_COPRODUCT, COPRODUCT],
            [LEFT_PRODUCT, RIGHT_PRODUCT, PRODUCT],
        )),
        _ => None,
    }
}

/// The ports of the other two half-edges of the triangle of an output half-edge labelled
/// `port`: first the one at the origin of the edge, then the one at its destination.
fn output_flanks(port: Output) -> [Port; 2] {
    match port {
        Output::Product => [LEFT_PRODUCT, RIGHT_PRODUCT],
        Output::LeftCoproduct => [COPRODUCT, RIGHT_COPRODUCT],
        Output::RightCoproduct => [LEFT_COPRODUCT, COPRODUCT],
    }
}

/// As [`output_flanks`], for the triangle of an input half-edge.
fn input_flanks(port: Input) -> [Port; 2] {
    match port {
        Input::LeftProduct => [PRODUCT, RIGHT_PRODUCT],
        Input::RightProduct => [LEFT_PRODUCT, PRODUCT],
        Input::Coproduct => [LEFT_COPRODUCT, RIGHT_COPRODUCT],
    }
}

/// The port of the edge at infinity in the unbounded triangle `k`.
fn infinite_port(k: usize) -> Option<Port> {
    match k {
        0 => Some(PRODUCT),
        1 => Some(COPRODUCT),
        _ => None,
    }
}

impl Triangulation {
    pub fn is_flipable_down(&self, edge: HalfEdgeId) -> bool {
        self.is_flipable(edge, Direction::Down)
    }

    pub fn is_flipable_up(&self, edge: HalfEdgeId) -> bool {
        self.is_flipable(edge, Direction::Up)
    }

    pub fn is_flipable(&self, edge: HalfEdgeId, direction: Direction) -> bool {
        !self.is_infinite(edge)
            && self
                .edge_type(edge)
                .is_ok_and(|t| relabelling(t, direction).is_some())
    }

    /// Flip `edge` so that the tableau of the mesh is covered by the previous one.
    ///
    /// ```rust
    /// use pc_prographs::triangulation::Triangulation;
    /// let mut mesh = Triangulation::new(400., 400.);
    /// mesh.add_point(200., 150.);
    /// let before = mesh.to_standard_young_tableau().unwrap();
    ///
    /// let edge = mesh.edges().find(|&e| mesh.is_flipable_down(e)).unwrap();
    /// mesh.flip_down(edge).unwrap();
    /// let after = mesh.to_standard_young_tableau().unwrap();
    /// assert!(before.lower_elements().contains(&after));
    /// ```
    pub fn flip_down(&mut self, edge: HalfEdgeId) -> Result<(), TriangulationError> {
        self.flip(edge, Direction::Down)
    }

    /// Flip `edge` so that the tableau of the mesh covers the previous one.
    pub fn flip_up(&mut self, edge: HalfEdgeId) -> Result<(), TriangulationError> {
        self.flip(edge, Direction::Up)
    }

    /// Replace the two triangles on either side of `edge` by the two triangles on the other
    /// diagonal of their quadrilateral.
    pub fn flip(
        &mut self,
        edge: HalfEdgeId,
        direction: Direction,
    ) -> Result<(), TriangulationError> {
        let out_id = self.output_side(edge)?;
        if self.is_infinite(out_id) {
            return Err(TriangulationError::InfiniteEdge);
        }
        let edge_type = self.edge_type(out_id)?;
        let (ports_a, ports_b) = relabelling(edge_type, direction).ok_or(match direction {
            Direction::Down => TriangulationError::NotReducible(edge_type),
            Direction::Up => TriangulationError::NotRaisable(edge_type),
        })?;

        let out = *self.half_edge(out_id)?;
        let in_id = out.twin;
        let (ka, kb) = (out_id.triangle, in_id.triangle);
        let [flank_a0, flank_a1] = output_flanks(edge_type.source);
        let [flank_b0, flank_b1] = input_flanks(edge_type.target);

        // Half-edges around the origin `a` and the destination `b` of the flipped edge.
        let at_a = [self.port(ka, flank_a0)?, self.port(kb, flank_b0)?];
        let at_b = [self.port(ka, flank_a1)?, self.port(kb, flank_b1)?];

        let opposite = |id: HalfEdgeId| {
            let h = &self.triangles[id.triangle][id.slot];
            if h.origin == out.origin {
                h.destination
            } else {
                h.origin
            }
        };
        let (c, d) = (opposite(at_a[0]), opposite(at_a[1]));
        if c == d {
            return Err(TriangulationError::Degenerate(out_id));
        }

        // The unbounded triangles must keep their edge at infinity.
        let swap = infinite_port(ka) == Some(flank_a1) || infinite_port(kb) == Some(flank_b0);
        let (pos_a, pos_b) = if swap { (kb, ka) } else { (ka, kb) };

        let moves = [
            (at_a[0], HalfEdgeId::new(pos_a, 0)),
            (at_a[1], HalfEdgeId::new(pos_a, 1)),
            (at_b[0], HalfEdgeId::new(pos_b, 0)),
            (at_b[1], HalfEdgeId::new(pos_b, 1)),
        ];
        let relocate = |id: HalfEdgeId| {
            moves
                .iter()
                .find(|(old, _)| *old == id)
                .map_or(id, |(_, new)| *new)
        };

        let (c, d) = if ports_b[2].is_output() { (c, d) } else { (d, c) };
        let kept = |id: HalfEdgeId, port: Port| {
            let h = self.triangles[id.triangle][id.slot];
            HalfEdge {
                port,
                twin: relocate(h.twin),
                ..h
            }
        };
        let diagonal = |port: Port, twin: usize| HalfEdge {
            origin: c,
            destination: d,
            port,
            twin: HalfEdgeId::new(twin, 2),
        };
        let triangle_a = [
            kept(at_a[0], ports_a[0]),
            kept(at_a[1], ports_a[1]),
            diagonal(ports_a[2], pos_b),
        ];
        let triangle_b = [
            kept(at_b[0], ports_b[0]),
            kept(at_b[1], ports_b[1]),
            diagonal(ports_b[2], pos_a),
        ];

        self.triangles[pos_a] = triangle_a;
        self.triangles[pos_b] = triangle_b;
        for (_, id) in moves {
            let twin = self.triangles[id.triangle][id.slot].twin;
            self.half_edge_mut(twin).twin = id;
        }

        trace!(?direction, %edge_type, a = pos_a, b = pos_b, "flipped edge");
        Ok(())
    }
}

use super::geometry::{self, Point};
use crate::port::{EdgeType, Input, Output, Port};
use crate::tableau::ValidationError;

/// The size of the drawing area of a [`Triangulation`].
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            width: 800.,
            height: 800.,
        }
    }
}

/// The position of a half-edge: a triangle and a slot in it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct HalfEdgeId {
    pub triangle: usize,
    pub slot: usize,
}

impl HalfEdgeId {
    pub fn new(triangle: usize, slot: usize) -> Self {
        HalfEdgeId { triangle, slot }
    }
}

/// One side of an edge of the mesh.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct HalfEdge {
    pub origin: usize,
    pub destination: usize,
    pub port: Port,
    /// The other side of the edge, with the same orientation and the opposite port polarity.
    pub twin: HalfEdgeId,
}

pub type Triangle = [HalfEdge; 3];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TriangulationError {
    #[error("no half-edge at {0:?}")]
    NoSuchEdge(HalfEdgeId),
    #[error("the edge at infinity cannot be flipped")]
    InfiniteEdge,
    #[error("an edge of type {0} cannot be flipped down")]
    NotReducible(EdgeType),
    #[error("an edge of type {0} cannot be flipped up")]
    NotRaisable(EdgeType),
    #[error("the triangles around {0:?} share their opposite vertex")]
    Degenerate(HalfEdgeId),
    #[error("triangle {triangle} has no {port:?} half-edge")]
    MissingPort { triangle: usize, port: Port },
    #[error("unexpected {port:?} half-edge at {edge:?}")]
    UnexpectedPort { edge: HalfEdgeId, port: Port },
    #[error("the walk closed a coproduct that was never opened")]
    Unbalanced,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// A triangulation of the sphere grown by point insertion, see [`crate::triangulation`].
///
/// # Invariants
///
/// - Triangle 0 is a product triangle whose output is the edge at infinity
/// - Triangle 1 is a coproduct triangle whose input is the edge at infinity
/// - Every half-edge is the twin of its twin
#[derive(Clone, PartialEq, Debug)]
pub struct Triangulation {
    pub(super) viewport: Viewport,
    pub(super) points: Vec<Point>,
    pub(super) triangles: Vec<Triangle>,
}

pub(super) const LEFT_PRODUCT: Port = Port::Input(Input::LeftProduct);
pub(super) const RIGHT_PRODUCT: Port = Port::Input(Input::RightProduct);
pub(super) const COPRODUCT: Port = Port::Input(Input::Coproduct);
pub(super) const PRODUCT: Port = Port::Output(Output::Product);
pub(super) const LEFT_COPRODUCT: Port = Port::Output(Output::LeftCoproduct);
pub(super) const RIGHT_COPRODUCT: Port = Port::Output(Output::RightCoproduct);

impl Triangulation {
    /// The triangulation with a single product and a single coproduct: three points on the
    /// horizontal midline of a `width × height` viewport.
    ///
    /// ```rust
    /// use pc_prographs::triangulation::Triangulation;
    /// let mesh = Triangulation::new(400., 400.);
    /// assert_eq!(mesh.points().len(), 3);
    /// assert_eq!(mesh.to_standard_young_tableau().unwrap().rows(), &[vec![3], vec![2], vec![1]]);
    /// ```
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_viewport(Viewport { width, height })
    }

    pub fn with_viewport(viewport: Viewport) -> Self {
        let Viewport { width, height } = viewport;
        let diameter = (width - 60.).min(height - 60.);
        let left = width / 2. - diameter / 2. + 20.;
        let points = vec![
            Point::new(width / 2., height / 2.),
            Point::new(left, height / 2.),
            Point::new(width - left, height / 2.),
        ];

        let half = |origin, destination, port, triangle, slot| HalfEdge {
            origin,
            destination,
            port,
            twin: HalfEdgeId::new(triangle, slot),
        };
        let north = [
            half(1, 0, LEFT_PRODUCT, 1, 1),
            half(0, 2, RIGHT_PRODUCT, 1, 2),
            half(1, 2, PRODUCT, 1, 0),
        ];
        let south = [
            half(1, 2, COPRODUCT, 0, 2),
            half(1, 0, LEFT_COPRODUCT, 0, 0),
            half(0, 2, RIGHT_COPRODUCT, 0, 1),
        ];

        Triangulation {
            viewport,
            points,
            triangles: vec![north, south],
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// The size `n` of the tableau of this triangulation.
    pub fn size(&self) -> usize {
        self.triangles.len() / 2
    }

    pub fn half_edge(&self, id: HalfEdgeId) -> Result<&HalfEdge, TriangulationError> {
        self.triangles
            .get(id.triangle)
            .and_then(|t| t.get(id.slot))
            .ok_or(TriangulationError::NoSuchEdge(id))
    }

    pub(super) fn half_edge_mut(&mut self, id: HalfEdgeId) -> &mut HalfEdge {
        &mut self.triangles[id.triangle][id.slot]
    }

    /// The half-edge of `triangle` labelled by `port`.
    pub fn port(&self, triangle: usize, port: Port) -> Result<HalfEdgeId, TriangulationError> {
        self.triangles
            .get(triangle)
            .and_then(|t| t.iter().position(|h| h.port == port))
            .map(|slot| HalfEdgeId::new(triangle, slot))
            .ok_or(TriangulationError::MissingPort { triangle, port })
    }

    /// The output side of the edge containing `id`.
    pub fn output_side(&self, id: HalfEdgeId) -> Result<HalfEdgeId, TriangulationError> {
        let half = self.half_edge(id)?;
        Ok(if half.port.is_output() { id } else { half.twin })
    }

    /// Every edge of the mesh, given by its output side.
    pub fn edges(&self) -> impl Iterator<Item = HalfEdgeId> + '_ {
        self.triangles.iter().enumerate().flat_map(|(k, t)| {
            t.iter()
                .enumerate()
                .filter(|(_, h)| h.port.is_output())
                .map(move |(slot, _)| HalfEdgeId::new(k, slot))
        })
    }

    /// The output side of an edge from `origin` to `destination`, if any.
    pub fn edge(&self, origin: usize, destination: usize) -> Option<HalfEdgeId> {
        self.edges().find(|&id| {
            let h = &self.triangles[id.triangle][id.slot];
            h.origin == origin && h.destination == destination
        })
    }

    pub fn is_infinite(&self, id: HalfEdgeId) -> bool {
        self.output_side(id)
            .is_ok_and(|id| id.triangle == 0 && self.triangles[0][id.slot].port == PRODUCT)
    }

    /// The type of the wire dual to the edge containing `id`.
    pub fn edge_type(&self, id: HalfEdgeId) -> Result<EdgeType, TriangulationError> {
        let output = self.half_edge(self.output_side(id)?)?;
        let input = self.half_edge(output.twin)?;
        match (output.port, input.port) {
            (Port::Output(source), Port::Input(target)) => Ok(EdgeType::new(source, target)),
            (_, port) => Err(TriangulationError::UnexpectedPort {
                edge: output.twin,
                port,
            }),
        }
    }

    /// The three vertices of `triangle`.
    pub fn vertices(&self, triangle: usize) -> [usize; 3] {
        let [h0, h1, _] = &self.triangles[triangle];
        let third = if h1.origin != h0.origin && h1.origin != h0.destination {
            h1.origin
        } else {
            h1.destination
        };
        [h0.origin, h0.destination, third]
    }

    ////////////////////////////////////////
    // Queries by position

    /// The index of the point closest to `(x, y)`.
    pub fn find_closest_point(&self, x: f64, y: f64) -> Option<usize> {
        let p = Point::new(x, y);
        (0..self.points.len()).min_by(|&i, &j| {
            let di = self.points[i].squared_distance(&p);
            let dj = self.points[j].squared_distance(&p);
            di.total_cmp(&dj)
        })
    }

    /// The finite edge closest to `(x, y)`, by [`geometry::segment_distance`].
    pub fn find_closest_edge(&self, x: f64, y: f64) -> Option<HalfEdgeId> {
        let p = Point::new(x, y);
        self.edges()
            .filter(|&id| !self.is_infinite(id))
            .filter_map(|id| {
                let h = &self.triangles[id.triangle][id.slot];
                let (a, b) = (&self.points[h.origin], &self.points[h.destination]);
                geometry::segment_distance(&p, a, b).map(|d| (id, d))
            })
            .min_by(|(_, d), (_, e)| d.total_cmp(e))
            .map(|(id, _)| id)
    }

    /// The triangle containing `(x, y)`: a finite triangle if one contains it, otherwise the
    /// unbounded triangle on the same side of the horizontal midline.
    pub fn locate(&self, x: f64, y: f64) -> usize {
        let p = Point::new(x, y);
        (2..self.triangles.len())
            .find(|&k| {
                let [a, b, c] = self.vertices(k).map(|v| &self.points[v]);
                geometry::is_point_in_triangle(&p, [a, b, c])
            })
            .unwrap_or(if y <= self.viewport.height / 2. { 0 } else { 1 })
    }
}

impl Default for Triangulation {
    fn default() -> Self {
        Self::with_viewport(Viewport::default())
    }
}

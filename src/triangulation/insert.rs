use super::object::*;
use crate::port::Port;

use super::geometry::Point;
use tracing::debug;

/// A half-edge of a subdivided triangle.
#[derive(Clone, Copy)]
enum Seed {
    /// A half-edge of the old triangle, relabelled. It keeps its twin.
    Kept(usize, Port),
    /// A new half-edge from the inserted point or to it, twinned with the other new half-edge
    /// with the same endpoints.
    Fresh(usize, usize, Port),
}

impl Triangulation {
    /// Insert the point `(x, y)`, splitting the triangle containing it into three.
    /// Returns the index of the split triangle, which is reused for one of the three; the other
    /// two are appended.
    ///
    /// # Panics
    ///
    /// If the located triangle is neither a product nor a coproduct triangle.
    ///
    /// ```rust
    /// use pc_prographs::triangulation::Triangulation;
    /// let mut mesh = Triangulation::new(400., 400.);
    /// assert_eq!(mesh.add_point(200., 150.), 0);
    /// assert_eq!(mesh.triangles().len(), 4);
    /// assert_eq!(
    ///     mesh.to_standard_young_tableau().unwrap().rows(),
    ///     &[vec![4, 6], vec![2, 5], vec![1, 3]]
    /// );
    /// ```
    pub fn add_point(&mut self, x: f64, y: f64) -> usize {
        let located = self.locate(x, y);
        let p = self.points.len();
        self.points.push(Point::new(x, y));

        let seeds = self.subdivision(located, p);
        let old = self.triangles[located];
        let base = self.triangles.len();
        let ids = [located, base, base + 1];

        let mut kept = Vec::with_capacity(3);
        let mut fresh = Vec::with_capacity(6);
        let mut split = Vec::with_capacity(3);
        for (k, seeds) in ids.into_iter().zip(seeds) {
            let triangle = seeds.map(|seed| match seed {
                Seed::Kept(slot, port) => HalfEdge { port, ..old[slot] },
                Seed::Fresh(origin, destination, port) => HalfEdge {
                    origin,
                    destination,
                    port,
                    twin: HalfEdgeId::new(k, 0),
                },
            });
            for (slot, seed) in seeds.iter().enumerate() {
                match seed {
                    Seed::Kept(..) => kept.push(HalfEdgeId::new(k, slot)),
                    Seed::Fresh(..) => fresh.push(HalfEdgeId::new(k, slot)),
                }
            }
            split.push(triangle);
        }

        self.triangles[located] = split[0];
        self.triangles.extend_from_slice(&split[1..]);

        for id in kept {
            let twin = self.triangles[id.triangle][id.slot].twin;
            self.half_edge_mut(twin).twin = id;
        }
        for &id in fresh.iter() {
            let h = self.triangles[id.triangle][id.slot];
            let twin = fresh
                .iter()
                .copied()
                .find(|&other| {
                    let g = &self.triangles[other.triangle][other.slot];
                    other != id && g.origin == h.origin && g.destination == h.destination
                })
                .expect("invalid subdivision: new half-edge without a twin");
            self.half_edge_mut(id).twin = twin;
        }

        debug!(point = p, triangle = located, "inserted point");
        located
    }

    /// The three triangles replacing triangle `k` when `p` is inserted in it.
    ///
    /// # Panics
    ///
    /// If triangle `k` is neither a product nor a coproduct triangle.
    fn subdivision(&self, k: usize, p: usize) -> [[Seed; 3]; 3] {
        let old = &self.triangles[k];
        let slot = |port: Port| {
            old.iter()
                .position(|h| h.port == port)
                .expect("invalid triangulation: triangle misses a port")
        };
        let kept = |port: Port, relabel: Port| Seed::Kept(slot(port), relabel);
        let end = |port: Port| &old[slot(port)];
        use Seed::Fresh;

        let is_product = old.iter().any(|h| h.port == PRODUCT);
        match (k, is_product) {
            (0, _) => {
                let (left, right) = (end(LEFT_PRODUCT), end(RIGHT_PRODUCT));
                let x = left.destination;
                [
                    [
                        Fresh(left.origin, p, LEFT_PRODUCT),
                        Fresh(p, right.destination, RIGHT_PRODUCT),
                        kept(PRODUCT, PRODUCT),
                    ],
                    [
                        kept(LEFT_PRODUCT, LEFT_PRODUCT),
                        Fresh(left.origin, p, PRODUCT),
                        Fresh(x, p, RIGHT_PRODUCT),
                    ],
                    [
                        Fresh(p, right.destination, RIGHT_COPRODUCT),
                        kept(RIGHT_PRODUCT, COPRODUCT),
                        Fresh(x, p, LEFT_COPRODUCT),
                    ],
                ]
            }
            (1, _) => {
                let (left, right) = (end(LEFT_COPRODUCT), end(RIGHT_COPRODUCT));
                let x = left.destination;
                [
                    [
                        kept(COPRODUCT, COPRODUCT),
                        Fresh(left.origin, p, LEFT_COPRODUCT),
                        Fresh(p, right.destination, RIGHT_COPRODUCT),
                    ],
                    [
                        kept(RIGHT_COPRODUCT, RIGHT_COPRODUCT),
                        Fresh(p, right.destination, COPRODUCT),
                        Fresh(p, x, LEFT_COPRODUCT),
                    ],
                    [
                        Fresh(left.origin, p, LEFT_PRODUCT),
                        kept(LEFT_COPRODUCT, PRODUCT),
                        Fresh(p, x, RIGHT_PRODUCT),
                    ],
                ]
            }
            (_, true) => {
                let (left, right) = (end(LEFT_PRODUCT), end(RIGHT_PRODUCT));
                [
                    [
                        kept(LEFT_PRODUCT, LEFT_PRODUCT),
                        Fresh(left.destination, p, RIGHT_PRODUCT),
                        Fresh(left.origin, p, PRODUCT),
                    ],
                    [
                        kept(RIGHT_PRODUCT, COPRODUCT),
                        Fresh(left.destination, p, LEFT_COPRODUCT),
                        Fresh(p, right.destination, RIGHT_COPRODUCT),
                    ],
                    [
                        Fresh(left.origin, p, LEFT_PRODUCT),
                        Fresh(p, right.destination, RIGHT_PRODUCT),
                        kept(PRODUCT, PRODUCT),
                    ],
                ]
            }
            (_, false) => {
                let (input, left) = (end(COPRODUCT), end(LEFT_COPRODUCT));
                [
                    [
                        kept(COPRODUCT, COPRODUCT),
                        Fresh(input.origin, p, LEFT_COPRODUCT),
                        Fresh(p, input.destination, RIGHT_COPRODUCT),
                    ],
                    [
                        Fresh(p, input.destination, COPRODUCT),
                        Fresh(p, left.destination, LEFT_COPRODUCT),
                        kept(RIGHT_COPRODUCT, RIGHT_COPRODUCT),
                    ],
                    [
                        Fresh(input.origin, p, LEFT_PRODUCT),
                        Fresh(p, left.destination, RIGHT_PRODUCT),
                        kept(LEFT_COPRODUCT, PRODUCT),
                    ],
                ]
            }
        }
    }
}

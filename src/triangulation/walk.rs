use super::geometry::Point;
use super::object::*;
use crate::port::{Input, Port};
use crate::rotation::Rows;
use crate::tableau::Tableau;

impl Triangulation {
    /// Read the tableau of the prograph dual to the mesh.
    ///
    /// The walk starts on the left output of the unbounded coproduct and labels the wires
    /// `2, 3, ...` as it crosses them, keeping a stack of coproducts whose right output is
    /// still to be visited:
    ///
    /// - a wire entering the left input of a product goes to row 1, and the walk resumes
    ///   from the right output of the last open coproduct,
    /// - a wire entering the right input of a product goes to row 0, and the walk continues
    ///   from the product's output,
    /// - a wire entering a coproduct goes to row 2, and the walk continues from its left
    ///   output.
    pub fn to_standard_young_tableau(&self) -> Result<Tableau, TriangulationError> {
        let n = self.size();
        let mut rows: Rows = [vec![], vec![], vec![1]];
        let mut stack = vec![1];
        let mut current = self.port(1, LEFT_COPRODUCT)?;

        let mut label = 2;
        while rows[0].len() < n {
            if label > 3 * n {
                return Err(TriangulationError::Unbalanced);
            }
            let twin = self.half_edge(current)?.twin;
            let k = twin.triangle;
            current = match self.half_edge(twin)?.port {
                Port::Input(Input::LeftProduct) => {
                    rows[1].push(label);
                    let open = stack.pop().ok_or(TriangulationError::Unbalanced)?;
                    self.port(open, RIGHT_COPRODUCT)?
                }
                Port::Input(Input::RightProduct) => {
                    rows[0].push(label);
                    self.port(k, PRODUCT)?
                }
                Port::Input(Input::Coproduct) => {
                    rows[2].push(label);
                    stack.push(k);
                    self.port(k, LEFT_COPRODUCT)?
                }
                port @ Port::Output(_) => {
                    return Err(TriangulationError::UnexpectedPort { edge: twin, port })
                }
            };
            label += 1;
        }

        Ok(Tableau::from_rows(rows)?)
    }

    /// Rotate the mesh by a half turn and reverse every edge, turning products into coproducts.
    /// The tableau of the result is the Schützenberger involution of the tableau of `self`.
    ///
    /// ```rust
    /// use pc_prographs::triangulation::Triangulation;
    /// let mut mesh = Triangulation::new(400., 400.);
    /// mesh.add_point(200., 150.);
    /// mesh.add_point(150., 190.);
    /// let t = mesh.to_standard_young_tableau().unwrap();
    ///
    /// mesh.schutzenberger_involution();
    /// assert_eq!(mesh.to_standard_young_tableau().unwrap(), t.schutzenberger());
    /// ```
    pub fn schutzenberger_involution(&mut self) {
        let Viewport { width, height } = self.viewport;
        for p in self.points.iter_mut() {
            *p = Point::new(width - p.x, height - p.y);
        }

        self.triangles.swap(0, 1);
        let unbounded = |k: usize| match k {
            0 => 1,
            1 => 0,
            k => k,
        };
        for half in self.triangles.iter_mut().flatten() {
            std::mem::swap(&mut half.origin, &mut half.destination);
            half.port = half.port.involution();
            half.twin.triangle = unbounded(half.twin.triangle);
        }
    }
}

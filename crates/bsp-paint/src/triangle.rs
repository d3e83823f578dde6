//! Triangles with per-vertex shading normals.

use nalgebra::{Matrix4, Point3, Vector3};

use crate::transform::{transform_direction, transform_point};
use crate::{DEGENERACY_EPSILON, Plane, Side};

/// A triangle with one shading normal per vertex.
///
/// Normal `i` is semantically associated with vertex `i`: every operation
/// that reorders or splits vertices carries the normals along 1:1:1 with the
/// winding. The winding order determines the face normal via the right-hand
/// rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    vertices: [Point3<f32>; 3],
    normals: [Vector3<f32>; 3],
}

impl Triangle {
    /// Creates a triangle from three vertices and their shading normals.
    pub fn new(vertices: [Point3<f32>; 3], normals: [Vector3<f32>; 3]) -> Self {
        Self { vertices, normals }
    }

    /// Returns the three vertices.
    #[inline]
    pub fn vertices(&self) -> &[Point3<f32>; 3] {
        &self.vertices
    }

    /// Returns the three per-vertex shading normals.
    #[inline]
    pub fn normals(&self) -> &[Vector3<f32>; 3] {
        &self.normals
    }

    /// Computes the (unnormalized) face normal: `(b - a) × (c - a)`.
    pub fn face_normal(&self) -> Vector3<f32> {
        let [a, b, c] = &self.vertices;
        (b - a).cross(&(c - a))
    }

    /// Computes the unit face normal.
    ///
    /// Returns `None` if the triangle has (near) zero area.
    pub fn unit_normal(&self) -> Option<Vector3<f32>> {
        let n = self.face_normal();
        let len = n.norm();
        if len > f32::EPSILON { Some(n / len) } else { None }
    }

    /// Computes the triangle's area.
    pub fn area(&self) -> f32 {
        self.face_normal().norm() / 2.0
    }

    /// Computes the centroid.
    pub fn centroid(&self) -> Point3<f32> {
        let [a, b, c] = &self.vertices;
        Point3::from((a.coords + b.coords + c.coords) / 3.0)
    }

    /// Returns the supporting plane of this triangle.
    ///
    /// # Panics
    /// Panics if the vertices are collinear. Degenerate triangles are never
    /// stored in a tree, so faces pulled from one always have a plane.
    pub fn plane(&self) -> Plane {
        let [a, b, c] = self.vertices;
        Plane::from_three_points(a, b, c)
    }

    /// Returns `true` if every vertex and normal coordinate is finite.
    ///
    /// Non-finite triangles are discarded at insertion so a malformed mesh
    /// degrades to an empty tree instead of poisoning plane derivation.
    pub fn is_finite(&self) -> bool {
        self.vertices
            .iter()
            .all(|v| v.coords.iter().all(|c| c.is_finite()))
            && self.normals.iter().all(|n| n.iter().all(|c| c.is_finite()))
    }

    /// Returns `true` if any edge is shorter than [`DEGENERACY_EPSILON`].
    ///
    /// Such slivers are discarded at insertion and after splitting.
    pub fn is_degenerate(&self) -> bool {
        let [a, b, c] = &self.vertices;
        (b - a).norm() < DEGENERACY_EPSILON
            || (c - b).norm() < DEGENERACY_EPSILON
            || (a - c).norm() < DEGENERACY_EPSILON
    }

    /// Classifies the whole triangle as in front of or behind a plane.
    ///
    /// Sums the signed distances of the three vertices; at least
    /// [`DEGENERACY_EPSILON`] in total means front, anything less means
    /// back. This is a cheap "mostly on this side" heuristic, not an
    /// area-weighted or max-distance classification, and a sliver crossing
    /// the plane can land whole on its majority side.
    pub fn side_of(&self, plane: &Plane) -> Side {
        let sum: f32 = self
            .vertices
            .iter()
            .map(|v| plane.signed_distance(*v))
            .sum();
        if sum >= DEGENERACY_EPSILON {
            Side::Front
        } else {
            Side::Back
        }
    }

    /// Applies an affine transform: positions with w = 1, shading normals
    /// with w = 0 (see [`transform_direction`] for the non-uniform-scale
    /// caveat).
    pub fn transformed(&self, m: &Matrix4<f32>) -> Self {
        Self {
            vertices: self.vertices.map(|v| transform_point(m, v)),
            normals: self.normals.map(|n| transform_direction(m, n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Translation3;

    fn xy_triangle() -> Triangle {
        Triangle::new(
            [
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
                Point3::new(0.0, 2.0, 0.0),
            ],
            [Vector3::new(0.0, 0.0, 1.0); 3],
        )
    }

    #[test]
    fn face_normal_follows_right_hand_rule() {
        let tri = xy_triangle();
        assert_relative_eq!(tri.unit_normal().unwrap(), Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn area_and_centroid() {
        let tri = xy_triangle();
        assert_relative_eq!(tri.area(), 2.0);
        assert_relative_eq!(tri.centroid(), Point3::new(2.0 / 3.0, 2.0 / 3.0, 0.0));
    }

    #[test]
    fn degeneracy_detects_short_edges() {
        assert!(!xy_triangle().is_degenerate());

        let sliver = Triangle::new(
            [
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1e-6, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            [Vector3::new(0.0, 0.0, 1.0); 3],
        );
        assert!(sliver.is_degenerate());
    }

    #[test]
    fn side_of_routes_by_distance_sum() {
        let plane = Plane::from_point_and_normal(Point3::origin(), Vector3::new(0.0, 0.0, 1.0));

        let front = Triangle::new(
            [
                Point3::new(0.0, 0.0, 1.0),
                Point3::new(1.0, 0.0, 1.0),
                Point3::new(0.0, 1.0, 1.0),
            ],
            [Vector3::new(0.0, 0.0, 1.0); 3],
        );
        assert_eq!(front.side_of(&plane), Side::Front);

        let back = Triangle::new(
            [
                Point3::new(0.0, 0.0, -1.0),
                Point3::new(1.0, 0.0, -1.0),
                Point3::new(0.0, 1.0, -1.0),
            ],
            [Vector3::new(0.0, 0.0, 1.0); 3],
        );
        assert_eq!(back.side_of(&plane), Side::Back);
    }

    #[test]
    fn side_of_invariant_to_vertex_rotation() {
        let plane = Plane::from_point_and_normal(Point3::origin(), Vector3::new(0.0, 1.0, 0.0));
        let tri = Triangle::new(
            [
                Point3::new(0.0, 2.0, 0.0),
                Point3::new(1.0, -0.5, 0.0),
                Point3::new(0.0, 0.1, 1.0),
            ],
            [Vector3::new(0.0, 1.0, 0.0); 3],
        );
        let [a, b, c] = *tri.vertices();
        let [na, nb, nc] = *tri.normals();
        // Cyclic rotations keep the winding (and thus the face normal).
        let rotated_once = Triangle::new([b, c, a], [nb, nc, na]);
        let rotated_twice = Triangle::new([c, a, b], [nc, na, nb]);

        assert_eq!(tri.side_of(&plane), rotated_once.side_of(&plane));
        assert_eq!(tri.side_of(&plane), rotated_twice.side_of(&plane));
    }

    #[test]
    fn transformed_moves_points_but_not_normals() {
        let m = Translation3::new(0.0, 10.0, 0.0).to_homogeneous();
        let tri = xy_triangle().transformed(&m);

        assert_relative_eq!(tri.vertices()[0], Point3::new(0.0, 10.0, 0.0));
        assert_relative_eq!(tri.normals()[0], Vector3::new(0.0, 0.0, 1.0));
    }
}

//! Plane representation and the splitting tolerances.

use nalgebra::{Point3, Vector3};

/// On-plane tolerance (applied to signed distances).
///
/// Segment endpoints within this distance of a plane are treated as lying on
/// it. Also the radius within which two intersection points on the same
/// triangle count as duplicates.
pub const ON_PLANE_EPSILON: f32 = 1e-3;

/// Degeneracy tolerance.
///
/// Triangles with any edge shorter than this are discarded rather than
/// stored. The same magnitude biases whole-triangle classification: a
/// triangle whose summed vertex distances fall below it routes to the back.
pub const DEGENERACY_EPSILON: f32 = 1e-5;

/// Same-side tolerance.
///
/// An edge whose endpoint-distance product exceeds this lies strictly on one
/// side of the plane and cannot cross it.
pub const SAME_SIDE_EPSILON: f32 = 0.0;

/// Which side of a splitting plane a whole triangle is routed to.
///
/// There is no `Coplanar` variant: coplanar residue is either filtered out
/// as degenerate or routed back by the classification bias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The positive side of the plane normal.
    Front,
    /// The negative side of the plane normal.
    Back,
}

/// A plane in 3D space: `normal · p + offset = 0` for points `p` on the plane.
///
/// Planes are always derived on demand from a triangle's vertices; the tree
/// never stores one independently of its defining face.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    normal: Vector3<f32>,
    offset: f32,
}

impl Plane {
    /// Creates a plane from a point on the plane and a normal vector.
    /// The normal is normalized automatically.
    ///
    /// # Panics
    /// Panics if the normal has zero length.
    pub fn from_point_and_normal(point: Point3<f32>, normal: Vector3<f32>) -> Self {
        let norm = normal.norm();
        assert!(norm > f32::EPSILON, "plane normal cannot be zero");
        let unit = normal / norm;
        Self {
            offset: -unit.dot(&point.coords),
            normal: unit,
        }
    }

    /// Creates a plane from three non-collinear points.
    ///
    /// The normal direction follows the right-hand rule on the winding:
    /// `(b - a) × (c - a)`.
    ///
    /// # Panics
    /// Panics if the points are collinear (or nearly so).
    pub fn from_three_points(a: Point3<f32>, b: Point3<f32>, c: Point3<f32>) -> Self {
        let ab = b - a;
        let ac = c - a;
        Self::from_point_and_normal(a, ab.cross(&ac))
    }

    /// Returns the unit normal vector of the plane.
    #[inline]
    pub fn normal(&self) -> Vector3<f32> {
        self.normal
    }

    /// Returns the plane offset `D` in `N · p + D = 0`.
    #[inline]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Computes the signed distance from a point to the plane.
    /// Positive in front (same side as the normal), negative behind.
    #[inline]
    pub fn signed_distance(&self, point: Point3<f32>) -> f32 {
        self.normal.dot(&point.coords) + self.offset
    }

    /// Returns a new plane facing the opposite direction.
    #[inline]
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            offset: -self.offset,
        }
    }
}

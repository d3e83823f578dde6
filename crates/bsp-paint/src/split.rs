//! Triangle/plane splitting with interpolated shading normals.
//!
//! A non-degenerate triangle that straddles a plane crosses exactly two of
//! its three edges. The crossing points (with normals interpolated along the
//! crossed edges) re-triangulate the face into three sub-triangles, keyed on
//! which pair of edges crossed.

use nalgebra::{Point3, Vector3};

use crate::{Face, ON_PLANE_EPSILON, Plane, SAME_SIDE_EPSILON, Side, Triangle};

const EDGE_AB: u8 = 0b001;
const EDGE_BC: u8 = 0b010;
const EDGE_CA: u8 = 0b100;

/// Intersection points collected while testing one triangle against a plane.
#[derive(Debug, Default)]
struct Crossings {
    points: Vec<Point3<f32>>,
    normals: Vec<Vector3<f32>>,
    /// Bit per edge (ab, bc, ca) that contributed an intersection.
    edges: u8,
}

impl Crossings {
    /// Records an intersection unless one within [`ON_PLANE_EPSILON`] of it
    /// already exists. Returns whether the point was added.
    fn push_unique(&mut self, point: Point3<f32>, normal: Vector3<f32>) -> bool {
        if self.points.iter().any(|p| (point - p).norm() < ON_PLANE_EPSILON) {
            return false;
        }
        self.points.push(point);
        self.normals.push(normal);
        true
    }
}

/// Intersects one edge with the plane.
///
/// Policy:
/// - both endpoints on-plane (within [`ON_PLANE_EPSILON`]): the whole edge
///   lies on the plane, nothing to record;
/// - one endpoint on-plane: that endpoint, with its own normal, is the
///   intersection — no interpolated crossing is computed;
/// - both endpoints strictly on the same side (distance product above
///   [`SAME_SIDE_EPSILON`]): no intersection;
/// - otherwise the crossing at `t = d1 / (d1 - d2)`, with position and
///   normal interpolated linearly.
///
/// Returns whether a point was recorded (duplicates are not).
fn segment_crossing(
    plane: &Plane,
    out: &mut Crossings,
    p1: Point3<f32>,
    n1: Vector3<f32>,
    p2: Point3<f32>,
    n2: Vector3<f32>,
) -> bool {
    let d1 = plane.signed_distance(p1);
    let d2 = plane.signed_distance(p2);
    let p1_on_plane = d1.abs() < ON_PLANE_EPSILON;
    let p2_on_plane = d2.abs() < ON_PLANE_EPSILON;

    if p1_on_plane && p2_on_plane {
        return false;
    }
    if p1_on_plane {
        return out.push_unique(p1, n1);
    }
    if p2_on_plane {
        return out.push_unique(p2, n2);
    }
    if d1 * d2 > SAME_SIDE_EPSILON {
        return false;
    }

    let t = d1 / (d1 - d2);
    out.push_unique(p1 + t * (p2 - p1), n1 + t * (n2 - n1))
}

/// Tests the triangle's three edges against the plane, in winding order.
fn triangle_crossings(plane: &Plane, triangle: &Triangle) -> Crossings {
    let [a, b, c] = *triangle.vertices();
    let [na, nb, nc] = *triangle.normals();

    let mut out = Crossings::default();
    if segment_crossing(plane, &mut out, a, na, b, nb) {
        out.edges |= EDGE_AB;
    }
    if segment_crossing(plane, &mut out, b, nb, c, nc) {
        out.edges |= EDGE_BC;
    }
    if segment_crossing(plane, &mut out, c, nc, a, na) {
        out.edges |= EDGE_CA;
    }
    out
}

/// Splits a face against a plane into 1 or 3 candidate sub-faces.
///
/// With exactly two intersection points the face is re-triangulated around
/// the vertex isolated by the crossed edge pair; every sub-face inherits the
/// interpolated normals at the new vertices and the source material handle.
/// With fewer than two intersections the face passes through unchanged.
///
/// Candidates are not filtered or classified here; see [`partition_face`].
fn split_face(plane: &Plane, face: &Face) -> Vec<Face> {
    let crossings = triangle_crossings(plane, face.triangle());
    if crossings.points.len() != 2 {
        return vec![face.clone()];
    }

    let [a, b, c] = *face.triangle().vertices();
    let [na, nb, nc] = *face.triangle().normals();
    let (i1, i2) = (crossings.points[0], crossings.points[1]);
    let (m1, m2) = (crossings.normals[0], crossings.normals[1]);

    // Two recorded points mean exactly two crossed edges; the pair
    // determines which vertex sits alone on its side of the plane.
    let triangles = match crossings.edges {
        // ab and bc crossed: b isolated.
        0b011 => [
            ([a, i1, i2], [na, m1, m2]),
            ([i1, b, i2], [m1, nb, m2]),
            ([a, i2, c], [na, m2, nc]),
        ],
        // ab and ca crossed: a isolated.
        0b101 => [
            ([a, i1, i2], [na, m1, m2]),
            ([i1, b, i2], [m1, nb, m2]),
            ([i2, b, c], [m2, nb, nc]),
        ],
        // bc and ca crossed: c isolated.
        0b110 => [
            ([a, b, i1], [na, nb, m1]),
            ([a, i1, i2], [na, m1, m2]),
            ([i2, i1, c], [m2, m1, nc]),
        ],
        _ => return vec![face.clone()],
    };

    triangles
        .into_iter()
        .map(|(vertices, normals)| Face::new(Triangle::new(vertices, normals), face.material()))
        .collect()
}

/// Splits a face against the splitting plane, filters degenerate residue,
/// and routes every surviving candidate whole to the front or back list.
///
/// Candidates are classified against the original splitting plane and never
/// re-split at this stage.
pub(crate) fn partition_face(
    plane: &Plane,
    face: Face,
    front: &mut Vec<Face>,
    back: &mut Vec<Face>,
) {
    for candidate in split_face(plane, &face) {
        if candidate.triangle().is_degenerate() {
            continue;
        }
        match candidate.side_of(plane) {
            Side::Front => front.push(candidate),
            Side::Back => back.push(candidate),
        }
    }
}

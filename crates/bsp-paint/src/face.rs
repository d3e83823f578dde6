//! Faces: triangles tagged with a material handle.

use nalgebra::Point3;

use crate::{MaterialId, Plane, Side, Triangle};

/// A world-space triangle plus the handle of the material it is shaded with.
///
/// Splitting a face produces sub-faces that all carry the same handle; the
/// referenced material data is owned by the [`MaterialStore`] and never
/// copied.
///
/// [`MaterialStore`]: crate::MaterialStore
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    triangle: Triangle,
    material: MaterialId,
}

impl Face {
    /// Creates a face from a triangle and a material handle.
    pub fn new(triangle: Triangle, material: MaterialId) -> Self {
        Self { triangle, material }
    }

    /// Returns the geometry of this face.
    #[inline]
    pub fn triangle(&self) -> &Triangle {
        &self.triangle
    }

    /// Returns the material handle.
    #[inline]
    pub fn material(&self) -> MaterialId {
        self.material
    }

    /// Returns the supporting plane of this face's triangle.
    ///
    /// # Panics
    /// Panics if the triangle is degenerate (see [`Triangle::plane`]).
    #[inline]
    pub fn plane(&self) -> Plane {
        self.triangle.plane()
    }

    /// Returns the centroid of this face's triangle.
    #[inline]
    pub fn centroid(&self) -> Point3<f32> {
        self.triangle.centroid()
    }

    /// Classifies the whole face against a plane (see [`Triangle::side_of`]).
    #[inline]
    pub fn side_of(&self, plane: &Plane) -> Side {
        self.triangle.side_of(plane)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    #[test]
    fn face_keeps_its_handle() {
        let mut store = crate::MaterialStore::new();
        let id = store.add(crate::Material::default());

        let face = Face::new(
            Triangle::new(
                [
                    Point3::new(0.0, 0.0, 0.0),
                    Point3::new(1.0, 0.0, 0.0),
                    Point3::new(0.0, 1.0, 0.0),
                ],
                [Vector3::new(0.0, 0.0, 1.0); 3],
            ),
            id,
        );

        assert_eq!(face.material(), id);
        assert_eq!(face.triangle().vertices()[1], Point3::new(1.0, 0.0, 0.0));
    }
}

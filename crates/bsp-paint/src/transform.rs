//! Affine transform application for positions and directions.

use nalgebra::{Matrix4, Point3, Vector3};

/// Applies a 4×4 affine transform to a position (homogeneous w = 1).
#[inline]
pub fn transform_point(m: &Matrix4<f32>, p: Point3<f32>) -> Point3<f32> {
    m.transform_point(&p)
}

/// Applies a 4×4 affine transform to a direction (homogeneous w = 0),
/// i.e. with the translation part stripped.
///
/// Used for normals. The translation-stripped forward transform is exact for
/// rotation, uniform scale, and translation. Under non-uniform scale the
/// correct normal transform would be the inverse transpose; this function
/// intentionally does not apply it and normals come out skewed for such
/// transforms.
#[inline]
pub fn transform_direction(m: &Matrix4<f32>, v: Vector3<f32>) -> Vector3<f32> {
    m.transform_vector(&v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Rotation3, Translation3, Vector3};

    #[test]
    fn point_picks_up_translation() {
        let m = Translation3::new(1.0, 2.0, 3.0).to_homogeneous();
        let p = transform_point(&m, Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p, Point3::new(2.0, 2.0, 3.0));
    }

    #[test]
    fn direction_ignores_translation() {
        let m = Translation3::new(1.0, 2.0, 3.0).to_homogeneous();
        let v = transform_direction(&m, Vector3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(v, Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn direction_rotates_with_the_point() {
        let m = (Translation3::new(5.0, 0.0, 0.0).to_homogeneous())
            * Rotation3::from_axis_angle(&Vector3::z_axis(), std::f32::consts::FRAC_PI_2)
                .to_homogeneous();
        let v = transform_direction(&m, Vector3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(v, Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-6);
    }
}

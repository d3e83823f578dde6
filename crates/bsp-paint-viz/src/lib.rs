//! Scene assembly, camera, and rasterization glue for the bsp-paint demo.
//!
//! Everything here is the "peripheral" side of the renderer: procedural
//! meshes, a material palette, an orbit camera that produces the per-frame
//! view transform, and a [`FaceVisitor`] that rasterizes emitted faces with
//! macroquad. The BSP core stays pixel-free.

use bsp_paint::{Face, FaceVisitor, MaterialStore, Triangle};
use macroquad::models::{Mesh, Vertex, draw_mesh};
use macroquad::prelude::*;
use nalgebra::{Isometry3, Matrix4, Point3, Vector3};

/// Two triangles forming a `width` × `depth` quad on the XZ plane, centered
/// at the origin, shading normals +Y.
pub fn ground_quad(width: f32, depth: f32) -> Vec<Triangle> {
    let hx = width / 2.0;
    let hz = depth / 2.0;
    let up = Vector3::y();

    vec![
        Triangle::new(
            [
                Point3::new(-hx, 0.0, hz),
                Point3::new(hx, 0.0, -hz),
                Point3::new(-hx, 0.0, -hz),
            ],
            [up; 3],
        ),
        Triangle::new(
            [
                Point3::new(hx, 0.0, hz),
                Point3::new(hx, 0.0, -hz),
                Point3::new(-hx, 0.0, hz),
            ],
            [up; 3],
        ),
    ]
}

/// A UV sphere of the given radius centered at the origin.
///
/// `segments` latitude bands and `2 * segments` longitude bands; shading
/// normals point radially outward. The degenerate slivers this produces at
/// the poles are filtered out at insertion.
pub fn uv_sphere(radius: f32, segments: usize) -> Vec<Triangle> {
    use std::f32::consts::PI;

    let step = PI / segments as f32;
    let vertex_at = |theta: f32, phi: f32| {
        Point3::new(
            radius * theta.cos() * phi.sin(),
            radius * theta.sin() * phi.sin(),
            radius * phi.cos(),
        )
    };
    let normal_of = |p: Point3<f32>| {
        let n = p.coords.norm();
        if n > f32::EPSILON { p.coords / n } else { Vector3::z() }
    };

    let mut triangles = Vec::with_capacity(segments * segments * 4);
    for band in 0..segments {
        let phi = band as f32 * step;
        for slice in 0..2 * segments {
            let theta = slice as f32 * step;

            let p00 = vertex_at(theta, phi);
            let p10 = vertex_at(theta + step, phi);
            let p01 = vertex_at(theta, phi + step);
            let p11 = vertex_at(theta + step, phi + step);

            triangles.push(Triangle::new(
                [p00, p10, p01],
                [normal_of(p00), normal_of(p10), normal_of(p01)],
            ));
            triangles.push(Triangle::new(
                [p01, p10, p11],
                [normal_of(p01), normal_of(p10), normal_of(p11)],
            ));
        }
    }
    triangles
}

/// Rasterizes emitted faces as single-triangle macroquad meshes, colored
/// with the face material's diffuse RGBA.
///
/// Translucency works because the tree hands faces over back-to-front:
/// macroquad alpha-blends each triangle over what is already drawn.
pub struct RenderVisitor<'a> {
    materials: &'a MaterialStore,
}

impl<'a> RenderVisitor<'a> {
    pub fn new(materials: &'a MaterialStore) -> Self {
        Self { materials }
    }
}

impl FaceVisitor for RenderVisitor<'_> {
    fn visit(&mut self, face: &Face) {
        let [r, g, b, a] = self.materials[face.material()].diffuse;
        let color = Color::new(r, g, b, a);

        let vertices = face
            .triangle()
            .vertices()
            .iter()
            .map(|p| Vertex::new2(vec3(p.x, p.y, p.z), vec2(0.0, 0.0), color))
            .collect();

        draw_mesh(&Mesh {
            vertices,
            indices: vec![0, 1, 2],
            texture: None,
        });
    }
}

/// Simple orbit camera: mouse drag to rotate, scroll to zoom, arrows to nudge.
pub struct OrbitCamera {
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub target: Vec3,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl OrbitCamera {
    pub fn new(distance: f32, yaw: f32, pitch: f32) -> Self {
        Self {
            distance,
            yaw,
            pitch,
            target: vec3(0.0, 0.0, 0.0),
            zoom_speed: 1.0,
            min_distance: 2.0,
            max_distance: 50.0,
        }
    }

    /// Updates camera state from user input.
    pub fn update(&mut self) {
        if is_mouse_button_down(MouseButton::Left) {
            let delta = mouse_delta_position();
            self.yaw -= delta.x * 2.0;
            self.pitch -= delta.y * 2.0;
        }
        // Keep away from the poles to avoid a degenerate up vector.
        self.pitch = self.pitch.clamp(-1.5, 1.5);

        let scroll = mouse_wheel().1;
        self.distance -= scroll * self.zoom_speed;
        self.distance = self.distance.clamp(self.min_distance, self.max_distance);

        if is_key_down(KeyCode::Left) {
            self.yaw += 0.02;
        }
        if is_key_down(KeyCode::Right) {
            self.yaw -= 0.02;
        }
        if is_key_down(KeyCode::Up) {
            self.pitch += 0.02;
        }
        if is_key_down(KeyCode::Down) {
            self.pitch -= 0.02;
        }
    }

    /// Returns the camera's world position.
    pub fn position(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.target + vec3(x, y, z)
    }

    /// Converts to macroquad's Camera3D for rasterization.
    pub fn to_camera3d(&self) -> Camera3D {
        Camera3D {
            position: self.position(),
            up: vec3(0.0, 1.0, 0.0),
            target: self.target,
            ..Default::default()
        }
    }

    /// The world-to-view transform handed to `BspTree::draw` each frame.
    ///
    /// Must agree with [`to_camera3d`](Self::to_camera3d) so that the
    /// emission order matches what is on screen.
    pub fn view_matrix(&self) -> Matrix4<f32> {
        let pos = self.position();
        Isometry3::look_at_rh(
            &Point3::new(pos.x, pos.y, pos.z),
            &Point3::new(self.target.x, self.target.y, self.target.z),
            &Vector3::y(),
        )
        .to_homogeneous()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ground_quad_faces_up() {
        let quad = ground_quad(10.0, 10.0);
        assert_eq!(quad.len(), 2);
        for tri in &quad {
            let n = tri.unit_normal().unwrap();
            assert!(n.y > 0.99, "quad triangle should face +Y, got {n}");
        }
    }

    #[test]
    fn uv_sphere_normals_are_radial() {
        let sphere = uv_sphere(0.5, 8);
        assert_eq!(sphere.len(), 8 * 16 * 2);
        for tri in &sphere {
            for (v, n) in tri.vertices().iter().zip(tri.normals()) {
                assert!((n.norm() - 1.0).abs() < 1e-5);
                // Normal and position point the same way.
                assert!(n.dot(&v.coords) > 0.0);
            }
        }
    }
}

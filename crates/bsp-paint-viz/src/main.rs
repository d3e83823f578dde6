use bsp_paint::{BspTree, Material, MaterialStore};
use bsp_paint_viz::{OrbitCamera, RenderVisitor, ground_quad, uv_sphere};
use macroquad::prelude::*;
use nalgebra::{Matrix4, Rotation3, Translation3, Vector3};

fn translation(x: f32, y: f32, z: f32) -> Matrix4<f32> {
    Translation3::new(x, y, z).to_homogeneous()
}

/// A floor, a vertical glass panel, and three spheres — two opaque metals
/// and one translucent — so that blending order is visibly exercised.
fn build_scene(materials: &mut MaterialStore) -> BspTree {
    let floor = materials.add(Material {
        diffuse: [0.1, 0.1, 0.1, 1.0],
        specular: [0.2, 0.2, 0.2, 1.0],
        shininess: 8.0,
        ..Material::default()
    });
    let glass = materials.add(Material {
        diffuse: [0.8, 1.0, 1.0, 0.25],
        specular: [0.9, 0.9, 0.9, 1.0],
        shininess: 96.0,
        ..Material::default()
    });
    let gold = materials.add(Material {
        diffuse: [0.88, 0.75, 0.3, 1.0],
        specular: [0.9, 0.8, 0.5, 1.0],
        shininess: 51.2,
        ..Material::default()
    });
    let silver = materials.add(Material {
        diffuse: [0.7, 0.7, 0.7, 1.0],
        specular: [0.9, 0.9, 0.9, 1.0],
        shininess: 89.6,
        ..Material::default()
    });
    let sapphire = materials.add(Material {
        diffuse: [0.37, 0.45, 1.0, 0.5],
        specular: [0.8, 0.8, 0.9, 1.0],
        shininess: 76.8,
        ..Material::default()
    });

    let quad = ground_quad(10.0, 10.0);
    let sphere = uv_sphere(0.7, 8);

    let mut tree = BspTree::new();
    tree.insert(&quad, &Matrix4::identity(), floor);

    // Vertical panel in front of the spheres.
    let stand_up =
        Rotation3::from_axis_angle(&Vector3::x_axis(), std::f32::consts::FRAC_PI_2)
            .to_homogeneous();
    tree.insert(&quad, &(translation(0.0, 1.5, 1.0) * stand_up), glass);

    tree.insert(&sphere, &translation(-1.5, 0.7, -0.8), gold);
    tree.insert(&sphere, &translation(1.5, 0.7, -0.8), silver);
    tree.insert(&sphere, &translation(0.0, 0.9, -2.2), sapphire);

    tree.build();
    tree
}

#[macroquad::main("bsp-paint: translucent scene")]
async fn main() {
    let mut materials = MaterialStore::new();

    println!("Building BSP tree...");
    let tree = build_scene(&mut materials);
    println!(
        "BSP tree built: {} faces, depth {}",
        tree.face_count(),
        tree.depth()
    );

    let mut camera = OrbitCamera::new(9.0, 0.4, 0.35);

    loop {
        camera.update();

        clear_background(Color::from_rgba(20, 20, 30, 255));
        set_camera(&camera.to_camera3d());

        // Same view for ordering and for rasterization.
        let mut visitor = RenderVisitor::new(&materials);
        tree.draw(&camera.view_matrix(), &mut visitor);

        set_default_camera();

        draw_text(
            &format!("Faces: {} | Tree depth: {}", tree.face_count(), tree.depth()),
            10.0,
            25.0,
            20.0,
            WHITE,
        );
        draw_text(
            "Drag mouse to rotate, scroll to zoom",
            10.0,
            45.0,
            16.0,
            DARKGRAY,
        );
        draw_text(&format!("FPS: {}", get_fps()), 10.0, 65.0, 16.0, DARKGRAY);

        next_frame().await
    }
}

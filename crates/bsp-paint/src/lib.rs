//! Painter's-order BSP tree for translucent triangle meshes.
//!
//! This crate builds a Binary Space Partitioning tree over world-space
//! triangles and walks it view-dependently so that every triangle is emitted
//! strictly after all triangles behind it (back-to-front, the painter's
//! algorithm). That ordering makes alpha blending of overlapping and
//! intersecting translucent geometry correct without any per-frame sorting.
//!
//! # Example
//!
//! ```ignore
//! use bsp_paint::{BspTree, CollectingVisitor, Material, MaterialStore};
//! use nalgebra::Matrix4;
//!
//! let mut materials = MaterialStore::new();
//! let gold = materials.add(Material {
//!     diffuse: [0.88, 0.75, 0.3, 1.0],
//!     ..Material::default()
//! });
//!
//! let mut tree = BspTree::new();
//! tree.insert(&sphere_triangles, &model_transform, gold);
//! tree.build();
//!
//! // Every frame: faces arrive back-to-front for the current view.
//! let mut visitor = CollectingVisitor::new();
//! tree.draw(&view_transform, &mut visitor);
//! ```
//!
//! # Architecture
//!
//! - [`Triangle`]: three vertices with per-vertex shading normals
//! - [`Face`]: a triangle tagged with a [`MaterialId`]
//! - [`MaterialStore`]: arena owning shading parameters; faces hold handles
//! - [`BspTree`] / [`Node`]: construction and painter's-order traversal
//! - [`FaceVisitor`]: the seam where rasterization plugs in

mod face;
mod material;
mod plane;
mod split;
mod transform;
mod triangle;

pub mod bsp;

pub use bsp::{BspTree, CollectingVisitor, FaceVisitor, FnVisitor, Node};
pub use face::Face;
pub use material::{Material, MaterialId, MaterialStore};
pub use plane::{DEGENERACY_EPSILON, ON_PLANE_EPSILON, Plane, SAME_SIDE_EPSILON, Side};
pub use transform::{transform_direction, transform_point};
pub use triangle::Triangle;

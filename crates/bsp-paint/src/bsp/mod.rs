//! Binary Space Partitioning tree for painter's-order face emission.
//!
//! The tree recursively partitions world-space faces using the planes of the
//! faces themselves, then walks the result view-dependently so that every
//! face comes out strictly behind-to-front for the current viewpoint.
//!
//! # Example
//!
//! ```ignore
//! use bsp_paint::{BspTree, CollectingVisitor};
//! use nalgebra::Matrix4;
//!
//! let mut tree = BspTree::new();
//! tree.insert(&mesh, &model_transform, material);
//! tree.build();
//!
//! let mut visitor = CollectingVisitor::new();
//! tree.draw(&view_transform, &mut visitor);
//! let ordered_faces = visitor.into_faces();
//! ```
//!
//! # Architecture
//!
//! - [`BspTree`]: the container; insert/build/draw lifecycle
//! - [`Node`]: one splitting face plus front/back subtrees
//! - [`FaceVisitor`]: the rasterization callback seam

mod node;
mod tree;
mod visitor;

pub use node::Node;
pub use tree::BspTree;
pub use visitor::{CollectingVisitor, FaceVisitor, FnVisitor};

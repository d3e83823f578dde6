//! BSP tree container, construction, and painter's-order traversal.

use nalgebra::Matrix4;

use crate::split::partition_face;
use crate::transform::{transform_direction, transform_point};
use crate::{Face, MaterialId, Triangle};

use super::node::Node;
use super::visitor::FaceVisitor;

/// A Binary Space Partitioning tree over world-space triangles.
///
/// The tree exists to emit faces in back-to-front order for any viewpoint
/// (the painter's algorithm), which makes alpha blending of overlapping
/// translucent geometry correct without per-frame depth sorting.
///
/// # Lifecycle
///
/// 1. [`insert`](Self::insert) transformed triangle batches, each tagged
///    with a material handle. Append-only.
/// 2. [`build`](Self::build) once: consumes the pending faces into the tree.
/// 3. [`draw`](Self::draw) every frame with the current view transform. The
///    tree is read-only from here on; draws are reentrant and repeatable.
///
/// Calling `build` more than once is not supported.
///
/// # Construction
///
/// The first pending face becomes the root's splitting plane; every other
/// face is split against it, degeneracy-filtered, and routed front or back;
/// both sides recurse. Each recursion handles strictly fewer faces than its
/// parent, so construction always terminates. The recursion depth is bounded
/// by the face count in the worst (no-split, already-sorted) case.
#[derive(Debug, Clone, Default)]
pub struct BspTree {
    pending: Vec<Face>,
    root: Option<Node>,
}

impl BspTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Transforms a triangle batch into world space and appends it to the
    /// pending face list, tagged with `material`.
    ///
    /// Positions transform with w = 1; shading normals with w = 0, so
    /// translation does not bend them (see
    /// [`transform_direction`](crate::transform_direction) for the
    /// non-uniform-scale caveat). Triangles that come out degenerate or
    /// non-finite are silently dropped — a filtering policy, not an error.
    pub fn insert(&mut self, mesh: &[Triangle], transform: &Matrix4<f32>, material: MaterialId) {
        for triangle in mesh {
            let world = triangle.transformed(transform);
            if world.is_finite() && !world.is_degenerate() {
                self.pending.push(Face::new(world, material));
            }
        }
    }

    /// Consumes the pending faces into the tree.
    ///
    /// Zero pending faces produce an absent root, not an error. Single-shot:
    /// the pending list is emptied, and a repeated call rebuilds from
    /// whatever was inserted since (unsupported usage).
    pub fn build(&mut self) {
        let faces = std::mem::take(&mut self.pending);
        self.root = build_node(faces);
    }

    /// Returns `true` if the built tree contains no faces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns a reference to the root node, if any.
    #[inline]
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// Returns the total number of faces stored in the tree.
    pub fn face_count(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.face_count())
    }

    /// Returns the maximum depth of the tree (0 when empty).
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.depth())
    }

    /// Emits every face back-to-front relative to `view`.
    ///
    /// `view` maps world space to view space with the eye at the origin. At
    /// each node the face's centroid (w = 1) and face normal (w = 0, then
    /// normalized) are taken into view space; if the normal faces the eye
    /// the viewer is on the plane's front side, so the back subtree (farther
    /// geometry) is drawn first, then this node's face, then the front
    /// subtree — and mirrored otherwise. Every face is therefore emitted
    /// strictly after all faces behind it from this viewpoint.
    ///
    /// Never mutates the tree; identical views produce identical sequences.
    pub fn draw<V: FaceVisitor>(&self, view: &Matrix4<f32>, visitor: &mut V) {
        if let Some(ref root) = self.root {
            draw_node(root, view, visitor);
        }
    }

    /// Collects all faces in the tree, in pre-order (not draw order).
    pub fn collect_faces(&self) -> Vec<Face> {
        let mut result = Vec::with_capacity(self.face_count());
        collect_faces_recursive(self.root.as_ref(), &mut result);
        result
    }
}

/// Recursively builds a node from a list of faces.
fn build_node(mut faces: Vec<Face>) -> Option<Node> {
    if faces.is_empty() {
        return None;
    }

    // The first face defines this node's splitting plane.
    let splitter = faces.remove(0);
    let plane = splitter.plane();

    let mut front_list = Vec::new();
    let mut back_list = Vec::new();
    for face in faces {
        partition_face(&plane, face, &mut front_list, &mut back_list);
    }

    let mut node = Node::new(splitter);
    node.set_front(build_node(front_list));
    node.set_back(build_node(back_list));
    Some(node)
}

/// Traverses a subtree back-to-front and emits each face to the visitor.
fn draw_node<V: FaceVisitor>(node: &Node, view: &Matrix4<f32>, visitor: &mut V) {
    let face = node.face();
    let centroid = transform_point(view, face.centroid());
    let normal = transform_direction(view, face.triangle().face_normal()).normalize();
    // The eye sits at the view-space origin.
    let to_eye = (-centroid.coords).normalize();

    if normal.dot(&to_eye) >= 0.0 {
        // Viewer on the front side: the back subtree is farther.
        if let Some(back) = node.back() {
            draw_node(back, view, visitor);
        }
        visitor.visit(face);
        if let Some(front) = node.front() {
            draw_node(front, view, visitor);
        }
    } else {
        if let Some(front) = node.front() {
            draw_node(front, view, visitor);
        }
        visitor.visit(face);
        if let Some(back) = node.back() {
            draw_node(back, view, visitor);
        }
    }
}

fn collect_faces_recursive(node: Option<&Node>, result: &mut Vec<Face>) {
    if let Some(n) = node {
        result.push(n.face().clone());
        collect_faces_recursive(n.front(), result);
        collect_faces_recursive(n.back(), result);
    }
}

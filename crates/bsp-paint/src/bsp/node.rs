//! BSP tree node: one splitting face plus two optional subtrees.

use crate::Face;

/// A node in the BSP tree.
///
/// Each node owns exactly one face — the one whose supporting plane
/// partitioned everything below it — and exclusively owns its `front` and
/// `back` subtrees, either of which may be absent. Nodes are created during
/// construction and read-only afterwards; the whole tree tears down with its
/// owner. No cross-links, no cycles.
#[derive(Debug, Clone)]
pub struct Node {
    face: Face,
    front: Option<Box<Node>>,
    back: Option<Box<Node>>,
}

impl Node {
    /// Creates a leaf node holding the given splitting face.
    pub(crate) fn new(face: Face) -> Self {
        Self {
            face,
            front: None,
            back: None,
        }
    }

    /// Returns the splitting face stored at this node.
    #[inline]
    pub fn face(&self) -> &Face {
        &self.face
    }

    /// Returns the subtree in front of this node's plane, if any.
    #[inline]
    pub fn front(&self) -> Option<&Node> {
        self.front.as_deref()
    }

    /// Returns the subtree behind this node's plane, if any.
    #[inline]
    pub fn back(&self) -> Option<&Node> {
        self.back.as_deref()
    }

    #[inline]
    pub(crate) fn set_front(&mut self, node: Option<Node>) {
        self.front = node.map(Box::new);
    }

    #[inline]
    pub(crate) fn set_back(&mut self, node: Option<Node>) {
        self.back = node.map(Box::new);
    }

    /// Returns `true` if this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.front.is_none() && self.back.is_none()
    }

    /// Returns the number of faces in this subtree (including this node's).
    pub fn face_count(&self) -> usize {
        let mut count = 1;
        if let Some(ref front) = self.front {
            count += front.face_count();
        }
        if let Some(ref back) = self.back {
            count += back.face_count();
        }
        count
    }

    /// Returns the depth of this subtree (1 for a leaf).
    pub fn depth(&self) -> usize {
        let front_depth = self.front.as_ref().map_or(0, |n| n.depth());
        let back_depth = self.back.as_ref().map_or(0, |n| n.depth());
        1 + front_depth.max(back_depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, MaterialStore, Triangle};
    use nalgebra::{Point3, Vector3};

    fn any_face() -> Face {
        let mut store = MaterialStore::new();
        let id = store.add(Material::default());
        Face::new(
            Triangle::new(
                [
                    Point3::new(0.0, 0.0, 0.0),
                    Point3::new(1.0, 0.0, 0.0),
                    Point3::new(0.0, 1.0, 0.0),
                ],
                [Vector3::new(0.0, 0.0, 1.0); 3],
            ),
            id,
        )
    }

    #[test]
    fn new_node_is_leaf() {
        let node = Node::new(any_face());
        assert!(node.is_leaf());
        assert_eq!(node.face_count(), 1);
        assert_eq!(node.depth(), 1);
    }

    #[test]
    fn counts_and_depth_recurse() {
        let mut root = Node::new(any_face());
        let mut front = Node::new(any_face());
        front.set_back(Some(Node::new(any_face())));
        root.set_front(Some(front));
        root.set_back(Some(Node::new(any_face())));

        assert!(!root.is_leaf());
        assert_eq!(root.face_count(), 4);
        // root -> front -> back is the longest path.
        assert_eq!(root.depth(), 3);
    }
}

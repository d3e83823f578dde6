//! Visitor seam between tree traversal and rasterization.
//!
//! The tree performs no pixel operations. During a draw traversal it hands
//! each face — three vertex/normal pairs plus a material handle — to a
//! visitor, in back-to-front order for the current view.

use crate::Face;

/// Receives faces in painter's order during [`BspTree::draw`].
///
/// Implement this to rasterize (bind the face's material, emit its
/// vertices), or to collect faces for inspection.
///
/// [`BspTree::draw`]: super::BspTree::draw
pub trait FaceVisitor {
    /// Called once per face, back-to-front from the current viewpoint.
    fn visit(&mut self, face: &Face);
}

/// A visitor that clones every visited face, preserving order.
#[derive(Debug, Default)]
pub struct CollectingVisitor {
    collected: Vec<Face>,
}

impl CollectingVisitor {
    /// Creates an empty collecting visitor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the collected faces in visitation order.
    pub fn faces(&self) -> &[Face] {
        &self.collected
    }

    /// Consumes the visitor, returning the collected faces.
    pub fn into_faces(self) -> Vec<Face> {
        self.collected
    }
}

impl FaceVisitor for CollectingVisitor {
    fn visit(&mut self, face: &Face) {
        self.collected.push(face.clone());
    }
}

/// A visitor that calls a closure for each face.
pub struct FnVisitor<F>
where
    F: FnMut(&Face),
{
    func: F,
}

impl<F> FnVisitor<F>
where
    F: FnMut(&Face),
{
    /// Creates a visitor from a closure.
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> FaceVisitor for FnVisitor<F>
where
    F: FnMut(&Face),
{
    fn visit(&mut self, face: &Face) {
        (self.func)(face);
    }
}

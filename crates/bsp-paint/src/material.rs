//! Material records and the arena that owns them.
//!
//! Faces never own shading data. A [`MaterialStore`] holds immutable
//! [`Material`] records and hands out copyable [`MaterialId`] handles; the
//! store must outlive any tree whose faces reference it. The tree returns
//! handles unchanged at emission time — binding the parameters is the
//! rasterizer's job.

use std::ops::Index;

/// Opaque handle to a [`Material`] in a [`MaterialStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialId(usize);

/// Fixed-function shading parameters, RGBA components.
///
/// The alpha of `diffuse` is what makes a surface translucent; the tree's
/// back-to-front emission order is what makes blending it correct.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    pub shininess: f32,
    pub emission: [f32; 4],
}

impl Default for Material {
    fn default() -> Self {
        Self {
            diffuse: [0.8, 0.8, 0.8, 1.0],
            specular: [0.0, 0.0, 0.0, 1.0],
            shininess: 0.0,
            emission: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

/// Arena of immutable materials, indexed by [`MaterialId`].
#[derive(Debug, Clone, Default)]
pub struct MaterialStore {
    materials: Vec<Material>,
}

impl MaterialStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a material and returns its handle.
    pub fn add(&mut self, material: Material) -> MaterialId {
        self.materials.push(material);
        MaterialId(self.materials.len() - 1)
    }

    /// Looks up a material by handle.
    ///
    /// # Panics
    /// Panics if the handle comes from a different store.
    #[inline]
    pub fn get(&self, id: MaterialId) -> &Material {
        &self.materials[id.0]
    }

    /// Returns the number of materials in the store.
    #[inline]
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Returns `true` if the store holds no materials.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl Index<MaterialId> for MaterialStore {
    type Output = Material;

    fn index(&self, id: MaterialId) -> &Material {
        self.get(id)
    }
}

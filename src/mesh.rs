//! CPU-side meshes and the world-transform capability the animator needs.
//!
//! - [`Vertex3d`] — position and normal for one vertex
//! - [`Mesh`] — vertex/index data plus a world matrix
//! - [`WorldTransform`] — read/write access to a world matrix
//!
//! # Example
//!
//! ```
//! use vislab::{Mat4, Mesh, Vec3, WorldTransform};
//!
//! let mut cube = Mesh::cube();
//! cube.set_world_matrix(Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0)));
//!
//! let copy = cube.clone();
//! assert_eq!(copy.world_matrix(), cube.world_matrix());
//! ```

use glam::{Mat4, Vec3};

/// Anything that carries a world transform the animator can rewrite.
///
/// Implemented by [`Mesh`]; hosts with their own mesh type implement it to
/// run [`transform`](crate::transform) on that type directly.
pub trait WorldTransform {
    /// The matrix mapping local space into world space.
    fn world_matrix(&self) -> Mat4;

    /// Replaces the world matrix.
    fn set_world_matrix(&mut self, matrix: Mat4);
}

/// A vertex with position and normal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex3d {
    /// Position in model space.
    pub position: [f32; 3],
    /// Surface normal (should be normalized for correct lighting).
    pub normal: [f32; 3],
}

impl Vertex3d {
    pub fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self { position, normal }
    }
}

/// Triangle geometry with a world matrix.
///
/// Cloning copies the vertex and index buffers, so a clone's transform can be
/// changed without touching the original.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex3d>,
    indices: Vec<u32>,
    world: Mat4,
}

impl Mesh {
    /// Creates a mesh at the world origin (identity world matrix).
    pub fn new(vertices: Vec<Vertex3d>, indices: Vec<u32>) -> Self {
        Self {
            vertices,
            indices,
            world: Mat4::IDENTITY,
        }
    }

    /// Builder-style variant of [`WorldTransform::set_world_matrix`].
    pub fn with_world_matrix(mut self, matrix: Mat4) -> Self {
        self.world = matrix;
        self
    }

    pub fn vertices(&self) -> &[Vertex3d] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of triangles described by the index buffer.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Creates a unit cube centered at the origin.
    ///
    /// Spans -0.5 to 0.5 on every axis. Each face gets its own four vertices
    /// so normals stay flat, giving 24 vertices and 12 triangles. Faces wind
    /// counter-clockwise when seen from outside.
    pub fn cube() -> Self {
        // (normal, u axis, v axis) with u x v == normal
        const FACES: [(Vec3, Vec3, Vec3); 6] = [
            (Vec3::Z, Vec3::X, Vec3::Y),
            (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
            (Vec3::Y, Vec3::X, Vec3::NEG_Z),
            (Vec3::NEG_Y, Vec3::X, Vec3::Z),
            (Vec3::X, Vec3::NEG_Z, Vec3::Y),
            (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        ];
        const CORNERS: [(f32, f32); 4] = [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)];

        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);

        for (normal, u_axis, v_axis) in FACES {
            let base = vertices.len() as u32;
            for (u, v) in CORNERS {
                let position = normal * 0.5 + u_axis * u + v_axis * v;
                vertices.push(Vertex3d::new(position.into(), normal.into()));
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
        }

        Self::new(vertices, indices)
    }
}

impl WorldTransform for Mesh {
    fn world_matrix(&self) -> Mat4 {
        self.world
    }

    fn set_world_matrix(&mut self, matrix: Mat4) {
        self.world = matrix;
    }
}

//! Vertex data for the demo's primitives.
//!
//! Generators return a [`MeshData`] on the CPU; upload it with
//! [`Mesh::create`](crate::gl::Mesh::create).

mod cube;
mod icosphere;
mod square;

pub use cube::cube;
pub use icosphere::icosphere;
pub use square::{quad, square};

use glam::Vec3;

use crate::gl::DrawMode;

/// CPU-side vertex and index data for one mesh.
///
/// Positions and normals are homogeneous 4-float vertices (`w = 1` for
/// positions, `w = 0` for normals). `colors` may be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    /// Vertex positions, four floats each.
    pub positions: Vec<f32>,
    /// Vertex normals, four floats each.
    pub normals: Vec<f32>,
    /// Vertex colours, four floats each.
    pub colors: Vec<f32>,
    /// Indices into the vertex arrays.
    pub indices: Vec<u32>,
    /// Primitive type.
    pub draw_mode: DrawMode,
}

impl MeshData {
    fn triangles() -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            colors: Vec::new(),
            indices: Vec::new(),
            draw_mode: DrawMode::Triangles,
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 4
    }

    /// Appends a vertex and returns its index.
    fn push_vertex(&mut self, position: Vec3, normal: Vec3) -> u32 {
        let index = self.vertex_count() as u32;
        self.positions.extend_from_slice(&position.extend(1.0).to_array());
        self.normals.extend_from_slice(&normal.extend(0.0).to_array());
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every index must address an existing vertex and the index count must
    /// describe whole triangles.
    fn assert_well_formed(mesh: &MeshData) {
        assert_eq!(mesh.positions.len() % 4, 0);
        assert_eq!(mesh.normals.len(), mesh.positions.len());
        assert_eq!(mesh.indices.len() % 3, 0);
        let vertices = mesh.vertex_count() as u32;
        assert!(mesh.indices.iter().all(|&i| i < vertices));
        assert!(mesh.positions.chunks(4).all(|v| v[3] == 1.0));
        assert!(mesh.normals.chunks(4).all(|n| n[3] == 0.0));
    }

    #[test]
    fn every_primitive_is_well_formed() {
        assert_well_formed(&square(Vec3::ZERO));
        assert_well_formed(&cube(Vec3::new(1.0, 2.0, 3.0)));
        assert_well_formed(&icosphere(Vec3::ZERO, 1.0, 2));
    }
}

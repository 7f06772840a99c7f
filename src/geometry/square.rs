use glam::Vec3;

use super::MeshData;

/// A 2x2 quad in the XY plane facing +Z, centred on `center`.
pub fn square(center: Vec3) -> MeshData {
    quad(center, 1.0)
}

/// A quad in the XY plane facing +Z, centred on `center`, extending
/// `half_extent` along X and Y.
pub fn quad(center: Vec3, half_extent: f32) -> MeshData {
    let mut mesh = MeshData::triangles();
    for (x, y) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
        mesh.push_vertex(center + Vec3::new(x, y, 0.0) * half_extent, Vec3::Z);
    }
    mesh.indices = vec![0, 1, 2, 0, 2, 3];
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_is_two_triangles() {
        let mesh = square(Vec3::ZERO);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.indices, [0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn square_is_offset_by_center() {
        let mesh = square(Vec3::new(0.5, 0.0, -2.0));
        assert_eq!(&mesh.positions[..4], &[-0.5, -1.0, -2.0, 1.0]);
    }

    #[test]
    fn quad_scales_around_center() {
        let mesh = quad(Vec3::new(1.0, 0.0, 0.0), 10.0);
        assert_eq!(&mesh.positions[..4], &[-9.0, -10.0, 0.0, 1.0]);
        assert_eq!(&mesh.positions[8..12], &[11.0, 10.0, 0.0, 1.0]);
        assert_eq!(&mesh.normals[..4], &[0.0, 0.0, 1.0, 0.0]);
    }
}

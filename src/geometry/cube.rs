use glam::Vec3;

use super::MeshData;

/// An axis-aligned cube with half-extent 1, centred on `center`.
///
/// Each face has its own four vertices so normals stay flat.
pub fn cube(center: Vec3) -> MeshData {
    let mut mesh = MeshData::triangles();
    let faces = [
        (Vec3::X, Vec3::Y),
        (Vec3::NEG_X, Vec3::Y),
        (Vec3::Y, Vec3::Z),
        (Vec3::NEG_Y, Vec3::Z),
        (Vec3::Z, Vec3::X),
        (Vec3::NEG_Z, Vec3::X),
    ];
    for (normal, u) in faces {
        // (u, v, normal) is right-handed, so faces wind counter-clockwise
        // seen from outside.
        let v = normal.cross(u);
        let base = mesh.push_vertex(center + normal - u - v, normal);
        mesh.push_vertex(center + normal + u - v, normal);
        mesh.push_vertex(center + normal + u + v, normal);
        mesh.push_vertex(center + normal - u + v, normal);
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

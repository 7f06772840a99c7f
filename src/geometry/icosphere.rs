use std::collections::HashMap;

use glam::Vec3;

use super::MeshData;

const X: f32 = 0.525_731_1;
const Z: f32 = 0.850_650_8;

const VERTICES: [[f32; 3]; 12] = [
    [-X, 0.0, Z],
    [X, 0.0, Z],
    [-X, 0.0, -Z],
    [X, 0.0, -Z],
    [0.0, Z, X],
    [0.0, Z, -X],
    [0.0, -Z, X],
    [0.0, -Z, -X],
    [Z, X, 0.0],
    [-Z, X, 0.0],
    [Z, -X, 0.0],
    [-Z, -X, 0.0],
];

const FACES: [[u32; 3]; 20] = [
    [0, 4, 1],
    [0, 9, 4],
    [9, 5, 4],
    [4, 5, 8],
    [4, 8, 1],
    [8, 10, 1],
    [8, 3, 10],
    [5, 3, 8],
    [5, 2, 3],
    [2, 7, 3],
    [7, 10, 3],
    [7, 6, 10],
    [7, 11, 6],
    [11, 0, 6],
    [0, 1, 6],
    [6, 1, 10],
    [9, 0, 11],
    [9, 11, 2],
    [9, 2, 5],
    [7, 2, 11],
];

/// A sphere built by subdividing an icosahedron `subdivisions` times.
///
/// Edge midpoints are shared between neighbouring triangles, so the result
/// has `10 * 4^n + 2` vertices and `20 * 4^n` triangles.
pub fn icosphere(center: Vec3, radius: f32, subdivisions: u32) -> MeshData {
    let mut directions: Vec<Vec3> = VERTICES.iter().map(|v| Vec3::from_array(*v)).collect();
    let mut faces = FACES.to_vec();

    for _ in 0..subdivisions {
        let mut midpoints = HashMap::new();
        let mut midpoint = |a: u32, b: u32| -> u32 {
            *midpoints.entry((a.min(b), a.max(b))).or_insert_with(|| {
                let mid = (directions[a as usize] + directions[b as usize]).normalize();
                directions.push(mid);
                directions.len() as u32 - 1
            })
        };

        faces = faces
            .iter()
            .flat_map(|&[a, b, c]| {
                let ab = midpoint(a, b);
                let bc = midpoint(b, c);
                let ca = midpoint(c, a);
                [[a, ab, ca], [b, bc, ab], [c, ca, bc], [ab, bc, ca]]
            })
            .collect();
    }

    let mut mesh = MeshData::triangles();
    for direction in &directions {
        mesh.push_vertex(center + *direction * radius, *direction);
    }
    mesh.indices = faces.into_iter().flatten().collect();
    mesh
}

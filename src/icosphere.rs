use glam::{Vec2, Vec3};
use std::f32::consts::PI;

/// Interleaved vertex layout matching the GPU attribute format:
/// position at location 0, texcoord at location 1.
#[derive(Clone, Copy, Debug)]
pub struct Vertex {
    pub position: Vec3,
    pub uv: Vec2,
}

impl Vertex {
    fn new(position: Vec3) -> Self {
        Self {
            position,
            uv: Vec2::ZERO,
        }
    }
}

/// CPU-side triangle mesh: indexed triangle list with u16 indices.
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl MeshData {
    /// Regular icosahedron from the corners of three orthogonal
    /// golden-ratio rectangles (a = 1, b = 1/phi).
    pub fn icosahedron() -> Self {
        let phi = (1.0 + 5.0_f32.sqrt()) * 0.5;
        let a = 1.0;
        let b = 1.0 / phi;

        let positions = [
            Vec3::new(0.0, b, -a),
            Vec3::new(b, a, 0.0),
            Vec3::new(-b, a, 0.0),
            Vec3::new(0.0, b, a),
            Vec3::new(0.0, -b, a),
            Vec3::new(-a, 0.0, b),
            Vec3::new(0.0, -b, -a),
            Vec3::new(a, 0.0, -b),
            Vec3::new(a, 0.0, b),
            Vec3::new(-a, 0.0, -b),
            Vec3::new(b, -a, 0.0),
            Vec3::new(-b, -a, 0.0),
        ];

        // Face winding matters for back-face culling; do not reorder.
        #[rustfmt::skip]
        let indices: Vec<u16> = vec![
            2, 1, 0,    1, 2, 3,    5, 4, 3,    4, 8, 3,    7, 6, 0,
            6, 9, 0,    11, 10, 4,  10, 11, 6,  9, 5, 2,    5, 9, 11,
            8, 7, 1,    7, 8, 10,   2, 5, 3,    8, 1, 3,    9, 2, 0,
            1, 7, 0,    11, 9, 6,   7, 10, 6,   5, 11, 3,   10, 8, 4,
        ];

        Self {
            vertices: positions.iter().map(|&p| Vertex::new(p)).collect(),
            indices,
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Project every vertex onto the unit sphere. A zero-length position
    /// stays where it is.
    pub fn normalize(&mut self) {
        for vertex in &mut self.vertices {
            vertex.position = vertex.position.normalize_or_zero();
        }
    }

    /// Split every triangle into four by inserting edge-midpoint vertices.
    ///
    /// Midpoints are appended per triangle, so an edge shared by two faces
    /// gets two independent copies of its midpoint. That quirk is part of
    /// the output contract (vertex count and order), not something to fix.
    pub fn subdivide(&mut self) {
        let triangle_count = self.triangle_count();
        for t in 0..triangle_count {
            let v1 = self.vertices[self.indices[t * 3] as usize].position;
            let v2 = self.vertices[self.indices[t * 3 + 1] as usize].position;
            let v3 = self.vertices[self.indices[t * 3 + 2] as usize].position;

            let j = self.vertices.len() as u16;
            self.vertices.push(Vertex::new((v1 + v2) * 0.5));
            self.vertices.push(Vertex::new((v2 + v3) * 0.5));
            self.vertices.push(Vertex::new((v3 + v1) * 0.5));

            // Rewrite this triangle as the corner at i0, then append the
            // other three of the split.
            let i1 = self.indices[t * 3 + 1];
            let i2 = self.indices[t * 3 + 2];
            self.indices[t * 3 + 1] = j;
            self.indices[t * 3 + 2] = j + 2;

            #[rustfmt::skip]
            self.indices.extend_from_slice(&[
                j, i1, j + 1,
                j, j + 1, j + 2,
                j + 1, i2, j + 2,
            ]);
        }
    }

    /// Assign long/lat texture coordinates from the (unit-length) positions.
    pub fn map_uvs(&mut self) {
        for vertex in &mut self.vertices {
            vertex.uv = sphere_uv(vertex.position);
        }
    }

    /// Flatten to the interleaved f32 stream the GPU buffer expects.
    pub fn interleaved(&self) -> Vec<f32> {
        let mut data = Vec::with_capacity(self.vertices.len() * 5);
        for vertex in &self.vertices {
            data.extend_from_slice(&[
                vertex.position.x,
                vertex.position.y,
                vertex.position.z,
                vertex.uv.x,
                vertex.uv.y,
            ]);
        }
        data
    }
}

/// Long/lat projection of a unit-sphere position.
///
/// u = 1 + atan2(y, x) / 2pi lands in [0.5, 1.5]; sampling relies on REPEAT
/// wrap rather than a modulo here. v = 1 - (0.5 + asin(z) / pi). The offsets
/// and inversions match the texture orientation the demo image expects, so
/// they are contract, not style.
pub fn sphere_uv(position: Vec3) -> Vec2 {
    let z = position.z.clamp(-1.0, 1.0);
    Vec2::new(
        1.0 + position.y.atan2(position.x) / (2.0 * PI),
        1.0 - (0.5 + z.asin() / PI),
    )
}

/// Full pipeline: seed icosahedron, two subdivision passes, final
/// normalization, UV projection. Two passes give a reasonably smooth ball
/// (20 -> 80 -> 320 triangles).
pub fn build() -> MeshData {
    let mut mesh = MeshData::icosahedron();
    mesh.normalize();
    mesh.subdivide();
    mesh.subdivide();
    mesh.normalize();
    mesh.map_uvs();
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn seed_is_a_regular_icosahedron() {
        let mesh = MeshData::icosahedron();
        assert_eq!(mesh.vertices.len(), 12);
        assert_eq!(mesh.triangle_count(), 20);

        // All corners of the golden-ratio rectangles sit at sqrt(1 + b^2).
        let b = 2.0 / (1.0 + 5.0_f32.sqrt());
        let expected = (1.0 + b * b).sqrt();
        for vertex in &mesh.vertices {
            assert!((vertex.position.length() - expected).abs() < EPS);
        }
    }

    #[test]
    fn subdivide_quadruples_triangles() {
        let mut mesh = MeshData::icosahedron();
        mesh.subdivide();
        assert_eq!(mesh.triangle_count(), 80);
        assert_eq!(mesh.vertices.len(), 12 + 3 * 20);

        mesh.subdivide();
        assert_eq!(mesh.triangle_count(), 320);
        assert_eq!(mesh.vertices.len(), 72 + 3 * 80);
    }

    #[test]
    fn normalize_projects_onto_unit_sphere() {
        let mut mesh = MeshData::icosahedron();
        mesh.normalize();
        for vertex in &mesh.vertices {
            assert!((vertex.position.length() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn normalize_leaves_zero_vector_unchanged() {
        let mut mesh = MeshData {
            vertices: vec![Vertex::new(Vec3::ZERO)],
            indices: Vec::new(),
        };
        mesh.normalize();
        assert_eq!(mesh.vertices[0].position, Vec3::ZERO);
    }

    #[test]
    fn built_mesh_matches_output_contract() {
        let mesh = build();
        assert_eq!(mesh.vertices.len(), 312);
        assert_eq!(mesh.triangle_count(), 320);
        assert_eq!(mesh.indices.len(), 960);

        for &index in &mesh.indices {
            assert!((index as usize) < mesh.vertices.len());
        }
        for vertex in &mesh.vertices {
            assert!((vertex.position.length() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn no_triangle_repeats_a_vertex_index() {
        let mesh = build();
        for tri in mesh.indices.chunks_exact(3) {
            assert!(tri[0] != tri[1]);
            assert!(tri[1] != tri[2]);
            assert!(tri[0] != tri[2]);
        }
    }

    #[test]
    fn uv_reference_points() {
        // +x meridian: atan2(0, 1) = 0 -> u = 1, asin(0) = 0 -> v = 0.5.
        let uv = sphere_uv(Vec3::new(1.0, 0.0, 0.0));
        assert!((uv.x - 1.0).abs() < EPS);
        assert!((uv.y - 0.5).abs() < EPS);

        // North pole: v = 1 - (0.5 + (pi/2)/pi) = 0.
        let north = sphere_uv(Vec3::new(0.0, 0.0, 1.0));
        assert!(north.y.abs() < EPS);

        // South pole: v = 1.
        let south = sphere_uv(Vec3::new(0.0, 0.0, -1.0));
        assert!((south.y - 1.0).abs() < EPS);
    }

    #[test]
    fn built_uvs_stay_in_expected_ranges() {
        let mesh = build();
        for vertex in &mesh.vertices {
            assert!(vertex.uv.x >= 0.5 - EPS && vertex.uv.x <= 1.5 + EPS);
            assert!(vertex.uv.y >= -EPS && vertex.uv.y <= 1.0 + EPS);
        }
    }

    #[test]
    fn interleaved_stream_is_five_floats_per_vertex() {
        let mesh = build();
        let data = mesh.interleaved();
        assert_eq!(data.len(), mesh.vertices.len() * 5);
        // First vertex round-trips.
        assert_eq!(data[0], mesh.vertices[0].position.x);
        assert_eq!(data[3], mesh.vertices[0].uv.x);
    }
}

//! Ribbon-Mesh: Vertex-Paare, UV-Kanäle und Dreiecks-Indizes.
//!
//! Layout bei Offset `Right` (Band liegt rechts der Spline):
//!
//! ```text
//!              2i1------2i1+1
//!               |\       |
//!               |  \     |
//!               |    \   |
//!               |      \ |
//!              2i0------2i0+1
//!               |        |
//!   links (2i) ~~        ~~ rechts (2i+1)
//! ```

use bytemuck::{Pod, Zeroable};
use glam::{Affine3A, Vec2, Vec3, Vec4};
use serde::Serialize;

use crate::core::Aabb;

/// Interleavter Vertex für GPU-Upload.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct RibbonVertex {
    /// Position im lokalen Raum
    pub position: [f32; 3],
    /// UV0: Seiten-Flag (1 = links, 0 = rechts), 0, Achse XZ
    pub uv0: [f32; 4],
    /// UV1: interpolierte Punkt-Daten
    pub uv1: [f32; 4],
}

/// Ergebnis einer Ribbon-Generierung.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RibbonMesh {
    /// Zwei Vertices pro Sample: `2i` links, `2i + 1` rechts
    pub vertices: Vec<Vec3>,
    pub uv0: Vec<Vec4>,
    pub uv1: Vec<Vec4>,
    /// Dreiecksliste, 6 Indizes pro Sample-Paar
    pub indices: Vec<u32>,
    /// Tatsächlich verwendete Geschlossenheit (2-Punkt-Splines bleiben offen)
    pub closed: bool,
}

impl RibbonMesh {
    /// Baut das Mesh aus den Offset-Polylines.
    ///
    /// Positionen werden mit `world_to_local` in den lokalen Raum transformiert; die
    /// Achse in UV0 wird aus den transformierten Positionen berechnet.
    pub(super) fn assemble(
        left: &[Vec3],
        right: &[Vec3],
        custom_data: &[Vec4],
        world_to_local: &Affine3A,
        closed: bool,
    ) -> Self {
        let samples = left.len().min(right.len()).min(custom_data.len());
        let vertex_count = samples * 2;

        let mut mesh = Self {
            vertices: Vec::with_capacity(vertex_count),
            uv0: Vec::with_capacity(vertex_count),
            uv1: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity(samples.saturating_sub(1) * 6),
            closed,
        };

        for i in 0..samples {
            let l = world_to_local.transform_point3(left[i]);
            let r = world_to_local.transform_point3(right[i]);
            mesh.vertices.push(l);
            mesh.vertices.push(r);

            let axis = Vec2::new(l.x - r.x, l.z - r.z).normalize_or_zero();
            mesh.uv0.push(Vec4::new(1.0, 0.0, axis.x, axis.y));
            mesh.uv0.push(Vec4::new(0.0, 0.0, axis.x, axis.y));

            mesh.uv1.push(custom_data[i]);
            mesh.uv1.push(custom_data[i]);

            if i + 1 < samples {
                let i0 = (2 * i) as u32;
                let i1 = (2 * (i + 1)) as u32;
                mesh.indices
                    .extend_from_slice(&[i0, i1, i0 + 1, i1, i1 + 1, i0 + 1]);
            }
        }

        mesh
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Anzahl Samples entlang der Spline (Vertex-Paare).
    pub fn sample_count(&self) -> usize {
        self.vertices.len() / 2
    }

    /// Unveränderte lokale Vertex-Positionen für die Bounds-Berechnung des Aufrufers.
    pub fn bounding_points(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Welt-Bounds aus den Bounding-Punkten.
    pub fn world_bounds(&self, local_to_world: &Affine3A) -> Option<Aabb> {
        Aabb::from_points(self.bounding_points(), local_to_world)
    }

    /// Flächengewichtete Vertex-Normalen aus den Dreiecken.
    ///
    /// Vertices ohne Dreieck (oder nur degenerierte) erhalten `Vec3::ZERO`.
    pub fn compute_normals(&self) -> Vec<Vec3> {
        let mut normals = vec![Vec3::ZERO; self.vertices.len()];
        for tri in self.indices.chunks_exact(3) {
            let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            let face = (self.vertices[b] - self.vertices[a])
                .cross(self.vertices[c] - self.vertices[a]);
            normals[a] += face;
            normals[b] += face;
            normals[c] += face;
        }
        for n in &mut normals {
            *n = n.normalize_or_zero();
        }
        normals
    }

    /// Interleavte Vertices für GPU-Upload (`bytemuck::cast_slice`).
    pub fn to_vertices(&self) -> Vec<RibbonVertex> {
        self.vertices
            .iter()
            .zip(&self.uv0)
            .zip(&self.uv1)
            .map(|((p, uv0), uv1)| RibbonVertex {
                position: p.to_array(),
                uv0: uv0.to_array(),
                uv1: uv1.to_array(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(samples: usize) -> RibbonMesh {
        let left: Vec<Vec3> = (0..samples).map(|i| Vec3::new(i as f32, 0.0, 1.0)).collect();
        let right: Vec<Vec3> = (0..samples).map(|i| Vec3::new(i as f32, 0.0, -1.0)).collect();
        let data = vec![Vec4::new(0.5, 0.0, 0.0, 0.0); samples];
        RibbonMesh::assemble(&left, &right, &data, &Affine3A::IDENTITY, false)
    }

    #[test]
    fn test_assemble_counts_and_winding() {
        let mesh = strip(3);
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangle_count(), 4);
        assert_eq!(mesh.indices, vec![0, 2, 1, 2, 3, 1, 2, 4, 3, 4, 5, 3]);
    }

    #[test]
    fn test_assemble_uv_channels() {
        let mesh = strip(2);
        assert_eq!(mesh.uv0[0], Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(mesh.uv0[1], Vec4::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(mesh.uv1[0], mesh.uv1[1]);
        assert_eq!(mesh.uv1[3].x, 0.5);
    }

    #[test]
    fn test_single_sample_has_no_triangles() {
        let mesh = strip(1);
        assert_eq!(mesh.vertex_count(), 2);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_assemble_applies_world_to_local() {
        let left = [Vec3::new(5.0, 0.0, 1.0)];
        let right = [Vec3::new(5.0, 0.0, -1.0)];
        let to_local = Affine3A::from_translation(Vec3::new(-5.0, 0.0, 0.0));
        let mesh = RibbonMesh::assemble(&left, &right, &[Vec4::ZERO], &to_local, false);
        assert_eq!(mesh.vertices[0], Vec3::new(0.0, 0.0, 1.0));

        let bounds = mesh
            .world_bounds(&Affine3A::from_translation(Vec3::new(5.0, 0.0, 0.0)))
            .unwrap();
        assert_eq!(bounds.min, Vec3::new(5.0, 0.0, -1.0));
    }

    #[test]
    fn test_normals_point_up_for_flat_strip() {
        let mesh = strip(3);
        for n in mesh.compute_normals() {
            assert_eq!(n, Vec3::Y);
        }
    }

    #[test]
    fn test_gpu_vertices_cast() {
        let mesh = strip(2);
        let vertices = mesh.to_vertices();
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), 4 * std::mem::size_of::<RibbonVertex>());
        assert_eq!(vertices[1].position, [0.0, 0.0, -1.0]);
    }
}

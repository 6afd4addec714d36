//! Mesh storage and the base sphere primitive.
//!
//! Every blob variant starts from the same subdivided UV sphere; the vertex
//! count and triangulation are fixed at construction and only positions (and
//! morph targets) change afterwards. Vertices are `Pod` so the bridge can
//! hand the buffers to the GPU without copying.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// GPU-compatible mesh vertex: 24 bytes
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3], // 12 bytes
    pub normal: [f32; 3],   // 12 bytes
}

/// A triangle mesh: vertex array plus a fixed index buffer.
#[derive(Clone, Debug)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Build a UV sphere with `width_segments` longitude and
    /// `height_segments` latitude divisions.
    ///
    /// Matches the layout of three.js `SphereGeometry`: a
    /// `(w + 1) x (h + 1)` vertex grid with duplicated seam column and pole
    /// rows, degenerate pole triangles skipped in the index buffer. Normals
    /// start out radial (the sphere is unit radius).
    pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        let w = width_segments.max(3);
        let h = height_segments.max(2);

        let mut vertices = Vec::with_capacity(((w + 1) * (h + 1)) as usize);
        for iy in 0..=h {
            let v = iy as f32 / h as f32;
            let theta = v * std::f32::consts::PI;
            for ix in 0..=w {
                let u = ix as f32 / w as f32;
                let phi = u * std::f32::consts::TAU;
                let dir = Vec3::new(
                    -phi.cos() * theta.sin(),
                    theta.cos(),
                    phi.sin() * theta.sin(),
                );
                vertices.push(Vertex {
                    position: (dir * radius).to_array(),
                    normal: dir.to_array(),
                });
            }
        }

        let row = w + 1;
        let mut indices = Vec::with_capacity((6 * w * h - 6 * w) as usize);
        for iy in 0..h {
            for ix in 0..w {
                let a = iy * row + ix + 1;
                let b = iy * row + ix;
                let c = (iy + 1) * row + ix;
                let d = (iy + 1) * row + ix + 1;
                if iy != 0 {
                    indices.extend_from_slice(&[a, b, d]);
                }
                if iy != h - 1 {
                    indices.extend_from_slice(&[b, c, d]);
                }
            }
        }

        Self { vertices, indices }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Positions only, for building morph targets.
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.vertices.iter().map(|v| Vec3::from_array(v.position))
    }

    /// Recompute smooth vertex normals from the current positions.
    ///
    /// Area-weighted accumulation of face normals, then normalisation.
    /// Vertices whose incident faces all degenerate keep a zero normal.
    pub fn recompute_normals(&mut self) {
        let mut accum = vec![Vec3::ZERO; self.vertices.len()];
        for tri in self.indices.chunks_exact(3) {
            let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let p0 = Vec3::from_array(self.vertices[i0].position);
            let p1 = Vec3::from_array(self.vertices[i1].position);
            let p2 = Vec3::from_array(self.vertices[i2].position);
            // Cross product length encodes the face area, so big faces weigh more
            let face = (p1 - p0).cross(p2 - p0);
            accum[i0] += face;
            accum[i1] += face;
            accum[i2] += face;
        }
        for (vertex, n) in self.vertices.iter_mut().zip(accum) {
            vertex.normal = n.normalize_or_zero().to_array();
        }
    }
}

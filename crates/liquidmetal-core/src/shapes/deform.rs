//! Construction-time vertex deformations.
//!
//! These run once when a cluster is built, never per frame. All constants
//! are tuned by eye, not derived from a physical model; they are reproduced
//! exactly for visual parity.

use glam::Vec3;

use crate::math::noise3d;
use crate::mesh::MeshData;

/// Pinch the bottom and stretch the top of a sphere into a teardrop.
///
/// For a vertex at height `y` in [-1, 1]: the horizontal taper grows as
/// `((y + 1) / 2) ^ 0.7` from the point at the bottom to full width at the
/// top, while the top is stretched upward and lifted by a cubic term. The
/// deformation is directional, not idempotent; it is applied exactly once
/// to the shared base mesh.
pub fn teardrop(mesh: &mut MeshData) {
    for vertex in &mut mesh.vertices {
        let [x, y, z] = vertex.position;
        let height_factor = (y + 1.0) / 2.0;
        let taper_factor = height_factor.powf(0.7);
        let stretch_factor = 1.0 + height_factor * 0.8;
        vertex.position = [
            x * taper_factor,
            y * stretch_factor + height_factor.powi(3) * 0.5,
            z * taper_factor,
        ];
    }
    mesh.recompute_normals();
}

/// Push sphere vertices radially by two octaves of noise, keyed by the
/// instance index so every chunk gets a distinct, stable, irregular shape.
///
/// Zero-length vertices are left untouched (no direction to push along).
pub fn fluid_chunk(mesh: &mut MeshData, index: usize) {
    const NOISE_SCALE: f32 = 2.0;
    const NOISE_AMOUNT: f32 = 0.4;
    let idx = index as f32;

    for vertex in &mut mesh.vertices {
        let p = Vec3::from_array(vertex.position);
        let n1 = noise3d(p.x * NOISE_SCALE + idx, p.y * NOISE_SCALE, p.z * NOISE_SCALE);
        let n2 = noise3d(
            p.x * NOISE_SCALE * 2.0 + idx * 0.5,
            p.y * NOISE_SCALE * 2.0,
            p.z * NOISE_SCALE * 2.0,
        ) * 0.5;
        let total_noise = (n1 + n2) * NOISE_AMOUNT;

        let length = p.length();
        if length > 0.0 {
            let factor = (length + total_noise) / length;
            vertex.position = (p * factor).to_array();
        }
    }
    mesh.recompute_normals();
}

/// Alternate position sets the renderer blends with the base sphere.
///
/// Same vertex count and order as the base mesh, always.
#[derive(Debug)]
pub struct MorphTargets {
    /// "Cube-like" target, scaled to 1.2
    pub cube: Vec<[f32; 3]>,
    /// "Octahedron-like" target, scaled to 1.4
    pub octahedron: Vec<[f32; 3]>,
}

/// Build both morph targets from the base sphere positions.
///
/// Cube-like: project onto the max-norm shell (`|c| / max(|x|,|y|,|z|)`).
/// Octahedron-like: project onto the L1 shell (`|c| / (|x|+|y|+|z|)`).
/// A zero norm means the vertex sits at the origin; it passes through
/// unchanged rather than dividing by zero.
pub fn morph_targets(mesh: &MeshData) -> MorphTargets {
    let mut cube = Vec::with_capacity(mesh.vertex_count());
    let mut octahedron = Vec::with_capacity(mesh.vertex_count());

    for p in mesh.positions() {
        let max_coord = p.x.abs().max(p.y.abs()).max(p.z.abs());
        if max_coord > 0.0 {
            cube.push([
                (p.x / max_coord) * p.x.signum() * 1.2,
                (p.y / max_coord) * p.y.signum() * 1.2,
                (p.z / max_coord) * p.z.signum() * 1.2,
            ]);
        } else {
            cube.push(p.to_array());
        }

        let sum = p.x.abs() + p.y.abs() + p.z.abs();
        if sum > 0.0 {
            octahedron.push([
                (p.x / sum) * p.x.signum() * 1.4,
                (p.y / sum) * p.y.signum() * 1.4,
                (p.z / sum) * p.z.signum() * 1.4,
            ]);
        } else {
            octahedron.push(p.to_array());
        }
    }

    MorphTargets { cube, octahedron }
}

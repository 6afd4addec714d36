//! Deterministic scalar helpers: the blob noise field and float hashes.
//!
//! Everything here is pure. The same inputs always produce bit-identical
//! output, which is what makes cluster rebuilds reproducible.

/// Three-octave sine/cosine noise field used to deform chunk vertices.
///
/// Weighted sum of three frequency bands (weights 1, 0.5, 0.25) divided by
/// 1.75. The result is nominally in roughly [-1, 1] but not strictly
/// bounded; it is not a normalized gradient noise.
pub fn noise3d(x: f32, y: f32, z: f32) -> f32 {
    ((x * 3.14159).sin() * (y * 2.71828).cos() * (z * 1.41421).sin()
        + (x * 2.5).sin() * (y * 3.1).cos() * (z * 2.2).sin() * 0.5
        + (x * 4.7).sin() * (y * 1.9).cos() * (z * 3.3).sin() * 0.25)
        / 1.75
}

/// Hash vec2 to [0,1] - port of GLSL hash12
pub fn hash12(x: f32, y: f32) -> f32 {
    let p3x = (x * 0.1031).fract();
    let p3y = (x * 0.1031).fract(); // .xyx pattern: z = x
    let p3z = (y * 0.1031).fract();
    let dot_val = p3x * (p3y + 33.33) + p3y * (p3z + 33.33) + p3z * (p3x + 33.33);
    let p3x = p3x + dot_val;
    let p3y = p3y + dot_val;
    let p3z = p3z + dot_val;
    ((p3x + p3y) * p3z).fract()
}

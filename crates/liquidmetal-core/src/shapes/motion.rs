//! Per-frame motion model.
//!
//! Every quantity here is a pure function of `(variant, time, index)` - no
//! accumulation, no feedback from prior frames. Instances of one variant
//! share the formula family and desynchronise purely through the per-index
//! phase offset.

use std::f32::consts::PI;

use glam::Vec3;

use crate::mode::ShapeVariant;

/// Mutable per-instance render state, recomputed from scratch every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles (x, y, z), radians
    pub rotation: Vec3,
    /// Uniform scale
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

/// Per-index phase offset; the spacing constant differs per variant.
pub fn phase_offset(variant: ShapeVariant, index: usize) -> f32 {
    let k = match variant {
        ShapeVariant::Metaballs => 0.5,
        ShapeVariant::Teardrops => 0.7,
        ShapeVariant::FluidChunks => 0.8,
        ShapeVariant::MorphingPoly => 1.2,
    };
    index as f32 * k
}

/// Compute the transform of instance `index` at simulation time `time`.
///
/// `base_scale` is the instance's layout scale; the pulse terms ride on top
/// of it. All constants are free design values tuned for the original look.
pub fn instance_transform(
    variant: ShapeVariant,
    time: f32,
    index: usize,
    base_scale: f32,
) -> Transform {
    let t = time;
    let off = phase_offset(variant, index);

    match variant {
        ShapeVariant::Metaballs => {
            let radial = 2.0 + (t * 0.3).sin() * 0.5;
            Transform {
                position: Vec3::new(
                    (t * 0.8 + off).cos() * radial,
                    (t * 1.5 + off).sin() * 0.8,
                    (t * 0.8 + off).sin() * radial,
                ),
                // Spheres never rotate; liquidness is motion only
                rotation: Vec3::ZERO,
                scale: base_scale + (t * 3.0 + off).sin() * 0.1,
            }
        }
        ShapeVariant::Teardrops => {
            let radial = 2.5 + (t * 0.4).sin() * 0.8;
            Transform {
                position: Vec3::new(
                    (t * 0.6 + off).cos() * radial,
                    (t * 1.2 + off).sin() * 1.2,
                    (t * 0.6 + off).sin() * radial,
                ),
                rotation: Vec3::new(t * 0.3 + off, 0.0, (t * 0.8 + off).sin() * 0.3),
                scale: base_scale + (t * 2.5 + off).sin() * 0.15,
            }
        }
        ShapeVariant::FluidChunks => {
            let radial = 3.0 + (t * 0.2).sin() * 1.2;
            Transform {
                position: Vec3::new(
                    (t * 0.4 + off).cos() * radial,
                    // Two additive vertical terms make the bob irregular
                    (t * 0.9 + off).sin() * 1.5 + (t * 1.7 + off).cos() * 0.5,
                    (t * 0.4 + off).sin() * radial,
                ),
                rotation: Vec3::new(
                    t * 0.4 + off + (t * 1.3).sin() * 0.2,
                    t * 0.6 + off * 0.7,
                    (t * 0.7 + off).sin() * 0.4,
                ),
                scale: base_scale
                    + (t * 2.2 + off).sin() * 0.2
                    + (t * 3.1 + off * 0.6).cos() * 0.1,
            }
        }
        ShapeVariant::MorphingPoly => {
            let radial = 2.5 + (t * 0.3).sin() * 0.7;
            Transform {
                position: Vec3::new(
                    (t * 0.5 + off).cos() * radial,
                    (t * 0.8 + off).sin() * 1.0,
                    (t * 0.5 + off).sin() * radial,
                ),
                rotation: Vec3::new(
                    t * 0.7 + off,
                    t * 0.5 + off * 0.8,
                    (t * 0.9 + off).sin() * 0.5,
                ),
                scale: base_scale + (t * 1.8 + off).sin() * 0.18,
            }
        }
    }
}

/// Two morph-target weights in [0, 1], driven by the morph cycle.
///
/// The second weight leads the first by pi/3 so the cube and octahedron
/// influences peak at different times.
pub fn morph_weights(time: f32, index: usize) -> [f32; 2] {
    let cycle = time * 0.8 + phase_offset(ShapeVariant::MorphingPoly, index);
    [
        (cycle.sin() + 1.0) / 2.0,
        ((cycle + PI / 3.0).sin() + 1.0) / 2.0,
    ]
}

/// Constant Y-axis spin of the enclosing group, rad/s.
pub fn group_spin(variant: ShapeVariant) -> f32 {
    match variant {
        ShapeVariant::Metaballs => 0.2,
        ShapeVariant::Teardrops => 0.15,
        ShapeVariant::FluidChunks => 0.1,
        ShapeVariant::MorphingPoly => 0.18,
    }
}

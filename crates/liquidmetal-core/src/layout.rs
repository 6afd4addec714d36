//! Initial ring placement for a cluster.
//!
//! Computed once when count, variant or seed changes - never re-rolled per
//! frame. The jitter the original rolled with `Math.random()` comes from
//! seeded float hashes here, so the same `(variant, count, seed)` always
//! lays out the same ring.

use std::f32::consts::TAU;

use glam::Vec3;

use crate::math::hash12;
use crate::mode::ShapeVariant;

/// Initial state of one instance: ring position plus base scale.
///
/// The motion model overwrites the position from the first frame on and
/// consumes `scale` as the base of its pulse terms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    pub scale: f32,
}

struct LayoutParams {
    ring_radius: f32,
    y_half_range: f32,
    scale_base: f32,
    scale_range: f32,
    xz_jitter: f32,
}

fn params(variant: ShapeVariant) -> LayoutParams {
    match variant {
        ShapeVariant::Metaballs => LayoutParams {
            ring_radius: 2.0,
            y_half_range: 1.0,
            scale_base: 0.8,
            scale_range: 0.4,
            xz_jitter: 0.0,
        },
        ShapeVariant::Teardrops => LayoutParams {
            ring_radius: 2.2,
            y_half_range: 1.25,
            scale_base: 0.7,
            scale_range: 0.5,
            xz_jitter: 0.0,
        },
        // The only variant with horizontal jitter on the ring
        ShapeVariant::FluidChunks => LayoutParams {
            ring_radius: 2.8,
            y_half_range: 1.5,
            scale_base: 0.6,
            scale_range: 0.6,
            xz_jitter: 0.4,
        },
        ShapeVariant::MorphingPoly => LayoutParams {
            ring_radius: 2.3,
            y_half_range: 1.1,
            scale_base: 0.7,
            scale_range: 0.4,
            xz_jitter: 0.0,
        },
    }
}

/// Seeded stand-in for `Math.random()`: one value in [0,1] per
/// (seed, index, salt) triple.
fn rand01(seed: u32, index: usize, salt: f32) -> f32 {
    hash12(
        index as f32 * 7.31 + salt * 13.7,
        seed as f32 * 0.0173 + salt * 1.618,
    )
}

/// Place `count` instances on a ring.
///
/// Instance `i` sits at angle `i / count * 2pi`; height, scale and (for
/// FluidChunks) horizontal jitter come from the seeded hash.
pub fn ring_layout(variant: ShapeVariant, count: usize, seed: u32) -> Vec<Placement> {
    let p = params(variant);
    let mut placements = Vec::with_capacity(count);

    for i in 0..count {
        let angle = i as f32 / count as f32 * TAU;
        let jitter_x = (rand01(seed, i, 0.0) - 0.5) * 2.0 * p.xz_jitter;
        let jitter_z = (rand01(seed, i, 1.0) - 0.5) * 2.0 * p.xz_jitter;
        let y = (rand01(seed, i, 2.0) - 0.5) * 2.0 * p.y_half_range;
        let scale = p.scale_base + rand01(seed, i, 3.0) * p.scale_range;

        placements.push(Placement {
            position: Vec3::new(
                angle.cos() * p.ring_radius + jitter_x,
                y,
                angle.sin() * p.ring_radius + jitter_z,
            ),
            scale,
        });
    }

    placements
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_deterministic() {
        for variant in ShapeVariant::ALL {
            let a = ring_layout(variant, 8, 42);
            let b = ring_layout(variant, 8, 42);
            assert_eq!(a, b, "{variant:?}: same seed must reproduce the layout");
        }
    }

    #[test]
    fn test_seed_changes_fluid_chunk_jitter() {
        let a = ring_layout(ShapeVariant::FluidChunks, 8, 1);
        let b = ring_layout(ShapeVariant::FluidChunks, 8, 2);
        assert!(
            a.iter().zip(&b).any(|(pa, pb)| pa != pb),
            "different seeds produced identical jittered layouts"
        );
    }

    #[test]
    fn test_only_fluid_chunks_jitter_the_ring() {
        for variant in [
            ShapeVariant::Metaballs,
            ShapeVariant::Teardrops,
            ShapeVariant::MorphingPoly,
        ] {
            let p = params(variant);
            for placement in ring_layout(variant, 12, 7) {
                let r = (placement.position.x.powi(2) + placement.position.z.powi(2)).sqrt();
                assert!(
                    (r - p.ring_radius).abs() < 1e-4,
                    "{variant:?}: instance off the ring (r = {r})"
                );
            }
        }
    }

    #[test]
    fn test_scales_within_variant_range() {
        for variant in ShapeVariant::ALL {
            let p = params(variant);
            for placement in ring_layout(variant, 15, 99) {
                assert!(
                    placement.scale >= p.scale_base
                        && placement.scale <= p.scale_base + p.scale_range,
                    "{variant:?}: scale {} out of range",
                    placement.scale
                );
            }
        }
    }

    #[test]
    fn test_heights_within_variant_range() {
        for variant in ShapeVariant::ALL {
            let p = params(variant);
            for placement in ring_layout(variant, 15, 3) {
                assert!(
                    placement.position.y.abs() <= p.y_half_range + 1e-4,
                    "{variant:?}: y {} out of range",
                    placement.position.y
                );
            }
        }
    }
}

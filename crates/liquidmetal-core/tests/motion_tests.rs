use liquidmetal_core::shapes::motion::{
    group_spin, instance_transform, morph_weights, phase_offset,
};
use liquidmetal_core::ShapeVariant;

const EPS: f32 = 1e-5;

#[test]
fn test_spot_values_at_time_zero() {
    // Index 0 at t=0: every sin(t*k) term is zero, orbit angle is zero
    let m = instance_transform(ShapeVariant::Metaballs, 0.0, 0, 1.0);
    assert!((m.position.x - 2.0).abs() < EPS);
    assert!(m.position.y.abs() < EPS && m.position.z.abs() < EPS);

    let t = instance_transform(ShapeVariant::Teardrops, 0.0, 0, 1.0);
    assert!((t.position.x - 2.5).abs() < EPS);

    // Fluid chunks keep a cosine bob term: y = sin(0)*1.5 + cos(0)*0.5
    let c = instance_transform(ShapeVariant::FluidChunks, 0.0, 0, 1.0);
    assert!((c.position.x - 3.0).abs() < EPS);
    assert!((c.position.y - 0.5).abs() < EPS);
    // and a cosine scale term: 1.0 + sin(0)*0.2 + cos(0)*0.1
    assert!((c.scale - 1.1).abs() < EPS);

    let p = instance_transform(ShapeVariant::MorphingPoly, 0.0, 0, 1.0);
    assert!((p.position.x - 2.5).abs() < EPS);
}

#[test]
fn test_phase_offset_constants() {
    assert_eq!(phase_offset(ShapeVariant::Metaballs, 2), 1.0);
    assert_eq!(phase_offset(ShapeVariant::Teardrops, 2), 1.4);
    assert_eq!(phase_offset(ShapeVariant::FluidChunks, 2), 1.6);
    assert_eq!(phase_offset(ShapeVariant::MorphingPoly, 2), 2.4);
}

#[test]
fn test_morph_weight_scenario() {
    // t=0, index 0: w1 = (sin 0 + 1)/2 = 0.5, w2 = (sin pi/3 + 1)/2
    let [w1, w2] = morph_weights(0.0, 0);
    assert!((w1 - 0.5).abs() < EPS, "w1 = {w1}");
    assert!((w2 - 0.933).abs() < 1e-3, "w2 = {w2}");
}

#[test]
fn test_morph_weights_cycle_with_time() {
    // The weights must traverse most of [0,1] over one cycle (2pi / 0.8 s)
    let mut min = f32::MAX;
    let mut max = f32::MIN;
    for step in 0..314 {
        let t = step as f32 * 0.025;
        let [w1, _] = morph_weights(t, 0);
        min = min.min(w1);
        max = max.max(w1);
    }
    assert!(min < 0.01 && max > 0.99, "w1 range [{min}, {max}] too narrow");
}

#[test]
fn test_orbit_radius_breathes() {
    // The radial term of the metaball orbit oscillates between 1.5 and 2.5
    let mut min = f32::MAX;
    let mut max = f32::MIN;
    for step in 0..2000 {
        let t = step as f32 * 0.05;
        let p = instance_transform(ShapeVariant::Metaballs, t, 0, 1.0).position;
        let r = (p.x * p.x + p.z * p.z).sqrt();
        min = min.min(r);
        max = max.max(r);
    }
    assert!(min < 1.6 && min > 1.4, "min orbit radius {min}");
    assert!(max > 2.4 && max < 2.6, "max orbit radius {max}");
}

#[test]
fn test_scale_pulse_rides_on_base_scale() {
    for variant in ShapeVariant::ALL {
        let small = instance_transform(variant, 1.1, 4, 0.5).scale;
        let large = instance_transform(variant, 1.1, 4, 1.2).scale;
        assert!(
            ((large - small) - 0.7).abs() < EPS,
            "{variant:?}: pulse must be additive over the base scale"
        );
    }
}

#[test]
fn test_group_spin_distinct_per_variant() {
    let rates: Vec<f32> = ShapeVariant::ALL.iter().map(|v| group_spin(*v)).collect();
    for i in 0..rates.len() {
        for j in (i + 1)..rates.len() {
            assert_ne!(rates[i], rates[j], "spin rates must differ");
        }
    }
}

#[test]
fn test_fifteen_instances_never_coincide() {
    // Worst case count: all instances of one variant at one instant must
    // occupy distinct positions
    for variant in ShapeVariant::ALL {
        for step in 0..50 {
            let t = step as f32 * 0.37;
            for i in 0..15 {
                for j in (i + 1)..15 {
                    let a = instance_transform(variant, t, i, 1.0).position;
                    let b = instance_transform(variant, t, j, 1.0).position;
                    assert!(
                        (a - b).length() > 1e-4,
                        "{variant:?}: instances {i} and {j} coincide at t = {t}"
                    );
                }
            }
        }
    }
}

use bytemuck::Zeroable;
use wasm_bindgen::prelude::*;

use liquidmetal_core::{Cluster, MaterialConfig, ModeContext, ShapeVariant, MAX_COUNT, MIN_COUNT};

/// GPU-compatible instance transform: 48 bytes, matches the WGSL struct
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct GpuInstance {
    position: [f32; 3], // 12 bytes
    scale: f32,         //  4 bytes
    rotation: [f32; 3], // 12 bytes (Euler xyz)
    morph_cube: f32,    //  4 bytes
    morph_octa: f32,    //  4 bytes
    _pad: [f32; 3],     // 12 bytes
}

/// Pending rebuild parameters, applied atomically at the start of the next
/// frame so a mid-frame mode switch never exposes partial state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Pending {
    variant: ShapeVariant,
    count: usize,
    seed: u32,
}

/// Resolve the rebuild request to mutate: the one already latched for the
/// next frame if present, otherwise a fresh one seeded from the current
/// state. Requests made within one frame accumulate instead of replacing
/// each other.
fn latched(pending: Option<Pending>, variant: ShapeVariant, count: usize, seed: u32) -> Pending {
    pending.unwrap_or(Pending {
        variant,
        count,
        seed,
    })
}

#[wasm_bindgen]
pub struct BlobWorld {
    mode: ModeContext,
    material: MaterialConfig,
    cluster: Cluster,
    time: f32,
    pending: Option<Pending>,
    instance_buffer: Vec<GpuInstance>,
}

#[wasm_bindgen]
impl BlobWorld {
    #[wasm_bindgen(constructor)]
    pub fn new(count: usize, seed: u32) -> BlobWorld {
        web_sys::console::log_1(
            &format!("WASM BlobWorld created: {count} instances, seed {seed}").into(),
        );

        let mode = ModeContext::new();
        let cluster = match Cluster::build(mode.mode(), count, seed) {
            Ok(cluster) => cluster,
            Err(e) => wasm_bindgen::throw_str(&e.to_string()),
        };
        let instance_buffer = vec![GpuInstance::zeroed(); count];

        let mut world = BlobWorld {
            mode,
            material: MaterialConfig::default(),
            cluster,
            time: 0.0,
            pending: None,
            instance_buffer,
        };
        world.write_instance_buffer();
        world
    }

    /// Advance the simulation clock by `dt` seconds and refresh all
    /// per-instance transforms. Returns elapsed wall milliseconds.
    #[wasm_bindgen]
    pub fn step(&mut self, dt: f32) -> f32 {
        let start = js_sys::Date::now();

        // Mode/count/seed changes latch until here and replace the whole
        // cluster before any instance is advanced
        if let Some(pending) = self.pending.take() {
            match Cluster::build(pending.variant, pending.count, pending.seed) {
                Ok(cluster) => {
                    self.cluster = cluster;
                    self.instance_buffer
                        .resize(pending.count, GpuInstance::zeroed());
                }
                Err(e) => {
                    // Keep showing the previous cluster
                    web_sys::console::warn_1(&format!("cluster rebuild rejected: {e}").into());
                }
            }
        }

        self.time += dt;
        self.cluster.advance(self.time);
        self.write_instance_buffer();

        (js_sys::Date::now() - start) as f32
    }

    /// Select the active geometry variant; takes effect next frame.
    #[wasm_bindgen]
    pub fn set_mode(&mut self, id: u32) {
        let variant = ShapeVariant::from_id(id);
        self.mode.set_mode(variant);
        web_sys::console::log_1(&format!("geometry mode: {}", variant.name()).into());
        self.latched_mut().variant = variant;
    }

    #[wasm_bindgen]
    pub fn mode(&self) -> u32 {
        self.mode.mode().id()
    }

    /// Change the instance count; rejected immediately if out of range.
    #[wasm_bindgen]
    pub fn set_count(&mut self, count: usize) {
        if !(MIN_COUNT..=MAX_COUNT).contains(&count) {
            web_sys::console::warn_1(
                &format!("instance count {count} outside {MIN_COUNT}..={MAX_COUNT}, ignored")
                    .into(),
            );
            return;
        }
        self.latched_mut().count = count;
    }

    /// Re-roll the layout jitter with a new seed; takes effect next frame.
    #[wasm_bindgen]
    pub fn set_seed(&mut self, seed: u32) {
        self.latched_mut().seed = seed;
    }

    #[wasm_bindgen]
    pub fn min_count(&self) -> usize {
        MIN_COUNT
    }

    #[wasm_bindgen]
    pub fn max_count(&self) -> usize {
        MAX_COUNT
    }

    #[wasm_bindgen]
    pub fn instance_count(&self) -> usize {
        self.cluster.len()
    }

    /// Y spin of the whole cluster group, radians.
    #[wasm_bindgen]
    pub fn group_rotation_y(&self) -> f32 {
        self.cluster.group_rotation_y()
    }

    // ---------- zero-copy buffer access ----------

    /// Number of distinct vertex buffers (1, or one per instance for
    /// Fluid Chunks).
    #[wasm_bindgen]
    pub fn mesh_count(&self) -> usize {
        self.cluster.mesh().mesh_count()
    }

    /// Vertex buffer of mesh `mesh_index`: interleaved position + normal,
    /// 6 floats per vertex.
    #[wasm_bindgen]
    pub fn vertex_buffer_ptr(&self, mesh_index: usize) -> *const f32 {
        self.cluster.mesh_for(mesh_index).vertices.as_ptr() as *const f32
    }

    #[wasm_bindgen]
    pub fn vertex_count(&self, mesh_index: usize) -> usize {
        self.cluster.mesh_for(mesh_index).vertex_count()
    }

    /// Shared triangulation; identical for every mesh of the cluster.
    #[wasm_bindgen]
    pub fn index_buffer_ptr(&self) -> *const u32 {
        self.cluster.mesh_for(0).indices.as_ptr()
    }

    #[wasm_bindgen]
    pub fn index_count(&self) -> usize {
        self.cluster.mesh_for(0).indices.len()
    }

    /// Morph target positions, 3 floats per vertex. `which` selects 0
    /// (cube-like) or 1 (octahedron-like). Null unless the active variant
    /// is Morphing Poly.
    #[wasm_bindgen]
    pub fn morph_target_ptr(&self, which: u32) -> *const f32 {
        match self.cluster.morph_targets() {
            Some(targets) if which == 0 => targets.cube.as_ptr() as *const f32,
            Some(targets) if which == 1 => targets.octahedron.as_ptr() as *const f32,
            _ => std::ptr::null(),
        }
    }

    #[wasm_bindgen]
    pub fn morph_target_len(&self) -> usize {
        self.cluster
            .morph_targets()
            .map_or(0, |targets| targets.cube.len() * 3)
    }

    /// Per-instance transforms, one `GpuInstance` (48 bytes) per instance.
    #[wasm_bindgen]
    pub fn instance_buffer_ptr(&self) -> *const f32 {
        self.instance_buffer.as_ptr() as *const f32
    }

    #[wasm_bindgen]
    pub fn instance_buffer_byte_length(&self) -> usize {
        self.instance_buffer.len() * std::mem::size_of::<GpuInstance>()
    }

    // ---------- material ----------

    #[wasm_bindgen]
    #[allow(clippy::too_many_arguments)]
    pub fn set_material(
        &mut self,
        r: f32,
        g: f32,
        b: f32,
        metalness: f32,
        roughness: f32,
        emissive_r: f32,
        emissive_g: f32,
        emissive_b: f32,
        emissive_intensity: f32,
        opacity: f32,
    ) {
        self.material = MaterialConfig {
            color: [r, g, b],
            metalness,
            roughness,
            emissive: [emissive_r, emissive_g, emissive_b],
            emissive_intensity,
            opacity,
        };
    }

    /// Material parameters packed as 10 floats: color rgb, metalness,
    /// roughness, emissive rgb, emissive intensity, opacity.
    #[wasm_bindgen]
    pub fn material(&self) -> Vec<f32> {
        let m = &self.material;
        vec![
            m.color[0],
            m.color[1],
            m.color[2],
            m.metalness,
            m.roughness,
            m.emissive[0],
            m.emissive[1],
            m.emissive[2],
            m.emissive_intensity,
            m.opacity,
        ]
    }

    // ---------- mode metadata for the selector UI ----------

    #[wasm_bindgen]
    pub fn mode_name(&self, id: u32) -> String {
        ShapeVariant::from_id(id).name().to_owned()
    }

    #[wasm_bindgen]
    pub fn mode_description(&self, id: u32) -> String {
        ShapeVariant::from_id(id).description().to_owned()
    }
}

impl BlobWorld {
    /// Rebuild request for the next frame, accumulating any changes already
    /// latched this frame.
    fn latched_mut(&mut self) -> &mut Pending {
        let fallback = latched(
            self.pending,
            self.mode.mode(),
            self.cluster.len(),
            self.cluster.seed(),
        );
        self.pending.insert(fallback)
    }

    fn write_instance_buffer(&mut self) {
        for (slot, instance) in self.instance_buffer.iter_mut().zip(self.cluster.instances()) {
            let t = &instance.transform;
            *slot = GpuInstance {
                position: t.position.to_array(),
                scale: t.scale,
                rotation: t.rotation.to_array(),
                morph_cube: instance.morph[0],
                morph_octa: instance.morph[1],
                _pad: [0.0; 3],
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rebuild_requests_accumulate_within_a_frame() {
        // First request of the frame starts from the live cluster state
        let mut p = latched(None, ShapeVariant::Metaballs, 8, 7);
        p.count = 10;
        // A later request must build on the latched values, not the live
        // cluster's, or the earlier change is silently dropped
        let mut p = latched(Some(p), ShapeVariant::Metaballs, 8, 7);
        p.seed = 5;
        assert_eq!(
            p,
            Pending {
                variant: ShapeVariant::Metaballs,
                count: 10,
                seed: 5
            }
        );

        let mut p = latched(Some(p), ShapeVariant::Metaballs, 8, 7);
        p.variant = ShapeVariant::FluidChunks;
        assert_eq!(p.count, 10, "count change must survive a mode change");
        assert_eq!(p.seed, 5, "seed change must survive a mode change");
    }

    #[test]
    fn test_first_request_seeds_from_live_state() {
        let p = latched(None, ShapeVariant::Teardrops, 12, 3);
        assert_eq!(
            p,
            Pending {
                variant: ShapeVariant::Teardrops,
                count: 12,
                seed: 3
            }
        );
    }
}

//! Material parameters owned by the composition layer.

/// PBR-style material handle shared by every instance of the active cluster.
///
/// The core never samples these values; they exist so the frontend's control
/// panel has one mutable place to write to and the renderer one place to
/// read from. Defaults are the liquid-metal look: polished silver with a
/// faint blue emissive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialConfig {
    pub color: [f32; 3],
    pub metalness: f32,
    pub roughness: f32,
    pub emissive: [f32; 3],
    pub emissive_intensity: f32,
    pub opacity: f32,
}

impl Default for MaterialConfig {
    fn default() -> Self {
        Self {
            // #C0C0C0
            color: [192.0 / 255.0, 192.0 / 255.0, 192.0 / 255.0],
            metalness: 0.9,
            roughness: 0.1,
            // #001122
            emissive: [0.0, 17.0 / 255.0, 34.0 / 255.0],
            emissive_intensity: 0.1,
            opacity: 0.9,
        }
    }
}

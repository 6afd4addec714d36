//! Active geometry mode selection.

/// The four blob geometry variants.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ShapeVariant {
    #[default]
    Metaballs = 0, // Plain spheres, motion does all the work
    Teardrops = 1, // Tapered/stretched sphere, shared mesh
    FluidChunks = 2, // Noise-deformed, one mesh per instance
    MorphingPoly = 3, // Sphere blending toward cube/octahedron targets
}

impl ShapeVariant {
    pub const ALL: [ShapeVariant; 4] = [
        ShapeVariant::Metaballs,
        ShapeVariant::Teardrops,
        ShapeVariant::FluidChunks,
        ShapeVariant::MorphingPoly,
    ];

    /// Numeric id mapping for the bridge; unknown ids fall back to Metaballs.
    pub fn from_id(id: u32) -> Self {
        match id {
            1 => ShapeVariant::Teardrops,
            2 => ShapeVariant::FluidChunks,
            3 => ShapeVariant::MorphingPoly,
            _ => ShapeVariant::Metaballs,
        }
    }

    pub fn id(self) -> u32 {
        self as u32
    }

    /// Display name for the selector UI.
    pub fn name(self) -> &'static str {
        match self {
            ShapeVariant::Metaballs => "Metaballs",
            ShapeVariant::Teardrops => "Teardrops",
            ShapeVariant::FluidChunks => "Fluid Chunks",
            ShapeVariant::MorphingPoly => "Morphing Poly",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ShapeVariant::Metaballs => "Classic spherical liquid metal",
            ShapeVariant::Teardrops => "Organic flowing blob shapes",
            ShapeVariant::FluidChunks => "Irregular noise-deformed geometry",
            ShapeVariant::MorphingPoly => "Shape-shifting geometric forms",
        }
    }
}

/// Holds the active variant for whoever composes cluster and renderer.
///
/// Switching the mode is just a state change; the owner reacts by discarding
/// the old cluster and building a fresh one for the new variant.
#[derive(Clone, Copy, Debug, Default)]
pub struct ModeContext {
    current: ShapeVariant,
}

impl ModeContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ShapeVariant {
        self.current
    }

    pub fn set_mode(&mut self, mode: ShapeVariant) {
        if mode != self.current {
            log::debug!("geometry mode: {} -> {}", self.current.name(), mode.name());
        }
        self.current = mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_mode_is_metaballs() {
        assert_eq!(ModeContext::new().mode(), ShapeVariant::Metaballs);
    }

    #[test]
    fn test_set_mode_changes_state_only() {
        let mut ctx = ModeContext::new();
        ctx.set_mode(ShapeVariant::FluidChunks);
        assert_eq!(ctx.mode(), ShapeVariant::FluidChunks);
        ctx.set_mode(ShapeVariant::FluidChunks);
        assert_eq!(ctx.mode(), ShapeVariant::FluidChunks);
    }

    #[test]
    fn test_id_round_trip() {
        for variant in ShapeVariant::ALL {
            assert_eq!(ShapeVariant::from_id(variant.id()), variant);
        }
        // Unknown ids fall back to the default mode
        assert_eq!(ShapeVariant::from_id(99), ShapeVariant::Metaballs);
    }
}

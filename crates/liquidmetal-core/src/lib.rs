//! Procedural geometry and animation core for the liquid-metal blob scene.
//!
//! Four shape variants (metaballs, teardrops, fluid chunks, morphing
//! polyhedrons) built from a subdivided sphere, placed on a jittered ring
//! and animated by a pure time-driven motion model. The core owns no
//! rendering state: it hands out meshes, morph targets and per-instance
//! transforms, and an external renderer draws them.

pub mod cluster;
pub mod config;
pub mod layout;
pub mod math;
pub mod mesh;
pub mod mode;
pub mod shapes;

pub use cluster::{BuildError, Cluster, Instance, MAX_COUNT, MIN_COUNT};
pub use config::MaterialConfig;
pub use mode::{ModeContext, ShapeVariant};

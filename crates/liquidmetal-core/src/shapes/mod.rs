//! Blob shape construction and per-frame motion.
//!
//! `deform` holds the one-shot vertex deformations applied at build time
//! (teardrop taper, per-chunk radial noise, morph targets); `motion` holds
//! the pure time-driven transform model evaluated every frame.
pub mod deform;
pub mod motion;

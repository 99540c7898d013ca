// Cyber Hand: a hand-driven cyberpunk HUD composited onto live camera frames.
//
// The library is the HUD engine (energy estimation, trails, animation clock,
// compositing primitives and the per-frame orchestrator) plus the thin camera,
// window and detector adapters the demo binary wires together.

/// Linear-light background darkening
pub mod backdrop;

/// Camera capture (nokhwa) producing mirrored frames
pub mod camera;

/// Monotonic animation tick counter
pub mod clock;

/// Fixed tuning constants
pub mod constants;

/// Hand landmark detector seam and the pointer-driven stand-in
pub mod detector;

/// Window and software raster primitives
pub mod draw;

/// Error types
pub mod error;

/// Palm/fingertip projection and the energy signal
pub mod estimator;

/// Bloom, orbital rings, gauge bar, scan line
pub mod fx;

/// Per-frame HUD orchestrator
pub mod hud;

/// Fixed colors
pub mod palette;

/// Fingertip motion trails
pub mod trail;

/// Frame buffer, points and landmarks
pub mod types;

pub use error::Error;
pub use hud::{Hud, HudReadout};

//! Folio Canvas - the particle-web hero animation
//!
//! A fixed set of drifting points that are pulled toward the pointer and
//! linked by translucent lines when close together:
//! - `Particle` - position/velocity with attraction, bounce, and friction
//! - `Field` - seeding, per-frame stepping, pairwise link rendering
//! - `PointerTracker` / `Viewport` - input and surface sizing
//! - `RenderLoop` - frame loop driven by an injected `FrameScheduler`
//! - `DrawingSurface` - the host surface seam, with recording and raster impls

pub mod config;
pub mod driver;
pub mod engine;
pub mod field;
pub mod particle;
pub mod pointer;
pub mod rand;
pub mod raster;
pub mod surface;
pub mod viewport;

pub use config::FieldConfig;
pub use driver::{FixedFrames, FrameScheduler, RenderLoop, ScriptedFrames};
pub use engine::{HostEvent, ParticleWeb};
pub use field::{Field, Link};
pub use particle::Particle;
pub use pointer::PointerTracker;
pub use raster::RasterSurface;
pub use surface::{DrawCommand, DrawingSurface, RecordingSurface};
pub use viewport::Viewport;

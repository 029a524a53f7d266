//! Bubble Field - animated landing-page effects
//!
//! Core modules:
//! - `sim`: Deterministic bubble simulation (spawning, physics, collisions)
//! - `render`: Canvas 2D shading (radial-gradient bodies, trail fade)
//! - `elements`: Static element roster the bubbles sample from
//! - `carousel`: Course card ring with lessons modal state
//! - `nav`: Nav bar active index and particle bursts
//! - `settings`: Quality presets and effect toggles

pub mod carousel;
pub mod courses;
pub mod elements;
pub mod nav;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::{Quality, Settings};
pub use sim::{Bubble, BubbleField};

/// Simulation tuning constants
pub mod consts {
    /// Upper bound on a single frame's integration step (seconds), so
    /// dropped frames can't produce runaway impulses
    pub const MAX_FRAME_DT: f32 = 0.040;

    /// Default number of bubbles in the field
    pub const DEFAULT_BUBBLE_COUNT: usize = 60;

    /// Pointer influence radius (px)
    pub const POINTER_RADIUS: f32 = 140.0;
    /// Pointer repulsion strength at zero distance (px/tick per second)
    pub const POINTER_STRENGTH: f32 = 60.0;

    /// Per-tick velocity decay factor
    pub const DAMPING: f32 = 0.995;
    /// Fraction of velocity retained (inverted) after a wall bounce
    pub const WALL_RESTITUTION: f32 = 0.6;
    /// Clearance band kept below the page header (px)
    pub const TOP_MARGIN: f32 = 40.0;

    /// Depth contribution to apparent radius:
    /// `visual_radius = base_radius * (1 + depth * DEPTH_RADIUS_GAIN)`
    pub const DEPTH_RADIUS_GAIN: f32 = 0.9;
    /// Pointer offset from viewport center to parallax translation
    pub const PARALLAX_GAIN: f32 = 0.02;
    /// Depth contribution to parallax (deeper bubbles shift more)
    pub const PARALLAX_DEPTH_GAIN: f32 = 0.08;

    /// Spawn speed bound per axis (px per tick)
    pub const SPAWN_SPEED: f32 = 0.3;
    /// Viewport width below which bubbles spawn smaller (px)
    pub const COMPACT_WIDTH: f32 = 768.0;
    /// Radius scale applied when spawning on a compact viewport
    pub const COMPACT_RADIUS_SCALE: f32 = 0.6;

    /// Floor substituted for near-zero center distances
    pub const DISTANCE_FLOOR: f32 = 0.001;

    /// Default alpha of the per-frame fade rectangle
    pub const DEFAULT_TRAIL_ALPHA: f32 = 0.2;

    /// Seconds the card transition animation locks carousel navigation
    pub const CAROUSEL_LOCK_SECS: f32 = 0.8;
    /// Seconds between automatic carousel advances
    pub const CAROUSEL_AUTO_SECS: f32 = 5.0;
    /// Horizontal travel (px) that commits a carousel drag gesture
    pub const CAROUSEL_DRAG_THRESHOLD: f32 = 50.0;

    /// Particles spawned per nav burst
    pub const NAV_BURST_SIZE: usize = 50;
    /// Centered span (px) for particle start offsets
    pub const NAV_START_SPAN: f32 = 50.0;
    /// Centered span (px) for particle end offsets
    pub const NAV_END_SPAN: f32 = 100.0;
    /// Particle lifetime bounds (ms)
    pub const NAV_LIFE_MIN_MS: f32 = 500.0;
    pub const NAV_LIFE_MAX_MS: f32 = 1000.0;
}

/// Apparent-size multiplier for a bubble at the given depth
#[inline]
pub fn depth_scale(depth: f32) -> f32 {
    1.0 + depth * consts::DEPTH_RADIUS_GAIN
}

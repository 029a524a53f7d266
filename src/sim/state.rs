//! Bubble field state and spawning
//!
//! All simulation state lives here. The field must stay pure and
//! deterministic: seeded RNG only, no rendering or platform dependencies.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::depth_scale;
use crate::elements::{self, ELEMENTS};

/// A simulated bubble
///
/// Identity (symbol, color, depth, base radius) is fixed at spawn; only
/// position and velocity mutate, and only inside the tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    /// Display symbol drawn inside the bubble
    pub symbol: &'static str,
    /// Atomic number of the sampled element
    pub number: u32,
    /// Base fill color as a hex triplet
    pub color: &'static str,
    /// Center position in viewport px
    pub pos: Vec2,
    /// Pseudo-3D depth in [0,1), fixed for the bubble's lifetime
    pub depth: f32,
    /// Nominal radius before depth scaling
    pub base_radius: f32,
    /// Velocity in px per tick
    pub vel: Vec2,
}

impl Bubble {
    /// Depth-scaled radius used for both collision and rendering
    ///
    /// Recomputed on demand rather than cached so it can never diverge
    /// from `base_radius`/`depth`.
    #[inline]
    pub fn visual_radius(&self) -> f32 {
        self.base_radius * depth_scale(self.depth)
    }
}

/// Viewport extents in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center point, the origin for parallax offsets
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Narrow viewports get smaller bubbles at spawn
    #[inline]
    pub fn is_compact(&self) -> bool {
        self.width < COMPACT_WIDTH
    }
}

/// The bubble field: a fixed-cardinality set of bubbles plus the shared
/// pointer coordinate
///
/// The collection is seeded once at construction and never grows or
/// shrinks; resize only changes the bounds the next clamp pass enforces.
#[derive(Debug, Clone)]
pub struct BubbleField {
    /// Seed the field was spawned from, kept for reproducibility
    pub seed: u64,
    pub viewport: Viewport,
    /// Height of the overlaid header region; keeps spawns clear of it
    pub header_height: f32,
    /// Shared pointer/touch position, None while no input is active.
    /// Written by event handlers, read by the tick (last writer wins).
    pub pointer: Option<Vec2>,
    /// Repulsion impulse strength at zero pointer distance
    pub repulsion_strength: f32,
    /// Pointer-offset-to-parallax multiplier
    pub parallax_gain: f32,
    pub bubbles: Vec<Bubble>,
}

impl BubbleField {
    /// Spawn `count` bubbles with seeded randomized attributes
    ///
    /// Spawn-time overlap between bubbles is allowed; the first few
    /// separation passes resolve it.
    pub fn new(viewport: Viewport, header_height: f32, count: usize, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let bubbles = (0..count)
            .map(|_| spawn_bubble(&mut rng, viewport, header_height))
            .collect();

        Self {
            seed,
            viewport,
            header_height,
            pointer: None,
            repulsion_strength: POINTER_STRENGTH,
            parallax_gain: PARALLAX_GAIN,
            bubbles,
        }
    }

    /// Update the shared pointer coordinate
    pub fn set_pointer(&mut self, pos: Vec2) {
        self.pointer = Some(pos);
    }

    /// Clear the pointer, disabling repulsion and parallax until input
    /// resumes
    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    /// Adopt new viewport bounds after a host resize
    ///
    /// Existing bubbles keep their positions and radii; any now outside
    /// the new bounds are recovered by the next wall-clamp pass.
    pub fn resize(&mut self, viewport: Viewport, header_height: f32) {
        self.viewport = viewport;
        self.header_height = header_height;
    }

    /// Parallax translation applied during integration this tick
    ///
    /// Derived from the pointer's offset from the viewport center; zero
    /// while the pointer is absent.
    pub fn parallax_shift(&self) -> Vec2 {
        match self.pointer {
            Some(p) => (p - self.viewport.center()) * self.parallax_gain,
            None => Vec2::ZERO,
        }
    }
}

/// Sample one bubble from the element roster
///
/// Position lands inside the band below the header, inset by the
/// bubble's own visual radius. Degenerate (too-small) viewports are not
/// guarded; the clamp pass pulls strays back in.
fn spawn_bubble(rng: &mut Pcg32, viewport: Viewport, header_height: f32) -> Bubble {
    let el = ELEMENTS[rng.random_range(0..ELEMENTS.len())];
    let depth = rng.random::<f32>();

    let mut base_radius = elements::base_radius(el.number);
    if viewport.is_compact() {
        base_radius *= COMPACT_RADIUS_SCALE;
    }

    let visual_r = base_radius * depth_scale(depth);
    let x = visual_r + rng.random::<f32>() * (viewport.width - visual_r * 2.0);
    let y = header_height
        + visual_r
        + rng.random::<f32>() * (viewport.height - header_height - visual_r * 2.0);

    Bubble {
        symbol: el.symbol,
        number: el.number,
        color: el.color,
        pos: Vec2::new(x, y),
        depth,
        base_radius,
        vel: Vec2::new(
            rng.random_range(-SPAWN_SPEED..SPAWN_SPEED),
            rng.random_range(-SPAWN_SPEED..SPAWN_SPEED),
        ),
    }
}

//! Nav bar effects
//!
//! DOM-free state for the header navigation:
//! - Active item index; re-activating the current item is a no-op
//! - A particle burst on every activation, seeded so bursts replay
//!   deterministically in tests
//! - Aging that reports expired particles so the host can drop their
//!   nodes as soon as the CSS animation finishes
//! - Gooey highlight placement as pure rectangle arithmetic

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// Particle colors, resolved to CSS variables by the page stylesheet
pub const PALETTE: [&str; 4] = [
    "var(--color-1)",
    "var(--color-2)",
    "var(--color-3)",
    "var(--color-4)",
];

/// One burst particle. Offsets are relative to the highlight center;
/// the CSS animation interpolates start to end over the duration.
#[derive(Debug, Clone, PartialEq)]
pub struct NavParticle {
    /// Stable handle the host uses to find the particle's node
    pub id: u32,
    pub start: Vec2,
    pub end: Vec2,
    pub color: &'static str,
    pub duration_ms: f32,
    age_ms: f32,
}

pub struct NavBar {
    pub active: usize,
    rng: Pcg32,
    particles: Vec<NavParticle>,
    next_id: u32,
}

/// Uniform offset in the centered span `[-span/2, span/2)`
fn centered(rng: &mut Pcg32, span: f32) -> f32 {
    rng.random::<f32>() * span - span / 2.0
}

impl NavBar {
    pub fn new(seed: u64) -> Self {
        Self {
            active: 0,
            rng: Pcg32::seed_from_u64(seed),
            particles: Vec::new(),
            next_id: 0,
        }
    }

    /// Make item `index` active. Returns the freshly spawned burst, or
    /// `None` when the item already was active.
    pub fn activate(&mut self, index: usize) -> Option<&[NavParticle]> {
        if index == self.active {
            return None;
        }
        self.active = index;

        let first = self.particles.len();
        for _ in 0..NAV_BURST_SIZE {
            let rng = &mut self.rng;
            let particle = NavParticle {
                id: self.next_id,
                start: Vec2::new(
                    centered(rng, NAV_START_SPAN),
                    centered(rng, NAV_START_SPAN),
                ),
                end: Vec2::new(centered(rng, NAV_END_SPAN), centered(rng, NAV_END_SPAN)),
                color: PALETTE[rng.random_range(0..PALETTE.len())],
                duration_ms: rng.random_range(NAV_LIFE_MIN_MS..NAV_LIFE_MAX_MS),
                age_ms: 0.0,
            };
            self.next_id = self.next_id.wrapping_add(1);
            self.particles.push(particle);
        }
        Some(&self.particles[first..])
    }

    /// Age particles by `dt_ms` and drop the ones past their duration.
    /// Returns the ids of the dropped particles.
    pub fn tick(&mut self, dt_ms: f32) -> Vec<u32> {
        let mut expired = Vec::new();
        self.particles.retain_mut(|p| {
            p.age_ms += dt_ms;
            if p.age_ms >= p.duration_ms {
                expired.push(p.id);
                false
            } else {
                true
            }
        });
        expired
    }

    pub fn particles(&self) -> &[NavParticle] {
        &self.particles
    }
}

/// Axis-aligned rectangle in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Placement for the gooey highlight: the item's own size, positioned
/// relative to its parent list
pub fn gooey_rect(item: ElementRect, parent: ElementRect) -> ElementRect {
    ElementRect {
        left: item.left - parent.left,
        top: item.top - parent.top,
        width: item.width,
        height: item.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activate_same_index_is_noop() {
        let mut bar = NavBar::new(7);
        assert!(bar.activate(0).is_none());
        assert!(bar.particles().is_empty());
        assert_eq!(bar.active, 0);
    }

    #[test]
    fn test_activate_spawns_bounded_burst() {
        let mut bar = NavBar::new(7);
        let burst = bar.activate(2).unwrap();

        assert_eq!(burst.len(), NAV_BURST_SIZE);
        for p in burst {
            assert!(p.start.x.abs() <= NAV_START_SPAN / 2.0);
            assert!(p.start.y.abs() <= NAV_START_SPAN / 2.0);
            assert!(p.end.x.abs() <= NAV_END_SPAN / 2.0);
            assert!(p.end.y.abs() <= NAV_END_SPAN / 2.0);
            assert!(p.duration_ms >= NAV_LIFE_MIN_MS && p.duration_ms < NAV_LIFE_MAX_MS);
            assert!(PALETTE.contains(&p.color));
        }
        assert_eq!(bar.active, 2);
    }

    #[test]
    fn test_bursts_replay_under_same_seed() {
        let mut a = NavBar::new(42);
        let mut b = NavBar::new(42);
        assert_eq!(a.activate(1).unwrap(), b.activate(1).unwrap());
    }

    #[test]
    fn test_ids_stay_unique_across_bursts() {
        let mut bar = NavBar::new(3);
        bar.activate(1);
        let second = bar.activate(0).unwrap();

        assert_eq!(second.first().map(|p| p.id), Some(NAV_BURST_SIZE as u32));
        let mut ids: Vec<u32> = bar.particles().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), NAV_BURST_SIZE * 2);
    }

    #[test]
    fn test_tick_drops_only_expired() {
        let mut bar = NavBar::new(11);
        bar.activate(1);

        // All durations start at 500 ms or later
        assert!(bar.tick(499.0).is_empty());
        assert_eq!(bar.particles().len(), NAV_BURST_SIZE);

        // And end before 1000 ms
        let expired = bar.tick(501.0);
        assert_eq!(expired.len(), NAV_BURST_SIZE);
        assert!(bar.particles().is_empty());
    }

    #[test]
    fn test_tick_staggers_with_durations() {
        let mut bar = NavBar::new(11);
        bar.activate(1);

        let due_early = bar
            .particles()
            .iter()
            .filter(|p| p.duration_ms <= 700.0)
            .count();
        let early = bar.tick(700.0);
        assert_eq!(early.len(), due_early);

        let late = bar.tick(300.0);
        assert_eq!(early.len() + late.len(), NAV_BURST_SIZE);
    }

    #[test]
    fn test_gooey_rect_is_parent_relative() {
        let item = ElementRect { left: 120.0, top: 40.0, width: 80.0, height: 30.0 };
        let parent = ElementRect { left: 100.0, top: 30.0, width: 400.0, height: 50.0 };

        let rect = gooey_rect(item, parent);
        assert_eq!(rect.left, 20.0);
        assert_eq!(rect.top, 10.0);
        assert_eq!(rect.width, 80.0);
        assert_eq!(rect.height, 30.0);
    }
}

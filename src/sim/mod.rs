//! Deterministic bubble simulation
//!
//! The core of the crate. This module must stay pure and deterministic:
//! - Seeded RNG only
//! - Host-supplied elapsed time, clamped per tick
//! - No rendering or platform dependencies
//!
//! A test harness can drive it with synthetic time steps.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{resolve_collisions, sort_by_depth};
pub use state::{Bubble, BubbleField, Viewport};
pub use tick::tick;

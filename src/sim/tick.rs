//! Per-frame field advance
//!
//! One tick applies, in order: pointer repulsion, velocity damping,
//! integration with depth parallax, wall clamping, the pairwise
//! separation pass, and the depth sort. The host clock supplies elapsed
//! time; rendering happens outside, after the tick returns.

use crate::consts::*;

use super::collision::{resolve_collisions, sort_by_depth};
use super::state::{Bubble, BubbleField, Viewport};

/// Advance the field by one frame
///
/// `dt` is the elapsed frame time in seconds, clamped to `MAX_FRAME_DT`
/// so dropped frames cannot produce runaway impulses. Velocities are
/// per-tick pixel quantities added unscaled during integration; only the
/// repulsion impulse scales with `dt`.
pub fn tick(field: &mut BubbleField, dt: f32) {
    let dt = dt.min(MAX_FRAME_DT);
    let pointer = field.pointer;
    let parallax = field.parallax_shift();
    let strength = field.repulsion_strength;
    let viewport = field.viewport;

    for bubble in &mut field.bubbles {
        // Pointer repulsion: impulse away from the pointer, fading
        // linearly to zero at the influence radius.
        if let Some(p) = pointer {
            let delta = bubble.pos - p;
            let dist = delta.length() + DISTANCE_FLOOR;
            if dist < POINTER_RADIUS {
                let push = (1.0 - dist / POINTER_RADIUS) * strength * dt;
                bubble.vel += delta / dist * push;
            }
        }

        // Exponential settle toward rest
        bubble.vel *= DAMPING;

        // Integrate; deeper bubbles take more of the parallax shift
        bubble.pos += bubble.vel + parallax * (bubble.depth * PARALLAX_DEPTH_GAIN);

        clamp_to_walls(bubble, viewport);
    }

    resolve_collisions(&mut field.bubbles);
    sort_by_depth(&mut field.bubbles);
}

/// Keep a bubble's visual extent inside the viewport
///
/// The top edge is inset by `TOP_MARGIN` to stay clear of the page
/// header. A clamped axis inverts and dampens its velocity component
/// (inelastic bounce).
pub fn clamp_to_walls(bubble: &mut Bubble, viewport: Viewport) {
    let r = bubble.visual_radius();

    if bubble.pos.x < r {
        bubble.pos.x = r;
        bubble.vel.x *= -WALL_RESTITUTION;
    }
    if bubble.pos.x > viewport.width - r {
        bubble.pos.x = viewport.width - r;
        bubble.vel.x *= -WALL_RESTITUTION;
    }
    if bubble.pos.y < r + TOP_MARGIN {
        bubble.pos.y = r + TOP_MARGIN;
        bubble.vel.y *= -WALL_RESTITUTION;
    }
    if bubble.pos.y > viewport.height - r {
        bubble.pos.y = viewport.height - r;
        bubble.vel.y *= -WALL_RESTITUTION;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn small_field() -> BubbleField {
        BubbleField::new(Viewport::new(1024.0, 768.0), 60.0, 12, 42)
    }

    #[test]
    fn test_absent_pointer_applies_damping_only() {
        // Bubbles far from every wall and from each other: with no
        // pointer, the only velocity change a tick may apply is damping.
        let mut field = BubbleField::new(Viewport::new(1024.0, 768.0), 0.0, 3, 42);
        for (i, b) in field.bubbles.iter_mut().enumerate() {
            b.pos = Vec2::new(200.0 + 300.0 * i as f32, 400.0);
            b.base_radius = 20.0;
            b.vel = Vec2::new(0.2, -0.1);
        }
        field.clear_pointer();

        tick(&mut field, 0.016);

        for b in &field.bubbles {
            assert!((b.vel.x - 0.2 * DAMPING).abs() < 1e-6);
            assert!((b.vel.y + 0.1 * DAMPING).abs() < 1e-6);
        }
    }

    #[test]
    fn test_pointer_repulsion_pushes_away() {
        let mut field = BubbleField::new(Viewport::new(1024.0, 768.0), 0.0, 1, 7);
        let b = &mut field.bubbles[0];
        b.pos = Vec2::new(500.0, 400.0);
        b.vel = Vec2::ZERO;

        // Pointer 50 px to the left: impulse should point right
        field.set_pointer(Vec2::new(450.0, 400.0));
        tick(&mut field, 0.016);

        let b = &field.bubbles[0];
        assert!(b.vel.x > 0.0, "repulsion should push away from the pointer");
        assert!(b.vel.y.abs() < 1e-3);
    }

    #[test]
    fn test_pointer_outside_influence_radius_is_inert() {
        let mut field = BubbleField::new(Viewport::new(1024.0, 768.0), 0.0, 1, 7);
        field.bubbles[0].pos = Vec2::new(500.0, 400.0);
        field.bubbles[0].vel = Vec2::ZERO;

        field.set_pointer(Vec2::new(500.0 - POINTER_RADIUS - 10.0, 400.0));
        tick(&mut field, 0.016);

        assert_eq!(field.bubbles[0].vel, Vec2::ZERO);
    }

    #[test]
    fn test_repulsion_scales_with_dt() {
        let mut fast = BubbleField::new(Viewport::new(1024.0, 768.0), 0.0, 1, 7);
        let mut slow = fast.clone();
        for f in [&mut fast, &mut slow] {
            f.bubbles[0].pos = Vec2::new(500.0, 400.0);
            f.bubbles[0].vel = Vec2::ZERO;
            f.set_pointer(Vec2::new(460.0, 400.0));
        }

        tick(&mut fast, 0.032);
        tick(&mut slow, 0.016);

        let ratio = fast.bubbles[0].vel.x / slow.bubbles[0].vel.x;
        assert!((ratio - 2.0).abs() < 1e-3, "impulse should be proportional to dt, got ratio {ratio}");
    }

    #[test]
    fn test_dt_clamped_to_frame_cap() {
        let mut capped = BubbleField::new(Viewport::new(1024.0, 768.0), 0.0, 1, 7);
        let mut huge = capped.clone();
        for f in [&mut capped, &mut huge] {
            f.bubbles[0].pos = Vec2::new(500.0, 400.0);
            f.bubbles[0].vel = Vec2::ZERO;
            f.set_pointer(Vec2::new(460.0, 400.0));
        }

        tick(&mut capped, MAX_FRAME_DT);
        tick(&mut huge, 5.0);

        assert_eq!(capped.bubbles[0].vel, huge.bubbles[0].vel);
    }

    #[test]
    fn test_parallax_moves_deep_bubbles_more() {
        let mut field = BubbleField::new(Viewport::new(1024.0, 768.0), 0.0, 2, 7);
        // Identical motion state, different depths, far from walls and
        // from each other so only parallax differs.
        field.bubbles[0].pos = Vec2::new(200.0, 400.0);
        field.bubbles[0].depth = 0.1;
        field.bubbles[1].pos = Vec2::new(800.0, 400.0);
        field.bubbles[1].depth = 0.9;
        for b in &mut field.bubbles {
            b.vel = Vec2::ZERO;
            b.base_radius = 20.0;
        }
        // Pointer right of center, outside both influence radii
        field.set_pointer(Vec2::new(1000.0, 390.0));

        let x0 = (200.0, 800.0);
        tick(&mut field, 0.016);

        let shallow = field.bubbles.iter().find(|b| b.depth == 0.1).unwrap();
        let deep = field.bubbles.iter().find(|b| b.depth == 0.9).unwrap();
        let shallow_shift = shallow.pos.x - x0.0;
        let deep_shift = deep.pos.x - x0.1;
        assert!(deep_shift > shallow_shift, "deeper bubble should shift more");
        assert!(shallow_shift > 0.0, "shift should follow the pointer side");
    }

    #[test]
    fn test_wall_clamp_bounds_and_restitution() {
        let viewport = Viewport::new(800.0, 600.0);
        let mut b = Bubble {
            symbol: "H",
            number: 1,
            color: "#ffd43b",
            pos: Vec2::new(-50.0, 700.0),
            depth: 0.0,
            base_radius: 20.0,
            vel: Vec2::new(-3.0, 4.0),
        };

        clamp_to_walls(&mut b, viewport);

        assert_eq!(b.pos.x, 20.0);
        assert_eq!(b.pos.y, 580.0);
        assert!((b.vel.x - 1.8).abs() < 1e-5, "vx inverted and dampened");
        assert!((b.vel.y + 2.4).abs() < 1e-5, "vy inverted and dampened");
    }

    #[test]
    fn test_top_clamp_respects_header_margin() {
        let viewport = Viewport::new(800.0, 600.0);
        let mut b = Bubble {
            symbol: "He",
            number: 2,
            color: "#b197fc",
            pos: Vec2::new(400.0, 0.0),
            depth: 0.0,
            base_radius: 20.0,
            vel: Vec2::new(0.0, -1.0),
        };

        clamp_to_walls(&mut b, viewport);

        assert_eq!(b.pos.y, 20.0 + TOP_MARGIN);
        assert!(b.vel.y > 0.0);
    }

    #[test]
    fn test_resize_recovery_via_clamp() {
        // A bubble stranded outside shrunken bounds comes back on the
        // next tick's clamp pass.
        let mut field = BubbleField::new(Viewport::new(1024.0, 768.0), 0.0, 1, 11);
        field.bubbles[0].pos = Vec2::new(900.0, 700.0);
        field.resize(Viewport::new(400.0, 300.0), 0.0);

        tick(&mut field, 0.016);

        let b = &field.bubbles[0];
        let r = b.visual_radius();
        assert!(b.pos.x <= 400.0 - r);
        assert!(b.pos.y <= 300.0 - r);
    }

    #[test]
    fn test_tick_keeps_collection_size() {
        let mut field = small_field();
        for _ in 0..120 {
            tick(&mut field, 0.016);
        }
        assert_eq!(field.bubbles.len(), 12);
    }

    #[test]
    fn test_tick_leaves_depth_sorted() {
        let mut field = small_field();
        tick(&mut field, 0.016);
        for pair in field.bubbles.windows(2) {
            assert!(pair[0].depth <= pair[1].depth);
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn any_coord() -> impl Strategy<Value = f32> {
            -2000.0_f32..2000.0
        }

        fn any_vel() -> impl Strategy<Value = f32> {
            -50.0_f32..50.0
        }

        proptest! {
            #[test]
            fn clamp_always_lands_inside_bounds(
                x in any_coord(),
                y in any_coord(),
                vx in any_vel(),
                vy in any_vel(),
                depth in 0.0_f32..1.0,
                base_radius in 18.0_f32..30.0,
            ) {
                let viewport = Viewport::new(1024.0, 768.0);
                let mut b = Bubble {
                    symbol: "H",
                    number: 1,
                    color: "#ffd43b",
                    pos: Vec2::new(x, y),
                    depth,
                    base_radius,
                    vel: Vec2::new(vx, vy),
                };
                clamp_to_walls(&mut b, viewport);

                let r = b.visual_radius();
                prop_assert!(
                    b.pos.x >= r && b.pos.x <= viewport.width - r,
                    "x={} escaped [{}, {}]", b.pos.x, r, viewport.width - r
                );
                prop_assert!(
                    b.pos.y >= r + TOP_MARGIN && b.pos.y <= viewport.height - r,
                    "y={} escaped [{}, {}]", b.pos.y, r + TOP_MARGIN, viewport.height - r
                );
            }

            #[test]
            fn absent_pointer_tick_only_damps(
                vx in -40.0_f32..40.0,
                vy in -40.0_f32..40.0,
            ) {
                // Single bubble at the viewport center: no pointer, no
                // neighbors, no wall within one step.
                let mut field = BubbleField::new(Viewport::new(1024.0, 768.0), 0.0, 1, 3);
                field.clear_pointer();
                field.bubbles[0].pos = Vec2::new(512.0, 404.0);
                field.bubbles[0].vel = Vec2::new(vx, vy);

                tick(&mut field, 0.016);

                let b = &field.bubbles[0];
                prop_assert!(
                    (b.vel.x - vx * DAMPING).abs() < 1e-4,
                    "vx={} expected {}", b.vel.x, vx * DAMPING
                );
                prop_assert!(
                    (b.vel.y - vy * DAMPING).abs() < 1e-4,
                    "vy={} expected {}", b.vel.y, vy * DAMPING
                );
            }

            #[test]
            fn field_stays_finite_under_arbitrary_input(
                seed in any::<u64>(),
                dt in 0.0_f32..5.0,
                px in -500.0_f32..1500.0,
                py in -500.0_f32..1300.0,
            ) {
                let mut field = BubbleField::new(Viewport::new(1024.0, 768.0), 60.0, 12, seed);
                field.set_pointer(Vec2::new(px, py));
                for _ in 0..8 {
                    tick(&mut field, dt);
                }
                for b in &field.bubbles {
                    prop_assert!(
                        b.pos.x.is_finite() && b.pos.y.is_finite(),
                        "non-finite position {:?} for seed {seed}", b.pos
                    );
                    prop_assert!(
                        b.vel.x.is_finite() && b.vel.y.is_finite(),
                        "non-finite velocity {:?} for seed {seed}", b.vel
                    );
                }
            }
        }
    }
}

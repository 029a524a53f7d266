//! Course card carousel
//!
//! DOM-free state machine behind the showcase ring:
//! - Ring navigation (next/prev/go_to) with modular wrapping
//! - A transition lock that swallows moves while the CSS animation runs
//! - Auto-rotate on a countdown, suspended while a drag is held
//! - One-shot drag gestures with a pixel threshold
//! - Lessons modal open/close tracking
//!
//! The wasm entry layer owns the actual nodes and re-reads
//! [`slot_for`](Carousel::slot_for) after every index change.

use crate::consts::*;
use crate::courses::{self, Course};

/// Position of a card relative to the active one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSlot {
    Active,
    Prev1,
    Prev2,
    Next1,
    Next2,
    /// Outside the visible five-card window
    Hidden,
}

impl CardSlot {
    /// CSS class the DOM layer applies for this slot
    pub fn class(self) -> Option<&'static str> {
        match self {
            CardSlot::Active => Some("active"),
            CardSlot::Prev1 => Some("prev-1"),
            CardSlot::Prev2 => Some("prev-2"),
            CardSlot::Next1 => Some("next-1"),
            CardSlot::Next2 => Some("next-2"),
            CardSlot::Hidden => None,
        }
    }
}

pub struct Carousel {
    pub current: usize,
    pub total: usize,
    /// Course shown in the lessons modal, if open
    pub open_course: Option<&'static Course>,
    lock_timer: f32,
    auto_timer: f32,
    drag_origin: Option<f32>,
    held: bool,
}

impl Carousel {
    pub fn new(total: usize) -> Self {
        Self {
            current: 0,
            total,
            open_course: None,
            lock_timer: 0.0,
            auto_timer: CAROUSEL_AUTO_SECS,
            drag_origin: None,
            held: false,
        }
    }

    /// True while the transition animation is running and moves are
    /// swallowed
    pub fn locked(&self) -> bool {
        self.lock_timer > 0.0
    }

    /// Advance to the next card. Returns whether the index changed.
    pub fn next(&mut self) -> bool {
        if self.locked() || self.total == 0 {
            return false;
        }
        self.current = (self.current + 1) % self.total;
        self.lock_timer = CAROUSEL_LOCK_SECS;
        true
    }

    /// Step back to the previous card. Returns whether the index changed.
    pub fn prev(&mut self) -> bool {
        if self.locked() || self.total == 0 {
            return false;
        }
        self.current = (self.current + self.total - 1) % self.total;
        self.lock_timer = CAROUSEL_LOCK_SECS;
        true
    }

    /// Jump straight to `index` (dot or card click)
    pub fn go_to(&mut self, index: usize) -> bool {
        if self.locked() || index >= self.total || index == self.current {
            return false;
        }
        self.current = index;
        self.lock_timer = CAROUSEL_LOCK_SECS;
        true
    }

    /// Drive the lock and auto-rotate countdowns by `dt` seconds.
    /// Returns whether an automatic advance changed the index.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.lock_timer > 0.0 {
            self.lock_timer = (self.lock_timer - dt).max(0.0);
        }
        if self.held {
            return false;
        }
        self.auto_timer -= dt;
        if self.auto_timer <= 0.0 {
            self.auto_timer = CAROUSEL_AUTO_SECS;
            return self.next();
        }
        false
    }

    /// Classify card `index` relative to the active card.
    ///
    /// The signed difference is folded into [-2, 2] by one wrap in each
    /// direction, so on rings smaller than six cards every card lands in
    /// a visible slot.
    pub fn slot_for(&self, index: usize) -> CardSlot {
        if self.total == 0 {
            return CardSlot::Hidden;
        }
        let total = self.total as isize;
        let mut diff = index as isize - self.current as isize;
        if diff < -2 {
            diff += total;
        }
        if diff > 2 {
            diff -= total;
        }
        match diff {
            0 => CardSlot::Active,
            -1 => CardSlot::Prev1,
            -2 => CardSlot::Prev2,
            1 => CardSlot::Next1,
            2 => CardSlot::Next2,
            _ => CardSlot::Hidden,
        }
    }

    /// Begin a drag gesture at horizontal position `x`. Auto-rotate stays
    /// suspended until [`release`](Self::release).
    pub fn press(&mut self, x: f32) {
        self.held = true;
        self.drag_origin = Some(x);
    }

    /// Track pointer movement during a drag. Once travel exceeds the
    /// threshold the gesture fires a single move and disarms.
    /// Returns whether the index changed.
    pub fn drag_to(&mut self, x: f32) -> bool {
        let Some(start) = self.drag_origin else {
            return false;
        };
        let diff = x - start;
        if diff.abs() <= CAROUSEL_DRAG_THRESHOLD {
            return false;
        }
        self.drag_origin = None;
        if diff > 0.0 { self.prev() } else { self.next() }
    }

    /// End the gesture and rearm auto-rotate with a fresh countdown
    pub fn release(&mut self) {
        self.held = false;
        self.drag_origin = None;
        self.auto_timer = CAROUSEL_AUTO_SECS;
    }

    /// Open the lessons modal for `course_id`. Unknown ids fall back to
    /// the first course.
    pub fn open_lessons(&mut self, course_id: u32) -> &'static Course {
        let course = courses::course_by_id(course_id);
        self.open_course = Some(course);
        course
    }

    pub fn close_lessons(&mut self) {
        self.open_course = None;
    }
}

//! Canvas bubble painter
//!
//! Draws a [`BubbleField`](crate::sim::BubbleField) onto a 2d canvas
//! context. Each frame fades the previous one with a translucent
//! rectangle instead of clearing, which leaves short motion trails.
//! Bubbles arrive already depth-sorted, so painting in slice order
//! keeps near bubbles on top.

use std::f64::consts::TAU;

use web_sys::{CanvasGradient, CanvasRenderingContext2d};

use crate::render::style::*;
use crate::sim::{Bubble, BubbleField};

pub struct Painter {
    ctx: CanvasRenderingContext2d,
    trail_alpha: f32,
    specular: bool,
}

impl Painter {
    pub fn new(ctx: CanvasRenderingContext2d, trail_alpha: f32, specular: bool) -> Self {
        Self {
            ctx,
            trail_alpha,
            specular,
        }
    }

    /// Paint one frame: fade pass, then every bubble back to front
    pub fn paint(&self, field: &BubbleField) {
        self.ctx.set_fill_style_str(&fade_fill(self.trail_alpha));
        self.ctx.fill_rect(
            0.0,
            0.0,
            f64::from(field.viewport.width),
            f64::from(field.viewport.height),
        );

        for bubble in &field.bubbles {
            self.draw_bubble(bubble);
        }
    }

    fn draw_bubble(&self, bubble: &Bubble) {
        let r = f64::from(bubble.visual_radius());
        let x = f64::from(bubble.pos.x);
        let y = f64::from(bubble.pos.y);
        let light = f64::from(LIGHT_OFFSET);

        // Body: offset radial gradient gives the sphere illusion
        let Ok(body) = self.ctx.create_radial_gradient(
            x + r * light,
            y + r * light,
            r * f64::from(BODY_INNER_RADIUS),
            x,
            y,
            r,
        ) else {
            return;
        };
        for (offset, color) in body_stops(bubble.color) {
            body.add_color_stop(offset, &color).ok();
        }
        self.fill_circle(&body, x, y, r);

        if self.specular {
            // Gradient center sits further toward the light than the
            // disc it fills
            let spec_x = x + r * f64::from(SPECULAR_OFFSET);
            let spec_y = y + r * f64::from(SPECULAR_OFFSET);
            let spec_r = r * f64::from(SPECULAR_RADIUS);
            if let Ok(spec) = self
                .ctx
                .create_radial_gradient(spec_x, spec_y, 0.0, spec_x, spec_y, spec_r)
            {
                for (offset, color) in specular_stops() {
                    spec.add_color_stop(offset, color).ok();
                }
                self.fill_circle(&spec, x + r * light, y + r * light, spec_r);
            }
        }

        self.ctx.set_fill_style_str(LABEL_FILL);
        self.ctx.set_font(&label_font(r as f32));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx.fill_text(bubble.symbol, x, y).ok();
    }

    fn fill_circle(&self, gradient: &CanvasGradient, x: f64, y: f64, r: f64) {
        self.ctx.begin_path();
        self.ctx.set_fill_style_canvas_gradient(gradient);
        self.ctx.arc(x, y, r, 0.0, TAU).ok();
        self.ctx.fill();
    }
}

//! Layer-sorted draw dispatch

use crate::ecs::components::{RenderComponent, Shape};
use crate::ecs::Registry;
use crate::foundation::color::Color;
use crate::foundation::math::Vec2;
use crate::render::Canvas;

/// Draws render, sprite and text components bound to a position
pub struct RenderSystem {
    sort_passes: u64,
}

impl RenderSystem {
    /// Create the system
    pub fn new() -> Self {
        Self { sort_passes: 0 }
    }

    /// Number of layer sorts performed so far
    pub fn sort_passes(&self) -> u64 {
        self.sort_passes
    }

    /// Draw one frame.
    ///
    /// Render components are drawn lowest layer first. Sprites follow on top
    /// in their own layer order, then texts.
    pub fn draw(&mut self, registry: &mut Registry, canvas: &mut dyn Canvas) {
        if registry.renders_dirty {
            registry.renders.sort_by_key(|render| render.layer);
            registry.renders_dirty = false;
            self.sort_passes += 1;
            log::trace!("Sorted {} render components by layer", registry.renders.len());
        }

        for (entity, render) in registry.renders.iter_with_entities() {
            if !render.is_visible() {
                continue;
            }
            if let Some(position) = registry.positions.get(entity) {
                draw_shape(canvas, render, position.value);
            }
        }

        let sprites_sorted =
            registry.sprites.as_slice().windows(2).all(|pair| pair[0].layer <= pair[1].layer);
        if !sprites_sorted {
            registry.sprites.sort_by_key(|sprite| sprite.layer);
        }
        for (entity, sprite) in registry.sprites.iter_with_entities() {
            if let Some(position) = registry.positions.get(entity) {
                canvas.draw_texture(sprite.texture, position.value, sprite.scale, sprite.tint);
            }
        }

        for (entity, text) in registry.texts.iter_with_entities() {
            if let Some(position) = registry.positions.get(entity) {
                canvas.draw_text(&text.value, position.value, text.font_size, text.color);
            }
        }
    }
}

impl Default for RenderSystem {
    fn default() -> Self {
        Self::new()
    }
}

fn draw_shape(canvas: &mut dyn Canvas, render: &RenderComponent, position: Vec2) {
    let color = render.color;
    match render.shape {
        Shape::Rectangle => canvas.draw_rectangle_outline(position, render.dimensions, color),
        Shape::RectangleSolid => canvas.draw_rectangle(position, render.dimensions, color),
        Shape::Circle => canvas.draw_circle(position, render.radius(), color),
        Shape::Ellipse => canvas.draw_ellipse_outline(position, render.dimensions, color),
        Shape::Line => canvas.draw_line(position, position + render.dimensions, color),
        Shape::Meteor => draw_meteor(canvas, render, position),
    }
}

/// Triangle fan from the center, then the rim
fn draw_meteor(canvas: &mut dyn Canvas, render: &RenderComponent, center: Vec2) {
    let rim = render.meteor_outline(center);
    if rim.len() < 3 {
        canvas.draw_circle(center, render.radius(), render.color);
        return;
    }

    let edges = rim.iter().zip(rim.iter().cycle().skip(1));
    for (a, b) in edges.clone() {
        // Counter-clockwise winding for the fill
        canvas.draw_triangle(center, *b, *a, render.color);
    }
    for (a, b) in edges {
        canvas.draw_line(*a, *b, Color::BLACK);
    }
}

//! Game state widgets

use crate::ecs::components::{TextComponent, UiElement};
use crate::ecs::Registry;
use crate::foundation::math::Vec2;
use crate::render::Canvas;

/// Height of a state bar in pixels
pub const BAR_HEIGHT: f32 = 10.0;

/// Draws bars and labels bound to a game state value
pub struct UiSystem;

impl UiSystem {
    /// Create the system
    pub fn new() -> Self {
        Self
    }

    /// Draw every widget that has both a position and a state value
    pub fn draw(&mut self, registry: &Registry, canvas: &mut dyn Canvas) {
        for (entity, widget) in registry.widgets.iter_with_entities() {
            let (Some(position), Some(state)) =
                (registry.positions.get(entity), registry.state_values.get(entity))
            else {
                continue;
            };

            match widget.element {
                UiElement::Bar => {
                    let size = Vec2::new(state.value.as_f32().max(0.0), BAR_HEIGHT);
                    canvas.draw_rectangle(position.value, size, widget.color);
                }
                UiElement::Text => canvas.draw_text(
                    &state.value.to_string(),
                    position.value,
                    TextComponent::DEFAULT_FONT_SIZE,
                    widget.color,
                ),
            }
        }
    }
}

impl Default for UiSystem {
    fn default() -> Self {
        Self::new()
    }
}

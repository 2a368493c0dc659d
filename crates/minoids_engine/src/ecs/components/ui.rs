//! UI, game-state and input components

use crate::ecs::Entity;
use crate::foundation::color::Color;
use std::fmt;

/// Kind of UI widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiElement {
    /// The bound value as text
    Text,
    /// Horizontal bar as wide as the bound value
    Bar,
}

/// Widget drawn by the UI system from the entity's game-state value
#[derive(Debug, Clone, PartialEq)]
pub struct UiComponent {
    /// Widget kind
    pub element: UiElement,
    /// Widget color
    pub color: Color,
    pub(crate) entity: Entity,
}

impl UiComponent {
    /// Black widget
    pub fn new(element: UiElement) -> Self {
        Self::colored(element, Color::BLACK)
    }

    /// Colored widget
    pub fn colored(element: UiElement, color: Color) -> Self {
        Self {
            element,
            color,
            entity: Entity::INVALID,
        }
    }
}

/// A game-logic scalar
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameStateValue {
    /// Fractional value (health, bar widths)
    Float(f32),
    /// Whole value (score, cores)
    Int(i32),
}

impl GameStateValue {
    /// The value as a float
    pub fn as_f32(self) -> f32 {
        match self {
            Self::Float(value) => value,
            #[allow(clippy::cast_precision_loss)]
            Self::Int(value) => value as f32,
        }
    }
}

impl fmt::Display for GameStateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(value) => write!(f, "{value:.1}"),
            Self::Int(value) => write!(f, "{value}"),
        }
    }
}

impl From<f32> for GameStateValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<i32> for GameStateValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

/// Display value bound to a game-logic scalar
#[derive(Debug, Clone, PartialEq)]
pub struct GameStateComponent {
    /// Current value
    pub value: GameStateValue,
    pub(crate) entity: Entity,
}

impl GameStateComponent {
    /// Create a game-state component
    pub fn new(value: impl Into<GameStateValue>) -> Self {
        Self {
            value: value.into(),
            entity: Entity::INVALID,
        }
    }
}

/// Marks an entity as steered by the directional keys
#[derive(Debug, Clone, PartialEq)]
pub struct InputComponent {
    /// Force added per frame while a key is held
    pub push_force_step: f32,
    /// Maximum force magnitude
    pub max_push_force: f32,
    /// Drag applied per frame to released axes
    pub push_force_step_half: f32,
    pub(crate) entity: Entity,
}

impl InputComponent {
    /// Create an input component; drag is half the push step
    pub fn new(push_force_step: f32, max_push_force: f32) -> Self {
        Self {
            push_force_step,
            max_push_force,
            push_force_step_half: push_force_step / 2.0,
            entity: Entity::INVALID,
        }
    }
}

//! Frame scheduling
//!
//! Systems run in a fixed order every frame, grouped into phases. There is
//! no parallelism: every system mutates the same registry in turn.

use super::systems::{
    CollisionDetectionSystem, CollisionResolutionSystem, InputSystem, ParticleSystem,
    PositionSystem, RenderSystem, UiSystem,
};
use super::{EcsResult, Registry};
use crate::input::{InputBindings, InputSource};
use crate::render::{Canvas, ScreenMetrics};

/// System execution phases with explicit ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SystemPhase {
    /// Input polling into forces and weapons
    Input = 0,
    /// Integration, collision detection and particle aging
    Simulation = 1,
    /// Collision consequences
    Resolution = 2,
    /// Draw command generation
    Render = 3,
}

impl SystemPhase {
    /// Phases in execution order
    pub const ALL: [SystemPhase; 4] = [
        SystemPhase::Input,
        SystemPhase::Simulation,
        SystemPhase::Resolution,
        SystemPhase::Render,
    ];
}

/// Per-frame input to [`FrameSchedule::update`]
pub struct FrameContext<'a> {
    /// Polled input state for this frame
    pub input: &'a dyn InputSource,
    /// Key bindings
    pub bindings: &'a InputBindings,
    /// Current screen size
    pub screen: ScreenMetrics,
    /// Seconds since the previous frame
    pub delta_time: f32,
}

/// Owns the engine systems and runs them in frame order.
///
/// `update` runs Input, Position, CollisionDetection, Particle and
/// CollisionResolution. Game code syncs its own state from the registry before
/// calling `draw`, which runs Render then UI.
pub struct FrameSchedule {
    input: InputSystem,
    position: PositionSystem,
    collision_detection: CollisionDetectionSystem,
    particle: ParticleSystem,
    collision_resolution: CollisionResolutionSystem,
    render: RenderSystem,
    ui: UiSystem,
    frame: u64,
}

impl FrameSchedule {
    /// Create a schedule with fresh systems
    pub fn new() -> Self {
        Self {
            input: InputSystem::new(),
            position: PositionSystem::new(),
            collision_detection: CollisionDetectionSystem::new(),
            particle: ParticleSystem::new(),
            collision_resolution: CollisionResolutionSystem::new(),
            render: RenderSystem::new(),
            ui: UiSystem::new(),
            frame: 0,
        }
    }

    /// Frames simulated so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Run the simulation half of a frame
    pub fn update(&mut self, registry: &mut Registry, context: &FrameContext<'_>) -> EcsResult<()> {
        for phase in SystemPhase::ALL {
            log::trace!("Frame {} phase {:?}", self.frame, phase);
            match phase {
                SystemPhase::Input => {
                    self.input
                        .update(registry, context.input, context.bindings, context.delta_time)?;
                }
                SystemPhase::Simulation => {
                    self.position.update(registry, &context.screen);
                    self.collision_detection.update(registry);
                    self.particle.update(registry);
                }
                SystemPhase::Resolution => self.collision_resolution.update(registry)?,
                SystemPhase::Render => {}
            }
        }
        self.frame += 1;
        Ok(())
    }

    /// Run the render phase of a frame
    pub fn draw(&mut self, registry: &mut Registry, canvas: &mut dyn Canvas) {
        log::trace!("Frame {} phase {:?}", self.frame, SystemPhase::Render);
        self.render.draw(registry, canvas);
        self.ui.draw(registry, canvas);
    }
}

impl Default for FrameSchedule {
    fn default() -> Self {
        Self::new()
    }
}

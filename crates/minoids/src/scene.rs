//! Gameplay scene
//!
//! Owns one registry from load to drop. Each frame runs the engine schedule,
//! syncs the game state from the registry, then draws.

use crate::config::GameConfig;
use crate::error::GameResult;
use crate::game::Game;
use log::{debug, info};
use minoids_engine::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

/// Damage the spaceship hull deals on contact; enough to crack a core open
const SHIP_CONTACT_DMG: f32 = 0.5;

/// Outcome of a scene frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneEvent {
    /// Keep playing
    None,
    /// Round over, move on
    Next,
    /// Game over
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum MeteorState {
    Intact { health: f32 },
    Shrinking,
    Core,
}

/// The asteroid field with the player's spaceship
pub struct GameScene {
    registry: Registry,
    schedule: FrameSchedule,
    bindings: InputBindings,
    screen: ScreenMetrics,
    shrink_step: f32,
    bar_scale: f32,
    spaceship: Entity,
    spawn_point: Vec2,
    health_bar: Entity,
    score_text: Entity,
    meteors: Vec<(Entity, MeteorState)>,
    event: SceneEvent,
}

impl GameScene {
    /// Build the scene for the current level of `game`
    pub fn load(game: &mut Game, config: &GameConfig) -> GameResult<Self> {
        let mut registry = Registry::from_config(&config.engine);
        let screen = config.screen.metrics();
        let gameplay = &config.gameplay;
        let mut rng = match config.engine.ecs.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(u64::from(game.level))),
            None => StdRng::from_entropy(),
        };

        let spawn_point = vec2(
            screen.width / 2.0 - gameplay.ship_width / 2.0,
            screen.height - gameplay.ship_height * 3.0,
        );
        let spaceship = registry.create_entity();
        registry.add(spaceship, PositionComponent::from_vec(spawn_point))?;
        registry.add(
            spaceship,
            RenderComponent::new(
                Layer::Sky,
                Shape::Rectangle,
                Color::DARKBLUE,
                gameplay.ship_width,
                gameplay.ship_height,
            ),
        )?;
        registry.add(
            spaceship,
            ColliderComponent::rectangle(gameplay.ship_width, gameplay.ship_height),
        )?;
        registry.add(
            spaceship,
            InputComponent::new(gameplay.push_force_step, gameplay.max_push_force),
        )?;
        registry.add(spaceship, HealthComponent::new(game.health))?;
        registry.add(spaceship, DamageComponent::new(SHIP_CONTACT_DMG))?;

        let weapon = registry.create_entity();
        registry.add(weapon, PositionComponent::from_vec(spawn_point))?;
        registry.add(
            weapon,
            WeaponComponent::new(spaceship, game.weapon.max_distance, game.weapon.size),
        )?;
        registry.add(weapon, DamageComponent::new(game.weapon.dmg))?;
        // The beam never wears out
        registry.add(weapon, HealthComponent::new(f32::MAX))?;

        let meteor_count = rng.gen_range(game.meteors.min_meteors..=game.meteors.max_meteors);
        let mut meteors = Vec::new();
        for _ in 0..meteor_count {
            let radius = rng.gen_range(game.meteors.min_meteor_size..=game.meteors.max_meteor_size);
            let position = vec2(
                rng.gen_range(0.0..screen.width),
                rng.gen_range(0.0..screen.height / 2.0),
            );
            let heading = rng.gen_range(0.0..TAU);
            let velocity = vec2(heading.cos(), heading.sin()) * gameplay.meteor_speed;
            let health = radius / 10.0;
            let noise = Noise1D::new(rng.gen());

            let meteor = registry.create_entity();
            registry.add(meteor, PositionComponent::from_vec(position))?;
            registry.add(meteor, VelocityComponent::from_vec(velocity))?;
            registry.add(meteor, ColliderComponent::circle(radius))?;
            registry.add(
                meteor,
                RenderComponent::meteor(
                    Layer::Ground,
                    Color::BROWN,
                    radius,
                    gameplay.meteor_noise_amplitude,
                    gameplay.meteor_points,
                    &noise,
                ),
            )?;
            registry.add(meteor, HealthComponent::new(health))?;
            registry.add(meteor, DamageComponent::new(game.meteors.meteor_dmg))?;
            meteors.push((meteor, MeteorState::Intact { health }));
        }
        game.level_meteors = meteor_count;

        let health_bar = registry.create_entity();
        registry.add(health_bar, PositionComponent::new(10.0, 10.0))?;
        registry.add(health_bar, GameStateComponent::new(game.health * gameplay.health_bar_scale))?;
        registry.add(health_bar, UiComponent::colored(UiElement::Bar, Color::DARKGREEN))?;

        let score_text = registry.create_entity();
        registry.add(score_text, PositionComponent::new(screen.width - 60.0, 10.0))?;
        registry.add(score_text, GameStateComponent::new(score_value(game)))?;
        registry.add(score_text, UiComponent::colored(UiElement::Text, Color::DARKGRAY))?;

        info!(
            "Loaded level {} with {meteor_count} meteors ({} entities)",
            game.level,
            registry.entity_count()
        );

        Ok(Self {
            registry,
            schedule: FrameSchedule::new(),
            bindings: config.engine.input.clone(),
            screen,
            shrink_step: gameplay.meteor_shrink_step,
            bar_scale: gameplay.health_bar_scale,
            spaceship,
            spawn_point,
            health_bar,
            score_text,
            meteors,
            event: SceneEvent::None,
        })
    }

    /// Simulate one frame and report what the caller should do next
    pub fn update(
        &mut self,
        game: &mut Game,
        input: &dyn InputSource,
        delta_time: f32,
    ) -> GameResult<SceneEvent> {
        if self.event != SceneEvent::None {
            return Ok(self.event);
        }

        let context = FrameContext {
            input,
            bindings: &self.bindings,
            screen: self.screen,
            delta_time,
        };
        self.schedule.update(&mut self.registry, &context)?;

        self.sync_spaceship(game)?;
        self.sync_meteors(game)?;
        self.sync_widgets(game)?;

        if game.is_game_lost() {
            info!("Game over at level {} with score {}", game.level, game.score);
            self.event = SceneEvent::Exit;
        } else if game.is_game_won() {
            info!("Level {} cleared", game.level);
            self.event = SceneEvent::Next;
        }
        Ok(self.event)
    }

    /// Draw the current frame
    pub fn draw(&mut self, canvas: &mut dyn Canvas) {
        self.schedule.draw(&mut self.registry, canvas);
    }

    /// Last reported event
    pub fn event(&self) -> SceneEvent {
        self.event
    }

    /// The scene's registry
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Meteors and cores still in play
    pub fn meteors_left(&self) -> usize {
        self.meteors.len()
    }

    /// Spaceship health feeds the game; an empty hull costs a life
    fn sync_spaceship(&mut self, game: &mut Game) -> GameResult<()> {
        let hull = self.registry.require::<HealthComponent>(self.spaceship)?.value;
        game.damage_spaceship(game.health - hull);
        if game.health > 0.0 {
            return Ok(());
        }

        game.lose_life();
        if game.is_game_lost() {
            return Ok(());
        }
        game.reset_spaceship();
        self.registry.require_mut::<HealthComponent>(self.spaceship)?.value = game.health;
        self.registry.require_mut::<PositionComponent>(self.spaceship)?.value = self.spawn_point;
        if let Some(force) = self.registry.get_mut::<ForceComponent>(self.spaceship) {
            force.value = Vec2::zeros();
        }
        Ok(())
    }

    /// Hits score, dead meteors shrink down to a core, broken cores are gathered
    fn sync_meteors(&mut self, game: &mut Game) -> GameResult<()> {
        let core_size = game.meteors.meteor_core_size;
        let core_health = game.meteors.meteor_core_health;
        let mut gathered = Vec::new();

        for (entity, state) in &mut self.meteors {
            let entity = *entity;
            match *state {
                MeteorState::Intact { health } => {
                    let current = self.registry.require::<HealthComponent>(entity)?.value;
                    if current < health {
                        game.mine_meteor();
                    }
                    if current > 0.0 {
                        *state = MeteorState::Intact { health: current };
                        continue;
                    }
                    debug!("Meteor {entity} destroyed");
                    self.registry.remove::<ColliderComponent>(entity);
                    self.registry.remove::<DamageComponent>(entity);
                    *state = MeteorState::Shrinking;
                }
                MeteorState::Shrinking => {
                    let render = self.registry.require_mut::<RenderComponent>(entity)?;
                    render.dimensions.x = (render.dimensions.x - self.shrink_step).max(0.0);
                    if render.dimensions.x > core_size {
                        continue;
                    }
                    render.shape = Shape::Circle;
                    render.color = Color::ORANGE;
                    render.dimensions = vec2(core_size, core_size);
                    render.noise_values.clear();
                    self.registry.require_mut::<HealthComponent>(entity)?.value = core_health;
                    self.registry.add(entity, ColliderComponent::circle(core_size))?;
                    *state = MeteorState::Core;
                }
                MeteorState::Core => {
                    if self.registry.require::<HealthComponent>(entity)?.is_depleted() {
                        gathered.push(entity);
                    }
                }
            }
        }

        for entity in gathered {
            self.registry.delete_entity(entity);
            self.meteors.retain(|(meteor, _)| *meteor != entity);
            game.gather_core();
            debug!("Core {entity} gathered, {} this level", game.cores);
        }
        Ok(())
    }

    fn sync_widgets(&mut self, game: &Game) -> GameResult<()> {
        self.registry.require_mut::<GameStateComponent>(self.health_bar)?.value =
            GameStateValue::Float(game.health * self.bar_scale);
        self.registry.require_mut::<GameStateComponent>(self.score_text)?.value =
            GameStateValue::Int(score_value(game));
        Ok(())
    }
}

fn score_value(game: &Game) -> i32 {
    i32::try_from(game.score).unwrap_or(i32::MAX)
}

impl Drop for GameScene {
    fn drop(&mut self) {
        info!("Unloading game scene after {} frames", self.schedule.frame());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minoids_engine::config::EcsConfig;

    fn seeded_config() -> GameConfig {
        let mut config = GameConfig::default();
        config.engine.ecs = EcsConfig {
            capacity: 256,
            rng_seed: Some(42),
        };
        config
    }

    #[test]
    fn test_load_spawns_level_meteors() {
        let config = seeded_config();
        let mut game = Game::new();
        let scene = GameScene::load(&mut game, &config).unwrap();

        let count = scene.meteors_left() as u32;
        assert!((game.meteors.min_meteors..=game.meteors.max_meteors).contains(&count));
        assert_eq!(game.level_meteors, count);
        assert_eq!(scene.registry().store::<WeaponComponent>().len(), 1);
        assert_eq!(scene.registry().store::<InputComponent>().len(), 1);
        assert_eq!(scene.event(), SceneEvent::None);
    }

    #[test]
    fn test_idle_frames_keep_playing() {
        let config = seeded_config();
        let mut game = Game::new();
        let mut scene = GameScene::load(&mut game, &config).unwrap();
        let input = InputSnapshot::new();
        let mut canvas = RecordingCanvas::new();

        let event = scene.update(&mut game, &input, 1.0 / 60.0).unwrap();
        scene.draw(&mut canvas);

        assert_eq!(event, SceneEvent::None);
        assert!(!canvas.is_empty());
        let health_bar = |c: &DrawCommand| {
            matches!(c, DrawCommand::Rectangle { color, .. } if *color == Color::DARKGREEN)
        };
        assert!(canvas.commands().iter().any(health_bar));
    }

    #[test]
    fn test_empty_hull_costs_a_life() {
        let config = seeded_config();
        let mut game = Game::new();
        let mut scene = GameScene::load(&mut game, &config).unwrap();
        let ship = scene.spaceship;
        scene.registry.require_mut::<HealthComponent>(ship).unwrap().value = 0.0;

        let input = InputSnapshot::new();
        scene.update(&mut game, &input, 1.0 / 60.0).unwrap();

        assert_eq!(game.lives, crate::game::SPACESHIP_INITIAL_LIVES - 1);
        assert_eq!(game.health, crate::game::SPACESHIP_INITIAL_HEALTH);
        assert_eq!(
            scene.registry().require::<HealthComponent>(ship).unwrap().value,
            game.health
        );
    }

    #[test]
    fn test_last_life_ends_the_game() {
        let config = seeded_config();
        let mut game = Game::new();
        game.lives = 1;
        let mut scene = GameScene::load(&mut game, &config).unwrap();
        let ship = scene.spaceship;
        scene.registry.require_mut::<HealthComponent>(ship).unwrap().value = 0.0;

        let input = InputSnapshot::new();
        assert_eq!(scene.update(&mut game, &input, 1.0 / 60.0).unwrap(), SceneEvent::Exit);
        assert_eq!(scene.update(&mut game, &input, 1.0 / 60.0).unwrap(), SceneEvent::Exit);
    }

    #[test]
    fn test_destroyed_meteor_becomes_core_then_is_gathered() {
        let config = seeded_config();
        let mut game = Game::new();
        let mut scene = GameScene::load(&mut game, &config).unwrap();
        for (entity, _) in &scene.meteors {
            scene.registry.require_mut::<VelocityComponent>(*entity).unwrap().value = Vec2::zeros();
        }
        let (meteor, _) = scene.meteors[0];
        scene.registry.require_mut::<HealthComponent>(meteor).unwrap().value = 0.0;

        let input = InputSnapshot::new();
        scene.update(&mut game, &input, 1.0 / 60.0).unwrap();
        assert!(!scene.registry().has::<ColliderComponent>(meteor));
        assert_eq!(game.score, 1);

        for _ in 0..100 {
            scene.update(&mut game, &input, 1.0 / 60.0).unwrap();
        }
        assert!(scene.registry().has::<ColliderComponent>(meteor));
        let render = scene.registry().require::<RenderComponent>(meteor).unwrap();
        assert_eq!(render.shape, Shape::Circle);
        assert_eq!(render.entity(), meteor);
        assert!(render.noise_values.is_empty());

        scene.registry.mark_render_order_dirty();
        let mut canvas = RecordingCanvas::new();
        scene.draw(&mut canvas);
        assert!(scene.registry().store::<RenderComponent>().is_consistent());
        assert!(canvas
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::Circle { color, .. } if *color == Color::ORANGE)));

        scene.registry.require_mut::<HealthComponent>(meteor).unwrap().value = 0.0;
        scene.update(&mut game, &input, 1.0 / 60.0).unwrap();
        assert!(!scene.registry().is_alive(meteor));
        assert_eq!(game.cores, 1);

        scene.draw(&mut RecordingCanvas::new());
        let renders = scene.registry().store::<RenderComponent>();
        assert!(renders.is_consistent());
        assert!(renders.entities().all(|owner| scene.registry().is_alive(owner)));
    }
}

//! Minoids - mine the meteors, gather their cores
//!
//! Runs the gameplay scene headlessly: a scripted pilot feeds input and a
//! recording canvas stands in for the window.

mod config;
mod error;
mod game;
mod scene;

use config::GameConfig;
use error::GameResult;
use game::Game;
use minoids_engine::foundation::logging::{self, info};
use minoids_engine::input::{InputSnapshot, KeyCode};
use minoids_engine::render::RecordingCanvas;
use scene::{GameScene, SceneEvent};

/// Frames per steering leg of the scripted pilot
const LEG_FRAMES: u32 = 45;
/// Frames between beam shots
const FIRE_INTERVAL: u32 = 40;

fn main() -> GameResult<()> {
    logging::init();
    info!("Starting Minoids");

    let config = GameConfig::load_or_default(GameConfig::DEFAULT_PATH)?;
    let mut game = Game::new();
    let mut scene = GameScene::load(&mut game, &config)?;
    let mut input = InputSnapshot::new();
    let mut canvas = RecordingCanvas::new();
    let mut draw_commands = 0usize;

    for frame in 0..config.demo.frames {
        input.begin_frame();
        steer(&mut input, frame);

        let event = scene.update(&mut game, &input, config.demo.delta_time)?;
        canvas.clear();
        scene.draw(&mut canvas);
        draw_commands += canvas.len();

        match event {
            SceneEvent::None => {}
            SceneEvent::Next => {
                game.next_level();
                scene = GameScene::load(&mut game, &config)?;
            }
            SceneEvent::Exit => break,
        }
    }

    info!(
        "Demo finished ({:?}): level {}, score {}, cores {}, lives {}, {} meteors left, {} entities, {draw_commands} draw commands",
        scene.event(),
        game.level,
        game.max_score,
        game.total_cores,
        game.lives,
        scene.meteors_left(),
        scene.registry().entity_count()
    );
    Ok(())
}

/// Zig-zag left and right, nudging up, firing at a fixed interval
fn steer(input: &mut InputSnapshot, frame: u32) {
    let leg = frame / LEG_FRAMES;
    let (on, off) = if leg % 2 == 0 {
        (KeyCode::Left, KeyCode::Right)
    } else {
        (KeyCode::Right, KeyCode::Left)
    };
    input.handle_key_input(off, false);
    input.handle_key_input(on, true);
    input.handle_key_input(KeyCode::Up, leg % 4 == 1);

    let firing = frame % FIRE_INTERVAL == 0;
    input.handle_key_input(KeyCode::Space, firing);
}

#[cfg(test)]
mod tests {
    use super::*;
    use minoids_engine::input::InputSource;

    #[test]
    fn test_pilot_alternates_direction() {
        let mut input = InputSnapshot::new();
        steer(&mut input, 0);
        assert!(input.is_key_down(KeyCode::Left));
        assert!(input.is_key_pressed(KeyCode::Space));

        input.begin_frame();
        steer(&mut input, LEG_FRAMES);
        assert!(input.is_key_down(KeyCode::Right));
        assert!(!input.is_key_down(KeyCode::Left));
        assert!(!input.is_key_pressed(KeyCode::Space));
    }
}

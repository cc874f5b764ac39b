use std::time::{Duration, Instant};

use anyhow::Context;
use pixels::{Pixels, SurfaceTexture};
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, KeyboardInput, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use crate::canvas::{Fonts, FrameCanvas};
use crate::config::GameConfig;
use crate::game::{Game, GameEvent};
use crate::game_input::Input;
use crate::render::{Palette, Renderer};
use crate::store::BestScoreStore;

/// Everything one window's worth of play owns.
struct Session {
    game: Game,
    renderer: Renderer,
    fonts: Fonts,
    store: BestScoreStore,
}

// Reacts to what a tick reported. Only this layer touches the disk.
fn react(events: &[GameEvent], game: &Game, store: &BestScoreStore) {
    for event in events {
        match event {
            GameEvent::Started => {
                tracing::debug!(direction = %game.snake().direction(), "snake started moving");
            }
            GameEvent::FoodEaten { score } => tracing::debug!(score, "food eaten"),
            GameEvent::NewBest(best) => {
                tracing::info!(best, "new best score");
                if let Err(err) = store.save(*best) {
                    tracing::warn!("could not save best score: {err:#}");
                }
            }
            GameEvent::GameOver(collision) => {
                tracing::info!(score = game.score().current(), "game over: {collision}");
            }
            GameEvent::Restarted => tracing::info!("restarted"),
        }
    }
}

pub fn run(config: GameConfig) -> anyhow::Result<()> {
    let store = BestScoreStore::new(&config.best_score_path);
    let best = store.load();
    let (width, height) = (config.window.width, config.window.height);
    let update_interval = Duration::from_millis(config.tick_ms);
    let mut last_update = Instant::now();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(config.window.title.as_str())
        .with_inner_size(LogicalSize::new(width, height))
        .with_resizable(false)
        .build(&event_loop)
        .context("create window")?;

    let window_size = window.inner_size();
    let surface = SurfaceTexture::new(window_size.width, window_size.height, &window);
    let mut pixels = Pixels::new(width, height, surface).context("create pixel buffer")?;

    let mut session = Session {
        game: Game::new(&config, best),
        renderer: Renderer::new(Palette::default(), config.outline_width, &config.window.title),
        fonts: Fonts::default(),
        store,
    };
    tracing::info!(width, height, best, "window ready");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            Event::RedrawRequested(_) => {
                if last_update.elapsed() >= update_interval {
                    let events = session.game.tick();
                    react(&events, &session.game, &session.store);
                    last_update = Instant::now();
                }
                let mut canvas = FrameCanvas::new(pixels.frame_mut(), width, height, session.fonts);
                session.renderer.draw(&mut canvas, &session.game);
                if let Err(err) = pixels.render() {
                    tracing::error!("render failed: {err}");
                    *control_flow = ControlFlow::Exit;
                }
            }

            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    tracing::info!("closing");
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: ElementState::Pressed,
                            virtual_keycode: Some(key),
                            ..
                        },
                    ..
                } => {
                    if let Some(input) = Input::from_key(key) {
                        session.game.queue(input);
                    }
                }
                _ => {}
            },

            Event::MainEventsCleared => {
                window.request_redraw();
            }
            _ => {}
        }
    });
}

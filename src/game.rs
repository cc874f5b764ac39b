use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::border::Border;
use crate::collision::{self, Collision};
use crate::config::GameConfig;
use crate::direction::Direction;
use crate::food::Food;
use crate::game_input::Input;
use crate::score::Score;
use crate::snake::Snake;

// Attempts at placing food off the snake before accepting an overlap.
const FOOD_PLACEMENT_ATTEMPTS: usize = 64;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum GameState {
    Playing,
    Over(Collision),
}

/// What happened during a tick, for the outer layer to react to.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum GameEvent {
    Started,
    FoodEaten { score: u32 },
    NewBest(u32),
    GameOver(Collision),
    Restarted,
}

pub struct Game {
    snake: Snake,
    food: Food,
    border: Border,
    score: Score,
    state: GameState,
    rng: StdRng,
    pending_direction: Option<Direction>,
    restart_requested: bool,
}

impl Game {
    pub fn new(config: &GameConfig, best: u32) -> Self {
        Self::with_rng(config, best, StdRng::from_entropy())
    }

    pub fn with_rng(config: &GameConfig, best: u32, rng: StdRng) -> Self {
        let (width, height) = config.display_size();
        let border = Border::new(width, height, config.border_thickness, config.stats_height);
        let start = config.start_position.unwrap_or_else(|| {
            let (cx, cy) = border.playable_region().center();
            (cx - config.head.width / 2, cy - config.head.height / 2)
        });
        let snake = Snake::new(
            start,
            config.initial_direction,
            config.head,
            config.piece,
            config.extend_by,
        );
        let mut game = Self {
            snake,
            food: Food::new((0, 0), config.food.width, config.food.height),
            border,
            score: Score::with_best(best),
            state: GameState::Playing,
            rng,
            pending_direction: None,
            restart_requested: false,
        };
        game.respawn_food();
        game
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn border(&self) -> &Border {
        &self.border
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        matches!(self.state, GameState::Over(_))
    }

    /// Records intent only, nothing moves until the next `tick`. A reversal
    /// the head would refuse is dropped here, so it cannot replace a valid
    /// turn queued earlier in the same tick.
    pub fn queue(&mut self, input: Input) {
        match input {
            Input::Steer(direction) => {
                if !self.snake.body.is_empty() && direction == self.snake.direction().opposite() {
                    tracing::trace!(%direction, "ignoring reversal");
                    return;
                }
                self.pending_direction = Some(direction);
            }
            Input::Restart => self.restart_requested = true,
        }
    }

    /// One simulation step: pending input, game-over check, food, then movement.
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();

        if std::mem::take(&mut self.restart_requested) && self.is_over() {
            self.restart();
            events.push(GameEvent::Restarted);
        }

        if let Some(direction) = self.pending_direction.take() {
            if self.state == GameState::Playing {
                if !self.snake.is_moving() {
                    self.snake.start();
                    events.push(GameEvent::Started);
                }
                self.snake.steer(direction);
            }
        }

        if self.is_over() {
            return events;
        }

        if let Some(collision) = collision::detect(&self.snake, &self.border) {
            self.state = GameState::Over(collision);
            self.snake.stop();
            events.push(GameEvent::GameOver(collision));
            return events;
        }

        if self.food.eaten_by(&self.snake.head.rect()) {
            self.snake.extend();
            let record = self.score.increment();
            events.push(GameEvent::FoodEaten { score: self.score.current() });
            if record {
                events.push(GameEvent::NewBest(self.score.best()));
            }
            self.respawn_food();
        }

        self.snake.advance();
        events
    }

    fn restart(&mut self) {
        self.score.reset();
        self.snake.stop();
        self.snake.reset();
        self.respawn_food();
        self.state = GameState::Playing;
    }

    fn respawn_food(&mut self) {
        let region = self.border.playable_region();
        for _ in 0..FOOD_PLACEMENT_ATTEMPTS {
            self.food.respawn_in(&mut self.rng, &region);
            if !self.snake.colliding_with(&self.food.rect) {
                return;
            }
        }
        tracing::debug!("no free spot for food, placing it on the snake");
    }
}

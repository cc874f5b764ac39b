use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::RgbColor;

use crate::border::Border;
use crate::canvas::{Canvas, Color, FontKind};
use crate::direction::Direction;
use crate::food::Food;
use crate::game::{Game, GameState};
use crate::geometry::Rect;
use crate::score::Score;
use crate::snake::Snake;

const OVERLAY_SPACING: i32 = 20;

#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub background: Color,
    pub snake: Color,
    pub outline: Color,
    pub eye: Color,
    pub food: Color,
    pub border: Color,
    pub text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb888::BLACK,
            snake: Rgb888::GREEN,
            outline: Rgb888::WHITE,
            eye: Rgb888::BLACK,
            food: Rgb888::RED,
            border: Rgb888::RED,
            text: Rgb888::WHITE,
        }
    }
}

// Eye placement on the head, in pixels.
#[derive(Clone, Copy, Debug)]
pub struct Eyes {
    pub width: i32,
    pub height: i32,
    pub front: i32,
    pub side: i32,
}

impl Default for Eyes {
    fn default() -> Self {
        Self { width: 6, height: 6, front: 6, side: 5 }
    }
}

impl Eyes {
    /// Both eye rectangles for a head at `head` looking towards `direction`.
    pub fn rects(&self, head: &Rect, direction: Direction) -> [Rect; 2] {
        let (x1, y1, x2, y2) = match direction {
            Direction::Up | Direction::Down => {
                let y = if direction == Direction::Up {
                    head.top() + self.front
                } else {
                    head.bottom() - self.front - self.height
                };
                (head.right() - self.side - self.width, y, head.left() + self.side, y)
            }
            Direction::Left | Direction::Right => {
                let x = if direction == Direction::Left {
                    head.left() + self.front
                } else {
                    head.right() - self.front - self.width
                };
                (x, head.top() + self.side, x, head.bottom() - self.side - self.height)
            }
        };
        [
            Rect::new(x1, y1, self.width, self.height),
            Rect::new(x2, y2, self.width, self.height),
        ]
    }
}

/// Paints a whole frame: snake, food, HUD, border, then overlays.
pub struct Renderer {
    palette: Palette,
    eyes: Eyes,
    outline_width: u32,
    title: String,
}

impl Renderer {
    pub fn new(palette: Palette, outline_width: u32, title: impl Into<String>) -> Self {
        Self {
            palette,
            eyes: Eyes::default(),
            outline_width,
            title: title.into(),
        }
    }

    pub fn draw<C: Canvas>(&self, canvas: &mut C, game: &Game) {
        debug_assert_eq!(
            canvas.surface_size(),
            (game.border().width, game.border().height),
            "surface and field disagree on size"
        );
        canvas.fill_background(self.palette.background);
        self.draw_snake(canvas, game.snake());
        self.draw_food(canvas, game.food());
        self.draw_hud(canvas, game.border(), game.score());
        self.draw_border(canvas, game.border());
        match game.state() {
            GameState::Over(collision) => {
                self.draw_game_over(canvas, game.border(), collision.reason());
            }
            GameState::Playing if !game.snake().is_moving() => {
                self.draw_hint(canvas, game.border());
            }
            GameState::Playing => {}
        }
    }

    fn draw_piece<C: Canvas>(&self, canvas: &mut C, rect: Rect) {
        canvas.fill_rect(rect, self.palette.snake);
        canvas.stroke_rect(rect, self.palette.outline, self.outline_width);
    }

    fn draw_snake<C: Canvas>(&self, canvas: &mut C, snake: &Snake) {
        for piece in snake.body.segments() {
            self.draw_piece(canvas, piece.rect());
        }
        let head = snake.head.rect();
        self.draw_piece(canvas, head);
        for eye in self.eyes.rects(&head, snake.direction()) {
            canvas.fill_ellipse(eye, self.palette.eye);
        }
    }

    fn draw_food<C: Canvas>(&self, canvas: &mut C, food: &Food) {
        canvas.fill_ellipse(food.rect, self.palette.food);
        canvas.stroke_ellipse(food.rect, self.palette.outline, self.outline_width);
    }

    fn draw_hud<C: Canvas>(&self, canvas: &mut C, border: &Border, score: &Score) {
        let [score_cell, title_cell, best_cell] = border.stats_cells();
        let color = self.palette.text;
        canvas.draw_text(
            &format!("SCORE: {}", score.current()),
            score_cell.center(),
            FontKind::Hud,
            color,
        );
        canvas.draw_text(&self.title.to_uppercase(), title_cell.center(), FontKind::Title, color);
        canvas.draw_text(&format!("BEST: {}", score.best()), best_cell.center(), FontKind::Hud, color);
    }

    fn draw_border<C: Canvas>(&self, canvas: &mut C, border: &Border) {
        for line in border.lines() {
            canvas.fill_rect(line, self.palette.border);
        }
    }

    // Stacks lines downwards, the first one ending at the field center.
    fn draw_stack<C: Canvas>(&self, canvas: &mut C, border: &Border, lines: &[(&str, FontKind)]) {
        let (center_x, center_y) = border.playable_region().center();
        let mut top = match lines.first() {
            Some((text, font)) => center_y - canvas.text_size(text, *font).1,
            None => return,
        };
        for (text, font) in lines {
            let (_, height) = canvas.text_size(text, *font);
            canvas.draw_text(text, (center_x, top + height / 2), *font, self.palette.text);
            top += height + OVERLAY_SPACING;
        }
    }

    fn draw_game_over<C: Canvas>(&self, canvas: &mut C, border: &Border, reason: &str) {
        let reason = format!("REASON: {reason}");
        self.draw_stack(
            canvas,
            border,
            &[
                ("GAMEOVER!", FontKind::Title),
                (&reason, FontKind::Message),
                ("PRESS ENTER OR SPACEBAR TO CONTINUE", FontKind::Message),
            ],
        );
    }

    fn draw_hint<C: Canvas>(&self, canvas: &mut C, border: &Border) {
        self.draw_stack(canvas, border, &[("PRESS AN ARROW KEY TO START", FontKind::Message)]);
    }
}

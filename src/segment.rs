use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::geometry::Rect;

/// Base size of a segment while it faces left or right. Facing up or down
/// swaps the two, so `width` is always the extent along the direction of travel.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn oriented(&self, direction: Direction) -> (i32, i32) {
        if direction.is_horizontal() {
            (self.width, self.height)
        } else {
            (self.height, self.width)
        }
    }
}

/// Top-left coordinate that puts a `follower_width` x `follower_height` piece
/// flush against the trailing edge of `rect`, which travels towards `direction`.
pub fn placement_behind(
    direction: Direction,
    rect: &Rect,
    follower_width: i32,
    follower_height: i32,
) -> (i32, i32) {
    match direction {
        Direction::Down => (rect.x, rect.top() - follower_height),
        Direction::Left => (rect.right(), rect.y),
        Direction::Right => (rect.left() - follower_width, rect.y),
        Direction::Up => (rect.x, rect.bottom()),
    }
}

/// One rectangular unit of the snake.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Segment {
    pub x: i32,
    pub y: i32,
    pub size: Size,
    pub direction: Direction,
}

impl Segment {
    pub fn new(x: i32, y: i32, size: Size, direction: Direction) -> Self {
        Self { x, y, size, direction }
    }

    pub fn width(&self) -> i32 {
        self.size.oriented(self.direction).0
    }

    pub fn height(&self) -> i32 {
        self.size.oriented(self.direction).1
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width(), self.height())
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn set_position(&mut self, (x, y): (i32, i32)) {
        self.x = x;
        self.y = y;
    }

    pub fn colliding_with(&self, other: &Rect) -> bool {
        self.rect().overlaps(other)
    }

    /// Where a segment of `size`, facing `direction`, has to go to trail this one.
    pub fn behind(&self, size: Size, direction: Direction) -> (i32, i32) {
        let (width, height) = size.oriented(direction);
        placement_behind(self.direction, &self.rect(), width, height)
    }
}

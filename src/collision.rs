use std::fmt;

use crate::border::Border;
use crate::snake::Snake;

/// Why a round ended.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Collision {
    SelfCollision,
    BoundaryCollision,
}

impl Collision {
    pub fn reason(&self) -> &'static str {
        match self {
            Collision::SelfCollision => "SNAKE BUMPED INTO ITSELF",
            Collision::BoundaryCollision => "SNAKE MOVED OUT OF THE BOUNDARY",
        }
    }
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

/// Self-collision is checked first. Only the head is tested against the border.
pub fn detect(snake: &Snake, border: &Border) -> Option<Collision> {
    let head = snake.head.rect();
    if snake.body.colliding_with(&head) {
        return Some(Collision::SelfCollision);
    }
    if border.colliders().iter().any(|line| line.overlaps(&head)) {
        return Some(Collision::BoundaryCollision);
    }
    None
}

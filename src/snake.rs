use crate::body::Body;
use crate::direction::Direction;
use crate::geometry::Rect;
use crate::head::Head;
use crate::segment::Size;

pub struct Snake {
    pub head: Head,
    pub body: Body,
}

impl Snake {
    /// Head velocity is taken from the body piece width so the chain stays seamless.
    pub fn new(
        position: (i32, i32),
        direction: Direction,
        head_size: Size,
        piece: Size,
        extend_by: usize,
    ) -> Snake {
        Snake {
            head: Head::new(position, head_size, direction, piece.width),
            body: Body::new(piece, extend_by),
        }
    }

    pub fn direction(&self) -> Direction {
        self.head.direction()
    }

    pub fn is_moving(&self) -> bool {
        self.head.is_moving()
    }

    pub fn start(&mut self) {
        self.head.start();
    }

    pub fn stop(&mut self) {
        self.head.stop();
    }

    pub fn steer(&mut self, direction: Direction) -> bool {
        let has_body = !self.body.is_empty();
        self.head.turn(direction, has_body)
    }

    pub fn extend(&mut self) {
        self.body.extend();
    }

    // One step forward: head first, then the chain grows and follows.
    pub fn advance(&mut self) {
        self.head.advance();
        self.body.grow_step(&self.head);
        if self.head.is_moving() {
            self.body.shift(&self.head);
        }
    }

    pub fn colliding_with(&self, other: &Rect) -> bool {
        self.head.colliding_with(other) || self.body.colliding_with(other)
    }

    // Back to the start pose with no body. Motion state is left to the caller.
    pub fn reset(&mut self) {
        self.head.reset();
        self.body.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake() -> Snake {
        Snake::new((100, 100), Direction::Right, Size::new(32, 32), Size::new(16, 32), 3)
    }

    #[test]
    fn velocity_follows_piece_width() {
        assert_eq!(snake().head.velocity(), 16);
    }

    #[test]
    fn right_then_left_is_rejected_with_body() {
        let mut s = snake();
        s.start();
        s.extend();
        s.advance();
        assert_eq!(s.body.len(), 1);
        assert!(!s.steer(Direction::Left));
        assert_eq!(s.direction(), Direction::Right);
        assert!(s.steer(Direction::Up));
    }

    #[test]
    fn stopped_snake_still_materialises_growth() {
        let mut s = snake();
        s.extend();
        s.advance();
        assert_eq!(s.head.position(), (100, 100));
        assert_eq!(s.body.len(), 1);
        assert_eq!(s.body.segments()[0].position(), (84, 100));
    }

    #[test]
    fn reset_drops_body_and_restores_head() {
        let mut s = snake();
        s.start();
        s.extend();
        s.steer(Direction::Down);
        for _ in 0..3 {
            s.advance();
        }
        s.reset();
        assert!(s.body.is_empty());
        assert_eq!(s.head.position(), (100, 100));
        assert_eq!(s.direction(), Direction::Right);
    }
}

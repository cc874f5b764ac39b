use crate::direction::Direction;
use crate::geometry::Rect;
use crate::segment::{Segment, Size};

/// The player-controlled leading segment.
#[derive(Clone, Debug)]
pub struct Head {
    segment: Segment,
    moving: bool,
    velocity: i32,
    start_position: (i32, i32),
    start_direction: Direction,
}

impl Head {
    /// `velocity` must equal the extent of a body piece along its travel
    /// direction, otherwise the chain shows gaps or overlaps.
    pub fn new(position: (i32, i32), size: Size, direction: Direction, velocity: i32) -> Self {
        Self {
            segment: Segment::new(position.0, position.1, size, direction),
            moving: false,
            velocity,
            start_position: position,
            start_direction: direction,
        }
    }

    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    pub fn rect(&self) -> Rect {
        self.segment.rect()
    }

    pub fn direction(&self) -> Direction {
        self.segment.direction
    }

    pub fn position(&self) -> (i32, i32) {
        self.segment.position()
    }

    pub fn velocity(&self) -> i32 {
        self.velocity
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn start(&mut self) {
        self.moving = true;
    }

    pub fn stop(&mut self) {
        self.moving = false;
    }

    /// Changes direction. Ignored while stopped, and a 180° turn is refused
    /// when a body trails the head. Returns whether the direction was applied.
    pub fn turn(&mut self, direction: Direction, has_body: bool) -> bool {
        if !self.moving {
            return false;
        }
        if has_body && direction == self.segment.direction.opposite() {
            return false;
        }
        self.segment.direction = direction;
        true
    }

    // Moves one step of `velocity` pixels, only while moving.
    pub fn advance(&mut self) {
        if !self.moving {
            return;
        }
        let (dx, dy) = self.segment.direction.delta();
        self.segment.x += dx * self.velocity;
        self.segment.y += dy * self.velocity;
    }

    // Back to the start position and direction. Does not touch `moving`.
    pub fn reset(&mut self) {
        self.segment.set_position(self.start_position);
        self.segment.direction = self.start_direction;
    }

    pub fn colliding_with(&self, other: &Rect) -> bool {
        self.segment.colliding_with(other)
    }

    pub fn behind(&self, size: Size, direction: Direction) -> (i32, i32) {
        self.segment.behind(size, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn head() -> Head {
        Head::new((100, 100), Size::new(32, 32), Direction::Right, 16)
    }

    #[test]
    fn moves_by_velocity_along_direction() {
        let mut h = head();
        h.start();
        h.advance();
        assert_eq!(h.position(), (116, 100));
        assert!(h.turn(Direction::Down, false));
        h.advance();
        assert_eq!(h.position(), (116, 116));
    }

    #[test]
    fn stopped_head_ignores_moves_and_turns() {
        let mut h = head();
        h.advance();
        assert_eq!(h.position(), (100, 100));
        assert!(!h.turn(Direction::Up, false));
        assert_eq!(h.direction(), Direction::Right);
    }

    #[test]
    fn start_and_stop_are_idempotent() {
        let mut h = head();
        h.start();
        h.start();
        assert!(h.is_moving());
        h.stop();
        h.stop();
        assert!(!h.is_moving());
    }

    #[test]
    fn reversal_rejected_only_with_a_body() {
        let mut h = head();
        h.start();
        assert!(!h.turn(Direction::Left, true));
        assert_eq!(h.direction(), Direction::Right);
        assert!(h.turn(Direction::Left, false));
        assert_eq!(h.direction(), Direction::Left);
    }

    #[test]
    fn reset_restores_start_without_changing_motion() {
        let mut h = head();
        h.start();
        h.turn(Direction::Up, false);
        h.advance();
        h.advance();
        h.reset();
        assert_eq!(h.position(), (100, 100));
        assert_eq!(h.direction(), Direction::Right);
        assert!(h.is_moving());

        h.stop();
        h.reset();
        assert!(!h.is_moving());
    }
}

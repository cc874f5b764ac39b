use crate::geometry::Rect;
use crate::head::Head;
use crate::segment::{Segment, Size};

pub const DEFAULT_EXTEND_BY: usize = 3;

/// Trailing segments of the snake. `segments[0]` follows the head directly,
/// the last element is the tail.
#[derive(Clone, Debug)]
pub struct Body {
    segments: Vec<Segment>,
    target_length: usize,
    extend_by: usize,
    piece: Size,
}

impl Body {
    pub fn new(piece: Size, extend_by: usize) -> Self {
        Self {
            segments: Vec::new(),
            target_length: 0,
            extend_by,
            piece,
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    pub fn piece(&self) -> Size {
        self.piece
    }

    /// Schedules growth by the configured increment. Pieces appear one per
    /// `grow_step`.
    pub fn extend(&mut self) {
        self.extend_by(self.extend_by);
    }

    pub fn extend_by(&mut self, pieces: usize) {
        self.target_length += pieces;
    }

    /// Appends at most one piece behind the current tail (or the head when
    /// empty), facing the same way as it. Returns true if a piece was added.
    pub fn grow_step(&mut self, head: &Head) -> bool {
        if self.segments.len() >= self.target_length {
            return false;
        }
        let (direction, position) = match self.segments.last() {
            Some(tail) => (tail.direction, tail.behind(self.piece, tail.direction)),
            None => (head.direction(), head.behind(self.piece, head.direction())),
        };
        self.segments.push(Segment::new(position.0, position.1, self.piece, direction));
        true
    }

    /// Follow-the-leader step. Walks from the tail towards the head so that
    /// every piece copies its leader's position and direction before the
    /// leader itself is overwritten. The first piece snaps behind the head.
    pub fn shift(&mut self, head: &Head) {
        if self.segments.is_empty() {
            return;
        }
        for i in (1..self.segments.len()).rev() {
            let leader = self.segments[i - 1];
            let piece = &mut self.segments[i];
            piece.set_position(leader.position());
            piece.direction = leader.direction;
        }
        let first = &mut self.segments[0];
        first.direction = head.direction();
        first.set_position(head.behind(self.piece, head.direction()));
    }

    pub fn colliding_with(&self, other: &Rect) -> bool {
        self.segments.iter().any(|piece| piece.colliding_with(other))
    }

    // Drops every piece and any pending growth.
    pub fn reset(&mut self) {
        self.segments.clear();
        self.target_length = 0;
    }

    #[cfg(test)]
    pub(crate) fn push_raw(&mut self, segment: Segment) {
        self.segments.push(segment);
        self.target_length = self.target_length.max(self.segments.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;

    const PIECE: Size = Size { width: 16, height: 32 };

    fn moving_head() -> Head {
        let mut head = Head::new((400, 300), Size::new(32, 32), Direction::Right, PIECE.width);
        head.start();
        head
    }

    fn tick(head: &mut Head, body: &mut Body) {
        head.advance();
        body.grow_step(head);
        body.shift(head);
    }

    fn assert_contiguous(head: &Head, body: &Body) {
        let mut leader = *head.segment();
        for (i, piece) in body.segments().iter().enumerate() {
            assert_eq!(piece.position(), leader.behind(PIECE, piece.direction), "piece {i}");
            leader = *piece;
        }
    }

    #[test]
    fn extend_only_raises_target() {
        let mut body = Body::new(PIECE, DEFAULT_EXTEND_BY);
        body.extend();
        assert_eq!(body.target_length(), 3);
        assert!(body.is_empty());
    }

    #[test]
    fn grows_one_piece_per_tick() {
        let mut head = moving_head();
        let mut body = Body::new(PIECE, DEFAULT_EXTEND_BY);
        body.extend();
        for expected in 1..=3 {
            tick(&mut head, &mut body);
            assert_eq!(body.len(), expected);
            assert_contiguous(&head, &body);
        }
        tick(&mut head, &mut body);
        assert_eq!(body.len(), 3);
    }

    #[test]
    fn length_never_exceeds_target() {
        let mut head = moving_head();
        let mut body = Body::new(PIECE, 2);
        let mut previous = 0;
        for step in 0..40 {
            if step % 7 == 0 {
                body.extend();
            }
            if step % 5 == 0 {
                head.turn(if step % 10 == 0 { Direction::Down } else { Direction::Right }, true);
            }
            tick(&mut head, &mut body);
            assert!(body.len() <= body.target_length());
            assert!(body.len() <= previous + 1);
            previous = body.len();
        }
    }

    #[test]
    fn straight_run_stays_contiguous() {
        let mut head = moving_head();
        let mut body = Body::new(PIECE, 5);
        body.extend();
        for _ in 0..12 {
            tick(&mut head, &mut body);
            assert_contiguous(&head, &body);
            assert!(!body.colliding_with(&head.rect()));
        }
    }

    #[test]
    fn shift_copies_leader_state_tail_first() {
        let head = moving_head();
        let mut body = Body::new(PIECE, 3);
        body.push_raw(Segment::new(10, 10, PIECE, Direction::Up));
        body.push_raw(Segment::new(20, 20, PIECE, Direction::Left));
        body.push_raw(Segment::new(30, 30, PIECE, Direction::Down));

        body.shift(&head);

        let pieces = body.segments();
        // head -> front piece, front -> second, second -> tail, all from prior state
        assert_eq!(pieces[0].position(), head.behind(PIECE, Direction::Right));
        assert_eq!(pieces[0].direction, Direction::Right);
        assert_eq!(pieces[1].position(), (10, 10));
        assert_eq!(pieces[1].direction, Direction::Up);
        assert_eq!(pieces[2].position(), (20, 20));
        assert_eq!(pieces[2].direction, Direction::Left);
    }

    #[test]
    fn turn_propagates_down_the_chain() {
        let mut head = moving_head();
        let mut body = Body::new(PIECE, 4);
        body.extend();
        for _ in 0..6 {
            tick(&mut head, &mut body);
        }
        head.turn(Direction::Down, true);
        for step in 0..4 {
            tick(&mut head, &mut body);
            assert_eq!(body.segments()[step].direction, Direction::Down);
            if step + 1 < body.len() {
                assert_eq!(body.segments()[step + 1].direction, Direction::Right);
            }
        }
    }

    #[test]
    fn corner_link_joins_side_on_until_the_turn_passes() {
        let mut head = moving_head();
        let mut body = Body::new(PIECE, 2);
        body.extend();
        tick(&mut head, &mut body);
        tick(&mut head, &mut body);
        assert_contiguous(&head, &body);

        head.turn(Direction::Down, true);
        tick(&mut head, &mut body);
        assert_eq!(head.position(), (432, 316));
        let [front, corner] = [body.segments()[0], body.segments()[1]];
        assert_eq!((front.position(), front.direction), ((432, 300), Direction::Down));
        // still facing right, its leading edge against the front piece's side
        assert_eq!((corner.position(), corner.direction), ((416, 300), Direction::Right));
        assert_ne!(corner.position(), front.behind(PIECE, corner.direction));
        assert_eq!(corner.rect().right(), front.rect().left());
        assert!(!corner.colliding_with(&front.rect()));
        assert!(!body.colliding_with(&head.rect()));

        tick(&mut head, &mut body);
        assert_contiguous(&head, &body);
    }

    #[test]
    fn reset_clears_pieces_and_target() {
        let mut head = moving_head();
        let mut body = Body::new(PIECE, 3);
        body.extend();
        tick(&mut head, &mut body);
        body.reset();
        assert!(body.is_empty());
        assert_eq!(body.target_length(), 0);
        assert!(!body.grow_step(&head));
    }
}

use rand::Rng;

use crate::geometry::{Rect, Region, Span};

#[derive(Debug, Clone)]
pub struct Food {
    pub rect: Rect,
}

impl Food {
    pub fn new(position: (i32, i32), width: i32, height: i32) -> Self {
        Self {
            rect: Rect::new(position.0, position.1, width, height),
        }
    }

    pub fn position(&self) -> (i32, i32) {
        (self.rect.x, self.rect.y)
    }

    pub fn set_pos_to(&mut self, (x, y): (i32, i32)) {
        self.rect.x = x;
        self.rect.y = y;
    }

    /// Moves the food to a uniformly random spot whose whole rectangle lies in
    /// `x_range` x `y_range`. A missing range falls back to the full display
    /// extent on that axis.
    pub fn set_random_pos<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        x_range: Option<Span>,
        y_range: Option<Span>,
        display: (i32, i32),
    ) {
        let x_range = x_range.unwrap_or(Span::new(0, display.0));
        let y_range = y_range.unwrap_or(Span::new(0, display.1));
        let x = pick(rng, x_range, self.rect.width);
        let y = pick(rng, y_range, self.rect.height);
        self.set_pos_to((x, y));
    }

    pub fn respawn_in<R: Rng + ?Sized>(&mut self, rng: &mut R, region: &Region) {
        self.set_random_pos(
            rng,
            Some(region.x),
            Some(region.y),
            (region.x.max, region.y.max),
        );
    }

    pub fn eaten_by(&self, head: &Rect) -> bool {
        self.rect.overlaps(head)
    }
}

// Inclusive upper bound so the food may sit flush against the far edge.
fn pick<R: Rng + ?Sized>(rng: &mut R, range: Span, extent: i32) -> i32 {
    let last = range.max - extent;
    if last <= range.min {
        return range.min;
    }
    rng.gen_range(range.min..=last)
}

use crate::geometry::{Rect, Region, Span};

pub const DEFAULT_THICKNESS: i32 = 8;
pub const DEFAULT_STATS_HEIGHT: i32 = 65;

/// Red frame around the field plus the stats bar at the bottom.
#[derive(Debug, Clone)]
pub struct Border {
    pub width: i32,
    pub height: i32,
    pub top: Rect,
    pub bottom: Rect,
    pub left: Rect,
    pub right: Rect,
    pub stats_separator: Rect,
    pub score_separator: Rect,
    pub best_separator: Rect,
}

impl Border {
    pub fn new(width: i32, height: i32, thickness: i32, stats_height: i32) -> Self {
        let score_x = width / 4;
        let best_x = width - score_x;
        let stats_y = height - stats_height;
        Self {
            width,
            height,
            top: Rect::new(0, 0, width, thickness + 1),
            bottom: Rect::new(0, height - thickness, width, thickness),
            left: Rect::new(0, 0, thickness, height),
            right: Rect::new(width - thickness, 0, thickness, height),
            stats_separator: Rect::new(0, stats_y, width, thickness),
            score_separator: Rect::new(score_x, stats_y, thickness, stats_height),
            best_separator: Rect::new(best_x, stats_y, thickness, stats_height),
        }
    }

    // Lines the snake's head must not touch.
    pub fn colliders(&self) -> [Rect; 5] {
        [self.top, self.bottom, self.left, self.right, self.stats_separator]
    }

    pub fn lines(&self) -> [Rect; 7] {
        [
            self.top,
            self.bottom,
            self.left,
            self.right,
            self.stats_separator,
            self.score_separator,
            self.best_separator,
        ]
    }

    /// Area inside the frame and above the stats bar.
    pub fn playable_region(&self) -> Region {
        Region {
            x: Span::new(self.left.right(), self.right.left()),
            y: Span::new(self.top.bottom(), self.stats_separator.top()),
        }
    }

    // HUD cells between the separators, below the stats line.
    pub fn stats_cells(&self) -> [Rect; 3] {
        let top = self.stats_separator.bottom();
        let h = self.bottom.top() - top;
        let cell = |from: i32, to: i32| Rect::new(from, top, to - from, h);
        [
            cell(self.left.right(), self.score_separator.left()),
            cell(self.score_separator.right(), self.best_separator.left()),
            cell(self.best_separator.right(), self.right.left()),
        ]
    }

    pub fn is_inside(&self, rect: &Rect) -> bool {
        self.playable_region().as_rect().contains(rect)
    }
}

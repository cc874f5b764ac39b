#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    current: u32,
    best: u32,
}

impl Score {
    pub fn with_best(best: u32) -> Self {
        Self { current: 0, best }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Adds one point. Returns true when this set a new best.
    pub fn increment(&mut self) -> bool {
        self.current += 1;
        if self.current > self.best {
            self.best = self.current;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }
}

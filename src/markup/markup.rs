//! Colored runs with a priority

use super::color::Color;
use super::run::Run;

/// Priority of the full-line markup carrying the ambient color. Lower
/// than any rule, whose priorities start at zero.
pub const BASELINE_PRIORITY: i32 = -1;

/// A colored run of a line. Higher priority wins where markups overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markup {
    pub run: Run,
    pub color: Color,
    pub priority: i32,
}

impl Markup {
    pub fn new(run: Run, color: Color, priority: i32) -> Self {
        Self { run, color, priority }
    }

    /// Full-line markup in the given color at the lowest priority
    pub fn baseline(line: &str, color: Color) -> Self {
        Self::new(Run::new(0, line.len()), color, BASELINE_PRIORITY)
    }

    /// Same color and priority over a different run
    pub fn with_run(&self, run: Run) -> Self {
        Self { run, ..*self }
    }

    /// Ordering key used by the reflow sweep
    pub fn sort_key(&self) -> (usize, i32) {
        (self.run.index, self.priority)
    }
}

//! Score and level tracking.

/// Points between level changes; the promotion threshold walks upward in
/// steps of this size.
pub const LEVEL_STEP_POINTS: u32 = 5;

/// Score / level state. One completed word is one point; crossing the moving
/// threshold promotes the level and shifts the threshold up a step.
#[derive(Debug, Clone)]
pub struct ScoreTracker {
    score: u32,
    level: u32,
    level_up_points: u32,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self {
            score: 0,
            level: 1,
            level_up_points: LEVEL_STEP_POINTS,
        }
    }

    /// Record one completed word and re-derive the level.
    pub fn record_match(&mut self) {
        self.score += 1;
        self.check_level();
    }

    // Promotion fires on crossing the rising threshold; demotion compares the
    // score against `threshold - step` and walks everything back down a step.
    // With a monotonic score the demotion branch never fires, but the walk is
    // kept bidirectional. Level never drops below 1.
    fn check_level(&mut self) {
        if self.score > self.level_up_points {
            self.level += 1;
            self.level_up_points += LEVEL_STEP_POINTS;
        }
        if self.score < self.level_up_points.saturating_sub(LEVEL_STEP_POINTS) {
            self.level = self.level.saturating_sub(1).max(1);
            self.level_up_points = self.level_up_points.saturating_sub(LEVEL_STEP_POINTS);
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }
}

impl Default for ScoreTracker {
    fn default() -> Self {
        Self::new()
    }
}

use std::time::{Duration, Instant};

/// Statistics for the current process; nothing here outlives it
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub best_score: u32,
    pub games_played: u32,
    pub food_eaten: u32,
    paused_at: Option<Instant>,
    paused_total: Duration,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            best_score: 0,
            games_played: 0,
            food_eaten: 0,
            paused_at: None,
            paused_total: Duration::ZERO,
        }
    }

    /// Refresh the elapsed play time, excluding paused stretches
    pub fn update(&mut self) {
        let paused = match self.paused_at {
            Some(since) => self.paused_total + since.elapsed(),
            None => self.paused_total,
        };
        self.elapsed_time = self.start_time.elapsed().saturating_sub(paused);
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.paused_total = Duration::ZERO;
        self.paused_at = None;
    }

    pub fn on_food_eaten(&mut self, score: u32) {
        self.food_eaten += 1;
        self.best_score = self.best_score.max(score);
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.games_played += 1;
        self.best_score = self.best_score.max(final_score);
    }

    pub fn on_pause_changed(&mut self, running: bool) {
        match (running, self.paused_at) {
            (false, None) => self.paused_at = Some(Instant::now()),
            (true, Some(since)) => {
                self.paused_total += since.elapsed();
                self.paused_at = None;
            }
            _ => {}
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_best_score_tracking() {
        let mut metrics = GameMetrics::new();

        metrics.on_game_over(10);
        assert_eq!(metrics.best_score, 10);
        assert_eq!(metrics.games_played, 1);

        metrics.on_game_over(5);
        assert_eq!(metrics.best_score, 10);
        assert_eq!(metrics.games_played, 2);

        metrics.on_food_eaten(11);
        assert_eq!(metrics.best_score, 11);
        assert_eq!(metrics.food_eaten, 1);
        assert_eq!(metrics.games_played, 2);
    }

    #[test]
    fn test_game_start_resets_time() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();

        assert!(metrics.elapsed_time.as_millis() >= 50);

        metrics.on_game_start();
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() < 50);
    }

    #[test]
    fn test_paused_time_is_excluded() {
        let mut metrics = GameMetrics::new();
        metrics.on_pause_changed(false);
        std::thread::sleep(Duration::from_millis(60));
        metrics.on_pause_changed(true);
        metrics.update();

        assert!(metrics.elapsed_time.as_millis() < 50);
    }
}

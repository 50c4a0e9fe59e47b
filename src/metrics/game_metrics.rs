use std::time::{Duration, Instant};

use crate::game::{GameEnd, GameState};

/// Session statistics that survive replays
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub games_played: u32,
    /// Games that ended with the board full
    pub wins: u32,
    pub longest_snake: usize,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
            wins: 0,
            longest_snake: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_game_over(&mut self, state: &GameState) {
        self.update();
        self.games_played += 1;
        self.high_score = self.high_score.max(state.score);
        self.longest_snake = self.longest_snake.max(state.snake.len());
        if state.end == Some(GameEnd::BoardFull) {
            self.wins += 1;
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

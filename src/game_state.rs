//! Screen state machine and score/level/high-score tracking.

use crate::constants::{MAX_LEVEL, POINTS_PER_FOOD, POINTS_PER_LEVEL};

/// The current screen. All transitions go through [`GameState`]; anything not
/// in its table (pausing from the menu, resuming while playing) is a silent
/// no-op, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
    Paused,
    GameOver,
    Win,
}

/// Result of [`GameState::add_score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreGain {
    /// True when this call crossed into a new level.
    pub leveled_up: bool,
    pub level: u32,
}

/// Screen transitions plus the scoring state attached to them.
///
/// Score and level reset only when a fresh game starts; the high score is the
/// single value that survives across games and only ever increases within a
/// session.
#[derive(Debug, Clone)]
pub struct GameState {
    screen: Screen,
    score: u32,
    level: u32,
    high_score: u32,
    /// Set when a finished game beat the stored high score.
    new_record: bool,
}

impl GameState {
    pub fn new(high_score: u32) -> Self {
        Self {
            screen: Screen::Menu,
            score: 0,
            level: 1,
            high_score,
            new_record: false,
        }
    }

    /// Menu / GameOver / Win → Playing, resetting score and level.
    /// Returns true if the transition happened.
    pub fn start_game(&mut self) -> bool {
        match self.screen {
            Screen::Menu | Screen::GameOver | Screen::Win => {
                self.screen = Screen::Playing;
                self.score = 0;
                self.level = 1;
                self.new_record = false;
                true
            }
            _ => false,
        }
    }

    /// Playing → Paused. Returns true if the transition happened.
    pub fn pause(&mut self) -> bool {
        if self.screen == Screen::Playing {
            self.screen = Screen::Paused;
            true
        } else {
            false
        }
    }

    /// Paused → Playing. Returns true if the transition happened.
    pub fn resume(&mut self) -> bool {
        if self.screen == Screen::Paused {
            self.screen = Screen::Playing;
            true
        } else {
            false
        }
    }

    /// Playing → GameOver on death. Returns true if this game set a record.
    pub fn end_game(&mut self) -> bool {
        self.finish(Screen::GameOver)
    }

    /// Playing → Win on a full board. Returns true if this game set a record.
    pub fn win_game(&mut self) -> bool {
        self.finish(Screen::Win)
    }

    fn finish(&mut self, outcome: Screen) -> bool {
        if self.screen != Screen::Playing {
            return false;
        }
        self.screen = outcome;
        if self.score > self.high_score {
            self.high_score = self.score;
            self.new_record = true;
        }
        self.new_record
    }

    /// GameOver / Win → Menu. Returns true if the transition happened.
    pub fn return_to_menu(&mut self) -> bool {
        match self.screen {
            Screen::GameOver | Screen::Win => {
                self.screen = Screen::Menu;
                true
            }
            _ => false,
        }
    }

    /// Add the fixed per-food score and recompute the level, clamped to
    /// MAX_LEVEL. Reports whether this call crossed a level boundary so the
    /// caller can fire a distinct level-up cue.
    pub fn add_score(&mut self) -> ScoreGain {
        self.score += POINTS_PER_FOOD;
        let new_level = (self.score / POINTS_PER_LEVEL + 1).min(MAX_LEVEL);
        let leveled_up = new_level > self.level;
        self.level = new_level;
        ScoreGain {
            leveled_up,
            level: self.level,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn is_new_record(&self) -> bool {
        self.new_record
    }
}

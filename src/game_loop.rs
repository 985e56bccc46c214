//! Tick scheduler and session orchestration.
//!
//! A [`Session`] owns the screen state machine and the active round (snake +
//! food). Frames carry a monotonic timestamp; the session computes the delta
//! itself, advances continuous animations every frame, and drains a
//! fixed-step accumulator into discrete simulation ticks while playing.

use crate::constants::{
    BASE_TICK_INTERVAL_MS, GRID_SIZE, MAX_FRAME_DELTA_MS, MIN_TICK_INTERVAL_MS, PULSE_PERIOD_MS,
    SHAKE_DURATION_MS, TICK_DECREMENT_PER_LEVEL_MS,
};
use crate::food::Food;
use crate::game_state::{GameState, Screen};
use crate::geometry::Position;
use crate::input::InputEvent;
use crate::snake::Snake;
use rand::Rng;
use std::collections::VecDeque;

/// Movement interval for a level: speeds up with level, floored at the
/// minimum so high levels stay playable.
pub fn tick_interval_for_level(level: u32) -> u64 {
    BASE_TICK_INTERVAL_MS
        .saturating_sub((level.saturating_sub(1)) as u64 * TICK_DECREMENT_PER_LEVEL_MS)
        .max(MIN_TICK_INTERVAL_MS)
}

/// Simulation outcomes surfaced to the caller, which maps them onto audio
/// cues and persistence saves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Food eaten without crossing a level boundary.
    Ate,
    /// Food eaten and a new level reached.
    LeveledUp { level: u32 },
    Died { new_record: bool },
    /// Board full after a respawn attempt.
    Won { new_record: bool },
    MutedChanged { muted: bool },
}

/// The entities of one game. Dropped on return to menu; kept after death or
/// win so the final board stays visible behind the overlay.
#[derive(Debug, Clone)]
struct Round {
    snake: Snake,
    food: Food,
}

/// Borrowed per-frame view of the active round for the renderer.
pub struct RoundView<'a> {
    /// Body segments, head first.
    pub body: &'a VecDeque<Position>,
    /// Food position, `None` while inactive.
    pub food: Option<Position>,
}

/// Immutable per-frame view handed to the renderer. The renderer pattern-
/// matches `round` instead of receiving placeholder entities before the
/// first game.
pub struct Snapshot<'a> {
    pub screen: Screen,
    pub round: Option<RoundView<'a>>,
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub new_record: bool,
    /// Food pulse animation, 0..1 triangle wave.
    pub pulse: f32,
    /// Screen shake intensity, 1.0 at death decaying linearly to 0.
    pub shake: f32,
    pub muted: bool,
}

/// One player session: screen state machine, active round, tick accumulator,
/// continuous animations, and the mute flag.
pub struct Session {
    state: GameState,
    round: Option<Round>,
    /// Unconsumed frame time, drained one tick interval at a time.
    accumulator_ms: u64,
    /// Timestamp of the previous frame; `None` before the first frame so it
    /// cannot produce a spurious large delta.
    last_frame_ms: Option<u64>,
    shake_remaining_ms: u64,
    pulse_clock_ms: u64,
    /// True when the current pause was induced by focus loss rather than the
    /// player. Only such pauses auto-resume on focus gain.
    auto_paused: bool,
    muted: bool,
}

impl Session {
    pub fn new(high_score: u32, muted: bool) -> Self {
        Self {
            state: GameState::new(high_score),
            round: None,
            accumulator_ms: 0,
            last_frame_ms: None,
            shake_remaining_ms: 0,
            pulse_clock_ms: 0,
            auto_paused: false,
            muted,
        }
    }

    /// Route one input event. Direction changes only enqueue; all state
    /// mutation waits for the next tick. Illegal inputs for the current
    /// screen are silent no-ops.
    pub fn handle_input<R: Rng>(&mut self, input: InputEvent, rng: &mut R) -> Option<GameEvent> {
        match input {
            InputEvent::Direction(dir) => {
                if self.state.screen() == Screen::Playing {
                    if let Some(round) = self.round.as_mut() {
                        round.snake.enqueue_direction(dir);
                    }
                }
                None
            }
            InputEvent::PauseToggle => {
                if self.state.pause() {
                    self.leave_playing();
                    self.auto_paused = false;
                } else if self.state.resume() {
                    self.auto_paused = false;
                }
                None
            }
            InputEvent::Confirm => {
                match self.state.screen() {
                    Screen::Menu => self.start_round(rng),
                    Screen::GameOver | Screen::Win => {
                        self.state.return_to_menu();
                        self.round = None;
                    }
                    _ => {}
                }
                None
            }
            InputEvent::MuteToggle => {
                self.muted = !self.muted;
                Some(GameEvent::MutedChanged { muted: self.muted })
            }
            InputEvent::Quit => None,
        }
    }

    /// The driver reports focus loss (e.g. the terminal lost focus): force a
    /// pause, remembering that the player did not ask for it.
    pub fn focus_lost(&mut self) {
        if self.state.pause() {
            self.leave_playing();
            self.auto_paused = true;
        }
    }

    /// Focus regained: resume only a focus-induced pause, never one the
    /// player requested.
    pub fn focus_gained(&mut self) {
        if self.auto_paused {
            self.state.resume();
            self.auto_paused = false;
        }
    }

    /// Advance one frame at the given monotonic timestamp (milliseconds).
    ///
    /// Animations run every frame regardless of screen; simulation ticks run
    /// only while playing. A tick that ends the game discards the rest of
    /// the frame's accumulated time.
    pub fn frame<R: Rng>(&mut self, now_ms: u64, rng: &mut R) -> Vec<GameEvent> {
        let delta = match self.last_frame_ms {
            Some(prev) => now_ms.saturating_sub(prev).min(MAX_FRAME_DELTA_MS),
            None => 0,
        };
        self.last_frame_ms = Some(now_ms);

        self.pulse_clock_ms = (self.pulse_clock_ms + delta) % PULSE_PERIOD_MS;
        self.shake_remaining_ms = self.shake_remaining_ms.saturating_sub(delta);

        let mut events = Vec::new();
        if self.state.screen() != Screen::Playing {
            return events;
        }

        self.accumulator_ms += delta;
        // The interval is re-read each tick: a mid-frame level-up speeds up
        // the remaining ticks of the same frame.
        while self.accumulator_ms >= tick_interval_for_level(self.state.level()) {
            self.accumulator_ms -= tick_interval_for_level(self.state.level());
            self.step(rng, &mut events);
            if self.state.screen() != Screen::Playing {
                self.accumulator_ms = 0;
                break;
            }
        }

        events
    }

    /// One discrete simulation step: move, then resolve death, then eating.
    fn step<R: Rng>(&mut self, rng: &mut R, events: &mut Vec<GameEvent>) {
        let Some(round) = self.round.as_mut() else {
            return;
        };

        let head = round.snake.advance();

        if round.snake.is_dead() {
            let new_record = self.state.end_game();
            self.shake_remaining_ms = SHAKE_DURATION_MS;
            events.push(GameEvent::Died { new_record });
            return;
        }

        if round.food.is_eaten_by(head) {
            round.snake.grow();
            let gain = self.state.add_score();
            let snake = &round.snake;
            round
                .food
                .spawn(snake.grid_size(), |pos| snake.occupies(pos), rng);

            if round.food.is_active() {
                events.push(if gain.leveled_up {
                    GameEvent::LeveledUp { level: gain.level }
                } else {
                    GameEvent::Ate
                });
            } else {
                let new_record = self.state.win_game();
                events.push(GameEvent::Won { new_record });
            }
        }
    }

    fn start_round<R: Rng>(&mut self, rng: &mut R) {
        if !self.state.start_game() {
            return;
        }
        let snake = Snake::new(GRID_SIZE);
        let mut food = Food::inactive();
        food.spawn(GRID_SIZE, |pos| snake.occupies(pos), rng);
        self.round = Some(Round { snake, food });
        self.accumulator_ms = 0;
        self.shake_remaining_ms = 0;
    }

    /// Accumulated partial-tick time is discarded on every transition out of
    /// PLAYING, so resuming can never burst ticks.
    fn leave_playing(&mut self) {
        self.accumulator_ms = 0;
    }

    /// Per-frame view for the renderer.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            screen: self.state.screen(),
            round: self.round.as_ref().map(|round| RoundView {
                body: round.snake.body(),
                food: round.food.position(),
            }),
            score: self.state.score(),
            high_score: self.state.high_score(),
            level: self.state.level(),
            new_record: self.state.is_new_record(),
            pulse: self.pulse(),
            shake: self.shake_intensity(),
            muted: self.muted,
        }
    }

    /// Food pulse as a 0..1 triangle wave over PULSE_PERIOD_MS.
    pub fn pulse(&self) -> f32 {
        let phase = self.pulse_clock_ms as f32 / PULSE_PERIOD_MS as f32;
        1.0 - (2.0 * phase - 1.0).abs()
    }

    /// Shake intensity: 1.0 immediately after death, linearly down to 0.
    pub fn shake_intensity(&self) -> f32 {
        self.shake_remaining_ms as f32 / SHAKE_DURATION_MS as f32
    }

    pub fn screen(&self) -> Screen {
        self.state.screen()
    }

    pub fn score(&self) -> u32 {
        self.state.score()
    }

    pub fn level(&self) -> u32 {
        self.state.level()
    }

    pub fn high_score(&self) -> u32 {
        self.state.high_score()
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    #[cfg(test)]
    pub(crate) fn snake(&self) -> Option<&Snake> {
        self.round.as_ref().map(|r| &r.snake)
    }

    #[cfg(test)]
    pub(crate) fn place_food(&mut self, pos: Position) {
        use rand::rngs::mock::StepRng;
        if let Some(round) = self.round.as_mut() {
            // Deterministically respawn at `pos` by occupying every other cell.
            let mut rng = StepRng::new(0, 0);
            let grid_size = round.snake.grid_size();
            round.food.spawn(grid_size, |p| p != pos, &mut rng);
        }
    }

    /// Replace the active round with a hand-built one, e.g. a nearly full
    /// tiny board for endgame scenarios. The session must already be playing.
    #[cfg(test)]
    pub(crate) fn install_round(&mut self, snake: Snake, food_pos: Position) {
        use rand::rngs::mock::StepRng;
        let grid_size = snake.grid_size();
        let mut food = Food::inactive();
        let mut rng = StepRng::new(0, 0);
        food.spawn(grid_size, |p| p != food_pos, &mut rng);
        self.round = Some(Round { snake, food });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{MAX_LEVEL, POINTS_PER_FOOD};
    use crate::geometry::Direction;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(99)
    }

    /// A session with a started game and the frame clock primed at t=0.
    fn playing_session(rng: &mut StdRng) -> Session {
        let mut session = Session::new(0, false);
        session.handle_input(InputEvent::Confirm, rng);
        assert_eq!(session.screen(), Screen::Playing);
        session.frame(0, rng);
        session
    }

    #[test]
    fn test_tick_interval_curve() {
        assert_eq!(tick_interval_for_level(1), BASE_TICK_INTERVAL_MS);
        let mut prev = tick_interval_for_level(1);
        let mut hit_floor = false;
        for level in 2..=MAX_LEVEL + 5 {
            let interval = tick_interval_for_level(level);
            if hit_floor {
                assert_eq!(interval, MIN_TICK_INTERVAL_MS);
            } else {
                assert!(interval < prev || interval == MIN_TICK_INTERVAL_MS);
            }
            if interval == MIN_TICK_INTERVAL_MS {
                hit_floor = true;
            }
            prev = interval;
        }
        assert!(hit_floor, "curve must reach the floor");
    }

    #[test]
    fn test_first_frame_produces_no_ticks() {
        let mut rng = rng();
        let mut session = Session::new(0, false);
        session.handle_input(InputEvent::Confirm, &mut rng);
        let head = session.snake().unwrap().head();

        // Large first timestamp, but no prior frame: delta is zero.
        session.frame(1_000_000, &mut rng);
        assert_eq!(session.snake().unwrap().head(), head);
    }

    #[test]
    fn test_one_tick_moves_snake_one_cell() {
        let mut rng = rng();
        let mut session = playing_session(&mut rng);
        let head = session.snake().unwrap().head();

        session.frame(BASE_TICK_INTERVAL_MS, &mut rng);
        let new_head = session.snake().unwrap().head();
        assert_eq!(new_head, Position::new(head.x + 1, head.y));
        assert_eq!(session.snake().unwrap().len(), 3);
    }

    #[test]
    fn test_sub_interval_frames_accumulate() {
        let mut rng = rng();
        let mut session = playing_session(&mut rng);
        let head = session.snake().unwrap().head();

        // Three 50ms frames: one 150ms tick fires on the third.
        session.frame(50, &mut rng);
        session.frame(100, &mut rng);
        assert_eq!(session.snake().unwrap().head(), head);
        session.frame(150, &mut rng);
        assert_eq!(session.snake().unwrap().head().x, head.x + 1);
    }

    #[test]
    fn test_frame_delta_clamped() {
        let mut rng = rng();
        let mut session = playing_session(&mut rng);
        let start_x = session.snake().unwrap().head().x;

        // A 10s gap (suspended process) must not replay 60+ ticks; the clamp
        // allows at most 200ms worth.
        session.frame(10_000, &mut rng);
        let moved = (session.snake().unwrap().head().x - start_x) as u64;
        assert!(moved <= MAX_FRAME_DELTA_MS / BASE_TICK_INTERVAL_MS + 1);
    }

    #[test]
    fn test_eating_scores_and_grows_on_following_step() {
        let mut rng = rng();
        let mut session = playing_session(&mut rng);
        let head = session.snake().unwrap().head();
        session.place_food(Position::new(head.x + 1, head.y));

        let events = session.frame(BASE_TICK_INTERVAL_MS, &mut rng);
        assert_eq!(events, vec![GameEvent::Ate]);
        assert_eq!(session.score(), POINTS_PER_FOOD);
        // Growth is consumed by the next movement step.
        assert_eq!(session.snake().unwrap().len(), 3);

        session.frame(2 * BASE_TICK_INTERVAL_MS, &mut rng);
        assert_eq!(session.snake().unwrap().len(), 4);
    }

    #[test]
    fn test_filling_the_board_wins() {
        let mut rng = rng();
        let mut session = playing_session(&mut rng);

        // 2x2 board: three segments plus a pending growth, food on the only
        // free cell. The next step grows the snake over the whole board.
        let mut snake = Snake::from_parts(
            [
                Position::new(1, 0),
                Position::new(0, 0),
                Position::new(0, 1),
            ],
            Direction::Down,
            2,
        );
        snake.grow();
        session.install_round(snake, Position::new(1, 1));

        // Enough time for two ticks; the winning tick discards the rest.
        let events = session.frame(2 * BASE_TICK_INTERVAL_MS, &mut rng);
        assert_eq!(events, vec![GameEvent::Won { new_record: true }]);
        assert_eq!(session.screen(), Screen::Win);
        assert_eq!(session.score(), POINTS_PER_FOOD);

        let snap = session.snapshot();
        let round = snap.round.expect("final board stays visible");
        assert_eq!(round.body.len(), 4, "only the winning step ran");
        assert!(round.food.is_none(), "no free cell left to respawn into");

        // The win screen runs no further simulation.
        assert!(session.frame(4 * BASE_TICK_INTERVAL_MS, &mut rng).is_empty());
        assert_eq!(session.snapshot().round.unwrap().body.len(), 4);
    }

    #[test]
    fn test_death_ends_round_and_discards_remaining_ticks() {
        let mut rng = rng();
        let mut session = playing_session(&mut rng);

        // Drive the snake into the right wall with one huge (clamped) frame
        // per tick. Head starts at x=10 on a 20-cell grid.
        let mut now = 0;
        let mut died = false;
        for _ in 0..30 {
            now += MAX_FRAME_DELTA_MS;
            let events = session.frame(now, &mut rng);
            if let Some(GameEvent::Died { .. }) = events.first() {
                died = true;
                // The death tick discards the rest of the frame's time.
                assert_eq!(events.len(), 1);
                break;
            }
        }
        assert!(died);
        assert_eq!(session.screen(), Screen::GameOver);
        assert!(session.shake_intensity() > 0.9);
    }

    #[test]
    fn test_pause_freezes_simulation_and_resume_does_not_burst() {
        let mut rng = rng();
        let mut session = playing_session(&mut rng);
        // Bank 100ms of partial tick, then pause.
        session.frame(100, &mut rng);
        let head = session.snake().unwrap().head();

        session.handle_input(InputEvent::PauseToggle, &mut rng);
        assert_eq!(session.screen(), Screen::Paused);
        session.frame(5_000, &mut rng);
        assert_eq!(session.snake().unwrap().head(), head);

        // Resume; the pre-pause partial tick was discarded, so the next tick
        // needs a full interval of fresh time (100ms banked + 100ms here
        // would otherwise already fire one).
        session.handle_input(InputEvent::PauseToggle, &mut rng);
        session.frame(5_050, &mut rng);
        session.frame(5_100, &mut rng);
        assert_eq!(session.snake().unwrap().head(), head);
        session.frame(5_150, &mut rng);
        assert_eq!(session.snake().unwrap().head().x, head.x + 1);
    }

    #[test]
    fn test_focus_loss_auto_pauses_and_auto_resumes() {
        let mut rng = rng();
        let mut session = playing_session(&mut rng);

        session.focus_lost();
        assert_eq!(session.screen(), Screen::Paused);
        session.focus_gained();
        assert_eq!(session.screen(), Screen::Playing);
    }

    #[test]
    fn test_user_pause_survives_focus_gain() {
        let mut rng = rng();
        let mut session = playing_session(&mut rng);

        session.handle_input(InputEvent::PauseToggle, &mut rng);
        session.focus_lost();
        session.focus_gained();
        assert_eq!(
            session.screen(),
            Screen::Paused,
            "a player-requested pause must not auto-resume"
        );
    }

    #[test]
    fn test_direction_input_deferred_to_tick() {
        let mut rng = rng();
        let mut session = playing_session(&mut rng);
        let head = session.snake().unwrap().head();

        session.handle_input(InputEvent::Direction(Direction::Up), &mut rng);
        // No movement until the tick fires.
        assert_eq!(session.snake().unwrap().head(), head);

        session.frame(BASE_TICK_INTERVAL_MS, &mut rng);
        assert_eq!(
            session.snake().unwrap().head(),
            Position::new(head.x, head.y - 1)
        );
    }

    #[test]
    fn test_direction_input_ignored_while_paused() {
        let mut rng = rng();
        let mut session = playing_session(&mut rng);
        session.handle_input(InputEvent::PauseToggle, &mut rng);
        session.handle_input(InputEvent::Direction(Direction::Up), &mut rng);
        session.handle_input(InputEvent::PauseToggle, &mut rng);

        session.frame(BASE_TICK_INTERVAL_MS, &mut rng);
        // Still moving right: the paused direction press was dropped.
        assert_eq!(session.snake().unwrap().direction(), Direction::Right);
    }

    #[test]
    fn test_mute_toggle_reports_change() {
        let mut rng = rng();
        let mut session = Session::new(0, false);
        let event = session.handle_input(InputEvent::MuteToggle, &mut rng);
        assert_eq!(event, Some(GameEvent::MutedChanged { muted: true }));
        assert!(session.is_muted());
    }

    #[test]
    fn test_snapshot_before_first_game_has_no_round() {
        let session = Session::new(42, false);
        let snap = session.snapshot();
        assert_eq!(snap.screen, Screen::Menu);
        assert!(snap.round.is_none());
        assert_eq!(snap.high_score, 42);
    }

    #[test]
    fn test_game_over_confirm_returns_to_menu_and_drops_round() {
        let mut rng = rng();
        let mut session = playing_session(&mut rng);
        let mut now = 0;
        while session.screen() == Screen::Playing {
            now += MAX_FRAME_DELTA_MS;
            session.frame(now, &mut rng);
        }
        assert_eq!(session.screen(), Screen::GameOver);
        assert!(session.snapshot().round.is_some(), "final board kept");

        session.handle_input(InputEvent::Confirm, &mut rng);
        assert_eq!(session.screen(), Screen::Menu);
        assert!(session.snapshot().round.is_none());
    }

    #[test]
    fn test_pulse_is_periodic_unit_triangle() {
        let mut rng = rng();
        let mut session = Session::new(0, false);
        session.frame(0, &mut rng);
        assert!(session.pulse() < 0.05);
        // Step in sub-clamp increments up to half a period: peak amplitude.
        let mut now = 0;
        while now < PULSE_PERIOD_MS / 2 {
            now += 100;
            session.frame(now, &mut rng);
        }
        assert!(session.pulse() > 0.95);
        // And back down to the start of the next period.
        while now < PULSE_PERIOD_MS {
            now += 100;
            session.frame(now, &mut rng);
        }
        assert!(session.pulse() < 0.05);
    }
}

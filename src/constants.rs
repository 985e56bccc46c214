// Grid and snake
pub const GRID_SIZE: i16 = 20;
pub const INITIAL_SNAKE_LEN: usize = 3;
pub const DIRECTION_QUEUE_CAP: usize = 2;

// Scoring and levels
pub const POINTS_PER_FOOD: u32 = 10;
pub const POINTS_PER_LEVEL: u32 = 50;
pub const MAX_LEVEL: u32 = 10;

// Tick scheduling: the interval shrinks with level but never below the floor
pub const BASE_TICK_INTERVAL_MS: u64 = 150;
pub const TICK_DECREMENT_PER_LEVEL_MS: u64 = 10;
pub const MIN_TICK_INTERVAL_MS: u64 = 60;

// Frame-delta clamp to prevent a burst of catch-up ticks after suspension
pub const MAX_FRAME_DELTA_MS: u64 = 200;

// Continuous animations
pub const SHAKE_DURATION_MS: u64 = 400;
pub const PULSE_PERIOD_MS: u64 = 800;

// Persistence
pub const PROFILE_FILENAME: &str = "profile.json";

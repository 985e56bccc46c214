//! Snake entity: body sequence, direction queue, movement, growth, collision.

use crate::constants::{DIRECTION_QUEUE_CAP, INITIAL_SNAKE_LEN};
use crate::geometry::{Direction, Position};
use std::collections::VecDeque;

/// The player-controlled snake.
///
/// The body is head-first (index 0 is the head), strictly contiguous, and
/// non-self-overlapping while alive. Direction changes are buffered in a
/// bounded FIFO queue and applied one per movement step, never immediately.
#[derive(Debug, Clone)]
pub struct Snake {
    /// Body segments, head at the front.
    body: VecDeque<Position>,
    /// Direction applied by the most recent step.
    direction: Direction,
    /// Pending direction changes, oldest first. Capacity DIRECTION_QUEUE_CAP.
    queue: VecDeque<Direction>,
    /// Consumed by the next `advance()`: keep the tail for a net +1 length.
    pending_growth: bool,
    grid_size: i16,
}

impl Snake {
    /// Create a snake centered on the grid, INITIAL_SNAKE_LEN segments long,
    /// facing right with the body extending left of the head.
    pub fn new(grid_size: i16) -> Self {
        let center = Position::new(grid_size / 2, grid_size / 2);
        let body: VecDeque<Position> = (0..INITIAL_SNAKE_LEN as i16)
            .map(|i| Position::new(center.x - i, center.y))
            .collect();

        Self {
            body,
            direction: Direction::Right,
            queue: VecDeque::new(),
            pending_growth: false,
            grid_size,
        }
    }

    /// Buffer a direction change for an upcoming step.
    ///
    /// Silently ignored when: the queue is full; `dir` reverses the effective
    /// direction; or `dir` duplicates the effective direction. The effective
    /// direction is the last queued direction if any, else the active one —
    /// validating against the active direction alone would let two rapid
    /// inputs queue a reversal and fold the snake into itself a tick later.
    pub fn enqueue_direction(&mut self, dir: Direction) {
        if self.queue.len() >= DIRECTION_QUEUE_CAP {
            return;
        }
        let effective = self.queue.back().copied().unwrap_or(self.direction);
        if dir == effective || dir == effective.opposite() {
            return;
        }
        self.queue.push_back(dir);
    }

    /// Advance one step: apply the oldest queued direction (if any), prepend
    /// the new head, and drop the tail unless growth is pending. Returns the
    /// new head position.
    pub fn advance(&mut self) -> Position {
        if let Some(dir) = self.queue.pop_front() {
            self.direction = dir;
        }

        let new_head = self.head().step(self.direction);
        self.body.push_front(new_head);

        if self.pending_growth {
            self.pending_growth = false;
        } else {
            self.body.pop_back();
        }

        new_head
    }

    /// Mark the snake to keep its tail on the next step. Idempotent per step:
    /// calling twice before an `advance()` still grows by exactly one.
    pub fn grow(&mut self) {
        self.pending_growth = true;
    }

    /// Head outside the grid on either axis. Meaningful after `advance()`.
    pub fn is_out_of_bounds(&self) -> bool {
        !self.head().in_bounds(self.grid_size)
    }

    /// Head overlapping any non-head segment. Meaningful after `advance()`.
    pub fn is_self_colliding(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&seg| seg == head)
    }

    /// Wall or self collision, evaluated after `advance()`.
    pub fn is_dead(&self) -> bool {
        self.is_out_of_bounds() || self.is_self_colliding()
    }

    /// True if any body segment (head included) occupies `pos`.
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    pub fn head(&self) -> Position {
        // The body is never empty: construction seeds it and advance()
        // pushes before popping.
        self.body[0]
    }

    /// Read-only view of the body, head first.
    pub fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub(crate) fn grid_size(&self) -> i16 {
        self.grid_size
    }

    /// Direction the next step will take absent further queued input.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[cfg(test)]
    pub(crate) fn queued(&self) -> Vec<Direction> {
        self.queue.iter().copied().collect()
    }

    /// Build a snake with an explicit body for endgame scenarios.
    #[cfg(test)]
    pub(crate) fn from_parts(
        body: impl IntoIterator<Item = Position>,
        direction: Direction,
        grid_size: i16,
    ) -> Self {
        Self {
            body: body.into_iter().collect(),
            direction,
            queue: VecDeque::new(),
            pending_growth: false,
            grid_size,
        }
    }
}

use std::time::Duration;

use super::action::Direction;
use super::speed::INITIAL_SPEED_DELAY_MS;

/// Side length of the square play field. Cells are numbered `1..=GRID_SIZE`.
pub const GRID_SIZE: i32 = 20;

/// Cell the snake starts from after every reset
pub const CENTER: Position = Position { x: 10, y: 10 };

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// True if both coordinates lie in `1..=GRID_SIZE`
    pub fn is_on_grid(&self) -> bool {
        (1..=GRID_SIZE).contains(&self.x) && (1..=GRID_SIZE).contains(&self.y)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0. Never empty.
    pub body: Vec<Position>,
}

impl Snake {
    /// A one-cell snake
    pub fn new(head: Position) -> Self {
        Self { body: vec![head] }
    }

    /// Build a snake from explicit segments, head first.
    ///
    /// Returns `None` for an empty segment list.
    pub fn from_segments(body: Vec<Position>) -> Option<Self> {
        if body.is_empty() {
            None
        } else {
            Some(Self { body })
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    /// Check if any segment, head included, occupies `pos`
    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Push a new head, keeping the tail when `grow` is set
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Never true for a snake built through this API
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Coarse run state of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Initial and post-reset state; no timer, instructions visible
    Idle,
    /// Timer active, ticks advancing the snake
    Running,
    /// Held only while a collision is being resolved; never seen by callers
    Ended,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub direction: Direction,
    pub lifecycle: Lifecycle,
    /// Milliseconds between ticks; shrinks as food is eaten
    pub speed_delay_ms: u32,
    /// Best score of this process; survives resets
    pub high_score: u32,
}

impl GameState {
    /// Fresh idle state with a one-cell snake at the center
    pub fn new(food: Position) -> Self {
        Self::with_snake(Snake::new(CENTER), food)
    }

    /// Idle state around an arbitrary snake, heading right
    pub fn with_snake(snake: Snake, food: Position) -> Self {
        Self {
            snake,
            food,
            direction: Direction::Right,
            lifecycle: Lifecycle::Idle,
            speed_delay_ms: INITIAL_SPEED_DELAY_MS,
            high_score: 0,
        }
    }

    /// Food eaten this run
    pub fn score(&self) -> u32 {
        (self.snake.len() - 1) as u32
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.is_on_grid()
    }

    pub fn is_running(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }

    /// Current speed delay as a timer period
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.speed_delay_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_in_direction(Direction::Down), Position::new(5, 6));
        assert_eq!(pos.moved_in_direction(Direction::Up), Position::new(5, 4));
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new(Position::new(3, 4));
        assert_eq!(state.snake.body, vec![CENTER]);
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.lifecycle, Lifecycle::Idle);
        assert_eq!(state.speed_delay_ms, 200);
        assert_eq!(state.high_score, 0);
        assert_eq!(state.score(), 0);
        assert_eq!(state.tick_interval(), Duration::from_millis(200));
    }

    #[test]
    fn test_snake_advance() {
        let mut snake = Snake::new(Position::new(5, 5));

        snake.advance(Position::new(6, 5), false);
        assert_eq!(snake.body, vec![Position::new(6, 5)]);

        snake.advance(Position::new(7, 5), true);
        assert_eq!(snake.body, vec![Position::new(7, 5), Position::new(6, 5)]);
        assert_eq!(snake.tail(), Position::new(6, 5));
    }

    #[test]
    fn test_empty_segments_rejected() {
        assert!(Snake::from_segments(Vec::new()).is_none());
        assert!(Snake::from_segments(vec![CENTER]).is_some());
    }

    #[test]
    fn test_collision_detection() {
        let snake = Snake::from_segments(vec![
            Position::new(5, 5),
            Position::new(4, 5),
            Position::new(3, 5),
        ])
        .unwrap();
        assert!(!snake.collides_with_body(Position::new(5, 5))); // head
        assert!(snake.collides_with_body(Position::new(4, 5))); // body
        assert!(!snake.collides_with_body(Position::new(10, 10))); // empty
        assert!(snake.contains(Position::new(5, 5)));
    }

    #[test]
    fn test_bounds_checking() {
        let state = GameState::new(Position::new(10, 10));

        assert!(state.is_in_bounds(Position::new(1, 1)));
        assert!(state.is_in_bounds(Position::new(20, 20)));
        assert!(!state.is_in_bounds(Position::new(0, 1)));
        assert!(!state.is_in_bounds(Position::new(21, 1)));
        assert!(!state.is_in_bounds(Position::new(1, 21)));
        assert!(!state.is_in_bounds(Position::new(5, 0)));
    }
}

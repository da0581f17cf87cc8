use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{
    action::Direction,
    config::{FoodPlacement, GameConfig},
    speed::{self, INITIAL_SPEED_DELAY_MS},
    state::{GameState, Lifecycle, Position, Snake, CENTER, GRID_SIZE},
};

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Head left the grid
    Wall,
    /// Head landed on another segment
    SelfCollision,
    /// Both checks fired on the same tick
    Both,
}

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game was not running; nothing changed
    Idle,
    /// The snake advanced one cell
    Moved { ate_food: bool },
    /// A collision ended the run and the state was reset to Idle
    RunEnded {
        cause: CollisionType,
        final_score: u32,
        new_high_score: bool,
    },
}

impl TickOutcome {
    pub fn run_ended(&self) -> bool {
        matches!(self, TickOutcome::RunEnded { .. })
    }
}

/// Advances a [`GameState`] one tick at a time and drives its lifecycle
pub struct SimulationEngine {
    config: GameConfig,
    rng: StdRng,
}

impl SimulationEngine {
    /// Create an engine; seeds from `config.seed` when present
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    /// Create an engine with a fixed food sequence
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Initial state for a new process: centered snake, random food, no high score
    pub fn new_game(&mut self) -> GameState {
        let snake = Snake::new(CENTER);
        let food = self.spawn_food(&snake);
        GameState::with_snake(snake, food)
    }

    /// Idle -> Running. Returns false and leaves the state alone otherwise.
    pub fn start(&mut self, state: &mut GameState) -> bool {
        if state.lifecycle != Lifecycle::Idle {
            return false;
        }
        state.lifecycle = Lifecycle::Running;
        info!(
            "run started (delay {}ms, high score {})",
            state.speed_delay_ms, state.high_score
        );
        true
    }

    /// Overwrite the direction; the next tick reads whatever was written last
    pub fn set_direction(&mut self, state: &mut GameState, direction: Direction) {
        if state.direction.is_opposite(direction) && state.snake.len() > 1 {
            debug!("reversal {:?} -> {:?}", state.direction, direction);
        }
        state.direction = direction;
    }

    /// Execute one step of the game
    pub fn tick(&mut self, state: &mut GameState) -> TickOutcome {
        if !state.is_running() {
            return TickOutcome::Idle;
        }

        let new_head = state.snake.head().moved_in_direction(state.direction);
        let ate_food = new_head == state.food;

        // Growing keeps the tail; otherwise the tail cell is vacated before
        // the self check, so chasing the tail is safe.
        state.snake.advance(new_head, ate_food);

        if ate_food {
            state.food = self.spawn_food(&state.snake);
            state.speed_delay_ms = speed::ramp(state.speed_delay_ms);
            debug!(
                "food eaten at ({}, {}), score {}, delay {}ms",
                new_head.x,
                new_head.y,
                state.score(),
                state.speed_delay_ms
            );
        }

        let hit_wall = !state.is_in_bounds(new_head);
        let hit_self = state.snake.collides_with_body(new_head);
        let cause = match (hit_wall, hit_self) {
            (false, false) => {
                trace!("head at ({}, {})", new_head.x, new_head.y);
                return TickOutcome::Moved { ate_food };
            }
            (true, false) => CollisionType::Wall,
            (false, true) => CollisionType::SelfCollision,
            (true, true) => CollisionType::Both,
        };

        let previous_high = state.high_score;
        let final_score = self.end_run(state);
        info!("run ended by {:?} with score {}", cause, final_score);

        TickOutcome::RunEnded {
            cause,
            final_score,
            new_high_score: state.high_score > previous_high,
        }
    }

    /// Record the high score and reset the state to Idle.
    ///
    /// Returns the score of the run that ended. Safe to call repeatedly.
    pub fn end_run(&mut self, state: &mut GameState) -> u32 {
        state.lifecycle = Lifecycle::Ended;

        let final_score = state.score();
        if final_score > state.high_score {
            state.high_score = final_score;
            info!("new high score {}", final_score);
        }

        state.snake = Snake::new(CENTER);
        state.food = self.spawn_food(&state.snake);
        state.direction = Direction::Right;
        state.speed_delay_ms = INITIAL_SPEED_DELAY_MS;
        state.lifecycle = Lifecycle::Idle;

        final_score
    }

    fn spawn_food(&mut self, snake: &Snake) -> Position {
        let cells = (GRID_SIZE * GRID_SIZE) as usize;
        let avoid = self.config.food_placement == FoodPlacement::AvoidSnake && snake.len() < cells;

        loop {
            let pos = Position::new(
                self.rng.gen_range(1..=GRID_SIZE),
                self.rng.gen_range(1..=GRID_SIZE),
            );

            if !avoid || !snake.contains(pos) {
                return pos;
            }
        }
    }
}

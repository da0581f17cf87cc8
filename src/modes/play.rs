use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use log::{debug, info};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::{interval, interval_at, Instant, Interval, MissedTickBehavior};

use crate::game::{GameConfig, GameState, SimulationEngine, TickOutcome, TickSchedule};
use crate::input::{Gesture, InputHandler, KeyAction, SwipeTracker};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Render at 30 FPS, independent of the tick rate
const RENDER_INTERVAL: Duration = Duration::from_millis(33);

/// Interactive host: owns the terminal, the tick timer and the input sources
pub struct PlayMode {
    engine: SimulationEngine,
    state: GameState,
    schedule: TickSchedule,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    swipe: SwipeTracker,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(config: GameConfig) -> Self {
        let tick_policy = config.tick_policy;
        let mut engine = SimulationEngine::new(config);
        let state = engine.new_game();
        let schedule = TickSchedule::new(tick_policy, &state);

        Self {
            engine,
            state,
            schedule,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            swipe: SwipeTracker::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!("terminal ready, policy {:?}", self.schedule.policy());

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Ticks are ignored by the engine while idle; the timer is re-armed on start
        let mut tick_timer = interval(self.schedule.interval());
        let mut render_timer = interval(RENDER_INTERVAL);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        if let Some(period) = self.handle_event(event) {
                            arm(&mut tick_timer, period);
                        }
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    if let Some(period) = self.update_game() {
                        arm(&mut tick_timer, period);
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        info!(
            "quitting after {} games, high score {}",
            self.metrics.games_played, self.state.high_score
        );
        Ok(())
    }

    /// Returns a new timer period when the event started a run
    fn handle_event(&mut self, event: Event) -> Option<Duration> {
        match event {
            // Only process key press events, not release
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let action = self.input_handler.handle_key_event(key);
                self.apply_key(action)
            }
            Event::Mouse(mouse) => {
                let gesture = self.swipe.handle_mouse_event(mouse)?;
                self.apply_gesture(gesture)
            }
            _ => None,
        }
    }

    fn apply_key(&mut self, action: KeyAction) -> Option<Duration> {
        match action {
            KeyAction::Turn(direction) => {
                self.engine.set_direction(&mut self.state, direction);
                None
            }
            KeyAction::Start => self.begin_run(),
            KeyAction::Quit => {
                self.should_quit = true;
                None
            }
            KeyAction::None => None,
        }
    }

    fn apply_gesture(&mut self, gesture: Gesture) -> Option<Duration> {
        match gesture {
            // First touch starts an idle game
            Gesture::Press => self.begin_run(),
            Gesture::Swipe(direction) => {
                debug!("swipe {:?}", direction);
                self.engine.set_direction(&mut self.state, direction);
                None
            }
            Gesture::Tap => None,
        }
    }

    fn begin_run(&mut self) -> Option<Duration> {
        if !self.engine.start(&mut self.state) {
            return None;
        }
        self.metrics.on_game_start();
        Some(self.schedule.on_start(&self.state))
    }

    /// Advance one tick; returns a new timer period if the schedule changed
    fn update_game(&mut self) -> Option<Duration> {
        match self.engine.tick(&mut self.state) {
            TickOutcome::Idle => None,
            TickOutcome::Moved { .. } => self.schedule.reschedule(&self.state),
            TickOutcome::RunEnded { final_score, .. } => {
                self.metrics.on_game_over(final_score);
                None
            }
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(
            terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        )
        .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

/// Restart the tick timer; the first tick fires one full period from now
fn arm(timer: &mut Interval, period: Duration) {
    *timer = interval_at(Instant::now() + period, period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
}

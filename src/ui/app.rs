//! Main TUI application state and logic

use crate::algorithms::AlgorithmId;
use crate::engine::constants::{MAX_SPEED, MIN_SPEED};
use crate::engine::controller::{RunController, StartOutcome};
use crate::engine::emitter::EngineEvent;
use crate::history::StepHistory;
use crossbeam_channel::Receiver;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// Speed change per arrow key press
const SPEED_STEP: u8 = 5;

/// Longest search value the input field accepts
const MAX_SEARCH_INPUT: usize = 12;

/// The main application state
pub struct App {
    /// Owns the array and the in-flight run
    pub controller: RunController,

    /// Receiving end of the controller's observer
    pub events: Receiver<EngineEvent>,

    /// Recent step records for the log pane
    pub history: StepHistory,

    /// Algorithm the next start will run
    pub algorithm: AlgorithmId,

    /// Raw text of the search value field
    pub search_input: String,

    /// Draw numeric labels under the bars
    pub show_values: bool,

    /// Log pane scroll offset (`usize::MAX` follows the newest step)
    pub log_scroll: usize,

    /// Jump the log to the newest step whenever one arrives
    pub follow_log: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// One-off note shown instead of the board message until the next step
    pub notice: Option<String>,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(
        controller: RunController,
        events: Receiver<EngineEvent>,
        algorithm: AlgorithmId,
        search_input: String,
    ) -> Self {
        App {
            controller,
            events,
            history: StepHistory::default(),
            algorithm,
            search_input,
            show_values: false,
            log_scroll: usize::MAX,
            follow_log: true,
            should_quit: false,
            notice: None,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.drain_events();
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Short poll keeps the bars moving while a run emits steps
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        // Quitting mid-run must not leave a worker sleeping behind the terminal
        self.controller.stop();
        self.controller.wait();
        Ok(())
    }

    /// Move every pending engine event into the step history
    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                EngineEvent::Step { record, .. } => {
                    self.history.push(record);
                    self.notice = None;
                    if self.follow_log {
                        self.log_scroll = usize::MAX;
                    }
                }
                EngineEvent::Finished(state) => {
                    debug!(state = %state, "run finished event received");
                }
            }
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();
        let view = self.controller.board().snapshot();
        let state = self.controller.state();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
            .split(main_chunks[0]);

        // Right column: Info (top) | Steps (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(16), Constraint::Min(0)])
            .split(columns[1]);

        super::panes::render_bars_pane(
            frame,
            columns[0],
            &view,
            self.controller.config().max_value,
            self.show_values,
        );

        super::panes::render_info_pane(
            frame,
            right_rows[0],
            super::panes::InfoRenderData {
                algorithm: self.algorithm,
                speed: self.controller.speed(),
                search_input: &self.search_input,
                is_running: state.is_running(),
            },
        );

        super::panes::render_log_pane(
            frame,
            right_rows[1],
            &self.history,
            !self.follow_log,
            &mut self.log_scroll,
        );

        let message = self.notice.as_deref().unwrap_or(&view.message);
        super::panes::render_status_bar(frame, main_chunks[1], message, &state);
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        let running = self.controller.is_running();

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                // 200ms debounce keeps key repeat from starting and stopping in a loop
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_run();
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.controller.reset();
                self.discard_events();
                self.notice = Some("New array generated".to_string());
            }
            KeyCode::Char('v') | KeyCode::Char('V') => {
                self.show_values = !self.show_values;
            }
            KeyCode::Tab | KeyCode::BackTab if running => {
                self.notice = Some("Stop the current run before switching algorithms".to_string());
            }
            KeyCode::Tab => self.select_algorithm(self.algorithm.next()),
            KeyCode::BackTab => self.select_algorithm(self.algorithm.prev()),
            KeyCode::Left => self.adjust_speed(-(SPEED_STEP as i16)),
            KeyCode::Right => self.adjust_speed(SPEED_STEP as i16),
            KeyCode::Up => {
                self.follow_log = false;
                if self.log_scroll > 0 {
                    self.log_scroll = self.log_scroll.saturating_sub(1);
                }
            }
            KeyCode::Down => {
                self.log_scroll = self.log_scroll.saturating_add(1);
            }
            KeyCode::End => {
                self.follow_log = true;
                self.log_scroll = usize::MAX;
            }
            KeyCode::Char(c @ ('0'..='9' | '-')) if !running && self.algorithm.is_search() => {
                if self.search_input.len() < MAX_SEARCH_INPUT {
                    self.search_input.push(c);
                }
            }
            KeyCode::Backspace if !running && self.algorithm.is_search() => {
                self.search_input.pop();
            }
            _ => {}
        }
    }

    fn toggle_run(&mut self) {
        if !self.controller.is_running() {
            // Keep the previous run's tail out of the new run's log
            self.drain_events();
            self.history.clear();
            self.follow_log = true;
            self.log_scroll = usize::MAX;
        }

        let search = self
            .algorithm
            .is_search()
            .then_some(self.search_input.as_str());

        match self.controller.start(self.algorithm, search) {
            Ok(StartOutcome::Started) => self.notice = None,
            Ok(StartOutcome::StopRequested) => {
                self.notice = Some("Stopping...".to_string());
            }
            // The controller already put the reason on the board
            Err(_) => self.notice = None,
        }
    }

    fn select_algorithm(&mut self, algorithm: AlgorithmId) {
        self.algorithm = algorithm;
        self.controller.acknowledge();
        self.notice = Some(format!("Selected {}", algorithm.name()));
    }

    fn adjust_speed(&mut self, delta: i16) {
        let speed = (self.controller.speed() as i16 + delta)
            .clamp(MIN_SPEED as i16, MAX_SPEED as i16) as u8;
        self.controller.set_speed(speed);
    }

    /// Drop queued events from a run that a reset has already discarded
    fn discard_events(&mut self) {
        while self.events.try_recv().is_ok() {}
        self.history.clear();
        self.log_scroll = usize::MAX;
    }
}

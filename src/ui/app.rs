//! Main TUI application state and logic

use crate::algorithms::Category;
use crate::playback::{Phase, Player};
use crate::ui::panes::{BarsRenderData, HeapScrollState, StackScrollState};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Bars,
    Log,
    Stack,
    Heap,
}

impl FocusedPane {
    /// Move focus to the next pane. The stack and heap panes only exist for
    /// memory-map runs, so they are skipped otherwise.
    pub fn next(self, has_memory_panes: bool) -> Self {
        match self {
            FocusedPane::Bars => FocusedPane::Log,
            FocusedPane::Log if has_memory_panes => FocusedPane::Stack,
            FocusedPane::Log => FocusedPane::Bars,
            FocusedPane::Stack => FocusedPane::Heap,
            FocusedPane::Heap => FocusedPane::Bars,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self, has_memory_panes: bool) -> Self {
        match self {
            FocusedPane::Bars if has_memory_panes => FocusedPane::Heap,
            FocusedPane::Bars => FocusedPane::Log,
            FocusedPane::Log => FocusedPane::Bars,
            FocusedPane::Stack => FocusedPane::Log,
            FocusedPane::Heap => FocusedPane::Stack,
        }
    }
}

/// The main application state
pub struct App {
    /// The playback controller driving the recorded run
    pub player: Player,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Scroll offset for the operation log; `usize::MAX` asks the log pane
    /// to snap to the newest entry on the next render
    pub log_scroll: usize,

    /// Scroll state for the stack and heap panes
    pub stack_scroll: StackScrollState,
    pub heap_scroll: HeapScrollState,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app around a player
    pub fn new(player: Player) -> Self {
        App {
            player,
            focused_pane: FocusedPane::Bars,
            log_scroll: usize::MAX,
            stack_scroll: StackScrollState::default(),
            heap_scroll: HeapScrollState::default(),
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Advance auto-play if the pending deadline has come due
            if self.player.tick(Instant::now()) {
                self.log_scroll = usize::MAX;
                self.status_message = if self.player.phase() == Phase::Playing {
                    "Playing...".to_string()
                } else {
                    "Playback complete".to_string()
                };
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, one-line status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let bars_data = BarsRenderData {
            snapshot: self.player.snapshot(),
            fallback: &self.player.dataset().values,
            target: self.player.dataset().target,
        };
        let memory = self.player.snapshot().and_then(|s| s.memory.as_ref());

        if self.player.category() == Category::MemoryMap {
            // Left column: bars over the log; right column: stack over heap
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(pane_area);

            let left_rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(columns[0]);

            let right_rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(columns[1]);

            super::panes::render_bars_pane(
                frame,
                left_rows[0],
                bars_data,
                self.focused_pane == FocusedPane::Bars,
            );
            super::panes::render_log_pane(
                frame,
                left_rows[1],
                self.player.steps(),
                self.player.cursor(),
                self.focused_pane == FocusedPane::Log,
                &mut self.log_scroll,
            );
            super::panes::render_stack_pane(
                frame,
                right_rows[0],
                memory,
                self.focused_pane == FocusedPane::Stack,
                &mut self.stack_scroll,
            );
            super::panes::render_heap_pane(
                frame,
                right_rows[1],
                memory,
                self.focused_pane == FocusedPane::Heap,
                &mut self.heap_scroll,
            );
        } else {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
                .split(pane_area);

            super::panes::render_bars_pane(
                frame,
                rows[0],
                bars_data,
                self.focused_pane == FocusedPane::Bars,
            );
            super::panes::render_log_pane(
                frame,
                rows[1],
                self.player.steps(),
                self.player.cursor(),
                self.focused_pane == FocusedPane::Log,
                &mut self.log_scroll,
            );
        }

        super::panes::render_status_bar(frame, status_area, &self.player, &self.status_message);
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        let has_memory_panes = self.player.category() == Category::MemoryMap;
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.player.pause();
                if self.player.is_empty() {
                    self.player.generate();
                }
                let n = c.to_digit(10).unwrap() as usize;
                let before = self.player.cursor();
                for _ in 0..n {
                    self.player.step_forward();
                }
                let stepped = self.player.cursor() - before;
                self.status_message = format!("Stepped forward {} step(s)", stepped);
                self.log_scroll = usize::MAX;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next(has_memory_panes);
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev(has_memory_panes);
            }
            KeyCode::Left => {
                self.step_backward();
            }
            KeyCode::Right => {
                self.step_forward();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Bars => {}
                FocusedPane::Log => {
                    self.log_scroll = self.log_scroll.saturating_sub(1);
                }
                FocusedPane::Stack => {
                    self.stack_scroll.offset = self.stack_scroll.offset.saturating_sub(1);
                }
                FocusedPane::Heap => {
                    self.heap_scroll.offset = self.heap_scroll.offset.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Bars => {}
                FocusedPane::Log => {
                    self.log_scroll = self.log_scroll.saturating_add(1);
                }
                FocusedPane::Stack => {
                    self.stack_scroll.offset = self.stack_scroll.offset.saturating_add(1);
                }
                FocusedPane::Heap => {
                    self.heap_scroll.offset = self.heap_scroll.offset.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    if self.player.is_playing() {
                        self.player.pause();
                        self.status_message = "Paused".to_string();
                    } else {
                        self.player.play(Instant::now());
                        self.status_message = "Playing...".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                // Jump to the last step
                if self.player.is_empty() {
                    self.player.generate();
                }
                self.player.jump_to_end();
                self.status_message = "Jumped to end".to_string();
                self.log_scroll = usize::MAX;
            }
            KeyCode::Backspace => {
                // Jump to the first step
                self.player.jump_to_start();
                self.status_message = "Jumped to start".to_string();
                self.log_scroll = 0;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.player.reset();
                self.status_message = format!(
                    "Regenerated {} values; press space to run",
                    self.player.dataset().values.len()
                );
                self.log_scroll = 0;
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                let speed = self.player.speed().saturating_sub(5);
                self.player.set_speed(speed);
                self.status_message = format!("Speed {}", self.player.speed());
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let speed = self.player.speed().saturating_add(5);
                self.player.set_speed(speed);
                self.status_message = format!("Speed {}", self.player.speed());
            }
            KeyCode::Char('[') => {
                let size = self.player.size().saturating_sub(5);
                self.player.set_size(size);
                self.status_message = format!("Size {}; array regenerated", self.player.size());
                self.log_scroll = 0;
            }
            KeyCode::Char(']') => {
                let size = self.player.size().saturating_add(5);
                self.player.set_size(size);
                self.status_message = format!("Size {}; array regenerated", self.player.size());
                self.log_scroll = 0;
            }
            _ => {}
        }
    }

    /// Step forward one snapshot, pausing auto-play
    fn step_forward(&mut self) {
        self.player.pause();
        if self.player.is_empty() {
            self.player.generate();
        }
        let before = self.player.cursor();
        self.player.step_forward();
        if self.player.cursor() == before {
            self.status_message = "Already at the last step".to_string();
        } else {
            self.status_message = "Stepped forward".to_string();
            self.log_scroll = usize::MAX;
        }
    }

    /// Step backward one snapshot, pausing auto-play
    fn step_backward(&mut self) {
        let before = self.player.cursor();
        self.player.step_back();
        if self.player.cursor() == before {
            self.status_message = "Already at the first step".to_string();
        } else {
            self.status_message = "Stepped backward".to_string();
            self.log_scroll = usize::MAX;
        }
    }
}

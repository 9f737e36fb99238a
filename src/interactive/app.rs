//! TUI application state and logic

use super::rendering::{basket_at, board_layout, chip_at};
use crate::config::GameConfig;
use crate::core::Category;
use crate::feedback::{self, Feedback};
use crate::game::Game;
use crate::interaction::{DropTarget, InputMode};
use crate::round::{PlacementOutcome, RoundPhase};
use crate::wordlists::Dataset;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::{Duration, Instant};

/// How long to wait for input when no round clock is running
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Messages kept in the log
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub game: Game,
    pub word_count: usize,
    pub feedback: Box<dyn Feedback>,
    pub messages: Vec<Message>,
    /// Highlighted pending word for keyboard play
    pub cursor: usize,
    /// Last pointer position while dragging
    pub pointer: Option<(u16, u16)>,
    pub stats: Statistics,
    pub should_quit: bool,
    /// Terminal area of the last frame, used for hit-testing the mouse
    pub area: Rect,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Totals for this session only
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_finished: usize,
    pub total_correct: u64,
    pub total_incorrect: u64,
    pub best_seconds: Option<u64>,
}

impl App {
    #[must_use]
    pub fn new(game: Game, word_count: usize, feedback: Box<dyn Feedback>) -> Self {
        let hint = match game.input_mode() {
            InputMode::Drag => "Drag each word with the mouse and drop it in its basket.",
            InputMode::Tap => {
                "Pick a word with ←/→ and Space, a basket with 1/2/3, then Enter."
            }
        };

        Self {
            game,
            word_count,
            feedback,
            messages: vec![
                Message {
                    text: "Welcome! Sort the words into Who?, What? and Where?".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: hint.to_string(),
                    style: MessageStyle::Info,
                },
            ],
            cursor: 0,
            pointer: None,
            stats: Statistics::default(),
            should_quit: false,
            area: Rect::default(),
        }
    }

    pub fn start_round(&mut self, now: Instant) {
        if self.game.start(self.word_count, now) {
            self.cursor = 0;
            self.pointer = None;
            let words = self.game.snapshot().pending.len();
            self.add_message(&format!("New round: {words} words to sort."), MessageStyle::Info);
        }
    }

    pub fn restart(&mut self) {
        self.game.restart();
        self.cursor = 0;
        self.pointer = None;
        self.add_message("Restarted. Press 's' to play again.", MessageStyle::Info);
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match (self.game.snapshot().phase, key.code) {
            (_, KeyCode::Char('q')) => self.should_quit = true,
            (RoundPhase::NotStarted | RoundPhase::Finished, KeyCode::Char('s')) => {
                self.start_round(now);
            }
            (_, KeyCode::Char('r')) => self.restart(),
            (RoundPhase::Active, code) if self.game.input_mode() == InputMode::Tap => {
                self.handle_tap_key(code, now);
            }
            _ => {}
        }
    }

    fn handle_tap_key(&mut self, code: KeyCode, now: Instant) {
        let pending = self.game.snapshot().pending.len();
        match code {
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h' | 'k') => {
                self.cursor = self.cursor.checked_sub(1).unwrap_or(pending.saturating_sub(1));
            }
            KeyCode::Right | KeyCode::Down | KeyCode::Tab | KeyCode::Char('l' | 'j') => {
                self.cursor = if self.cursor + 1 >= pending { 0 } else { self.cursor + 1 };
            }
            KeyCode::Char(' ') => self.select_highlighted(),
            KeyCode::Enter => {
                if self.game.snapshot().selection.can_confirm() {
                    let outcome = self.game.confirm_selection(now);
                    self.after_placement(outcome);
                } else {
                    self.select_highlighted();
                }
            }
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                if self.game.snapshot().selection.word().is_none() {
                    self.add_message("Pick a word first.", MessageStyle::Error);
                } else {
                    self.game.select_category(Category::ALL[index]);
                }
            }
            KeyCode::Esc => self.game.cancel_selection(),
            _ => {}
        }
    }

    fn select_highlighted(&mut self) {
        let word = self
            .game
            .snapshot()
            .pending
            .get(self.cursor)
            .map(|w| w.text().to_string());
        if let Some(word) = word {
            self.game.select_word(&word);
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        let phase = self.game.snapshot().phase;
        let (column, row) = (mouse.column, mouse.row);

        if phase != RoundPhase::Active {
            // The start screen and the finish dialog act as buttons
            if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                match phase {
                    RoundPhase::NotStarted => self.start_round(now),
                    RoundPhase::Finished => self.restart(),
                    RoundPhase::Active => {}
                }
            }
            return;
        }

        let layout = board_layout(self.area);
        match (self.game.input_mode(), mouse.kind) {
            (InputMode::Drag, MouseEventKind::Down(MouseButton::Left)) => {
                let pending = self.game.snapshot().pending;
                if let Some(index) = chip_at(layout.words, pending, column, row) {
                    let word = pending[index].text().to_string();
                    self.game.drag_start(&word);
                    self.pointer = Some((column, row));
                }
            }
            (InputMode::Drag, MouseEventKind::Drag(MouseButton::Left)) => {
                if self.game.snapshot().dragging.is_some() {
                    self.pointer = Some((column, row));
                }
            }
            (InputMode::Drag, MouseEventKind::Up(MouseButton::Left)) => {
                self.pointer = None;
                let target = basket_at(&layout, column, row)
                    .map_or(DropTarget::Elsewhere, DropTarget::Basket);
                let outcome = self.game.drop_on(target, now);
                self.after_placement(outcome);
            }
            (InputMode::Tap, MouseEventKind::Down(MouseButton::Left)) => {
                let pending = self.game.snapshot().pending;
                if let Some(index) = chip_at(layout.words, pending, column, row) {
                    let word = pending[index].text().to_string();
                    self.cursor = index;
                    self.game.select_word(&word);
                } else if let Some(category) = basket_at(&layout, column, row) {
                    self.game.select_category(category);
                }
            }
            _ => {}
        }
    }

    fn after_placement(&mut self, outcome: Option<PlacementOutcome>) {
        let Some(outcome) = outcome else {
            return;
        };
        self.feedback.play(outcome);

        match outcome {
            PlacementOutcome::Correct => self.add_message("✅ Correct!", MessageStyle::Success),
            PlacementOutcome::Incorrect => {
                self.add_message("❌ Not that basket, try again.", MessageStyle::Error);
            }
        }

        let view = self.game.snapshot();
        let pending = view.pending.len();
        if self.cursor >= pending {
            self.cursor = pending.saturating_sub(1);
        }

        if view.phase == RoundPhase::Finished {
            let (score, seconds) = (view.score, view.elapsed_seconds);
            self.stats.rounds_finished += 1;
            self.stats.total_correct += u64::from(score.correct);
            self.stats.total_incorrect += u64::from(score.incorrect);
            self.stats.best_seconds =
                Some(self.stats.best_seconds.map_or(seconds, |b| b.min(seconds)));
            self.add_message(
                &format!("🎉 All sorted in {seconds}s with {} mistakes!", score.incorrect),
                MessageStyle::Success,
            );
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// Mouse capture doubles as drag capability detection: if the terminal refuses it, the
/// game falls back to the tap protocol (unless overridden in `config`).
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(dataset: Dataset, config: &GameConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let supports_drag = execute!(stdout, EnableMouseCapture).is_ok();
    tracing::debug!(supports_drag, "terminal capabilities");

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let game = Game::from_config(dataset, config, supports_drag);
    let app = App::new(game, config.word_count, feedback::for_sound(config.sound));

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    if supports_drag {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        let mut area = app.area;
        terminal.draw(|f| {
            area = f.area();
            super::rendering::ui(f, &app);
        })?;
        app.area = area;

        let timeout = app.game.next_tick_in(Instant::now()).unwrap_or(IDLE_POLL);
        if event::poll(timeout)? {
            match event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key, Instant::now());
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse, Instant::now()),
                _ => {}
            }
        }

        app.game.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

//! TUI rendering with ratatui
//!
//! Layout helpers are shared with the mouse handling so that what is drawn is exactly
//! what can be clicked.

use super::app::{App, MessageStyle};
use crate::core::{Category, WordEntry};
use crate::interaction::InputMode;
use crate::output::formatters::{format_elapsed, sorted_percent};
use crate::round::RoundPhase;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Screen regions of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub header: Rect,
    pub scoreboard: Rect,
    /// Indexed like [`Category::ALL`]
    pub baskets: [Rect; 3],
    pub words: Rect,
    pub messages: Rect,
    pub status: Rect,
}

/// Split the terminal area into board regions
#[must_use]
pub fn board_layout(area: Rect) -> BoardLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Scoreboard
            Constraint::Min(8),    // Baskets
            Constraint::Length(6), // Word chips
            Constraint::Length(5), // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    let baskets = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(chunks[2]);

    BoardLayout {
        header: chunks[0],
        scoreboard: chunks[1],
        baskets: [baskets[0], baskets[1], baskets[2]],
        words: chunks[3],
        messages: chunks[4],
        status: chunks[5],
    }
}

fn chip_label(word: &WordEntry) -> String {
    format!("[ {} ]", word.text())
}

/// Positions of the word chips inside the words panel, in `pending` order
///
/// Chips flow left to right and wrap onto the next row. Chips that do not fit in the
/// panel are left out.
#[must_use]
pub fn chip_rects(words_area: Rect, pending: &[WordEntry]) -> Vec<Rect> {
    let inner = Block::bordered().inner(words_area);
    let mut rects = Vec::with_capacity(pending.len());
    let (mut x, mut y) = (inner.x, inner.y);

    for word in pending {
        let width = u16::try_from(chip_label(word).chars().count())
            .unwrap_or(u16::MAX)
            .min(inner.width);
        if x > inner.x && x.saturating_add(width) > inner.right() {
            x = inner.x;
            y += 1;
        }
        if y >= inner.bottom() || width == 0 {
            break;
        }
        rects.push(Rect::new(x, y, width, 1));
        x = x.saturating_add(width + 1);
    }

    rects
}

/// Index into `pending` of the chip under the pointer
#[must_use]
pub fn chip_at(words_area: Rect, pending: &[WordEntry], column: u16, row: u16) -> Option<usize> {
    chip_rects(words_area, pending)
        .iter()
        .position(|r| r.contains(Position::new(column, row)))
}

/// Basket under the pointer
#[must_use]
pub fn basket_at(layout: &BoardLayout, column: u16, row: u16) -> Option<Category> {
    layout
        .baskets
        .iter()
        .position(|r| r.contains(Position::new(column, row)))
        .map(|i| Category::ALL[i])
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let view = app.game.snapshot();
    if view.phase == RoundPhase::NotStarted {
        render_start_screen(f, app, f.area());
        return;
    }

    let layout = board_layout(f.area());
    render_header(f, layout.header);
    render_scoreboard(f, app, layout.scoreboard);

    let hovered = match (view.dragging, app.pointer) {
        (Some(_), Some((column, row))) => basket_at(&layout, column, row),
        _ => None,
    };
    for category in Category::ALL {
        render_basket(f, app, category, hovered, layout.baskets[category.index()]);
    }

    render_words(f, app, layout.words);
    render_messages(f, app, layout.messages);
    render_status(f, app, layout.status);

    if let (Some(word), Some(pointer)) = (view.dragging, app.pointer) {
        render_drag_ghost(f, word, pointer);
    }

    if view.phase == RoundPhase::Finished {
        render_finish_dialog(f, app);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🧺 WORD BASKETS - Who? What? Where?")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_start_screen(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(8)])
        .split(area);
    render_header(f, chunks[0]);

    let mode_line = match app.game.input_mode() {
        InputMode::Drag => "Drag each word into its basket with the mouse.",
        InputMode::Tap => "Pick a word, pick a basket, then confirm.",
    };

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Place the words in the right baskets!",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("Learn which question a word answers: Who? What? or Where?"),
        Line::from(""),
        Line::from(mode_line),
        Line::from(""),
        Line::from(Span::styled(
            "Press 's' or click to start  |  'q' to quit",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    if app.stats.rounds_finished > 0 {
        content.push(Line::from(""));
        content.push(Line::from(Span::styled(
            format!(
                "Rounds: {} | Best time: {}",
                app.stats.rounds_finished,
                app.stats.best_seconds.map_or_else(|| "-".to_string(), format_elapsed)
            ),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let intro = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(intro, chunks[1]);
}

fn render_scoreboard(f: &mut Frame, app: &App, area: Rect) {
    let view = app.game.snapshot();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let score = Paragraph::new(Line::from(vec![
        Span::raw("✅ "),
        Span::styled(
            view.score.correct.to_string(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   ❌ "),
        Span::styled(
            view.score.incorrect.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   ⏱  "),
        Span::styled(
            format_elapsed(view.elapsed_seconds),
            Style::default().fg(Color::Yellow),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().title(" Score ").borders(Borders::ALL));
    f.render_widget(score, chunks[0]);

    let total = app.game.round().word_count();
    let sorted = view.baskets.total();
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Sorted ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(sorted_percent(sorted, total))
        .label(format!("{sorted}/{total} words"));
    f.render_widget(gauge, chunks[1]);
}

fn render_basket(
    f: &mut Frame,
    app: &App,
    category: Category,
    hovered: Option<Category>,
    area: Rect,
) {
    let view = app.game.snapshot();
    let selected = view.selection.category() == Some(category);

    let border = if hovered == Some(category) || selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Blue)
    };

    let title = match view.input_mode {
        InputMode::Tap => format!(" {} 🧺 {} ", category.index() + 1, category.label()),
        InputMode::Drag => format!(" 🧺 {} ", category.label()),
    };

    let items: Vec<ListItem> = view
        .baskets
        .get(category)
        .iter()
        .map(|word| ListItem::new(format!("✓ {word}")).style(Style::default().fg(Color::Green)))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border),
    );
    f.render_widget(list, area);
}

fn render_words(f: &mut Frame, app: &App, area: Rect) {
    let view = app.game.snapshot();
    let block = Block::default()
        .title(format!(" Words ({}) ", view.pending.len()))
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::White));
    f.render_widget(block, area);

    let selected = view.selection.word().map(WordEntry::text);
    for (index, (word, rect)) in view
        .pending
        .iter()
        .zip(chip_rects(area, view.pending))
        .enumerate()
    {
        let style = if Some(word.text()) == selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else if view.dragging == Some(word.text()) {
            Style::default().fg(Color::DarkGray)
        } else if view.input_mode == InputMode::Tap && index == app.cursor {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::White)
        };
        f.render_widget(Paragraph::new(chip_label(word)).style(style), rect);
    }
}

fn render_drag_ghost(f: &mut Frame, word: &str, (column, row): (u16, u16)) {
    let area = f.area();
    let label = format!("[ {word} ]");
    let width = u16::try_from(label.chars().count())
        .unwrap_or(u16::MAX)
        .min(area.width);
    let x = column.min(area.right().saturating_sub(width));
    let y = row.min(area.bottom().saturating_sub(1));
    let ghost = Rect::new(x, y, width, 1);

    f.render_widget(Clear, ghost);
    f.render_widget(
        Paragraph::new(label).style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        ghost,
    );
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(3)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let view = app.game.snapshot();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
        .split(area);

    let mode = Paragraph::new(format!("Input: {}", view.input_mode.as_str()))
        .alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let help_text = match (view.phase, view.input_mode) {
        (RoundPhase::Finished, _) => "r: Play Again | q: Quit",
        (_, InputMode::Drag) => "Drag a word onto a basket | r: Restart | q: Quit",
        (_, InputMode::Tap) => {
            "←/→: Move | Space: Pick | 1-3: Basket | Enter: Confirm | Esc: Cancel | r | q"
        }
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

/// Centered rectangle of the given size, clamped to `area`
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn render_finish_dialog(f: &mut Frame, app: &App) {
    let view = app.game.snapshot();
    let area = centered_rect(46, 9, f.area());

    let content = vec![
        Line::from(Span::styled(
            "Every word is in its basket!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("✅ Correct:   {}", view.score.correct)),
        Line::from(format!("❌ Incorrect: {}", view.score.incorrect)),
        Line::from(format!("⏱  Time:      {}", format_elapsed(view.elapsed_seconds))),
        Line::from(""),
        Line::from(Span::styled(
            "Press 'r' or click to play again",
            Style::default().fg(Color::Yellow),
        )),
    ];

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(content).alignment(Alignment::Center).block(
            Block::default()
                .title(" 🎉 Round Complete ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Green)),
        ),
        area,
    );
}

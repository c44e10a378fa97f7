//! TUI (Terminal User Interface) front end for Advanced Wordle
//!
//! Renders the session with Ratatui and collects input lines from key events.
//!
//! # Layout
//! - Title
//! - Board: one row per guess this round, letters coloured by mark
//! - Information: recent session messages and the last validation error
//! - Status: what the session is waiting for
//! - Instructions for the current prompt

use crate::cli::DIFFICULTY_MENU;
use crate::evaluator::Mark;
use crate::game_state::{ABORT_KEYWORD, GameInterface, Prompt, SessionEvent};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const MAX_INPUT_LENGTH: usize = 16;
const MAX_MESSAGES: usize = 8;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ROW_SPACING: u16 = 2;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

fn mark_colors(mark: Mark) -> (Color, Color) {
    match mark {
        Mark::Exact => (Color::Green, Color::Black),
        Mark::Present => (Color::Yellow, Color::Black),
        Mark::Absent => (Color::Gray, Color::White),
    }
}

/// Edits the line being typed. Returns the finished line on ENTER, and the
/// abort keyword on ESC or Ctrl-C.
fn apply_key(input: &mut String, key: KeyEvent) -> Option<String> {
    let has_ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let has_alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Esc => {
            info_log!("apply_key() - ESC pressed, sending abort keyword");
            Some(ABORT_KEYWORD.to_string())
        }
        KeyCode::Char('c') if has_ctrl => Some(ABORT_KEYWORD.to_string()),
        KeyCode::Char(_) if has_ctrl || has_alt => None,
        KeyCode::Char(c) if !c.is_control() && input.chars().count() < MAX_INPUT_LENGTH => {
            input.extend(c.to_uppercase());
            None
        }
        KeyCode::Backspace => {
            input.pop();
            None
        }
        KeyCode::Enter => Some(std::mem::take(input)),
        _ => None,
    }
}

#[derive(Debug)]
struct GuessRow {
    letters: Vec<char>,
    marks: Vec<Mark>,
}

/// Groups what the renderer needs so the draw closure borrows nothing mutable.
struct RenderContext<'a> {
    rows: &'a [GuessRow],
    word_length: usize,
    current_input: &'a str,
    prompt: Option<&'a Prompt>,
    messages: &'a [(String, Style)],
    error_message: &'a str,
    status: &'a str,
}

pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    rows: Vec<GuessRow>,
    word_length: usize,
    current_input: String,
    prompt: Option<Prompt>,
    messages: Vec<(String, Style)>,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            rows: Vec::new(),
            word_length: 0,
            current_input: String::new(),
            prompt: None,
            messages: Vec::new(),
            error_message: String::new(),
            status: "Ready".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            rows: &self.rows,
            word_length: self.word_length,
            current_input: &self.current_input,
            prompt: self.prompt.as_ref(),
            messages: &self.messages,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn push_message(&mut self, text: String, style: Style) {
        self.messages.push((text, style));
        if self.messages.len() > MAX_MESSAGES {
            let overflow = self.messages.len() - MAX_MESSAGES;
            self.messages.drain(..overflow);
        }
    }

    fn push_event_lines(&mut self, event: &SessionEvent, style: Style) {
        for line in event.lines() {
            self.push_message(line, style);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Title
                Constraint::Min(8),     // Board
                Constraint::Length(12), // Info panel
                Constraint::Length(3),  // Status line
                Constraint::Length(3),  // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_board(f, chunks[1], ctx);
        Self::render_info(f, chunks[2], ctx.messages, ctx.error_message);
        Self::render_status(f, chunks[3], ctx.status);
        Self::render_instructions(f, chunks[4], ctx.prompt);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("ADVANCED WORDLE")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_board(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let block = Block::default().title("Guesses").borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let available_rows = (inner.height / ROW_SPACING) as usize;
        let showing_input = matches!(ctx.prompt, Some(Prompt::Guess { .. }));
        let rows_needed = ctx.rows.len() + usize::from(showing_input);

        // Most recent guesses win when the board is too short.
        let skip_count = rows_needed.saturating_sub(available_rows);

        for (display_index, row) in ctx.rows.iter().skip(skip_count).enumerate() {
            let spans = row
                .letters
                .iter()
                .zip(&row.marks)
                .map(|(&letter, &mark)| {
                    let (bg, fg) = mark_colors(mark);
                    (letter, Style::default().fg(fg).bg(bg))
                })
                .collect::<Vec<_>>();
            Self::render_cells(f, inner, display_index, &spans);
        }

        if showing_input && available_rows > 0 {
            let display_row = (ctx.rows.len() - skip_count).min(available_rows - 1);
            let cells = ctx.word_length.max(ctx.current_input.chars().count());
            let spans = (0..cells)
                .map(|i| {
                    let letter = ctx.current_input.chars().nth(i).unwrap_or(' ');
                    (letter, Style::default().fg(Color::White).bg(Color::DarkGray))
                })
                .collect::<Vec<_>>();
            Self::render_cells(f, inner, display_row, &spans);
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_cells(f: &mut Frame, area: Rect, row_index: usize, cells: &[(char, Style)]) {
        let y = area.y + (row_index as u16 * ROW_SPACING);
        if y >= area.y + area.height {
            return;
        }

        let mut spans = vec![Span::raw("  ")];
        for &(letter, style) in cells {
            spans.push(Span::styled(format!(" {letter} "), style));
            spans.push(Span::raw(" "));
        }

        let paragraph = Paragraph::new(Line::from(spans));
        f.render_widget(
            paragraph,
            Rect {
                x: area.x,
                y,
                width: area.width,
                height: 1,
            },
        );
    }

    fn render_info(f: &mut Frame, area: Rect, messages: &[(String, Style)], error_message: &str) {
        let mut lines: Vec<Line> = messages
            .iter()
            .map(|(text, style)| Line::from(vec![Span::styled(text.as_str(), *style)]))
            .collect();

        if !error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(error_message, ERROR_STYLE)]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, prompt: Option<&Prompt>) {
        let text = match prompt {
            Some(Prompt::Difficulty) => DIFFICULTY_MENU,
            Some(Prompt::Guess { .. }) => "Type your guess | ENTER: Submit | ESC: Stop",
            Some(Prompt::Replay) => "Type YES or NO | ENTER: Submit | ESC: Stop",
            None => "Press any key to exit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    /// Polls once. `Ok(Some(line))` when a line is complete.
    fn handle_input(&mut self) -> Result<Option<String>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            // Only Press events, Release and Repeat would double the input
            Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                Ok(self.handle_key(key))
            }
            other => {
                debug_log!("handle_input() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<String> {
        let typed_before = self.current_input.len();
        let line = apply_key(&mut self.current_input, key);
        if self.current_input.len() > typed_before {
            self.error_message.clear();
        }
        line
    }

    fn wait_for_key(&mut self) {
        loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == event::KeyEventKind::Press => return,
                Ok(_) => {}
                Err(e) => {
                    debug_log!("wait_for_key() - Input error: {}", e);
                    return;
                }
            }
        }
    }
}

impl GameInterface for TuiInterface {
    fn read_input(&mut self, prompt: &Prompt) -> Option<String> {
        self.prompt = Some(*prompt);
        self.status = match prompt {
            Prompt::Difficulty => "Choose a difficulty".to_string(),
            Prompt::Guess { number, total } => format!("Guess {number} of {total}"),
            Prompt::Replay => "Play again?".to_string(),
        };

        loop {
            if let Err(e) = self.draw() {
                info_log!("read_input() - Draw failed: {}", e);
                return None;
            }
            match self.handle_input() {
                Ok(Some(line)) => {
                    info_log!("read_input() - Line entered: '{}'", line);
                    return Some(line);
                }
                Ok(None) => {}
                Err(e) => {
                    info_log!("read_input() - Input error: {}", e);
                    return None;
                }
            }
        }
    }

    fn display(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::RoundStarted { tier, length } => {
                self.rows.clear();
                self.word_length = *length;
                self.error_message.clear();
                self.push_message(format!("{tier} round: {length} letters"), INFO_STYLE);
            }
            SessionEvent::Rejected(err) => {
                self.error_message = err.to_string();
            }
            SessionEvent::Feedback { guess, marks } => {
                self.rows.push(GuessRow {
                    letters: guess.chars().collect(),
                    marks: marks.clone(),
                });
                self.error_message.clear();
            }
            SessionEvent::Won { .. } | SessionEvent::GuessesAdded { .. } => {
                self.push_event_lines(event, SUCCESS_STYLE);
            }
            SessionEvent::Lost { .. } => {
                self.push_event_lines(event, ERROR_STYLE);
            }
            SessionEvent::Farewell(_) => {
                self.prompt = None;
                self.status = "Game over".to_string();
                self.push_event_lines(event, HEADER_STYLE);
                self.draw_or_log();
                self.wait_for_key();
                return;
            }
            SessionEvent::Welcome | SessionEvent::StreakReport(_) | SessionEvent::Restarting => {
                self.push_event_lines(event, MESSAGE_STYLE);
            }
        }
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

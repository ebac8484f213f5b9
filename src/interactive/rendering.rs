//! TUI rendering with ratatui
//!
//! Guess grid, keyboard and status panels for the game.

use super::app::{App, MessageStyle};
use crate::core::{LetterStatus, Verdict};
use crate::output::{COMPLETION_MESSAGE, KEYBOARD_ROWS, progress_label};
use crate::session::{Phase, SessionSnapshot};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let snapshot = app.session.snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Progress
            Constraint::Min(10),   // Grid and messages
            Constraint::Length(5), // Keyboard
            Constraint::Length(5), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, &snapshot, chunks[0]);
    render_progress(f, &snapshot, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Guess grid
            Constraint::Percentage(45), // Messages
        ])
        .split(chunks[2]);

    render_grid(f, &snapshot, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_keyboard(f, &snapshot.letter_status, chunks[3]);
    render_input(f, app, &snapshot, chunks[4]);
    render_status(f, &snapshot, chunks[5]);
}

fn verdict_style(verdict: Option<Verdict>) -> Style {
    match verdict {
        Some(Verdict::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(Verdict::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(Verdict::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn render_header(f: &mut Frame, snapshot: &SessionSnapshot, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "HINTED WORDLE",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   Hint: "),
        Span::styled(
            snapshot.hint.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_progress(f: &mut Frame, snapshot: &SessionSnapshot, area: Rect) {
    let ratio = if snapshot.total_words == 0 {
        0.0
    } else {
        f64::from(snapshot.solved_count as u32) / f64::from(snapshot.total_words as u32)
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(progress_label(snapshot.solved_count, snapshot.total_words));

    f.render_widget(gauge, area);
}

fn grid_row(snapshot: &SessionSnapshot, row: usize) -> Line<'static> {
    let mut spans = Vec::with_capacity(snapshot.word_length * 2);

    if let Some(record) = snapshot.history.get(row) {
        for (letter, &verdict) in record
            .word()
            .text()
            .chars()
            .zip(record.feedback().verdicts())
        {
            spans.push(Span::styled(format!(" {letter} "), verdict_style(Some(verdict))));
            spans.push(Span::raw(" "));
        }
    } else if row == snapshot.history.len() && snapshot.phase == Phase::Playing {
        let typed: Vec<char> = snapshot.candidate.chars().collect();
        for i in 0..snapshot.word_length {
            let cell = typed.get(i).map_or_else(|| " _ ".to_string(), |c| format!(" {c} "));
            spans.push(Span::styled(
                cell,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }
    } else {
        for _ in 0..snapshot.word_length {
            spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::raw(" "));
        }
    }

    Line::from(spans)
}

fn render_grid(f: &mut Frame, snapshot: &SessionSnapshot, area: Rect) {
    let mut lines = Vec::with_capacity(snapshot.max_attempts * 2);
    for row in 0..snapshot.max_attempts {
        lines.push(grid_row(snapshot, row));
        lines.push(Line::from(""));
    }

    let title = format!(
        " Word {} of {} ",
        snapshot.active_index + 1,
        snapshot.total_words
    );
    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(grid, area);
}

fn render_keyboard(f: &mut Frame, status: &LetterStatus, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|letter| {
                    [
                        Span::styled(format!(" {letter} "), verdict_style(status.get(letter))),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Letters ").borders(Borders::ALL));

    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
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

fn render_input(f: &mut Frame, app: &App, snapshot: &SessionSnapshot, area: Rect) {
    let (title, content, color) = match snapshot.phase {
        Phase::AllComplete => (
            " 🎉 ALL WORDS SOLVED! 🎉 | 'n' new game, 'q' quit ".to_string(),
            COMPLETION_MESSAGE.to_string(),
            Color::Green,
        ),
        Phase::Failed => (
            " Out of attempts | 'n' new game, 'q' quit ".to_string(),
            snapshot
                .revealed
                .as_ref()
                .map(|word| format!("The word was {word}"))
                .unwrap_or_default(),
            Color::Red,
        ),
        Phase::WordSolved => (
            " Solved! ".to_string(),
            "Next word coming up...".to_string(),
            Color::Green,
        ),
        Phase::Playing => match &app.notice {
            Some(notice) => (
                " Guess ".to_string(),
                notice.text.clone(),
                Color::Red,
            ),
            None => (
                format!(
                    " Guess | {} attempts left | Enter to submit ",
                    snapshot.max_attempts.saturating_sub(snapshot.history.len())
                ),
                snapshot.candidate.clone(),
                Color::Yellow,
            ),
        },
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, snapshot: &SessionSnapshot, area: Rect) {
    let help_text = if snapshot.phase.is_terminal() {
        "n: New Game | q/Esc: Quit"
    } else {
        "A-Z: Type | Backspace: Delete | Enter: Submit | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{GameConfig, Session};

    fn snapshot_after(guesses: &[&str], typed: &str) -> SessionSnapshot {
        let config = GameConfig::builder().word("KNEEL", "Maibara").build().unwrap();
        let mut session = Session::new(config);
        for guess in guesses {
            session.submit_guess(guess).unwrap();
        }
        for c in typed.chars() {
            session.append_char(c);
        }
        session.snapshot()
    }

    fn row_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn grid_rows_show_guesses_candidate_and_blanks() {
        let snapshot = snapshot_after(&["LEVEL"], "KN");

        assert_eq!(row_text(&grid_row(&snapshot, 0)), " L   E   V   E   L  ");
        assert_eq!(row_text(&grid_row(&snapshot, 1)), " K   N   _   _   _  ");
        assert_eq!(row_text(&grid_row(&snapshot, 2)), " ·   ·   ·   ·   ·  ");
    }

    #[test]
    fn guessed_cells_are_colored_by_verdict() {
        let snapshot = snapshot_after(&["LEVEL"], "");
        let row = grid_row(&snapshot, 0);

        assert_eq!(row.spans[0].style, verdict_style(Some(Verdict::Absent)));
        assert_eq!(row.spans[2].style, verdict_style(Some(Verdict::Present)));
        assert_eq!(row.spans[8].style, verdict_style(Some(Verdict::Correct)));
    }
}

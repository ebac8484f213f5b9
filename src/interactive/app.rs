//! TUI application state and logic

use crate::output::progress_label;
use crate::session::{AdvanceTicket, GameConfig, Phase, Session, SubmitOutcome};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long a solved word stays on screen before the next one starts
pub const ADVANCE_DELAY: Duration = Duration::from_millis(1500);

/// How long a rejected-guess notice stays visible
pub const NOTICE_DURATION: Duration = Duration::from_secs(2);

/// Upper bound on how long the event loop blocks waiting for a key
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Application state
pub struct App {
    pub session: Session,
    pub messages: Vec<Message>,
    pub notice: Option<Notice>,
    pub pending_advance: Option<PendingAdvance>,
    pub stats: Statistics,
    pub should_quit: bool,
}

/// Word advance waiting for its delay to elapse
#[derive(Debug, Clone, Copy)]
pub struct PendingAdvance {
    pub ticket: AdvanceTicket,
    pub due: Instant,
}

/// Transient warning shown above the input line
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub expires: Instant,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_started: usize,
    pub games_completed: usize,
    pub games_failed: usize,
}

impl App {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let session = Session::new(config);
        let mut app = Self {
            session,
            messages: Vec::new(),
            notice: None,
            pending_advance: None,
            stats: Statistics {
                games_started: 1,
                ..Statistics::default()
            },
            should_quit: false,
        };
        app.add_message(
            "Welcome! Type a guess and press Enter.",
            MessageStyle::Info,
        );
        app.announce_word();
        app
    }

    fn announce_word(&mut self) {
        let text = format!(
            "Word {} of {}: hint \"{}\"",
            self.session.active_index() + 1,
            self.session.total_words(),
            self.session.hint()
        );
        self.add_message(&text, MessageStyle::Info);
    }

    /// Handle one key press at time `now`
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            _ if self.session.phase().is_terminal() => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.restart(),
                _ => {}
            },
            KeyCode::Char(c) => {
                self.session.append_char(c);
            }
            KeyCode::Backspace => {
                self.session.backspace();
            }
            KeyCode::Enter => self.submit(now),
            _ => {}
        }
    }

    /// Submit the typed candidate
    pub fn submit(&mut self, now: Instant) {
        match self.session.submit_candidate() {
            Err(err) => {
                debug!("Guess rejected: {err}");
                self.notice = Some(Notice {
                    text: err.notice().to_string(),
                    expires: now + NOTICE_DURATION,
                });
            }
            Ok(SubmitOutcome::Ignored) => {}
            Ok(SubmitOutcome::Continue { attempts_left }) => {
                self.add_message(
                    &format!("{attempts_left} attempts left"),
                    MessageStyle::Info,
                );
            }
            Ok(SubmitOutcome::WordSolved { .. }) => {
                let guesses = self.session.history().len();
                self.add_message(
                    &format!("Solved in {guesses}! Next word coming up..."),
                    MessageStyle::Success,
                );
                self.pending_advance =
                    self.session
                        .schedule_advance()
                        .map(|ticket| PendingAdvance {
                            ticket,
                            due: now + ADVANCE_DELAY,
                        });
            }
            Ok(SubmitOutcome::AllComplete) => {
                self.stats.games_completed += 1;
                self.add_message(
                    &progress_label(self.session.solved_count(), self.session.total_words()),
                    MessageStyle::Success,
                );
                self.add_message("Press 'n' to play again or 'q' to quit.", MessageStyle::Info);
            }
            Ok(SubmitOutcome::Failed { target }) => {
                self.stats.games_failed += 1;
                self.add_message(&format!("The word was {target}"), MessageStyle::Error);
                self.add_message("Press 'n' to play again or 'q' to quit.", MessageStyle::Info);
            }
        }
    }

    /// Run timed work that is due at `now`: the delayed advance and notice expiry
    pub fn tick(&mut self, now: Instant) {
        if let Some(pending) = self.pending_advance
            && now >= pending.due
        {
            self.pending_advance = None;
            if self.session.advance_with(pending.ticket) {
                self.announce_word();
            }
        }

        if self.notice.as_ref().is_some_and(|n| now >= n.expires) {
            self.notice = None;
        }
    }

    /// Time until the next timed event, capped so the loop stays responsive
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        let deadlines = self
            .pending_advance
            .map(|p| p.due)
            .into_iter()
            .chain(self.notice.as_ref().map(|n| n.expires));

        deadlines
            .map(|due| due.saturating_duration_since(now))
            .fold(IDLE_POLL, Duration::min)
    }

    /// Start the word set again from the first word
    ///
    /// Any advance still pending belongs to the old session and is dropped.
    pub fn restart(&mut self) {
        let config = self.session.config().clone();
        self.session = Session::new(config);
        self.pending_advance = None;
        self.notice = None;
        self.messages.clear();
        self.stats.games_started += 1;
        info!("Restarted, game #{}", self.stats.games_started);
        self.add_message("New game started!", MessageStyle::Info);
        self.announce_word();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(app.poll_timeout(Instant::now()))?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key, Instant::now());
        }
        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(
            GameConfig::builder()
                .word("DATES", "DFW")
                .word("FIRST", "London")
                .dictionary(["CRANE"])
                .build()
                .unwrap(),
        )
    }

    fn press(app: &mut App, code: KeyCode, now: Instant) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), now);
    }

    fn type_word(app: &mut App, word: &str, now: Instant) {
        for c in word.chars() {
            press(app, KeyCode::Char(c), now);
        }
        press(app, KeyCode::Enter, now);
    }

    #[test]
    fn typing_builds_candidate() {
        let mut app = app();
        let now = Instant::now();
        for c in "crx".chars() {
            press(&mut app, KeyCode::Char(c), now);
        }
        press(&mut app, KeyCode::Backspace, now);
        assert_eq!(app.session.candidate(), "CR");
    }

    #[test]
    fn short_guess_shows_notice_that_expires() {
        let mut app = app();
        let now = Instant::now();
        type_word(&mut app, "dat", now);

        assert_eq!(app.notice.as_ref().map(|n| n.text.as_str()), Some("Not enough letters"));
        assert!(app.session.history().is_empty());

        app.tick(now + NOTICE_DURATION / 2);
        assert!(app.notice.is_some());
        app.tick(now + NOTICE_DURATION);
        assert!(app.notice.is_none());
    }

    #[test]
    fn unknown_word_notice() {
        let mut app = app();
        type_word(&mut app, "qwert", Instant::now());
        assert_eq!(app.notice.as_ref().map(|n| n.text.as_str()), Some("Not in word list"));
    }

    #[test]
    fn solved_word_advances_after_delay() {
        let mut app = app();
        let now = Instant::now();
        type_word(&mut app, "dates", now);

        assert_eq!(app.phase(), Phase::WordSolved);
        assert!(app.pending_advance.is_some());

        // Keys are ignored while the solved word is displayed
        type_word(&mut app, "first", now);
        assert_eq!(app.session.history().len(), 1);

        app.tick(now + ADVANCE_DELAY / 2);
        assert_eq!(app.phase(), Phase::WordSolved);

        app.tick(now + ADVANCE_DELAY);
        assert_eq!(app.phase(), Phase::Playing);
        assert_eq!(app.session.active_index(), 1);
        assert!(app.pending_advance.is_none());
    }

    #[test]
    fn restart_drops_pending_advance() {
        let mut app = app();
        let now = Instant::now();
        type_word(&mut app, "dates", now);
        let stale = app.pending_advance.unwrap();

        app.restart();
        assert!(app.pending_advance.is_none());
        assert_eq!(app.session.active_index(), 0);
        assert_eq!(app.stats.games_started, 2);

        // Even if the old ticket were replayed, the new session refuses it
        type_word(&mut app, "dates", now);
        assert!(!app.session.advance_with(stale.ticket));
        assert_eq!(app.phase(), Phase::WordSolved);
    }

    #[test]
    fn completing_all_words() {
        let mut app = app();
        let now = Instant::now();
        type_word(&mut app, "dates", now);
        app.tick(now + ADVANCE_DELAY);
        type_word(&mut app, "first", now + ADVANCE_DELAY);

        assert_eq!(app.phase(), Phase::AllComplete);
        assert_eq!(app.stats.games_completed, 1);

        press(&mut app, KeyCode::Char('n'), now);
        assert_eq!(app.phase(), Phase::Playing);
        assert_eq!(app.session.solved_count(), 0);
    }

    #[test]
    fn failing_reveals_word_and_q_quits() {
        let mut app = app();
        let now = Instant::now();
        for _ in 0..6 {
            type_word(&mut app, "crane", now);
        }
        assert_eq!(app.phase(), Phase::Failed);
        assert_eq!(app.stats.games_failed, 1);
        assert!(app.messages.iter().any(|m| m.text == "The word was DATES"));

        press(&mut app, KeyCode::Char('q'), now);
        assert!(app.should_quit);
    }

    #[test]
    fn q_is_a_letter_while_playing() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'), Instant::now());
        assert!(!app.should_quit);
        assert_eq!(app.session.candidate(), "Q");
    }

    #[test]
    fn poll_timeout_tracks_next_deadline() {
        let mut app = app();
        let now = Instant::now();
        assert_eq!(app.poll_timeout(now), IDLE_POLL);

        type_word(&mut app, "dates", now);
        assert_eq!(app.poll_timeout(now), IDLE_POLL.min(ADVANCE_DELAY));
        assert_eq!(app.poll_timeout(now + ADVANCE_DELAY), Duration::ZERO);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "m9");
    }
}

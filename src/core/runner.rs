use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    DefaultTerminal, Frame,
};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::core::menu::{DifficultyMenu, MenuAction};
use crate::core::surface::DisplayList;
use crate::core::words::{Difficulty, WordProvider};
use crate::error::FetchError;
use crate::hangman::gallows::{SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::hangman::renderer::{HangmanRenderer, Notice, NoticeKind, PlayView};
use crate::hangman::{Delivery, GuessOutcome, HangmanEngine, RoundTicket};

/// Events delivered to the UI loop from background tasks
pub enum AppEvent {
    WordFetched(RoundTicket, Result<String, FetchError>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Loading(Difficulty),
    Playing,
}

/// What the loop has to do after a key press
#[derive(Debug)]
pub enum AppAction {
    None,
    Quit,
    Fetch(RoundTicket),
}

/// Presentation state wrapped around the engine. Owns the engine and the
/// drawing surface and passes the surface into every engine call.
pub struct App {
    engine: HangmanEngine,
    surface: DisplayList,
    menu: DifficultyMenu,
    screen: Screen,
    input: String,
    notice: Option<Notice>,
}

impl App {
    pub fn new(preselect: &Difficulty) -> Self {
        Self {
            engine: HangmanEngine::new(),
            surface: DisplayList::new(SURFACE_WIDTH, SURFACE_HEIGHT),
            menu: DifficultyMenu::new(preselect),
            screen: Screen::Menu,
            input: String::new(),
            notice: None,
        }
    }

    pub fn engine(&self) -> &HangmanEngine {
        &self.engine
    }

    pub fn surface(&self) -> &DisplayList {
        &self.surface
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        // Raw mode swallows SIGINT, so Ctrl+C arrives here as a key.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return AppAction::Quit;
        }

        match self.screen {
            Screen::Menu => match self.menu.handle_key(key) {
                MenuAction::Start(difficulty) => {
                    let ticket = self.engine.begin_round(&difficulty, &mut self.surface);
                    self.input.clear();
                    self.notice = None;
                    self.screen = Screen::Loading(difficulty);
                    AppAction::Fetch(ticket)
                }
                MenuAction::Quit => AppAction::Quit,
                MenuAction::None => AppAction::None,
            },
            Screen::Loading(_) => {
                if key.code == KeyCode::Esc {
                    self.screen = Screen::Menu;
                }
                AppAction::None
            }
            Screen::Playing if self.engine.is_over() => match key.code {
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    self.input.clear();
                    self.notice = None;
                    self.screen = Screen::Menu;
                    AppAction::None
                }
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => AppAction::Quit,
                _ => AppAction::None,
            },
            Screen::Playing => {
                match key.code {
                    KeyCode::Esc => return AppAction::Quit,
                    KeyCode::Enter => self.submit(),
                    KeyCode::Backspace => {
                        self.input.pop();
                    }
                    KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                        self.input.push(c)
                    }
                    _ => {}
                }
                AppAction::None
            }
        }
    }

    fn submit(&mut self) {
        let guess = self.input.trim().to_uppercase();

        match self.engine.submit_guess(&guess, &mut self.surface) {
            Ok(outcome) => {
                self.input.clear();
                self.notice = Some(match outcome {
                    GuessOutcome::Correct => Notice::info(format!("Good guess! '{}' is in the word.", guess)),
                    GuessOutcome::Wrong => Notice::info(format!("Sorry, '{}' is not in the word.", guess)),
                });

                if self.engine.is_over() {
                    self.notice = Some(if self.engine.did_win() {
                        Notice { kind: NoticeKind::Won, text: "Congratulations! You won!".to_string() }
                    } else {
                        Notice {
                            kind: NoticeKind::Lost,
                            text: format!("Game Over. You lost! The word was {}.", self.engine.secret_word()),
                        }
                    });
                }
            }
            Err(e) => {
                debug!(error = %e, "guess rejected");
                self.notice = Some(Notice::error(e.to_string()));
            }
        }
    }

    /// Hand a finished fetch to the engine. Results nobody is waiting for are dropped.
    pub fn handle_word(&mut self, ticket: RoundTicket, result: Result<String, FetchError>) {
        if !matches!(self.screen, Screen::Loading(_)) || ticket.id != self.engine.round_id() {
            debug!(ticket = ?ticket.id, "ignoring word nobody is waiting for");
            return;
        }

        let accepted = result.and_then(|word| self.engine.accept_word(&ticket, &word));
        match accepted {
            Ok(Delivery::Ready) => {
                self.screen = Screen::Playing;
                self.notice = Some(Notice::info(format!(
                    "New {} round: {} letters, {} wrong guesses allowed.",
                    ticket.difficulty,
                    self.engine.secret_word().len(),
                    self.engine.max_wrong_guesses()
                )));
            }
            Ok(Delivery::Stale) => {}
            Err(e) => {
                warn!(error = %describe(&e), "word fetch failed");
                self.screen = Screen::Menu;
                self.notice = Some(Notice::error(format!("Could not load a word: {}", describe(&e))));
            }
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        match &self.screen {
            Screen::Menu => self.menu.render(frame, self.notice.as_ref()),
            Screen::Loading(difficulty) => {
                let loading = Paragraph::new(format!("Fetching a {} word...\n\n[Esc] Back", difficulty))
                    .block(Block::default().borders(Borders::ALL).title(" HANGMAN "))
                    .style(Style::default().fg(Color::Gray))
                    .alignment(Alignment::Center);
                frame.render_widget(loading, frame.area());
            }
            Screen::Playing => HangmanRenderer::render(
                frame,
                &PlayView {
                    engine: &self.engine,
                    surface: &self.surface,
                    input: &self.input,
                    notice: self.notice.as_ref(),
                },
            ),
        }
    }
}

/// Error message followed by its source chain
fn describe(err: &dyn std::error::Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}

/// Drives an [`App`] in the terminal: keyboard polling, redraws, and word fetches
pub struct Runner {
    provider: Arc<dyn WordProvider>,
}

impl Runner {
    pub fn new(provider: Arc<dyn WordProvider>) -> Self {
        Self { provider }
    }

    pub async fn run(&self, mut app: App, mut terminal: DefaultTerminal) -> anyhow::Result<()> {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();
        let mut render_timer = tokio::time::interval(Duration::from_millis(33));

        loop {
            // Non-blocking check for keyboard input
            let mut key_event = None;
            if event::poll(Duration::from_millis(0))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        key_event = Some(key);
                    }
                }
            }

            tokio::select! {
                Some(AppEvent::WordFetched(ticket, result)) = event_rx.recv() => {
                    app.handle_word(ticket, result);
                }

                _ = render_timer.tick() => {
                    terminal.draw(|f| app.render(f))?;
                }
            }

            if let Some(key) = key_event {
                match app.handle_key(key) {
                    AppAction::Quit => break,
                    AppAction::Fetch(ticket) => self.spawn_fetch(ticket, event_tx.clone()),
                    AppAction::None => {}
                }
            }
        }

        Ok(())
    }

    fn spawn_fetch(&self, ticket: RoundTicket, tx: mpsc::UnboundedSender<AppEvent>) {
        let provider = Arc::clone(&self.provider);
        tokio::spawn(async move {
            let result = provider.fetch_word(&ticket.difficulty).await;
            // The loop may already be gone on quit.
            let _ = tx.send(AppEvent::WordFetched(ticket, result));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_includes_sources() {
        let err = crate::error::GameError::from(FetchError::MalformedWord("R2".into()));
        assert_eq!(describe(&err), "word service returned a malformed word: \"R2\"");
    }
}

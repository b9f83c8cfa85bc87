use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::core::words::Difficulty;
use crate::hangman::renderer::Notice;

pub enum MenuAction {
    Start(Difficulty),
    Quit,
    None,
}

/// Difficulty picker shown before every round
pub struct DifficultyMenu {
    options: Vec<Difficulty>,
    selected: usize,
}

impl DifficultyMenu {
    pub fn new(preselect: &Difficulty) -> Self {
        let mut options = Difficulty::standard();
        // Custom tags from the command line are offered too - the provider decides if they are valid.
        if !options.contains(preselect) {
            options.push(preselect.clone());
        }
        let selected = options.iter().position(|d| d == preselect).unwrap_or(0);
        Self { options, selected }
    }

    pub fn options(&self) -> &[Difficulty] {
        &self.options
    }

    pub fn current(&self) -> &Difficulty {
        &self.options[self.selected]
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> MenuAction {
        match key.code {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(self.options.len() - 1),
            KeyCode::Enter => return MenuAction::Start(self.current().clone()),
            KeyCode::Char('q') | KeyCode::Esc => return MenuAction::Quit,
            _ => {}
        }
        MenuAction::None
    }

    pub fn render(&self, f: &mut Frame, notice: Option<&Notice>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        f.render_widget(
            Paragraph::new(" HANGMAN ")
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            chunks[0],
        );

        let items: Vec<ListItem> = self
            .options
            .iter()
            .enumerate()
            .map(|(i, d)| {
                let style = if i == self.selected {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(format!(" » {}", d)).style(style)
            })
            .collect();

        f.render_widget(
            List::new(items).block(Block::default().title(" SELECT DIFFICULTY ").borders(Borders::ALL)),
            chunks[1],
        );

        let footer = match notice {
            Some(n) => Paragraph::new(n.text.as_str()).style(Style::default().fg(Color::Red)),
            None => Paragraph::new("[↑/↓] Navigate  [Enter] Start  [Q] Quit"),
        };
        f.render_widget(footer.alignment(Alignment::Center), chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn navigation_is_clamped() {
        let mut menu = DifficultyMenu::new(&Difficulty::easy());
        menu.handle_key(key(KeyCode::Up));
        assert_eq!(menu.current(), &Difficulty::easy());

        for _ in 0..10 {
            menu.handle_key(key(KeyCode::Down));
        }
        assert_eq!(menu.current(), &Difficulty::hard());
    }

    #[test]
    fn enter_starts_selected_difficulty() {
        let mut menu = DifficultyMenu::new(&Difficulty::medium());
        assert!(matches!(menu.handle_key(key(KeyCode::Enter)), MenuAction::Start(d) if d == Difficulty::medium()));
        assert!(matches!(menu.handle_key(key(KeyCode::Char('q'))), MenuAction::Quit));
        assert!(matches!(menu.handle_key(key(KeyCode::Char('x'))), MenuAction::None));
    }

    #[test]
    fn custom_difficulty_is_appended() {
        let menu = DifficultyMenu::new(&Difficulty::new("expert"));
        assert_eq!(menu.options().len(), 4);
        assert_eq!(menu.current(), &Difficulty::new("expert"));
    }

    #[test]
    fn selection_never_leaves_the_option_list() {
        let mut menu = DifficultyMenu::new(&Difficulty::new("expert"));
        for _ in 0..10 {
            menu.handle_key(key(KeyCode::Down));
        }
        assert_eq!(menu.current(), &Difficulty::new("expert"));

        for _ in 0..10 {
            menu.handle_key(key(KeyCode::Up));
        }
        assert_eq!(menu.current(), &Difficulty::easy());
    }
}

//! Application screen state management
//!
//! Handles transitions between screens:
//! - Home menu
//! - Player registration
//! - Game (rack, word entry, scores)

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{App, MAX_PLAYERS};

/// Menu option on the home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    StartGame,
    GameMenu,
    Quit,
}

impl MenuOption {
    /// Get all menu options in order
    pub fn all() -> &'static [MenuOption] {
        &[MenuOption::StartGame, MenuOption::GameMenu, MenuOption::Quit]
    }

    /// Get the display label for this option
    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::StartGame => "Start Game",
            MenuOption::GameMenu => "Game Menu",
            MenuOption::Quit => "Quit",
        }
    }
}

/// The current application screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Home menu
    Home { selected: usize },
    /// Entering player names
    Register {
        names: Vec<String>,
        selected: usize,
    },
    /// Playing
    Game,
}

/// Main application coordinator
pub struct AppCoordinator {
    /// Current screen
    pub screen: Screen,
    /// Game state shared by all screens
    pub app: App,
    /// Whether the application should quit
    pub should_quit: bool,
}

impl AppCoordinator {
    /// Create a new app coordinator starting at the home menu
    pub fn new(app: App) -> Self {
        Self {
            screen: Screen::Home { selected: 0 },
            app,
            should_quit: false,
        }
    }

    /// Route a key press to the active screen
    pub fn on_key(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::Home { .. } => match key.code {
                KeyCode::Up => self.menu_up(),
                KeyCode::Down => self.menu_down(),
                KeyCode::Enter => self.menu_select(),
                KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            Screen::Register { .. } => match key.code {
                KeyCode::Up => self.register_up(),
                KeyCode::Down => self.register_down(),
                KeyCode::Tab => self.register_add_player(),
                KeyCode::Backspace => self.register_backspace(),
                KeyCode::Enter => self.register_save(),
                KeyCode::Esc => self.go_home(),
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.register_char(c)
                }
                _ => {}
            },
            Screen::Game => match key.code {
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.app.on_fetch_tiles()
                }
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    self.app.on_char(c.to_ascii_uppercase())
                }
                KeyCode::Backspace => self.app.on_backspace(),
                KeyCode::Enter => self.app.on_submit(),
                KeyCode::Esc => self.go_home(),
                _ => {}
            },
        }
    }

    /// Go back to the home menu
    pub fn go_home(&mut self) {
        self.screen = Screen::Home { selected: 0 };
    }

    /// Handle menu navigation (up)
    pub fn menu_up(&mut self) {
        if let Screen::Home { selected } = &mut self.screen {
            *selected = selected.saturating_sub(1);
        }
    }

    /// Handle menu navigation (down)
    pub fn menu_down(&mut self) {
        if let Screen::Home { selected } = &mut self.screen {
            if *selected < MenuOption::all().len() - 1 {
                *selected += 1;
            }
        }
    }

    /// Handle menu selection (Enter)
    pub fn menu_select(&mut self) {
        let Screen::Home { selected } = self.screen else {
            return;
        };

        match MenuOption::all()[selected] {
            MenuOption::StartGame => {
                self.screen = Screen::Register {
                    names: vec![String::new()],
                    selected: 0,
                };
            }
            MenuOption::GameMenu => {
                self.screen = Screen::Game;
            }
            MenuOption::Quit => {
                self.should_quit = true;
            }
        }
    }

    /// Registration: previous name row
    pub fn register_up(&mut self) {
        if let Screen::Register { selected, .. } = &mut self.screen {
            *selected = selected.saturating_sub(1);
        }
    }

    /// Registration: next name row
    pub fn register_down(&mut self) {
        if let Screen::Register { names, selected } = &mut self.screen {
            if *selected + 1 < names.len() {
                *selected += 1;
            }
        }
    }

    /// Registration: add a row for another player
    pub fn register_add_player(&mut self) {
        if let Screen::Register { names, selected } = &mut self.screen {
            if names.len() < MAX_PLAYERS {
                names.push(String::new());
                *selected = names.len() - 1;
            }
        }
    }

    /// Registration: type into the selected name
    pub fn register_char(&mut self, c: char) {
        if let Screen::Register { names, selected } = &mut self.screen {
            names[*selected].push(c);
        }
    }

    /// Registration: delete from the selected name, dropping the row once
    /// it is empty (the last row always stays)
    pub fn register_backspace(&mut self) {
        if let Screen::Register { names, selected } = &mut self.screen {
            if names[*selected].pop().is_none() && names.len() > 1 {
                names.remove(*selected);
                *selected = (*selected).min(names.len() - 1);
            }
        }
    }

    /// Registration: save players and start playing
    pub fn register_save(&mut self) {
        let Screen::Register { names, .. } = &self.screen else {
            return;
        };
        if self.app.register_players(names).is_ok() {
            self.screen = Screen::Game;
        }
    }
}

//! UI rendering using ratatui
//!
//! Screens:
//! - Home: welcome text and menu
//! - Register: one editable row per player
//! - Game: rack, word entry, feedback, scores and played words

use crate::app::{App, AppCoordinator, FeedbackKind, MenuOption, Screen, MAX_PLAYERS};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use wordtiles::game::{letter_value, GameSession, Rack};

/// Render the appropriate screen based on app state
pub fn render(frame: &mut Frame, coordinator: &AppCoordinator) {
    match &coordinator.screen {
        Screen::Home { selected } => render_home(frame, *selected),
        Screen::Register { names, selected } => {
            render_register(frame, names, *selected, &coordinator.app)
        }
        Screen::Game => render_game(frame, &coordinator.app),
    }
}

/// Render the home menu
fn render_home(frame: &mut Frame, selected: usize) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Logo
            Constraint::Length(2), // Welcome
            Constraint::Length(1), // Spacer
            Constraint::Min(4),    // Menu options
            Constraint::Length(2), // Footer
        ])
        .margin(2)
        .split(area);

    let logo = r#"
 _       __               ________   __
| |     / /___  _________/ /_  __(_) / /__  _____
| | /| / / __ \/ ___/ __  / / / / / / / _ \/ ___/
| |/ |/ / /_/ / /  / /_/ / / / / / / /  __(__  )
|__/|__/\____/_/   \__,_/ /_/ /_/_/_/\___/____/
"#;
    let logo_widget = Paragraph::new(logo)
        .style(Style::default().fg(Color::Green).bold())
        .alignment(Alignment::Center);
    frame.render_widget(logo_widget, layout[0]);

    let welcome = Paragraph::new("Test your word formation skills and compete for the highest score!")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center);
    frame.render_widget(welcome, layout[1]);

    let items: Vec<ListItem> = MenuOption::all()
        .iter()
        .enumerate()
        .map(|(i, opt)| {
            let style = if i == selected {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::White)
            };
            let prefix = if i == selected { "> " } else { "  " };
            ListItem::new(format!("{}{}", prefix, opt.label())).style(style)
        })
        .collect();
    frame.render_widget(List::new(items), layout[3]);

    let footer = Paragraph::new("↑↓ Navigate  Enter Select  Esc Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[4]);
}

/// Render the player registration form
fn render_register(frame: &mut Frame, names: &[String], selected: usize, app: &App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                      // Header
            Constraint::Length(MAX_PLAYERS as u16 + 2), // Name rows
            Constraint::Length(2),                      // Feedback
            Constraint::Min(0),                         // Spacer
            Constraint::Length(2),                      // Footer
        ])
        .margin(1)
        .split(area);

    let header = Paragraph::new("Player Registration")
        .style(Style::default().fg(Color::Cyan).bold())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, layout[0]);

    let items: Vec<ListItem> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let (style, cursor) = if i == selected {
                (Style::default().fg(Color::Yellow).bold(), "_")
            } else {
                (Style::default().fg(Color::White), "")
            };
            ListItem::new(format!("Player {:>2}: {}{}", i + 1, name, cursor)).style(style)
        })
        .collect();
    let title = format!(" Players ({}/{}) ", names.len(), MAX_PLAYERS);
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, layout[1]);

    if let Some(widget) = feedback_line(app) {
        frame.render_widget(widget, layout[2]);
    }

    let footer = Paragraph::new("↑↓ Select  Tab Add Player  Enter Save Players  Esc Back")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[4]);
}

/// Render the game screen
fn render_game(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let Some(session) = app.session() else {
        render_no_session(frame, area);
        return;
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with rack
            Constraint::Min(0),    // Main content area
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, layout[0], session);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(30),    // Input and feedback
            Constraint::Length(24), // Scores
            Constraint::Length(24), // Played words
        ])
        .split(layout[1]);

    render_input_area(frame, columns[0], app, session);
    render_scores(frame, columns[1], session);
    render_played_words(frame, columns[2], session);

    let footer = Paragraph::new("Enter Submit Word  Ctrl+N Fetch New Tiles  Esc Menu")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[2]);
}

/// Shown when the game menu is opened before anyone registered
fn render_no_session(frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Percentage(40),
        ])
        .margin(2)
        .split(area);

    let warning = Paragraph::new("Please register players first!")
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(warning, layout[1]);

    let hint = Paragraph::new("Press Esc to go back")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hint, layout[2]);
}

/// Render the header: logo, rack, current player
fn render_header(frame: &mut Frame, area: Rect, session: &GameSession) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12), // Logo
            Constraint::Min(30),    // Rack
            Constraint::Length(28), // Current player
        ])
        .split(inner);

    let logo = Paragraph::new("WORDTILES")
        .style(Style::default().fg(Color::Green).bold())
        .alignment(Alignment::Left);
    frame.render_widget(logo, header_layout[0]);

    let rack = Paragraph::new(format_letter_rack(session.rack()))
        .style(Style::default().fg(Color::Cyan).bold())
        .alignment(Alignment::Center);
    frame.render_widget(rack, header_layout[1]);

    let player = Paragraph::new(format!("Current Player: {}", session.current_player().name))
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Right);
    frame.render_widget(player, header_layout[2]);
}

/// Render the input/feedback area (left panel)
fn render_input_area(frame: &mut Frame, area: Rect, app: &App, session: &GameSession) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Input line
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Feedback
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Tile values
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Hint
        ])
        .split(area);

    let input = Paragraph::new(format!("Word: {}_", app.input))
        .style(Style::default().fg(Color::White));
    frame.render_widget(input, main_layout[0]);

    if let Some(widget) = feedback_line(app) {
        frame.render_widget(widget, main_layout[2]);
    }

    let values_text = format!(
        "{}   ({} playable words)",
        format_tile_values(session.rack()),
        app.possible_words().len()
    );
    let values = Paragraph::new(values_text)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(values, main_layout[4]);

    if app.is_stuck() {
        let hint = Paragraph::new(
            "No valid words can be formed with the current tiles. Try rearranging or drawing new tiles.",
        )
        .style(Style::default().fg(Color::Blue))
        .wrap(Wrap { trim: true });
        frame.render_widget(hint, main_layout[6]);
    }
}

/// Last feedback message, colored by kind
fn feedback_line(app: &App) -> Option<Paragraph<'_>> {
    let feedback = app.feedback.as_ref()?;
    let color = match feedback.kind {
        FeedbackKind::Success => Color::Green,
        FeedbackKind::Warning => Color::Yellow,
        FeedbackKind::Error => Color::Red,
    };
    Some(
        Paragraph::new(feedback.text.as_str())
            .style(Style::default().fg(color))
            .wrap(Wrap { trim: true }),
    )
}

/// Render scores in turn order (middle panel)
fn render_scores(frame: &mut Frame, area: Rect, session: &GameSession) {
    let current = &session.current_player().name;
    let items: Vec<ListItem> = session
        .players()
        .iter()
        .map(|player| {
            let is_current = &player.name == current;
            let prefix = if is_current { "▶ " } else { "  " };
            let style = if is_current {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("{}{}: {} points", prefix, player.name, player.score)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Current Scores"),
    );
    frame.render_widget(list, area);
}

/// Render accepted words, most recent first (right panel)
fn render_played_words(frame: &mut Frame, area: Rect, session: &GameSession) {
    let items: Vec<ListItem> = session
        .history()
        .iter()
        .rev()
        .take(area.height.saturating_sub(2) as usize)
        .map(|played| {
            ListItem::new(format!("{}: {} +{}", played.player, played.word, played.score))
                .style(Style::default().fg(Color::Green))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Played Words"),
    );
    frame.render_widget(list, area);
}

/// Format the letter rack for display
fn format_letter_rack(rack: &Rack) -> String {
    if rack.is_empty() {
        return String::from("[ no tiles ]");
    }
    format!("[ {} ]", rack)
}

/// Each tile with its point value, e.g. `C=3 A=1 T=1`
fn format_tile_values(rack: &Rack) -> String {
    rack.letters()
        .iter()
        .map(|&l| format!("{}={}", l, letter_value(l)))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use std::sync::Arc;
    use wordtiles::game::Dictionary;

    fn draw(coordinator: &AppCoordinator) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, coordinator)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn coordinator() -> AppCoordinator {
        let dictionary = Arc::new(Dictionary::from_words(["cat"]));
        AppCoordinator::new(App::new(dictionary, Some(5)))
    }

    #[test]
    fn test_format_rack() {
        let rack = Rack::parse("CAT").unwrap();
        assert_eq!(format_letter_rack(&rack), "[ C A T ]");
        assert_eq!(format_letter_rack(&Rack::default()), "[ no tiles ]");
        assert_eq!(format_tile_values(&rack), "C=3 A=1 T=1");
    }

    #[test]
    fn test_home_lists_menu() {
        let screen = draw(&coordinator());
        assert!(screen.contains("Start Game"));
        assert!(screen.contains("Game Menu"));
    }

    #[test]
    fn test_game_without_players_warns() {
        let mut c = coordinator();
        c.screen = Screen::Game;
        assert!(draw(&c).contains("Please register players first!"));
    }

    #[test]
    fn test_register_shows_rejected_names() {
        let mut c = coordinator();
        c.screen = Screen::Register {
            names: vec!["Ann".to_string(), "Ann".to_string()],
            selected: 1,
        };
        c.register_save();

        assert!(matches!(c.screen, Screen::Register { .. }));
        assert!(draw(&c).contains("Player name 'Ann' is already taken."));
    }

    #[test]
    fn test_register_shows_missing_names() {
        let mut c = coordinator();
        c.screen = Screen::Register {
            names: vec![String::new()],
            selected: 0,
        };
        c.register_save();

        assert!(draw(&c).contains("Please enter player names."));
    }

    #[test]
    fn test_game_shows_player_and_scores() {
        let mut c = coordinator();
        c.app.register_players(&["Ann".to_string(), "Bo".to_string()]).unwrap();
        c.screen = Screen::Game;

        let screen = draw(&c);
        assert!(screen.contains("Current Player: Ann"));
        assert!(screen.contains("Ann: 0 points"));
        assert!(screen.contains("Bo: 0 points"));
    }
}

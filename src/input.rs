//! Keyboard mapping from terminal key events to game commands

use brickfall::Action;
use brickfall::settings::Settings;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the front-end to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Game(Action),
    NewGame,
    Quit,
}

/// Key bindings configuration - supports multiple keys per action
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub move_down: Vec<KeyCode>,
    pub move_left: Vec<KeyCode>,
    pub move_right: Vec<KeyCode>,
    pub rotate_left: Vec<KeyCode>,
    pub rotate_right: Vec<KeyCode>,
    pub hard_drop: Vec<KeyCode>,
    pub pause: Vec<KeyCode>,
    pub new_game: Vec<KeyCode>,
    pub quit: Vec<KeyCode>,
}

impl KeyBindings {
    /// Parse a key string into KeyCode
    fn parse_key(s: &str) -> Option<KeyCode> {
        let code = match s.to_lowercase().as_str() {
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "space" => KeyCode::Char(' '),
            "enter" => KeyCode::Enter,
            "tab" => KeyCode::Tab,
            "esc" | "escape" => KeyCode::Esc,
            "pause" => KeyCode::Pause,
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c.to_ascii_lowercase()),
                    _ => return None,
                }
            }
        };
        Some(code)
    }

    /// Parse a list of key strings into KeyCodes, skipping unknown names
    fn parse_keys(keys: &[String]) -> Vec<KeyCode> {
        keys.iter()
            .filter_map(|s| {
                let code = Self::parse_key(s);
                if code.is_none() {
                    tracing::warn!("unknown key name in settings: {:?}", s);
                }
                code
            })
            .collect()
    }

    /// Create keybindings from settings
    pub fn from_settings(settings: &Settings) -> Self {
        let keys = &settings.keys;
        Self {
            move_down: Self::parse_keys(&keys.move_down),
            move_left: Self::parse_keys(&keys.move_left),
            move_right: Self::parse_keys(&keys.move_right),
            rotate_left: Self::parse_keys(&keys.rotate_left),
            rotate_right: Self::parse_keys(&keys.rotate_right),
            hard_drop: Self::parse_keys(&keys.hard_drop),
            pause: Self::parse_keys(&keys.pause),
            new_game: Self::parse_keys(&keys.new_game),
            quit: Self::parse_keys(&keys.quit),
        }
    }

    /// Translate a key press into a command
    pub fn map(&self, key: KeyEvent) -> Option<Command> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Command::Quit);
        }

        let code = normalize_key(key.code);
        let table = [
            (&self.move_down, Command::Game(Action::MoveDown)),
            (&self.move_left, Command::Game(Action::MoveLeft)),
            (&self.move_right, Command::Game(Action::MoveRight)),
            (&self.rotate_left, Command::Game(Action::RotateLeft)),
            (&self.rotate_right, Command::Game(Action::RotateRight)),
            (&self.hard_drop, Command::Game(Action::HardDrop)),
            (&self.pause, Command::Game(Action::TogglePause)),
            (&self.new_game, Command::NewGame),
            (&self.quit, Command::Quit),
        ];
        table
            .into_iter()
            .find(|(keys, _)| keys.contains(&code))
            .map(|(_, command)| command)
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// Letters are matched case-insensitively ("P" pauses like "p")
fn normalize_key(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_default_bindings() {
        let keys = KeyBindings::default();
        assert_eq!(keys.map(press(KeyCode::Down)), Some(Command::Game(Action::MoveDown)));
        assert_eq!(keys.map(press(KeyCode::Up)), Some(Command::Game(Action::HardDrop)));
        assert_eq!(keys.map(press(KeyCode::Char(' '))), Some(Command::Game(Action::RotateLeft)));
        assert_eq!(keys.map(press(KeyCode::Char('P'))), Some(Command::Game(Action::TogglePause)));
        assert_eq!(keys.map(press(KeyCode::Pause)), Some(Command::Game(Action::TogglePause)));
        assert_eq!(keys.map(press(KeyCode::Enter)), Some(Command::NewGame));
        assert_eq!(keys.map(press(KeyCode::F(5))), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let keys = KeyBindings::default();
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(keys.map(event), Some(Command::Quit));
    }

    #[test]
    fn test_unknown_key_names_are_skipped() {
        let mut settings = Settings::default();
        settings.keys.move_left = vec!["nonsense".to_string(), "a".to_string()];
        let keys = KeyBindings::from_settings(&settings);
        assert_eq!(keys.move_left, vec![KeyCode::Char('a')]);
    }
}

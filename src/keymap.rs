use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::KeyMapConfig;
use crate::error::{PaletteError, Result};

/// What a key press asks the palette to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CursorLeft,
    CursorUp,
    CursorRight,
    CursorDown,
    /// Ask the host to shut down
    ForceQuit,
}

impl Action {
    pub fn description(self) -> &'static str {
        match self {
            Action::CursorLeft => "Left",
            Action::CursorUp => "Up",
            Action::CursorRight => "Right",
            Action::CursorDown => "Down",
            Action::ForceQuit => "Quit",
        }
    }
}

/// A single key combination such as `ctrl+c` or `left`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn char(c: char) -> Self {
        Self::key(KeyCode::Char(c))
    }

    pub const fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// Parse a name like `left`, `j` or `ctrl+c`.
    ///
    /// Characters are stored the way terminals report them: `shift+a`
    /// becomes `A` without the shift flag, and letters under ctrl or alt are
    /// lowercase.
    pub fn parse(name: &str) -> Result<Self> {
        let invalid = || PaletteError::InvalidKey(name.to_string());

        let mut parts: Vec<&str> = name.trim().split('+').collect();
        let key = parts.pop().filter(|k| !k.is_empty()).ok_or_else(invalid)?;

        let mut modifiers = KeyModifiers::NONE;
        for part in parts {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return Err(invalid()),
            }
        }

        let mut chars = key.chars();
        let code = match (chars.next(), chars.next()) {
            (Some(c), None) => KeyCode::Char(c),
            _ => match key.to_lowercase().as_str() {
                "left" => KeyCode::Left,
                "right" => KeyCode::Right,
                "up" => KeyCode::Up,
                "down" => KeyCode::Down,
                "esc" | "escape" => KeyCode::Esc,
                "enter" | "return" => KeyCode::Enter,
                "tab" => KeyCode::Tab,
                "space" => KeyCode::Char(' '),
                "backspace" => KeyCode::Backspace,
                "home" => KeyCode::Home,
                "end" => KeyCode::End,
                _ => return Err(invalid()),
            },
        };

        Ok(Self::new(code, modifiers).normalized())
    }

    fn normalized(self) -> Self {
        let KeyCode::Char(c) = self.code else {
            return self;
        };
        let mut modifiers = self.modifiers;
        let c = if modifiers.contains(KeyModifiers::SHIFT) {
            modifiers.remove(KeyModifiers::SHIFT);
            c.to_ascii_uppercase()
        } else if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            c.to_ascii_lowercase()
        } else {
            c
        };
        Self::new(KeyCode::Char(c), modifiers)
    }

    /// Whether `key` is this combination. Shift is ignored for characters
    /// since terminals report it through the character itself.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        if key.code != self.code {
            return false;
        }
        let relevant = match key.code {
            KeyCode::Char(_) => KeyModifiers::CONTROL | KeyModifiers::ALT,
            _ => KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT,
        };
        key.modifiers & relevant == self.modifiers & relevant
    }
}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            write!(f, "ctrl+")?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            write!(f, "alt+")?;
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            write!(f, "shift+")?;
        }
        match self.code {
            KeyCode::Left => write!(f, "←"),
            KeyCode::Right => write!(f, "→"),
            KeyCode::Up => write!(f, "↑"),
            KeyCode::Down => write!(f, "↓"),
            KeyCode::Esc => write!(f, "esc"),
            KeyCode::Enter => write!(f, "enter"),
            KeyCode::Tab => write!(f, "tab"),
            KeyCode::Backspace => write!(f, "backspace"),
            KeyCode::Home => write!(f, "home"),
            KeyCode::End => write!(f, "end"),
            KeyCode::Char(' ') => write!(f, "space"),
            KeyCode::Char(c) => write!(f, "{}", c),
            other => write!(f, "{:?}", other),
        }
    }
}

/// Key bindings for every palette action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    pub cursor_left: Vec<KeyBinding>,
    pub cursor_up: Vec<KeyBinding>,
    pub cursor_right: Vec<KeyBinding>,
    pub cursor_down: Vec<KeyBinding>,
    pub force_quit: Vec<KeyBinding>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            cursor_left: vec![KeyBinding::key(KeyCode::Left), KeyBinding::char('h')],
            cursor_up: vec![KeyBinding::key(KeyCode::Up), KeyBinding::char('k')],
            cursor_right: vec![KeyBinding::key(KeyCode::Right), KeyBinding::char('l')],
            cursor_down: vec![KeyBinding::key(KeyCode::Down), KeyBinding::char('j')],
            force_quit: vec![KeyBinding::ctrl('c')],
        }
    }
}

impl KeyMap {
    /// Start from the defaults and replace every action the config names
    pub fn from_config(config: &KeyMapConfig) -> Result<Self> {
        let mut keymap = Self::default();

        let overrides = [
            (&config.cursor_left, &mut keymap.cursor_left),
            (&config.cursor_up, &mut keymap.cursor_up),
            (&config.cursor_right, &mut keymap.cursor_right),
            (&config.cursor_down, &mut keymap.cursor_down),
            (&config.force_quit, &mut keymap.force_quit),
        ];
        for (names, bindings) in overrides {
            if let Some(names) = names {
                *bindings = names
                    .iter()
                    .map(|name| KeyBinding::parse(name))
                    .collect::<Result<Vec<_>>>()?;
            }
        }

        Ok(keymap)
    }

    /// Bindings in the order they are checked. Quit comes first so it can
    /// never be shadowed by a movement binding.
    pub fn bindings(&self) -> [(Action, &[KeyBinding]); 5] {
        [
            (Action::ForceQuit, self.force_quit.as_slice()),
            (Action::CursorLeft, self.cursor_left.as_slice()),
            (Action::CursorUp, self.cursor_up.as_slice()),
            (Action::CursorRight, self.cursor_right.as_slice()),
            (Action::CursorDown, self.cursor_down.as_slice()),
        ]
    }

    /// Translate a terminal key event. Releases and repeats resolve to nothing.
    pub fn resolve(&self, key: &KeyEvent) -> Option<Action> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        self.bindings()
            .into_iter()
            .find(|(_, bindings)| bindings.iter().any(|b| b.matches(key)))
            .map(|(action, _)| action)
    }
}

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de, Deserialize, Deserializer, Serialize};

/// User-facing commands bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Quit,
    Suspend,

    // Navigation bar
    NextPage,
    PrevPage,
    GoHome,
    GoAbout,
    GoExperience,
    GoProjects,
    GoResume,
    GoContact,

    // Page-level movement; meaning depends on the current page
    Next,
    Prev,
    Down,
    Up,
    Activate,
    Unselect,

    // Contact form
    Edit,
    Submit,

    Download,
}

/// Flat mapping from key sequences to actions
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<Vec<KeyEvent>, Action>);

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed = HashMap::<String, Action>::deserialize(deserializer)?;
        let bindings = parsed
            .into_iter()
            .map(|(raw, action)| {
                parse_key_sequence(&raw)
                    .map(|keys| (keys, action))
                    .map_err(de::Error::custom)
            })
            .collect::<Result<HashMap<_, _>, _>>()?;
        Ok(KeyBindings(bindings))
    }
}

impl KeyBindings {
    /// Action bound to a single key press.
    pub fn action_for(&self, key: KeyEvent) -> Option<Action> {
        let key = KeyEvent::new(key.code, key.modifiers);
        self.get(&vec![key]).copied()
    }
}

/// Parse a sequence such as `<ctrl-c>` or `<g><g>`.
pub fn parse_key_sequence(raw: &str) -> Result<Vec<KeyEvent>, String> {
    if raw.matches('<').count() != raw.matches('>').count() {
        return Err(format!("Unable to parse `{raw}`"));
    }
    let trimmed = raw.strip_prefix('<').unwrap_or(raw);
    let trimmed = trimmed.strip_suffix('>').unwrap_or(trimmed);
    trimmed.split("><").map(parse_key_event).collect()
}

pub fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let lower = raw.to_ascii_lowercase();
    let mut modifiers = KeyModifiers::empty();
    let mut rest = lower.as_str();
    loop {
        if let Some(r) = rest.strip_prefix("ctrl-") {
            modifiers.insert(KeyModifiers::CONTROL);
            rest = r;
        } else if let Some(r) = rest.strip_prefix("alt-") {
            modifiers.insert(KeyModifiers::ALT);
            rest = r;
        } else if let Some(r) = rest.strip_prefix("shift-") {
            modifiers.insert(KeyModifiers::SHIFT);
            rest = r;
        } else {
            break;
        }
    }

    let code = match rest {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "tab" => KeyCode::Tab,
        "backtab" => {
            modifiers.insert(KeyModifiers::SHIFT);
            KeyCode::BackTab
        }
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        single => {
            let mut chars = single.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if modifiers.contains(KeyModifiers::SHIFT) => {
                    KeyCode::Char(c.to_ascii_uppercase())
                }
                (Some(c), None) => KeyCode::Char(c),
                _ => return Err(format!("Unable to parse `{raw}`")),
            }
        }
    };
    Ok(KeyEvent::new(code, modifiers))
}

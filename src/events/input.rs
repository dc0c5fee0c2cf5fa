//! Key binding parsing and matching.

use crate::config::KeyBindings;
use crate::error::{Error, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A parsed key binding such as `"Ctrl+c"`, `"Enter"` or `"?"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    code: KeyCode,
    modifiers: KeyModifiers,
    label: String,
}

impl KeyBinding {
    /// Parse a binding string. Modifiers are `Ctrl`, `Alt` and `Shift`,
    /// joined to the key with `+`; `"+"` alone binds the plus key.
    pub fn parse(binding: &str) -> Result<Self> {
        let binding = binding.trim();
        let (prefix, key) = if binding == "+" {
            (None, "+")
        } else if let Some(prefix) = binding.strip_suffix("++") {
            (Some(prefix), "+")
        } else {
            match binding.rsplit_once('+') {
                Some((prefix, key)) => (Some(prefix), key),
                None => (None, binding),
            }
        };

        let mut modifiers = KeyModifiers::NONE;
        for part in prefix.into_iter().flat_map(|p| p.split('+')) {
            modifiers |= match part.to_lowercase().as_str() {
                "ctrl" | "control" => KeyModifiers::CONTROL,
                "alt" => KeyModifiers::ALT,
                "shift" => KeyModifiers::SHIFT,
                other => {
                    return Err(Error::config(format!(
                        "unknown modifier '{other}' in key binding '{binding}'"
                    )));
                }
            };
        }

        let code = parse_key(key)
            .ok_or_else(|| Error::config(format!("unknown key in key binding '{binding}'")))?;

        Ok(Self {
            code,
            modifiers,
            label: binding.to_string(),
        })
    }

    /// Check whether a key event triggers this binding.
    ///
    /// Shift is ignored for character keys, since it is already reflected
    /// in the character itself.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        match (self.code, event.code) {
            (KeyCode::Char(want), KeyCode::Char(got)) => {
                let relevant = KeyModifiers::CONTROL | KeyModifiers::ALT;
                (want == got || want.to_ascii_uppercase() == got)
                    && (event.modifiers & relevant) == (self.modifiers & relevant)
            }
            (want, got) => want == got && event.modifiers == self.modifiers,
        }
    }

    /// The binding as written in the configuration.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl std::fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}

fn parse_key(key: &str) -> Option<KeyCode> {
    let lower = key.to_lowercase();
    let code = match lower.as_str() {
        "enter" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "space" => KeyCode::Char(' '),
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        s if s.len() > 1 && s.starts_with('f') => KeyCode::F(s[1..].parse().ok()?),
        _ => {
            let mut chars = key.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(c)
        }
    };
    Some(code)
}

/// Every configured binding, parsed.
#[derive(Debug, Clone)]
pub struct KeyMap {
    pub quit: KeyBinding,
    pub help: KeyBinding,
    pub next: KeyBinding,
    pub previous: KeyBinding,
    pub arena: KeyBinding,
    pub markets: KeyBinding,
    pub predictions: KeyBinding,
    pub history: KeyBinding,
    pub next_view: KeyBinding,
    pub open_ticket: KeyBinding,
    pub filter: KeyBinding,
    pub back: KeyBinding,
    pub increase: KeyBinding,
    pub decrease: KeyBinding,
    pub toggle_side: KeyBinding,
    pub toggle_outcome: KeyBinding,
    pub submit: KeyBinding,
}

impl KeyMap {
    /// Parse every binding in the configuration.
    pub fn from_bindings(bindings: &KeyBindings) -> Result<Self> {
        Ok(Self {
            quit: KeyBinding::parse(&bindings.quit)?,
            help: KeyBinding::parse(&bindings.help)?,
            next: KeyBinding::parse(&bindings.next)?,
            previous: KeyBinding::parse(&bindings.previous)?,
            arena: KeyBinding::parse(&bindings.arena)?,
            markets: KeyBinding::parse(&bindings.markets)?,
            predictions: KeyBinding::parse(&bindings.predictions)?,
            history: KeyBinding::parse(&bindings.history)?,
            next_view: KeyBinding::parse(&bindings.next_view)?,
            open_ticket: KeyBinding::parse(&bindings.open_ticket)?,
            filter: KeyBinding::parse(&bindings.filter)?,
            back: KeyBinding::parse(&bindings.back)?,
            increase: KeyBinding::parse(&bindings.increase)?,
            decrease: KeyBinding::parse(&bindings.decrease)?,
            toggle_side: KeyBinding::parse(&bindings.toggle_side)?,
            toggle_outcome: KeyBinding::parse(&bindings.toggle_outcome)?,
            submit: KeyBinding::parse(&bindings.submit)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_parse_plain_char() {
        let b = KeyBinding::parse("q").unwrap();
        assert!(b.matches(&key(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(b.matches(&key(KeyCode::Char('Q'), KeyModifiers::SHIFT)));
        assert!(!b.matches(&key(KeyCode::Char('q'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_shifted_symbol_matches() {
        let b = KeyBinding::parse("?").unwrap();
        assert!(b.matches(&key(KeyCode::Char('?'), KeyModifiers::SHIFT)));
    }

    #[test]
    fn test_parse_modifiers() {
        let b = KeyBinding::parse("Ctrl+c").unwrap();
        assert!(b.matches(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!b.matches(&key(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert_eq!(b.label(), "Ctrl+c");
    }

    #[test]
    fn test_parse_plus_key() {
        let plus = KeyBinding::parse("+").unwrap();
        assert!(plus.matches(&key(KeyCode::Char('+'), KeyModifiers::SHIFT)));
        let ctrl_plus = KeyBinding::parse("Ctrl++").unwrap();
        assert!(ctrl_plus.matches(&key(KeyCode::Char('+'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_parse_named_keys() {
        let tab = KeyBinding::parse("Tab").unwrap();
        assert!(tab.matches(&key(KeyCode::Tab, KeyModifiers::NONE)));
        let f5 = KeyBinding::parse("F5").unwrap();
        assert!(f5.matches(&key(KeyCode::F(5), KeyModifiers::NONE)));
        let esc = KeyBinding::parse("Escape").unwrap();
        assert!(esc.matches(&key(KeyCode::Esc, KeyModifiers::NONE)));
    }

    #[test]
    fn test_parse_errors() {
        assert!(KeyBinding::parse("Hyper+j").is_err());
        assert!(KeyBinding::parse("jk").is_err());
        assert!(KeyBinding::parse("").is_err());
        assert!(KeyBinding::parse("Fx").is_err());
    }

    #[test]
    fn test_default_bindings_compile() {
        assert!(KeyMap::from_bindings(&KeyBindings::default()).is_ok());
    }
}

//! Type-safe key bindings shared by every component in this crate.
//!
//! A [`Binding`] pairs one or more key presses with the help text shown for
//! them. Components expose their bindings through the [`KeyMap`] trait so the
//! [`help`](crate::help) component can render them without knowing anything
//! about the component itself.
//!
//! ```rust
//! use vetbook_widgets::key::{new_binding, with_help, with_keys_str};
//!
//! let next = new_binding(vec![
//!     with_keys_str(&["right", "l"]),
//!     with_help("→/l", "next"),
//! ]);
//! assert_eq!(next.help().key, "→/l");
//! assert!(next.enabled());
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifiers held while pressing it.
    pub mods: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self { code, mods }
    }
}

impl KeyPress {
    /// Parses a key name such as `"left"`, `"pgdown"`, `"ctrl+c"` or `"k"`.
    ///
    /// Returns `None` for names that do not describe a key.
    pub fn parse(name: &str) -> Option<Self> {
        let (mods, rest) = match name.strip_prefix("ctrl+") {
            Some(rest) => (KeyModifiers::CONTROL, rest),
            None => match name.strip_prefix("alt+") {
                Some(rest) => (KeyModifiers::ALT, rest),
                None => (KeyModifiers::NONE, name),
            },
        };

        let code = match rest {
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "pgup" => KeyCode::PageUp,
            "pgdown" => KeyCode::PageDown,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "enter" => KeyCode::Enter,
            "esc" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backspace" => KeyCode::Backspace,
            "space" => KeyCode::Char(' '),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        };

        Some(Self { code, mods })
    }

    fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        if self.mods == msg.modifiers {
            return true;
        }
        // Terminals report shifted characters with SHIFT set; the char already carries it.
        matches!(self.code, KeyCode::Char(_))
            && self.mods == KeyModifiers::NONE
            && msg.modifiers == KeyModifiers::SHIFT
    }
}

/// Help text for a binding: the key label and what it does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short label for the key(s), e.g. `"←/h"`.
    pub key: String,
    /// Description of the action, e.g. `"prev"`.
    pub desc: String,
}

/// A set of key presses bound to one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates an enabled binding for the given keys with empty help text.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text (builder pattern).
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// The key presses this binding responds to.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// The help text of this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Whether the binding is active. Disabled bindings never match and are
    /// left out of help views.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Returns true if the binding is enabled and `msg` is one of its keys.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// An option applied by [`new_binding`].
#[derive(Debug, Clone)]
pub enum BindingOpt {
    /// Replace the bound keys.
    Keys(Vec<KeyPress>),
    /// Replace the help text.
    Help(Help),
    /// Start disabled.
    Disabled,
}

/// Builds a binding from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        match opt {
            BindingOpt::Keys(keys) => binding.keys = keys,
            BindingOpt::Help(help) => binding.help = help,
            BindingOpt::Disabled => binding.disabled = true,
        }
    }
    binding
}

/// Binds keys by name; unknown names are skipped.
pub fn with_keys_str(names: &[&str]) -> BindingOpt {
    BindingOpt::Keys(names.iter().filter_map(|n| KeyPress::parse(n)).collect())
}

/// Binds explicit key presses.
pub fn with_keys<K: Into<KeyPress>>(keys: Vec<K>) -> BindingOpt {
    BindingOpt::Keys(keys.into_iter().map(Into::into).collect())
}

/// Sets the help text.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    BindingOpt::Help(Help {
        key: key.to_string(),
        desc: desc.to_string(),
    })
}

/// Creates the binding disabled.
pub fn with_disabled() -> BindingOpt {
    BindingOpt::Disabled
}

/// Returns true if `msg` matches any of the given bindings.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Bindings a component exposes to the help view.
pub trait KeyMap {
    /// Bindings for the single-line help.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings grouped into columns for the expanded help.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(KeyPress::parse("left").map(|k| k.code), Some(KeyCode::Left));
        assert_eq!(
            KeyPress::parse("pgdown").map(|k| k.code),
            Some(KeyCode::PageDown)
        );
        assert_eq!(KeyPress::parse("l").map(|k| k.code), Some(KeyCode::Char('l')));
        assert_eq!(KeyPress::parse("nonsense"), None);

        let ctrl_c = KeyPress::parse("ctrl+c").unwrap();
        assert_eq!(ctrl_c.code, KeyCode::Char('c'));
        assert_eq!(ctrl_c.mods, KeyModifiers::CONTROL);
    }

    #[test]
    fn test_binding_matches() {
        let binding = new_binding(vec![with_keys_str(&["right", "l"]), with_help("→/l", "next")]);
        assert!(binding.matches(&press(KeyCode::Right)));
        assert!(binding.matches(&press(KeyCode::Char('l'))));
        assert!(!binding.matches(&press(KeyCode::Left)));
    }

    #[test]
    fn test_shifted_char_matches_plain_binding() {
        let binding = Binding::new(vec![KeyCode::Char('G')]);
        let msg = KeyMsg {
            key: KeyCode::Char('G'),
            modifiers: KeyModifiers::SHIFT,
        };
        assert!(binding.matches(&msg));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut binding = Binding::new(vec![KeyCode::Enter]).with_help("enter", "book");
        binding.set_enabled(false);
        assert!(!binding.enabled());
        assert!(!binding.matches(&press(KeyCode::Enter)));

        binding.set_enabled(true);
        assert!(binding.matches(&press(KeyCode::Enter)));

        let disabled = new_binding(vec![with_keys_str(&["enter"]), with_disabled()]);
        assert!(!disabled.enabled());
    }

    #[test]
    fn test_binding_without_keys_is_disabled() {
        let binding = new_binding(vec![with_help("?", "nothing")]);
        assert!(!binding.enabled());
    }

    #[test]
    fn test_matches_any() {
        let a = Binding::new(vec![KeyCode::Char('a')]);
        let b = Binding::new(vec![KeyCode::Char('b')]);
        assert!(matches(&press(KeyCode::Char('b')), &[&a, &b]));
        assert!(!matches(&press(KeyCode::Char('c')), &[&a, &b]));
    }
}

//! Key bindings for carousel navigation.
//!
//! - **Window**: `←/h/pgup` (prev), `→/l/pgdown` (next)
//! - **Highlight**: `↑/k` (up), `↓/j` (down) within the visible items
//! - **Select**: `enter`, acted on by the owning view
//! - **Help**: `?` toggles the expanded help
//!
//! Bindings that cannot do anything right now (the window is at its last
//! position, nothing is loaded) are disabled so they drop out of the help line.

use crate::key::{self, KeyMap};

/// Key bindings for a carousel.
#[derive(Debug, Clone)]
pub struct CarouselKeyMap {
    /// Show the previous window.
    pub prev: key::Binding,
    /// Show the next window.
    pub next: key::Binding,
    /// Move the highlight up.
    pub up: key::Binding,
    /// Move the highlight down.
    pub down: key::Binding,
    /// Act on the highlighted item.
    pub select: key::Binding,
    /// Toggle the expanded help.
    pub help: key::Binding,
}

impl Default for CarouselKeyMap {
    fn default() -> Self {
        Self {
            prev: key::new_binding(vec![
                key::with_keys_str(&["left", "h", "pgup"]),
                key::with_help("←/h", "prev"),
            ]),
            next: key::new_binding(vec![
                key::with_keys_str(&["right", "l", "pgdown"]),
                key::with_help("→/l", "next"),
            ]),
            up: key::new_binding(vec![
                key::with_keys_str(&["up", "k"]),
                key::with_help("↑/k", "up"),
            ]),
            down: key::new_binding(vec![
                key::with_keys_str(&["down", "j"]),
                key::with_help("↓/j", "down"),
            ]),
            select: key::new_binding(vec![
                key::with_keys_str(&["enter"]),
                key::with_help("enter", "select"),
            ]),
            help: key::new_binding(vec![
                key::with_keys_str(&["?"]),
                key::with_help("?", "more"),
            ]),
        }
    }
}

impl CarouselKeyMap {
    /// Relabels the select action, e.g. "book" or "read".
    pub fn with_select_help(mut self, desc: &str) -> Self {
        let label = self.select.help().key.clone();
        self.select = self.select.with_help(label, desc);
        self
    }
}

impl KeyMap for CarouselKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev, &self.next, &self.select, &self.help]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.prev, &self.next],
            vec![&self.up, &self.down],
            vec![&self.select, &self.help],
        ]
    }
}

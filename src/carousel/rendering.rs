//! View rendering for carousels.
//!
//! The view is composed top to bottom of:
//! - the title
//! - a body that depends on the load state: spinner, error, empty text, or
//!   the visible items rendered by the delegate
//! - the navigation row (`‹ ● ○ ›`), only when the list overflows one page
//! - the help line

use super::keys::CarouselKeyMap;
use super::style::{ACTIVE_DOT, ELLIPSIS, INACTIVE_DOT, MAX_DOTS, NEXT_ARROW, PREV_ARROW};
use super::types::{Indicator, Item, LoadState};
use super::Model;
use crate::window::Layout;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Cuts `text` to at most `width` columns, ending with an ellipsis when cut.
///
/// Works on grapheme clusters so accented names and emoji are never split.
pub fn truncate(text: &str, width: usize) -> String {
    if UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - UnicodeWidthStr::width(ELLIPSIS);
    let mut out = String::new();
    let mut used = 0;
    for g in text.graphemes(true) {
        let w = UnicodeWidthStr::width(g);
        if used + w > budget {
            break;
        }
        used += w;
        out.push_str(g);
    }
    out.push_str(ELLIPSIS);
    out
}

impl<I: Item> Model<I> {
    /// Renders the carousel.
    pub fn view(&self) -> String {
        self.view_with_keymap(&self.keymap)
    }

    /// Renders the carousel with `keymap` in the help line, for owners that
    /// adjust bindings per viewer.
    pub fn view_with_keymap(&self, keymap: &CarouselKeyMap) -> String {
        let mut sections = Vec::new();
        if !self.title.is_empty() {
            sections.push(self.styles.title.clone().render(&self.title));
        }
        sections.push(self.view_body());
        if let Some(nav) = self.view_navigation() {
            sections.push(nav);
        }
        if self.show_help {
            let help = self.help.view(keymap);
            if !help.is_empty() {
                sections.push(help);
            }
        }
        sections.join("\n")
    }

    /// Lines taken by a full window of items, for laying out a screen.
    pub fn body_height(&self) -> usize {
        let page = self.window.page_size();
        page * self.delegate.height() + (page - 1) * self.delegate.spacing()
    }

    fn view_body(&self) -> String {
        match &self.state {
            LoadState::Loading => format!(
                "{} {}",
                self.spinner.view(),
                self.styles.loading.clone().render("Loading…")
            ),
            LoadState::Failed(reason) => self
                .styles
                .error
                .clone()
                .render(&truncate(&format!("Could not load: {}", reason), self.width)),
            LoadState::Ready if self.window.layout() == Layout::Empty => {
                self.styles.empty.clone().render(&self.empty_text)
            }
            LoadState::Ready => self.view_items(),
        }
    }

    fn view_items(&self) -> String {
        let gap = "\n".repeat(self.delegate.spacing() + 1);
        self.window
            .visible()
            .iter()
            .enumerate()
            .map(|(i, item)| self.delegate.render(item, i == self.highlight, self.width))
            .collect::<Vec<_>>()
            .join(&gap)
    }

    /// Arrows and position indicator; `None` unless the list overflows.
    fn view_navigation(&self) -> Option<String> {
        if self.state != LoadState::Ready || !self.window.has_overflow() {
            return None;
        }

        let arrow = |text: &str, enabled: bool| {
            let style = if enabled {
                &self.styles.control
            } else {
                &self.styles.control_disabled
            };
            style.clone().render(text)
        };

        let mut parts = vec![arrow(PREV_ARROW, self.window.can_retreat())];
        if let Some(indicator) = self.view_indicator() {
            parts.push(indicator);
        }
        parts.push(arrow(NEXT_ARROW, self.window.can_advance()));
        Some(parts.join(" "))
    }

    fn view_indicator(&self) -> Option<String> {
        let (index, count) = self.window.position();
        match self.indicator {
            Indicator::Hidden => None,
            Indicator::Dots if count <= MAX_DOTS => Some(
                (0..count)
                    .map(|i| {
                        if i == index {
                            self.styles.active_dot.clone().render(ACTIVE_DOT)
                        } else {
                            self.styles.inactive_dot.clone().render(INACTIVE_DOT)
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            Indicator::Dots | Indicator::Arabic => Some(
                self.styles
                    .arabic
                    .clone()
                    .render(&format!("{}/{}", index + 1, count)),
            ),
        }
    }
}

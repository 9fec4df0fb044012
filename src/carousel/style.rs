//! Styles for carousel components.
//!
//! All defaults use `AdaptiveColor` so they stay readable on light and dark
//! terminals.

use lipgloss_extras::prelude::*;

/// Active position dot.
pub const ACTIVE_DOT: &str = "●";
/// Inactive position dot.
pub const INACTIVE_DOT: &str = "○";
/// Previous-window control.
pub const PREV_ARROW: &str = "‹";
/// Next-window control.
pub const NEXT_ARROW: &str = "›";
/// Truncation marker.
pub const ELLIPSIS: &str = "…";
/// Past this many positions the dots indicator switches to numbers.
pub const MAX_DOTS: usize = 10;

/// Styles for each part of a carousel.
#[derive(Debug, Clone)]
pub struct CarouselStyles {
    /// Title line.
    pub title: Style,
    /// Navigation control that can be used.
    pub control: Style,
    /// Navigation control at a boundary.
    pub control_disabled: Style,
    /// Active position dot.
    pub active_dot: Style,
    /// Inactive position dot.
    pub inactive_dot: Style,
    /// Numeric position.
    pub arabic: Style,
    /// Empty-state text.
    pub empty: Style,
    /// Load failure text.
    pub error: Style,
    /// Spinner while loading.
    pub spinner: Style,
    /// "Loading" text next to the spinner.
    pub loading: Style,
}

impl Default for CarouselStyles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#A49FA5",
            Dark: "#777777",
        };
        let faint = AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        };

        Self {
            title: Style::new()
                .foreground(Color::from("#FFFDF5"))
                .background(Color::from("#2E7D6B"))
                .padding(0, 1, 0, 1),
            control: Style::new().foreground(AdaptiveColor {
                Light: "#1F6F5C",
                Dark: "#6FD3B8",
            }),
            control_disabled: Style::new().foreground(faint.clone()),
            active_dot: Style::new().foreground(AdaptiveColor {
                Light: "#847A85",
                Dark: "#979797",
            }),
            inactive_dot: Style::new().foreground(faint),
            arabic: Style::new().foreground(subdued.clone()),
            empty: Style::new().foreground(subdued.clone()),
            error: Style::new().foreground(AdaptiveColor {
                Light: "#C2362B",
                Dark: "#FF6F61",
            }),
            spinner: Style::new().foreground(AdaptiveColor {
                Light: "#1F6F5C",
                Dark: "#6FD3B8",
            }),
            loading: Style::new().foreground(subdued),
        }
    }
}

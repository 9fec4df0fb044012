//! Windowed pagination over an in-memory list.
//!
//! A [`Window`] owns an ordered list and a fixed page size, and tracks which
//! contiguous slice of the list is visible. It is the state behind the
//! carousels in this crate, but it has no rendering of its own and can be used
//! anywhere a "show N items at a time" control is needed.
//!
//! Navigation follows an explicit [`Policy`]: what happens at the ends of the
//! list ([`Boundary`]) and how far one move goes ([`Step`]).
//!
//! ```rust
//! use vetbook_widgets::window::{Policy, Window};
//!
//! let mut window = Window::new(vec!['A', 'B', 'C', 'D', 'E'], 3, Policy::CLINIC).unwrap();
//! assert_eq!(window.visible(), &['A', 'B', 'C']);
//!
//! window.advance();
//! assert_eq!(window.cursor(), 3);
//! assert_eq!(window.visible(), &['D', 'E']);
//!
//! window.advance(); // 3 + 3 >= 5, wraps
//! assert_eq!(window.visible(), &['A', 'B', 'C']);
//! ```

use serde::Deserialize;
use thiserror::Error;

/// Errors raised when a window is given parameters it cannot honor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A window must show at least one item.
    #[error("page size must be at least 1")]
    ZeroPageSize,
    /// The requested cursor is not a position this window can reach.
    #[error("cursor {cursor} is outside 0..={max}")]
    CursorOutOfRange {
        /// The rejected cursor.
        cursor: usize,
        /// The largest cursor the window accepts.
        max: usize,
    },
}

/// What navigation does when it runs past either end of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Boundary {
    /// Moving past the end returns to the start and vice versa.
    Wrap,
    /// Moving stops at the first and last full window.
    #[default]
    Clamp,
}

/// How far a single `advance` or `retreat` moves the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    /// Move by a whole page.
    #[default]
    Page,
    /// Move by one item.
    Item,
}

/// A navigation policy: boundary behavior plus step size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Policy {
    /// Behavior at the ends of the list.
    pub boundary: Boundary,
    /// Distance of one move.
    pub step: Step,
}

impl Policy {
    /// Page-sized jumps that wrap around, as used by the clinic carousel.
    pub const CLINIC: Policy = Policy {
        boundary: Boundary::Wrap,
        step: Step::Page,
    };

    /// One item at a time, stopping at the ends, as used by the post list.
    pub const POSTS: Policy = Policy {
        boundary: Boundary::Clamp,
        step: Step::Item,
    };

    /// Creates a policy from its two parts.
    pub const fn new(boundary: Boundary, step: Step) -> Self {
        Self { boundary, step }
    }
}

/// How much of the list fits in one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Nothing to show; callers render an empty state instead of a window.
    Empty,
    /// Everything fits; navigation controls are suppressed.
    SinglePage,
    /// The list is longer than a page; navigation controls are active.
    Overflow,
}

/// A cursor into an ordered list showing `page_size` items at a time.
///
/// The cursor is the index of the first visible item. It starts at 0 and is
/// reset to 0 whenever the list is replaced with [`Window::set_items`].
#[derive(Debug, Clone)]
pub struct Window<T> {
    items: Vec<T>,
    page_size: usize,
    cursor: usize,
    policy: Policy,
}

impl<T> Window<T> {
    /// Creates a window over `items`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroPageSize`] if `page_size` is 0.
    ///
    /// ```rust
    /// use vetbook_widgets::window::{Error, Policy, Window};
    ///
    /// let err = Window::new(vec![1, 2, 3], 0, Policy::default()).unwrap_err();
    /// assert_eq!(err, Error::ZeroPageSize);
    /// ```
    pub fn new(items: Vec<T>, page_size: usize, policy: Policy) -> Result<Self, Error> {
        if page_size == 0 {
            return Err(Error::ZeroPageSize);
        }
        Ok(Self {
            items,
            page_size,
            cursor: 0,
            policy,
        })
    }

    /// Creates an empty window, ready to receive items from a load.
    pub fn empty(page_size: usize, policy: Policy) -> Result<Self, Error> {
        Self::new(Vec::new(), page_size, policy)
    }

    /// Replaces the list and resets the cursor to the start.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.cursor = 0;
    }

    /// The full list.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items in the list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items shown at once.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The navigation policy.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Index of the first visible item.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The start of the last full (or only) window: `max(0, len - page_size)`.
    pub fn max_index(&self) -> usize {
        self.items.len().saturating_sub(self.page_size)
    }

    /// Whether the list is empty, fits on one page, or overflows it.
    pub fn layout(&self) -> Layout {
        if self.items.is_empty() {
            Layout::Empty
        } else if self.items.len() <= self.page_size {
            Layout::SinglePage
        } else {
            Layout::Overflow
        }
    }

    /// Returns true if the list is longer than one page.
    pub fn has_overflow(&self) -> bool {
        self.layout() == Layout::Overflow
    }

    fn step(&self) -> usize {
        match self.policy.step {
            Step::Page => self.page_size,
            Step::Item => 1,
        }
    }

    /// The largest cursor navigation can produce under the current policy.
    ///
    /// Wrapping by page may stop on a short tail window; every other policy
    /// only shows full windows.
    fn max_cursor(&self) -> usize {
        match (self.policy.boundary, self.policy.step) {
            (Boundary::Wrap, Step::Page) => self.items.len().saturating_sub(1),
            _ => self.max_index(),
        }
    }

    /// Moves the cursor to an explicit position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CursorOutOfRange`] if `cursor` lies past the last
    /// position the policy allows (the last item when wrapping by page,
    /// `max_index` otherwise).
    pub fn set_cursor(&mut self, cursor: usize) -> Result<(), Error> {
        let max = self.max_cursor();
        if cursor > max {
            return Err(Error::CursorOutOfRange { cursor, max });
        }
        self.cursor = cursor;
        Ok(())
    }

    /// Moves forward by one step.
    ///
    /// Wrap: returns to 0 once the next position would reach the end of the
    /// list (by page) or pass [`Window::max_index`] (by item), so wrapping by
    /// item walks the same windows in both directions. Clamp: stops at
    /// [`Window::max_index`]. Does nothing when the whole list fits on one
    /// page.
    pub fn advance(&mut self) {
        if !self.has_overflow() {
            return;
        }
        let before = self.cursor;
        let next = self.cursor + self.step();
        self.cursor = match self.policy.boundary {
            Boundary::Wrap if next > self.max_cursor() => 0,
            Boundary::Wrap => next,
            Boundary::Clamp => next.min(self.max_index()),
        };
        tracing::debug!(before, after = self.cursor, "window advanced");
    }

    /// Moves backward by one step.
    ///
    /// Wrap: jumps to [`Window::max_index`] when the move would pass the
    /// start. Clamp: stops at 0. Does nothing when the whole list fits on one
    /// page.
    pub fn retreat(&mut self) {
        if !self.has_overflow() {
            return;
        }
        let before = self.cursor;
        let step = self.step();
        self.cursor = match self.policy.boundary {
            Boundary::Wrap if self.cursor < step => self.max_index(),
            Boundary::Wrap => self.cursor - step,
            Boundary::Clamp => self.cursor.saturating_sub(step),
        };
        tracing::debug!(before, after = self.cursor, "window retreated");
    }

    /// Returns true if [`Window::advance`] would move the cursor.
    pub fn can_advance(&self) -> bool {
        if !self.has_overflow() {
            return false;
        }
        match self.policy.boundary {
            Boundary::Wrap => true,
            Boundary::Clamp => self.cursor < self.max_index(),
        }
    }

    /// Returns true if [`Window::retreat`] would move the cursor.
    pub fn can_retreat(&self) -> bool {
        if !self.has_overflow() {
            return false;
        }
        match self.policy.boundary {
            Boundary::Wrap => true,
            Boundary::Clamp => self.cursor > 0,
        }
    }

    /// Start (inclusive) and end (exclusive) of the visible slice.
    pub fn bounds(&self) -> (usize, usize) {
        let start = self.cursor.min(self.items.len());
        let end = (start + self.page_size).min(self.items.len());
        (start, end)
    }

    /// The visible slice: `items[cursor..cursor + page_size]`, shorter at the
    /// tail. Never panics.
    pub fn visible(&self) -> &[T] {
        let (start, end) = self.bounds();
        &self.items[start..end]
    }

    /// Position for an indicator, as `(index, count)` with a 0-based index.
    ///
    /// With page steps, `count` is the number of pages and a clamped final
    /// window reports the last page. With item steps, every reachable cursor
    /// is its own position.
    ///
    /// ```rust
    /// use vetbook_widgets::window::{Policy, Window};
    ///
    /// let mut window = Window::new((0..7).collect(), 3, Policy::default()).unwrap();
    /// assert_eq!(window.position(), (0, 3));
    /// window.advance();
    /// window.advance();
    /// assert_eq!(window.cursor(), 4);
    /// assert_eq!(window.position(), (2, 3));
    /// ```
    pub fn position(&self) -> (usize, usize) {
        if self.items.is_empty() {
            return (0, 1);
        }
        let count = match self.policy.step {
            Step::Page => self.items.len().div_ceil(self.page_size),
            Step::Item => self.max_cursor() + 1,
        };
        let index = match self.policy.step {
            Step::Page => self.cursor.div_ceil(self.page_size),
            Step::Item => self.cursor,
        };
        (index.min(count - 1), count)
    }
}

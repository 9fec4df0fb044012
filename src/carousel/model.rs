//! The carousel model: state, construction and loading.

use super::keys::CarouselKeyMap;
use super::style::CarouselStyles;
use super::types::{Indicator, Item, ItemDelegate, LoadFailedMsg, LoadState, LoadedMsg};
use crate::config::CarouselConfig;
use crate::help;
use crate::spinner;
use crate::window::{self, Layout, Policy, Window};
use bubbletea_rs::{Cmd, Msg};
use std::fmt::Display;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

static LAST_ID: AtomicU64 = AtomicU64::new(0);

fn next_id() -> u64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// A titled, windowed view over a list of records loaded from the service.
///
/// ```rust
/// use vetbook_widgets::carousel::{ItemDelegate, Item, Model};
/// use vetbook_widgets::window::Policy;
///
/// #[derive(Clone)]
/// struct Pet(String);
///
/// impl Item for Pet {
///     fn id(&self) -> &str {
///         &self.0
///     }
/// }
///
/// struct Plain;
///
/// impl ItemDelegate<Pet> for Plain {
///     fn render(&self, item: &Pet, _highlighted: bool, _width: usize) -> String {
///         item.0.clone()
///     }
/// }
///
/// let pets: Vec<Pet> = ["Rex", "Tom", "Kiwi", "Mochi"]
///     .iter()
///     .map(|p| Pet(p.to_string()))
///     .collect();
/// let mut carousel = Model::new(Plain, 3, Policy::CLINIC).unwrap().with_items(pets);
/// assert_eq!(carousel.window().visible().len(), 3);
///
/// carousel.next();
/// assert_eq!(carousel.window().visible().len(), 1);
/// ```
pub struct Model<I: Item> {
    pub(super) id: u64,
    pub(super) generation: u64,
    pub(super) title: String,
    pub(super) window: Window<I>,
    pub(super) state: LoadState,
    pub(super) delegate: Box<dyn ItemDelegate<I> + Send + Sync>,
    pub(super) highlight: usize,
    pub(super) focused: bool,
    pub(super) width: usize,
    pub(super) empty_text: String,
    pub(super) indicator: Indicator,
    pub(super) show_help: bool,
    pub(super) spinner: spinner::Model,
    pub(super) help: help::Model,
    /// Key bindings.
    pub keymap: CarouselKeyMap,
    /// Styles.
    pub styles: CarouselStyles,
}

impl<I: Item> std::fmt::Debug for Model<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("len", &self.window.len())
            .field("cursor", &self.window.cursor())
            .field("state", &self.state)
            .finish()
    }
}

impl<I: Item> Model<I> {
    /// Creates an empty, focused carousel in the [`LoadState::Ready`] state.
    ///
    /// # Errors
    ///
    /// Fails with [`window::Error::ZeroPageSize`] when `page_size` is 0.
    pub fn new<D>(delegate: D, page_size: usize, policy: Policy) -> Result<Self, window::Error>
    where
        D: ItemDelegate<I> + Send + Sync + 'static,
    {
        let styles = CarouselStyles::default();
        let mut model = Self {
            id: next_id(),
            generation: 0,
            title: String::new(),
            window: Window::empty(page_size, policy)?,
            state: LoadState::Ready,
            delegate: Box::new(delegate),
            highlight: 0,
            focused: true,
            width: 80,
            empty_text: "Nothing to show.".to_string(),
            indicator: Indicator::default(),
            show_help: true,
            spinner: spinner::Model::new().with_style(styles.spinner.clone()),
            help: help::Model::new().with_width(80),
            keymap: CarouselKeyMap::default(),
            styles,
        };
        model.sync_keys();
        Ok(model)
    }

    /// Creates a carousel with the page size, policy and empty text of `config`.
    pub fn from_config<D>(delegate: D, config: &CarouselConfig) -> Result<Self, window::Error>
    where
        D: ItemDelegate<I> + Send + Sync + 'static,
    {
        Ok(Self::new(delegate, config.page_size, config.policy())?
            .with_empty_text(config.empty_text.clone()))
    }

    /// Sets the title (builder pattern).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the text shown when a load returns no items (builder pattern).
    pub fn with_empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }

    /// Sets the render width (builder pattern).
    pub fn with_width(mut self, width: usize) -> Self {
        self.set_width(width);
        self
    }

    /// Sets the position indicator format (builder pattern).
    pub fn with_indicator(mut self, indicator: Indicator) -> Self {
        self.indicator = indicator;
        self
    }

    /// Shows or hides the help line (builder pattern).
    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    /// Replaces the key bindings (builder pattern).
    pub fn with_keymap(mut self, keymap: CarouselKeyMap) -> Self {
        self.keymap = keymap;
        self.sync_keys();
        self
    }

    /// Fills the carousel directly, without a load (builder pattern).
    pub fn with_items(mut self, items: Vec<I>) -> Self {
        self.set_items(items);
        self
    }

    /// Unique id, matched against load results.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The underlying window.
    pub fn window(&self) -> &Window<I> {
        &self.window
    }

    /// Current load state.
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Render width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Sets the render width; the help line is truncated to it.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
        self.help.width = width;
    }

    /// Replaces the items, resets the window to the start and marks the
    /// carousel ready.
    pub fn set_items(&mut self, items: Vec<I>) {
        self.window.set_items(items);
        self.state = LoadState::Ready;
        self.highlight = 0;
        self.sync_keys();
    }

    /// Returns true if key presses are handled.
    pub fn focused(&self) -> bool {
        self.focused
    }

    /// Starts handling key presses.
    pub fn focus(&mut self) {
        self.focused = true;
        self.sync_keys();
    }

    /// Stops handling key presses.
    pub fn blur(&mut self) {
        self.focused = false;
        self.sync_keys();
    }

    /// Whether the expanded help is shown.
    pub fn show_full_help(&self) -> bool {
        self.help.show_all
    }

    /// The highlighted item and its index in the full list.
    pub fn highlighted(&self) -> Option<(usize, &I)> {
        if self.state != LoadState::Ready {
            return None;
        }
        let (start, _) = self.window.bounds();
        self.window
            .visible()
            .get(self.highlight)
            .map(|item| (start + self.highlight, item))
    }

    /// Shows the next window and moves the highlight to its first item.
    pub fn next(&mut self) {
        if self.window.can_advance() {
            self.window.advance();
            self.highlight = 0;
            self.sync_keys();
        }
    }

    /// Shows the previous window and moves the highlight to its first item.
    pub fn prev(&mut self) {
        if self.window.can_retreat() {
            self.window.retreat();
            self.highlight = 0;
            self.sync_keys();
        }
    }

    /// Moves the highlight up within the visible items.
    pub fn highlight_up(&mut self) {
        self.highlight = self.highlight.saturating_sub(1);
        self.sync_keys();
    }

    /// Moves the highlight down within the visible items.
    pub fn highlight_down(&mut self) {
        let last = self.window.visible().len().saturating_sub(1);
        self.highlight = (self.highlight + 1).min(last);
        self.sync_keys();
    }

    /// Starts a load and returns the command that performs it.
    ///
    /// `fetch` is the caller's request for the records; the carousel shows a
    /// spinner until the command's message comes back through
    /// [`Model::update`]. Starting another load makes the results of any
    /// earlier one stale. Pair the returned command with
    /// [`Model::spinner_tick`] to animate the spinner.
    pub fn load<F, E>(&mut self, fetch: F) -> Cmd
    where
        F: Future<Output = Result<Vec<I>, E>> + Send + 'static,
        E: Display,
    {
        self.generation += 1;
        self.state = LoadState::Loading;
        self.highlight = 0;
        self.sync_keys();

        let carousel_id = self.id;
        let generation = self.generation;
        Box::pin(async move {
            let msg: Msg = match fetch.await {
                Ok(items) => Box::new(LoadedMsg {
                    carousel_id,
                    generation,
                    items,
                }),
                Err(err) => Box::new(LoadFailedMsg {
                    carousel_id,
                    generation,
                    reason: err.to_string(),
                }),
            };
            Some(msg)
        })
    }

    /// Like [`Model::load`], but drops the current items first so nothing
    /// stale stays in the window while the refetch runs or after it fails.
    pub fn reload<F, E>(&mut self, fetch: F) -> Cmd
    where
        F: Future<Output = Result<Vec<I>, E>> + Send + 'static,
        E: Display,
    {
        self.window.set_items(Vec::new());
        self.load(fetch)
    }

    /// Command for the next spinner frame while loading.
    pub fn spinner_tick(&self) -> Option<Cmd> {
        match self.state {
            LoadState::Loading => Some(self.spinner.tick()),
            _ => None,
        }
    }

    /// Enables exactly the bindings that can act in the current state.
    pub(super) fn sync_keys(&mut self) {
        let active = self.focused && self.state == LoadState::Ready;
        let visible = self.window.visible().len();
        let overflow = self.window.layout() == Layout::Overflow;

        self.keymap.prev.set_enabled(active && overflow && self.window.can_retreat());
        self.keymap.next.set_enabled(active && overflow && self.window.can_advance());
        self.keymap.up.set_enabled(active && self.highlight > 0);
        self.keymap.down.set_enabled(active && self.highlight + 1 < visible);
        self.keymap.select.set_enabled(active && visible > 0);
        self.keymap.help.set_enabled(self.focused);
    }
}

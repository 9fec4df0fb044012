//! Core types and traits for carousel components.
//!
//! - [`Item`]: records a carousel can show
//! - [`ItemDelegate`]: renders one record
//! - [`LoadState`]: where the carousel's data fetch stands
//! - [`LoadedMsg`] / [`LoadFailedMsg`]: results of a load command

/// A record shown in a carousel.
///
/// Items travel inside bubbletea messages, so they must be `Send + 'static`.
pub trait Item: Clone + Send + Sync + 'static {
    /// Stable identifier from the service, used in action messages.
    fn id(&self) -> &str;
}

/// Renders a single item.
pub trait ItemDelegate<I: Item> {
    /// Renders `item` within `width` columns. `highlighted` marks the item
    /// that enter would act on.
    fn render(&self, item: &I, highlighted: bool, width: usize) -> String;

    /// Number of lines `render` produces.
    fn height(&self) -> usize {
        1
    }

    /// Blank lines between items.
    fn spacing(&self) -> usize {
        0
    }
}

/// Progress of the carousel's data fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// A load is in flight; items are hidden behind a spinner.
    Loading,
    /// The last load failed with this reason.
    Failed(String),
    /// Items are available (possibly none).
    #[default]
    Ready,
}

/// Items delivered by a load command.
#[derive(Debug, Clone)]
pub struct LoadedMsg<I> {
    /// Carousel that issued the load.
    pub carousel_id: u64,
    /// Load generation, so a slow earlier response cannot overwrite a newer one.
    pub generation: u64,
    /// The records, in server order.
    pub items: Vec<I>,
}

/// A load command that failed.
#[derive(Debug, Clone)]
pub struct LoadFailedMsg {
    /// Carousel that issued the load.
    pub carousel_id: u64,
    /// Load generation.
    pub generation: u64,
    /// Human-readable failure reason.
    pub reason: String,
}

/// Format of the position indicator under the items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indicator {
    /// One dot per position (`○ ● ○`), falling back to numbers past
    /// [`super::style::MAX_DOTS`] positions.
    #[default]
    Dots,
    /// Numbers (`2/3`).
    Arabic,
    /// No indicator.
    Hidden,
}

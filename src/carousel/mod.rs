//! Carousel component: a titled window over records loaded from the service.
//!
//! A carousel shows `page_size` records at a time and pages through them with
//! the left/right keys, following the [`Policy`](crate::window::Policy) it was
//! built with. Around that [`Window`](crate::window::Window) it adds what a
//! screen needs:
//!
//! - **Loading**: [`Model::load`] turns the caller's fetch future into a
//!   bubbletea command; a spinner shows until its result arrives.
//! - **Failure**: a failed fetch is shown inline, never panics.
//! - **Empty state**: an explicit message instead of an empty window.
//! - **Navigation row**: `‹ ● ○ ›` controls, only when the list overflows a
//!   page, with arrows dimmed at a clamped boundary.
//! - **Highlight**: `↑/↓` picks an item in the visible window; owners act on it
//!   when [`CarouselKeyMap::select`] is pressed.
//!
//! Every load result carries the carousel id and a load generation, so a
//! carousel ignores results meant for another carousel or superseded by a
//! newer load.
//!
//! ```rust
//! use vetbook_widgets::carousel::{Item, ItemDelegate, LoadState, Model};
//! use vetbook_widgets::window::Policy;
//!
//! #[derive(Clone)]
//! struct Tag(String);
//!
//! impl Item for Tag {
//!     fn id(&self) -> &str {
//!         &self.0
//!     }
//! }
//!
//! struct Plain;
//!
//! impl ItemDelegate<Tag> for Plain {
//!     fn render(&self, item: &Tag, _highlighted: bool, _width: usize) -> String {
//!         item.0.clone()
//!     }
//! }
//!
//! # tokio_test();
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn tokio_test() {
//! let mut carousel = Model::new(Plain, 3, Policy::POSTS).unwrap();
//! let cmd = carousel.load(async { Ok::<_, String>(vec![Tag("cats".into())]) });
//! assert_eq!(carousel.state(), &LoadState::Loading);
//!
//! let msg = cmd.await.unwrap();
//! carousel.update(&msg);
//! assert_eq!(carousel.state(), &LoadState::Ready);
//! assert_eq!(carousel.window().len(), 1);
//! # }
//! ```

pub mod keys;
mod model;
mod rendering;
pub mod style;
pub mod types;

pub use keys::CarouselKeyMap;
pub use model::Model;
pub use rendering::truncate;
pub use style::CarouselStyles;
pub use types::{Indicator, Item, ItemDelegate, LoadFailedMsg, LoadState, LoadedMsg};

use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};

impl<I: Item> Model<I> {
    /// Handles load results, spinner ticks and key presses.
    ///
    /// Key presses are only handled while focused and [`LoadState::Ready`].
    /// The select binding is left to the owning view.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if let Some(loaded) = msg.downcast_ref::<LoadedMsg<I>>() {
            if !self.owns(loaded.carousel_id, loaded.generation) {
                return None;
            }
            tracing::debug!(
                carousel = self.id,
                title = %self.title,
                items = loaded.items.len(),
                "carousel loaded"
            );
            self.set_items(loaded.items.clone());
            return None;
        }

        if let Some(failed) = msg.downcast_ref::<LoadFailedMsg>() {
            if !self.owns(failed.carousel_id, failed.generation) {
                return None;
            }
            tracing::warn!(
                carousel = self.id,
                title = %self.title,
                reason = %failed.reason,
                "carousel load failed"
            );
            self.state = LoadState::Failed(failed.reason.clone());
            self.sync_keys();
            return None;
        }

        if self.state == LoadState::Loading {
            return self.spinner.update(msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            self.handle_key(key_msg);
        }
        None
    }

    fn owns(&self, carousel_id: u64, generation: u64) -> bool {
        if carousel_id != self.id {
            return false;
        }
        if generation != self.generation {
            tracing::trace!(
                carousel = self.id,
                stale = generation,
                current = self.generation,
                "dropping stale load result"
            );
            return false;
        }
        true
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) {
        if !self.focused {
            return;
        }
        if self.keymap.help.matches(key_msg) {
            self.help.show_all = !self.help.show_all;
        } else if self.keymap.next.matches(key_msg) {
            self.next();
        } else if self.keymap.prev.matches(key_msg) {
            self.prev();
        } else if self.keymap.down.matches(key_msg) {
            self.highlight_down();
        } else if self.keymap.up.matches(key_msg) {
            self.highlight_up();
        }
    }
}

impl<I: Item> Component for Model<I> {
    fn focus(&mut self) -> Option<Cmd> {
        Model::focus(self);
        None
    }

    fn blur(&mut self) {
        Model::blur(self);
    }

    fn focused(&self) -> bool {
        Model::focused(self)
    }
}

#[cfg(test)]
mod tests;

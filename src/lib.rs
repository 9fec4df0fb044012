#![warn(missing_docs)]

//! # vetbook-widgets
//!
//! Terminal components for the vetbook client, built on
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs) and lipgloss.
//!
//! ## Overview
//!
//! The home screen of the client shows two lists fetched from the service: the
//! clinics a customer can book, and the knowledge-base posts anyone can read.
//! Both are carousels: a fixed number of records at a time, with arrow
//! controls that page through the rest. They differ in how they move:
//!
//! - **Clinics** page a full window at a time and wrap around at either end.
//! - **Posts** slide one post at a time and stop at the first and last window.
//!
//! That movement lives in [`window::Window`], which knows nothing about
//! terminals and can be tested on its own. [`carousel::Model`] wraps a window
//! with loading, error and empty states, key bindings and rendering.
//! [`ClinicCarousel`] and [`KnowledgePostList`] are the two concrete screens.
//!
//! ## Components
//!
//! - **Window**: [`Window`], [`Policy`] (the pure paging rules)
//! - **Carousel**: [`Carousel`], [`ClinicCarousel`], [`KnowledgePostList`]
//! - **Support**: [`Spinner`], [`HelpModel`], [`key`] bindings, [`Session`]
//!
//! ## Focus Management
//!
//! Carousels implement the [`Component`] trait, so a screen can move keyboard
//! focus between them:
//!
//! ```rust
//! use vetbook_widgets::prelude::*;
//!
//! let mut clinics = ClinicCarousel::new().unwrap();
//! let mut posts = KnowledgePostList::new().unwrap();
//!
//! clinics.carousel_mut().blur();
//! assert!(!clinics.carousel().focused());
//! assert!(posts.carousel().focused());
//!
//! let _ = Component::focus(clinics.carousel_mut());
//! Component::blur(posts.carousel_mut());
//! assert!(clinics.carousel().focused());
//! ```
//!
//! ## Configuration
//!
//! Page sizes, boundary behavior and empty-state text can be tuned from TOML;
//! see [`config`].
//!
//! ```rust
//! use vetbook_widgets::{Config, ClinicCarousel};
//!
//! let config = Config::from_toml_str("[clinics]\npage_size = 2\n").unwrap();
//! let clinics = ClinicCarousel::from_config(&config.clinics).unwrap();
//! assert_eq!(clinics.carousel().window().page_size(), 2);
//! ```
//!
//! ## Logging
//!
//! Components emit [`tracing`](https://docs.rs/tracing) events (window moves at
//! `debug`, load failures at `warn`). Install any subscriber to see them.

pub mod carousel;
pub mod clinic;
pub mod config;
pub mod help;
pub mod key;
pub mod post;
pub mod session;
pub mod spinner;
pub mod window;

use bubbletea_rs::Cmd;

/// Core trait for components that take keyboard focus.
///
/// A screen with several carousels keeps exactly one focused; only the
/// focused one reacts to key presses.
///
/// ```rust
/// use vetbook_widgets::prelude::*;
///
/// fn handle_focus<T: Component>(component: &mut T) {
///     let _cmd = component.focus();
///     assert!(component.focused());
///     component.blur();
///     assert!(!component.focused());
/// }
///
/// let mut posts = KnowledgePostList::new().unwrap();
/// handle_focus(posts.carousel_mut());
/// ```
pub trait Component {
    /// Sets the component to focused state.
    ///
    /// May return a command to run on focus, such as starting an animation.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    fn blur(&mut self);

    /// Returns true if the component is focused.
    fn focused(&self) -> bool;
}

pub use carousel::{
    CarouselKeyMap, CarouselStyles, Indicator, Item, ItemDelegate, LoadState, Model as Carousel,
};
pub use clinic::{BookClinicMsg, Clinic, ClinicCarousel, ClinicDelegate};
pub use config::{CarouselConfig, Config, ConfigError};
pub use help::Model as HelpModel;
pub use key::{
    matches, new_binding, with_disabled, with_help, with_keys, with_keys_str, Binding,
    Help as KeyHelp, KeyMap, KeyPress,
};
pub use post::{KnowledgePost, KnowledgePostList, OpenPostMsg, PostDelegate};
pub use session::{Role, Session, User};
pub use spinner::{Model as Spinner, TickMsg as SpinnerTickMsg};
pub use window::{Boundary, Layout, Policy, Step, Window};

/// Prelude module for convenient imports.
///
/// ```rust
/// use vetbook_widgets::prelude::*;
///
/// let session = Session::guest();
/// let clinics = ClinicCarousel::new().unwrap();
/// assert!(clinics.view(&session).contains("No clinics found."));
/// ```
pub mod prelude {
    pub use crate::carousel::{Item, ItemDelegate, LoadState, Model as Carousel};
    pub use crate::clinic::{BookClinicMsg, Clinic, ClinicCarousel};
    pub use crate::config::{CarouselConfig, Config};
    pub use crate::key::{Binding, KeyMap};
    pub use crate::post::{KnowledgePost, KnowledgePostList, OpenPostMsg};
    pub use crate::session::{Role, Session, User};
    pub use crate::window::{Boundary, Policy, Step, Window};
    pub use crate::Component;
}

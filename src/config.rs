//! Carousel settings loaded from TOML.
//!
//! ```toml
//! [clinics]
//! page_size = 3
//! boundary = "wrap"
//! step = "page"
//! empty_text = "No clinics found."
//!
//! [posts]
//! page_size = 3
//! boundary = "clamp"
//! step = "item"
//! ```
//!
//! Every key is optional; missing keys fall back to the defaults for that
//! carousel.

use crate::window::{self, Boundary, Policy, Step, Window};
use serde::Deserialize;
use thiserror::Error;

/// Errors from reading or applying configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML could not be parsed into a [`Config`].
    #[error("invalid carousel config: {0}")]
    Parse(#[from] toml::de::Error),
    /// The values parsed but describe an impossible window.
    #[error(transparent)]
    Window(#[from] window::Error),
}

/// Settings for one carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselConfig {
    /// Items shown at once.
    pub page_size: usize,
    /// Behavior at the ends of the list.
    pub boundary: Boundary,
    /// Distance of one move.
    pub step: Step,
    /// Text shown when there is nothing to list.
    pub empty_text: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            page_size: 3,
            boundary: Boundary::default(),
            step: Step::default(),
            empty_text: "Nothing to show.".to_string(),
        }
    }
}

impl CarouselConfig {
    /// Defaults for the clinic carousel.
    pub fn clinics() -> Self {
        Self {
            boundary: Policy::CLINIC.boundary,
            step: Policy::CLINIC.step,
            empty_text: "No clinics found.".to_string(),
            ..Self::default()
        }
    }

    /// Defaults for the knowledge-post list.
    pub fn posts() -> Self {
        Self {
            boundary: Policy::POSTS.boundary,
            step: Policy::POSTS.step,
            empty_text: "No posts yet.".to_string(),
            ..Self::default()
        }
    }

    /// The navigation policy described by this config.
    pub fn policy(&self) -> Policy {
        Policy::new(self.boundary, self.step)
    }

    /// Builds a window over `items` with these settings.
    pub fn window<T>(&self, items: Vec<T>) -> Result<Window<T>, window::Error> {
        Window::new(items, self.page_size, self.policy())
    }
}

/// One `[section]` as written; absent keys keep the carousel's defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct Section {
    page_size: Option<usize>,
    boundary: Option<Boundary>,
    step: Option<Step>,
    empty_text: Option<String>,
}

impl Section {
    fn apply(self, base: CarouselConfig) -> CarouselConfig {
        CarouselConfig {
            page_size: self.page_size.unwrap_or(base.page_size),
            boundary: self.boundary.unwrap_or(base.boundary),
            step: self.step.unwrap_or(base.step),
            empty_text: self.empty_text.unwrap_or(base.empty_text),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    clinics: Section,
    #[serde(default)]
    posts: Section,
}

/// Settings for every carousel in the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Clinic carousel.
    pub clinics: CarouselConfig,
    /// Knowledge-post list.
    pub posts: CarouselConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clinics: CarouselConfig::clinics(),
            posts: CarouselConfig::posts(),
        }
    }
}

impl Config {
    /// Parses a TOML document, filling gaps with each carousel's defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML, unknown keys or
    /// unknown values, and [`ConfigError::Window`] when a page size is 0.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(text)?;
        let config = Self {
            clinics: raw.clinics.apply(CarouselConfig::clinics()),
            posts: raw.posts.apply(CarouselConfig::posts()),
        };
        for section in [&config.clinics, &config.posts] {
            if section.page_size == 0 {
                return Err(window::Error::ZeroPageSize.into());
            }
        }
        Ok(config)
    }
}

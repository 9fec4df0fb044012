//! Clinic listings.
//!
//! [`Clinic`] mirrors a record from the clinic listing endpoint.
//! [`ClinicCarousel`] pages through clinics three at a time, wrapping at
//! both ends, and lets a signed-in customer book the highlighted clinic.
//!
//! ```rust
//! use vetbook_widgets::clinic::{Clinic, ClinicCarousel};
//! use vetbook_widgets::session::Session;
//!
//! let clinics: Vec<Clinic> = serde_json::from_str(r#"[
//!     {"id": "c1", "name": "Riverside Animal Hospital", "address": "12 River Rd",
//!      "rating": 4.6, "reviewCount": 128, "services": ["Surgery", "Dental"]}
//! ]"#).unwrap();
//!
//! let carousel = ClinicCarousel::new().unwrap().with_items(clinics);
//! let view = carousel.view(&Session::guest());
//! assert!(lipgloss_extras::lipgloss::strip_ansi(&view).contains("Riverside Animal Hospital"));
//! ```

use crate::carousel::{self, truncate, CarouselKeyMap, Item, ItemDelegate};
use crate::config::CarouselConfig;
use crate::session::Session;
use crate::window;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use lipgloss_extras::prelude::*;
use serde::Deserialize;
use std::fmt::Display;
use std::future::Future;

/// A clinic as returned by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clinic {
    /// Clinic id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Street address.
    #[serde(default)]
    pub address: String,
    /// Contact phone.
    #[serde(default)]
    pub phone: Option<String>,
    /// Average review rating out of 5, absent until reviewed.
    #[serde(default)]
    pub rating: Option<f32>,
    /// Number of reviews behind `rating`.
    #[serde(default)]
    pub review_count: u32,
    /// Services offered.
    #[serde(default)]
    pub services: Vec<String>,
}

impl Item for Clinic {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Clinic {
    /// Rating summary such as `★ 4.6 (128)`, or `No reviews yet`.
    pub fn rating_label(&self) -> String {
        match self.rating {
            Some(rating) if self.review_count > 0 => {
                format!("★ {:.1} ({})", rating, self.review_count)
            }
            _ => "No reviews yet".to_string(),
        }
    }
}

/// Styles for a rendered clinic.
#[derive(Debug, Clone)]
pub struct ClinicStyles {
    /// Name of an ordinary clinic.
    pub name: Style,
    /// Name of the highlighted clinic.
    pub highlighted_name: Style,
    /// Rating label.
    pub rating: Style,
    /// Address and services line.
    pub detail: Style,
}

impl Default for ClinicStyles {
    fn default() -> Self {
        Self {
            name: Style::new().foreground(AdaptiveColor {
                Light: "#1A1A1A",
                Dark: "#DDDDDD",
            }),
            highlighted_name: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#1F6F5C",
                    Dark: "#6FD3B8",
                })
                .bold(true),
            rating: Style::new().foreground(AdaptiveColor {
                Light: "#B7791F",
                Dark: "#F6C453",
            }),
            detail: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
        }
    }
}

/// Renders a clinic as a name/rating line over an address/services line.
#[derive(Debug, Clone, Default)]
pub struct ClinicDelegate {
    /// Styles.
    pub styles: ClinicStyles,
}

impl ItemDelegate<Clinic> for ClinicDelegate {
    fn render(&self, clinic: &Clinic, highlighted: bool, width: usize) -> String {
        let marker = if highlighted { "> " } else { "  " };
        let rating = clinic.rating_label();
        let name_width = width.saturating_sub(marker.len() + rating.chars().count() + 2);
        let name = truncate(&clinic.name, name_width);
        let name_style = if highlighted {
            &self.styles.highlighted_name
        } else {
            &self.styles.name
        };

        let mut detail = clinic.address.clone();
        if !clinic.services.is_empty() {
            if !detail.is_empty() {
                detail.push_str(" · ");
            }
            detail.push_str(&clinic.services.join(", "));
        }
        let detail = truncate(&detail, width.saturating_sub(marker.len()));

        format!(
            "{}{}  {}\n  {}",
            marker,
            name_style.clone().render(&name),
            self.styles.rating.clone().render(&rating),
            self.styles.detail.clone().render(&detail)
        )
    }

    fn height(&self) -> usize {
        2
    }

    fn spacing(&self) -> usize {
        1
    }
}

/// Request to open the booking flow for a clinic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookClinicMsg {
    /// The clinic to book.
    pub clinic_id: String,
}

/// Wrapping carousel of clinics with a booking action for customers.
#[derive(Debug)]
pub struct ClinicCarousel {
    inner: carousel::Model<Clinic>,
}

impl ClinicCarousel {
    /// Creates the carousel with the default clinic settings.
    pub fn new() -> Result<Self, window::Error> {
        Self::from_config(&CarouselConfig::clinics())
    }

    /// Creates the carousel from configuration.
    pub fn from_config(config: &CarouselConfig) -> Result<Self, window::Error> {
        let inner = carousel::Model::from_config(ClinicDelegate::default(), config)?
            .with_title("Clinics")
            .with_keymap(CarouselKeyMap::default().with_select_help("book"));
        Ok(Self { inner })
    }

    /// Fills the carousel directly (builder pattern).
    pub fn with_items(mut self, clinics: Vec<Clinic>) -> Self {
        self.inner.set_items(clinics);
        self
    }

    /// The generic carousel underneath.
    pub fn carousel(&self) -> &carousel::Model<Clinic> {
        &self.inner
    }

    /// Mutable access to the generic carousel.
    pub fn carousel_mut(&mut self) -> &mut carousel::Model<Clinic> {
        &mut self.inner
    }

    /// Starts loading clinics from `fetch`; see [`carousel::Model::load`].
    pub fn load<F, E>(&mut self, fetch: F) -> Cmd
    where
        F: Future<Output = Result<Vec<Clinic>, E>> + Send + 'static,
        E: Display,
    {
        self.inner.load(fetch)
    }

    /// Refetches clinics, clearing the current ones; see [`carousel::Model::reload`].
    pub fn reload<F, E>(&mut self, fetch: F) -> Cmd
    where
        F: Future<Output = Result<Vec<Clinic>, E>> + Send + 'static,
        E: Display,
    {
        self.inner.reload(fetch)
    }

    /// Handles a message on behalf of `session`.
    ///
    /// Enter on a highlighted clinic yields a [`BookClinicMsg`] when the
    /// session may book; for anyone else it does nothing.
    pub fn update(&mut self, msg: &Msg, session: &Session) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.inner.focused() && self.inner.keymap.select.matches(key_msg) {
                return self.book(session);
            }
        }
        self.inner.update(msg)
    }

    fn book(&self, session: &Session) -> Option<Cmd> {
        if !session.can_book() {
            tracing::debug!(signed_in = session.is_signed_in(), "booking not allowed");
            return None;
        }
        let (_, clinic) = self.inner.highlighted()?;
        let clinic_id = clinic.id.clone();
        tracing::debug!(clinic = %clinic_id, "booking requested");
        Some(Box::pin(async move {
            Some(Box::new(BookClinicMsg { clinic_id }) as Msg)
        }))
    }

    /// Renders the carousel for `session`; the booking hint only shows for
    /// viewers who can book.
    pub fn view(&self, session: &Session) -> String {
        let mut keymap = self.inner.keymap.clone();
        let select_enabled = keymap.select.enabled() && session.can_book();
        keymap.select.set_enabled(select_enabled);
        self.inner.view_with_keymap(&keymap)
    }
}

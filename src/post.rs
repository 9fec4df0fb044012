//! Knowledge-base posts.
//!
//! [`KnowledgePostList`] slides through posts one at a time, stopping at the
//! first and last full window. Reading is public, so opening a post does not
//! depend on who is signed in.

use crate::carousel::{self, truncate, CarouselKeyMap, Item, ItemDelegate};
use crate::config::CarouselConfig;
use crate::window;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use lipgloss_extras::prelude::*;
use serde::Deserialize;
use std::fmt::Display;
use std::future::Future;

/// A post as returned by the knowledge-base endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgePost {
    /// Post id.
    pub id: String,
    /// Headline.
    pub title: String,
    /// Author's display name.
    #[serde(default)]
    pub author: Option<String>,
    /// Short summary shown under the title.
    #[serde(default)]
    pub excerpt: String,
    /// Publication date as sent by the service (ISO 8601).
    #[serde(default)]
    pub published_at: Option<String>,
    /// Topic tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Item for KnowledgePost {
    fn id(&self) -> &str {
        &self.id
    }
}

impl KnowledgePost {
    /// `by Dr. Lee · 2024-03-02`, with whichever parts are known.
    pub fn byline(&self) -> String {
        let date = self
            .published_at
            .as_deref()
            .map(|d| d.split('T').next().unwrap_or(d));
        match (self.author.as_deref(), date) {
            (Some(author), Some(date)) => format!("by {} · {}", author, date),
            (Some(author), None) => format!("by {}", author),
            (None, Some(date)) => date.to_string(),
            (None, None) => String::new(),
        }
    }
}

/// Styles for a rendered post.
#[derive(Debug, Clone)]
pub struct PostStyles {
    /// Title of an ordinary post.
    pub title: Style,
    /// Title of the highlighted post.
    pub highlighted_title: Style,
    /// Byline.
    pub byline: Style,
    /// Excerpt.
    pub excerpt: Style,
}

impl Default for PostStyles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#A49FA5",
            Dark: "#777777",
        };
        Self {
            title: Style::new().foreground(AdaptiveColor {
                Light: "#1A1A1A",
                Dark: "#DDDDDD",
            }),
            highlighted_title: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#1F6F5C",
                    Dark: "#6FD3B8",
                })
                .bold(true),
            byline: Style::new().foreground(subdued.clone()).italic(true),
            excerpt: Style::new().foreground(subdued),
        }
    }
}

/// Renders a post as title, byline and a one-line excerpt, always three lines.
#[derive(Debug, Clone, Default)]
pub struct PostDelegate {
    /// Styles.
    pub styles: PostStyles,
}

impl ItemDelegate<KnowledgePost> for PostDelegate {
    fn render(&self, post: &KnowledgePost, highlighted: bool, width: usize) -> String {
        let marker = if highlighted { "> " } else { "  " };
        let inner = width.saturating_sub(marker.len());
        let title_style = if highlighted {
            &self.styles.highlighted_title
        } else {
            &self.styles.title
        };

        // Missing parts leave a blank line so every card is `height()` tall.
        let title = format!(
            "{}{}",
            marker,
            title_style.clone().render(&truncate(&post.title, inner))
        );
        let byline = match post.byline() {
            b if b.is_empty() => String::new(),
            b => format!("  {}", self.styles.byline.clone().render(&truncate(&b, inner))),
        };
        let excerpt = post.excerpt.split_whitespace().collect::<Vec<_>>().join(" ");
        let excerpt = if excerpt.is_empty() {
            String::new()
        } else {
            format!("  {}", self.styles.excerpt.clone().render(&truncate(&excerpt, inner)))
        };
        [title, byline, excerpt].join("\n")
    }

    fn height(&self) -> usize {
        3
    }

    fn spacing(&self) -> usize {
        1
    }
}

/// Request to open a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenPostMsg {
    /// The post to open.
    pub post_id: String,
}

/// Clamped, item-by-item list of knowledge-base posts.
#[derive(Debug)]
pub struct KnowledgePostList {
    inner: carousel::Model<KnowledgePost>,
}

impl KnowledgePostList {
    /// Creates the list with the default post settings.
    pub fn new() -> Result<Self, window::Error> {
        Self::from_config(&CarouselConfig::posts())
    }

    /// Creates the list from configuration.
    pub fn from_config(config: &CarouselConfig) -> Result<Self, window::Error> {
        let inner = carousel::Model::from_config(PostDelegate::default(), config)?
            .with_title("Knowledge base")
            .with_keymap(CarouselKeyMap::default().with_select_help("read"));
        Ok(Self { inner })
    }

    /// Fills the list directly (builder pattern).
    pub fn with_items(mut self, posts: Vec<KnowledgePost>) -> Self {
        self.inner.set_items(posts);
        self
    }

    /// The generic carousel underneath.
    pub fn carousel(&self) -> &carousel::Model<KnowledgePost> {
        &self.inner
    }

    /// Mutable access to the generic carousel.
    pub fn carousel_mut(&mut self) -> &mut carousel::Model<KnowledgePost> {
        &mut self.inner
    }

    /// Starts loading posts from `fetch`; see [`carousel::Model::load`].
    pub fn load<F, E>(&mut self, fetch: F) -> Cmd
    where
        F: Future<Output = Result<Vec<KnowledgePost>, E>> + Send + 'static,
        E: Display,
    {
        self.inner.load(fetch)
    }

    /// Refetches posts, clearing the current ones; see [`carousel::Model::reload`].
    pub fn reload<F, E>(&mut self, fetch: F) -> Cmd
    where
        F: Future<Output = Result<Vec<KnowledgePost>, E>> + Send + 'static,
        E: Display,
    {
        self.inner.reload(fetch)
    }

    /// Handles a message. Enter on a highlighted post yields an [`OpenPostMsg`].
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.inner.focused() && self.inner.keymap.select.matches(key_msg) {
                let (_, post) = self.inner.highlighted()?;
                let post_id = post.id.clone();
                tracing::debug!(post = %post_id, "opening post");
                return Some(Box::pin(async move {
                    Some(Box::new(OpenPostMsg { post_id }) as Msg)
                }));
            }
        }
        self.inner.update(msg)
    }

    /// Renders the list.
    pub fn view(&self) -> String {
        self.inner.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use lipgloss_extras::lipgloss;

    fn post(id: &str) -> KnowledgePost {
        KnowledgePost {
            id: id.to_string(),
            title: format!("Post {id}"),
            author: Some("Dr. Lee".to_string()),
            excerpt: "Keep your  dog\nhydrated.".to_string(),
            published_at: Some("2024-03-02T10:00:00Z".to_string()),
            tags: vec!["dogs".to_string()],
        }
    }

    fn posts() -> Vec<KnowledgePost> {
        ["p1", "p2", "p3", "p4", "p5"].iter().map(|id| post(id)).collect()
    }

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_deserialize_post() {
        let json = r#"{"id": "p9", "title": "Ticks 101", "publishedAt": "2024-05-01",
                       "tags": ["parasites"], "likes": 12}"#;
        let p: KnowledgePost = serde_json::from_str(json).unwrap();
        assert_eq!(p.published_at.as_deref(), Some("2024-05-01"));
        assert_eq!(p.author, None);
        assert!(p.excerpt.is_empty());
    }

    #[test]
    fn test_byline_variants() {
        let mut p = post("p1");
        assert_eq!(p.byline(), "by Dr. Lee · 2024-03-02");
        p.published_at = None;
        assert_eq!(p.byline(), "by Dr. Lee");
        p.author = None;
        assert_eq!(p.byline(), "");
        p.published_at = Some("2024-01-09".to_string());
        assert_eq!(p.byline(), "2024-01-09");
    }

    #[test]
    fn test_delegate_render() {
        let out = lipgloss::strip_ansi(&PostDelegate::default().render(&post("p1"), false, 80));
        assert_eq!(
            out.lines().collect::<Vec<_>>(),
            vec!["  Post p1", "  by Dr. Lee · 2024-03-02", "  Keep your dog hydrated."]
        );
    }

    #[test]
    fn test_sparse_post_keeps_card_height() {
        let sparse = KnowledgePost {
            id: "p0".to_string(),
            title: "Untitled".to_string(),
            author: None,
            excerpt: "  ".to_string(),
            published_at: None,
            tags: Vec::new(),
        };
        let delegate = PostDelegate::default();
        let out = lipgloss::strip_ansi(&delegate.render(&sparse, true, 80));
        assert_eq!(out.split('\n').collect::<Vec<_>>(), vec!["> Untitled", "", ""]);
        assert_eq!(out.split('\n').count(), delegate.height());
    }

    #[test]
    fn test_reload_clears_posts() {
        let mut list = KnowledgePostList::new().unwrap().with_items(posts());
        let _cmd = list.reload(async { Ok::<_, String>(Vec::new()) });
        assert!(list.carousel().window().is_empty());
    }

    #[test]
    fn test_list_steps_one_post_and_clamps() {
        let mut list = KnowledgePostList::new().unwrap().with_items(posts());
        let ids = |l: &KnowledgePostList| {
            l.carousel()
                .window()
                .visible()
                .iter()
                .map(|p| p.id.clone())
                .collect::<Vec<_>>()
        };

        list.update(&key(KeyCode::Right));
        assert_eq!(ids(&list), vec!["p2", "p3", "p4"]);
        list.update(&key(KeyCode::Right));
        list.update(&key(KeyCode::Right));
        assert_eq!(ids(&list), vec!["p3", "p4", "p5"]);

        list.update(&key(KeyCode::Left));
        list.update(&key(KeyCode::Left));
        list.update(&key(KeyCode::Left));
        assert_eq!(ids(&list), vec!["p1", "p2", "p3"]);
    }

    #[tokio::test]
    async fn test_enter_opens_highlighted_post() {
        let mut list = KnowledgePostList::new().unwrap().with_items(posts());
        list.update(&key(KeyCode::Right));
        list.update(&key(KeyCode::Down));

        let cmd = list.update(&key(KeyCode::Enter)).expect("open command");
        let msg = cmd.await.expect("open message");
        assert_eq!(
            msg.downcast_ref::<OpenPostMsg>(),
            Some(&OpenPostMsg {
                post_id: "p3".to_string()
            })
        );
    }

    #[test]
    fn test_empty_list_message() {
        let list = KnowledgePostList::new().unwrap();
        let view = lipgloss::strip_ansi(&list.view());
        assert!(view.contains("Knowledge base"));
        assert!(view.contains("No posts yet."));
    }

    #[test]
    fn test_single_page_has_no_controls() {
        let list = KnowledgePostList::new()
            .unwrap()
            .with_items(posts().into_iter().take(3).collect());
        let view = lipgloss::strip_ansi(&list.view());
        assert!(view.contains("Post p3"));
        assert!(!view.contains('‹'));
        assert!(!view.contains("next"));
    }
}

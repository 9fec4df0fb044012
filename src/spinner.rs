//! Loading indicator shown while a carousel waits for its items.
//!
//! The spinner advances one frame per [`TickMsg`]. Each spinner has its own id
//! and a tag that changes on every frame, so ticks addressed to another
//! spinner, or duplicate ticks for this one, are ignored and the animation
//! keeps a steady rate.
//!
//! ```rust
//! use vetbook_widgets::spinner::{Model, DOTS};
//!
//! let mut spinner = Model::new().with_frames(DOTS.clone());
//! let first = spinner.view();
//! let tick = spinner.tick_msg();
//! spinner.update(&(Box::new(tick) as bubbletea_rs::Msg));
//! assert_ne!(first, spinner.view());
//! ```

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use lipgloss_extras::prelude::*;
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Animation frames and the delay between them.
#[derive(Debug, Clone, PartialEq)]
pub struct Frames {
    /// Frames shown in order, then repeated.
    pub frames: Vec<String>,
    /// Delay between frames.
    pub fps: Duration,
}

impl Frames {
    /// Creates a frame set.
    pub fn new(frames: Vec<String>, fps: Duration) -> Self {
        Self { frames, fps }
    }
}

/// A plain ASCII line spinner.
pub static LINE: Lazy<Frames> = Lazy::new(|| Frames {
    frames: ["|", "/", "-", "\\"].iter().map(|s| s.to_string()).collect(),
    fps: Duration::from_millis(100),
});

/// Braille dots, the default loading indicator.
pub static DOTS: Lazy<Frames> = Lazy::new(|| Frames {
    frames: ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    fps: Duration::from_millis(83),
});

/// A paw print that fades in and out.
pub static PAWS: Lazy<Frames> = Lazy::new(|| Frames {
    frames: ["·  ", "·· ", "···", " ··", "  ·", "   "]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    fps: Duration::from_millis(150),
});

/// Message asking a spinner to advance one frame.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// The spinner this tick is for.
    pub id: i64,
    tag: i64,
}

/// Spinner state.
#[derive(Debug, Clone)]
pub struct Model {
    /// Frames to animate.
    pub frames: Frames,
    /// Style applied to the current frame.
    pub style: Style,
    frame: usize,
    id: i64,
    tag: i64,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// Creates a spinner using [`DOTS`].
    pub fn new() -> Self {
        Self {
            frames: DOTS.clone(),
            style: Style::new(),
            frame: 0,
            id: next_id(),
            tag: 0,
        }
    }

    /// Sets the frames (builder pattern).
    pub fn with_frames(mut self, frames: Frames) -> Self {
        self.frames = frames;
        self.frame = 0;
        self
    }

    /// Sets the style (builder pattern).
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// This spinner's id.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// A tick addressed to this spinner in its current state.
    pub fn tick_msg(&self) -> TickMsg {
        TickMsg {
            id: self.id,
            tag: self.tag,
        }
    }

    /// Command that delivers the next tick after one frame delay.
    pub fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(self.frames.fps, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    /// Advances on a matching tick and schedules the next one.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        let tick = msg.downcast_ref::<TickMsg>()?;
        if tick.id > 0 && tick.id != self.id {
            return None;
        }
        if tick.tag > 0 && tick.tag != self.tag {
            return None;
        }

        self.frame += 1;
        if self.frame >= self.frames.frames.len() {
            self.frame = 0;
        }
        self.tag += 1;
        Some(self.tick())
    }

    /// Renders the current frame.
    pub fn view(&self) -> String {
        match self.frames.frames.get(self.frame) {
            Some(frame) => self.style.render(frame),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(tick: TickMsg) -> Msg {
        Box::new(tick)
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Model::new();
        let b = Model::new();
        assert_ne!(a.id(), b.id());
        assert!(a.id() > 0);
    }

    #[test]
    fn test_rejects_foreign_tick() {
        let mut spinner = Model::new();
        let foreign = TickMsg {
            id: spinner.id() + 1000,
            tag: 0,
        };
        assert!(spinner.update(&boxed(foreign)).is_none());
    }

    #[test]
    fn test_rejects_stale_tag() {
        let mut spinner = Model::new().with_frames(LINE.clone());
        let first = spinner.tick_msg();
        assert!(spinner.update(&boxed(first.clone())).is_some());
        // tag 0 is treated as untagged, so age the tag once more first
        assert!(spinner.update(&boxed(spinner.tick_msg())).is_some());
        let stale = TickMsg {
            id: spinner.id(),
            tag: 1,
        };
        assert!(spinner.update(&boxed(stale)).is_none());
    }

    #[test]
    fn test_frames_wrap() {
        let mut spinner = Model::new().with_frames(LINE.clone());
        for expected in ["|", "/", "-", "\\", "|"] {
            assert_eq!(spinner.view(), expected);
            let tick = spinner.tick_msg();
            spinner.update(&boxed(tick));
        }
    }

    #[test]
    fn test_ignores_other_messages() {
        let mut spinner = Model::new();
        let msg: Msg = Box::new(42u32);
        assert!(spinner.update(&msg).is_none());
    }
}

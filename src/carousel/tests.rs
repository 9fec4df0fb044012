use super::*;
use crate::window::{Boundary, Policy, Step};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::lipgloss;

#[derive(Debug, Clone, PartialEq)]
struct Pet {
    id: String,
}

impl Item for Pet {
    fn id(&self) -> &str {
        &self.id
    }
}

struct Plain;

impl ItemDelegate<Pet> for Plain {
    fn render(&self, item: &Pet, highlighted: bool, _width: usize) -> String {
        if highlighted {
            format!("> {}", item.id)
        } else {
            format!("  {}", item.id)
        }
    }
}

fn pets(names: &[&str]) -> Vec<Pet> {
    names.iter().map(|n| Pet { id: n.to_string() }).collect()
}

fn five() -> Vec<Pet> {
    pets(&["A", "B", "C", "D", "E"])
}

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    })
}

fn visible_ids<I: Item>(m: &Model<I>) -> Vec<String> {
    m.window().visible().iter().map(|p| p.id().to_string()).collect()
}

fn plain(view: &str) -> String {
    lipgloss::strip_ansi(view)
}

#[test]
fn test_zero_page_size_fails_fast() {
    assert!(Model::<Pet>::new(Plain, 0, Policy::CLINIC).is_err());
}

#[test]
fn test_keys_navigate_wrapping_window() {
    let mut m = Model::new(Plain, 3, Policy::CLINIC).unwrap().with_items(five());
    assert_eq!(visible_ids(&m), vec!["A", "B", "C"]);

    m.update(&key(KeyCode::Right));
    assert_eq!(visible_ids(&m), vec!["D", "E"]);

    m.update(&key(KeyCode::Char('l')));
    assert_eq!(visible_ids(&m), vec!["A", "B", "C"]);

    m.update(&key(KeyCode::Left));
    assert_eq!(visible_ids(&m), vec!["C", "D", "E"]);
}

#[test]
fn test_keys_navigate_clamped_window() {
    let mut m = Model::new(Plain, 3, Policy::POSTS).unwrap().with_items(five());
    for _ in 0..5 {
        m.update(&key(KeyCode::PageDown));
    }
    assert_eq!(m.window().cursor(), 2);
    assert!(!m.keymap.next.enabled());
    assert!(m.keymap.prev.enabled());
}

#[test]
fn test_single_page_disables_navigation_keys() {
    let mut m = Model::new(Plain, 3, Policy::CLINIC).unwrap().with_items(pets(&["A", "B"]));
    assert!(!m.keymap.next.enabled());
    assert!(!m.keymap.prev.enabled());

    m.update(&key(KeyCode::Right));
    assert_eq!(m.window().cursor(), 0);

    let view = plain(&m.view());
    assert!(!view.contains('‹'));
    assert!(!view.contains('›'));
}

#[test]
fn test_highlight_moves_within_visible_window() {
    let mut m = Model::new(Plain, 3, Policy::CLINIC).unwrap().with_items(five());
    assert_eq!(m.highlighted().map(|(i, _)| i), Some(0));

    m.update(&key(KeyCode::Down));
    m.update(&key(KeyCode::Char('j')));
    m.update(&key(KeyCode::Down));
    assert_eq!(m.highlighted().map(|(i, p)| (i, p.id.as_str())), Some((2, "C")));

    m.update(&key(KeyCode::Right));
    assert_eq!(m.highlighted().map(|(i, p)| (i, p.id.as_str())), Some((3, "D")));

    m.update(&key(KeyCode::Down));
    m.update(&key(KeyCode::Down));
    assert_eq!(m.highlighted().map(|(i, _)| i), Some(4));

    m.update(&key(KeyCode::Up));
    assert_eq!(m.highlighted().map(|(i, _)| i), Some(3));
}

#[test]
fn test_blurred_carousel_ignores_keys() {
    let mut m = Model::new(Plain, 3, Policy::CLINIC).unwrap().with_items(five());
    m.blur();
    m.update(&key(KeyCode::Right));
    assert_eq!(m.window().cursor(), 0);

    m.focus();
    m.update(&key(KeyCode::Right));
    assert_eq!(m.window().cursor(), 3);
}

#[test]
fn test_help_toggle() {
    let mut m = Model::new(Plain, 3, Policy::CLINIC).unwrap().with_items(five());
    assert!(!m.show_full_help());
    m.update(&key(KeyCode::Char('?')));
    assert!(m.show_full_help());
}

#[tokio::test]
async fn test_load_success_resets_window() {
    let mut m = Model::new(Plain, 3, Policy::CLINIC).unwrap().with_items(five());
    m.next();
    assert_eq!(m.window().cursor(), 3);

    let cmd = m.load(async { Ok::<_, String>(pets(&["X", "Y", "Z", "W"])) });
    assert_eq!(m.state(), &LoadState::Loading);
    assert!(m.highlighted().is_none());
    assert!(m.spinner_tick().is_some());

    let msg = cmd.await.expect("load yields a message");
    m.update(&msg);
    assert_eq!(m.state(), &LoadState::Ready);
    assert_eq!(m.window().cursor(), 0);
    assert_eq!(visible_ids(&m), vec!["X", "Y", "Z"]);
    assert!(m.spinner_tick().is_none());
}

#[tokio::test]
async fn test_load_failure_is_rendered() {
    let mut m = Model::new(Plain, 3, Policy::CLINIC)
        .unwrap()
        .with_title("Clinics");
    let cmd = m.load(async { Err::<Vec<Pet>, _>("503 Service Unavailable") });
    let msg = cmd.await.expect("load yields a message");
    m.update(&msg);

    assert_eq!(
        m.state(),
        &LoadState::Failed("503 Service Unavailable".to_string())
    );
    let view = plain(&m.view());
    assert!(view.contains("Could not load: 503 Service Unavailable"));
    assert!(!m.keymap.select.enabled());
}

#[tokio::test]
async fn test_stale_load_is_dropped() {
    let mut m = Model::new(Plain, 3, Policy::CLINIC).unwrap();
    let first = m.load(async { Ok::<_, String>(pets(&["old"])) });
    let second = m.load(async { Ok::<_, String>(pets(&["new"])) });

    let stale = first.await.expect("message");
    m.update(&stale);
    assert_eq!(m.state(), &LoadState::Loading);

    let fresh = second.await.expect("message");
    m.update(&fresh);
    assert_eq!(visible_ids(&m), vec!["new"]);
}

#[tokio::test]
async fn test_other_carousels_results_ignored() {
    let mut clinics = Model::<Pet>::new(Plain, 3, Policy::CLINIC).unwrap();
    let mut posts = Model::new(Plain, 3, Policy::POSTS).unwrap();

    let _ = clinics.load(async { Ok::<_, String>(Vec::new()) });
    let cmd = posts.load(async { Ok::<_, String>(pets(&["p1"])) });
    let msg = cmd.await.expect("message");

    clinics.update(&msg);
    assert_eq!(clinics.state(), &LoadState::Loading);
    posts.update(&msg);
    assert_eq!(posts.window().len(), 1);
}

#[test]
fn test_empty_state_view() {
    let m = Model::<Pet>::new(Plain, 3, Policy::CLINIC)
        .unwrap()
        .with_title("Clinics")
        .with_empty_text("No clinics found.");
    let view = plain(&m.view());
    assert!(view.contains("Clinics"));
    assert!(view.contains("No clinics found."));
    assert!(!view.contains('‹'));
}

#[test]
fn test_loading_view() {
    let mut m = Model::new(Plain, 3, Policy::CLINIC).unwrap();
    let _ = m.load(async { Ok::<_, String>(five()) });
    assert!(plain(&m.view()).contains("Loading…"));
}

#[test]
fn test_overflow_view_shows_items_and_controls() {
    let m = Model::new(Plain, 3, Policy::CLINIC)
        .unwrap()
        .with_title("Clinics")
        .with_items(five())
        .with_help(false);
    let view = plain(&m.view());
    let lines: Vec<&str> = view.lines().collect();
    assert_eq!(lines[1], "> A");
    assert_eq!(lines[2], "  B");
    assert_eq!(lines[3], "  C");
    assert_eq!(lines[4], "‹ ● ○ ›");
    assert_eq!(lines.len(), 5);
}

#[test]
fn test_arabic_indicator_for_long_lists() {
    let names: Vec<String> = (0..40).map(|i| format!("p{i}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let mut m = Model::new(Plain, 3, Policy::new(Boundary::Clamp, Step::Item))
        .unwrap()
        .with_items(pets(&refs))
        .with_help(false);
    m.next();
    let view = plain(&m.view());
    assert!(view.ends_with("‹ 2/38 ›"));

    let hidden = Model::new(Plain, 3, Policy::CLINIC)
        .unwrap()
        .with_items(five())
        .with_indicator(Indicator::Hidden)
        .with_help(false);
    assert!(plain(&hidden.view()).ends_with("‹ ›"));
}

#[test]
fn test_help_line_tracks_boundaries() {
    let m = Model::new(Plain, 3, Policy::POSTS).unwrap().with_items(five());
    let view = plain(&m.view());
    assert!(view.contains("→/l next"));
    assert!(!view.contains("←/h prev"));
}

#[test]
fn test_body_height_uses_delegate_layout() {
    let m = Model::<Pet>::new(Plain, 3, Policy::CLINIC).unwrap();
    assert_eq!(m.body_height(), 3);
}

#[test]
fn test_component_focus_cycle() {
    fn cycle<C: Component>(c: &mut C) {
        c.blur();
        assert!(!c.focused());
        assert!(c.focus().is_none());
        assert!(c.focused());
    }
    let mut m = Model::<Pet>::new(Plain, 3, Policy::CLINIC).unwrap();
    cycle(&mut m);
    assert!(m.keymap.help.enabled());
}

#[tokio::test]
async fn test_failed_reload_leaves_no_stale_items() {
    let mut m = Model::new(Plain, 3, Policy::CLINIC).unwrap().with_items(five());
    m.next();

    let cmd = m.reload(async { Err::<Vec<Pet>, _>("timeout") });
    assert!(m.window().is_empty());
    assert_eq!(m.window().cursor(), 0);

    let msg = cmd.await.expect("reload yields a message");
    m.update(&msg);
    assert_eq!(m.state(), &LoadState::Failed("timeout".to_string()));
    assert!(m.window().is_empty());
    assert!(m.window().visible().is_empty());
}

#[tokio::test]
async fn test_reload_replaces_items() {
    let mut m = Model::new(Plain, 3, Policy::POSTS).unwrap().with_items(five());
    let cmd = m.reload(async { Ok::<_, String>(pets(&["X"])) });
    let msg = cmd.await.expect("reload yields a message");
    m.update(&msg);
    assert_eq!(visible_ids(&m), vec!["X"]);
}

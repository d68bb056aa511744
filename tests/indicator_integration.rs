// SPDX-License-Identifier: MPL-2.0
//! Cross-module tests: a carousel driving the dot window the way the demo
//! app wires them, plus a config round-trip through a real file.

use iced_dots::carousel::Carousel;
use iced_dots::config::{self, Config};
use iced_dots::indicator::{DotState, DotWindow};
use tempfile::tempdir;

fn active_index(window: &DotWindow) -> Option<usize> {
    window
        .dots()
        .iter()
        .position(|dot| dot.state() == DotState::Active)
}

#[test]
fn carousel_and_indicator_stay_in_lockstep() {
    let pages = 9;
    let mut carousel = Carousel::new(pages);
    let mut window = DotWindow::new(pages);

    // Swipe all the way to the end and back, forwarding only committed
    // changes, as the host does.
    for _ in 0..pages + 2 {
        if let Some(page) = carousel.next() {
            window.on_page_change(page);
        }
        assert_eq!(window.current_page(), carousel.current_page());
        let actives = window
            .dots()
            .iter()
            .filter(|dot| dot.state() == DotState::Active)
            .count();
        assert_eq!(actives, 1);
    }
    assert!(carousel.is_at_last());
    assert_eq!(window.current_page(), pages - 1);
    assert_eq!(active_index(&window), Some(window.dots().len() - 1));

    for _ in 0..pages + 2 {
        if let Some(page) = carousel.previous() {
            window.on_page_change(page);
        }
        assert_eq!(window.current_page(), carousel.current_page());
    }
    assert!(carousel.is_at_first());
    assert_eq!(active_index(&window), Some(0));
}

#[test]
fn ignored_carousel_events_leave_the_indicator_untouched() {
    let mut carousel = Carousel::new(4);
    let mut window = DotWindow::new(4);

    // select() reports no event for no-ops, so nothing reaches the window.
    assert_eq!(carousel.select(0), None);
    assert_eq!(carousel.select(9), None);
    assert_eq!(window.current_page(), 0);
    assert_eq!(active_index(&window), Some(0));
}

#[test]
fn configured_style_survives_a_disk_round_trip() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("settings.toml");

    let config = Config {
        active_color: Some("#e53935".to_string()),
        inactive_color: Some("#cccccc".to_string()),
        visible_dots: Some(7),
        transform: Some("zoom-out".to_string()),
    };
    config::save_to_path(&config, &path).expect("save failed");

    let loaded = config::load_from_path(&path).expect("load failed");
    let style = loaded.indicator_style();
    assert!((style.active_color.r - 229.0 / 255.0).abs() < 1e-6);
    assert_eq!(loaded.visible_dots, Some(7));

    let window = DotWindow::with_visible_dots(20, loaded.visible_dots.unwrap())
        .expect("7 is a valid dot count");
    assert_eq!(window.dots().len(), 7);
}

#[test]
fn missing_config_file_is_not_an_error() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("does-not-exist.toml");
    assert!(config::load_from_path(&path).is_err());
    // load() itself falls back to defaults when the file is absent; the
    // path-level API surfaces the I/O error for callers that care.
}

//! Tests for app_state

use super::*;
use crate::config::ToastPosition;
use crate::notification::NotificationQueue;
use crate::test_utils::test_helpers::{test_app, with_provider};

#[test]
fn test_initial_state_needs_render() {
    let app = test_app();
    assert!(app.should_render(), "New app should need initial render");
    assert!(!app.should_quit());
    assert!(app.toasts.borrow().is_empty());
}

#[test]
fn test_clear_and_mark_dirty() {
    let app = test_app();

    app.clear_dirty();
    assert!(!app.should_render());

    app.mark_dirty();
    assert!(app.should_render());
}

#[test]
fn test_toast_config_comes_from_config() {
    let mut config = Config::default();
    config.toasts.max_visible = 2;
    config.toasts.position = ToastPosition::BottomRight;

    let app = App::new(&config);

    assert_eq!(app.toast_config.max_visible, 2);
    assert_eq!(app.toast_config.position, ToastPosition::BottomRight);
}

#[test]
fn test_next_toast_id_is_unique() {
    let mut app = test_app();

    assert_eq!(app.next_toast_id(), (1, "toast-1".to_string()));
    assert_eq!(app.next_toast_id(), (2, "toast-2".to_string()));
}

#[test]
fn test_provider_exposes_app_queue() {
    let mut app = test_app();
    app.clear_dirty();

    with_provider(&mut app, |_| {
        TOASTS
            .use_queue()
            .unwrap()
            .borrow_mut()
            .add("external", Toast::info("From a component"));
    });

    assert!(app.should_render(), "Component writes should request a redraw");
    assert!(app.toasts.borrow().contains("external"));
}

#[test]
fn test_queue_not_visible_outside_provider() {
    let _app = test_app();
    assert!(TOASTS.use_queue().is_err());
}

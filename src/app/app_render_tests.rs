//! Tests for app_render

use super::*;
use crate::config::Config;
use crate::notification::{MockQueue, QueueEntry};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).unwrap()
}

/// Render and return the buffer one string per row
fn render_rows(app: &App, toasts: &MockQueue<Toast>, width: u16, height: u16) -> Vec<String> {
    let mut terminal = create_test_terminal(width, height);
    terminal.draw(|f| app.render(f, toasts)).unwrap();

    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

fn app_with(max_visible: usize, position: ToastPosition) -> App {
    let mut config = Config::default();
    config.toasts.max_visible = max_visible;
    config.toasts.position = position;
    App::new(&config)
}

fn queue_of(toasts: &[(&str, Toast)]) -> MockQueue<Toast> {
    MockQueue::with_entries(
        toasts
            .iter()
            .map(|(id, toast)| QueueEntry::new(*id, toast.clone())),
    )
}

fn slice(row: &str, from: usize, len: usize) -> String {
    row.chars().skip(from).take(len).collect()
}

#[test]
fn test_empty_queue_shows_hint_and_no_toasts() {
    let app = app_with(5, ToastPosition::TopRight);
    let rows = render_rows(&app, &MockQueue::new(), 60, 12);

    assert!(rows[1].contains("Queue: 0 toasts"));
    assert!(rows[2].contains("Nothing queued."));
    assert!(rows.iter().all(|row| !row.contains("Toast #")));
}

#[test]
fn test_single_toast_in_top_right_corner() {
    let app = app_with(5, ToastPosition::TopRight);
    let queue = queue_of(&[("toast-1", Toast::info("Toast #1"))]);

    let rows = render_rows(&app, &queue, 60, 12);

    // Box is 12 wide at x=47..59, content row at y=2
    assert_eq!(slice(&rows[2], 48, 10), " Toast #1 ");
    assert!(rows[1].contains("Queue: 1 toast"));
}

#[test]
fn test_bottom_right_stack() {
    let app = app_with(5, ToastPosition::BottomRight);
    let queue = queue_of(&[("toast-1", Toast::info("Toast #1"))]);

    let rows = render_rows(&app, &queue, 60, 12);

    assert_eq!(slice(&rows[8], 48, 10), " Toast #1 ");
    assert_ne!(slice(&rows[2], 48, 10), " Toast #1 ");
}

#[test]
fn test_stack_follows_queue_order() {
    let app = app_with(5, ToastPosition::TopRight);
    let queue = queue_of(&[
        ("b", Toast::info("Second key")),
        ("a", Toast::warning("First key")),
    ]);

    let rows = render_rows(&app, &queue, 60, 14);

    assert!(rows[2].contains(" Second key "));
    assert!(rows[5].contains(" First key "));
}

#[test]
fn test_panel_lists_entries_in_order() {
    let app = app_with(0, ToastPosition::TopRight);
    let queue = queue_of(&[
        ("toast-1", Toast::info("Toast #1")),
        ("toast-2", Toast::info("Toast #2").bumped()),
    ]);

    let rows = render_rows(&app, &queue, 60, 12);

    assert!(rows[2].contains(" 1. toast-1  Toast #1"));
    assert!(rows[3].contains(" 2. toast-2  Toast #2 (x2)"));
}

#[test]
fn test_overflow_marker_below_stack() {
    let app = app_with(2, ToastPosition::TopRight);
    let queue = queue_of(&[
        ("toast-1", Toast::info("Toast #1")),
        ("toast-2", Toast::info("Toast #2")),
        ("toast-3", Toast::info("Toast #3")),
    ]);

    let rows = render_rows(&app, &queue, 60, 14);

    assert!(rows[2].contains(" Toast #1 "));
    assert!(rows[5].contains(" Toast #2 "));
    assert!(rows[7].contains("+1 more"));
    // Listed in the panel, but no box of its own
    assert!(rows[4].contains(" 3. toast-3  Toast #3"));
    assert!(!rows[8].contains("Toast #3"));
}

#[test]
fn test_stack_truncated_by_small_terminal() {
    let app = app_with(5, ToastPosition::TopRight);
    let queue = queue_of(&[
        ("toast-1", Toast::info("Toast #1")),
        ("toast-2", Toast::info("Toast #2")),
        ("toast-3", Toast::info("Toast #3")),
    ]);

    let rows = render_rows(&app, &queue, 30, 6);

    assert!(rows[2].contains(" Toast #1 "));
    assert!(rows[4].contains("+2 more"));
}

#[test]
fn test_help_line_lists_keys() {
    let app = app_with(5, ToastPosition::TopRight);
    let rows = render_rows(&app, &MockQueue::new(), 100, 12);

    let help = &rows[11];
    assert!(help.contains("a Add"));
    assert!(help.contains("d Dismiss oldest"));
    assert!(help.contains("c Clear"));
}

#[test]
fn test_toast_colors_follow_level() {
    let app = app_with(5, ToastPosition::TopRight);
    let queue = queue_of(&[("boom", Toast::error("Boom"))]);

    let mut terminal = create_test_terminal(60, 12);
    terminal.draw(|f| app.render(f, &queue)).unwrap();

    let buffer = terminal.backend().buffer();
    // " Boom " box is 8 wide at x=51, content at y=2
    let cell = &buffer[(53, 2)];
    assert_eq!(cell.symbol(), "B");
    assert_eq!(cell.bg, theme::toast::ERROR.bg);
    assert_eq!(cell.fg, theme::toast::ERROR.fg);
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let app = app_with(5, ToastPosition::BottomRight);
    let queue = queue_of(&[("toast-1", Toast::info("A rather long toast message"))]);

    let rows = render_rows(&app, &queue, 8, 3);
    assert_eq!(rows.len(), 3);
}

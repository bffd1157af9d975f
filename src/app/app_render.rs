use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::app_state::App;
use super::toast::Toast;
use crate::config::{ToastConfig, ToastPosition};
use crate::notification::NotificationQueue;
use crate::theme;
use crate::widgets::popup;

/// Toast box height: one content line plus borders
const TOAST_HEIGHT: u16 = 3;
/// Gap between the toast stack and the frame edge
const TOAST_MARGIN: u16 = 1;
const TOAST_BORDER_WIDTH: u16 = 2;

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        [$(($key, $desc)),+]
    };
}

const HINTS: [(&str, &str); 7] = hints![
    "a" => "Add",
    "w/e" => "Warn/Error",
    "u" => "Update newest",
    "d" => "Dismiss oldest",
    "c" => "Clear",
    "q" => "Quit",
    "Ctrl+C" => "Quit",
];

impl App {
    /// Render the demo screen from the queue the provider hands out
    pub fn render(&self, frame: &mut Frame, toasts: &dyn NotificationQueue<Toast>) {
        let layout =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(frame.area());

        render_panel(frame, layout[0], toasts);
        render_help_line(frame, layout[1]);

        // Last so the stack floats over the panel
        render_toast_stack(frame, layout[0], toasts, &self.toast_config);
    }
}

fn render_panel(frame: &mut Frame, area: Rect, toasts: &dyn NotificationQueue<Toast>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::panel::BORDER))
        .title(Span::styled(" notiq ", theme::panel::TITLE));
    frame.render_widget(block, area);

    let body = popup::inset_rect(area, 2, 1);

    let mut lines = vec![Line::from(vec![
        Span::styled("Queue: ", Style::default().fg(theme::panel::TEXT)),
        Span::styled(
            match toasts.len() {
                1 => "1 toast".to_string(),
                n => format!("{} toasts", n),
            },
            Style::default().fg(theme::panel::COUNT),
        ),
    ])];

    if toasts.is_empty() {
        lines.push(Line::from(Span::styled(
            "Nothing queued. Press a to add a toast.",
            Style::default().fg(theme::panel::EMPTY),
        )));
    } else {
        lines.extend(toasts.list().iter().enumerate().map(|(i, entry)| {
            Line::from(Span::styled(
                format!("{:>2}. {}  {}", i + 1, entry.id, entry.data.display_text()),
                Style::default().fg(theme::panel::TEXT),
            ))
        }));
    }

    frame.render_widget(Paragraph::new(lines), body);
}

fn render_help_line(frame: &mut Frame, area: Rect) {
    let key_style = Style::default().fg(theme::help_line::KEY);
    let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
    let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

    let mut spans = Vec::with_capacity(HINTS.len() * 4 + 1);
    spans.push(Span::raw(" "));

    for (i, (key, desc)) in HINTS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", sep_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, desc_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Stack toasts in queue order from the configured corner
///
/// Shows at most `max_visible` toasts; anything beyond that (or beyond the
/// room in `area`) is summarized by a "+N more" marker.
fn render_toast_stack(
    frame: &mut Frame,
    area: Rect,
    toasts: &dyn NotificationQueue<Toast>,
    config: &ToastConfig,
) {
    let mut shown = 0;
    let mut last_slot = None;

    for (slot, entry) in toasts.list().iter().take(config.max_visible).enumerate() {
        let text = format!(" {} ", entry.data.display_text());
        let width = Line::from(text.as_str()).width() as u16 + TOAST_BORDER_WIDTH;

        let Some(rect) = popup::corner_slot(
            area,
            width,
            TOAST_HEIGHT,
            slot as u16,
            config.position,
            TOAST_MARGIN,
        ) else {
            break;
        };

        if rect.width < 5 {
            break;
        }

        let colors = entry.data.level.colors();
        popup::clear_area(frame, rect);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border).bg(colors.bg))
            .style(Style::default().bg(colors.bg));
        let line = Line::from(Span::styled(
            text,
            Style::default().fg(colors.fg).bg(colors.bg),
        ));
        frame.render_widget(Paragraph::new(line).block(block), rect);

        shown += 1;
        last_slot = Some(rect);
    }

    let hidden = toasts.len() - shown;
    if hidden > 0
        && let Some(last) = last_slot
    {
        render_overflow_marker(frame, area, last, hidden, config.position);
    }
}

fn render_overflow_marker(
    frame: &mut Frame,
    area: Rect,
    last: Rect,
    hidden: usize,
    position: ToastPosition,
) {
    let text = format!("+{} more", hidden);
    let width = (text.len() as u16).min(area.width);

    let y = match position {
        ToastPosition::TopRight => last.y + last.height,
        ToastPosition::BottomRight => match last.y.checked_sub(1) {
            Some(y) => y,
            None => return,
        },
    };
    if y < area.y || y >= area.y + area.height {
        return;
    }

    let rect = Rect {
        x: last.x + last.width.saturating_sub(width),
        y,
        width,
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(Span::styled(text, theme::toast::OVERFLOW)),
        rect,
    );
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;

use ratatui::{Frame, layout::Rect, widgets::Clear};

use crate::config::ToastPosition;

/// Rect for the `slot`-th stacked box of `height` rows in a right-hand corner
///
/// Slot 0 sits against the corner; later slots move away from it. Returns
/// `None` once the stack runs out of room.
pub fn corner_slot(
    frame_area: Rect,
    width: u16,
    height: u16,
    slot: u16,
    position: ToastPosition,
    margin: u16,
) -> Option<Rect> {
    let width = width.min(frame_area.width.saturating_sub(margin * 2));
    let offset = margin.checked_add(height.checked_mul(slot)?)?;

    if offset.checked_add(height)? > frame_area.height {
        return None;
    }

    let x = frame_area.x + frame_area.width.saturating_sub(width + margin);
    let y = match position {
        ToastPosition::TopRight => frame_area.y + offset,
        ToastPosition::BottomRight => frame_area.y + frame_area.height - offset - height,
    };

    Some(Rect {
        x,
        y,
        width,
        height,
    })
}

pub fn inset_rect(area: Rect, horizontal_margin: u16, vertical_margin: u16) -> Rect {
    Rect {
        x: area.x + horizontal_margin,
        y: area.y + vertical_margin,
        width: area.width.saturating_sub(horizontal_margin * 2),
        height: area.height.saturating_sub(vertical_margin * 2),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

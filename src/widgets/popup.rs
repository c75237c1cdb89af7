use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Bottom-aligned strip of `area`, at most `height` rows tall
pub fn bottom_strip(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect {
        x: area.x,
        y: area.y + area.height - height,
        width: area.width,
        height,
    }
}

/// Strip directly above `anchor`, clipped so it never leaves `bounds`
pub fn strip_above_anchor(bounds: Rect, anchor: Rect, height: u16) -> Rect {
    let room = anchor.y.saturating_sub(bounds.y);
    let height = height.min(room);

    Rect {
        x: anchor.x,
        y: anchor.y - height,
        width: anchor.width,
        height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;

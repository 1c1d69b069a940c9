use ratatui::{
    buffer::Buffer,
    layout::{Offset, Rect},
    style::{Color, Modifier, Style},
};

/// Dims everything already drawn in `area` so the overlay reads as modal.
pub fn dim_area(buf: &mut Buffer, area: Rect) {
    buf.set_style(area, Style::default().add_modifier(Modifier::DIM));
}

/// A rect covering `percent_x` by `percent_y` of `r`, centered in it.
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let width = percent_of(r.width, percent_x);
    let height = percent_of(r.height, percent_y);
    Rect::new(
        r.x + (r.width - width) / 2,
        r.y + (r.height - height) / 2,
        width,
        height,
    )
}

fn percent_of(len: u16, percent: u16) -> u16 {
    (u32::from(len) * u32::from(percent.min(100)) / 100) as u16
}

/// One-cell shadow down and to the right of `surface`, clipped to `bounds`.
pub fn draw_drop_shadow(buf: &mut Buffer, surface: Rect, bounds: Rect) {
    let shadow = surface.offset(Offset { x: 1, y: 1 }).intersection(bounds);
    for y in shadow.top()..shadow.bottom() {
        for x in shadow.left()..shadow.right() {
            buf[(x, y)]
                .set_symbol(" ")
                .set_style(Style::default().bg(Color::Black));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_stays_inside() {
        let area = Rect::new(0, 0, 100, 50);
        let r = centered_rect(60, 40, area);
        assert_eq!(r, Rect::new(20, 15, 60, 20));

        let offset = Rect::new(10, 5, 80, 24);
        let r = centered_rect(60, 60, offset);
        assert_eq!(offset.intersection(r), r);
        assert_eq!(r.width, 48);
    }

    #[test]
    fn test_drop_shadow_clipped_to_terminal() {
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        draw_drop_shadow(&mut buf, Rect::new(5, 2, 10, 10), area);
        assert_eq!(buf[(9, 4)].bg, Color::Black);
        assert_eq!(buf[(5, 2)].bg, Color::Reset);
    }

    #[test]
    fn test_dim_area_keeps_symbols() {
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        buf.set_string(0, 0, "ab", Style::default());
        dim_area(&mut buf, area);
        assert_eq!(buf[(0, 0)].symbol(), "a");
        assert!(buf[(0, 0)].modifier.contains(Modifier::DIM));
    }
}

//! Shared modal overlay utilities.
//!
//! Centering rects, dimming the screen behind a dialog and drawing the
//! dialog frame.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Clear, Widget};

use crate::theme::{styles, Palette};

/// Center a fixed-size rect within an area.
///
/// If the requested size exceeds the area, clamps to the area dimensions.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Dim all cells in the given area by overriding their styles.
pub fn dim_background(buf: &mut Buffer, area: Rect, palette: &Palette) {
    let dim_style = Style::default()
        .fg(palette.text_muted)
        .bg(palette.deepest_bg);

    let y_end = area.y.saturating_add(area.height);
    let x_end = area.x.saturating_add(area.width);
    for y in area.y..y_end {
        for x in area.x..x_end {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

/// Dim `area`, clear a centered `width`×`height` rect and draw a titled
/// modal frame in it.
///
/// Returns the inner content area of the modal.
pub fn render_modal(
    buf: &mut Buffer,
    area: Rect,
    palette: &Palette,
    title: &str,
    width: u16,
    height: u16,
) -> Rect {
    dim_background(buf, area, palette);
    let modal = centered_rect(width, height, area);
    Clear.render(modal, buf);

    let title = format!(" {title} ");
    let block: Block<'_> = styles::modal_block(palette, &title);
    let inner = block.inner(modal);
    block.render(modal, buf);
    inner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette::DARK;

    #[test]
    fn test_centered_rect_within_area() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 5);
        assert_eq!(centered_rect(40, 10, area), Rect::new(0, 0, 20, 5));
    }

    #[test]
    fn test_render_modal_returns_inner_area() {
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        let inner = render_modal(&mut buf, area, &DARK, "Add Stock", 20, 6);
        assert_eq!(inner, Rect::new(11, 4, 18, 4));
    }
}

//! # Card / CardContent
//!
//! Structural wrappers. A `Card` draws a rounded border and hands back the
//! area inside it; `CardContent` pads that area. Neither holds state or
//! handles events.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Padding, Widget};

/// Rows a card adds around its content (top and bottom border).
pub const CARD_VERTICAL_OVERHEAD: u16 = 2;
/// Columns a card plus its content padding consume.
pub const CARD_HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;

const CONTENT_PAD_H: u16 = 1;

pub struct Card;

impl Card {
    /// Draw the card frame into `area` and return the area inside it.
    pub fn render(self, area: Rect, buf: &mut Buffer) -> Rect {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Gray));
        let inner = block.inner(area);
        block.render(area, buf);
        inner
    }
}

pub struct CardContent;

impl CardContent {
    /// The padded region inside a card's inner area.
    pub fn area(inner: Rect) -> Rect {
        Block::default()
            .padding(Padding::horizontal(CONTENT_PAD_H))
            .inner(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_inner_area_excludes_border() {
        let area = Rect::new(0, 0, 20, 6);
        let mut buf = Buffer::empty(area);
        let inner = Card.render(area, &mut buf);
        assert_eq!(inner, Rect::new(1, 1, 18, 4));
    }

    #[test]
    fn test_card_content_pads_horizontally() {
        let content = CardContent::area(Rect::new(1, 1, 18, 4));
        assert_eq!(content, Rect::new(2, 1, 16, 4));
        assert_eq!(20 - content.width, CARD_HORIZONTAL_OVERHEAD);
    }
}

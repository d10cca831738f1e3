use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::core::product::Review;
use crate::tui::components::card::{CARD_HORIZONTAL_OVERHEAD, CARD_VERTICAL_OVERHEAD, Card, CardContent};
use crate::tui::components::star_rating::FILLED_STAR;
use crate::tui::layout::wrap_text;

/// Rows above the comment: reviewer name and star line.
const HEADER_ROWS: u16 = 2;

/// A single customer review inside a card.
///
/// The stars here are a static display of the review's own rating, one
/// filled star per point. They never reflect the user's live rating.
#[derive(Clone, Copy)]
pub struct ReviewCard<'a> {
    pub review: &'a Review,
}

impl<'a> ReviewCard<'a> {
    pub fn new(review: &'a Review) -> Self {
        Self { review }
    }

    /// Height of the card at the given outer width, borders included.
    pub fn calculate_height(review: &Review, width: u16) -> u16 {
        let content_width = width.saturating_sub(CARD_HORIZONTAL_OVERHEAD);
        let comment_rows = wrap_text(&review.comment, content_width).len().max(1) as u16;
        HEADER_ROWS + comment_rows + CARD_VERTICAL_OVERHEAD
    }

    pub fn static_stars(rating: u8) -> String {
        FILLED_STAR.repeat(rating as usize)
    }
}

impl Widget for ReviewCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let content = CardContent::area(Card.render(area, buf));

        let mut lines = vec![
            Line::from(Span::styled(
                self.review.user.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                Self::static_stars(self.review.rating),
                Style::default().fg(Color::Yellow),
            )),
        ];
        lines.extend(
            wrap_text(&self.review.comment, content.width)
                .into_iter()
                .map(Line::from),
        );
        Paragraph::new(lines).render(content, buf);
    }
}

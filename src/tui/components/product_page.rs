//! # ProductPage Component
//!
//! The scrollable page body: everything between header and footer except
//! the popup overlay. Stateless; positions come from a precomputed
//! [`PageLayout`] so rendering and hit-testing agree.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::core::product::Product;
use crate::tui::Focus;
use crate::tui::components::button::{Button, ButtonVariant};
use crate::tui::components::review::ReviewCard;
use crate::tui::components::star_rating::StarRating;
use crate::tui::layout::{CART_LABEL, PageLayout, WISHLIST_LABEL, artisan_line, wrap_text};

pub struct ProductPage<'a> {
    pub product: &'a Product,
    pub layout: &'a PageLayout,
    pub user_rating: u8,
    pub focus: Focus,
    pub rating_cursor: usize,
}

fn heading(text: &str) -> Paragraph<'_> {
    Paragraph::new(Span::styled(
        text,
        Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    ))
}

impl Widget for ProductPage<'_> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        let layout = self.layout;
        let product = self.product;

        Paragraph::new(Span::styled(
            product.name.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .render(layout.title, buf);
        Paragraph::new(product.price.as_str()).render(layout.price, buf);

        for (i, (url, rect)) in product.images.iter().zip(&layout.images).enumerate() {
            Paragraph::new(Line::from(vec![
                Span::styled(format!("▣ Image {}  ", i + 1), Style::default().fg(Color::Cyan)),
                Span::styled(url.as_str(), Style::default().fg(Color::DarkGray)),
            ]))
            .render(*rect, buf);
        }

        heading("About the Artisan").render(layout.artisan_heading, buf);
        let artisan: Vec<Line> = wrap_text(&artisan_line(product), layout.artisan_text.width)
            .into_iter()
            .map(Line::from)
            .collect();
        Paragraph::new(artisan).render(layout.artisan_text, buf);

        Button::new(CART_LABEL)
            .focused(self.focus == Focus::AddToCart)
            .render(layout.cart_button, buf);
        Button::new(WISHLIST_LABEL)
            .variant(ButtonVariant::Outline)
            .focused(self.focus == Focus::AddToWishlist)
            .render(layout.wishlist_button, buf);

        heading("Customer Reviews").render(layout.reviews_heading, buf);
        for (review, rect) in product.reviews.iter().zip(&layout.reviews) {
            ReviewCard::new(review).render(*rect, buf);
        }

        heading("Rate this product").render(layout.rating_heading, buf);
        StarRating {
            rating: self.user_rating,
            cursor: (self.focus == Focus::Rating).then_some(self.rating_cursor),
        }
        .render(layout.rating, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::product::fixture;
    use crate::tui::components::star_rating::{EMPTY_STAR, FILLED_STAR};

    fn render_page(user_rating: u8) -> (Buffer, PageLayout) {
        let product = fixture();
        let layout = PageLayout::compute(&product, 100);
        let area = Rect::new(0, 0, layout.width, layout.height);
        let mut buf = Buffer::empty(area);
        ProductPage {
            product: &product,
            layout: &layout,
            user_rating,
            focus: Focus::AddToCart,
            rating_cursor: 0,
        }
        .render(area, &mut buf);
        (buf, layout)
    }

    fn region_text(buf: &Buffer, rect: Rect) -> String {
        let mut out = String::new();
        for y in rect.top()..rect.bottom() {
            for x in rect.left()..rect.right() {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_page_shows_every_fixture_field() {
        let product = fixture();
        let (buf, _) = render_page(0);
        let text: String = buf.content().iter().map(|c| c.symbol()).collect();

        assert!(text.contains(&product.name));
        assert!(text.contains(&product.price));
        assert!(text.contains("Image 1"));
        assert!(text.contains("Image 2"));
        assert!(text.contains("Maria Lopez - A skilled ceramic artist"));
        assert!(text.contains(CART_LABEL));
        assert!(text.contains(WISHLIST_LABEL));
        assert!(text.contains("Alice"));
        assert!(text.contains("Beautiful craftsmanship!"));
        assert!(text.contains("John"));
        assert!(text.contains("Rate this product"));
    }

    #[test]
    fn test_review_stars_independent_of_user_rating() {
        for user_rating in [0, 3, 5] {
            let (buf, layout) = render_page(user_rating);
            let first = region_text(&buf, layout.reviews[0]);
            let second = region_text(&buf, layout.reviews[1]);
            assert_eq!(first.matches(FILLED_STAR).count(), 5);
            assert_eq!(second.matches(FILLED_STAR).count(), 4);
            assert_eq!(first.matches(EMPTY_STAR).count(), 0);
        }
    }

    #[test]
    fn test_rating_widget_reflects_user_rating() {
        let (buf, layout) = render_page(3);
        let stars = region_text(&buf, layout.rating);
        assert_eq!(stars.matches(FILLED_STAR).count(), 3);
        assert_eq!(stars.matches(EMPTY_STAR).count(), 2);
    }
}

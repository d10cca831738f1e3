//! # Page Layout
//!
//! Computes where every piece of the product page goes on the scrollable
//! canvas *before* anything is drawn. The same `PageLayout` then drives
//! rendering and mouse hit-testing, so the two can never disagree.
//!
//! All rects are in page (canvas) coordinates: `(0, 0)` is the top-left of
//! the scrollable body, independent of the current scroll offset.
//!
//! ```text
//!   Handmade Ceramic Vase          ← title
//!   $45.00                         ← price
//!
//!   ▣ Image 1  https://…           ← one row per image
//!   ▣ Image 2  https://…
//!
//!   About the Artisan
//!   Maria Lopez - A skilled …      ← wrapped
//!
//!   ╭─────────────╮ ╭─────────────────╮
//!   │ Add to Cart │ │ Add to Wishlist │
//!   ╰─────────────╯ ╰─────────────────╯
//!
//!   Customer Reviews
//!   ╭ review card ╮                ← one card per review, 1 row apart
//!
//!   Rate this product
//!   ★ ★ ★ ☆ ☆
//! ```

use ratatui::layout::{Position, Rect};

use crate::core::product::Product;
use crate::tui::components::button::{BUTTON_HEIGHT, Button};
use crate::tui::components::review::ReviewCard;
use crate::tui::components::star_rating::StarRating;

pub const CART_LABEL: &str = "Add to Cart";
pub const WISHLIST_LABEL: &str = "Add to Wishlist";

/// Left/right margin inside the page body.
const MARGIN_H: u16 = 2;
const BUTTON_GAP: u16 = 2;

/// Wrap `text` into lines no wider than `width`.
///
/// Returns at least one line for non-empty text even when `width` is 0.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }
    let options = textwrap::Options::new(width.max(1) as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
        .wrap_algorithm(textwrap::WrapAlgorithm::FirstFit);
    textwrap::wrap(text, options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

pub fn artisan_line(product: &Product) -> String {
    format!("{} - {}", product.artisan.name, product.artisan.bio)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    pub width: u16,
    pub height: u16,
    pub title: Rect,
    pub price: Rect,
    pub images: Vec<Rect>,
    pub artisan_heading: Rect,
    pub artisan_text: Rect,
    pub cart_button: Rect,
    pub wishlist_button: Rect,
    pub reviews_heading: Rect,
    pub reviews: Vec<Rect>,
    pub rating_heading: Rect,
    pub rating: Rect,
}

impl PageLayout {
    pub fn compute(product: &Product, width: u16) -> Self {
        let x = MARGIN_H.min(width);
        let inner = width.saturating_sub(MARGIN_H * 2);
        let row = |y: u16, height: u16| Rect::new(x, y, inner, height);

        let mut y = 1;
        let title = row(y, 1);
        let price = row(y + 1, 1);
        y += 3;

        let images = (0..product.images.len() as u16)
            .map(|i| row(y + i, 1))
            .collect::<Vec<_>>();
        y += images.len() as u16 + 1;

        let artisan_heading = row(y, 1);
        let artisan_rows = wrap_text(&artisan_line(product), inner).len() as u16;
        let artisan_text = row(y + 1, artisan_rows);
        y += 1 + artisan_rows + 1;

        let cart_width = Button::width(CART_LABEL).min(inner);
        let cart_button = Rect::new(x, y, cart_width, BUTTON_HEIGHT);
        let wishlist_x = x + cart_width + BUTTON_GAP;
        let wishlist_button = Rect::new(
            wishlist_x,
            y,
            Button::width(WISHLIST_LABEL).min((x + inner).saturating_sub(wishlist_x)),
            BUTTON_HEIGHT,
        );
        y += BUTTON_HEIGHT + 1;

        let reviews_heading = row(y, 1);
        y += 1;
        let mut reviews = Vec::with_capacity(product.reviews.len());
        for review in &product.reviews {
            y += 1;
            let height = ReviewCard::calculate_height(review, inner);
            reviews.push(row(y, height));
            y += height;
        }
        y += 1;

        let rating_heading = row(y, 1);
        let rating = Rect::new(x, y + 1, StarRating::width().min(inner), 1);
        y += 3;

        Self {
            width,
            height: y,
            title,
            price,
            images,
            artisan_heading,
            artisan_text,
            cart_button,
            wishlist_button,
            reviews_heading,
            reviews,
            rating_heading,
            rating,
        }
    }
}

/// Convert a screen position to page coordinates, given where the body
/// was drawn and how far it is scrolled. `None` if outside the body.
pub fn screen_to_page(body: Rect, scroll: Position, col: u16, row: u16) -> Option<(u16, u16)> {
    if !body.contains(Position::new(col, row)) {
        return None;
    }
    Some((col - body.x + scroll.x, row - body.y + scroll.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::product::fixture;

    #[test]
    fn test_wrap_text_short_and_empty() {
        assert_eq!(wrap_text("Hello", 20), vec!["Hello".to_string()]);
        assert!(wrap_text("   ", 20).is_empty());
        assert_eq!(wrap_text("abc", 0).len(), 3);
    }

    #[test]
    fn test_layout_rows_are_ordered() {
        let layout = PageLayout::compute(&fixture(), 80);
        assert!(layout.title.y < layout.price.y);
        assert!(layout.price.y < layout.images[0].y);
        assert!(layout.images[1].y < layout.artisan_heading.y);
        assert!(layout.artisan_text.bottom() < layout.cart_button.y);
        assert!(layout.cart_button.bottom() < layout.reviews_heading.y);
        assert!(layout.reviews[0].bottom() < layout.reviews[1].y);
        assert!(layout.reviews[1].bottom() < layout.rating_heading.y);
        assert!(layout.rating.bottom() <= layout.height);
    }

    #[test]
    fn test_layout_has_row_per_image_and_card_per_review() {
        let product = fixture();
        let layout = PageLayout::compute(&product, 80);
        assert_eq!(layout.images.len(), product.images.len());
        assert_eq!(layout.reviews.len(), product.reviews.len());
    }

    #[test]
    fn test_buttons_side_by_side() {
        let layout = PageLayout::compute(&fixture(), 80);
        assert_eq!(layout.cart_button.y, layout.wishlist_button.y);
        assert_eq!(layout.cart_button.width, Button::width(CART_LABEL));
        assert_eq!(layout.wishlist_button.x, layout.cart_button.right() + BUTTON_GAP);
    }

    #[test]
    fn test_narrow_width_wraps_artisan_text() {
        let product = fixture();
        let wide = PageLayout::compute(&product, 120);
        let narrow = PageLayout::compute(&product, 30);
        assert_eq!(wide.artisan_text.height, 1);
        assert!(narrow.artisan_text.height > 1);
        assert!(narrow.height > wide.height);
    }

    #[test]
    fn test_screen_to_page_applies_scroll() {
        let body = Rect::new(0, 3, 80, 20);
        assert_eq!(screen_to_page(body, Position::new(0, 0), 5, 3), Some((5, 0)));
        assert_eq!(screen_to_page(body, Position::new(0, 10), 5, 4), Some((5, 11)));
        assert_eq!(screen_to_page(body, Position::new(0, 0), 5, 2), None);
        assert_eq!(screen_to_page(body, Position::new(0, 0), 5, 23), None);
    }
}

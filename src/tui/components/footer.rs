//! # Footer Component
//!
//! Copyright line, a one-line status strip, and the key help.
//!
//! The copyright text is fixed. The status strip receives cart/wishlist
//! counts and the user rating as props.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::state::MAX_RATING;
use crate::tui::component::Component;

pub const FOOTER_TEXT: &str = "© 2025 Handmade Crafts. All Rights Reserved.";
pub const KEY_HELP: &str = "c cart  w wishlist  1-5 rate  ←/→ star  Enter press  Tab focus  \
     x close  ↑/↓ PgUp/PgDn scroll  q quit";

pub const FOOTER_HEIGHT: u16 = 3;

pub struct Footer {
    pub cart_items: usize,
    pub wishlist_items: usize,
    pub user_rating: u8,
}

impl Footer {
    pub fn status_text(&self) -> String {
        let rating = if self.user_rating == 0 {
            "not rated".to_string()
        } else {
            format!("{}/{}", self.user_rating, MAX_RATING)
        };
        format!(
            "Cart: {}  Wishlist: {}  Your rating: {}",
            self.cart_items, self.wishlist_items, rating
        )
    }
}

impl Component for Footer {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default().bg(Color::DarkGray).fg(Color::White);
        let lines = vec![
            Line::from(Span::styled(FOOTER_TEXT, style.add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(self.status_text(), style)),
            Line::from(Span::styled(KEY_HELP, style.add_modifier(Modifier::DIM))),
        ];
        let footer = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(style);
        frame.render_widget(footer, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn footer(cart_items: usize, wishlist_items: usize, user_rating: u8) -> Footer {
        Footer {
            cart_items,
            wishlist_items,
            user_rating,
        }
    }

    #[test]
    fn test_status_text_unrated() {
        assert_eq!(
            footer(0, 0, 0).status_text(),
            "Cart: 0  Wishlist: 0  Your rating: not rated"
        );
    }

    #[test]
    fn test_status_text_rated() {
        assert_eq!(
            footer(2, 1, 4).status_text(),
            "Cart: 2  Wishlist: 1  Your rating: 4/5"
        );
    }

    #[test]
    fn test_footer_renders_copyright() {
        let backend = TestBackend::new(120, FOOTER_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                footer(3, 0, 0).render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();

        assert!(text.contains("Handmade Crafts. All Rights Reserved."));
        assert!(text.contains("Cart: 3"));
        assert!(text.contains("PgUp/PgDn scroll"));
    }

    #[test]
    fn test_key_help_lists_every_binding() {
        for key in ["c cart", "w wishlist", "1-5", "←/→", "Enter", "Tab", "x close", "↑/↓", "PgUp/PgDn", "q quit"] {
            assert!(KEY_HELP.contains(key), "missing {key}");
        }
    }
}

//! # Header Component
//!
//! Store banner across the top of the page. Stateless: no props, no events.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::tui::component::Component;

pub const HEADER_TEXT: &str = "Welcome to Our Store";

/// Rows the header occupies (text plus one row of padding above and below).
pub const HEADER_HEIGHT: u16 = 3;

pub struct Header;

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default()
            .bg(Color::Blue)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        let header = Paragraph::new(HEADER_TEXT)
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().style(style).padding(Padding::vertical(1)));
        frame.render_widget(header, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_header_renders_fixed_text() {
        let backend = TestBackend::new(60, HEADER_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                Header.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();

        assert!(text.contains(HEADER_TEXT));
    }
}

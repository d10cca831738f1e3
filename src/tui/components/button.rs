//! # Button Component
//!
//! A bordered, clickable label. The variant is cosmetic only: `Default`
//! is filled, `Outline` is just a border. Both behave identically.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `Button` is created each frame with its props and rendered as a widget
//! - `ButtonState` holds where it was drawn and whether it has focus, so the
//!   next click or Enter can be routed to it

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Rows a button occupies (label plus top and bottom border).
pub const BUTTON_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
}

/// Emitted once per activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    Pressed,
}

pub struct Button<'a> {
    pub label: &'a str,
    pub variant: ButtonVariant,
    pub focused: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            variant: ButtonVariant::Default,
            focused: false,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Width needed to show `label` with borders and one column of padding per side.
    pub fn width(label: &str) -> u16 {
        label.width() as u16 + 4
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut style = match self.variant {
            ButtonVariant::Default => Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            ButtonVariant::Outline => Style::default().add_modifier(Modifier::BOLD),
        };
        let mut border_style = match self.variant {
            ButtonVariant::Default => style,
            ButtonVariant::Outline => Style::default().fg(Color::Gray),
        };
        if self.focused {
            style = style.add_modifier(Modifier::REVERSED);
            border_style = border_style.fg(Color::Yellow);
        }

        Paragraph::new(self.label)
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(border_style),
            )
            .render(area, buf);
    }
}

/// Where a button was last drawn (page coordinates) and whether it has focus.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonState {
    pub area: Rect,
    pub focused: bool,
}

impl EventHandler for ButtonState {
    type Event = ButtonEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ButtonEvent> {
        match event {
            TuiEvent::Enter if self.focused => Some(ButtonEvent::Pressed),
            TuiEvent::MouseClick(x, y) if self.area.contains(Position::new(*x, *y)) => {
                Some(ButtonEvent::Pressed)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_width_includes_chrome() {
        assert_eq!(Button::width("Add to Cart"), 15);
    }

    #[test]
    fn test_click_inside_presses_once() {
        let mut state = ButtonState {
            area: Rect::new(2, 10, 15, 3),
            focused: false,
        };
        assert_eq!(state.handle_event(&TuiEvent::MouseClick(5, 11)), Some(ButtonEvent::Pressed));
        assert_eq!(state.handle_event(&TuiEvent::MouseClick(17, 11)), None);
        assert_eq!(state.handle_event(&TuiEvent::MouseClick(5, 13)), None);
    }

    #[test]
    fn test_enter_requires_focus() {
        let mut state = ButtonState::default();
        assert_eq!(state.handle_event(&TuiEvent::Enter), None);
        state.focused = true;
        assert_eq!(state.handle_event(&TuiEvent::Enter), Some(ButtonEvent::Pressed));
    }

    #[test]
    fn test_outline_renders_label() {
        let area = Rect::new(0, 0, 20, BUTTON_HEIGHT);
        let mut buf = Buffer::empty(area);
        Button::new("Add to Wishlist")
            .variant(ButtonVariant::Outline)
            .render(area, &mut buf);
        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Add to Wishlist"));
        assert!(text.contains('╭'));
    }
}

//! # Popup Component
//!
//! Transient notification in the top-right corner of the page body, with
//! a `Close` control. Opened by add-to-cart / add-to-wishlist.
//!
//! The popup draws nothing when there is no message. It owns no timer:
//! auto-dismiss is scheduled by the event loop from the reducer's effect.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `PopupState` lives in `TuiState` and remembers where `Close` was drawn
//! - `Popup` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const CLOSE_LABEL: &str = "Close";
const CLOSE_GAP: u16 = 2;
/// Distance from the top and right edges of the host area.
const MARGIN: u16 = 1;
/// Borders (2) plus one column of padding per side.
const HORIZONTAL_OVERHEAD: u16 = 4;
const POPUP_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupEvent {
    Close,
}

/// Where the popup and its `Close` control were last drawn (screen coordinates).
#[derive(Debug, Default)]
pub struct PopupState {
    pub area: Option<Rect>,
    pub close_area: Option<Rect>,
}

impl PopupState {
    /// Whether the visible popup covers screen position `(col, row)`.
    pub fn covers(&self, col: u16, row: u16) -> bool {
        self.area
            .is_some_and(|area| area.contains(Position::new(col, row)))
    }
}

impl EventHandler for PopupState {
    type Event = PopupEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<PopupEvent> {
        self.area?;
        match event {
            TuiEvent::Char('x') => Some(PopupEvent::Close),
            TuiEvent::MouseClick(x, y)
                if self
                    .close_area
                    .is_some_and(|close| close.contains(Position::new(*x, *y))) =>
            {
                Some(PopupEvent::Close)
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the popup.
pub struct Popup<'a> {
    message: Option<&'a str>,
    state: &'a mut PopupState,
}

impl<'a> Popup<'a> {
    pub fn new(message: Option<&'a str>, state: &'a mut PopupState) -> Self {
        Self { message, state }
    }

    /// Outer rect of a popup showing `message`, anchored top-right in `host`.
    pub fn area(message: &str, host: Rect) -> Rect {
        let wanted = message.width() as u16 + CLOSE_GAP + CLOSE_LABEL.width() as u16 + HORIZONTAL_OVERHEAD;
        let width = wanted.min(host.width.saturating_sub(MARGIN * 2));
        let height = POPUP_HEIGHT.min(host.height);
        let x = host.right().saturating_sub(width + MARGIN).max(host.x);
        let y = (host.y + MARGIN).min(host.bottom().saturating_sub(height));
        Rect::new(x, y, width, height)
    }
}

impl Component for Popup<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(message) = self.message else {
            self.state.area = None;
            self.state.close_area = None;
            return;
        };

        let overlay = Self::area(message, area);
        self.state.area = Some(overlay);
        frame.render_widget(Clear, overlay);

        let style = Style::default().bg(Color::Green).fg(Color::White);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(style)
            .style(style)
            .padding(Padding::horizontal(1));
        let inner = block.inner(overlay);

        let close_width = CLOSE_LABEL.width() as u16;
        let line = Line::from(vec![
            Span::styled(message, style.add_modifier(Modifier::BOLD)),
            Span::styled(" ".repeat(CLOSE_GAP as usize), style),
            Span::styled(CLOSE_LABEL, style.add_modifier(Modifier::UNDERLINED)),
        ]);
        frame.render_widget(Paragraph::new(line).block(block), overlay);

        // Close sits at the end of the line; on a narrow host it may be clipped.
        let close_x = inner.x + message.width() as u16 + CLOSE_GAP;
        self.state.close_area = (close_x + close_width <= inner.right())
            .then(|| Rect::new(close_x, inner.y, close_width, 1));
    }
}

//! # StarRating Component
//!
//! Five selectable stars bound to the user's rating.
//!
//! ## Contract
//!
//! - Star `i` (0-indexed) is filled iff `i < rating`.
//! - Activating star `i` emits `RatingEvent::Selected(i + 1)`, so the first
//!   star means 1, never 0. Each activation overwrites the last one.
//!
//! Activation is a mouse click on a star, Enter on the star under the
//! cursor while the widget has focus, or a digit key `1`–`5`.
//!
//! The widget never stores the rating itself; it is a prop from `App`.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use crate::core::state::MAX_RATING;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

pub const STAR_COUNT: usize = MAX_RATING as usize;
pub const FILLED_STAR: &str = "★";
pub const EMPTY_STAR: &str = "☆";

/// Gap between adjacent stars, in columns.
const STAR_GAP: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingEvent {
    Selected(u8),
}

/// Transient render wrapper: the current rating and, if focused, the cursor.
pub struct StarRating {
    pub rating: u8,
    pub cursor: Option<usize>,
}

impl StarRating {
    pub fn is_filled(rating: u8, index: usize) -> bool {
        index < rating as usize
    }

    /// Columns taken by one star plus its trailing gap.
    fn cell_width() -> u16 {
        FILLED_STAR.width() as u16 + STAR_GAP
    }

    /// Total width of the five stars.
    pub fn width() -> u16 {
        Self::cell_width() * STAR_COUNT as u16 - STAR_GAP
    }

    /// Which star (0-indexed) sits at column `x`, row `y` of `area`, if any.
    pub fn star_at(area: Rect, x: u16, y: u16) -> Option<usize> {
        if y != area.y || x < area.x {
            return None;
        }
        let offset = x - area.x;
        let index = (offset / Self::cell_width()) as usize;
        let within_glyph = offset % Self::cell_width() < FILLED_STAR.width() as u16;
        (index < STAR_COUNT && within_glyph).then_some(index)
    }
}

impl Widget for StarRating {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::with_capacity(STAR_COUNT * 2);
        for i in 0..STAR_COUNT {
            let (symbol, mut style) = if Self::is_filled(self.rating, i) {
                (FILLED_STAR, Style::default().fg(Color::Yellow))
            } else {
                (EMPTY_STAR, Style::default().fg(Color::DarkGray))
            };
            if self.cursor == Some(i) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(symbol, style));
            if i + 1 < STAR_COUNT {
                spans.push(Span::raw(" ".repeat(STAR_GAP as usize)));
            }
        }
        Line::from(spans).render(area, buf);
    }
}

/// Focus, cursor and last drawn area (page coordinates) of the rating widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct StarRatingState {
    pub cursor: usize,
    pub focused: bool,
    pub area: Rect,
}

impl EventHandler for StarRatingState {
    type Event = RatingEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<RatingEvent> {
        match event {
            TuiEvent::Char(c @ '1'..='5') => {
                let value = c.to_digit(10)? as u8;
                self.cursor = value as usize - 1;
                Some(RatingEvent::Selected(value))
            }
            TuiEvent::Left if self.focused => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            TuiEvent::Right if self.focused => {
                self.cursor = (self.cursor + 1).min(STAR_COUNT - 1);
                None
            }
            TuiEvent::Enter if self.focused => Some(RatingEvent::Selected(self.cursor as u8 + 1)),
            TuiEvent::MouseClick(x, y) => {
                let index = StarRating::star_at(self.area, *x, *y)?;
                self.cursor = index;
                Some(RatingEvent::Selected(index as u8 + 1))
            }
            _ => None,
        }
    }
}

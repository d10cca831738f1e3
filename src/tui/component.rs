use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component drawn straight into the frame.
///
/// Components follow the React pattern:
/// - They receive data via props (struct fields).
/// - They render to a `Frame` within a given `Rect`.
///
/// Pieces of the scrolling page body implement ratatui's `Widget` instead,
/// because the `ScrollView` only accepts widgets.
pub trait Component {
    /// Render the component into the given area.
    ///
    /// Takes `&mut self` so a component can record where its interactive
    /// parts landed, for hit-testing the next mouse click.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
///
/// This is how children talk to the parent: instead of holding a callback,
/// a component returns the high-level event and the parent maps it to an
/// `Action`.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}

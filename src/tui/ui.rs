use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollbarVisibility};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::footer::FOOTER_HEIGHT;
use crate::tui::components::header::HEADER_HEIGHT;
use crate::tui::components::{Footer, Header, Popup, ProductPage};
use crate::tui::layout::PageLayout;

/// Split the frame into header, scrollable body and footer.
pub fn page_areas(frame_area: Rect) -> [Rect; 3] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(HEADER_HEIGHT), Min(0), Length(FOOTER_HEIGHT)]).areas(frame_area)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let [header_area, body_area, footer_area] = page_areas(frame.area());

    Header.render(frame, header_area);

    draw_body(frame, body_area, app, tui);

    Footer {
        cart_items: app.cart.len(),
        wishlist_items: app.wishlist.len(),
        user_rating: app.user_rating,
    }
    .render(frame, footer_area);

    // Overlay last so it sits above the body.
    Popup::new(app.popup_message(), &mut tui.popup).render(frame, body_area);
}

fn draw_body(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    // One column for the scrollbar
    let content_width = area.width.saturating_sub(1);
    if tui.layout.width != content_width {
        tui.layout = PageLayout::compute(&app.product, content_width);
    }
    tui.body_area = area;
    tui.sync_hit_areas();
    clamp_scroll(tui, area.height);

    let canvas = Rect::new(0, 0, content_width, tui.layout.height);
    let mut scroll_view = ScrollView::new(Size::new(content_width, tui.layout.height))
        .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
        .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
    scroll_view.render_widget(
        ProductPage {
            product: &app.product,
            layout: &tui.layout,
            user_rating: app.user_rating,
            focus: tui.focus,
            rating_cursor: tui.rating.cursor,
        },
        canvas,
    );

    frame.render_stateful_widget(scroll_view, area, &mut tui.scroll_state);
}

/// Keep the scroll offset inside the canvas after a resize.
fn clamp_scroll(tui: &mut TuiState, visible_height: u16) {
    let max_scroll = tui.layout.height.saturating_sub(visible_height);
    let current = tui.scroll_state.offset();
    if current.y > max_scroll {
        tui.scroll_state.set_offset(Position {
            x: 0,
            y: max_scroll,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_ui_frames_page() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = draw(&app, &mut tui, 100, 60);
        assert!(text.contains("Welcome to Our Store"));
        assert!(text.contains("Handmade Ceramic Vase"));
        assert!(text.contains("Handmade Crafts. All Rights Reserved."));
        assert!(!text.contains("Close"));
    }

    #[test]
    fn test_popup_visible_only_while_set() {
        let mut app = test_app();
        let mut tui = TuiState::new();

        update(&mut app, Action::AddToCart);
        let text = draw(&app, &mut tui, 100, 60);
        assert!(text.contains("Added to cart"));
        assert!(tui.popup.close_area.is_some());

        update(&mut app, Action::DismissPopup);
        let text = draw(&app, &mut tui, 100, 60);
        assert!(!text.contains("Added to cart"));
        assert!(tui.popup.close_area.is_none());
    }

    #[test]
    fn test_draw_records_body_and_layout() {
        let app = test_app();
        let mut tui = TuiState::new();
        draw(&app, &mut tui, 80, 30);

        assert_eq!(tui.body_area, Rect::new(0, HEADER_HEIGHT, 80, 30 - HEADER_HEIGHT - FOOTER_HEIGHT));
        assert_eq!(tui.layout.width, 79);
        assert_eq!(tui.cart_button.area, tui.layout.cart_button);
        assert_eq!(tui.rating.area, tui.layout.rating);
    }

    #[test]
    fn test_scroll_clamped_after_resize() {
        let app = test_app();
        let mut tui = TuiState::new();
        tui.scroll_state.set_offset(Position { x: 0, y: 500 });
        draw(&app, &mut tui, 80, 30);
        let visible = 30 - HEADER_HEIGHT - FOOTER_HEIGHT;
        assert_eq!(
            tui.scroll_state.offset().y,
            tui.layout.height.saturating_sub(visible)
        );
    }
}

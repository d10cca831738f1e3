//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the page,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! crossterm event → TuiEvent → TuiState::dispatch() → Action
//!                                                       │
//!                  DismissTimer ← Effect ← update() ←───┘
//!                       │
//!                       └── PopupExpired(ticket) → action channel → update()
//! ```
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only redraws after an input event or an
//! action from the timer channel. It polls in short slices so an expired
//! popup disappears promptly even when the user is idle.

mod component;
pub mod components;
pub mod event;
pub mod layout;
pub mod timer;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;
use tui_scrollview::ScrollViewState;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::product::fixture;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{ButtonState, PopupEvent, PopupState, RatingEvent, StarRatingState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::layout::{PageLayout, screen_to_page};
use crate::tui::timer::DismissTimer;

/// How long one poll may block before the timer channel is checked again.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Which control Enter activates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    AddToCart,
    AddToWishlist,
    Rating,
}

impl Focus {
    pub fn next(self) -> Focus {
        match self {
            Focus::AddToCart => Focus::AddToWishlist,
            Focus::AddToWishlist => Focus::Rating,
            Focus::Rating => Focus::AddToCart,
        }
    }

    pub fn prev(self) -> Focus {
        match self {
            Focus::AddToCart => Focus::Rating,
            Focus::AddToWishlist => Focus::AddToCart,
            Focus::Rating => Focus::AddToWishlist,
        }
    }
}

/// TUI-specific presentation state (not part of the view's business state)
pub struct TuiState {
    pub scroll_state: ScrollViewState,
    pub focus: Focus,
    /// Layout of the page body as last drawn.
    pub layout: PageLayout,
    /// Screen area the body was last drawn into.
    pub body_area: Rect,
    pub cart_button: ButtonState,
    pub wishlist_button: ButtonState,
    pub rating: StarRatingState,
    pub popup: PopupState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        let mut state = Self {
            scroll_state: ScrollViewState::default(),
            focus: Focus::default(),
            layout: PageLayout::default(),
            body_area: Rect::default(),
            cart_button: ButtonState::default(),
            wishlist_button: ButtonState::default(),
            rating: StarRatingState::default(),
            popup: PopupState::default(),
        };
        state.set_focus(Focus::default());
        state
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.cart_button.focused = focus == Focus::AddToCart;
        self.wishlist_button.focused = focus == Focus::AddToWishlist;
        self.rating.focused = focus == Focus::Rating;
    }

    /// Copy the layout's interactive rects into the component states.
    pub fn sync_hit_areas(&mut self) {
        self.cart_button.area = self.layout.cart_button;
        self.wishlist_button.area = self.layout.wishlist_button;
        self.rating.area = self.layout.rating;
    }

    /// Route one input event to the page and return the resulting action, if any.
    ///
    /// The popup sees events first because it is drawn on top. Mouse clicks
    /// that reach the body are converted to page coordinates before the
    /// body's components see them.
    pub fn dispatch(&mut self, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::Quit => return Some(Action::Quit),
            TuiEvent::Resize => return None,
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                return None;
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                return None;
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                return None;
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                return None;
            }
            TuiEvent::FocusNext => {
                self.set_focus(self.focus.next());
                return None;
            }
            TuiEvent::FocusPrev => {
                self.set_focus(self.focus.prev());
                return None;
            }
            TuiEvent::Char('c') => return Some(Action::AddToCart),
            TuiEvent::Char('w') => return Some(Action::AddToWishlist),
            _ => {}
        }

        if let Some(PopupEvent::Close) = self.popup.handle_event(event) {
            return Some(Action::DismissPopup);
        }

        let page_event = match event {
            TuiEvent::MouseClick(col, row) => {
                if self.popup.covers(*col, *row) {
                    return None;
                }
                let (x, y) = screen_to_page(self.body_area, self.scroll_state.offset(), *col, *row)?;
                TuiEvent::MouseClick(x, y)
            }
            other => other.clone(),
        };
        let clicked = matches!(page_event, TuiEvent::MouseClick(..));

        if self.cart_button.handle_event(&page_event).is_some() {
            self.set_focus(Focus::AddToCart);
            return Some(Action::AddToCart);
        }
        if self.wishlist_button.handle_event(&page_event).is_some() {
            self.set_focus(Focus::AddToWishlist);
            return Some(Action::AddToWishlist);
        }
        if let Some(RatingEvent::Selected(rating)) = self.rating.handle_event(&page_event) {
            if clicked {
                self.set_focus(Focus::Rating);
            }
            return Some(Action::SetRating(rating));
        }
        None
    }
}

/// Apply an action to the state and carry out its effect.
///
/// Returns `true` when the page should close.
pub fn apply(
    app: &mut App,
    timer: &mut DismissTimer,
    action: Action,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match update(app, action) {
        Effect::None => false,
        Effect::ScheduleDismiss { ticket, after } => {
            timer.schedule(ticket, after, tx.clone());
            false
        }
        Effect::Quit => true,
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(fixture(), &config);
    let mut tui = TuiState::new();
    let mut timer = DismissTimer::new(app.dismiss_policy);
    info!(
        "Showing product {} (popup delay {:?}, stale timers: {})",
        app.product.id,
        app.popup_delay,
        app.dismiss_policy.label()
    );

    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new();
    if let Err(e) = &terminal_mode_guard {
        warn!("Failed to enable terminal modes: {}", e);
    }

    let result = event_loop(&mut terminal, &mut app, &mut tui, &mut timer);

    timer.cancel();
    drop(terminal_mode_guard);
    ratatui::restore();

    match serde_json::to_string(&app.summary()) {
        Ok(summary) => info!("Final view state: {}", summary),
        Err(e) => warn!("Failed to serialize final view state: {}", e),
    }
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    timer: &mut DismissTimer,
) -> std::io::Result<()> {
    // Channel for actions from background tasks (dismiss timers)
    let (tx, rx) = mpsc::channel();
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let first_event = poll_event_timeout(POLL_INTERVAL);
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;
            if let Some(action) = tui.dispatch(&event)
                && apply(app, timer, action, &tx)
            {
                return Ok(());
            }
        }

        // Handle background task actions
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if apply(app, timer, action, &tx) {
                return Ok(());
            }
        }
    }
}

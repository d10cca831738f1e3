//! # Actions
//!
//! Everything that can happen on the product page becomes an `Action`.
//! User presses `c`? That's `Action::AddToCart`.
//! The dismiss timer fires? That's `Action::PopupExpired(ticket)`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` describing any side effect the adapter must perform. No side
//! effects happen here. Timers are started elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};
use std::time::Duration;

use crate::DismissPolicy;
use crate::core::state::{App, CART_MESSAGE, MAX_RATING, PopupTicket, WISHLIST_MESSAGE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddToCart,
    AddToWishlist,
    /// The user closed the popup.
    DismissPopup,
    /// A dismiss timer fired for the popup that carried this ticket.
    PopupExpired(PopupTicket),
    SetRating(u8),
    Quit,
}

/// Side effects requested by `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Start a timer that sends `PopupExpired(ticket)` after `after`.
    ScheduleDismiss { ticket: PopupTicket, after: Duration },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::AddToCart => {
            app.cart.push(app.product.clone());
            schedule_notice(app, CART_MESSAGE)
        }
        Action::AddToWishlist => {
            app.wishlist.push(app.product.clone());
            schedule_notice(app, WISHLIST_MESSAGE)
        }
        Action::DismissPopup => {
            if let Some(notice) = app.popup.take() {
                info!("Popup {:?} closed by user", notice.ticket);
            }
            Effect::None
        }
        Action::PopupExpired(ticket) => {
            let clears = match (&app.popup, app.dismiss_policy) {
                (None, _) => false,
                (Some(_), DismissPolicy::Legacy) => true,
                (Some(notice), DismissPolicy::Supersede) => notice.ticket == ticket,
            };
            if clears {
                info!("Popup auto-dismissed by timer {:?}", ticket);
                app.popup = None;
            } else {
                debug!("Ignoring stale dismiss timer {:?}", ticket);
            }
            Effect::None
        }
        Action::SetRating(rating) => {
            app.user_rating = rating.min(MAX_RATING);
            info!("User rating set to {}", app.user_rating);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn schedule_notice(app: &mut App, message: &str) -> Effect {
    let ticket = app.show_popup(message);
    info!(
        "Popup {:?} shown: {} (cart={}, wishlist={})",
        ticket,
        message,
        app.cart.len(),
        app.wishlist.len()
    );
    Effect::ScheduleDismiss {
        ticket,
        after: app.popup_delay,
    }
}

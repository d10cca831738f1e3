//! # Application State
//!
//! The product view's state: everything that changes while the page is open.
//! No TUI-specific types live here; focus and scroll state belong to `tui`.
//!
//! ```text
//! App
//! ├── product: Arc<Product>         // read-only fixture
//! ├── cart: Vec<Arc<Product>>       // append-only, duplicates allowed
//! ├── wishlist: Vec<Arc<Product>>   // append-only, duplicates allowed
//! ├── popup: Option<Notice>         // single-slot notification
//! ├── user_rating: u8               // 0 = not yet rated, else 1..=5
//! ├── popup_delay: Duration         // auto-dismiss delay
//! ├── dismiss_policy: DismissPolicy // what an expiring timer may clear
//! └── next_ticket: u64              // ticket issued to the next popup
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use crate::DismissPolicy;
use crate::core::config::{DEFAULT_POPUP_DELAY, ResolvedConfig};
use crate::core::product::Product;

/// Highest value the rating widget can hold.
pub const MAX_RATING: u8 = 5;

pub const CART_MESSAGE: &str = "Added to cart";
pub const WISHLIST_MESSAGE: &str = "Added to wishlist";

/// Identifies one shown popup so its dismiss timer can be matched against
/// whatever is on screen when the timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PopupTicket(pub u64);

/// The popup currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub ticket: PopupTicket,
    pub message: String,
}

pub struct App {
    pub product: Arc<Product>,
    pub cart: Vec<Arc<Product>>,
    pub wishlist: Vec<Arc<Product>>,
    pub popup: Option<Notice>,
    pub user_rating: u8,
    pub popup_delay: Duration,
    pub dismiss_policy: DismissPolicy,
    next_ticket: u64,
}

impl App {
    pub fn new(product: Arc<Product>) -> Self {
        Self {
            product,
            cart: Vec::new(),
            wishlist: Vec::new(),
            popup: None,
            user_rating: 0,
            popup_delay: DEFAULT_POPUP_DELAY,
            dismiss_policy: DismissPolicy::default(),
            next_ticket: 0,
        }
    }

    pub fn from_config(product: Arc<Product>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(product);
        app.popup_delay = config.popup_delay;
        app.dismiss_policy = config.dismiss_policy;
        app
    }

    /// Replace any visible popup with `message` and return the new ticket.
    pub(crate) fn show_popup(&mut self, message: &str) -> PopupTicket {
        self.next_ticket += 1;
        let ticket = PopupTicket(self.next_ticket);
        self.popup = Some(Notice {
            ticket,
            message: message.to_string(),
        });
        ticket
    }

    pub fn popup_message(&self) -> Option<&str> {
        self.popup.as_ref().map(|n| n.message.as_str())
    }

    pub fn summary(&self) -> ViewSummary {
        ViewSummary {
            product_id: self.product.id,
            cart_items: self.cart.len(),
            wishlist_items: self.wishlist.len(),
            user_rating: self.user_rating,
            popup: self.popup_message().map(str::to_string),
        }
    }
}

/// Snapshot of the view, logged on exit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewSummary {
    pub product_id: u32,
    pub cart_items: usize,
    pub wishlist_items: usize,
    pub user_rating: u8,
    pub popup: Option<String>,
}

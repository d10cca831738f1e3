use std::sync::mpsc;
use std::time::Duration;

use craftshop::DismissPolicy;
use craftshop::core::action::Action;
use craftshop::core::product::fixture;
use craftshop::core::state::{App, CART_MESSAGE, WISHLIST_MESSAGE};
use craftshop::tui::apply;
use craftshop::tui::timer::DismissTimer;

// ============================================================================
// Helper Functions
// ============================================================================

/// The view wired the way the event loop wires it: state, timer, action channel.
struct Harness {
    app: App,
    timer: DismissTimer,
    tx: mpsc::Sender<Action>,
    rx: mpsc::Receiver<Action>,
}

impl Harness {
    fn new(policy: DismissPolicy) -> Self {
        let mut app = App::new(fixture());
        app.dismiss_policy = policy;
        let (tx, rx) = mpsc::channel();
        Self {
            app,
            timer: DismissTimer::new(policy),
            tx,
            rx,
        }
    }

    fn act(&mut self, action: Action) {
        apply(&mut self.app, &mut self.timer, action, &self.tx);
    }

    /// Let `ms` of (paused) time pass, then feed fired timers back in.
    async fn wait(&mut self, ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
        while let Ok(action) = self.rx.try_recv() {
            self.act(action);
        }
    }
}

// ============================================================================
// Popup lifecycle
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_popup_auto_dismisses_after_delay() {
    let mut h = Harness::new(DismissPolicy::Supersede);
    h.act(Action::AddToCart);
    assert_eq!(h.app.popup_message(), Some(CART_MESSAGE));

    h.wait(1999).await;
    assert_eq!(h.app.popup_message(), Some(CART_MESSAGE));

    h.wait(2).await;
    assert_eq!(h.app.popup_message(), None);
    assert_eq!(h.app.cart.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_manual_close_before_expiry() {
    let mut h = Harness::new(DismissPolicy::Supersede);
    h.act(Action::AddToWishlist);
    h.wait(500).await;
    h.act(Action::DismissPopup);
    assert_eq!(h.app.popup_message(), None);

    // The pending timer fires into an already-closed popup
    h.wait(2000).await;
    assert_eq!(h.app.popup_message(), None);
    assert_eq!(h.app.wishlist.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_newer_popup_survives_older_timer() {
    let mut h = Harness::new(DismissPolicy::Supersede);
    h.act(Action::AddToCart);
    h.wait(1500).await;
    h.act(Action::AddToWishlist);

    // First popup's deadline passes; the newer one stays for its full delay
    h.wait(1000).await;
    assert_eq!(h.app.popup_message(), Some(WISHLIST_MESSAGE));

    h.wait(1001).await;
    assert_eq!(h.app.popup_message(), None);
}

#[tokio::test(start_paused = true)]
async fn test_legacy_timer_cuts_newer_popup_short() {
    let mut h = Harness::new(DismissPolicy::Legacy);
    h.act(Action::AddToCart);
    h.wait(1500).await;
    h.act(Action::AddToWishlist);

    h.wait(501).await;
    assert_eq!(h.app.popup_message(), None);
}

// ============================================================================
// Collections and rating
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_repeated_adds_append_without_dedup() {
    let mut h = Harness::new(DismissPolicy::Supersede);
    for _ in 0..3 {
        h.act(Action::AddToCart);
    }
    h.act(Action::AddToWishlist);
    h.act(Action::AddToWishlist);
    h.wait(3000).await;

    assert_eq!(h.app.cart.len(), 3);
    assert_eq!(h.app.wishlist.len(), 2);
    assert!(h.app.cart.iter().all(|p| p.id == h.app.product.id));
    assert_eq!(h.app.popup_message(), None);
}

#[tokio::test(start_paused = true)]
async fn test_last_rating_wins_and_survives_popups() {
    let mut h = Harness::new(DismissPolicy::Supersede);
    h.act(Action::SetRating(2));
    h.act(Action::SetRating(5));
    h.act(Action::AddToCart);
    h.act(Action::SetRating(3));
    h.wait(2500).await;

    assert_eq!(h.app.user_rating, 3);
    let summary = h.app.summary();
    assert_eq!(summary.user_rating, 3);
    assert_eq!(summary.cart_items, 1);
    assert_eq!(summary.popup, None);
}

#[tokio::test(start_paused = true)]
async fn test_quit_reports_done() {
    let mut h = Harness::new(DismissPolicy::Supersede);
    assert!(!apply(&mut h.app, &mut h.timer, Action::AddToCart, &h.tx));
    assert!(apply(&mut h.app, &mut h.timer, Action::Quit, &h.tx));
}

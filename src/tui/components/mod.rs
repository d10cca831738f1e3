//! # TUI Components
//!
//! All UI components for the product page.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `Header`, `Footer`: page framing
//! - `Card`, `CardContent`: structural wrappers
//! - `ReviewCard`: one customer review with its static stars
//! - `ProductPage`: the scrollable body
//!
//! ### Interactive Components (Event-Driven)
//!
//! Components that emit events upward instead of mutating anything:
//! - `Button` → `ButtonEvent::Pressed`
//! - `StarRating` → `RatingEvent::Selected(n)`
//! - `Popup` → `PopupEvent::Close`
//!
//! Each has a small `*State` holding only presentation data (where it was
//! drawn, focus). The values they display (rating, popup message) are
//! props from `App`; no component keeps its own copy.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── header.rs
//! ├── footer.rs
//! ├── button.rs
//! ├── card.rs
//! ├── popup.rs
//! ├── star_rating.rs
//! ├── review.rs
//! └── product_page.rs
//! ```

pub mod button;
pub mod card;
pub mod footer;
pub mod header;
pub mod popup;
pub mod product_page;
pub mod review;
pub mod star_rating;

pub use button::{Button, ButtonEvent, ButtonState, ButtonVariant};
pub use footer::Footer;
pub use header::Header;
pub use popup::{Popup, PopupEvent, PopupState};
pub use product_page::ProductPage;
pub use star_rating::{RatingEvent, StarRating, StarRatingState};

//! # Core Application Logic
//!
//! Everything the product page *does*, with no knowledge of how it is drawn.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Product (fixture)    │
//!                    │  • App (view state)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • config (file + env)  │
//!                    │                         │
//!                    │  No UI. Only config     │
//!                    │  touches the disk.      │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`]: The static product fixture
//! - [`state`]: The `App` struct, which owns cart, wishlist, popup and rating
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Settings file, env and CLI resolution (the only module doing I/O)
//!
//! `product`, `state` and `action` are pure: no I/O, no clock, no terminal.

pub mod action;
pub mod config;
pub mod product;
pub mod state;

//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::DismissPolicy;
use crate::core::product::fixture;
use crate::core::state::App;

/// Creates a test App over the product fixture with default settings.
pub fn test_app() -> App {
    App::new(fixture())
}

pub fn test_app_with_policy(policy: DismissPolicy) -> App {
    let mut app = test_app();
    app.dismiss_policy = policy;
    app
}

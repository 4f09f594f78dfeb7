//! Simulated Request Layer
//!
//! Fixed-delay timers standing in for a transport. Nothing tracks in-flight
//! requests: a re-submit before the delay fires simply runs a second one.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::window;
use thiserror::Error;

use crate::nav::Page;

/// Login / registration round trip
pub const AUTH_DELAY_MS: u32 = 2000;
/// Pause between the success toast and the follow-up navigation
pub const REDIRECT_DELAY_MS: u32 = 1500;
/// Dialog form round trip, and the pause before card insertion/removal
pub const FOLLOW_UP_DELAY_MS: u32 = 500;
/// Card exit animation length
pub const EXIT_ANIM_MS: u32 = 300;
/// Drawer close delay after a nav link click, so navigation can start
pub const SIDEBAR_CLOSE_DELAY_MS: u32 = 100;
/// Settle time before a shown dialog's transform is normalized
pub const TRANSFORM_FIX_DELAY_MS: u32 = 10;

/// A rejected simulated request. Never produced today; the variant exists so
/// handlers already run through the error path a real transport would use.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("request failed: {0}")]
pub struct RequestError(pub String);

/// One fixed-delay fake round trip. De-duplication of concurrent sends
/// would live here if it ever existed.
pub struct SimulatedRequest {
    delay_ms: u32,
}

impl SimulatedRequest {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }

    pub async fn send(self) -> Result<(), RequestError> {
        TimeoutFuture::new(self.delay_ms).await;
        Ok(())
    }
}

/// Full page navigation, not an in-app route change
pub fn redirect(page: Page) {
    web_sys::console::log_1(&format!("[Submit] redirecting to {}", page.file_name()).into());
    if window().location().set_href(page.file_name()).is_err() {
        web_sys::console::warn_1(&format!("[Submit] navigation to {} failed", page.file_name()).into());
    }
}

pub async fn redirect_after(page: Page, delay_ms: u32) {
    TimeoutFuture::new(delay_ms).await;
    redirect(page);
}

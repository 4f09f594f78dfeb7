//! Application Context
//!
//! Shared UI state provided via Leptos Context API. The overlay machine and
//! the toast slot live here so every mutation goes through one owner.

use leptos::prelude::*;

use crate::overlay::OverlayState;
use crate::toast::{ToastKind, ToastState};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct UiContext {
    /// Sidebar visibility and scroll-lock ownership - read
    pub overlay: ReadSignal<OverlayState>,
    set_overlay: WriteSignal<OverlayState>,
    /// The single live toast slot - read
    pub toast: ReadSignal<ToastState>,
    set_toast: WriteSignal<ToastState>,
    /// Bumped when the add-workspace dialog closes and its form must clear - read
    pub workspace_form_reset: ReadSignal<u32>,
    set_workspace_form_reset: WriteSignal<u32>,
}

impl UiContext {
    pub fn new(
        overlay: (ReadSignal<OverlayState>, WriteSignal<OverlayState>),
        toast: (ReadSignal<ToastState>, WriteSignal<ToastState>),
        workspace_form_reset: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            overlay: overlay.0,
            set_overlay: overlay.1,
            toast: toast.0,
            set_toast: toast.1,
            workspace_form_reset: workspace_form_reset.0,
            set_workspace_form_reset: workspace_form_reset.1,
        }
    }

    /// Show a toast, evicting whatever is currently visible
    pub fn notify(&self, message: impl Into<String>, kind: ToastKind) {
        let message = message.into();
        self.set_toast.update(|state| {
            state.notify(message, kind);
        });
    }

    /// Remove the toast identified by `seq`, if it is still showing
    pub fn expire_toast(&self, seq: u64) {
        self.set_toast.update(|state| state.expire(seq));
    }

    pub fn open_sidebar(&self) {
        self.set_overlay.update(|state| state.open_sidebar());
    }

    pub fn close_sidebar(&self) {
        self.set_overlay.update(|state| state.close_sidebar());
    }

    pub fn toggle_sidebar(&self) {
        self.set_overlay.update(|state| state.toggle_sidebar());
    }

    pub fn viewport_resized(&self, width: f64) {
        self.set_overlay.update(|state| state.viewport_resized(width));
    }

    pub fn dialog_will_show(&self, viewport_small: bool) {
        self.set_overlay
            .update(|state| state.dialog_will_show(viewport_small));
    }

    pub fn dialog_hidden(&self) {
        self.set_overlay.update(|state| state.dialog_hidden());
    }

    /// Ask the add-workspace form to clear its fields
    pub fn reset_workspace_form(&self) {
        self.set_workspace_form_reset.update(|version| *version += 1);
    }
}

//! Dialog Widget Boundary
//!
//! The dialogs themselves are driven by the external `dialogKit` widget;
//! this module binds its JS API, subscribes to its lifecycle events, and
//! arbitrates the scroll lock against the sidebar.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::{document, window};
use leptos::task::spawn_local;
use serde::Deserialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::UiContext;
use crate::overlay::MOBILE_BREAKPOINT_PX;
use crate::submit::TRANSFORM_FIX_DELAY_MS;

pub const ADD_WORKSPACE_DIALOG: &str = "addWorkspaceModal";
pub const EDIT_WORKSPACE_DIALOG: &str = "editWorkspaceModal";
pub const ADD_TASK_DIALOG: &str = "addTaskModal";
pub const EDIT_TASK_DIALOG: &str = "editTaskModal";
pub const EDIT_PROFILE_DIALOG: &str = "editProfileModal";

/// Fired by the widget just before a dialog becomes visible
const SHOW_EVENT: &str = "dialog:show";
/// Fired by the widget once a dialog has fully left the screen
const HIDDEN_EVENT: &str = "dialog:hidden";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "dialogKit"], js_name = show)]
    fn dialog_kit_show(id: &str);

    #[wasm_bindgen(js_namespace = ["window", "dialogKit"], js_name = hide)]
    fn dialog_kit_hide(id: &str);
}

/// Lifecycle payload the widget attaches to its events
#[derive(Debug, Deserialize)]
struct LifecycleDetail {
    id: String,
}

/// Typed handle over one dialog element. Lookup fails as `None` when the
/// current page does not carry the dialog.
#[derive(Clone)]
pub struct Dialog {
    id: String,
}

impl Dialog {
    pub fn lookup(id: &str) -> Option<Dialog> {
        document()
            .get_element_by_id(id)
            .map(|_| Dialog { id: id.to_string() })
    }

    pub fn show(&self) {
        dialog_kit_show(&self.id);
    }

    pub fn hide(&self) {
        dialog_kit_hide(&self.id);
    }

    fn panel(&self) -> Option<web_sys::HtmlElement> {
        document()
            .query_selector(&format!("#{} .modal-dialog", self.id))
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
    }

    /// Pin the panel in place so the widget's entry transform cannot leave
    /// it mispositioned on small screens.
    fn pin_transform(&self) {
        if let Some(panel) = self.panel() {
            let _ = panel.style().set_property("transform", "none");
        }
    }
}

/// Show a dialog if the current page has it; silently a no-op otherwise
pub fn show(id: &str) {
    if let Some(dialog) = Dialog::lookup(id) {
        dialog.show();
    }
}

/// Hide a dialog if the current page has it
pub fn hide(id: &str) {
    if let Some(dialog) = Dialog::lookup(id) {
        dialog.hide();
    }
}

fn clear_all_transforms() {
    let Ok(panels) = document().query_selector_all(".modal-dialog") else {
        return;
    };
    for index in 0..panels.length() {
        let Some(node) = panels.item(index) else {
            continue;
        };
        if let Some(panel) = node.dyn_ref::<web_sys::HtmlElement>() {
            let _ = panel.style().remove_property("transform");
        }
    }
}

fn viewport_small() -> bool {
    window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .is_some_and(|width| width <= MOBILE_BREAKPOINT_PX)
}

/// Wire the widget lifecycle into the overlay state. Installed once per
/// page load.
pub fn install_coordinator(ui: UiContext) {
    on_lifecycle(SHOW_EVENT, move |id| {
        web_sys::console::log_1(&format!("[DialogCoordinator] showing {id}").into());
        ui.dialog_will_show(viewport_small());
        spawn_local(async move {
            TimeoutFuture::new(TRANSFORM_FIX_DELAY_MS).await;
            if let Some(dialog) = Dialog::lookup(&id) {
                dialog.pin_transform();
            }
        });
    });

    on_lifecycle(HIDDEN_EVENT, move |id| {
        ui.dialog_hidden();
        clear_all_transforms();
        if id == ADD_WORKSPACE_DIALOG {
            ui.reset_workspace_form();
        }
    });
}

fn on_lifecycle(event: &'static str, handler: impl Fn(String) + 'static) {
    let closure = Closure::<dyn FnMut(web_sys::CustomEvent)>::new(move |ev: web_sys::CustomEvent| {
        let Some(raw) = ev.detail().as_string() else {
            return;
        };
        match serde_json::from_str::<LifecycleDetail>(&raw) {
            Ok(detail) => handler(detail.id),
            Err(err) => {
                web_sys::console::warn_1(
                    &format!("[DialogCoordinator] bad {event} payload: {err}").into(),
                );
            }
        }
    });
    let _ = document().add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

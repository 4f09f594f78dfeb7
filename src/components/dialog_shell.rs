//! Dialog Shell Component
//!
//! Markup the external dialog widget toggles. The widget owns visibility
//! and focus handling; this just renders the element it targets by id.

use leptos::prelude::*;

use crate::dialog;

#[component]
pub fn DialogShell(
    #[prop(into)] id: String,
    #[prop(into)] title: String,
    children: Children,
) -> impl IntoView {
    let close_id = id.clone();

    view! {
        <div id=id.clone() class="modal">
            <div class="modal-dialog">
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title">{title}</h5>
                        <button
                            type="button"
                            class="btn-close"
                            on:click=move |_| dialog::hide(&close_id)
                        ></button>
                    </div>
                    <div class="modal-body">{children()}</div>
                </div>
            </div>
        </div>
    }
}

//! Color Picker Component
//!
//! Swatch row for workspace accent colors; a single swatch is active.

use leptos::prelude::*;

/// Accent options offered when creating a workspace
pub const WORKSPACE_COLORS: &[&str] = &[
    "#6366f1", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#06b6d4",
];

#[component]
pub fn ColorPicker(
    selected: ReadSignal<String>,
    set_selected: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="color-options">
            {WORKSPACE_COLORS.iter().map(|color| {
                let value = color.to_string();
                let value_clone = value.clone();
                let is_selected = move || selected.get() == value;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "color-option active" } else { "color-option" }
                        style=format!("background: {color}")
                        on:click=move |_| set_selected.set(value_clone.clone())
                    ></button>
                }
            }).collect_view()}
        </div>
    }
}

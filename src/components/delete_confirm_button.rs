//! Delete Confirm Button Component
//!
//! Two-step delete: the first click arms, the second commits.

use leptos::prelude::*;

/// Delete action that asks before running `on_confirm`
///
/// `prompt` replaces the button while armed; ✗ disarms without calling back.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into, default = "Delete".to_string())] label: String,
    #[prop(into, default = "Delete?".to_string())] prompt: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let armed = RwSignal::new(false);

    let confirm = move |_| {
        armed.set(false);
        on_confirm.run(());
    };

    view! {
        <Show
            when=move || armed.get()
            fallback=move || view! {
                <button type="button" class=button_class.clone() on:click=move |_| armed.set(true)>
                    {label.clone()}
                </button>
            }
        >
            <span class="delete-confirm" role="group">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button type="button" class="confirm-btn" title="Confirm" on:click=confirm>"✓"</button>
                <button type="button" class="cancel-btn" title="Cancel" on:click=move |_| armed.set(false)>
                    "✗"
                </button>
            </span>
        </Show>
    }
}

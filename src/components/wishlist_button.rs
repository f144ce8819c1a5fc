use leptos::prelude::*;
use leptos::task::spawn_local;
use whisky_core::WishlistAdd;

use crate::api;

/// "Add to Wishlist" action for a reference whisky, with its result shown inline
#[component]
pub fn AddToWishlistButton(#[prop(into)] whisky_id: String) -> impl IntoView {
    let (added, set_added) = signal(false);
    let (pending, set_pending) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let on_click = move |_| {
        let whisky_id = whisky_id.clone();
        set_pending.set(true);
        set_error.set(None);
        spawn_local(async move {
            let args = WishlistAdd { reference_whisky_id: &whisky_id, notes: None };
            match api::add_to_wishlist(&args).await {
                Ok(_) => set_added.set(true),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_pending.set(false);
        });
    };

    view! {
        <div class="wishlist-action">
            <button
                type="button"
                class="btn btn-secondary btn-small"
                disabled=move || added.get() || pending.get()
                on:click=on_click
            >
                {move || if added.get() { "Added" } else { "Add to Wishlist" }}
            </button>
            {move || error.get().map(|e| view! { <p class="error-message">{e}</p> })}
        </div>
    }
}

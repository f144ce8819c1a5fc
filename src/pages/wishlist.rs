use leptos::prelude::*;
use leptos::task::spawn_local;
use whisky_core::format::whisky_subtitle;
use whisky_core::WishlistItem;

use crate::api;
use crate::store::{store_remove_wishlist_item, use_app_store, AppStateStoreFields};

#[component]
pub fn Wishlist() -> impl IntoView {
    let store = use_app_store();
    let (loading, set_loading) = signal(true);
    let (action_error, set_action_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_wishlist().await {
                Ok(page) => *store.wishlist().write() = page.items,
                Err(e) => log::error!("[Wishlist] Failed to fetch wishlist: {}", e),
            }
            set_loading.set(false);
        });
    });

    let on_remove = Callback::new(move |id: String| {
        set_action_error.set(None);
        spawn_local(async move {
            match api::remove_from_wishlist(&id).await {
                Ok(()) => store_remove_wishlist_item(&store, &id),
                Err(e) => set_action_error.set(Some(e.to_string())),
            }
        });
    });

    view! {
        {move || {
            if loading.get() {
                return view! { <p>"Loading..."</p> }.into_any();
            }
            view! {
                <div class="wishlist-page">
                    <h1>{move || format!("Wishlist ({})", store.wishlist().read().len())}</h1>
                    {move || action_error.get().map(|e| view! { <p class="error-message">{e}</p> })}
                    <Show
                        when=move || !store.wishlist().read().is_empty()
                        fallback=|| view! {
                            <div class="card empty-state">
                                <p>"Your wishlist is empty. Browse similar whiskies from your bottle details to add items."</p>
                            </div>
                        }
                    >
                        <div class="grid grid-3">
                            <For
                                each=move || store.wishlist().get()
                                key=|item| item.id.clone()
                                children=move |item| view! { <WishlistCard item=item on_remove=on_remove /> }
                            />
                        </div>
                    </Show>
                </div>
            }.into_any()
        }}
    }
}

#[component]
fn WishlistCard(item: WishlistItem, on_remove: Callback<String>) -> impl IntoView {
    let id = item.id.clone();
    let subtitle = whisky_subtitle(&item.whisky);

    view! {
        <div class="card wishlist-card">
            <strong>{item.whisky.name.clone()}</strong>
            <p class="muted small">{subtitle}</p>
            {item.notes.clone().map(|notes| view! { <p class="small notes">{notes}</p> })}
            <button
                class="btn btn-danger btn-small"
                on:click=move |_| on_remove.run(id.clone())
            >
                "Remove"
            </button>
        </div>
    }
}

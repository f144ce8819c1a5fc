//! Collection Page
//!
//! The user's bottles with search, filters, sort and a grid/list toggle.

use leptos::prelude::*;
use leptos::task::spawn_local;
use whisky_core::constants::FILTER_REGIONS;
use whisky_core::format::bottle_subtitle;
use whisky_core::query::SORT_OPTIONS;
use whisky_core::{Bottle, BottleQuery, BottleStatus};

use crate::api;
use crate::components::DeleteConfirmButton;
use crate::store::{store_remove_bottle, use_app_store, AppStateStoreFields};

#[component]
pub fn Collection() -> impl IntoView {
    let store = use_app_store();
    let query = RwSignal::new(BottleQuery::default());
    let (loading, set_loading) = signal(true);
    let (grid_view, set_grid_view) = signal(true);
    let (action_error, set_action_error) = signal::<Option<String>>(None);

    // Refetch whenever any filter changes
    Effect::new(move |_| {
        let current = query.get();
        set_loading.set(true);
        spawn_local(async move {
            let result = api::list_bottles(&current).await;
            // a newer filter already has its own request in flight
            if query.get_untracked() != current {
                return;
            }
            match result {
                Ok(page) => {
                    log::debug!("[Collection] Loaded {} bottles", page.items.len());
                    *store.bottles().write() = page.items;
                }
                Err(e) => log::error!("[Collection] Failed to fetch bottles: {}", e),
            }
            set_loading.set(false);
        });
    });

    let on_delete = Callback::new(move |id: String| {
        set_action_error.set(None);
        spawn_local(async move {
            match api::delete_bottle(&id).await {
                Ok(()) => store_remove_bottle(&store, &id),
                Err(e) => {
                    log::error!("[Collection] Delete failed: {}", e);
                    set_action_error.set(Some(e.to_string()));
                }
            }
        });
    });

    view! {
        <div class="collection-page">
            <div class="page-header">
                <h1>{move || format!("My Collection ({})", store.bottles().read().len())}</h1>
                <a href="/bottles/add" class="btn btn-primary">"Add Bottle"</a>
            </div>

            <div class="filter-bar">
                <input
                    class="search-input"
                    placeholder="Search..."
                    prop:value=move || query.with(|q| q.search.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        query.update(|q| q.search = value);
                    }
                />
                <select
                    prop:value=move || query.with(|q| q.region.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        query.update(|q| q.region = value);
                    }
                >
                    <option value="">"All Regions"</option>
                    {FILTER_REGIONS.iter().map(|&region| view! {
                        <option value=region>{region}</option>
                    }).collect_view()}
                </select>
                <select
                    prop:value=move || query.with(|q| q.status.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        query.update(|q| q.status = value);
                    }
                >
                    <option value="">"All Status"</option>
                    {BottleStatus::ALL.iter().map(|status| view! {
                        <option value=status.as_str()>{status.label()}</option>
                    }).collect_view()}
                </select>
                <select
                    prop:value=move || query.with(BottleQuery::sort_key)
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        query.update(|q| q.set_sort_key(&value));
                    }
                >
                    {SORT_OPTIONS.iter().map(|&(value, label)| view! {
                        <option value=value>{label}</option>
                    }).collect_view()}
                </select>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| set_grid_view.update(|grid| *grid = !*grid)
                >
                    {move || if grid_view.get() { "List" } else { "Grid" }}
                </button>
            </div>

            {move || action_error.get().map(|e| view! { <p class="error-message">{e}</p> })}

            {move || {
                if loading.get() {
                    view! { <p>"Loading..."</p> }.into_any()
                } else if store.bottles().read().is_empty() {
                    view! {
                        <div class="card empty-state">
                            <p>"No bottles in your collection yet."</p>
                            <a href="/bottles/add" class="btn btn-primary">"Add Your First Bottle"</a>
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <div class=move || if grid_view.get() { "grid grid-3" } else { "bottle-list" }>
                            <For
                                each=move || store.bottles().get()
                                key=|bottle| bottle.id.clone()
                                children=move |bottle| view! {
                                    <BottleCard bottle=bottle on_delete=on_delete />
                                }
                            />
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn BottleCard(bottle: Bottle, on_delete: Callback<String>) -> impl IntoView {
    let id = bottle.id.clone();
    let subtitle = bottle_subtitle(&bottle);

    view! {
        <div class="card bottle-card">
            <a href=format!("/bottles/{}", bottle.id) class="bottle-name">{bottle.name}</a>
            <p class="muted small">{subtitle}</p>
            <div class="card-actions">
                <a href=format!("/bottles/{}/edit", bottle.id) class="btn btn-secondary btn-small">"Edit"</a>
                <DeleteConfirmButton
                    button_class="btn btn-danger btn-small"
                    on_confirm=Callback::new(move |_: ()| on_delete.run(id.clone()))
                />
            </div>
        </div>
    }
}

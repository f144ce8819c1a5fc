use leptos::prelude::*;
use leptos::task::spawn_local;
use whisky_core::{DistilleryQuery, DistillerySummary};

use crate::api;

#[component]
pub fn Distilleries() -> impl IntoView {
    let query = RwSignal::new(DistilleryQuery::default());
    let (distilleries, set_distilleries) = signal(Vec::<DistillerySummary>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let current = query.get();
        set_loading.set(true);
        spawn_local(async move {
            let result = api::list_distilleries(&current).await;
            // a newer search already has its own request in flight
            if query.get_untracked() != current {
                return;
            }
            match result {
                Ok(page) => set_distilleries.set(page.items),
                Err(e) => log::error!("[Distilleries] Failed to fetch distilleries: {}", e),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="distilleries-page">
            <h1>"Distilleries"</h1>
            <div class="filter-bar">
                <input
                    class="search-input"
                    placeholder="Search distilleries..."
                    prop:value=move || query.with(|q| q.search.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        query.update(|q| q.search = value);
                    }
                />
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
                <div class="grid grid-3">
                    <For
                        each=move || distilleries.get()
                        key=|d| d.id.clone()
                        children=|d| view! {
                            <a href=format!("/distilleries/{}", d.slug) class="card distillery-card">
                                <strong>{d.name}</strong>
                                <p class="muted small">{format!("{}, {}", d.region, d.country)}</p>
                            </a>
                        }
                    />
                </div>
            </Show>
        </div>
    }
}

//! Distillery Detail Page
//!
//! Reference data for one distillery and its catalog expressions.

use futures::future::try_join;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use whisky_core::{ApiError, DistilleryDetail as Distillery, ReferenceWhisky};

use crate::api;
use crate::components::LoadingSpinner;

type Loaded = (Distillery, Vec<ReferenceWhisky>);

#[component]
pub fn DistilleryDetail() -> impl IntoView {
    let params = use_params_map();
    let (state, set_state) = signal::<Option<Result<Loaded, ApiError>>>(None);

    Effect::new(move |_| {
        let slug = params.with(|p| p.get("slug").unwrap_or_default());
        set_state.set(None);
        spawn_local(async move {
            let result = try_join(api::get_distillery(&slug), api::distillery_whiskies(&slug))
                .await
                .map(|(distillery, whiskies)| (distillery, whiskies.items));
            if let Err(e) = &result {
                log::warn!("[DistilleryDetail] Could not load {}: {}", slug, e);
            }
            set_state.set(Some(result));
        });
    });

    // Err is rendered by the surrounding error boundary
    move || match state.get() {
        None => Ok(view! { <LoadingSpinner /> }.into_any()),
        Some(Ok((distillery, whiskies))) => Ok(view! {
            <DistilleryView distillery=distillery whiskies=whiskies />
        }.into_any()),
        Some(Err(_)) => Err(ApiError::NotFound("Distillery not found".to_string())),
    }
}

#[component]
fn DistilleryView(distillery: Distillery, whiskies: Vec<ReferenceWhisky>) -> impl IntoView {
    let count = whiskies.len();

    view! {
        <div class="distillery-detail-page">
            <h1>{distillery.name.clone()}</h1>
            <p class="muted">{format!("{}, {}", distillery.region, distillery.country)}</p>

            <div class="grid grid-2">
                <div class="card">
                    <h3>"Information"</h3>
                    {distillery.founded.map(|year| view! {
                        <p><strong>"Founded: "</strong>{year}</p>
                    })}
                    {distillery.owner.clone().map(|owner| view! {
                        <p><strong>"Owner: "</strong>{owner}</p>
                    })}
                    {distillery.website.clone().map(|site| {
                        let href = site.clone();
                        view! {
                            <p>
                                <strong>"Website: "</strong>
                                <a href=href target="_blank" rel="noopener noreferrer">{site}</a>
                            </p>
                        }
                    })}
                    {distillery.history.clone().map(|history| view! {
                        <h4>"History"</h4>
                        <p>{history}</p>
                    })}
                    {distillery.production_notes.clone().map(|notes| view! {
                        <h4>"Production"</h4>
                        <p>{notes}</p>
                    })}
                </div>
                <div>
                    <h3>{format!("Notable Expressions ({})", count)}</h3>
                    <div class="grid">
                        {whiskies.into_iter().map(|w| view! {
                            <div class="card">
                                <strong>{w.name}</strong>
                                {w.age_statement.map(|age| view! { <span>{format!(" ({} yr)", age)}</span> })}
                                {w.description.map(|d| view! { <p class="muted small">{d}</p> })}
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

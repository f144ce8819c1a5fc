//! Bottle Detail Page
//!
//! Full bottle record plus server-scored similar whiskies.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use whisky_core::constants::SIMILAR_LIMIT;
use whisky_core::format::{age_label, match_percent, stars_out_of_five, whisky_subtitle};
use whisky_core::{Bottle, SimilarWhisky};

use crate::api;
use crate::components::{AddToWishlistButton, DeleteConfirmButton, FlavorProfileInput};

#[component]
pub fn BottleDetail() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let (bottle, set_bottle) = signal::<Option<Bottle>>(None);
    let (similar, set_similar) = signal(Vec::<SimilarWhisky>::new());
    let (loading, set_loading) = signal(true);
    let (action_error, set_action_error) = signal::<Option<String>>(None);

    let bottle_id = move || params.with(|p| p.get("id").unwrap_or_default());

    {
        let navigate = navigate.clone();
        Effect::new(move |_| {
            let id = bottle_id();
            let navigate = navigate.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api::get_bottle(&id).await {
                    Ok(loaded) => {
                        let matchable = loaded.has_flavor_profile();
                        set_bottle.set(Some(loaded));
                        // similarity needs a non-zero profile to score against
                        if matchable {
                            match api::similar_whiskies(&id, SIMILAR_LIMIT).await {
                                Ok(items) => set_similar.set(items),
                                Err(e) => log::warn!("[BottleDetail] Similar whiskies unavailable: {}", e),
                            }
                        } else {
                            set_similar.set(Vec::new());
                        }
                    }
                    Err(e) => {
                        log::warn!("[BottleDetail] Could not load bottle {}: {}", id, e);
                        navigate("/collection", Default::default());
                    }
                }
                set_loading.set(false);
            });
        });
    }

    let on_delete = Callback::new(move |_: ()| {
        let id = bottle_id();
        let navigate = navigate.clone();
        set_action_error.set(None);
        spawn_local(async move {
            match api::delete_bottle(&id).await {
                Ok(()) => navigate("/collection", Default::default()),
                Err(e) => set_action_error.set(Some(e.to_string())),
            }
        });
    });

    view! {
        {move || {
            if loading.get() {
                return view! { <p>"Loading..."</p> }.into_any();
            }
            let Some(b) = bottle.get() else {
                return view! { <p>"Bottle not found"</p> }.into_any();
            };
            view! {
                <div class="bottle-detail-page">
                    <div class="page-header">
                        <h1>{b.name.clone()}</h1>
                        <div class="header-actions">
                            <a href=format!("/bottles/{}/edit", b.id) class="btn btn-secondary">"Edit"</a>
                            <DeleteConfirmButton button_class="btn btn-danger" prompt="Delete this bottle?" on_confirm=on_delete />
                        </div>
                    </div>
                    {move || action_error.get().map(|e| view! { <p class="error-message">{e}</p> })}

                    <div class="grid grid-2">
                        <BottleInfo bottle=b.clone() />
                        {b.tasting_notes.clone().map(|notes| view! {
                            <div class="card">
                                <h3>"Tasting Notes"</h3>
                                <p>{notes}</p>
                            </div>
                        })}
                    </div>

                    {b.flavor_profile.map(|profile| view! {
                        <div class="card flavor-card">
                            <h3>"Flavor Profile"</h3>
                            <FlavorProfileInput value=profile readonly=true />
                        </div>
                    })}

                    <Show when=move || !similar.get().is_empty()>
                        <div class="similar-section">
                            <h3>"Similar Whiskies"</h3>
                            <div class="grid grid-3">
                                <For
                                    each=move || similar.get()
                                    key=|item| item.whisky.id.clone()
                                    children=|item| view! { <SimilarCard item=item /> }
                                />
                            </div>
                        </div>
                    </Show>
                </div>
            }.into_any()
        }}
    }
}

/// Details card; optional fields render only when present
#[component]
fn BottleInfo(bottle: Bottle) -> impl IntoView {
    view! {
        <div class="card">
            <h3>"Details"</h3>
            <p>
                <strong>"Distillery: "</strong>
                {bottle.distillery_name.clone()}
                {bottle.distillery.clone().map(|d| view! {
                    " (" <a href=format!("/distilleries/{}", d.slug)>{d.name}</a> ")"
                })}
            </p>
            <p><strong>"Region: "</strong>{format!("{}, {}", bottle.region, bottle.country)}</p>
            <p><strong>"Age: "</strong>{age_label(bottle.age_statement)}</p>
            {bottle.abv.map(|abv| view! { <p><strong>"ABV: "</strong>{format!("{}%", abv)}</p> })}
            {bottle.size_ml.map(|size| view! { <p><strong>"Size: "</strong>{format!("{}ml", size)}</p> })}
            <p><strong>"Status: "</strong>{bottle.status.as_str()}</p>
            {bottle.rating.map(|rating| view! {
                <p><strong>"Rating: "</strong>{stars_out_of_five(rating)}</p>
            })}
            {bottle.purchase_price.map(|price| view! {
                <p><strong>"Price: "</strong>{format!("${}", price)}</p>
            })}
            {bottle.purchase_date.clone().map(|date| view! {
                <p><strong>"Purchased: "</strong>{date}</p>
            })}
            {bottle.purchase_location.clone().map(|location| view! {
                <p><strong>"Location: "</strong>{location}</p>
            })}
        </div>
    }
}

#[component]
fn SimilarCard(item: SimilarWhisky) -> impl IntoView {
    let subtitle = whisky_subtitle(&item.whisky);
    view! {
        <div class="card similar-card">
            <strong>{item.whisky.name.clone()}</strong>
            <p class="muted small">{subtitle}</p>
            <p class="small">{format!("Match: {}%", match_percent(item.similarity_score))}</p>
            <AddToWishlistButton whisky_id=item.whisky.id.clone() />
        </div>
    }
}

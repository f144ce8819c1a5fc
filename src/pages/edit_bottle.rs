use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use whisky_core::{ApiError, Bottle, BottleFormData};

use crate::api;
use crate::components::BottleForm;

#[component]
pub fn EditBottle() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let (bottle, set_bottle) = signal::<Option<Bottle>>(None);
    let (loading, set_loading) = signal(true);

    let bottle_id = move || params.with(|p| p.get("id").unwrap_or_default());

    {
        let navigate = navigate.clone();
        Effect::new(move |_| {
            let id = bottle_id();
            let navigate = navigate.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api::get_bottle(&id).await {
                    Ok(loaded) => set_bottle.set(Some(loaded)),
                    Err(e) => {
                        log::warn!("[EditBottle] Could not load bottle {}: {}", id, e);
                        navigate("/collection", Default::default());
                    }
                }
                set_loading.set(false);
            });
        });
    }

    view! {
        {move || {
            if loading.get() {
                return view! { <p>"Loading..."</p> }.into_any();
            }
            let Some(current) = bottle.get() else {
                return view! { <p>"Bottle not found"</p> }.into_any();
            };

            let id = current.id.clone();
            let navigate = navigate.clone();
            let submit = move |data: BottleFormData| {
                let id = id.clone();
                let navigate = navigate.clone();
                async move {
                    api::update_bottle(&id, &data.to_payload()).await?;
                    navigate(&format!("/bottles/{}", id), Default::default());
                    Ok::<(), ApiError>(())
                }
            };

            view! {
                <div class="edit-bottle-page">
                    <h1>{format!("Edit: {}", current.name)}</h1>
                    <BottleForm
                        initial=BottleFormData::from_bottle(&current)
                        on_submit=submit
                        submit_label="Save Changes"
                    />
                </div>
            }.into_any()
        }}
    }
}

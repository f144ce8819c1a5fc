use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use whisky_core::{ApiError, BottleFormData};

use crate::api;
use crate::components::BottleForm;

#[component]
pub fn AddBottle() -> impl IntoView {
    let navigate = use_navigate();

    let submit = move |data: BottleFormData| {
        let navigate = navigate.clone();
        async move {
            let bottle = api::create_bottle(&data.to_payload()).await?;
            log::info!("[AddBottle] Created bottle {}", bottle.id);
            navigate(&format!("/bottles/{}", bottle.id), Default::default());
            Ok::<(), ApiError>(())
        }
    };

    view! {
        <div class="add-bottle-page">
            <h1>"Add Bottle"</h1>
            <BottleForm on_submit=submit submit_label="Add to Collection" />
        </div>
    }
}

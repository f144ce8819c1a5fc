//! Flavor Profile Input Component
//!
//! Twelve 0-5 sliders, editable or read-only.

use leptos::prelude::*;
use whisky_core::flavor::{FLAVOR_LABELS, MAX_INTENSITY};
use whisky_core::form::parse_optional;
use whisky_core::FlavorProfile;

/// Slider grid for a flavor profile
///
/// With `readonly` the sliders are disabled and `on_change` is never called.
#[component]
pub fn FlavorProfileInput(
    #[prop(into)] value: Signal<FlavorProfile>,
    #[prop(optional)] on_change: Option<Callback<FlavorProfile>>,
    #[prop(optional)] readonly: bool,
) -> impl IntoView {
    view! {
        <div class="flavor-profile">
            {FLAVOR_LABELS.iter().map(|&(key, label)| {
                let current = move || value.get().get(key).unwrap_or_default();
                view! {
                    <div class="flavor-row">
                        <label class="flavor-label">{label}</label>
                        <input
                            type="range"
                            min="0"
                            max=MAX_INTENSITY.to_string()
                            step="1"
                            prop:value=move || current().to_string()
                            disabled=readonly
                            on:input=move |ev| {
                                if readonly { return; }
                                let Some(on_change) = on_change else { return };
                                if let Some(level) = parse_optional::<u8>(&event_target_value(&ev)) {
                                    on_change.run(value.get_untracked().with(key, level));
                                }
                            }
                        />
                        <span class="flavor-value">{current}</span>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

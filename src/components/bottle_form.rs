//! Bottle Form Component
//!
//! Controlled form shared by the add and edit pages.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use whisky_core::constants::{COUNTRIES, MAX_RATING, REGIONS};
use whisky_core::form::{display_optional, parse_optional};
use whisky_core::format::stars;
use whisky_core::{ApiError, BottleFormData, BottleStatus, FlavorProfile};

use super::FlavorProfileInput;

type Getter = fn(&BottleFormData) -> String;
type Setter = fn(&mut BottleFormData, String);

/// Plain text/date input bound to one form field
fn text_field(
    data: RwSignal<BottleFormData>,
    label: &'static str,
    input_type: &'static str,
    required: bool,
    get: Getter,
    set: Setter,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                type=input_type
                required=required
                prop:value=move || data.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    data.update(|d| set(d, value));
                }
            />
        </div>
    }
}

/// Number input; blank or invalid input clears the field
fn number_field(
    data: RwSignal<BottleFormData>,
    label: &'static str,
    min: &'static str,
    max: Option<&'static str>,
    step: &'static str,
    placeholder: &'static str,
    get: Getter,
    set: Setter,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                type="number"
                min=min
                max=max
                step=step
                placeholder=placeholder
                prop:value=move || data.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    data.update(|d| set(d, value));
                }
            />
        </div>
    }
}

/// Select over a fixed option list with a "Select..." placeholder
fn select_field(
    data: RwSignal<BottleFormData>,
    label: &'static str,
    options: &'static [&'static str],
    get: Getter,
    set: Setter,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <select
                required=true
                prop:value=move || data.with(get)
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    data.update(|d| set(d, value));
                }
            >
                <option value="">"Select..."</option>
                {options.iter().map(|&option| view! {
                    <option value=option>{option}</option>
                }).collect_view()}
            </select>
        </div>
    }
}

/// Form for creating or editing a bottle
///
/// `on_submit` receives the current form data; its error is shown above the
/// submit button, and the button stays disabled while it runs.
#[component]
pub fn BottleForm<F, Fut>(
    on_submit: F,
    #[prop(into)] submit_label: String,
    #[prop(optional)] initial: Option<BottleFormData>,
) -> impl IntoView
where
    F: Fn(BottleFormData) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), ApiError>> + 'static,
{
    let initial = initial.unwrap_or_default();
    let (show_profile, set_show_profile) = signal(initial.flavor_profile.is_some());
    let data = RwSignal::new(initial);
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        let form = data.get();
        let missing = form.missing_required();
        if !missing.is_empty() {
            set_error.set(Some(format!("Required: {}", missing.join(", "))));
            return;
        }
        set_submitting.set(true);
        let pending = on_submit(form);
        spawn_local(async move {
            if let Err(e) = pending.await {
                let message = e.to_string();
                set_error.set(Some(if message.is_empty() { "Failed to save".to_string() } else { message }));
            }
            set_submitting.set(false);
        });
    };

    let toggle_profile = move |_| {
        let showing = show_profile.get();
        set_show_profile.set(!showing);
        if !showing && data.with(|d| d.flavor_profile.is_none()) {
            data.update(|d| d.flavor_profile = Some(FlavorProfile::default()));
        }
    };

    let profile = Signal::derive(move || data.with(|d| d.flavor_profile.unwrap_or_default()));
    let on_profile_change = Callback::new(move |fp: FlavorProfile| {
        data.update(|d| d.flavor_profile = Some(fp));
    });

    view! {
        <form class="bottle-form" on:submit=handle_submit>
            <div class="grid grid-2">
                {text_field(data, "Name *", "text", true,
                    |d| d.name.clone(), |d, v| d.name = v)}
                {text_field(data, "Distillery *", "text", true,
                    |d| d.distillery_name.clone(), |d, v| d.distillery_name = v)}
                {select_field(data, "Country *", COUNTRIES,
                    |d| d.country.clone(), |d, v| d.country = v)}
                {select_field(data, "Region *", REGIONS,
                    |d| d.region.clone(), |d, v| d.region = v)}
                {number_field(data, "Age Statement", "0", None, "1", "NAS",
                    |d| display_optional(d.age_statement), |d, v| d.age_statement = parse_optional(&v))}
                {number_field(data, "ABV (%)", "0", Some("100"), "0.1", "",
                    |d| display_optional(d.abv), |d, v| d.abv = parse_optional(&v))}
                {number_field(data, "Size (ml)", "1", None, "1", "",
                    |d| display_optional(d.size_ml), |d, v| d.size_ml = parse_optional(&v))}

                <div class="form-group">
                    <label>"Rating"</label>
                    <select
                        prop:value=move || data.with(|d| display_optional(d.rating))
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            data.update(|d| d.rating = parse_optional(&value));
                        }
                    >
                        <option value="">"No rating"</option>
                        {(1..=MAX_RATING).map(|n| view! {
                            <option value=n.to_string()>{stars(n)}</option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label>"Status"</label>
                    <select
                        prop:value=move || data.with(|d| d.status.as_str())
                        on:change=move |ev| {
                            if let Some(status) = BottleStatus::parse(&event_target_value(&ev)) {
                                data.update(|d| d.status = status);
                            }
                        }
                    >
                        {BottleStatus::ALL.iter().map(|status| view! {
                            <option value=status.as_str()>{status.label()}</option>
                        }).collect_view()}
                    </select>
                </div>

                {number_field(data, "Purchase Price", "0", None, "0.01", "",
                    |d| display_optional(d.purchase_price), |d, v| d.purchase_price = parse_optional(&v))}
                {text_field(data, "Purchase Date", "date", false,
                    |d| d.purchase_date.clone(), |d, v| d.purchase_date = v)}
                {text_field(data, "Purchase Location", "text", false,
                    |d| d.purchase_location.clone(), |d, v| d.purchase_location = v)}
            </div>

            <div class="form-group">
                <label>"Tasting Notes"</label>
                <textarea
                    rows="3"
                    prop:value=move || data.with(|d| d.tasting_notes.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        data.update(|d| d.tasting_notes = value);
                    }
                ></textarea>
            </div>

            <div class="form-group">
                <button type="button" class="btn btn-secondary" on:click=toggle_profile>
                    {move || if show_profile.get() { "Hide Flavor Profile" } else { "Add Flavor Profile" }}
                </button>
            </div>

            <Show when=move || show_profile.get() && data.with(|d| d.flavor_profile.is_some())>
                <div class="card flavor-card">
                    <FlavorProfileInput value=profile on_change=on_profile_change />
                </div>
            </Show>

            {move || error.get().map(|e| view! { <p class="error-message">{e}</p> })}

            <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                {move || if submitting.get() { "Saving...".to_string() } else { submit_label.clone() }}
            </button>
        </form>
    }
}

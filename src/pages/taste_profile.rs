//! Taste Profile Page
//!
//! The backend's analysis of the whole collection, rendered as-is.

use leptos::prelude::*;
use leptos::task::spawn_local;
use whisky_core::flavor::flavor_label;
use whisky_core::format::{match_percent, whisky_subtitle};
use whisky_core::TasteProfile as Profile;

use crate::api;
use crate::components::{AddToWishlistButton, FlavorProfileInput, LoadingSpinner};

#[component]
pub fn TasteProfile() -> impl IntoView {
    let (profile, set_profile) = signal::<Option<Profile>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::taste_profile().await {
                Ok(loaded) => set_profile.set(Some(loaded)),
                Err(e) => {
                    log::error!("[TasteProfile] Failed to fetch profile: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    });

    view! {
        <div class="taste-profile-page">
            <h1>"Taste Profile"</h1>
            {move || {
                if let Some(e) = error.get() {
                    return view! { <p class="error-message">{e}</p> }.into_any();
                }
                match profile.get() {
                    None => view! { <LoadingSpinner /> }.into_any(),
                    Some(p) if p.bottles_with_profiles == 0 => view! {
                        <div class="card empty-state">
                            <p>{format!(
                                "{} bottles, none with a flavor profile yet. Add flavor profiles to your bottles to see your taste.",
                                p.total_bottles
                            )}</p>
                        </div>
                    }.into_any(),
                    Some(p) => view! { <ProfileView profile=p /> }.into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn ProfileView(profile: Profile) -> impl IntoView {
    let average = profile.rounded_average();
    let regions: Vec<(String, u32)> = profile
        .regions_by_count()
        .into_iter()
        .map(|(region, count)| (region.to_string(), count))
        .collect();

    view! {
        <p class="muted">{format!(
            "Based on {} of {} bottles",
            profile.bottles_with_profiles, profile.total_bottles
        )}</p>

        <div class="grid grid-2">
            <div class="card">
                <h3>"Average Profile"</h3>
                <FlavorProfileInput value=average readonly=true />
            </div>
            <div class="card">
                <h3>"Dominant Flavors"</h3>
                <ul class="dominant-flavors">
                    {profile.dominant_flavors.iter().map(|f| view! {
                        <li>{format!("{}: {:.1}", flavor_label(&f.flavor), f.average_intensity)}</li>
                    }).collect_view()}
                </ul>
                <h3>"Regions"</h3>
                <ul class="region-distribution">
                    {regions.into_iter().map(|(region, count)| view! {
                        <li>{format!("{}: {}", region, count)}</li>
                    }).collect_view()}
                </ul>
            </div>
        </div>

        {(!profile.recommendations.is_empty()).then(|| view! {
            <div class="similar-section">
                <h3>"Recommended For You"</h3>
                <div class="grid grid-3">
                    {profile.recommendations.iter().map(|item| view! {
                        <div class="card similar-card">
                            <strong>{item.whisky.name.clone()}</strong>
                            <p class="muted small">{whisky_subtitle(&item.whisky)}</p>
                            <p class="small">{format!("Match: {}%", match_percent(item.similarity_score))}</p>
                            <AddToWishlistButton whisky_id=item.whisky.id.clone() />
                        </div>
                    }).collect_view()}
                </div>
            </div>
        })}
    }
}

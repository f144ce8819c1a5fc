//! Error Boundary Component
//!
//! Catches `Err` values rendered by routed pages.

use leptos::error::Errors;
use leptos::prelude::*;

#[component]
pub fn AppErrorBoundary(children: Children) -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| {
            let clear = errors.clone();
            let message = move || {
                errors
                    .get()
                    .into_iter()
                    .next()
                    .map(|(_, e)| e.to_string())
                    .unwrap_or_else(|| "An unexpected error occurred".to_string())
            };
            view! {
                <div class="card error-card">
                    <h2>"Something went wrong"</h2>
                    <p class="muted">{message}</p>
                    <button
                        class="btn btn-primary"
                        on:click=move |_| clear.set(Errors::default())
                    >
                        "Try Again"
                    </button>
                </div>
            }
        }>
            {children()}
        </ErrorBoundary>
    }
}

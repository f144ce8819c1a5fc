use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use whisky_core::validation::{validate_registration, MIN_PASSWORD_LEN};

use crate::context::use_auth;

#[component]
pub fn Register() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (local_error, set_local_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_local_error.set(None);
        if let Err(message) = validate_registration(&password.get(), &confirm_password.get()) {
            set_local_error.set(Some(message));
            return;
        }
        let navigate = navigate.clone();
        let (email, password) = (email.get(), password.get());
        spawn_local(async move {
            if auth.register(email, password).await.is_ok() {
                navigate("/collection", Default::default());
            }
        });
    };

    // local validation wins over the server's message
    let shown_error = move || local_error.get().or_else(|| auth.error.get());

    view! {
        <div class="auth-page">
            <h1>"Register"</h1>
            <form on:submit=on_submit>
                <div class="form-group">
                    <label>"Email"</label>
                    <input
                        type="email"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Password"</label>
                    <input
                        type="password"
                        required=true
                        minlength=MIN_PASSWORD_LEN.to_string()
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Confirm Password"</label>
                    <input
                        type="password"
                        required=true
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                    />
                </div>
                {move || shown_error().map(|e| view! { <p class="error-message">{e}</p> })}
                <button type="submit" class="btn btn-primary btn-block">"Register"</button>
            </form>
            <p class="auth-switch">
                "Already have an account? " <a href="/login">"Login"</a>
            </p>
        </div>
    }
}

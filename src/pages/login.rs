use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::context::use_auth;

#[component]
pub fn Login() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();
        let (email, password) = (email.get(), password.get());
        spawn_local(async move {
            // failure message lands in auth.error
            if auth.login(email, password).await.is_ok() {
                navigate("/collection", Default::default());
            }
        });
    };

    view! {
        <div class="auth-page">
            <h1>"Login"</h1>
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
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>
                {move || auth.error.get().map(|e| view! { <p class="error-message">{e}</p> })}
                <button type="submit" class="btn btn-primary btn-block">"Login"</button>
            </form>
            <p class="auth-switch">
                "Don't have an account? " <a href="/register">"Register"</a>
            </p>
        </div>
    }
}

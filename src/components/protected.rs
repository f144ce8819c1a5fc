use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::context::use_auth;

/// Renders children only for a signed-in user, otherwise redirects to `/login`
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.is_logged_in()
            fallback=|| view! { <Redirect path="/login" /> }
        >
            {children()}
        </Show>
    }
}

//! Page Layout
//!
//! Header navigation around the routed content.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::context::use_auth;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    view! {
        <div class="app-layout">
            <header class="app-header">
                <nav class="container nav-bar">
                    <a href="/" class="brand">"Whisky Tracker"</a>
                    <Show
                        when=move || auth.is_logged_in()
                        fallback=|| view! {
                            <div class="nav-right">
                                <a href="/login">"Login"</a>
                                <a href="/register">"Register"</a>
                            </div>
                        }
                    >
                        {
                            let navigate = navigate.clone();
                            view! {
                                <a href="/collection">"Collection"</a>
                                <a href="/bottles/add">"Add Bottle"</a>
                                <a href="/wishlist">"Wishlist"</a>
                                <a href="/distilleries">"Distilleries"</a>
                                <a href="/profile">"Taste Profile"</a>
                                <div class="nav-right">
                                    <button
                                        class="logout-btn"
                                        on:click=move |_| {
                                            auth.logout();
                                            navigate("/login", Default::default());
                                        }
                                    >
                                        "Logout"
                                    </button>
                                </div>
                            }
                        }
                    </Show>
                </nav>
            </header>
            <main class="container main-content">
                {children()}
            </main>
        </div>
    }
}

//! Whisky Tracker App
//!
//! Router, shared context and the route table.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::{AppErrorBoundary, Layout, Protected};
use crate::context::{use_auth, AuthContext};
use crate::pages::{
    AddBottle, BottleDetail, Collection, Distilleries, DistilleryDetail, EditBottle, Login,
    Register, TasteProfile, Wishlist,
};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    provide_context(AuthContext::new());
    provide_context(Store::new(AppState::default()));

    view! {
        <Router>
            <Layout>
                <AppErrorBoundary>
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/login") view=Login />
                        <Route path=path!("/register") view=Register />
                        <Route path=path!("/collection") view=|| view! { <Protected><Collection /></Protected> } />
                        <Route path=path!("/bottles/add") view=|| view! { <Protected><AddBottle /></Protected> } />
                        <Route path=path!("/bottles/:id") view=|| view! { <Protected><BottleDetail /></Protected> } />
                        <Route path=path!("/bottles/:id/edit") view=|| view! { <Protected><EditBottle /></Protected> } />
                        <Route path=path!("/wishlist") view=|| view! { <Protected><Wishlist /></Protected> } />
                        <Route path=path!("/profile") view=|| view! { <Protected><TasteProfile /></Protected> } />
                        <Route path=path!("/distilleries") view=Distilleries />
                        <Route path=path!("/distilleries/:slug") view=DistilleryDetail />
                        <Route path=path!("/") view=Home />
                    </Routes>
                </AppErrorBoundary>
            </Layout>
        </Router>
    }
}

/// `/` sends signed-in users to their collection, everyone else to login
#[component]
fn Home() -> impl IntoView {
    let auth = use_auth();
    let target = if auth.is_logged_in() { "/collection" } else { "/login" };
    view! { <Redirect path=target /> }
}

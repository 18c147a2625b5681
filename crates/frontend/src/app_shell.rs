//! Root components.
//!
//! - `AppShell`: auth gate, shows `LoginPage` or `MainLayout`
//! - `MainLayout`: Shell + Sidebar + tabs

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

/// Opens the `?active=` tab (or home) once and renders one `TabPage` per
/// open tab.
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            view! { <TabPage tab=tab tabs_store=tabs_store /> }
                        }
                    />
                }
                .into_any()
            }
        />
    }
}

/// The tab store lives here, below `AuthProvider`, because tab opening is
/// gated by the signed-in role. Tabs are dropped when the session ends.
#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let role = Signal::derive(move || auth_state.with(|s| s.role()));
    let tabs_store = AppGlobalContext::new(role);
    provide_context(tabs_store);

    let is_authenticated = Memo::new(move |_| auth_state.with(|s| s.is_authenticated()));
    Effect::new(move |_| {
        if !is_authenticated.get() {
            tabs_store.reset();
        }
    });

    view! {
        <Show
            when=move || is_authenticated.get()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}

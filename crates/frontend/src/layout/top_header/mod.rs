//! Top bar: sidebar toggle, brand, signed-in employee and logout.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();

    let is_sidebar_visible = move || ctx.left_open.get();

    let user_name = move || {
        auth_state.with(|s| {
            s.profile
                .as_ref()
                .map(|p| p.display_name())
                .or_else(|| s.claims.as_ref().and_then(|c| c.name.clone()))
                .unwrap_or_else(|| "Invitado".to_string())
        })
    };
    let role_label = move || auth_state.with(|s| s.role().label());

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Ocultar navegación" } else { "Mostrar navegación" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"SellControl"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    <span>{user_name}</span>
                    <span class="top-header__role">{role_label}</span>
                </div>

                <button
                    class="top-header__icon-btn"
                    on:click=move |_| do_logout(set_auth_state, None)
                    title="Cerrar sesión"
                >
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}

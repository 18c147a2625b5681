use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Collapsible left column; hidden while `left_open` is false.
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <nav
            data-zone="left"
            class="left"
            class:hidden=move || !tabs_store.left_open.get()
            aria-label="Navegación principal"
        >
            {children()}
        </nav>
    }
}

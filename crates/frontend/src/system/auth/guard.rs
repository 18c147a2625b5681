use contracts::system::roles::Capability;
use leptos::prelude::*;

use super::context::use_auth;

/// Shows its children only when the signed-in role has `capability`.
#[component]
pub fn RequireCapability(capability: Capability, children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.can(capability))
            fallback=|| view! {
                <div class="alert alert--error">
                    "Acceso denegado. Tu rol no permite ver esta sección."
                </div>
            }
        >
            {children()}
        </Show>
    }
}

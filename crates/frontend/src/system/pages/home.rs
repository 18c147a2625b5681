use contracts::system::roles::Role;
use leptos::prelude::*;

use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::context::{current_role, use_auth};

#[component]
pub fn HomePage() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let greeting = move || {
        auth_state.with(|s| match &s.profile {
            Some(p) => format!("Bienvenido, {}", p.display_name()),
            None => "Bienvenido".to_string(),
        })
    };
    let unassigned = move || current_role() == Role::Unassigned;

    view! {
        <PageFrame page_id="home--dashboard" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{greeting}</h1>
                </div>
            </div>
            <div class="page__content">
                <p>
                    "SellControl reúne el catálogo, los clientes y el ciclo de venta: "
                    "ofertas, pedidos, albaranes y facturas."
                </p>
                <p>
                    "Las secciones disponibles dependen del rol asignado por un administrador."
                </p>
                <Show when=unassigned>
                    <div class="alert alert--warning">
                        "Todavía no tienes un rol asignado. Pide a un administrador que te asigne "
                        "uno para acceder a las secciones de la aplicación."
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}

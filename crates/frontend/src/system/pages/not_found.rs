use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::registry::HOME_KEY;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

#[component]
fn BackHomeButton() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    view! {
        <Button
            appearance=ButtonAppearance::Primary
            on_click=move |_| ctx.open_tab(HOME_KEY, &tab_label_for_key(HOME_KEY))
        >
            {icon("home")}
            " Volver al inicio"
        </Button>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageFrame page_id="not_found--status" category=PAGE_CAT_SYSTEM>
            <div class="page__content page__content--centered">
                <h1 class="page__title">"404"</h1>
                <p>"La página que buscas no existe."</p>
                <BackHomeButton />
            </div>
        </PageFrame>
    }
}

/// Shown instead of a tab the signed-in role may not open.
#[component]
pub fn AccessDeniedPage() -> impl IntoView {
    view! {
        <PageFrame page_id="forbidden--status" category=PAGE_CAT_SYSTEM>
            <div class="page__content page__content--centered">
                <div class="alert alert--error">
                    {icon("alert")}
                    " Acceso denegado. Tu rol no permite ver esta sección."
                </div>
                <BackHomeButton />
            </div>
        </PageFrame>
    }
}

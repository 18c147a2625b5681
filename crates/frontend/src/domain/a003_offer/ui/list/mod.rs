use contracts::domain::a003_offer::Offer;
use contracts::domain::a004_order::ConvertOfferRequest;
use contracts::system::roles::Capability;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::registry::{offer_editor_key, OFFER_EDITOR_KEY};
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::shared::sales_document::{DocumentListModel, DocumentListPage};
use crate::system::auth::context::can;
use crate::system::auth::guard::RequireCapability;

#[component]
pub fn OfferList() -> impl IntoView {
    view! {
        <RequireCapability capability=Capability::ViewOffers>
            <OfferListInner />
        </RequireCapability>
    }
}

#[component]
fn OfferListInner() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let model = DocumentListModel::<Offer>::new();
    let disabled = model.actions_disabled();

    let open_editor = move |key: String| tabs_store.open_tab(&key, &tab_label_for_key(&key));

    view! {
        <DocumentListPage model=model title="Ofertas" page_id="a003_offer--list">
            <Show when=move || can(Capability::CreateOffer)>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| open_editor(OFFER_EDITOR_KEY.to_string())
                >
                    {icon("plus")}
                    " Crear oferta"
                </Button>
            </Show>
            <Show when=move || can(Capability::EditOffer)>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| {
                        if let Some(offer) = model.selected() {
                            open_editor(offer_editor_key(&offer.offer_id));
                        }
                    }
                    disabled=disabled
                >
                    {icon("edit")}
                    " Editar oferta"
                </Button>
            </Show>
            <Show when=move || can(Capability::ConvertOfferToOrder)>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| model.convert_selected(
                        |offer: &Offer| ConvertOfferRequest::new(offer.offer_id.clone()),
                        "Oferta convertida en pedido correctamente",
                        "Error al convertir la oferta en pedido",
                    )
                    disabled=disabled
                >
                    {icon("arrow-right")}
                    " Convertir a pedido"
                </Button>
            </Show>
            <Show when=move || can(Capability::DownloadOfferPdf)>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| model.download_selected_pdf("Error al generar el PDF de la oferta")
                    disabled=disabled
                >
                    {icon("download")}
                    " Generar PDF oferta"
                </Button>
            </Show>
        </DocumentListPage>
    }
}

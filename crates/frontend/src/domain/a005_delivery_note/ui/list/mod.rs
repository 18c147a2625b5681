use contracts::domain::a005_delivery_note::DeliveryNote;
use contracts::domain::a006_invoice::ConvertDeliveryNoteRequest;
use contracts::system::roles::Capability;
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::sales_document::{DocumentListModel, DocumentListPage};
use crate::system::auth::context::can;
use crate::system::auth::guard::RequireCapability;

#[component]
pub fn DeliveryNoteList() -> impl IntoView {
    view! {
        <RequireCapability capability=Capability::ViewDeliveryNotes>
            <DeliveryNoteListInner />
        </RequireCapability>
    }
}

#[component]
fn DeliveryNoteListInner() -> impl IntoView {
    let model = DocumentListModel::<DeliveryNote>::new();
    let disabled = model.actions_disabled();

    view! {
        <DocumentListPage model=model title="Albaranes" page_id="a005_delivery_note--list">
            <Show when=move || can(Capability::ConvertDeliveryNoteToInvoice)>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| model.convert_selected(
                        |note: &DeliveryNote| ConvertDeliveryNoteRequest::new(note.delivery_note_id.clone()),
                        "Albarán convertido en factura correctamente",
                        "Error al convertir el albarán en factura",
                    )
                    disabled=disabled
                >
                    {icon("arrow-right")}
                    " Convertir a factura"
                </Button>
            </Show>
            <Show when=move || can(Capability::DownloadDeliveryNotePdf)>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| model.download_selected_pdf("Error al generar el PDF del albarán")
                    disabled=disabled
                >
                    {icon("download")}
                    " Generar PDF Albarán"
                </Button>
            </Show>
        </DocumentListPage>
    }
}

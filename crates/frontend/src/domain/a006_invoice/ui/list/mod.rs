use contracts::domain::a006_invoice::Invoice;
use contracts::system::roles::Capability;
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::sales_document::{DocumentListModel, DocumentListPage};
use crate::system::auth::context::can;
use crate::system::auth::guard::RequireCapability;

/// Last step of the pipeline: no conversion, only the PDF.
#[component]
pub fn InvoiceList() -> impl IntoView {
    view! {
        <RequireCapability capability=Capability::ViewInvoices>
            <InvoiceListInner />
        </RequireCapability>
    }
}

#[component]
fn InvoiceListInner() -> impl IntoView {
    let model = DocumentListModel::<Invoice>::new();
    let disabled = model.actions_disabled();

    view! {
        <DocumentListPage model=model title="Facturas" page_id="a006_invoice--list">
            <Show when=move || can(Capability::DownloadInvoicePdf)>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| model.download_selected_pdf("Error al generar el PDF de la factura")
                    disabled=disabled
                >
                    {icon("download")}
                    " Generar PDF factura"
                </Button>
            </Show>
        </DocumentListPage>
    }
}

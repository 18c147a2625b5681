use contracts::domain::a004_order::Order;
use contracts::domain::a005_delivery_note::ConvertOrderRequest;
use contracts::system::roles::Capability;
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::sales_document::{DocumentListModel, DocumentListPage};
use crate::system::auth::context::can;
use crate::system::auth::guard::RequireCapability;

#[component]
pub fn OrderList() -> impl IntoView {
    view! {
        <RequireCapability capability=Capability::ViewOrders>
            <OrderListInner />
        </RequireCapability>
    }
}

#[component]
fn OrderListInner() -> impl IntoView {
    let model = DocumentListModel::<Order>::new();
    let disabled = model.actions_disabled();

    view! {
        <DocumentListPage model=model title="Pedidos" page_id="a004_order--list">
            <Show when=move || can(Capability::ConvertOrderToDeliveryNote)>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| model.convert_selected(
                        |order: &Order| ConvertOrderRequest::new(order.order_id.clone()),
                        "Pedido convertido en albarán correctamente",
                        "Error al convertir el pedido en albarán",
                    )
                    disabled=disabled
                >
                    {icon("arrow-right")}
                    " Convertir a albarán"
                </Button>
            </Show>
            <Show when=move || can(Capability::DownloadOrderPdf)>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| model.download_selected_pdf("Error al generar el PDF del pedido")
                    disabled=disabled
                >
                    {icon("download")}
                    " Generar PDF Pedido"
                </Button>
            </Show>
        </DocumentListPage>
    }
}

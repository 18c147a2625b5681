//! Tab content registry: the single place that maps a tab key to its view
//! and to the capability needed to open it.

use contracts::domain::common::DocumentKind;
use contracts::system::roles::Capability;
use leptos::prelude::*;

use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_client::ui::list::ClientList;
use crate::domain::a003_offer::ui::editor::OfferEditor;
use crate::domain::a003_offer::ui::list::OfferList;
use crate::domain::a004_order::ui::list::OrderList;
use crate::domain::a005_delivery_note::ui::list::DeliveryNoteList;
use crate::domain::a006_invoice::ui::list::InvoiceList;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::system::pages::home::HomePage;
use crate::system::pages::not_found::{AccessDeniedPage, NotFoundPage};
use crate::system::users::ui::list::UsersListPage;

pub const HOME_KEY: &str = "home";
pub const FORBIDDEN_KEY: &str = "forbidden";
pub const OFFER_LIST_KEY: &str = "a003_offer";
/// Offer editor in create mode; `a003_offer_editor_<id>` edits offer `<id>`.
pub const OFFER_EDITOR_KEY: &str = "a003_offer_editor";

pub fn offer_editor_key(offer_id: &str) -> String {
    format!("{}_{}", OFFER_EDITOR_KEY, offer_id)
}

/// Offer id of an edit-mode editor key.
pub fn offer_editor_id(key: &str) -> Option<&str> {
    key.strip_prefix(OFFER_EDITOR_KEY)?
        .strip_prefix('_')
        .filter(|id| !id.is_empty())
}

/// List tab of each sales document kind.
pub fn document_tab_key(kind: DocumentKind) -> &'static str {
    match kind {
        DocumentKind::Offer => OFFER_LIST_KEY,
        DocumentKind::Order => "a004_order",
        DocumentKind::DeliveryNote => "a005_delivery_note",
        DocumentKind::Invoice => "a006_invoice",
    }
}

/// Capability a role needs to open `key`. Unknown keys only show the
/// not-found page, which anyone may see.
pub fn required_capability(key: &str) -> Capability {
    match key {
        HOME_KEY | FORBIDDEN_KEY => Capability::ViewHome,
        "a001_product" => Capability::ViewProducts,
        "a002_client" => Capability::ViewClients,
        OFFER_LIST_KEY => Capability::ViewOffers,
        OFFER_EDITOR_KEY => Capability::CreateOffer,
        "a004_order" => Capability::ViewOrders,
        "a005_delivery_note" => Capability::ViewDeliveryNotes,
        "a006_invoice" => Capability::ViewInvoices,
        "sys_users" => Capability::AdministerUsers,
        k if offer_editor_id(k).is_some() => Capability::EditOffer,
        _ => Capability::ViewHome,
    }
}

/// Render the content of the tab named `key`.
///
/// `tabs_store` lets editor tabs close themselves.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match key {
        HOME_KEY => view! { <HomePage /> }.into_any(),
        FORBIDDEN_KEY => view! { <AccessDeniedPage /> }.into_any(),

        // Catálogo
        "a001_product" => view! { <ProductList /> }.into_any(),
        "a002_client" => view! { <ClientList /> }.into_any(),

        // Ventas
        OFFER_LIST_KEY => view! { <OfferList /> }.into_any(),
        k if k == OFFER_EDITOR_KEY || offer_editor_id(k).is_some() => {
            let offer_id = offer_editor_id(k).map(str::to_string);
            view! {
                <OfferEditor
                    offer_id=offer_id
                    on_close=Callback::new(move |saved: bool| {
                        tabs_store.close_tab(&key_for_close);
                        if saved {
                            tabs_store.request_reload(OFFER_LIST_KEY);
                        }
                        tabs_store.open_tab(OFFER_LIST_KEY, &tab_label_for_key(OFFER_LIST_KEY));
                    })
                />
            }
            .into_any()
        }
        "a004_order" => view! { <OrderList /> }.into_any(),
        "a005_delivery_note" => view! { <DeliveryNoteList /> }.into_any(),
        "a006_invoice" => view! { <InvoiceList /> }.into_any(),

        // Administración
        "sys_users" => view! { <UsersListPage /> }.into_any(),

        _ => {
            log::warn!("Unknown tab key: {}", key);
            view! { <NotFoundPage /> }.into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_keys() {
        assert_eq!(offer_editor_key("12"), "a003_offer_editor_12");
        assert_eq!(offer_editor_id("a003_offer_editor_12"), Some("12"));
        assert_eq!(offer_editor_id("a003_offer_editor"), None);
        assert_eq!(offer_editor_id("a003_offer_editor_"), None);
        assert_eq!(offer_editor_id("a003_offer"), None);
    }

    #[test]
    fn document_kinds_map_to_list_tabs() {
        assert_eq!(document_tab_key(DocumentKind::Offer), OFFER_LIST_KEY);
        assert_eq!(
            required_capability(document_tab_key(DocumentKind::DeliveryNote)),
            Capability::ViewDeliveryNotes
        );
        assert_eq!(
            required_capability(document_tab_key(DocumentKind::Invoice)),
            Capability::ViewInvoices
        );
    }

    #[test]
    fn capabilities_per_key() {
        assert_eq!(required_capability("a001_product"), Capability::ViewProducts);
        assert_eq!(required_capability("a003_offer_editor"), Capability::CreateOffer);
        assert_eq!(required_capability("a003_offer_editor_7"), Capability::EditOffer);
        assert_eq!(required_capability("sys_users"), Capability::AdministerUsers);
        assert_eq!(required_capability("whatever"), Capability::ViewHome);
    }
}

use contracts::domain::a003_offer::OfferDraft;
use contracts::domain::common::PickOption;
use contracts::shared::ValidationError;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_product::api as product_api;
use crate::domain::a002_client::api as client_api;
use crate::domain::a003_offer::api;

/// Option with `id`, if any.
pub fn pick_by_id(options: &[PickOption], id: &str) -> Option<PickOption> {
    options.iter().find(|o| o.id == id).cloned()
}

#[derive(Clone, Copy)]
pub struct OfferEditorViewModel {
    pub draft: RwSignal<OfferDraft>,
    pub clients: RwSignal<Vec<PickOption>>,
    pub products: RwSignal<Vec<PickOption>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    offer_id: StoredValue<Option<String>>,
}

impl OfferEditorViewModel {
    pub fn new(offer_id: Option<String>) -> Self {
        Self {
            draft: RwSignal::new(OfferDraft::new()),
            clients: RwSignal::new(Vec::new()),
            products: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            offer_id: StoredValue::new(offer_id),
        }
    }

    pub fn offer_id(&self) -> Option<String> {
        self.offer_id.get_value()
    }

    pub fn is_edit_mode(&self) -> bool {
        self.offer_id.with_value(|id| id.is_some())
    }

    /// Fetch the pick lists and, in edit mode, seed the draft from the offer.
    pub fn load(&self) {
        let vm = *self;
        vm.loading.set(true);
        spawn_local(async move {
            match product_api::fetch_products().await {
                Ok(products) => {
                    vm.products
                        .try_set(products.iter().map(|p| p.to_pick_option()).collect());
                }
                Err(e) => {
                    vm.error
                        .try_set(Some(format!("No se pudieron cargar los productos: {}", e)));
                }
            }

            match vm.offer_id() {
                None => match client_api::fetch_clients().await {
                    Ok(clients) => {
                        vm.clients
                            .try_set(clients.iter().map(|c| c.to_pick_option()).collect());
                    }
                    Err(e) => {
                        vm.error
                            .try_set(Some(format!("No se pudieron cargar los clientes: {}", e)));
                    }
                },
                Some(id) => match api::fetch_offer(&id).await {
                    Ok(offer) => {
                        let catalog = vm.products.try_get_untracked().unwrap_or_default();
                        vm.draft.try_set(OfferDraft::from_offer(&offer, &catalog));
                    }
                    Err(e) => {
                        vm.error
                            .try_set(Some(format!("No se pudo cargar la oferta: {}", e)));
                    }
                },
            }
            vm.loading.try_set(false);
        });
    }

    pub fn select_client(&self, client_id: &str) {
        let client = self.clients.with_untracked(|c| pick_by_id(c, client_id));
        self.draft.update(|d| d.set_client(client));
    }

    pub fn add_line(&self, product_id: &str, quantity: &str) {
        let Some(product) = self.products.with_untracked(|p| pick_by_id(p, product_id)) else {
            self.error
                .set(Some(ValidationError::Required("Producto").to_string()));
            return;
        };
        self.apply(|d| d.add_line(&product, quantity));
    }

    pub fn set_quantity(&self, index: usize, quantity: &str) {
        self.apply(|d| d.set_quantity(index, quantity));
    }

    pub fn remove_line(&self, index: usize) {
        self.apply(|d| d.remove_line(index).map(|_| ()));
    }

    fn apply(&self, op: impl FnOnce(&mut OfferDraft) -> Result<(), ValidationError>) {
        let mut result = Ok(());
        self.draft.update(|d| result = op(d));
        self.error.set(result.err().map(|e| e.to_string()));
    }

    /// POST in create mode, PUT in edit mode; `on_done(true)` after a save.
    pub fn save_command(&self, on_done: Callback<bool>) {
        let vm = *self;
        let offer_id = vm.offer_id();
        let draft = vm.draft.get_untracked();

        let request = match &offer_id {
            None => draft.to_create_dto().map(SaveRequest::Create),
            Some(id) => draft.to_update_dto(id).map(SaveRequest::Update),
        };
        let request = match request {
            Ok(request) => request,
            Err(e) => {
                vm.error.set(Some(e.to_string()));
                return;
            }
        };

        vm.error.set(None);
        vm.saving.set(true);
        spawn_local(async move {
            let result = match &request {
                SaveRequest::Create(dto) => api::create_offer(dto).await,
                SaveRequest::Update(dto) => api::update_offer(dto).await,
            };
            match result {
                Ok(()) => {
                    log::info!("Offer saved ({})", offer_id.as_deref().unwrap_or("nueva"));
                    on_done.run(true);
                }
                Err(e) => {
                    log::warn!("Saving offer failed: {}", e);
                    vm.error
                        .try_set(Some(format!("No se pudo guardar la oferta: {}", e)));
                    vm.saving.try_set(false);
                }
            }
        });
    }
}

enum SaveRequest {
    Create(contracts::domain::a003_offer::CreateOfferDto),
    Update(contracts::domain::a003_offer::UpdateOfferDto),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_option_by_id() {
        let options = vec![PickOption::new("1", "Tornillo"), PickOption::new("2", "Tuerca")];
        assert_eq!(pick_by_id(&options, "2").map(|o| o.label), Some("Tuerca".to_string()));
        assert_eq!(pick_by_id(&options, "9"), None);
        assert_eq!(pick_by_id(&options, ""), None);
    }
}

use contracts::domain::a001_product::{Product, ProductForm};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_product::api;

/// State of the product modal. `current` is the product being modified;
/// `None` means create mode.
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductForm>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    current: StoredValue<Option<Product>>,
}

impl ProductDetailsViewModel {
    pub fn new(current: Option<Product>) -> Self {
        let form = current
            .as_ref()
            .map(ProductForm::from_product)
            .unwrap_or_default();
        Self {
            form: RwSignal::new(form),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            current: StoredValue::new(current),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.current.with_value(|c| c.is_some())
    }

    /// Validate, then POST or PUT. Validation errors stay in the form.
    pub fn save_command(&self, on_saved: Callback<()>) {
        let vm = *self;
        let form = vm.form.get_untracked();
        let current = vm.current.get_value();

        let request = match &current {
            None => form.validate_new().map(SaveRequest::Create),
            Some(product) => form.validate_update(product).map(SaveRequest::Update),
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
                SaveRequest::Create(dto) => api::create_product(dto).await,
                SaveRequest::Update(dto) => api::update_product(dto).await,
            };
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::warn!("Saving product failed: {}", e);
                    vm.error.try_set(Some(format!("No se pudo guardar el producto: {}", e)));
                    vm.saving.try_set(false);
                }
            }
        });
    }
}

enum SaveRequest {
    Create(contracts::domain::a001_product::CreateProductDto),
    Update(contracts::domain::a001_product::UpdateProductDto),
}

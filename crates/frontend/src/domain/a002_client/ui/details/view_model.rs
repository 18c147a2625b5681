use contracts::domain::a002_client::{Client, ClientForm, CreateClientDto, UpdateClientDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_client::api;

enum SaveRequest {
    Create(CreateClientDto),
    Update(UpdateClientDto),
}

#[derive(Clone, Copy)]
pub struct ClientDetailsViewModel {
    pub form: RwSignal<ClientForm>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    current: StoredValue<Option<Client>>,
}

impl ClientDetailsViewModel {
    pub fn new(current: Option<Client>) -> Self {
        let form = current
            .as_ref()
            .map(ClientForm::from_client)
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

    /// `on_saved` receives the row returned by the backend.
    pub fn save_command(&self, on_saved: Callback<Client>) {
        let vm = *self;
        let form = vm.form.get_untracked();
        let request = vm.current.with_value(|current| match current {
            None => form.validate_new().map(SaveRequest::Create),
            Some(client) => form.validate_update(client).map(SaveRequest::Update),
        });
        let request = match request {
            Ok(request) => request,
            Err(e) => {
                vm.error.set(Some(e.to_string()));
                return;
            }
        };

        let creating = matches!(request, SaveRequest::Create(_));
        vm.error.set(None);
        vm.saving.set(true);
        spawn_local(async move {
            let result = match &request {
                SaveRequest::Create(dto) => api::create_client(dto).await,
                SaveRequest::Update(dto) => api::update_client(dto).await,
            };
            match result {
                Ok(client) => {
                    log::info!("Client {} saved", client.client_id);
                    on_saved.run(client);
                }
                Err(e) => {
                    log::warn!("Saving client failed: {}", e);
                    let message = if creating {
                        "No se pudo crear el cliente"
                    } else {
                        "No se pudo actualizar el cliente"
                    };
                    vm.error.try_set(Some(message.to_string()));
                    vm.saving.try_set(false);
                }
            }
        });
    }
}

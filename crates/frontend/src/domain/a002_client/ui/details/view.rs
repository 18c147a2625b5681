use contracts::domain::a002_client::{Client, ClientForm};
use leptos::prelude::*;
use thaw::*;

use super::view_model::ClientDetailsViewModel;
use crate::shared::modal::Modal;

type Getter = fn(&ClientForm) -> String;
type Setter = fn(&mut ClientForm, String);

/// Fields editable after creation.
const CONTACT_FIELDS: [(&str, &str, Getter, Setter); 4] = [
    ("Dirección", "text", |f| f.address.clone(), |f, v| f.address = v),
    ("Email", "email", |f| f.email.clone(), |f, v| f.email = v),
    ("Teléfono", "tel", |f| f.phone.clone(), |f, v| f.phone = v),
    ("Persona de contacto", "text", |f| f.contact.clone(), |f, v| f.contact = v),
];

const IDENTITY_FIELDS: [(&str, &str, Getter, Setter); 2] = [
    ("Empresa", "text", |f| f.company_name.clone(), |f, v| f.company_name = v),
    ("CIF", "text", |f| f.cif.clone(), |f, v| f.cif = v),
];

fn field(
    vm: ClientDetailsViewModel,
    (label, input_type, get, set): (&'static str, &'static str, Getter, Setter),
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                class="form__input"
                type=input_type
                prop:value=move || vm.form.with(get)
                on:input=move |ev| vm.form.update(|f| set(f, event_target_value(&ev)))
                disabled=move || vm.saving.get()
            />
        </div>
    }
}

/// Create mode shows every field; edit mode only the contact fields.
#[component]
pub fn ClientDetails(
    client: Option<Client>,
    on_saved: Callback<Client>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ClientDetailsViewModel::new(client);
    let edit = vm.is_edit_mode();
    let title = if edit { "Editar cliente" } else { "Crear cliente" };

    let fields: Vec<_> = if edit {
        CONTACT_FIELDS.to_vec()
    } else {
        IDENTITY_FIELDS.iter().chain(CONTACT_FIELDS.iter()).copied().collect()
    };

    view! {
        <Modal title=title on_close=on_cancel>
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            {fields.into_iter().map(|f| field(vm, f)).collect_view()}

            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                    disabled=Signal::derive(move || vm.saving.get())
                >
                    "Cancelar"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command(on_saved)
                    disabled=Signal::derive(move || vm.saving.get())
                >
                    {move || if vm.saving.get() { "Guardando..." } else { "Guardar" }}
                </Button>
            </div>
        </Modal>
    }
}

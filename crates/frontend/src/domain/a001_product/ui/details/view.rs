use contracts::domain::a001_product::{Product, ProductForm};
use leptos::prelude::*;
use thaw::*;

use super::view_model::ProductDetailsViewModel;
use crate::shared::modal::Modal;

#[component]
fn FormField(
    vm: ProductDetailsViewModel,
    label: &'static str,
    get: fn(&ProductForm) -> String,
    set: fn(&mut ProductForm, String),
    #[prop(optional)] readonly: bool,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                class="form__input"
                type=input_type
                readonly=readonly
                prop:value=move || vm.form.with(get)
                on:input=move |ev| vm.form.update(|f| set(f, event_target_value(&ev)))
                disabled=move || vm.saving.get()
            />
        </div>
    }
}

/// "Añadir producto" when `product` is `None`, "Modificar producto"
/// otherwise. Name and description are fixed once the product exists.
#[component]
pub fn ProductDetails(
    product: Option<Product>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ProductDetailsViewModel::new(product);
    let edit = vm.is_edit_mode();
    let title = if edit { "Modificar producto" } else { "Añadir producto" };

    view! {
        <Modal title=title on_close=on_cancel>
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <FormField vm=vm label="Nombre" readonly=edit
                get=|f| f.name.clone() set=|f, v| f.name = v />
            <FormField vm=vm label="Descripción" readonly=edit
                get=|f| f.description.clone() set=|f, v| f.description = v />
            <div class="form__row">
                <FormField vm=vm label="Stock" input_type="number"
                    get=|f| f.stock.clone() set=|f, v| f.stock = v />
                <FormField vm=vm label="Stock mínimo" input_type="number"
                    get=|f| f.min_stock.clone() set=|f, v| f.min_stock = v />
                <FormField vm=vm label="Stock máximo" input_type="number"
                    get=|f| f.max_stock.clone() set=|f, v| f.max_stock = v />
            </div>
            <div class="form__row">
                <FormField vm=vm label="Precio de compra" input_type="number"
                    get=|f| f.purchase_price.clone() set=|f, v| f.purchase_price = v />
                <FormField vm=vm label="Precio de venta" input_type="number"
                    get=|f| f.sell_price.clone() set=|f, v| f.sell_price = v />
            </div>

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

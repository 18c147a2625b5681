use leptos::prelude::*;
use thaw::*;

use super::view_model::OfferEditorViewModel;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;

/// Create (`offer_id == None`) or edit an offer. `on_close(saved)` hands
/// control back to the tab that opened the editor.
#[component]
pub fn OfferEditor(offer_id: Option<String>, on_close: Callback<bool>) -> impl IntoView {
    let vm = OfferEditorViewModel::new(offer_id);
    vm.load();

    let edit = vm.is_edit_mode();
    let title = match vm.offer_id() {
        Some(id) => format!("Editar oferta {}", id),
        None => "Nueva oferta".to_string(),
    };

    let client_value = RwSignal::new(String::new());
    let product_value = RwSignal::new(String::new());
    let quantity_value = RwSignal::new("1".to_string());

    if !edit {
        Effect::new(move |_| {
            let id = client_value.get();
            vm.select_client(&id);
        });
    }

    let client_name = move || {
        vm.draft
            .with(|d| d.client.as_ref().map(|c| c.label.clone()))
            .unwrap_or_default()
    };

    view! {
        <PageFrame page_id="a003_offer_editor--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.save_command(on_close)
                        disabled=Signal::derive(move || vm.saving.get() || vm.loading.get())
                    >
                        {move || if vm.saving.get() { "Guardando..." } else { "Guardar oferta" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(false)
                        disabled=Signal::derive(move || vm.saving.get())
                    >
                        "Cancelar"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                <Show when=move || vm.loading.get()>
                    <p class="page__status">"Cargando..."</p>
                </Show>

                <div class="form__group">
                    <Label>"Cliente"</Label>
                    {if edit {
                        view! { <span class="form__static">{client_name}</span> }.into_any()
                    } else {
                        view! {
                            <Select value=client_value>
                                <option value="">"-- Selecciona un cliente --"</option>
                                {move || vm.clients.get().into_iter().map(|c| view! {
                                    <option value=c.id>{c.label}</option>
                                }).collect_view()}
                            </Select>
                        }.into_any()
                    }}
                </div>

                <div class="form__row">
                    <div class="form__group">
                        <Label>"Producto"</Label>
                        <Select value=product_value>
                            <option value="">"-- Selecciona un producto --"</option>
                            {move || vm.products.get().into_iter().map(|p| view! {
                                <option value=p.id>{p.label}</option>
                            }).collect_view()}
                        </Select>
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Cantidad"</label>
                        <input
                            class="form__input form__input--narrow"
                            type="number"
                            min="1"
                            prop:value=move || quantity_value.get()
                            on:input=move |ev| quantity_value.set(event_target_value(&ev))
                        />
                    </div>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            vm.add_line(&product_value.get_untracked(), &quantity_value.get_untracked());
                            if vm.error.get_untracked().is_none() {
                                product_value.set(String::new());
                                quantity_value.set("1".to_string());
                            }
                        }
                    >
                        {icon("plus")}
                        " Añadir producto"
                    </Button>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Producto"</TableHeaderCell>
                                <TableHeaderCell>"Cantidad"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let lines = vm.draft.with(|d| d.lines.clone());
                                if lines.is_empty() {
                                    return view! {
                                        <TableRow>
                                            <TableCell attr:colspan="3">
                                                <TableCellLayout>
                                                    <span class="table__empty">"No hay productos añadidos."</span>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                    .into_any();
                                }
                                lines
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, line)| view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{line.name}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <input
                                                    class="form__input form__input--narrow"
                                                    type="number"
                                                    min="1"
                                                    prop:value=line.quantity.to_string()
                                                    on:change=move |ev| vm.set_quantity(index, &event_target_value(&ev))
                                                />
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| vm.remove_line(index)
                                                >
                                                    {icon("trash")}
                                                    " Eliminar"
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}

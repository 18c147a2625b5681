use contracts::domain::a002_client::{upsert_client, Client};
use contracts::system::roles::Capability;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_client::api;
use crate::domain::a002_client::ui::details::ClientDetails;
use crate::shared::components::notice::{Notice, NoticeHandle};
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    cmp_ci, filter_list, get_sort_class, get_sort_indicator, sort_list, Searchable, Sortable,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::can;
use crate::system::auth::guard::RequireCapability;

impl Searchable for Client {
    fn matches_filter(&self, filter: &str) -> bool {
        self.matches_company(filter)
    }
}

impl Sortable for Client {
    fn compare_by_field(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "cif" => cmp_ci(&self.cif, &other.cif),
            "email" => cmp_ci(&self.email, &other.email),
            "contact" => cmp_ci(&self.contact, &other.contact),
            _ => cmp_ci(&self.company_name, &other.company_name),
        }
    }
}

#[component]
pub fn ClientList() -> impl IntoView {
    view! {
        <RequireCapability capability=Capability::ViewClients>
            <ClientListInner />
        </RequireCapability>
    }
}

#[component]
fn ClientListInner() -> impl IntoView {
    let clients: RwSignal<Vec<Client>> = RwSignal::new(Vec::new());
    let search = RwSignal::new(String::new());
    let sort_field = RwSignal::new("company".to_string());
    let sort_ascending = RwSignal::new(true);
    let selected: RwSignal<Option<String>> = RwSignal::new(None);
    // Some(None) = create, Some(Some(client)) = edit.
    let modal: RwSignal<Option<Option<Client>>> = RwSignal::new(None);
    let notice = NoticeHandle::new();
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_clients().await {
                Ok(data) => clients.set(data),
                Err(e) => set_error.set(Some(format!("No se pudieron cargar los clientes: {}", e))),
            }
            set_loading.set(false);
        });
    };
    load_data();

    let rows = Memo::new(move |_| {
        let mut rows = clients.with(|all| filter_list(all, &search.get()));
        sort_list(&mut rows, &sort_field.get(), sort_ascending.get());
        rows
    });

    let selected_client = move || {
        let id = selected.get()?;
        clients.with(|all| all.iter().find(|c| c.client_id == id).cloned())
    };

    let on_saved = Callback::new(move |client: Client| {
        let id = client.client_id.clone();
        clients.update(|all| upsert_client(all, client));
        selected.set(Some(id));
        modal.set(None);
        notice.success("Cliente guardado correctamente.");
    });

    let sort_header = move |field: &'static str, label: &'static str| {
        view! {
            <TableHeaderCell>
                <div
                    class="table__sortable-header"
                    style="cursor:pointer;"
                    on:click=move |_| {
                        if sort_field.get_untracked() == field {
                            sort_ascending.update(|v| *v = !*v);
                        } else {
                            sort_field.set(field.to_string());
                            sort_ascending.set(true);
                        }
                    }
                >
                    {label}
                    <span class=move || get_sort_class(&sort_field.get(), field)>
                        {move || get_sort_indicator(&sort_field.get(), field, sort_ascending.get())}
                    </span>
                </div>
            </TableHeaderCell>
        }
    };

    view! {
        <PageFrame page_id="a002_client--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Clientes"</h1>
                    <Badge>{move || rows.with(|r| r.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Show when=move || can(Capability::CreateClient)>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| modal.set(Some(None))
                        >
                            {icon("plus")}
                            " Crear cliente"
                        </Button>
                    </Show>
                    <Show when=move || can(Capability::EditClient)>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| {
                                if let Some(client) = selected_client() {
                                    modal.set(Some(Some(client)));
                                }
                            }
                            disabled=Signal::derive(move || selected_client().is_none())
                        >
                            {icon("edit")}
                            " Editar cliente"
                        </Button>
                    </Show>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Actualizar"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <Notice handle=notice />
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <div style="flex: 1; max-width: 320px;">
                            <Input value=search placeholder="Filtrar por empresa..." />
                        </div>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                {sort_header("company", "Empresa")}
                                {sort_header("cif", "CIF")}
                                <TableHeaderCell>"Dirección"</TableHeaderCell>
                                {sort_header("email", "Email")}
                                <TableHeaderCell>"Teléfono"</TableHeaderCell>
                                {sort_header("contact", "Contacto")}
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || rows.get().into_iter().map(|client| {
                                let id = client.client_id.clone();
                                let id_for_click = id.clone();
                                view! {
                                    <TableRow
                                        class:table__row--selected=move || selected.with(|s| s.as_deref() == Some(id.as_str()))
                                        on:click=move |_| {
                                            let clicked = id_for_click.clone();
                                            selected.update(|s| {
                                                *s = if s.as_deref() == Some(clicked.as_str()) { None } else { Some(clicked) };
                                            });
                                        }
                                        attr:style="cursor: pointer;"
                                    >
                                        <TableCell><TableCellLayout truncate=true>{client.company_name}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{client.cif}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout truncate=true>{client.address}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout truncate=true>{client.email}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{client.phone}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout truncate=true>{client.contact}</TableCellLayout></TableCell>
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </div>
            </div>

            {move || modal.get().map(|client| view! {
                <ClientDetails
                    client=client
                    on_saved=on_saved
                    on_cancel=Callback::new(move |_| modal.set(None))
                />
            })}
        </PageFrame>
    }
}

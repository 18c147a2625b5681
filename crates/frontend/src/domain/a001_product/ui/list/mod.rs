use contracts::domain::a001_product::Product;
use contracts::system::roles::Capability;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_product::api;
use crate::domain::a001_product::ui::details::ProductDetails;
use crate::shared::date_utils::format_money;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    cmp_ci, cmp_f64, filter_list, get_sort_class, get_sort_indicator, sort_list, Searchable,
    Sortable,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::can;
use crate::system::auth::guard::RequireCapability;

impl Searchable for Product {
    fn matches_filter(&self, filter: &str) -> bool {
        self.matches_name(filter)
    }
}

impl Sortable for Product {
    fn compare_by_field(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "description" => cmp_ci(&self.description, &other.description),
            "stock" => self.stock.cmp(&other.stock),
            "min_stock" => self.min_stock.cmp(&other.min_stock),
            "max_stock" => self.max_stock.cmp(&other.max_stock),
            "purchase_price" => cmp_f64(self.purchase_price, other.purchase_price),
            "sell_price" => cmp_f64(self.sell_price, other.sell_price),
            _ => cmp_ci(&self.name, &other.name),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum ModalMode {
    Create,
    Update(Product),
}

#[component]
pub fn ProductList() -> impl IntoView {
    view! {
        <RequireCapability capability=Capability::ViewProducts>
            <ProductListInner />
        </RequireCapability>
    }
}

#[component]
fn ProductListInner() -> impl IntoView {
    let all_products: RwSignal<Vec<Product>> = RwSignal::new(Vec::new());
    let search = RwSignal::new(String::new());
    let sort_field = RwSignal::new("name".to_string());
    let sort_ascending = RwSignal::new(true);
    let selected: RwSignal<Option<String>> = RwSignal::new(None);
    let modal: RwSignal<Option<ModalMode>> = RwSignal::new(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_products().await {
                Ok(data) => {
                    log::debug!("Loaded {} products", data.len());
                    all_products.set(data);
                }
                Err(e) => set_error.set(Some(format!("No se pudieron cargar los productos: {}", e))),
            }
            set_loading.set(false);
        });
    };
    load_data();

    let rows = Memo::new(move |_| {
        let mut rows = all_products.with(|all| filter_list(all, &search.get()));
        sort_list(&mut rows, &sort_field.get(), sort_ascending.get());
        rows
    });

    let selected_product = move || {
        let id = selected.get()?;
        all_products.with(|all| all.iter().find(|p| p.product_id == id).cloned())
    };

    let toggle_sort = move |field: &'static str| {
        move |_| {
            if sort_field.get_untracked() == field {
                sort_ascending.update(|v| *v = !*v);
            } else {
                sort_field.set(field.to_string());
                sort_ascending.set(true);
            }
        }
    };

    let sort_header = move |field: &'static str, label: &'static str| {
        view! {
            <TableHeaderCell>
                <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort(field)>
                    {label}
                    <span class=move || get_sort_class(&sort_field.get(), field)>
                        {move || get_sort_indicator(&sort_field.get(), field, sort_ascending.get())}
                    </span>
                </div>
            </TableHeaderCell>
        }
    };

    view! {
        <PageFrame page_id="a001_product--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Productos"</h1>
                    <Badge>{move || rows.with(|r| r.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Show when=move || can(Capability::ManageProducts)>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| modal.set(Some(ModalMode::Create))
                        >
                            {icon("plus")}
                            " Añadir producto"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| {
                                if let Some(product) = selected_product() {
                                    modal.set(Some(ModalMode::Update(product)));
                                }
                            }
                            disabled=Signal::derive(move || selected_product().is_none())
                        >
                            {icon("edit")}
                            " Modificar producto"
                        </Button>
                    </Show>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Cargando..." } else { " Actualizar" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <div style="flex: 1; max-width: 320px;">
                            <Input value=search placeholder="Buscar por nombre..." />
                        </div>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                {sort_header("name", "Nombre")}
                                {sort_header("description", "Descripción")}
                                {sort_header("stock", "Stock")}
                                {sort_header("min_stock", "Stock mín.")}
                                {sort_header("max_stock", "Stock máx.")}
                                {sort_header("purchase_price", "Precio compra")}
                                {sort_header("sell_price", "Precio venta")}
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || rows.get().into_iter().map(|product| {
                                    let id = product.product_id.clone();
                                    let id_for_click = id.clone();
                                    let low = product.is_low_stock();
                                    view! {
                                        <TableRow
                                            class:table__row--selected=move || selected.with(|s| s.as_deref() == Some(id.as_str()))
                                            class:table__row--warning=low
                                            on:click=move |_| {
                                                let clicked = id_for_click.clone();
                                                selected.update(|s| {
                                                    *s = if s.as_deref() == Some(clicked.as_str()) { None } else { Some(clicked) };
                                                });
                                            }
                                            attr:style="cursor: pointer;"
                                        >
                                            <TableCell><TableCellLayout truncate=true>{product.name.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{product.description.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout><span class="table__number">{product.stock}</span></TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout><span class="table__number">{product.min_stock}</span></TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout><span class="table__number">{product.max_stock}</span></TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout><span class="table__number">{format_money(product.purchase_price)}</span></TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout><span class="table__number">{format_money(product.sell_price)}</span></TableCellLayout></TableCell>
                                        </TableRow>
                                    }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </div>
            </div>

            {move || modal.get().map(|mode| {
                let product = match mode {
                    ModalMode::Create => None,
                    ModalMode::Update(p) => Some(p),
                };
                view! {
                    <ProductDetails
                        product=product
                        on_saved=Callback::new(move |_| {
                            modal.set(None);
                            load_data();
                        })
                        on_cancel=Callback::new(move |_| modal.set(None))
                    />
                }
            })}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, stock: i64, sell: f64) -> Product {
        Product {
            product_id: id.into(),
            name: name.into(),
            description: String::new(),
            stock,
            max_stock: 100,
            min_stock: 5,
            purchase_price: 1.0,
            sell_price: sell,
        }
    }

    #[test]
    fn searches_by_name_and_sorts_numbers() {
        let all = vec![
            product("1", "Tornillo M6", 40, 0.2),
            product("2", "tuerca", 3, 0.05),
            product("3", "Arandela", 12, 0.1),
        ];

        let found = filter_list(&all, "TOR");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].product_id, "1");

        let mut rows = all.clone();
        sort_list(&mut rows, "stock", false);
        let ids: Vec<_> = rows.iter().map(|p| p.product_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "2"]);

        sort_list(&mut rows, "name", true);
        let ids: Vec<_> = rows.iter().map(|p| p.product_id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }
}

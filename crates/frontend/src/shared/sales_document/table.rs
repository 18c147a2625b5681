use contracts::domain::common::{DocumentLine, SalesDocument};
use leptos::prelude::*;
use thaw::*;

use crate::shared::date_utils::{format_date, format_money};
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_ci, cmp_f64, get_sort_class, get_sort_indicator};
use crate::shared::modal::Modal;

/// Column ordering for any sales document.
pub fn compare_documents<T: SalesDocument>(a: &T, b: &T, field: &str) -> std::cmp::Ordering {
    match field {
        "employee" => cmp_ci(a.employee_name(), b.employee_name()),
        "client" => cmp_ci(a.client_name(), b.client_name()),
        "total" => cmp_f64(a.total_price(), b.total_price()),
        "id" => cmp_ids(a.id(), b.id()),
        _ => a.date().cmp(b.date()),
    }
}

/// Numeric ids compare as numbers, anything else case-insensitively.
fn cmp_ids(a: &str, b: &str) -> std::cmp::Ordering {
    match (a.trim().parse::<u64>(), b.trim().parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => cmp_ci(a, b),
    }
}

/// Sort and selection state of one document list.
#[derive(Clone, Copy)]
pub struct DocumentTableState {
    pub selected: RwSignal<Option<String>>,
    pub sort_field: RwSignal<String>,
    pub sort_ascending: RwSignal<bool>,
}

impl DocumentTableState {
    pub fn new() -> Self {
        Self {
            selected: RwSignal::new(None),
            sort_field: RwSignal::new("date".to_string()),
            sort_ascending: RwSignal::new(false),
        }
    }

    pub fn toggle_sort(&self, field: &'static str) {
        if self.sort_field.get_untracked() == field {
            self.sort_ascending.update(|v| *v = !*v);
        } else {
            self.sort_field.set(field.to_string());
            self.sort_ascending.set(true);
        }
    }

    /// Clicking the selected row again clears the selection.
    pub fn toggle_selected(&self, id: &str) {
        self.selected.update(|current| {
            if current.as_deref() == Some(id) {
                *current = None;
            } else {
                *current = Some(id.to_string());
            }
        });
    }
}

impl Default for DocumentTableState {
    fn default() -> Self {
        Self::new()
    }
}

/// Sorted rows according to `state`.
pub fn sorted_documents<T: SalesDocument + Clone>(
    docs: &[T],
    field: &str,
    ascending: bool,
) -> Vec<T> {
    let mut rows = docs.to_vec();
    rows.sort_by(|a, b| {
        let cmp = compare_documents(a, b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
    rows
}

#[component]
fn SortableHeader(
    state: DocumentTableState,
    field: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <TableHeaderCell>
            <div
                class="table__sortable-header"
                style="cursor:pointer;"
                on:click=move |_| state.toggle_sort(field)
            >
                {label}
                <span class=move || get_sort_class(&state.sort_field.get(), field)>
                    {move || get_sort_indicator(&state.sort_field.get(), field, state.sort_ascending.get())}
                </span>
            </div>
        </TableHeaderCell>
    }
}

/// Employee, client, date, total and a "Mostrar productos" button per row.
/// Clicking a row selects it; the lines button leaves the selection alone.
#[component]
pub fn DocumentTable<T>(
    #[prop(into)] rows: Signal<Vec<T>>,
    state: DocumentTableState,
    on_show_lines: Callback<T>,
) -> impl IntoView
where
    T: SalesDocument + Clone + PartialEq + Send + Sync + 'static,
{
    let sorted = Memo::new(move |_| {
        let field = state.sort_field.get();
        let ascending = state.sort_ascending.get();
        rows.with(|docs| sorted_documents(docs, &field, ascending))
    });

    view! {
        <div class="table-wrapper">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <SortableHeader state=state field="id" label="Nº" />
                        <SortableHeader state=state field="employee" label="Empleado" />
                        <SortableHeader state=state field="client" label="Cliente" />
                        <SortableHeader state=state field="date" label="Fecha" />
                        <SortableHeader state=state field="total" label="Precio total" />
                        <TableHeaderCell>"Productos"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let docs = sorted.get();
                        if docs.is_empty() {
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan="6">
                                        <TableCellLayout>
                                            <span class="table__empty">"No hay documentos."</span>
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                            .into_any();
                        }
                        docs.into_iter()
                            .map(|doc| {
                                let id = doc.id().to_string();
                                let id_for_select = id.clone();
                                let id_for_class = id.clone();
                                let is_selected = move || {
                                    state.selected.with(|s| s.as_deref() == Some(id_for_class.as_str()))
                                };
                                let employee = doc.employee_name().to_string();
                                let client = doc.client_name().to_string();
                                let date = format_date(doc.date());
                                let total = format_money(doc.total_price());
                                let doc_for_lines = doc.clone();
                                view! {
                                    <TableRow
                                        class:table__row--selected=is_selected
                                        on:click=move |_| state.toggle_selected(&id_for_select)
                                        attr:style="cursor: pointer;"
                                    >
                                        <TableCell><TableCellLayout>{id}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{employee}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{client}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{date}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class="table__number">{total}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <button
                                                class="button button--link"
                                                on:click=move |ev| {
                                                    ev.stop_propagation();
                                                    on_show_lines.run(doc_for_lines.clone());
                                                }
                                            >
                                                {icon("eye")}
                                                " Mostrar productos"
                                            </button>
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}

/// Product lines of one document.
#[component]
pub fn DocumentLinesModal(
    #[prop(into)] title: String,
    lines: Vec<DocumentLine>,
    on_close: Callback<()>,
) -> impl IntoView {
    let total_units: i64 = lines.iter().map(|l| l.quantity).sum();
    view! {
        <Modal title=title on_close=on_close>
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Producto"</TableHeaderCell>
                        <TableHeaderCell>"Cantidad"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {lines
                        .into_iter()
                        .map(|line| {
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{line.name}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <span class="table__number">{line.quantity}</span>
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        })
                        .collect_view()}
                </TableBody>
            </Table>
            <p class="modal__footnote">{format!("Unidades totales: {}", total_units)}</p>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_order::Order;

    fn order(id: &str, client: &str, date: &str, total: f64) -> Order {
        Order {
            order_id: id.into(),
            employee_id: "1".into(),
            employee_name: "Luis".into(),
            client_id: "3".into(),
            client_name: client.into(),
            date: date.into(),
            total_price: total,
            products: vec![],
        }
    }

    #[test]
    fn sorts_by_column() {
        let docs = vec![
            order("1", "beta", "2024-05-02", 10.0),
            order("2", "Alfa", "2024-06-01", 5.5),
            order("3", "Gamma", "2024-01-15", 99.0),
        ];
        let ids = |v: Vec<Order>| v.into_iter().map(|o| o.order_id).collect::<Vec<_>>();

        assert_eq!(ids(sorted_documents(&docs, "date", false)), vec!["2", "1", "3"]);
        assert_eq!(ids(sorted_documents(&docs, "client", true)), vec!["2", "1", "3"]);
        assert_eq!(ids(sorted_documents(&docs, "total", false)), vec!["3", "1", "2"]);
    }

    #[test]
    fn numeric_ids_sort_as_numbers() {
        let docs = vec![
            order("10", "a", "2024-01-01", 1.0),
            order("9", "b", "2024-01-01", 1.0),
            order("100", "c", "2024-01-01", 1.0),
        ];
        let ids = |v: Vec<Order>| v.into_iter().map(|o| o.order_id).collect::<Vec<_>>();

        assert_eq!(ids(sorted_documents(&docs, "id", true)), vec!["9", "10", "100"]);
        assert_eq!(cmp_ids("B-2", "a-1"), std::cmp::Ordering::Greater);
    }
}

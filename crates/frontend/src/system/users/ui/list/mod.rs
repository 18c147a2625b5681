mod state;

use contracts::system::roles::{Capability, Role};
use contracts::system::users::{visible_employees, Employee, UpdateRoleDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_ci, get_sort_class, get_sort_indicator, sort_list, Sortable};
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::guard::RequireCapability;
use crate::system::users::api;
use state::{create_state, UsersListState};

const UPDATE_FAILED: &str = "No se pudo actualizar el usuario";

impl Sortable for Employee {
    fn compare_by_field(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "email" => cmp_ci(&self.email, &other.email),
            "rol" => self.rol.code().cmp(&other.rol.code()),
            _ => cmp_ci(&self.full_name(), &other.full_name()),
        }
    }
}

/// Name filter first, then the chosen column. The name order from
/// `visible_employees` breaks ties.
fn view_rows(all: &[Employee], state: &UsersListState) -> Vec<Employee> {
    let mut rows = visible_employees(all, &state.search_query);
    sort_list(&mut rows, &state.sort_field, state.sort_ascending);
    rows
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    view! {
        <RequireCapability capability=Capability::AdministerUsers>
            <UsersList />
        </RequireCapability>
    }
}

#[component]
fn UsersList() -> impl IntoView {
    let state = create_state();
    let all_users: RwSignal<Vec<Employee>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let editing: RwSignal<Option<Employee>> = RwSignal::new(None);

    let refresh_view = move || {
        let rows = all_users.with_untracked(|all| state.with_untracked(|s| view_rows(all, s)));
        state.update(|s| s.items = rows);
    };

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_employees().await {
                Ok(data) => {
                    log::debug!("Loaded {} employees", data.len());
                    all_users.set(data);
                    state.update(|s| s.is_loaded = true);
                    refresh_view();
                }
                Err(e) => set_error.set(Some(format!("No se pudieron cargar los usuarios: {}", e))),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let search_signal = RwSignal::new(String::new());
    Effect::new(move |_| {
        let query = search_signal.get();
        state.update(|s| s.search_query = query);
        refresh_view();
    });

    let toggle_sort = move |field: &'static str| {
        move |_| {
            state.update(|s| {
                if s.sort_field == field {
                    s.sort_ascending = !s.sort_ascending;
                } else {
                    s.sort_field = field.to_string();
                    s.sort_ascending = true;
                }
            });
            refresh_view();
        }
    };

    let selected_employee = move || {
        state.with(|s| {
            let id = s.selected_id.as_deref()?;
            s.items.iter().find(|e| e.employe_id == id).cloned()
        })
    };

    let sort_header = move |field: &'static str, label: &'static str| {
        view! {
            <TableHeaderCell>
                <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort(field)>
                    {label}
                    <span class=move || state.with(|s| get_sort_class(&s.sort_field, field))>
                        {move || state.with(|s| get_sort_indicator(&s.sort_field, field, s.sort_ascending))}
                    </span>
                </div>
            </TableHeaderCell>
        }
    };

    view! {
        <PageFrame page_id="sys_users--list" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Usuarios"</h1>
                    <Badge>
                        {move || state.with(|s| s.items.len()).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editing.set(selected_employee())
                        disabled=Signal::derive(move || selected_employee().is_none())
                    >
                        {icon("edit")}
                        " Editar rol"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
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
                            <Input value=search_signal placeholder="Buscar por nombre..." />
                        </div>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                {sort_header("name", "Nombre")}
                                {sort_header("email", "Email")}
                                {sort_header("rol", "Rol")}
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.with(|s| s.items.clone())
                                key=|e| (e.employe_id.clone(), e.rol)
                                children=move |employee: Employee| {
                                    let id = employee.employe_id.clone();
                                    let id_for_click = id.clone();
                                    let is_selected = move || {
                                        state.with(|s| s.selected_id.as_deref() == Some(id.as_str()))
                                    };
                                    let full_name = employee.full_name();
                                    view! {
                                        <TableRow
                                            class:table__row--selected=is_selected
                                            on:click=move |_| {
                                                let clicked = id_for_click.clone();
                                                state.update(|s| {
                                                    s.selected_id = if s.selected_id.as_deref() == Some(clicked.as_str()) {
                                                        None
                                                    } else {
                                                        Some(clicked)
                                                    };
                                                });
                                            }
                                            attr:style="cursor: pointer;"
                                        >
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{full_name}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{employee.email.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge
                                                        appearance=if employee.rol == Role::Unassigned {
                                                            BadgeAppearance::Outline
                                                        } else {
                                                            BadgeAppearance::Tint
                                                        }
                                                    >
                                                        {employee.rol.label()}
                                                    </Badge>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>

            {move || editing.get().map(|employee| view! {
                <RoleModal
                    employee=employee
                    on_close=Callback::new(move |_| editing.set(None))
                    on_saved=Callback::new(move |_| {
                        editing.set(None);
                        load_data();
                    })
                />
            })}
        </PageFrame>
    }
}

#[component]
fn RoleModal(employee: Employee, on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let role_value = RwSignal::new(employee.rol.code().to_string());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);
    let employee_id = employee.employe_id.clone();

    let on_save = move |_| {
        let Some(role) = role_value
            .get_untracked()
            .parse::<i64>()
            .ok()
            .and_then(Role::from_code)
        else {
            set_error.set(Some(UPDATE_FAILED.to_string()));
            return;
        };
        let dto = UpdateRoleDto::new(employee_id.clone(), role);
        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::update_role(&dto).await {
                Ok(()) => {
                    log::info!("Employee {} is now {}", dto.employe_id, role);
                    on_saved.run(());
                }
                Err(e) => {
                    log::warn!("Role update failed: {}", e);
                    set_error.try_set(Some(UPDATE_FAILED.to_string()));
                    set_saving.try_set(false);
                }
            }
        });
    };

    view! {
        <Modal title=format!("Editar rol: {}", employee.full_name()) on_close=on_close>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__group">
                <Label>"Email"</Label>
                <span>{employee.email.clone()}</span>
            </div>

            <div class="form__group">
                <Label>"Rol"</Label>
                <Select value=role_value>
                    {Role::ALL
                        .iter()
                        .map(|role| view! { <option value=role.code().to_string()>{role.label()}</option> })
                        .collect_view()}
                </Select>
            </div>

            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_close.run(())
                    disabled=Signal::derive(move || saving.get())
                >
                    "Cancelar"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_save
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "Guardando..." } else { "Guardar" }}
                </Button>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emp(id: &str, name: &str, email: &str, rol: Role) -> Employee {
        Employee {
            employe_id: id.into(),
            name: name.into(),
            family_name: String::new(),
            email: email.into(),
            rol,
        }
    }

    fn ids(rows: Vec<Employee>) -> Vec<String> {
        rows.into_iter().map(|e| e.employe_id).collect()
    }

    #[test]
    fn filters_then_sorts_by_column() {
        let all = vec![
            emp("1", "Marta", "z@x.es", Role::Manager),
            emp("2", "alberto", "b@x.es", Role::Unassigned),
            emp("3", "Mario", "a@x.es", Role::Administrator),
        ];
        let mut state = UsersListState::default();
        assert_eq!(ids(view_rows(&all, &state)), vec!["2", "3", "1"]);

        state.search_query = "mar".into();
        assert_eq!(ids(view_rows(&all, &state)), vec!["3", "1"]);

        state.search_query.clear();
        state.sort_field = "email".into();
        assert_eq!(ids(view_rows(&all, &state)), vec!["3", "2", "1"]);

        state.sort_field = "rol".into();
        state.sort_ascending = false;
        assert_eq!(ids(view_rows(&all, &state)), vec!["1", "3", "2"]);
    }
}

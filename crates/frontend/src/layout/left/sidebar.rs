//! Sidebar with collapsible menu groups. Entries the signed-in role may not
//! open are not shown.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::registry::{required_capability, HOME_KEY};
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::system::auth::context::{use_auth, AuthState};
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    id: &'static str,
    label: String,
    icon: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<MenuItem>,
}

fn item(id: &'static str, icon: &'static str) -> MenuItem {
    MenuItem {
        id,
        label: tab_label_for_key(id),
        icon,
    }
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: HOME_KEY,
            label: "Inicio",
            icon: "home",
            items: vec![],
        },
        MenuGroup {
            id: "catalog",
            label: "Catálogo",
            icon: "catalog",
            items: vec![item("a001_product", "products"), item("a002_client", "customers")],
        },
        MenuGroup {
            id: "sales",
            label: "Ventas",
            icon: "sales",
            items: vec![
                item("a003_offer", "offers"),
                item("a004_order", "orders"),
                item("a005_delivery_note", "shipments"),
                item("a006_invoice", "invoices"),
            ],
        },
        MenuGroup {
            id: "administration",
            label: "Administración",
            icon: "shield",
            items: vec![item("sys_users", "users")],
        },
    ]
}

/// Groups trimmed to the entries `state` may open. Groups left without
/// entries disappear; a leaf group stays only if its own key is allowed.
fn visible_groups(state: &AuthState) -> Vec<MenuGroup> {
    get_menu_groups()
        .into_iter()
        .filter_map(|mut group| {
            if group.items.is_empty() {
                return state.can(required_capability(group.id)).then_some(group);
            }
            group.items.retain(|i| state.can(required_capability(i.id)));
            (!group.items.is_empty()).then_some(group)
        })
        .collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    let expanded_groups = RwSignal::new(vec!["catalog".to_string(), "sales".to_string()]);

    view! {
        <div class="app-sidebar__content">
            {move || auth_state.with(visible_groups).into_iter().map(|group| {
                let group_id = group.id.to_string();
                let has_children = !group.items.is_empty();

                let group_id_stored = StoredValue::new(group_id.clone());
                let group_id_for_exp = group_id.clone();
                let group_id_for_click = group_id.clone();
                let group_label = group.label;

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || {
                                let gid = group_id_stored.get_value();
                                !has_children && ctx.active.get().as_ref() == Some(&gid)
                            }
                            style:padding-left="12px"
                            on:click=move |_| {
                                if has_children {
                                    let gid = group_id_for_click.clone();
                                    expanded_groups.update(move |items| {
                                        if let Some(pos) = items.iter().position(|x| x == &gid) {
                                            items.remove(pos);
                                        } else {
                                            items.push(gid);
                                        }
                                    });
                                } else {
                                    ctx.open_tab(group.id, &tab_label_for_key(group.id));
                                }
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group_label}</span>
                            </div>
                            {has_children.then(|| {
                                let gid_exp = group_id_for_exp.clone();
                                view! {
                                    <div
                                        class="app-sidebar__chevron"
                                        class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid_exp)
                                    >
                                        {icon("chevron-right")}
                                    </div>
                                }
                            })}
                        </div>

                        {has_children.then(|| {
                            let gid_show = group_id.clone();
                            let items_stored = StoredValue::new(group.items.clone());
                            view! {
                                <Show when=move || expanded_groups.get().contains(&gid_show)>
                                    <div class="app-sidebar__children">
                                        {items_stored.get_value().into_iter().map(|entry| {
                                            let id = entry.id;
                                            let label = entry.label.clone();
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || {
                                                        ctx.active.get().as_deref() == Some(id)
                                                    }
                                                    style:padding-left="10px"
                                                    on:click=move |_| ctx.open_tab(id, &label)
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(entry.icon)}
                                                        <span>{entry.label}</span>
                                                    </div>
                                                </div>
                                            }
                                        }).collect_view()}
                                    </div>
                                </Show>
                            }
                        })}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::UserProfile;
    use contracts::system::roles::Role;

    fn state(rol: Role) -> AuthState {
        AuthState {
            credential: Some("x.y.z".into()),
            profile: Some(UserProfile {
                employe_id: "1".into(),
                name: "Eva".into(),
                family_name: "Gil".into(),
                email: "eva@example.com".into(),
                rol,
            }),
            ..AuthState::default()
        }
    }

    fn ids(groups: &[MenuGroup]) -> Vec<&'static str> {
        groups
            .iter()
            .flat_map(|g| std::iter::once(g.id).chain(g.items.iter().map(|i| i.id)))
            .collect()
    }

    #[test]
    fn administrator_sees_everything() {
        let groups = visible_groups(&state(Role::Administrator));
        assert_eq!(groups.len(), 4);
        assert!(ids(&groups).contains(&"sys_users"));
    }

    #[test]
    fn unassigned_only_sees_home() {
        let groups = visible_groups(&state(Role::Unassigned));
        assert_eq!(ids(&groups), vec![HOME_KEY]);
    }

    #[test]
    fn staff_never_sees_administration() {
        for rol in [Role::Manager, Role::Commercial, Role::WarehouseManager] {
            let groups = visible_groups(&state(rol));
            assert!(!ids(&groups).contains(&"sys_users"), "{rol}");
            assert!(ids(&groups).contains(&HOME_KEY));
        }
    }
}
